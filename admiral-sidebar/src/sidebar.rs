//! The ordered, id-addressable section list.

use admiral_common::Builder;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::section::{SectionBuilder, SidebarSection};

/// Frozen sidebar state.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sidebar {
    #[serde(default)]
    pub sections: Vec<SidebarSection>,
}

/// Immutable builder over an ordered list of sections, addressed by id.
///
/// ```
/// use admiral_sidebar::SidebarBuilder;
///
/// let sidebar = SidebarBuilder::new()
///     .section("content", |s| s.title("Content").collection("posts"))
///     .section("admin", |s| s.title("Admin").global("settings"))
///     .extend("content", |s| s.collection("pages"))
///     .build();
///
/// assert_eq!(sidebar.sections.len(), 2);
/// assert_eq!(sidebar.sections[0].items.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarBuilder {
    state: Sidebar,
}

impl SidebarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the builder with existing sections, order preserved.
    pub fn from_sections(sections: impl IntoIterator<Item = SidebarSection>) -> Self {
        Self {
            state: Sidebar {
                sections: sections.into_iter().collect(),
            },
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.state.sections.iter().position(|s| s.id == id)
    }

    fn with_sections(&self, f: impl FnOnce(&mut Vec<SidebarSection>)) -> Self {
        let mut sections = self.state.sections.clone();
        f(&mut sections);
        Self {
            state: Sidebar { sections },
        }
    }

    /// Define a section from scratch.
    ///
    /// An existing section with this id is replaced at the same index; any
    /// values it had are discarded. A new id is appended.
    pub fn section<F>(&self, id: &str, f: F) -> Self
    where
        F: FnOnce(SectionBuilder) -> SectionBuilder,
    {
        let built = f(SectionBuilder::new(id)).build();
        match self.position(id) {
            Some(index) => self.with_sections(|sections| sections[index] = built),
            None => self.with_sections(|sections| sections.push(built)),
        }
    }

    /// Define a section from scratch and move it to the front.
    pub fn prepend<F>(&self, id: &str, f: F) -> Self
    where
        F: FnOnce(SectionBuilder) -> SectionBuilder,
    {
        let built = f(SectionBuilder::new(id)).build();
        self.with_sections(|sections| {
            sections.retain(|s| s.id != id);
            sections.insert(0, built);
        })
    }

    /// Define a section from scratch and move it to the back.
    pub fn append<F>(&self, id: &str, f: F) -> Self
    where
        F: FnOnce(SectionBuilder) -> SectionBuilder,
    {
        let built = f(SectionBuilder::new(id)).build();
        self.with_sections(|sections| {
            sections.retain(|s| s.id != id);
            sections.push(built);
        })
    }

    /// Define a section and place it directly before `anchor`.
    ///
    /// Falls back to appending when `anchor` is not present.
    pub fn insert_before<F>(&self, anchor: &str, id: &str, f: F) -> Self
    where
        F: FnOnce(SectionBuilder) -> SectionBuilder,
    {
        self.insert_relative(anchor, id, 0, f)
    }

    /// Define a section and place it directly after `anchor`.
    ///
    /// Falls back to appending when `anchor` is not present.
    pub fn insert_after<F>(&self, anchor: &str, id: &str, f: F) -> Self
    where
        F: FnOnce(SectionBuilder) -> SectionBuilder,
    {
        self.insert_relative(anchor, id, 1, f)
    }

    fn insert_relative<F>(&self, anchor: &str, id: &str, offset: usize, f: F) -> Self
    where
        F: FnOnce(SectionBuilder) -> SectionBuilder,
    {
        let built = f(SectionBuilder::new(id)).build();
        self.with_sections(|sections| {
            sections.retain(|s| s.id != id);
            match sections.iter().position(|s| s.id == anchor) {
                Some(index) => sections.insert(index + offset, built),
                None => {
                    trace!(%anchor, %id, "anchor section missing, appending");
                    sections.push(built);
                }
            }
        })
    }

    /// Amend an existing section, starting from its current values.
    ///
    /// Missing ids are a no-op; this never creates a section.
    pub fn extend<F>(&self, id: &str, f: F) -> Self
    where
        F: FnOnce(SectionBuilder) -> SectionBuilder,
    {
        let Some(index) = self.position(id) else {
            trace!(%id, "extend on missing section ignored");
            return self.clone();
        };
        let seeded = SectionBuilder::from_section(self.state.sections[index].clone());
        let built = f(seeded).build();
        self.with_sections(|sections| sections[index] = built)
    }

    /// Drop a section. Missing ids are a no-op.
    pub fn remove(&self, id: &str) -> Self {
        self.with_sections(|sections| sections.retain(|s| s.id != id))
    }

    /// Append every section of `other` whose id is not already present.
    ///
    /// Colliding sections from `other` are dropped; the receiver's version
    /// stays where it is.
    pub fn merge(&self, other: &SidebarBuilder) -> Self {
        self.with_sections(|sections| {
            for incoming in &other.state.sections {
                if sections.iter().any(|s| s.id == incoming.id) {
                    debug!(id = %incoming.id, "sidebar section already present, keeping local");
                    continue;
                }
                sections.push(incoming.clone());
            }
        })
    }

    /// Apply every section of `other` with the [`section`](Self::section)
    /// rule: an existing id is replaced in place, a new id is appended.
    ///
    /// Unlike [`merge`](Self::merge), incoming sections win.
    pub fn apply(&self, other: &SidebarBuilder) -> Self {
        self.with_sections(|sections| {
            for incoming in &other.state.sections {
                match sections.iter().position(|s| s.id == incoming.id) {
                    Some(index) => sections[index] = incoming.clone(),
                    None => sections.push(incoming.clone()),
                }
            }
        })
    }

    pub fn get(&self, id: &str) -> Option<&SidebarSection> {
        self.state.sections.iter().find(|s| s.id == id)
    }

    /// Section ids in display order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.state.sections.iter().map(|s| s.id.as_str())
    }

    pub fn sections(&self) -> &[SidebarSection] {
        &self.state.sections
    }

    pub fn len(&self) -> usize {
        self.state.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.sections.is_empty()
    }

    pub fn build(&self) -> Sidebar {
        self.state.clone()
    }
}

impl Builder for SidebarBuilder {
    type State = Sidebar;

    fn state(&self) -> &Sidebar {
        &self.state
    }
}

impl From<Sidebar> for SidebarBuilder {
    fn from(state: Sidebar) -> Self {
        Self { state }
    }
}
