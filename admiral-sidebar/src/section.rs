//! A single sidebar section and its builder.

use admiral_common::{Builder, ComponentRef};
use serde::{Deserialize, Serialize};

use crate::item::SidebarItem;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SidebarSection {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<ComponentRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    #[serde(default)]
    pub items: Vec<SidebarItem>,
}

impl SidebarSection {
    /// An empty section: no title, icon, collapse state or items.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            icon: None,
            collapsed: None,
            items: Vec::new(),
        }
    }
}

/// Immutable builder for a [`SidebarSection`]. The id is fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionBuilder {
    state: SidebarSection,
}

impl SectionBuilder {
    /// Start from an empty section.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            state: SidebarSection::new(id),
        }
    }

    /// Start from an existing section's values.
    pub fn from_section(section: SidebarSection) -> Self {
        Self { state: section }
    }

    fn map(&self, f: impl FnOnce(&mut SidebarSection)) -> Self {
        let mut state = self.state.clone();
        f(&mut state);
        Self { state }
    }

    pub fn title(&self, title: impl Into<String>) -> Self {
        let title = title.into();
        self.map(|s| s.title = Some(title))
    }

    pub fn icon(&self, icon: impl Into<ComponentRef>) -> Self {
        let icon = icon.into();
        self.map(|s| s.icon = Some(icon))
    }

    pub fn collapsed(&self, collapsed: bool) -> Self {
        self.map(|s| s.collapsed = Some(collapsed))
    }

    /// Replace all items.
    pub fn items(&self, items: impl IntoIterator<Item = SidebarItem>) -> Self {
        let items: Vec<_> = items.into_iter().collect();
        self.map(|s| s.items = items)
    }

    /// Append items after the existing ones.
    pub fn add_items(&self, items: impl IntoIterator<Item = SidebarItem>) -> Self {
        self.map(|s| s.items.extend(items))
    }

    /// Insert items before the existing ones, keeping their given order.
    pub fn prepend_items(&self, items: impl IntoIterator<Item = SidebarItem>) -> Self {
        self.map(|s| {
            let mut merged: Vec<_> = items.into_iter().collect();
            merged.append(&mut s.items);
            s.items = merged;
        })
    }

    /// Append one item.
    pub fn item(&self, item: SidebarItem) -> Self {
        self.map(|s| s.items.push(item))
    }

    pub fn collection(&self, name: impl Into<String>) -> Self {
        self.item(SidebarItem::collection(name))
    }

    pub fn global(&self, name: impl Into<String>) -> Self {
        self.item(SidebarItem::global(name))
    }

    pub fn page(&self, name: impl Into<String>) -> Self {
        self.item(SidebarItem::page(name))
    }

    pub fn link(&self, label: impl Into<String>, href: impl Into<String>) -> Self {
        self.item(SidebarItem::link(label, href))
    }

    pub fn divider(&self) -> Self {
        self.item(SidebarItem::divider())
    }

    pub fn id(&self) -> &str {
        &self.state.id
    }

    pub fn build(&self) -> SidebarSection {
        self.state.clone()
    }
}

impl Builder for SectionBuilder {
    type State = SidebarSection;

    fn state(&self) -> &SidebarSection {
        &self.state
    }
}
