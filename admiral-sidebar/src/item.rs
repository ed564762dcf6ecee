//! Sidebar item variants.

use admiral_common::ComponentRef;
use serde::{Deserialize, Serialize};

/// One navigation entry inside a section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SidebarItem {
    Collection {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        icon: Option<ComponentRef>,
    },
    Global {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        icon: Option<ComponentRef>,
    },
    Page {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        icon: Option<ComponentRef>,
    },
    Link {
        label: String,
        href: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        icon: Option<ComponentRef>,
        #[serde(default)]
        external: bool,
    },
    Divider,
}

impl SidebarItem {
    /// Link to a collection's list view
    pub fn collection(name: impl Into<String>) -> Self {
        Self::Collection {
            name: name.into(),
            label: None,
            icon: None,
        }
    }

    /// Link to a global's edit view
    pub fn global(name: impl Into<String>) -> Self {
        Self::Global {
            name: name.into(),
            label: None,
            icon: None,
        }
    }

    /// Link to a registered page
    pub fn page(name: impl Into<String>) -> Self {
        Self::Page {
            name: name.into(),
            label: None,
            icon: None,
        }
    }

    /// Arbitrary hyperlink
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self::Link {
            label: label.into(),
            href: href.into(),
            icon: None,
            external: false,
        }
    }

    pub fn divider() -> Self {
        Self::Divider
    }

    /// Set the display label. Dividers have none and are returned as-is.
    pub fn with_label(mut self, new_label: impl Into<String>) -> Self {
        match &mut self {
            Self::Collection { label, .. } | Self::Global { label, .. } | Self::Page { label, .. } => {
                *label = Some(new_label.into())
            }
            Self::Link { label, .. } => *label = new_label.into(),
            Self::Divider => {}
        }
        self
    }

    /// Set the icon. Dividers have none and are returned as-is.
    pub fn with_icon(mut self, new_icon: impl Into<ComponentRef>) -> Self {
        match &mut self {
            Self::Collection { icon, .. }
            | Self::Global { icon, .. }
            | Self::Page { icon, .. }
            | Self::Link { icon, .. } => *icon = Some(new_icon.into()),
            Self::Divider => {}
        }
        self
    }

    /// Mark a link as external. No effect on other variants.
    pub fn external(mut self) -> Self {
        if let Self::Link { external, .. } = &mut self {
            *external = true;
        }
        self
    }

    /// The variant tag as serialized.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Collection { .. } => "collection",
            Self::Global { .. } => "global",
            Self::Page { .. } => "page",
            Self::Link { .. } => "link",
            Self::Divider => "divider",
        }
    }

    /// The referenced collection/global/page name, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Collection { name, .. } | Self::Global { name, .. } | Self::Page { name, .. } => {
                Some(name)
            }
            Self::Link { .. } | Self::Divider => None,
        }
    }
}
