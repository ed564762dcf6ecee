//! Read-only runtime view over a finished descriptor.
//!
//! This is what the rendering layer receives. Every accessor resolves
//! bucket entries to their plain state, so it makes no difference whether a
//! module registered a finished definition or the builder that produced it.

use std::borrow::Cow;
use std::sync::Arc;

use admiral_common::{AdmiralError, Builder, Declared, Pretty, Registry, RegistryProxy, Result};
use admiral_fields::FieldDefinition;
use admiral_sidebar::SidebarSection;
use admiral_views::{PageDefinition, ViewDefinition, ViewKind, WidgetDefinition};
use serde_json::Value;
use tracing::{debug, trace};

use crate::builder::AdminState;
use crate::entity::EntityConfig;
use crate::presentation::{locale_label, Branding, Dashboard, LocaleConfig};

fn resolved<B: Builder>(
    registry: &Registry<Declared<B>>,
) -> impl Iterator<Item = (&str, &B::State)> {
    registry.iter().map(|(name, entry)| (name.as_str(), entry.state()))
}

/// Frozen admin descriptor.
#[derive(Debug, Clone)]
pub struct Admin {
    state: Arc<AdminState>,
}

impl Admin {
    pub(crate) fn new(state: Arc<AdminState>) -> Self {
        debug!(
            fields = state.fields.len(),
            collections = state.collections.len(),
            globals = state.globals.len(),
            sections = state.sidebar.sections.len(),
            "admin descriptor frozen"
        );
        Self { state }
    }

    // --- Registries ---

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldDefinition)> {
        resolved(&self.state.fields)
    }

    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.state.fields.get(name).map(Declared::state)
    }

    pub fn list_views(&self) -> impl Iterator<Item = (&str, &ViewDefinition)> {
        resolved(&self.state.list_views)
    }

    pub fn list_view(&self, name: &str) -> Option<&ViewDefinition> {
        self.state.list_views.get(name).map(Declared::state)
    }

    pub fn edit_views(&self) -> impl Iterator<Item = (&str, &ViewDefinition)> {
        resolved(&self.state.edit_views)
    }

    pub fn edit_view(&self, name: &str) -> Option<&ViewDefinition> {
        self.state.edit_views.get(name).map(Declared::state)
    }

    pub fn widgets(&self) -> impl Iterator<Item = (&str, &WidgetDefinition)> {
        resolved(&self.state.widgets)
    }

    pub fn widget(&self, name: &str) -> Option<&WidgetDefinition> {
        self.state.widgets.get(name).map(Declared::state)
    }

    pub fn pages(&self) -> impl Iterator<Item = (&str, &PageDefinition)> {
        resolved(&self.state.pages)
    }

    pub fn page(&self, name: &str) -> Option<&PageDefinition> {
        self.state.pages.get(name).map(Declared::state)
    }

    // --- Entities ---

    pub fn collections(&self) -> impl Iterator<Item = (&str, &EntityConfig)> {
        resolved(&self.state.collections)
    }

    pub fn collection(&self, name: &str) -> Option<&EntityConfig> {
        self.state.collections.get(name).map(Declared::state)
    }

    /// Like [`collection`](Self::collection) but fails with `NotFound`.
    pub fn require_collection(&self, name: &str) -> Result<&EntityConfig> {
        self.collection(name)
            .ok_or_else(|| AdmiralError::not_found("collection", name))
    }

    pub fn globals(&self) -> impl Iterator<Item = (&str, &EntityConfig)> {
        resolved(&self.state.globals)
    }

    pub fn global(&self, name: &str) -> Option<&EntityConfig> {
        self.state.globals.get(name).map(Declared::state)
    }

    pub fn require_global(&self, name: &str) -> Result<&EntityConfig> {
        self.global(name)
            .ok_or_else(|| AdmiralError::not_found("global", name))
    }

    // --- Presentation ---

    pub fn sidebar(&self) -> &[SidebarSection] {
        &self.state.sidebar.sections
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.state.dashboard
    }

    /// Dashboard entries resolved against the widget registry.
    ///
    /// Each entry's config is layered over the widget's own. Entries naming
    /// an unregistered widget are skipped.
    pub fn dashboard_widgets(&self) -> Vec<WidgetDefinition> {
        let proxy = RegistryProxy::from_entries(
            self.state.widgets.iter().map(|(k, v)| (k, v.state())),
        );
        self.state
            .dashboard
            .widgets
            .iter()
            .filter_map(|placed| {
                let resolved = proxy.make_with(&placed.widget, placed.config.clone());
                if resolved.is_none() {
                    trace!(widget = %placed.widget, "dashboard references unknown widget");
                }
                resolved
            })
            .collect()
    }

    pub fn branding(&self) -> &Branding {
        &self.state.branding
    }

    pub fn locale(&self) -> &LocaleConfig {
        &self.state.locale
    }

    pub fn default_views(&self) -> impl Iterator<Item = (&str, &str)> {
        self.state
            .default_views
            .iter()
            .map(|(kind, view)| (kind.as_str(), view.as_str()))
    }

    /// The view configured as default for `kind`, if it is registered.
    pub fn default_view(&self, kind: ViewKind) -> Option<&ViewDefinition> {
        let name = self.state.default_views.get(kind.as_str())?;
        match kind {
            ViewKind::List => self.list_view(name),
            ViewKind::Edit => self.edit_view(name),
        }
    }

    /// Human label for a locale code.
    pub fn locale_label(&self, code: &str) -> Cow<'static, str> {
        locale_label(code)
    }

    /// The resolved descriptor as JSON, for hand-off to a renderer.
    pub fn to_json(&self) -> Result<Value> {
        let value = serde_json::to_value(self.state.as_ref())?;
        trace!("admin descriptor: {}", Pretty(&value));
        Ok(value)
    }
}
