//! Per-entity builders for collections and globals.
//!
//! An entity builder is bound to a root [`AdminBuilder`] with
//! [`use_module`](EntityBuilder::use_module). The binding supplies the
//! field-type and view registries that the `fields`, `list` and `form`
//! callbacks see through proxies. Without a binding those proxies are
//! empty, so an entity can still be declared field-free or filled in later.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use admiral_common::{
    Builder, ComponentRef, Declared, Options, Registry, RegistryProxy, TokenProxy,
};
use admiral_fields::FieldDefinition;
use admiral_views::{ViewDefinition, ViewKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

use crate::builder::{AdminBuilder, AdminState};

/// Distinguishes collections from globals at the type level.
pub trait EntityKind: Clone + Send + Sync + 'static {
    const LABEL: &'static str;
}

/// Marker for repeatable records (posts, users, orders, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collection;

/// Marker for single-document settings (site settings, footer, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Global;

impl EntityKind for Collection {
    const LABEL: &'static str = "collection";
}

impl EntityKind for Global {
    const LABEL: &'static str = "global";
}

/// Plain state of a collection or global.
///
/// `fields` is keyed by the name the field has *in this entity*; each value
/// is a definition stamped from the field-type registry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EntityConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<ComponentRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Registry<FieldDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form: Option<Value>,
}

pub type CollectionConfig = EntityConfig;
pub type GlobalConfig = EntityConfig;

/// Descriptive metadata, merged key by key across `meta()` calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityMeta {
    pub label: Option<String>,
    pub icon: Option<ComponentRef>,
    pub description: Option<String>,
}

impl EntityMeta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<ComponentRef>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// What a `fields` callback sees: constructors over the field-type registry.
pub struct FieldScope {
    pub r: RegistryProxy<FieldDefinition>,
}

impl FieldScope {
    /// Stamp field type `type_name` under the usage name `name`.
    pub fn field(&self, name: &str, type_name: &str) -> Option<(String, FieldDefinition)> {
        self.r.make(type_name).map(|def| (name.to_string(), def))
    }

    /// Like [`field`](Self::field), layering `options` over the type's own.
    pub fn field_with(
        &self,
        name: &str,
        type_name: &str,
        options: Options,
    ) -> Option<(String, FieldDefinition)> {
        self.r
            .make_with(type_name, options)
            .map(|def| (name.to_string(), def))
    }
}

/// What `list` and `form` callbacks see: tokens for the entity's declared
/// fields and constructors over the matching view registry.
pub struct LayoutScope {
    pub f: TokenProxy,
    pub v: RegistryProxy<ViewDefinition>,
}

/// Immutable builder for a collection or global.
pub struct EntityBuilder<K: EntityKind> {
    state: EntityConfig,
    bound: Option<Arc<AdminState>>,
    kind: PhantomData<K>,
}

pub type CollectionBuilder = EntityBuilder<Collection>;
pub type GlobalBuilder = EntityBuilder<Global>;

impl<K: EntityKind> EntityBuilder<K> {
    /// An unbound builder for `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            state: EntityConfig {
                name: name.into(),
                ..EntityConfig::default()
            },
            bound: None,
            kind: PhantomData,
        }
    }

    fn map(&self, f: impl FnOnce(&mut EntityConfig)) -> Self {
        let mut state = self.state.clone();
        f(&mut state);
        Self {
            state,
            bound: self.bound.clone(),
            kind: PhantomData,
        }
    }

    /// Bind the registries of `module`. Replaces any previous binding.
    pub fn use_module(&self, module: &AdminBuilder) -> Self {
        Self {
            state: self.state.clone(),
            bound: Some(module.shared_state()),
            kind: PhantomData,
        }
    }

    /// Whether registries are bound.
    pub fn is_bound(&self) -> bool {
        self.bound.is_some()
    }

    /// Merge descriptive metadata; only keys set on `meta` change.
    pub fn meta(&self, meta: EntityMeta) -> Self {
        self.map(|s| {
            if let Some(label) = meta.label {
                s.label = Some(label);
            }
            if let Some(icon) = meta.icon {
                s.icon = Some(icon);
            }
            if let Some(description) = meta.description {
                s.description = Some(description);
            }
        })
    }

    /// Declare the entity's fields, replacing any previous declaration.
    ///
    /// ```
    /// use admiral::{AdminBuilder, Builder, FieldBuilder};
    ///
    /// let root = AdminBuilder::new().fields([("text", FieldBuilder::new("text", "TextInput"))]);
    /// let posts = root
    ///     .collection("posts")
    ///     .fields(|s| [s.field("title", "text"), s.field("slug", "text")].into_iter().flatten());
    ///
    /// assert_eq!(posts.state().fields["title"].name, "text");
    /// ```
    pub fn fields<F, I, N>(&self, f: F) -> Self
    where
        F: FnOnce(&FieldScope) -> I,
        I: IntoIterator<Item = (N, FieldDefinition)>,
        N: Into<String>,
    {
        let scope = FieldScope {
            r: self.field_proxy(),
        };
        let fields: Registry<FieldDefinition> = f(&scope)
            .into_iter()
            .map(|(name, def)| (name.into(), def))
            .collect();
        trace!(entity = %self.state.name, kind = K::LABEL, count = fields.len(), "fields declared");
        self.map(|s| s.fields = fields)
    }

    /// Declare the list layout. `v` draws from the list-view registry.
    pub fn list<F>(&self, f: F) -> Self
    where
        F: FnOnce(&LayoutScope) -> Value,
    {
        let scope = LayoutScope {
            f: self.token_proxy(),
            v: self.view_proxy(ViewKind::List),
        };
        let list = f(&scope);
        self.map(|s| s.list = Some(list))
    }

    /// Declare the form layout. `v` draws from the edit-view registry.
    pub fn form<F>(&self, f: F) -> Self
    where
        F: FnOnce(&LayoutScope) -> Value,
    {
        let scope = LayoutScope {
            f: self.token_proxy(),
            v: self.view_proxy(ViewKind::Edit),
        };
        let form = f(&scope);
        self.map(|s| s.form = Some(form))
    }

    pub fn name(&self) -> &str {
        &self.state.name
    }

    pub fn build(&self) -> EntityConfig {
        self.state.clone()
    }

    fn field_proxy(&self) -> RegistryProxy<FieldDefinition> {
        match &self.bound {
            Some(root) => {
                RegistryProxy::from_entries(root.fields.iter().map(|(k, v)| (k, v.state())))
            }
            None => RegistryProxy::empty(),
        }
    }

    fn view_proxy(&self, kind: ViewKind) -> RegistryProxy<ViewDefinition> {
        let Some(root) = &self.bound else {
            return RegistryProxy::empty();
        };
        let registry = match kind {
            ViewKind::List => &root.list_views,
            ViewKind::Edit => &root.edit_views,
        };
        RegistryProxy::from_entries(registry.iter().map(|(k, v)| (k, v.state())))
    }

    fn token_proxy(&self) -> TokenProxy {
        TokenProxy::from_keys(self.state.fields.keys())
    }
}

impl<K: EntityKind> Clone for EntityBuilder<K> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            bound: self.bound.clone(),
            kind: PhantomData,
        }
    }
}

impl<K: EntityKind> fmt::Debug for EntityBuilder<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityBuilder")
            .field("kind", &K::LABEL)
            .field("state", &self.state)
            .field("bound", &self.bound.is_some())
            .finish()
    }
}

impl<K: EntityKind> Builder for EntityBuilder<K> {
    type State = EntityConfig;

    fn state(&self) -> &EntityConfig {
        &self.state
    }
}

impl<K: EntityKind> From<EntityBuilder<K>> for Declared<EntityBuilder<K>> {
    fn from(builder: EntityBuilder<K>) -> Self {
        Declared::Builder(builder)
    }
}

impl<K: EntityKind> From<EntityConfig> for Declared<EntityBuilder<K>> {
    fn from(config: EntityConfig) -> Self {
        Declared::Plain(config)
    }
}
