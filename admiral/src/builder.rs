//! The root builder that aggregates every descriptor bucket.
//!
//! Bucket policies differ on purpose:
//!
//! | Bucket                                   | Setter          | `use_module`        |
//! |------------------------------------------|-----------------|---------------------|
//! | fields, views, widgets, pages, entities  | merge by key    | merge by key        |
//! | sidebar sections                         | id rule         | local wins on id    |
//! | default views                            | merge by key    | untouched           |
//! | locale                                   | merge per key   | untouched           |
//! | dashboard, branding                      | replace whole   | untouched           |
//!
//! Importing a module therefore never changes the host's presentation.

use std::sync::Arc;

use admiral_common::{merge_by_key, replace_whole, Declared, Keys, Pretty, Registry};
use admiral_fields::FieldBuilder;
use admiral_sidebar::{Sidebar, SidebarBuilder};
use admiral_views::{PageBuilder, ViewBuilder, ViewKind, WidgetBuilder};
use serde::Serialize;
use tracing::{debug, trace};

use crate::admin::Admin;
use crate::entity::{CollectionBuilder, GlobalBuilder};
use crate::presentation::{Branding, Dashboard, LocaleConfig, PresentationConfig};

/// Every bucket of an admin descriptor.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AdminState {
    pub fields: Registry<Declared<FieldBuilder>>,
    pub list_views: Registry<Declared<ViewBuilder>>,
    pub edit_views: Registry<Declared<ViewBuilder>>,
    pub widgets: Registry<Declared<WidgetBuilder>>,
    pub pages: Registry<Declared<PageBuilder>>,
    pub collections: Registry<Declared<CollectionBuilder>>,
    pub globals: Registry<Declared<GlobalBuilder>>,
    pub sidebar: Sidebar,
    pub dashboard: Dashboard,
    pub branding: Branding,
    pub locale: LocaleConfig,
    pub default_views: Registry<String>,
}

fn collect<I, K, V, T>(entries: I) -> Registry<T>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<T>,
{
    entries
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// Merge routed views into both buckets, dropping each incoming name from
/// the other bucket so a view lives under exactly one kind.
fn merge_views(
    state: &mut AdminState,
    list: Registry<Declared<ViewBuilder>>,
    edit: Registry<Declared<ViewBuilder>>,
) {
    for name in list.keys() {
        if state.edit_views.shift_remove(name).is_some() {
            trace!(view = %name, "view moved from edit to list");
        }
    }
    for name in edit.keys() {
        if state.list_views.shift_remove(name).is_some() {
            trace!(view = %name, "view moved from list to edit");
        }
    }
    state.list_views = merge_by_key(std::mem::take(&mut state.list_views), list);
    state.edit_views = merge_by_key(std::mem::take(&mut state.edit_views), edit);
}

/// Immutable root builder.
///
/// Every method returns a new builder sharing nothing mutable with the
/// receiver; the receiver's state is never modified.
///
/// ```
/// use admiral::{AdminBuilder, Branding, FieldBuilder, ViewBuilder};
///
/// let blog = AdminBuilder::new()
///     .fields([("text", FieldBuilder::new("text", "TextInput"))])
///     .views([("table", ViewBuilder::list("table", "DataTable"))]);
///
/// let app = AdminBuilder::new()
///     .branding(Branding::named("Acme"))
///     .use_module(&blog)
///     .build();
///
/// assert!(app.field("text").is_some());
/// assert_eq!(app.branding().name.as_deref(), Some("Acme"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AdminBuilder {
    state: Arc<AdminState>,
}

impl AdminBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn map(&self, f: impl FnOnce(&mut AdminState)) -> Self {
        let mut state = AdminState::clone(&self.state);
        f(&mut state);
        Self {
            state: Arc::new(state),
        }
    }

    /// Borrow the current state.
    pub fn state(&self) -> &AdminState {
        &self.state
    }

    /// A shared handle to the current state, used for entity binding.
    pub(crate) fn shared_state(&self) -> Arc<AdminState> {
        Arc::clone(&self.state)
    }

    /// Register field types. Existing names are overridden.
    pub fn fields<I, K, V>(&self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Declared<FieldBuilder>>,
    {
        let incoming: Registry<Declared<FieldBuilder>> = collect(fields);
        self.map(|s| s.fields = merge_by_key(std::mem::take(&mut s.fields), incoming))
    }

    /// Register views, routed to the list or edit bucket by their kind.
    pub fn views<I, K, V>(&self, views: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Declared<ViewBuilder>>,
    {
        let mut list = Registry::new();
        let mut edit = Registry::new();
        for (name, view) in views {
            let name: String = name.into();
            let view: Declared<ViewBuilder> = view.into();
            let kind = view.state().kind;
            trace!(view = %name, %kind, "routing view");
            match kind {
                ViewKind::List => {
                    edit.shift_remove(&name);
                    list.insert(name, view);
                }
                ViewKind::Edit => {
                    list.shift_remove(&name);
                    edit.insert(name, view);
                }
            }
        }
        self.map(|s| merge_views(s, list, edit))
    }

    pub fn widgets<I, K, V>(&self, widgets: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Declared<WidgetBuilder>>,
    {
        let incoming: Registry<Declared<WidgetBuilder>> = collect(widgets);
        self.map(|s| s.widgets = merge_by_key(std::mem::take(&mut s.widgets), incoming))
    }

    pub fn pages<I, K, V>(&self, pages: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Declared<PageBuilder>>,
    {
        let incoming: Registry<Declared<PageBuilder>> = collect(pages);
        self.map(|s| s.pages = merge_by_key(std::mem::take(&mut s.pages), incoming))
    }

    pub fn collections<I, K, V>(&self, collections: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Declared<CollectionBuilder>>,
    {
        let incoming: Registry<Declared<CollectionBuilder>> = collect(collections);
        self.map(|s| s.collections = merge_by_key(std::mem::take(&mut s.collections), incoming))
    }

    pub fn globals<I, K, V>(&self, globals: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Declared<GlobalBuilder>>,
    {
        let incoming: Registry<Declared<GlobalBuilder>> = collect(globals);
        self.map(|s| s.globals = merge_by_key(std::mem::take(&mut s.globals), incoming))
    }

    /// Map view kinds (`"list"`, `"edit"`) to the view used by default.
    pub fn default_views<I, K, V>(&self, defaults: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let incoming: Registry<String> = collect(defaults);
        self.map(|s| s.default_views = merge_by_key(std::mem::take(&mut s.default_views), incoming))
    }

    /// Replace the dashboard wholesale.
    pub fn dashboard(&self, dashboard: Dashboard) -> Self {
        self.map(|s| s.dashboard = replace_whole(std::mem::take(&mut s.dashboard), dashboard))
    }

    /// Replace branding wholesale; nothing from a previous call survives.
    pub fn branding(&self, branding: Branding) -> Self {
        self.map(|s| s.branding = replace_whole(std::mem::take(&mut s.branding), branding))
    }

    /// Merge locale settings key by key.
    pub fn locale(&self, locale: LocaleConfig) -> Self {
        self.map(|s| s.locale = s.locale.merge(locale))
    }

    /// Edit the sidebar through a builder seeded with the current sections.
    ///
    /// `section()` inside the callback replaces an existing id in place and
    /// appends a new one. The callback's result becomes the section list, so
    /// `remove()` and the reposition operations take effect. To fold in a
    /// sidebar built elsewhere use [`sidebar_sections`](Self::sidebar_sections).
    pub fn sidebar<F>(&self, f: F) -> Self
    where
        F: FnOnce(SidebarBuilder) -> SidebarBuilder,
    {
        let sidebar = f(SidebarBuilder::from(self.state.sidebar.clone())).build();
        self.map(|s| s.sidebar = sidebar)
    }

    /// Fold sections built elsewhere into the current sidebar by id:
    /// existing ids are replaced in place, new ids are appended.
    pub fn sidebar_sections(&self, sections: &SidebarBuilder) -> Self {
        let ids: Vec<&str> = sections.ids().collect();
        trace!(ids = %Keys(&ids), "applying sidebar sections");
        let sidebar = SidebarBuilder::from(self.state.sidebar.clone())
            .apply(sections)
            .build();
        self.map(|s| s.sidebar = sidebar)
    }

    /// Apply a presentation document with the same policies as the
    /// individual setters.
    pub fn presentation(&self, config: PresentationConfig) -> Self {
        trace!("applying presentation config: {}", Pretty(&config));
        let mut next = self.clone();
        if let Some(branding) = config.branding {
            next = next.branding(branding);
        }
        if let Some(dashboard) = config.dashboard {
            next = next.dashboard(dashboard);
        }
        if let Some(locale) = config.locale {
            next = next.locale(locale);
        }
        if !config.default_views.is_empty() {
            next = next.default_views(config.default_views);
        }
        next
    }

    /// Combine another module into this one.
    ///
    /// Registries merge key by key with `other` winning; sidebar sections
    /// from `other` are added only when their id is new. Dashboard,
    /// branding, locale and default views stay as they are.
    pub fn use_module(&self, other: &AdminBuilder) -> Self {
        let incoming = other.state();
        let shadowed: Vec<&str> = incoming
            .fields
            .keys()
            .filter(|k| self.state.fields.contains_key(*k))
            .map(String::as_str)
            .collect();
        debug!(
            fields = incoming.fields.len(),
            list_views = incoming.list_views.len(),
            edit_views = incoming.edit_views.len(),
            widgets = incoming.widgets.len(),
            pages = incoming.pages.len(),
            collections = incoming.collections.len(),
            globals = incoming.globals.len(),
            sections = incoming.sidebar.sections.len(),
            "using module"
        );
        if !shadowed.is_empty() {
            debug!(keys = %Keys(&shadowed), "module overrides field types");
        }

        self.map(|s| {
            s.fields = merge_by_key(std::mem::take(&mut s.fields), incoming.fields.clone());
            merge_views(s, incoming.list_views.clone(), incoming.edit_views.clone());
            s.widgets = merge_by_key(std::mem::take(&mut s.widgets), incoming.widgets.clone());
            s.pages = merge_by_key(std::mem::take(&mut s.pages), incoming.pages.clone());
            s.collections =
                merge_by_key(std::mem::take(&mut s.collections), incoming.collections.clone());
            s.globals = merge_by_key(std::mem::take(&mut s.globals), incoming.globals.clone());
            s.sidebar = SidebarBuilder::from(std::mem::take(&mut s.sidebar))
                .merge(&SidebarBuilder::from(incoming.sidebar.clone()))
                .build();
        })
    }

    /// A collection builder bound to this root's registries.
    pub fn collection(&self, name: impl Into<String>) -> CollectionBuilder {
        CollectionBuilder::new(name).use_module(self)
    }

    /// A global builder bound to this root's registries.
    pub fn global(&self, name: impl Into<String>) -> GlobalBuilder {
        GlobalBuilder::new(name).use_module(self)
    }

    /// Freeze into the read-only runtime view.
    pub fn build(&self) -> Admin {
        Admin::new(self.shared_state())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use admiral_common::Builder;
    use serde_json::json;

    fn text(component: &str) -> FieldBuilder {
        FieldBuilder::new("text", component)
    }

    #[test]
    fn fields_last_write_wins() {
        let f1 = text("TextV1");
        let f2 = text("TextV2");
        let root = AdminBuilder::new()
            .fields([("a", f1)])
            .fields([("a", f2.clone())]);
        assert_eq!(root.state().fields["a"].state(), f2.state());
    }

    #[test]
    fn setters_do_not_mutate_receiver() {
        let base = AdminBuilder::new().fields([("a", text("A"))]);
        let next = base.fields([("b", text("B"))]);
        assert_eq!(base.state().fields.len(), 1);
        assert_eq!(next.state().fields.len(), 2);
        assert!(!Arc::ptr_eq(&base.state, &next.state));
    }

    #[test]
    fn every_setter_leaves_receiver_unchanged() {
        let base = AdminBuilder::new()
            .fields([("a", text("A"))])
            .views([("t", ViewBuilder::list("t", "Table"))])
            .sidebar(|s| s.section("home", |x| x.title("Home")))
            .branding(Branding::named("Base"));
        let before = serde_json::to_value(base.state()).unwrap();
        let module = AdminBuilder::new()
            .fields([("a", text("Other")), ("b", text("B"))])
            .views([("t", ViewBuilder::edit("t", "Form"))])
            .sidebar(|s| s.section("extra", |x| x));

        let _ = base.use_module(&module);
        let _ = base.views([("e", ViewBuilder::edit("e", "Form"))]);
        let _ = base.sidebar(|s| s.remove("home").section("other", |x| x));
        let _ = base.sidebar_sections(&SidebarBuilder::new().section("home", |x| x));
        let _ = base.branding(Branding::named("Changed"));

        assert_eq!(serde_json::to_value(base.state()).unwrap(), before);
    }

    #[test]
    fn views_demultiplex_by_kind() {
        let root = AdminBuilder::new().views([
            ("t", ViewBuilder::list("t", "Table")),
            ("e", ViewBuilder::edit("e", "Form")),
        ]);
        let state = root.state();
        assert!(state.list_views.contains_key("t"));
        assert!(!state.edit_views.contains_key("t"));
        assert!(state.edit_views.contains_key("e"));
        assert!(!state.list_views.contains_key("e"));
    }

    #[test]
    fn reregistering_a_view_moves_it_between_buckets() {
        let root = AdminBuilder::new()
            .views([("t", ViewBuilder::list("t", "Table"))])
            .views([("t", ViewBuilder::edit("t", "Form"))]);
        let state = root.state();
        assert!(!state.list_views.contains_key("t"));
        assert_eq!(state.edit_views["t"].state().component.as_str(), "Form");

        let same_call = AdminBuilder::new().views([
            ("x", ViewBuilder::list("x", "Table")),
            ("x", ViewBuilder::edit("x", "Form")),
        ]);
        assert!(!same_call.state().list_views.contains_key("x"));
        assert!(same_call.state().edit_views.contains_key("x"));

        let back = root.views([("t", ViewBuilder::list("t", "Grid"))]);
        assert!(back.state().list_views.contains_key("t"));
        assert!(!back.state().edit_views.contains_key("t"));
    }

    #[test]
    fn use_module_keeps_view_buckets_disjoint() {
        let host = AdminBuilder::new().views([("t", ViewBuilder::list("t", "Table"))]);
        let module = AdminBuilder::new().views([("t", ViewBuilder::edit("t", "Form"))]);
        let state = host.use_module(&module);
        let state = state.state();
        assert!(!state.list_views.contains_key("t"));
        assert!(state.edit_views.contains_key("t"));
        assert!(state
            .list_views
            .keys()
            .all(|k| !state.edit_views.contains_key(k)));
    }

    #[test]
    fn sidebar_sections_fold_by_id() {
        let prebuilt = SidebarBuilder::new()
            .section("b", |x| x.title("B"))
            .section("a", |x| x.title("A2"));
        let root = AdminBuilder::new()
            .sidebar(|s| s.section("a", |x| x.title("A")).section("c", |x| x))
            .sidebar_sections(&prebuilt);
        let sections = &root.state().sidebar.sections;
        let ids: Vec<&str> = sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c", "b"]);
        assert_eq!(sections[0].title.as_deref(), Some("A2"));
    }

    #[test]
    fn branding_and_dashboard_replace() {
        let root = AdminBuilder::new()
            .branding(Branding::named("A").with_logo("LogoA"))
            .branding(Branding::named("B"))
            .dashboard(Dashboard::titled("One"))
            .dashboard(Dashboard::default());
        assert_eq!(root.state().branding.name.as_deref(), Some("B"));
        assert!(root.state().branding.logo.is_none());
        assert!(root.state().dashboard.title.is_none());
    }

    #[test]
    fn locale_merges_per_key() {
        let root = AdminBuilder::new()
            .locale(LocaleConfig::default().with_default("en").with_fallback("en"))
            .locale(LocaleConfig::default().with_default("fr"));
        assert_eq!(root.state().locale.default.as_deref(), Some("fr"));
        assert_eq!(root.state().locale.fallback.as_deref(), Some("en"));
    }

    #[test]
    fn default_views_merge() {
        let root = AdminBuilder::new()
            .default_views([("list", "table"), ("edit", "form")])
            .default_views([("list", "grid")]);
        assert_eq!(root.state().default_views["list"], "grid");
        assert_eq!(root.state().default_views["edit"], "form");
    }

    #[test]
    fn use_module_incoming_registries_win() {
        let m1 = AdminBuilder::new().fields([("x", text("FromM1"))]);
        let m2 = AdminBuilder::new().fields([("x", text("FromM2"))]);
        let root = AdminBuilder::new().use_module(&m1).use_module(&m2);
        assert_eq!(root.state().fields["x"].state().component.as_str(), "FromM2");
    }

    #[test]
    fn use_module_leaves_presentation_alone() {
        let module = AdminBuilder::new()
            .branding(Branding::named("B"))
            .dashboard(Dashboard::titled("Module"))
            .locale(LocaleConfig::default().with_default("de"))
            .default_views([("list", "module-table")]);
        let host = AdminBuilder::new()
            .branding(Branding::named("A"))
            .use_module(&module);
        let state = host.state();
        assert_eq!(state.branding.name.as_deref(), Some("A"));
        assert!(state.dashboard.title.is_none());
        assert!(state.locale.default.is_none());
        assert!(state.default_views.is_empty());
    }

    #[test]
    fn use_module_merges_every_registry() {
        let module = AdminBuilder::new()
            .views([
                ("board", ViewBuilder::list("board", "Kanban")),
                ("wizard", ViewBuilder::edit("wizard", "Wizard")),
            ])
            .widgets([("stats", WidgetBuilder::new("stats", "Stats"))])
            .pages([("reports", PageBuilder::new("reports", "Reports"))])
            .collections([("posts", CollectionBuilder::new("posts"))])
            .globals([("settings", GlobalBuilder::new("settings"))]);
        let state = AdminBuilder::new().use_module(&module);
        let state = state.state();
        assert!(state.list_views.contains_key("board"));
        assert!(state.edit_views.contains_key("wizard"));
        assert!(state.widgets.contains_key("stats"));
        assert!(state.pages.contains_key("reports"));
        assert!(state.collections.contains_key("posts"));
        assert!(state.globals.contains_key("settings"));
    }

    #[test]
    fn sidebar_section_replaces_in_place() {
        let root = AdminBuilder::new()
            .sidebar(|s| s.section("a", |x| x.title("A")).section("b", |x| x.title("B")))
            .sidebar(|s| s.section("a", |x| x.title("A2")).section("c", |x| x));
        let ids: Vec<&str> = root
            .state()
            .sidebar
            .sections
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(root.state().sidebar.sections[0].title.as_deref(), Some("A2"));
    }

    #[test]
    fn use_module_sidebar_keeps_local_sections() {
        let m1 = AdminBuilder::new().sidebar(|s| s.section("s", |x| x.title("from m1")));
        let m2 = AdminBuilder::new().sidebar(|s| {
            s.section("s", |x| x.title("from m2"))
                .section("t", |x| x.title("T"))
        });
        let root = AdminBuilder::new()
            .sidebar(|s| s.section("home", |x| x))
            .use_module(&m1)
            .use_module(&m2);
        let sections = &root.state().sidebar.sections;
        let ids: Vec<&str> = sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["home", "s", "t"]);
        assert_eq!(sections[1].title.as_deref(), Some("from m1"));
    }

    #[test]
    fn entity_builders_are_prebound() {
        let root = AdminBuilder::new().fields([("text", text("TextInput"))]);
        let posts = root.collection("posts");
        let settings = root.global("settings");
        assert!(posts.is_bound());
        assert!(settings.is_bound());
        let posts = posts.fields(|s| s.field("title", "text"));
        assert_eq!(posts.state().fields["title"].name, "text");
    }

    #[test]
    fn entity_binding_is_a_snapshot() {
        let root = AdminBuilder::new();
        let posts = root.collection("posts");
        // fields registered after binding are not visible to the earlier builder
        let _later = root.fields([("text", text("TextInput"))]);
        let posts = posts.fields(|s| s.field("title", "text"));
        assert!(posts.state().fields.is_empty());
    }

    #[test]
    fn presentation_applies_setter_policies() {
        let config = PresentationConfig::from_json_str(
            r#"{
                "branding": {"name": "Config"},
                "locale": {"available": ["en", "fr"]},
                "default_views": {"edit": "form"}
            }"#,
        )
        .unwrap();
        let root = AdminBuilder::new()
            .branding(Branding::named("Code").with_accent("#000"))
            .locale(LocaleConfig::default().with_default("en"))
            .presentation(config);
        let state = root.state();
        assert_eq!(state.branding.name.as_deref(), Some("Config"));
        assert!(state.branding.accent.is_none());
        assert_eq!(state.locale.default.as_deref(), Some("en"));
        assert_eq!(state.locale.available.as_ref().map(Vec::len), Some(2));
        assert_eq!(state.default_views["edit"], "form");
    }

    #[test]
    fn state_serializes_builders_as_plain_values() {
        let root = AdminBuilder::new()
            .fields([("text", text("TextInput"))])
            .collections([("posts", CollectionBuilder::new("posts"))]);
        let value = serde_json::to_value(root.state()).unwrap();
        assert_eq!(value["fields"]["text"]["component"], json!("TextInput"));
        assert_eq!(value["collections"]["posts"]["name"], json!("posts"));
    }
}
