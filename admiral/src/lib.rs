//! Typed admin-descriptor composition
//!
//! `admiral` assembles the descriptor an admin UI renders from: field types,
//! list and edit views, dashboard widgets, pages, collections, globals, a
//! sidebar and host presentation settings. Independently authored modules
//! are combined into one root, and the root is frozen into an [`Admin`].
//!
//! # Architecture
//!
//! - **Immutable builders**: every setter returns a new value; nothing is
//!   shared mutably between a builder and the ones derived from it
//! - **Two merge policies**: registries merge by key (incoming wins), while
//!   branding and dashboard are replaced wholesale
//! - **Presentation stays with the host**: [`AdminBuilder::use_module`]
//!   combines registries and sidebar sections, never branding, dashboard,
//!   locale or default views
//! - **Name-based references**: entity builders see the root's registries
//!   through proxies, so layouts refer to fields and views by name
//!
//! ```
//! use admiral::{AdminBuilder, Branding, FieldBuilder, ViewBuilder};
//! use serde_json::json;
//!
//! let blog = AdminBuilder::new()
//!     .fields([("text", FieldBuilder::new("text", "TextInput"))])
//!     .views([("table", ViewBuilder::list("table", "DataTable"))]);
//! let blog = blog.collections([(
//!     "posts",
//!     blog.collection("posts")
//!         .fields(|s| s.field("title", "text"))
//!         .list(|l| json!({ "view": l.v.make("table").map(|v| v.name), "columns": [l.f.get("title")] })),
//! )]);
//!
//! let admin = AdminBuilder::new()
//!     .branding(Branding::named("Acme"))
//!     .use_module(&blog)
//!     .sidebar(|s| s.section("content", |x| x.title("Content").collection("posts")))
//!     .build();
//!
//! let posts = admin.require_collection("posts").unwrap();
//! assert_eq!(posts.list.as_ref().unwrap()["columns"], json!(["title"]));
//! ```

pub mod admin;
pub mod builder;
pub mod entity;
pub mod presentation;

pub use admin::Admin;
pub use builder::{AdminBuilder, AdminState};
pub use entity::{
    Collection, CollectionBuilder, CollectionConfig, EntityBuilder, EntityConfig, EntityKind,
    EntityMeta, FieldScope, Global, GlobalBuilder, GlobalConfig, LayoutScope,
};
pub use presentation::{
    locale_label, Branding, Dashboard, DashboardWidget, LocaleConfig, PresentationConfig,
};

pub use admiral_common::{
    AdmiralError, Builder, ComponentRef, Declared, Definition, Options, Registry, RegistryProxy,
    Result, TokenProxy,
};
pub use admiral_fields::{FieldBuilder, FieldDefinition};
pub use admiral_sidebar::{SectionBuilder, Sidebar, SidebarBuilder, SidebarItem, SidebarSection};
pub use admiral_views::{
    PageBuilder, PageDefinition, ViewBuilder, ViewDefinition, ViewKind, WidgetBuilder,
    WidgetDefinition,
};
