//! View, widget and page definitions
//!
//! - **Views** render a collection either as a list or as an edit form. The
//!   `kind` is fixed when the builder is created and decides which registry
//!   bucket the view lands in.
//! - **Widgets** are dashboard tiles.
//! - **Pages** are standalone screens with an optional route path.
//!
//! All builders here are immutable: each method returns a new value.

pub mod page;
pub mod view;
pub mod widget;

pub use page::{PageBuilder, PageDefinition};
pub use view::{ViewBuilder, ViewDefinition, ViewKind};
pub use widget::{WidgetBuilder, WidgetDefinition};
