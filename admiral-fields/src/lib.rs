//! Field type registry entries
//!
//! A field *type* ("text", "relation", "date", ...) pairs a render component
//! with an optional table-cell component and a default options payload.
//! Collections stamp these types into concrete usages through a
//! [`RegistryProxy`](admiral_common::RegistryProxy); the types themselves are
//! immutable once registered.

pub mod field;

pub use field::{FieldBuilder, FieldDefinition};
