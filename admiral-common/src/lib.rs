//! # Admiral Common
//!
//! Foundational types shared by every Admiral crate: opaque component
//! references and payloads, the two merge combinators, the builder/plain
//! declaration wrapper, and the registry proxies that let entity builders
//! refer to previously declared definitions by name.
//!
//! ## Modules
//!
//! - [`component`] - Opaque render-target references and option payloads
//! - [`declared`] - Bucket entries that may be a plain value or a builder
//! - [`error`] - Structured error type shared across the workspace
//! - [`logging`] - Helpers for formatting values in log output
//! - [`merge`] - `merge_by_key` and `replace_whole` combinators
//! - [`proxy`] - Token and registry-constructor proxies

pub mod component;
pub mod declared;
pub mod error;
pub mod logging;
pub mod merge;
pub mod proxy;

pub use component::{ComponentRef, Options};
pub use declared::{Builder, Declared};
pub use error::{AdmiralError, Result};
pub use logging::{Keys, Pretty};
pub use merge::{merge_by_key, merge_options, replace_whole, Registry};
pub use proxy::{Definition, RegistryProxy, TokenProxy};
