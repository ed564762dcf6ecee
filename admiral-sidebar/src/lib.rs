//! Sidebar composition
//!
//! The sidebar is an ordered list of sections. Each section has a stable
//! `id` and an ordered list of typed items. Independently authored modules
//! address sections by id:
//!
//! - **Replace in place**: `section()` rebuilds a section without moving it
//! - **Reposition**: `prepend()`, `append()`, `insert_before()`, `insert_after()`
//! - **Amend**: `extend()` edits an existing section starting from its
//!   current contents
//! - **Combine**: `merge()` appends sections the receiver does not have yet;
//!   on id collision the receiver's section wins

pub mod item;
pub mod section;
pub mod sidebar;

pub use item::SidebarItem;
pub use section::{SectionBuilder, SidebarSection};
pub use sidebar::{Sidebar, SidebarBuilder};
