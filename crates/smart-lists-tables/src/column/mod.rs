//! List columns
//!
//! A column binds one requested field name to a 1-based id, a header title,
//! and (when the field can be ordered) the [`SortState`](crate::sort::SortState)
//! that renders its header links.

pub mod descriptor;
pub mod title;

pub use descriptor::ColumnDescriptor;
pub use title::{field_title, title_case};
