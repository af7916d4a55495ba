//! List views, columns, filters, and sort tokens.

pub use smart_lists_tables::*;
