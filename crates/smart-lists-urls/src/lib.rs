//! Query-string handling for smart-lists
//!
//! Every piece of list view state (sort order, active filters, search text,
//! page number) is carried in the query string. This crate provides the two
//! primitives the rest of the workspace builds on:
//!
//! - [`QueryParams`]: the immutable, ordered key → value-or-list mapping the
//!   HTTP layer hands over for the current request
//! - [`build_query_string`]: derives the link for a new view state by
//!   replacing a few parameters and keeping everything else
//!
//! # Example
//!
//! ```rust
//! use smart_lists_urls::{QueryParams, build_query_string};
//!
//! let params = QueryParams::parse("?o=2.-1&status=open");
//!
//! // Clear the status filter, keep the ordering
//! let url = build_query_string(&params, [("status", None)]);
//! assert_eq!(url, "?o=2.-1");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod codec;
pub mod params;

// Re-exports for convenience
pub use codec::{Override, build_query_string, encode_pairs};
pub use params::{QueryParams, QueryValue};
