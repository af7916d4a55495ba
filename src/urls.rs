//! Query parameters and the link codec.
//!
//! ```rust
//! use smart_lists::urls::{QueryParams, build_query_string};
//!
//! let params = QueryParams::parse("o=1&page=3");
//! assert_eq!(build_query_string(&params, [("page", None)]), "?o=1");
//! ```

pub use smart_lists_urls::*;
