//! Sortable, filterable list views for server-rendered pages
//!
//! This crate renders a collection of records as a list whose whole view
//! state (sort columns and directions, active filters, search text, page)
//! lives in the URL query string. Every header and filter link is a complete
//! query string, so every state of the list is a bookmarkable URL.
//!
//! # Features
//!
//! - **Multi-column sorting**: the `o=1.-3.2` sort token, one header click
//!   promotes a column to primary
//! - **Filters**: choices, booleans, references, and custom [`ListFilter`]s
//! - **Columns**: titles and sortability derived from record metadata
//! - **Rendering**: escaped `<td>` cells and record links
//! - **Settings**: [`ListSettings`] loaded from TOML or JSON
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     A[ListView] --> B[ColumnDescriptor]
//!     A --> C[FilterDescriptor]
//!     A --> D[Item]
//!     B --> E[SortState]
//!     E --> F[SortToken]
//!     C --> G[FilterOption]
//!     D --> H[FieldCell]
//!     E --> Q[QueryParamCodec]
//!     G --> Q
//!     A --> M[FieldMetadataProvider]
//!     A --> R[RecordSource]
//! ```
//!
//! # Example
//!
//! ```rust
//! use smart_lists_tables::{FieldMeta, FieldValue, InMemorySource, ListView, StaticMetadata};
//! use smart_lists_urls::QueryParams;
//! use std::collections::BTreeMap;
//!
//! let rows = vec![
//!     BTreeMap::from([("title".to_string(), FieldValue::from("Printer on fire"))]),
//!     BTreeMap::from([("title".to_string(), FieldValue::from("Coffee machine"))]),
//! ];
//! let source = InMemorySource::new(rows);
//! let meta = StaticMetadata::new("ticket").with_field(FieldMeta::new("title"));
//!
//! let list = ListView::builder(&source, &meta)
//!     .query_params(QueryParams::parse("?o=1"))
//!     .list_display(["title"])
//!     .build()
//!     .unwrap();
//!
//! let title = &list.columns()[0];
//! assert_eq!(title.title(), "Title");
//! assert_eq!(title.add_sort_url().as_deref(), Some("?o=-1"));
//! assert_eq!(title.remove_sort_url().as_deref(), Some("?"));
//! assert_eq!(list.items().count(), 2);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod column;
pub mod context;
pub mod error;
pub mod filter;
pub mod item;
pub mod list;
pub mod metadata;
pub mod record;
pub mod settings;
pub mod sort;

// Re-exports for convenience
pub use column::ColumnDescriptor;
pub use context::{ListContext, PageInfo};
pub use error::{Result, SmartListError};
pub use filter::{ChoiceFilter, FilterDescriptor, FilterField, FilterOption, ListFilter};
pub use item::{FieldCell, Item};
pub use list::{ListView, ListViewBuilder};
pub use metadata::{AccessorMeta, FieldKind, FieldMeta, FieldMetadataProvider, StaticMetadata};
pub use record::{
	FieldValue, InMemorySource, Record, RecordSource, ReferencedRecord, ResolvedValue,
};
pub use settings::{ListSettings, SettingsError};
pub use sort::{OrderBy, SortKey, SortState, SortToken, SortTokenError};
