//! # smart-lists
//!
//! Sortable, filterable list views for server-rendered pages, inspired by
//! the Django admin changelist.
//!
//! Every piece of view state lives in the URL query string: the sort token
//! (`?o=2.-1`), the active filters (`?status=1`), the search text, and the
//! page. Header and filter links are complete query strings, so each state
//! of a list is a bookmarkable URL and the server keeps nothing between
//! requests.
//!
//! ## Feature Flags
//!
//! - `urls` - Query parameter mapping and the link codec
//! - `i18n` - Localizer capability, message catalogs, date formats
//! - `tables` (default) - List views, columns, filters, sort tokens
//!
//! ## Quick Example
//!
//! ```rust
//! use smart_lists::prelude::*;
//! use std::collections::BTreeMap;
//!
//! let rows = vec![BTreeMap::from([
//!     ("title".to_string(), FieldValue::from("Printer on fire")),
//!     ("status".to_string(), FieldValue::from("1")),
//! ])];
//! let source = InMemorySource::new(rows);
//! let meta = StaticMetadata::new("ticket")
//!     .with_field(FieldMeta::new("title"))
//!     .with_field(FieldMeta::new("status").with_choices([("1", "Open"), ("2", "Closed")]));
//!
//! let list = ListView::builder(&source, &meta)
//!     .query_params(QueryParams::parse("o=1&status=1"))
//!     .list_display(["title", "status"])
//!     .list_filter(["status"])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(list.columns()[1].add_sort_url().as_deref(), Some("?o=2.1&status=1"));
//! assert_eq!(list.filters()[0].options()[0].url(), "?o=1");
//! ```

#[cfg(feature = "i18n")]
pub mod i18n;
#[cfg(feature = "tables")]
pub mod tables;
#[cfg(feature = "urls")]
pub mod urls;

// Re-export the link codec
#[cfg(feature = "urls")]
pub use smart_lists_urls::{QueryParams, QueryValue, build_query_string};

// Re-export localization
#[cfg(feature = "i18n")]
pub use smart_lists_i18n::{CatalogLocalizer, Localizer, MessageCatalog, PassthroughLocalizer};

// Re-export list views
#[cfg(feature = "tables")]
pub use smart_lists_tables::{
	ColumnDescriptor, FilterDescriptor, FilterField, FilterOption, ListContext, ListSettings,
	ListView, PageInfo, Result, SmartListError, SortState, SortToken,
};

/// Everything needed to build and render a list view
pub mod prelude {
	#[cfg(feature = "urls")]
	pub use crate::{QueryParams, build_query_string};

	#[cfg(feature = "i18n")]
	pub use crate::{CatalogLocalizer, Localizer, MessageCatalog, PassthroughLocalizer};

	#[cfg(feature = "tables")]
	pub use smart_lists_tables::{
		AccessorMeta, ChoiceFilter, ColumnDescriptor, FieldKind, FieldMeta, FieldMetadataProvider,
		FieldValue, FilterDescriptor, FilterField, FilterOption, InMemorySource, ListContext,
		ListFilter, ListSettings, ListView, PageInfo, Record, RecordSource, ReferencedRecord,
		SmartListError, SortState, StaticMetadata,
	};
}
