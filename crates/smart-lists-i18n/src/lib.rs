//! Localization for smart-lists
//!
//! List views need exactly two localization services: translating the few
//! labels they produce themselves ("All", "Yes", "No") and formatting date
//! and datetime cell values. Both sit behind the [`Localizer`] trait so the
//! hosting application can plug in its own i18n stack.
//!
//! Two implementations ship with the crate:
//!
//! - [`PassthroughLocalizer`]: deterministic, untranslated, ISO dates. The
//!   default, and what tests should use.
//! - [`CatalogLocalizer`]: looks labels up in a [`MessageCatalog`] and formats
//!   dates with Django-style format strings (see [`dateformat`]).
//!
//! # Example
//!
//! ```rust
//! use smart_lists_i18n::{CatalogLocalizer, Localizer, MessageCatalog};
//! use chrono::NaiveDate;
//!
//! let mut catalog = MessageCatalog::new("fr");
//! catalog.add("All", "Tous");
//!
//! let localizer = CatalogLocalizer::new(catalog).with_date_format("d/m/Y");
//! assert_eq!(localizer.translate("All"), "Tous");
//! assert_eq!(localizer.translate("Yes"), "Yes");
//!
//! let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
//! assert_eq!(localizer.format_date(&date), "09/03/2024");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod catalog;
pub mod dateformat;
pub mod localizer;

// Re-exports for convenience
pub use catalog::MessageCatalog;
pub use localizer::{CatalogLocalizer, Localizer, PassthroughLocalizer};
