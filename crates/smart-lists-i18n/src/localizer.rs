//! The localization capability injected into list views

use crate::catalog::MessageCatalog;
use crate::dateformat;
use chrono::{NaiveDate, NaiveDateTime};

/// Localization services used while building and rendering a list view
///
/// Implementations must be deterministic for a given request: list views
/// call them lazily at render time.
///
/// # Examples
///
/// ```
/// use smart_lists_i18n::Localizer;
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// struct Shouting;
///
/// impl Localizer for Shouting {
///     fn translate(&self, message: &str) -> String {
///         message.to_uppercase()
///     }
///
///     fn format_date(&self, date: &NaiveDate) -> String {
///         date.to_string()
///     }
///
///     fn format_datetime(&self, datetime: &NaiveDateTime) -> String {
///         datetime.to_string()
///     }
/// }
///
/// assert_eq!(Shouting.translate("All"), "ALL");
/// ```
pub trait Localizer: Send + Sync {
	/// Translate a user-facing label
	fn translate(&self, message: &str) -> String;

	/// Format a date value for display
	fn format_date(&self, date: &NaiveDate) -> String;

	/// Format a datetime value for display
	fn format_datetime(&self, datetime: &NaiveDateTime) -> String;
}

/// Deterministic localizer: labels unchanged, ISO 8601 dates
///
/// # Examples
///
/// ```
/// use smart_lists_i18n::{Localizer, PassthroughLocalizer};
/// use chrono::NaiveDate;
///
/// let localizer = PassthroughLocalizer;
/// let dt = NaiveDate::from_ymd_opt(2024, 1, 15)
///     .unwrap()
///     .and_hms_opt(9, 30, 0)
///     .unwrap();
///
/// assert_eq!(localizer.translate("All"), "All");
/// assert_eq!(localizer.format_datetime(&dt), "2024-01-15 09:30:00");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughLocalizer;

impl Localizer for PassthroughLocalizer {
	fn translate(&self, message: &str) -> String {
		message.to_string()
	}

	fn format_date(&self, date: &NaiveDate) -> String {
		dateformat::format_date(date, "Y-m-d")
	}

	fn format_datetime(&self, datetime: &NaiveDateTime) -> String {
		dateformat::format(datetime, "Y-m-d H:i:s")
	}
}

/// Localizer backed by a [`MessageCatalog`] and date format strings
///
/// Messages missing from the catalog are returned untranslated.
#[derive(Debug, Clone)]
pub struct CatalogLocalizer {
	catalog: MessageCatalog,
	date_format: String,
	datetime_format: String,
}

impl CatalogLocalizer {
	/// Default format for date values
	pub const DEFAULT_DATE_FORMAT: &'static str = "F j, Y";

	/// Default format for datetime values
	pub const DEFAULT_DATETIME_FORMAT: &'static str = "F j, Y, g:i a";

	/// Create a localizer for `catalog` with the default date formats
	pub fn new(catalog: MessageCatalog) -> Self {
		Self {
			catalog,
			date_format: Self::DEFAULT_DATE_FORMAT.to_string(),
			datetime_format: Self::DEFAULT_DATETIME_FORMAT.to_string(),
		}
	}

	/// Set the format string used for date values
	pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
		self.date_format = format.into();
		self
	}

	/// Set the format string used for datetime values
	pub fn with_datetime_format(mut self, format: impl Into<String>) -> Self {
		self.datetime_format = format.into();
		self
	}

	/// The locale of the underlying catalog
	pub fn locale(&self) -> &str {
		self.catalog.locale()
	}
}

impl Localizer for CatalogLocalizer {
	fn translate(&self, message: &str) -> String {
		self.catalog
			.get(message)
			.unwrap_or(message)
			.to_string()
	}

	fn format_date(&self, date: &NaiveDate) -> String {
		dateformat::format_date(date, &self.date_format)
	}

	fn format_datetime(&self, datetime: &NaiveDateTime) -> String {
		dateformat::format(datetime, &self.datetime_format)
	}
}
