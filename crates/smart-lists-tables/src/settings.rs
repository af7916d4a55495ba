//! List view settings
//!
//! Settings are plain data so they can live next to the rest of a project's
//! configuration:
//!
//! ```toml
//! ordering_query_param = "sort"
//! list_display = ["title", "created_at", "status"]
//! list_filter = ["status"]
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default name of the ordering query parameter
pub const DEFAULT_ORDERING_QUERY_PARAM: &str = "o";

/// Default name of the search query parameter
pub const DEFAULT_SEARCH_QUERY_PARAM: &str = "q";

/// Default name of the page query parameter
pub const DEFAULT_PAGE_QUERY_PARAM: &str = "page";

/// Errors raised while loading or validating [`ListSettings`]
#[derive(Debug, Error)]
pub enum SettingsError {
	/// The TOML document could not be parsed
	#[error("Failed to parse list settings: {0}")]
	Toml(#[from] toml::de::Error),

	/// The JSON value does not describe list settings
	#[error("Failed to read list settings: {0}")]
	Json(#[from] serde_json::Error),

	/// The settings parse but are inconsistent
	#[error("Invalid list settings: {0}")]
	Invalid(String),
}

/// Configuration of a list view
///
/// Every field has a default, so partial documents are accepted.
///
/// # Examples
///
/// ```
/// use smart_lists_tables::settings::ListSettings;
///
/// let settings = ListSettings::from_toml_str(r#"
///     list_display = ["title", "status"]
///     list_filter = ["status"]
/// "#).unwrap();
///
/// assert_eq!(settings.ordering_query_param, "o");
/// assert_eq!(settings.list_display, vec!["title", "status"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListSettings {
	/// Query parameter holding the sort token
	pub ordering_query_param: String,
	/// Query parameter holding the search text
	pub search_query_param: String,
	/// Query parameter holding the page number
	pub page_query_param: String,
	/// Fields shown as columns; empty means the record's display name only
	pub list_display: Vec<String>,
	/// Fields offered as filters
	pub list_filter: Vec<String>,
	/// Fields the caller searches in
	pub list_search: Vec<String>,
}

impl Default for ListSettings {
	fn default() -> Self {
		Self {
			ordering_query_param: DEFAULT_ORDERING_QUERY_PARAM.to_string(),
			search_query_param: DEFAULT_SEARCH_QUERY_PARAM.to_string(),
			page_query_param: DEFAULT_PAGE_QUERY_PARAM.to_string(),
			list_display: Vec::new(),
			list_filter: Vec::new(),
			list_search: Vec::new(),
		}
	}
}

impl ListSettings {
	/// Parse and validate settings from a TOML document
	pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
		let settings: Self = toml::from_str(content)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Read and validate settings from a JSON value
	pub fn from_json_value(value: serde_json::Value) -> Result<Self, SettingsError> {
		let settings: Self = serde_json::from_value(value)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Check that the query parameter names are usable
	///
	/// Names must be non-empty and pairwise distinct.
	pub fn validate(&self) -> Result<(), SettingsError> {
		let params = [
			("ordering_query_param", &self.ordering_query_param),
			("search_query_param", &self.search_query_param),
			("page_query_param", &self.page_query_param),
		];
		for (name, value) in params {
			if value.is_empty() {
				return Err(SettingsError::Invalid(format!("`{}` must not be empty", name)));
			}
		}
		for (i, (name, value)) in params.iter().enumerate() {
			if let Some((other, _)) = params[i + 1..].iter().find(|(_, v)| v == value) {
				return Err(SettingsError::Invalid(format!(
					"`{}` and `{}` both use the query parameter `{}`",
					name, other, value
				)));
			}
		}
		if let Some(filter) = self
			.list_filter
			.iter()
			.find(|filter| params.iter().any(|(_, value)| value == filter))
		{
			return Err(SettingsError::Invalid(format!(
				"filter `{}` collides with a reserved query parameter",
				filter
			)));
		}
		Ok(())
	}
}
