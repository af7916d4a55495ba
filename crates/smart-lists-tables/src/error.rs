//! Error types for list views

use crate::settings::SettingsError;
use crate::sort::SortTokenError;
use thiserror::Error;

/// Errors raised while building or rendering a list view
///
/// Everything except [`InvalidSortToken`](Self::InvalidSortToken) is a
/// configuration error: it names the offending field or type and is meant for
/// the developer, not the end user. A misconfigured column aborts the whole
/// list rather than being silently dropped.
#[derive(Debug, Error)]
pub enum SmartListError {
	/// A requested field starts with `_` (only `__str__` is allowed)
	#[error("Cannot use underscore-prefixed field `{0}` in a smart list")]
	ReservedFieldName(String),

	/// A requested column resolves to an accessor that alters data
	#[error("Cannot use `{0}` in a smart list: the accessor alters data")]
	AltersData(String),

	/// A link cell was rendered for a record without a canonical URL
	#[error("Cannot render a link for `{0}`: the record does not provide an absolute URL")]
	MissingAbsoluteUrl(String),

	/// A filter was requested for a field the metadata does not declare
	#[error("Unknown filter field `{field}` on `{model}`")]
	UnknownFilterField {
		/// The requested field name
		field: String,
		/// Verbose name of the record type
		model: String,
	},

	/// The ordering parameter does not hold a valid sort token
	#[error(transparent)]
	InvalidSortToken(#[from] SortTokenError),

	/// The list settings are invalid
	#[error(transparent)]
	Settings(#[from] SettingsError),
}

/// Result type alias for list view operations
pub type Result<T> = std::result::Result<T, SmartListError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_reserved_field_name_message() {
		let error = SmartListError::ReservedFieldName("_secret".to_string());
		assert_eq!(
			error.to_string(),
			"Cannot use underscore-prefixed field `_secret` in a smart list"
		);
	}

	#[rstest]
	fn test_unknown_filter_field_message() {
		let error = SmartListError::UnknownFilterField {
			field: "colour".to_string(),
			model: "ticket".to_string(),
		};
		assert_eq!(error.to_string(), "Unknown filter field `colour` on `ticket`");
	}

	#[rstest]
	fn test_sort_token_error_from() {
		let token_error = "1.x".parse::<crate::sort::SortToken>().unwrap_err();
		let error: SmartListError = token_error.into();
		assert!(matches!(error, SmartListError::InvalidSortToken(_)));
		assert!(error.to_string().contains("`x`"));
	}
}
