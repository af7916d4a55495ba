//! Column title derivation

use crate::metadata::FieldMetadataProvider;
use crate::record::STR_FIELD;

/// Title-case `text`: each run of letters starts upper case, the rest is lower case
///
/// Any non-letter character starts a new word, so `"o'neil"` becomes
/// `"O'Neil"` and `"3rd"` becomes `"3Rd"`.
///
/// # Examples
///
/// ```
/// use smart_lists_tables::column::title_case;
///
/// assert_eq!(title_case("date created"), "Date Created");
/// assert_eq!(title_case("HTTP status"), "Http Status");
/// ```
pub fn title_case(text: &str) -> String {
	let mut result = String::with_capacity(text.len());
	let mut in_word = false;
	for c in text.chars() {
		if c.is_alphabetic() {
			if in_word {
				result.extend(c.to_lowercase());
			} else {
				result.extend(c.to_uppercase());
			}
			in_word = true;
		} else {
			result.push(c);
			in_word = false;
		}
	}
	result
}

/// The header title for `field_name`
///
/// Declared fields use their verbose name and `__str__` the record type's
/// verbose name, both title-cased. Accessors with a short description use it
/// verbatim. Anything else is derived from the name itself.
pub fn field_title(metadata: &dyn FieldMetadataProvider, field_name: &str) -> String {
	if let Some(field) = metadata.field(field_name) {
		return title_case(field.verbose_name());
	}
	if field_name == STR_FIELD {
		return title_case(metadata.verbose_name());
	}
	if let Some(description) = metadata
		.accessor(field_name)
		.and_then(|accessor| accessor.short_description())
	{
		return description.to_string();
	}

	tracing::debug!(field = field_name, "no metadata for column, deriving title from name");
	title_case(&field_name.replace('_', " "))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::metadata::{AccessorMeta, FieldMeta, StaticMetadata};
	use rstest::*;

	#[fixture]
	fn metadata() -> StaticMetadata {
		StaticMetadata::new("support ticket")
			.with_field(FieldMeta::new("created_at").with_verbose_name("date created"))
			.with_field(FieldMeta::new("title"))
			.with_accessor(AccessorMeta::new("age").with_short_description("Age (days)"))
			.with_accessor(AccessorMeta::new("is_overdue"))
	}

	#[rstest]
	#[case("hello world", "Hello World")]
	#[case("HELLO", "Hello")]
	#[case("o'neil", "O'Neil")]
	#[case("3rd place", "3Rd Place")]
	#[case("", "")]
	#[case("élan vital", "Élan Vital")]
	fn test_title_case(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(title_case(input), expected);
	}

	#[rstest]
	#[case("created_at", "Date Created")]
	#[case("title", "Title")]
	#[case("__str__", "Support Ticket")]
	#[case("age", "Age (days)")]
	#[case("is_overdue", "Is Overdue")]
	#[case("owner_email", "Owner Email")]
	fn test_field_title(metadata: StaticMetadata, #[case] field: &str, #[case] expected: &str) {
		assert_eq!(field_title(&metadata, field), expected);
	}
}
