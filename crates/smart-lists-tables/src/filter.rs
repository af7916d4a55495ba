//! List filters
//!
//! A filter is a query parameter plus the values offered for it. Each value
//! is a [`FilterOption`] whose link sets that parameter and keeps everything
//! else in the query. The first option is always "All", which clears the
//! parameter.

use crate::column::title_case;
use crate::error::{Result, SmartListError};
use crate::metadata::{FieldKind, FieldMetadataProvider};
use crate::record::RecordSource;
use smart_lists_i18n::Localizer;
use smart_lists_urls::{QueryParams, build_query_string};
use std::fmt;
use std::sync::Arc;

/// Value used by the "Yes" option of boolean filters
pub const BOOLEAN_TRUE: &str = "1";

/// Value used by the "No" option of boolean filters
pub const BOOLEAN_FALSE: &str = "0";

/// A filter with its own parameter, title, and lookups
///
/// # Examples
///
/// ```
/// use smart_lists_tables::filter::ListFilter;
///
/// struct DueFilter;
///
/// impl ListFilter for DueFilter {
///     fn parameter_name(&self) -> &str {
///         "due"
///     }
///
///     fn title(&self) -> &str {
///         "Due"
///     }
///
///     fn lookups(&self) -> Vec<(String, String)> {
///         vec![
///             ("today".to_string(), "Today".to_string()),
///             ("week".to_string(), "This week".to_string()),
///         ]
///     }
/// }
///
/// assert_eq!(DueFilter.lookups().len(), 2);
/// ```
pub trait ListFilter: Send + Sync {
	/// The query parameter this filter sets
	fn parameter_name(&self) -> &str;

	/// The filter title displayed in UI
	fn title(&self) -> &str;

	/// Offered `(value, label)` pairs, in display order
	fn lookups(&self) -> Vec<(String, String)>;
}

/// Filter over a fixed list of choices
///
/// # Examples
///
/// ```
/// use smart_lists_tables::filter::{ChoiceFilter, ListFilter};
///
/// let filter = ChoiceFilter::new("priority", "Priority")
///     .add_choice("high", "High")
///     .add_choice("low", "Low");
///
/// assert_eq!(filter.parameter_name(), "priority");
/// assert_eq!(filter.lookups()[0], ("high".to_string(), "High".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct ChoiceFilter {
	parameter_name: String,
	title: String,
	choices: Vec<(String, String)>, // (value, label)
}

impl ChoiceFilter {
	/// Create a choice filter without choices
	pub fn new(parameter_name: impl Into<String>, title: impl Into<String>) -> Self {
		Self {
			parameter_name: parameter_name.into(),
			title: title.into(),
			choices: Vec::new(),
		}
	}

	/// Append a choice
	pub fn add_choice(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
		self.choices.push((value.into(), label.into()));
		self
	}
}

impl ListFilter for ChoiceFilter {
	fn parameter_name(&self) -> &str {
		&self.parameter_name
	}

	fn title(&self) -> &str {
		&self.title
	}

	fn lookups(&self) -> Vec<(String, String)> {
		self.choices.clone()
	}
}

/// A requested filter: a declared field or a custom [`ListFilter`]
pub enum FilterField {
	/// A field declared by the record type's metadata
	Field(String),
	/// A custom filter
	Custom(Box<dyn ListFilter>),
}

impl FilterField {
	/// Wrap a custom filter
	pub fn custom(filter: impl ListFilter + 'static) -> Self {
		Self::Custom(Box::new(filter))
	}

	/// The query parameter this filter sets
	pub fn parameter_name(&self) -> &str {
		match self {
			Self::Field(name) => name,
			Self::Custom(filter) => filter.parameter_name(),
		}
	}
}

impl fmt::Debug for FilterField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Field(name) => f.debug_tuple("Field").field(name).finish(),
			Self::Custom(filter) => f.debug_tuple("Custom").field(&filter.parameter_name()).finish(),
		}
	}
}

impl From<&str> for FilterField {
	fn from(name: &str) -> Self {
		Self::Field(name.to_string())
	}
}

impl From<String> for FilterField {
	fn from(name: String) -> Self {
		Self::Field(name)
	}
}

impl From<Box<dyn ListFilter>> for FilterField {
	fn from(filter: Box<dyn ListFilter>) -> Self {
		Self::Custom(filter)
	}
}

/// One selectable value of a filter
#[derive(Debug, Clone)]
pub struct FilterOption {
	parameter_name: String,
	label: String,
	value: Option<String>,
	query_params: Arc<QueryParams>,
}

impl FilterOption {
	/// Create an option; `value: None` is the "All" option
	pub fn new(
		parameter_name: impl Into<String>,
		label: impl Into<String>,
		value: Option<String>,
		query_params: Arc<QueryParams>,
	) -> Self {
		Self {
			parameter_name: parameter_name.into(),
			label: label.into(),
			value,
			query_params,
		}
	}

	/// The query parameter this option sets
	pub fn parameter_name(&self) -> &str {
		&self.parameter_name
	}

	/// The option label
	pub fn label(&self) -> &str {
		&self.label
	}

	/// The value this option sets; `None` clears the parameter
	pub fn value(&self) -> Option<&str> {
		self.value.as_deref()
	}

	/// Returns `true` if the current query selects this option
	///
	/// Only the first value of a multi-valued parameter counts. The "All"
	/// option is active iff the parameter is absent.
	pub fn is_active(&self) -> bool {
		match self.query_params.get(&self.parameter_name) {
			Some(selected) => self.value.is_some() && selected.first() == self.value.as_deref(),
			None => self.value.is_none(),
		}
	}

	/// Query string selecting this option
	pub fn url(&self) -> String {
		build_query_string(
			&self.query_params,
			[(self.parameter_name.as_str(), self.value.clone())],
		)
	}
}

/// A filter of a list view with its options
#[derive(Debug, Clone)]
pub struct FilterDescriptor {
	parameter_name: String,
	title: String,
	options: Vec<FilterOption>,
}

impl FilterDescriptor {
	/// Build the filter for `field`
	///
	/// Reference fields offer the referenced records that the (already
	/// filtered) `source` actually points at.
	///
	/// # Errors
	///
	/// [`SmartListError::UnknownFilterField`] if `field` names a field the
	/// metadata does not declare.
	pub fn new<S: RecordSource>(
		field: &FilterField,
		metadata: &dyn FieldMetadataProvider,
		source: &S,
		query_params: Arc<QueryParams>,
		localizer: &dyn Localizer,
	) -> Result<Self> {
		let (parameter_name, title, lookups) = match field {
			FilterField::Custom(filter) => (
				filter.parameter_name().to_string(),
				filter.title().to_string(),
				filter.lookups(),
			),
			FilterField::Field(name) => {
				let meta = metadata.field(name).ok_or_else(|| SmartListError::UnknownFilterField {
					field: name.clone(),
					model: metadata.verbose_name().to_string(),
				})?;
				let lookups = match meta.kind() {
					FieldKind::Choices(choices) => choices.clone(),
					FieldKind::Boolean => vec![
						(BOOLEAN_TRUE.to_string(), localizer.translate("Yes")),
						(BOOLEAN_FALSE.to_string(), localizer.translate("No")),
					],
					FieldKind::Reference { target } => {
						let keys = source.distinct_reference_keys(name);
						let records = source.referenced_records(name, &keys);
						if records.len() < keys.len() {
							tracing::debug!(
								field = %name,
								target = %target,
								keys = keys.len(),
								resolved = records.len(),
								"some referenced records were not found"
							);
						}
						records
							.into_iter()
							.map(|record| (record.key, record.display))
							.collect()
					}
					FieldKind::Plain => Vec::new(),
				};
				(name.clone(), title_case(meta.verbose_name()), lookups)
			}
		};

		let mut options = Vec::with_capacity(lookups.len() + 1);
		options.push(FilterOption::new(
			parameter_name.clone(),
			localizer.translate("All"),
			None,
			Arc::clone(&query_params),
		));
		options.extend(lookups.into_iter().map(|(value, label)| {
			FilterOption::new(parameter_name.clone(), label, Some(value), Arc::clone(&query_params))
		}));

		Ok(Self {
			parameter_name,
			title,
			options,
		})
	}

	/// The query parameter this filter sets
	pub fn parameter_name(&self) -> &str {
		&self.parameter_name
	}

	/// The filter title
	pub fn title(&self) -> &str {
		&self.title
	}

	/// Options, "All" first
	pub fn options(&self) -> &[FilterOption] {
		&self.options
	}

	/// The option selected by the current query, if any
	pub fn active_option(&self) -> Option<&FilterOption> {
		self.options.iter().find(|option| option.is_active())
	}
}
