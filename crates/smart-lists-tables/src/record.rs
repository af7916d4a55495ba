//! Records, record sources, and field value resolution
//!
//! A [`Record`] exposes its data through a small set of capabilities instead
//! of reflection: plain attributes, zero-argument accessors, display
//! transforms (the human label for a coded value), and an optional canonical
//! URL. [`resolve`] tries them in a fixed order and reports which one
//! produced the value.

use chrono::{NaiveDate, NaiveDateTime};
use indexmap::IndexSet;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Field name that stands for the record's own display representation
pub const STR_FIELD: &str = "__str__";

/// A value read from a record
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldValue {
	/// No value
	#[default]
	Null,
	/// Boolean value
	Bool(bool),
	/// Integer value
	Int(i64),
	/// Floating point value
	Float(f64),
	/// Text value
	Text(String),
	/// Calendar date, formatted through the localizer
	Date(NaiveDate),
	/// Date and time, formatted through the localizer
	DateTime(NaiveDateTime),
}

impl FieldValue {
	/// Returns `true` for [`FieldValue::Null`]
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}
}

impl fmt::Display for FieldValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Null => Ok(()),
			Self::Bool(true) => f.write_str("True"),
			Self::Bool(false) => f.write_str("False"),
			Self::Int(value) => write!(f, "{}", value),
			Self::Float(value) => write!(f, "{}", value),
			Self::Text(value) => f.write_str(value),
			Self::Date(value) => write!(f, "{}", value),
			Self::DateTime(value) => write!(f, "{}", value),
		}
	}
}

impl From<bool> for FieldValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<i64> for FieldValue {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}

impl From<i32> for FieldValue {
	fn from(value: i32) -> Self {
		Self::Int(value.into())
	}
}

impl From<u32> for FieldValue {
	fn from(value: u32) -> Self {
		Self::Int(value.into())
	}
}

impl From<f64> for FieldValue {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}

impl From<String> for FieldValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<&str> for FieldValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<NaiveDate> for FieldValue {
	fn from(value: NaiveDate) -> Self {
		Self::Date(value)
	}
}

impl From<NaiveDateTime> for FieldValue {
	fn from(value: NaiveDateTime) -> Self {
		Self::DateTime(value)
	}
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Null, Into::into)
	}
}

/// One row of a list
///
/// Only [`attribute`](Self::attribute) and
/// [`display_name`](Self::display_name) are required; the other capabilities
/// default to "not available".
///
/// # Examples
///
/// ```
/// use smart_lists_tables::record::{FieldValue, Record};
///
/// struct Ticket {
///     id: i64,
///     status: &'static str,
/// }
///
/// impl Record for Ticket {
///     fn attribute(&self, name: &str) -> Option<FieldValue> {
///         match name {
///             "id" => Some(self.id.into()),
///             "status" => Some(self.status.into()),
///             _ => None,
///         }
///     }
///
///     fn display(&self, name: &str) -> Option<FieldValue> {
///         match (name, self.status) {
///             ("status", "o") => Some("Open".into()),
///             ("status", "c") => Some("Closed".into()),
///             _ => None,
///         }
///     }
///
///     fn display_name(&self) -> String {
///         format!("Ticket #{}", self.id)
///     }
/// }
/// ```
pub trait Record {
	/// The stored value of attribute `name`
	fn attribute(&self, name: &str) -> Option<FieldValue>;

	/// The result of calling the zero-argument accessor `name`
	fn call(&self, _name: &str) -> Option<FieldValue> {
		None
	}

	/// The human-readable form of attribute `name` (e.g. a choice label)
	fn display(&self, _name: &str) -> Option<FieldValue> {
		None
	}

	/// The canonical URL of the record, used for link cells
	fn absolute_url(&self) -> Option<String> {
		None
	}

	/// The record's own display representation (the `__str__` column)
	fn display_name(&self) -> String;
}

/// A field value tagged with the capability that produced it
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedValue {
	/// Result of a zero-argument accessor (or the display representation)
	Accessor(FieldValue),
	/// Result of a display transform
	Display(FieldValue),
	/// A stored attribute
	Attribute(FieldValue),
	/// The record has nothing under this name
	Missing,
}

impl ResolvedValue {
	/// The resolved value; [`Missing`](Self::Missing) is [`FieldValue::Null`]
	pub fn into_value(self) -> FieldValue {
		match self {
			Self::Accessor(value) | Self::Display(value) | Self::Attribute(value) => value,
			Self::Missing => FieldValue::Null,
		}
	}

	/// Returns `true` if no capability produced a value
	pub fn is_missing(&self) -> bool {
		matches!(self, Self::Missing)
	}
}

/// Resolve `field` on `record`
///
/// Strategies, first match wins:
/// 1. `__str__`: the record's display representation
/// 2. a zero-argument accessor
/// 3. a display transform
/// 4. a stored attribute
///
/// # Examples
///
/// ```
/// use smart_lists_tables::record::{FieldValue, ResolvedValue, resolve};
/// use std::collections::BTreeMap;
///
/// let mut row = BTreeMap::new();
/// row.insert("count".to_string(), FieldValue::Int(3));
///
/// assert_eq!(resolve(&row, "count"), ResolvedValue::Attribute(FieldValue::Int(3)));
/// assert_eq!(resolve(&row, "missing"), ResolvedValue::Missing);
/// ```
pub fn resolve<R: Record + ?Sized>(record: &R, field: &str) -> ResolvedValue {
	if field == STR_FIELD {
		return ResolvedValue::Accessor(FieldValue::Text(record.display_name()));
	}
	if let Some(value) = record.call(field) {
		return ResolvedValue::Accessor(value);
	}
	if let Some(value) = record.display(field) {
		return ResolvedValue::Display(value);
	}
	match record.attribute(field) {
		Some(value) => ResolvedValue::Attribute(value),
		None => ResolvedValue::Missing,
	}
}

// Projection rows (`.values()`-style query results) are plain maps.
impl Record for BTreeMap<String, FieldValue> {
	fn attribute(&self, name: &str) -> Option<FieldValue> {
		self.get(name).cloned()
	}

	fn display_name(&self) -> String {
		join_values(self.iter())
	}
}

impl Record for HashMap<String, FieldValue> {
	fn attribute(&self, name: &str) -> Option<FieldValue> {
		self.get(name).cloned()
	}

	fn display_name(&self) -> String {
		let mut entries: Vec<_> = self.iter().collect();
		entries.sort_by(|a, b| a.0.cmp(b.0));
		join_values(entries.into_iter())
	}
}

fn join_values<'a>(entries: impl Iterator<Item = (&'a String, &'a FieldValue)>) -> String {
	entries
		.map(|(key, value)| format!("{}: {}", key, value))
		.collect::<Vec<_>>()
		.join(", ")
}

/// A record referenced by a reference field, as offered in a filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferencedRecord {
	/// Key of the referenced record, used as the filter value
	pub key: String,
	/// Display representation, used as the filter label
	pub display: String,
}

impl ReferencedRecord {
	/// Create a referenced record entry
	pub fn new(key: impl Into<String>, display: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			display: display.into(),
		}
	}
}

/// The collection of records a list view renders
///
/// The source is already filtered, ordered, and paginated by the caller; the
/// list view only iterates it and asks for reference lookups.
pub trait RecordSource {
	/// The row type
	type Record: Record;

	/// Iterate the records; may be called more than once
	fn records(&self) -> Box<dyn Iterator<Item = &Self::Record> + '_>;

	/// Distinct keys referenced by `field` across this (filtered) source
	fn distinct_reference_keys(&self, field: &str) -> Vec<String>;

	/// The records of the referenced type with the given keys
	fn referenced_records(&self, field: &str, keys: &[String]) -> Vec<ReferencedRecord>;
}

type ReferenceResolver = dyn Fn(&str, &[String]) -> Vec<ReferencedRecord> + Send + Sync;

/// A [`RecordSource`] over records held in memory
///
/// Reference keys are read from each record's attribute of the same name.
/// Without a resolver, referenced records are labelled by their key.
///
/// # Examples
///
/// ```
/// use smart_lists_tables::record::{FieldValue, InMemorySource, RecordSource, ReferencedRecord};
/// use std::collections::BTreeMap;
///
/// let rows: Vec<BTreeMap<String, FieldValue>> = [1, 2, 1]
///     .into_iter()
///     .map(|owner| BTreeMap::from([("owner".to_string(), FieldValue::Int(owner))]))
///     .collect();
///
/// let source = InMemorySource::new(rows).with_resolver(|_field, keys| {
///     keys.iter()
///         .map(|key| ReferencedRecord::new(key.clone(), format!("user {}", key)))
///         .collect()
/// });
///
/// assert_eq!(source.distinct_reference_keys("owner"), vec!["1", "2"]);
/// assert_eq!(source.records().count(), 3);
/// ```
pub struct InMemorySource<R> {
	records: Vec<R>,
	resolver: Option<Box<ReferenceResolver>>,
}

impl<R: Record> InMemorySource<R> {
	/// Wrap `records`
	pub fn new(records: Vec<R>) -> Self {
		Self {
			records,
			resolver: None,
		}
	}

	/// Set the lookup used for referenced records
	pub fn with_resolver<F>(mut self, resolver: F) -> Self
	where
		F: Fn(&str, &[String]) -> Vec<ReferencedRecord> + Send + Sync + 'static,
	{
		self.resolver = Some(Box::new(resolver));
		self
	}

	/// Number of records
	pub fn len(&self) -> usize {
		self.records.len()
	}

	/// Returns `true` if there are no records
	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}
}

impl<R> fmt::Debug for InMemorySource<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("InMemorySource")
			.field("records", &self.records.len())
			.field("resolver", &self.resolver.is_some())
			.finish()
	}
}

impl<R: Record> RecordSource for InMemorySource<R> {
	type Record = R;

	fn records(&self) -> Box<dyn Iterator<Item = &R> + '_> {
		Box::new(self.records.iter())
	}

	fn distinct_reference_keys(&self, field: &str) -> Vec<String> {
		let keys: IndexSet<String> = self
			.records
			.iter()
			.filter_map(|record| record.attribute(field))
			.filter(|value| !value.is_null())
			.map(|value| value.to_string())
			.collect();
		keys.into_iter().collect()
	}

	fn referenced_records(&self, field: &str, keys: &[String]) -> Vec<ReferencedRecord> {
		match &self.resolver {
			Some(resolver) => resolver(field, keys),
			None => keys
				.iter()
				.map(|key| ReferencedRecord::new(key.clone(), key.clone()))
				.collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::*;

	struct Ticket {
		status: &'static str,
	}

	impl Record for Ticket {
		fn attribute(&self, name: &str) -> Option<FieldValue> {
			match name {
				"status" => Some(self.status.into()),
				"closed_on" => Some(FieldValue::Null),
				_ => None,
			}
		}

		fn call(&self, name: &str) -> Option<FieldValue> {
			match name {
				"shout" => Some(self.status.to_uppercase().into()),
				_ => None,
			}
		}

		fn display(&self, name: &str) -> Option<FieldValue> {
			match name {
				"status" => Some(FieldValue::from(if self.status == "o" {
					"Open"
				} else {
					"Closed"
				})),
				_ => None,
			}
		}

		fn display_name(&self) -> String {
			format!("Ticket ({})", self.status)
		}
	}

	#[fixture]
	fn ticket() -> Ticket {
		Ticket { status: "o" }
	}

	#[rstest]
	fn test_resolve_str_field(ticket: Ticket) {
		assert_eq!(
			resolve(&ticket, STR_FIELD),
			ResolvedValue::Accessor(FieldValue::from("Ticket (o)"))
		);
	}

	#[rstest]
	fn test_resolve_accessor(ticket: Ticket) {
		assert_eq!(
			resolve(&ticket, "shout"),
			ResolvedValue::Accessor(FieldValue::from("O"))
		);
	}

	#[rstest]
	fn test_display_transform_wins_over_attribute(ticket: Ticket) {
		assert_eq!(
			resolve(&ticket, "status"),
			ResolvedValue::Display(FieldValue::from("Open"))
		);
	}

	#[rstest]
	fn test_resolve_attribute_and_missing(ticket: Ticket) {
		assert_eq!(
			resolve(&ticket, "closed_on"),
			ResolvedValue::Attribute(FieldValue::Null)
		);
		assert!(resolve(&ticket, "nope").is_missing());
		assert_eq!(resolve(&ticket, "nope").into_value(), FieldValue::Null);
	}

	#[rstest]
	#[case(FieldValue::Null, "")]
	#[case(FieldValue::Bool(true), "True")]
	#[case(FieldValue::Bool(false), "False")]
	#[case(FieldValue::Int(-4), "-4")]
	#[case(FieldValue::Float(2.5), "2.5")]
	#[case(FieldValue::from("x"), "x")]
	#[case(FieldValue::from(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()), "2024-05-01")]
	fn test_field_value_display(#[case] value: FieldValue, #[case] expected: &str) {
		assert_eq!(value.to_string(), expected);
	}

	#[rstest]
	fn test_option_conversion() {
		assert_eq!(FieldValue::from(None::<i64>), FieldValue::Null);
		assert_eq!(FieldValue::from(Some(3)), FieldValue::Int(3));
	}

	#[rstest]
	fn test_map_record_display_name_is_sorted() {
		let mut row = HashMap::new();
		row.insert("b".to_string(), FieldValue::Int(2));
		row.insert("a".to_string(), FieldValue::Int(1));
		assert_eq!(row.display_name(), "a: 1, b: 2");
	}

	#[rstest]
	fn test_in_memory_source_skips_null_references() {
		let rows = vec![
			BTreeMap::from([("owner".to_string(), FieldValue::Int(7))]),
			BTreeMap::from([("owner".to_string(), FieldValue::Null)]),
			BTreeMap::new(),
			BTreeMap::from([("owner".to_string(), FieldValue::Int(7))]),
		];
		let source = InMemorySource::new(rows);
		assert_eq!(source.distinct_reference_keys("owner"), vec!["7"]);
		assert_eq!(
			source.referenced_records("owner", &["7".to_string()]),
			vec![ReferencedRecord::new("7", "7")]
		);
		assert_eq!(source.len(), 4);
	}
}
