//! The query parameter mapping received from the HTTP layer

use indexmap::IndexMap;
use indexmap::map::Entry;
use std::collections::HashMap;

/// The value of a single query parameter
///
/// Repeated keys (`?tag=a&tag=b`) produce a [`QueryValue::Multi`]; everything
/// else is a [`QueryValue::Single`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
	/// A key that appeared once
	Single(String),
	/// A key that appeared more than once, in order of appearance
	Multi(Vec<String>),
}

impl QueryValue {
	/// Returns the value with single-value semantics
	///
	/// For a list this is its first element; an empty list has no value.
	///
	/// # Examples
	///
	/// ```
	/// use smart_lists_urls::QueryValue;
	///
	/// assert_eq!(QueryValue::from("2").first(), Some("2"));
	/// assert_eq!(
	///     QueryValue::Multi(vec!["a".into(), "b".into()]).first(),
	///     Some("a")
	/// );
	/// assert_eq!(QueryValue::Multi(vec![]).first(), None);
	/// ```
	pub fn first(&self) -> Option<&str> {
		match self {
			Self::Single(value) => Some(value),
			Self::Multi(values) => values.first().map(String::as_str),
		}
	}

	/// Returns every value carried by this parameter
	pub fn values(&self) -> &[String] {
		match self {
			Self::Single(value) => std::slice::from_ref(value),
			Self::Multi(values) => values,
		}
	}

	fn push(&mut self, value: String) {
		match self {
			Self::Single(existing) => {
				let first = std::mem::take(existing);
				*self = Self::Multi(vec![first, value]);
			}
			Self::Multi(values) => values.push(value),
		}
	}
}

impl From<String> for QueryValue {
	fn from(value: String) -> Self {
		Self::Single(value)
	}
}

impl From<&str> for QueryValue {
	fn from(value: &str) -> Self {
		Self::Single(value.to_string())
	}
}

impl From<Vec<String>> for QueryValue {
	fn from(values: Vec<String>) -> Self {
		Self::Multi(values)
	}
}

/// Ordered mapping of the current request's query parameters
///
/// The mapping keeps keys in the order they were received. Derived links are
/// computed from it with [`build_query_string`](crate::build_query_string);
/// the list view code never mutates the mapping it was given.
///
/// # Examples
///
/// ```
/// use smart_lists_urls::{QueryParams, QueryValue};
///
/// let params = QueryParams::parse("o=1.-2&tag=a&tag=b&q=hello+world");
///
/// assert_eq!(params.first("o"), Some("1.-2"));
/// assert_eq!(params.first("q"), Some("hello world"));
/// assert_eq!(
///     params.get("tag"),
///     Some(&QueryValue::Multi(vec!["a".to_string(), "b".to_string()]))
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
	params: IndexMap<String, QueryValue>,
}

impl QueryParams {
	/// Creates an empty mapping
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses a raw `application/x-www-form-urlencoded` query string
	///
	/// A leading `?` is ignored. Keys that appear more than once are collected
	/// into a [`QueryValue::Multi`] in order of appearance.
	pub fn parse(query: &str) -> Self {
		let query = query.strip_prefix('?').unwrap_or(query);
		let mut params = Self::new();
		for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
			params.append(key.into_owned(), value.into_owned());
		}
		params
	}

	/// Sets `key`, replacing any previous value
	///
	/// Intended for assembling the mapping before it is handed to a list view.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
		self.params.insert(key.into(), value.into());
	}

	/// Adds one more value for `key`, turning it into a list when repeated
	pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
		let value = value.into();
		match self.params.entry(key.into()) {
			Entry::Occupied(mut entry) => entry.get_mut().push(value),
			Entry::Vacant(entry) => {
				entry.insert(QueryValue::Single(value));
			}
		}
	}

	/// Builder-style [`insert`](Self::insert)
	pub fn with(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
		self.insert(key, value);
		self
	}

	/// Returns the raw value stored for `key`
	pub fn get(&self, key: &str) -> Option<&QueryValue> {
		self.params.get(key)
	}

	/// Returns the value for `key` with single-value semantics
	pub fn first(&self, key: &str) -> Option<&str> {
		self.params.get(key).and_then(QueryValue::first)
	}

	/// Returns `true` if `key` is present (even with an empty value)
	pub fn contains_key(&self, key: &str) -> bool {
		self.params.contains_key(key)
	}

	/// Returns the number of distinct keys
	pub fn len(&self) -> usize {
		self.params.len()
	}

	/// Returns `true` if there are no parameters
	pub fn is_empty(&self) -> bool {
		self.params.is_empty()
	}

	/// Iterates over the parameters in received order
	pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
		self.params.iter().map(|(key, value)| (key.as_str(), value))
	}

	/// Collapses the mapping to single values and applies `overrides`
	///
	/// Lists keep only their first element (an empty list drops the key).
	/// Overrides replace existing keys in place and append new ones; an
	/// override of `None` removes the key.
	///
	/// # Examples
	///
	/// ```
	/// use smart_lists_urls::QueryParams;
	///
	/// let params = QueryParams::parse("a=1&b=2&b=3");
	/// let merged = params.with_overrides([("a", None), ("c", Some("4".to_string()))]);
	///
	/// let pairs: Vec<_> = merged.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
	/// assert_eq!(pairs, vec![("b", "2"), ("c", "4")]);
	/// ```
	pub fn with_overrides<I, K>(&self, overrides: I) -> IndexMap<String, String>
	where
		I: IntoIterator<Item = (K, Option<String>)>,
		K: Into<String>,
	{
		let mut merged: IndexMap<String, Option<String>> = self
			.params
			.iter()
			.map(|(key, value)| (key.clone(), value.first().map(str::to_string)))
			.collect();

		for (key, value) in overrides {
			merged.insert(key.into(), value);
		}

		merged
			.into_iter()
			.filter_map(|(key, value)| value.map(|value| (key, value)))
			.collect()
	}
}

impl From<HashMap<String, String>> for QueryParams {
	fn from(map: HashMap<String, String>) -> Self {
		let mut params = Self::new();
		for (key, value) in map {
			params.insert(key, value);
		}
		params
	}
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
	K: Into<String>,
	V: Into<QueryValue>,
{
	fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
		let mut params = Self::new();
		for (key, value) in iter {
			params.insert(key, value);
		}
		params
	}
}
