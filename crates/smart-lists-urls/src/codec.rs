//! Link codec: current query parameters + overrides → query string
//!
//! Every link a list view renders (sort headers, filter options, pagination)
//! is a complete replacement of one or two parameters on top of the current
//! request's parameters. [`build_query_string`] is that single operation.
//!
//! Repeated keys other than the ones being overridden are collapsed to their
//! first value on every generated link. List views work with single-valued
//! parameters only, so this loss is accepted.

use crate::params::QueryParams;

/// A replacement value for one parameter
///
/// `None` is the "no value" sentinel: the parameter is removed from the
/// generated link instead of being emitted with an empty value.
pub type Override = Option<String>;

/// Builds the query string for a new view state
///
/// Starts from `current` (lists collapsed to their first value), applies
/// `overrides` by key, removes every key whose value is `None`, and encodes
/// the rest as `application/x-www-form-urlencoded`. The result always starts
/// with `?` so it can be used directly as a relative link.
///
/// # Examples
///
/// ```
/// use smart_lists_urls::{QueryParams, build_query_string};
///
/// let params = QueryParams::parse("page=3&o=1&status=open");
///
/// assert_eq!(
///     build_query_string(&params, [("o", Some("-1".to_string()))]),
///     "?page=3&o=-1&status=open"
/// );
/// assert_eq!(
///     build_query_string(&params, [("status", None)]),
///     "?page=3&o=1"
/// );
/// ```
pub fn build_query_string<I, K>(current: &QueryParams, overrides: I) -> String
where
	I: IntoIterator<Item = (K, Override)>,
	K: Into<String>,
{
	let merged = current.with_overrides(overrides);
	format!(
		"?{}",
		encode_pairs(merged.iter().map(|(key, value)| (key.as_str(), value.as_str())))
	)
}

/// Encodes key/value pairs as `application/x-www-form-urlencoded`
///
/// # Examples
///
/// ```
/// use smart_lists_urls::encode_pairs;
///
/// assert_eq!(encode_pairs([("q", "café au lait")]), "q=caf%C3%A9+au+lait");
/// assert_eq!(encode_pairs(Vec::<(&str, &str)>::new()), "");
/// ```
pub fn encode_pairs<'a, I>(pairs: I) -> String
where
	I: IntoIterator<Item = (&'a str, &'a str)>,
{
	url::form_urlencoded::Serializer::new(String::new())
		.extend_pairs(pairs)
		.finish()
}
