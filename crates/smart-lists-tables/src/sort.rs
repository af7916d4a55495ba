//! Multi-column sort state encoded in a single query parameter
//!
//! The sort order of a list is an ordered list of signed column ids written
//! as a dot-separated token, e.g. `2.-1.3`: primary sort by column 2
//! ascending, then column 1 descending, then column 3 ascending. Column ids
//! are the 1-based positions of the displayed fields.
//!
//! The token appears in bookmarked URLs, so its grammar is fixed:
//!
//! ```text
//! token   = "" | key ("." key)*
//! key     = ["-"] column
//! column  = digit+        ; value >= 1
//! ```
//!
//! [`SortToken`] holds the decoded list and computes the next token for a
//! header click. [`SortState`] binds a token to one column of a list view and
//! turns those transitions into links.

use smart_lists_urls::{QueryParams, build_query_string};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

/// Separator between keys of a sort token
pub const SEPARATOR: char = '.';

/// Prefix marking a descending key
pub const DESCENDING_PREFIX: char = '-';

/// Errors produced when decoding a sort token
///
/// Tokens are only ever produced by this crate's own links, so a malformed
/// token means the query string was edited or generated elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortTokenError {
	/// Two separators in a row, or a leading/trailing separator
	#[error("Empty segment in sort token `{token}`")]
	EmptySegment {
		/// The full token
		token: String,
	},

	/// A segment that is not an optionally negated column number
	#[error("Invalid segment `{segment}` in sort token `{token}`: expected a column number")]
	NotNumeric {
		/// The full token
		token: String,
		/// The offending segment
		segment: String,
	},

	/// Column ids start at 1
	#[error("Column 0 in sort token `{token}`: column ids start at 1")]
	ZeroColumn {
		/// The full token
		token: String,
	},
}

/// One signed entry of a sort token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortKey {
	/// 1-based column id
	pub column: u32,
	/// `true` when sorted in descending order
	pub descending: bool,
}

impl SortKey {
	/// An ascending key for `column`
	pub fn ascending(column: u32) -> Self {
		Self {
			column,
			descending: false,
		}
	}

	/// A descending key for `column`
	pub fn descending(column: u32) -> Self {
		Self {
			column,
			descending: true,
		}
	}

	/// The same column in the opposite direction
	pub fn reversed(self) -> Self {
		Self {
			column: self.column,
			descending: !self.descending,
		}
	}
}

impl fmt::Display for SortKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.descending {
			write!(f, "{}{}", DESCENDING_PREFIX, self.column)
		} else {
			write!(f, "{}", self.column)
		}
	}
}

/// A decoded sort token
///
/// Order is priority: the first key is the primary sort. Duplicate columns
/// are not rejected; transitions treat every key of a column alike.
///
/// # Examples
///
/// ```
/// use smart_lists_tables::sort::{SortKey, SortToken};
///
/// let token: SortToken = "2.-1".parse().unwrap();
/// assert_eq!(token.keys(), &[SortKey::ascending(2), SortKey::descending(1)]);
///
/// // Clicking column 1 promotes it to primary, ascending
/// assert_eq!(token.added(1).to_string(), "1.2");
/// assert_eq!(token.removed(2).to_string(), "-1");
/// assert_eq!(token.reversed(2).to_string(), "-2.-1");
/// ```
///
/// Header clicks move a column through these states:
///
/// ```mermaid
/// stateDiagram-v2
///     [*] --> Unsorted
///     Unsorted --> Primary: add (prepend ascending)
///     Primary --> PrimaryDesc: add (only column, or ascending primary)
///     PrimaryDesc --> Primary: add
///     Secondary --> Primary: add (promote ascending)
///     Primary --> Unsorted: remove
///     Secondary --> Unsorted: remove
/// ```
#[cfg_attr(doc, aquamarine::aquamarine)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SortToken {
	keys: Vec<SortKey>,
}

impl SortToken {
	/// An empty token (no sorting)
	pub fn new() -> Self {
		Self::default()
	}

	/// Decode a token; the empty string is the empty token
	pub fn parse(token: &str) -> Result<Self, SortTokenError> {
		if token.is_empty() {
			return Ok(Self::new());
		}
		token
			.split(SEPARATOR)
			.map(|segment| parse_key(token, segment))
			.collect::<Result<Vec<_>, _>>()
			.map(|keys| Self { keys })
	}

	/// The keys in priority order
	pub fn keys(&self) -> &[SortKey] {
		&self.keys
	}

	/// The column ids in priority order, without direction
	pub fn columns(&self) -> impl Iterator<Item = u32> + '_ {
		self.keys.iter().map(|key| key.column)
	}

	/// Number of keys
	pub fn len(&self) -> usize {
		self.keys.len()
	}

	/// Returns `true` if nothing is sorted
	pub fn is_empty(&self) -> bool {
		self.keys.is_empty()
	}

	/// Returns `true` if `column` takes part in the sort
	pub fn contains(&self, column: u32) -> bool {
		self.columns().any(|c| c == column)
	}

	/// 1-based priority of `column`, if it takes part in the sort
	pub fn priority(&self, column: u32) -> Option<usize> {
		self.columns().position(|c| c == column).map(|index| index + 1)
	}

	/// Returns `true` if `column` is sorted in descending order
	pub fn is_reverse(&self, column: u32) -> bool {
		self.keys
			.iter()
			.any(|key| key.column == column && key.descending)
	}

	/// The token after a click on the header of `column`
	///
	/// - not sorted yet: prepended as the new primary key, ascending
	/// - sorted together with other columns: moved to primary; descending if
	///   it already was the ascending primary key, ascending otherwise
	/// - the only sorted column: direction toggled
	pub fn added(&self, column: u32) -> Self {
		if !self.contains(column) {
			let mut keys = Vec::with_capacity(self.keys.len() + 1);
			keys.push(SortKey::ascending(column));
			keys.extend_from_slice(&self.keys);
			return Self { keys };
		}

		if self.keys.len() == 1 {
			return self.reversed(column);
		}

		let was_ascending_primary =
			self.keys[0].column == column && !self.is_reverse(column);
		let primary = if was_ascending_primary {
			SortKey::descending(column)
		} else {
			SortKey::ascending(column)
		};

		let mut keys = vec![primary];
		keys.extend(self.removed(column).keys);
		Self { keys }
	}

	/// The token without `column`, other keys in their original order
	pub fn removed(&self, column: u32) -> Self {
		Self {
			keys: self
				.keys
				.iter()
				.copied()
				.filter(|key| key.column != column)
				.collect(),
		}
	}

	/// The token with the direction of `column` toggled in place
	pub fn reversed(&self, column: u32) -> Self {
		Self {
			keys: self
				.keys
				.iter()
				.map(|key| {
					if key.column == column {
						key.reversed()
					} else {
						*key
					}
				})
				.collect(),
		}
	}

	/// Translate the token into ordering expressions
	///
	/// `order_field` maps a column id to the field the record source should
	/// order by. Ids it does not know are skipped.
	pub fn order_by<'f, F>(&self, order_field: F) -> Vec<OrderBy>
	where
		F: Fn(u32) -> Option<&'f str>,
	{
		self.keys
			.iter()
			.filter_map(|key| match order_field(key.column) {
				Some(field) => Some(OrderBy {
					field: field.to_string(),
					descending: key.descending,
				}),
				None => {
					tracing::debug!(column = key.column, "sort key has no sortable column, skipping");
					None
				}
			})
			.collect()
	}
}

fn parse_key(token: &str, segment: &str) -> Result<SortKey, SortTokenError> {
	if segment.is_empty() {
		return Err(SortTokenError::EmptySegment {
			token: token.to_string(),
		});
	}

	let (descending, digits) = match segment.strip_prefix(DESCENDING_PREFIX) {
		Some(rest) => (true, rest),
		None => (false, segment),
	};

	let not_numeric = || SortTokenError::NotNumeric {
		token: token.to_string(),
		segment: segment.to_string(),
	};

	// `u32::from_str` would also accept a leading `+`
	if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
		return Err(not_numeric());
	}
	let column: u32 = digits.parse().map_err(|_| not_numeric())?;
	if column == 0 {
		return Err(SortTokenError::ZeroColumn {
			token: token.to_string(),
		});
	}

	Ok(SortKey { column, descending })
}

impl FromStr for SortToken {
	type Err = SortTokenError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl fmt::Display for SortToken {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (index, key) in self.keys.iter().enumerate() {
			if index > 0 {
				write!(f, "{}", SEPARATOR)?;
			}
			write!(f, "{}", key)?;
		}
		Ok(())
	}
}

impl FromIterator<SortKey> for SortToken {
	fn from_iter<T: IntoIterator<Item = SortKey>>(iter: T) -> Self {
		Self {
			keys: iter.into_iter().collect(),
		}
	}
}

/// One ordering expression for the record source
///
/// Displays in the common `-field` convention for descending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
	/// Field to order by
	pub field: String,
	/// `true` for descending order
	pub descending: bool,
}

impl fmt::Display for OrderBy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.descending {
			write!(f, "{}{}", DESCENDING_PREFIX, self.field)
		} else {
			f.write_str(&self.field)
		}
	}
}

/// The sort state of one column of a list view
///
/// Wraps the current token and the column id and renders the three header
/// links: add (click), remove, and reverse. Each link replaces only the
/// ordering parameter; a transition to the empty token removes the parameter.
///
/// # Examples
///
/// ```
/// use smart_lists_tables::sort::SortState;
/// use smart_lists_urls::QueryParams;
/// use std::sync::Arc;
///
/// let params = Arc::new(QueryParams::parse("o=1.-2.3&page=2"));
/// let state = SortState::new(params, 2, "o").unwrap();
///
/// assert!(state.is_ordered());
/// assert!(state.is_reverse());
/// assert_eq!(state.priority(), Some(2));
/// assert_eq!(state.add_sort_by(), "?o=2.1.3&page=2");
/// assert_eq!(state.remove_sort_by(), "?o=1.3&page=2");
/// assert_eq!(state.reverse_sort_by(), "?o=1.2.3&page=2");
/// ```
#[derive(Debug, Clone)]
pub struct SortState {
	column_id: u32,
	ordering_param: String,
	token: SortToken,
	query_params: Arc<QueryParams>,
}

impl SortState {
	/// Bind `column_id` to the token found under `ordering_param`
	///
	/// A missing parameter is the empty token; a malformed one is an error.
	pub fn new(
		query_params: Arc<QueryParams>,
		column_id: u32,
		ordering_param: impl Into<String>,
	) -> Result<Self, SortTokenError> {
		let ordering_param = ordering_param.into();
		let token = match query_params.first(&ordering_param) {
			Some(raw) => SortToken::parse(raw)?,
			None => SortToken::new(),
		};
		Ok(Self {
			column_id,
			ordering_param,
			token,
			query_params,
		})
	}

	/// The column this state belongs to
	pub fn column_id(&self) -> u32 {
		self.column_id
	}

	/// The decoded current token
	pub fn token(&self) -> &SortToken {
		&self.token
	}

	/// Column ids of the current token, in priority order
	pub fn current_columns(&self) -> Vec<u32> {
		self.token.columns().collect()
	}

	/// Returns `true` if this column takes part in the current sort
	pub fn is_ordered(&self) -> bool {
		self.token.contains(self.column_id)
	}

	/// 1-based priority of this column in the current sort
	pub fn priority(&self) -> Option<usize> {
		self.token.priority(self.column_id)
	}

	/// Returns `true` if this column is currently sorted descending
	pub fn is_reverse(&self) -> bool {
		self.token.is_reverse(self.column_id)
	}

	/// Link for a click on the column header (see [`SortToken::added`])
	pub fn add_sort_by(&self) -> String {
		self.link(self.token.added(self.column_id))
	}

	/// Link that drops this column from the sort
	pub fn remove_sort_by(&self) -> String {
		self.link(self.token.removed(self.column_id))
	}

	/// Link that toggles the direction of this column
	pub fn reverse_sort_by(&self) -> String {
		self.link(self.token.reversed(self.column_id))
	}

	fn link(&self, token: SortToken) -> String {
		let value = (!token.is_empty()).then(|| token.to_string());
		build_query_string(&self.query_params, [(self.ordering_param.as_str(), value)])
	}
}
