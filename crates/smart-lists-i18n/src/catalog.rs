//! Message catalog for storing label translations

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A message catalog containing translations for a specific locale
///
/// Catalogs can be filled programmatically or deserialized from any serde
/// format the application already uses for configuration.
///
/// # Example
/// ```
/// use smart_lists_i18n::MessageCatalog;
///
/// let mut catalog = MessageCatalog::new("de");
/// catalog.add("Yes", "Ja");
///
/// assert_eq!(catalog.get("Yes"), Some("Ja"));
/// assert_eq!(catalog.get("No"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageCatalog {
	locale: String,
	#[serde(default)]
	messages: HashMap<String, String>,
}

impl MessageCatalog {
	/// Create a new, empty message catalog for the given locale
	pub fn new(locale: impl Into<String>) -> Self {
		Self {
			locale: locale.into(),
			messages: HashMap::new(),
		}
	}

	/// Create a catalog from `(message, translation)` pairs
	///
	/// # Example
	/// ```
	/// use smart_lists_i18n::MessageCatalog;
	///
	/// let catalog = MessageCatalog::from_pairs("ja", [("All", "すべて"), ("Yes", "はい")]);
	/// assert_eq!(catalog.len(), 2);
	/// assert_eq!(catalog.get("All"), Some("すべて"));
	/// ```
	pub fn from_pairs<I, M, T>(locale: impl Into<String>, pairs: I) -> Self
	where
		I: IntoIterator<Item = (M, T)>,
		M: Into<String>,
		T: Into<String>,
	{
		let mut catalog = Self::new(locale);
		for (message, translation) in pairs {
			catalog.add(message, translation);
		}
		catalog
	}

	/// Get the locale for this catalog
	pub fn locale(&self) -> &str {
		&self.locale
	}

	/// Add (or replace) a translation
	pub fn add(&mut self, message: impl Into<String>, translation: impl Into<String>) {
		self.messages.insert(message.into(), translation.into());
	}

	/// Get a translation
	pub fn get(&self, message: &str) -> Option<&str> {
		self.messages.get(message).map(String::as_str)
	}

	/// Number of translated messages
	pub fn len(&self) -> usize {
		self.messages.len()
	}

	/// Returns `true` if the catalog has no translations
	pub fn is_empty(&self) -> bool {
		self.messages.is_empty()
	}
}
