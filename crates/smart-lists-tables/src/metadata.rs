//! Field metadata of the record type shown in a list
//!
//! List views never introspect records themselves. Everything they need to
//! know about the record type (which names are queryable fields, their human
//! labels, choices, booleans, relations, and hints attached to computed
//! accessors) comes from a [`FieldMetadataProvider`]. An ORM model registry,
//! a static description, or a document schema can all provide it.

use indexmap::IndexMap;

/// The kind of a declared field, as far as filtering is concerned
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldKind {
	/// Any field without special filter behaviour
	#[default]
	Plain,
	/// A boolean field: filtered by yes/no
	Boolean,
	/// A field restricted to enumerated `(value, label)` choices
	Choices(Vec<(String, String)>),
	/// A field referencing another record by key
	Reference {
		/// Verbose name of the referenced record type
		target: String,
	},
}

/// Metadata of one queryable field
///
/// # Examples
///
/// ```
/// use smart_lists_tables::metadata::{FieldKind, FieldMeta};
///
/// let status = FieldMeta::new("status")
///     .with_choices([("1", "Open"), ("2", "Closed")]);
/// assert_eq!(status.verbose_name(), "status");
/// assert_eq!(status.choices().map(|c| c.len()), Some(2));
///
/// let created = FieldMeta::new("created_at").with_verbose_name("date created");
/// assert_eq!(created.verbose_name(), "date created");
/// assert_eq!(created.kind(), &FieldKind::Plain);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMeta {
	name: String,
	verbose_name: String,
	kind: FieldKind,
}

impl FieldMeta {
	/// A plain field; the verbose name defaults to the name with `_` → space
	pub fn new(name: impl Into<String>) -> Self {
		let name = name.into();
		let verbose_name = name.replace('_', " ");
		Self {
			name,
			verbose_name,
			kind: FieldKind::Plain,
		}
	}

	/// A boolean field
	pub fn boolean(name: impl Into<String>) -> Self {
		Self::new(name).with_kind(FieldKind::Boolean)
	}

	/// A field referencing records of type `target`
	pub fn reference(name: impl Into<String>, target: impl Into<String>) -> Self {
		Self::new(name).with_kind(FieldKind::Reference {
			target: target.into(),
		})
	}

	/// Set the human label
	pub fn with_verbose_name(mut self, verbose_name: impl Into<String>) -> Self {
		self.verbose_name = verbose_name.into();
		self
	}

	/// Set the field kind
	pub fn with_kind(mut self, kind: FieldKind) -> Self {
		self.kind = kind;
		self
	}

	/// Restrict the field to `(value, label)` choices
	pub fn with_choices<I, V, L>(self, choices: I) -> Self
	where
		I: IntoIterator<Item = (V, L)>,
		V: Into<String>,
		L: Into<String>,
	{
		let choices = choices
			.into_iter()
			.map(|(value, label)| (value.into(), label.into()))
			.collect();
		self.with_kind(FieldKind::Choices(choices))
	}

	/// The field name
	pub fn name(&self) -> &str {
		&self.name
	}

	/// The human label
	pub fn verbose_name(&self) -> &str {
		&self.verbose_name
	}

	/// The field kind
	pub fn kind(&self) -> &FieldKind {
		&self.kind
	}

	/// The declared choices, if the field has any
	pub fn choices(&self) -> Option<&[(String, String)]> {
		match &self.kind {
			FieldKind::Choices(choices) => Some(choices),
			_ => None,
		}
	}

	/// Returns `true` for boolean fields
	pub fn is_boolean(&self) -> bool {
		matches!(self.kind, FieldKind::Boolean)
	}

	/// Returns `true` for reference fields
	pub fn is_reference(&self) -> bool {
		matches!(self.kind, FieldKind::Reference { .. })
	}

	/// Verbose name of the referenced record type, for reference fields
	pub fn reference_target(&self) -> Option<&str> {
		match &self.kind {
			FieldKind::Reference { target } => Some(target.as_str()),
			_ => None,
		}
	}
}

/// Hints attached to a computed, zero-argument accessor of the record type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessorMeta {
	name: String,
	short_description: Option<String>,
	order_field: Option<String>,
	alters_data: bool,
}

impl AccessorMeta {
	/// An accessor without hints
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			..Self::default()
		}
	}

	/// Column title to use instead of the derived one
	pub fn with_short_description(mut self, description: impl Into<String>) -> Self {
		self.short_description = Some(description.into());
		self
	}

	/// Field to order by when the column is sorted
	pub fn with_order_field(mut self, field: impl Into<String>) -> Self {
		self.order_field = Some(field.into());
		self
	}

	/// Marks the accessor as mutating; it can never be shown in a list
	pub fn alters_data(mut self) -> Self {
		self.alters_data = true;
		self
	}

	/// The accessor name
	pub fn name(&self) -> &str {
		&self.name
	}

	/// The short description hint
	pub fn short_description(&self) -> Option<&str> {
		self.short_description.as_deref()
	}

	/// The order field hint
	pub fn order_field(&self) -> Option<&str> {
		self.order_field.as_deref()
	}

	/// Returns `true` if calling the accessor mutates data
	pub fn is_alters_data(&self) -> bool {
		self.alters_data
	}
}

/// Metadata lookups a list view needs about its record type
pub trait FieldMetadataProvider: Send + Sync {
	/// Human name of the record type, e.g. `"ticket"`
	fn verbose_name(&self) -> &str;

	/// The queryable field called `name`, if declared
	fn field(&self, name: &str) -> Option<&FieldMeta>;

	/// The zero-argument accessor called `name`, if the record type has one
	fn accessor(&self, name: &str) -> Option<&AccessorMeta>;
}

/// A [`FieldMetadataProvider`] backed by plain maps
///
/// # Examples
///
/// ```
/// use smart_lists_tables::metadata::{
///     AccessorMeta, FieldMeta, FieldMetadataProvider, StaticMetadata,
/// };
///
/// let meta = StaticMetadata::new("ticket")
///     .with_field(FieldMeta::new("title"))
///     .with_field(FieldMeta::boolean("is_urgent"))
///     .with_accessor(AccessorMeta::new("age").with_order_field("created_at"));
///
/// assert!(meta.field("title").is_some());
/// assert!(meta.field("age").is_none());
/// assert_eq!(meta.accessor("age").and_then(|a| a.order_field()), Some("created_at"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticMetadata {
	verbose_name: String,
	fields: IndexMap<String, FieldMeta>,
	accessors: IndexMap<String, AccessorMeta>,
}

impl StaticMetadata {
	/// Metadata for a record type called `verbose_name`
	pub fn new(verbose_name: impl Into<String>) -> Self {
		Self {
			verbose_name: verbose_name.into(),
			..Self::default()
		}
	}

	/// Declare a queryable field
	pub fn with_field(mut self, field: FieldMeta) -> Self {
		self.fields.insert(field.name.clone(), field);
		self
	}

	/// Declare a computed accessor
	pub fn with_accessor(mut self, accessor: AccessorMeta) -> Self {
		self.accessors.insert(accessor.name.clone(), accessor);
		self
	}

	/// Declared fields in declaration order
	pub fn fields(&self) -> impl Iterator<Item = &FieldMeta> {
		self.fields.values()
	}
}

impl FieldMetadataProvider for StaticMetadata {
	fn verbose_name(&self) -> &str {
		&self.verbose_name
	}

	fn field(&self, name: &str) -> Option<&FieldMeta> {
		self.fields.get(name)
	}

	fn accessor(&self, name: &str) -> Option<&AccessorMeta> {
		self.accessors.get(name)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_field_meta_defaults() {
		let field = FieldMeta::new("due_date");
		assert_eq!(field.name(), "due_date");
		assert_eq!(field.verbose_name(), "due date");
		assert_eq!(field.kind(), &FieldKind::Plain);
		assert!(field.choices().is_none());
		assert!(!field.is_boolean());
		assert!(!field.is_reference());
	}

	#[rstest]
	fn test_field_meta_kinds() {
		assert!(FieldMeta::boolean("done").is_boolean());
		let owner = FieldMeta::reference("owner", "user");
		assert!(owner.is_reference());
		assert_eq!(owner.reference_target(), Some("user"));
		assert_eq!(FieldMeta::new("title").reference_target(), None);
		assert_eq!(
			owner.kind(),
			&FieldKind::Reference {
				target: "user".to_string()
			}
		);
	}

	#[rstest]
	fn test_accessor_meta_builder() {
		let accessor = AccessorMeta::new("archive")
			.with_short_description("Archive now")
			.alters_data();
		assert_eq!(accessor.name(), "archive");
		assert_eq!(accessor.short_description(), Some("Archive now"));
		assert_eq!(accessor.order_field(), None);
		assert!(accessor.is_alters_data());
	}

	#[rstest]
	fn test_static_metadata_keeps_declaration_order() {
		let meta = StaticMetadata::new("ticket")
			.with_field(FieldMeta::new("b"))
			.with_field(FieldMeta::new("a"));
		let names: Vec<_> = meta.fields().map(FieldMeta::name).collect();
		assert_eq!(names, vec!["b", "a"]);
		assert_eq!(meta.verbose_name(), "ticket");
	}
}
