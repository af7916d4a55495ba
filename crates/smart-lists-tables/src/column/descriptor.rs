//! Column descriptor

use super::title::field_title;
use crate::error::{Result, SmartListError};
use crate::metadata::FieldMetadataProvider;
use crate::record::STR_FIELD;
use crate::sort::SortState;
use smart_lists_urls::QueryParams;
use std::sync::Arc;

/// One column of a list view
///
/// # Examples
///
/// ```
/// use smart_lists_tables::column::ColumnDescriptor;
/// use smart_lists_tables::metadata::{FieldMeta, StaticMetadata};
/// use smart_lists_urls::QueryParams;
/// use std::sync::Arc;
///
/// let meta = StaticMetadata::new("ticket")
///     .with_field(FieldMeta::new("created_at").with_verbose_name("date created"));
/// let params = Arc::new(QueryParams::parse("o=-1"));
///
/// let column = ColumnDescriptor::new(&meta, "created_at", 1, params, "o").unwrap();
/// assert_eq!(column.title(), "Date Created");
/// assert_eq!(column.order_field(), Some("created_at"));
/// assert_eq!(column.add_sort_url().as_deref(), Some("?o=1"));
/// ```
#[derive(Debug, Clone)]
pub struct ColumnDescriptor {
	id: u32,
	field_name: String,
	title: String,
	order_field: Option<String>,
	order: Option<SortState>,
}

impl ColumnDescriptor {
	/// Describe `field_name` as column `id`
	///
	/// # Errors
	///
	/// * [`SmartListError::ReservedFieldName`] if the name starts with `_`
	///   and is not `__str__`
	/// * [`SmartListError::AltersData`] if the name is an accessor that
	///   mutates data
	/// * [`SmartListError::InvalidSortToken`] if the column is sortable and
	///   the ordering parameter is malformed
	pub fn new(
		metadata: &dyn FieldMetadataProvider,
		field_name: impl Into<String>,
		id: u32,
		query_params: Arc<QueryParams>,
		ordering_param: &str,
	) -> Result<Self> {
		let field_name = field_name.into();
		if field_name.starts_with('_') && field_name != STR_FIELD {
			return Err(SmartListError::ReservedFieldName(field_name));
		}

		let order_field = order_field(metadata, &field_name)?;
		let order = match order_field {
			Some(_) => Some(SortState::new(query_params, id, ordering_param)?),
			None => None,
		};

		Ok(Self {
			id,
			title: field_title(metadata, &field_name),
			field_name,
			order_field,
			order,
		})
	}

	/// The 1-based column id
	pub fn id(&self) -> u32 {
		self.id
	}

	/// The requested field name
	pub fn field_name(&self) -> &str {
		&self.field_name
	}

	/// The header title
	pub fn title(&self) -> &str {
		&self.title
	}

	/// The field the record source orders by for this column
	pub fn order_field(&self) -> Option<&str> {
		self.order_field.as_deref()
	}

	/// The sort state, present iff the column is sortable
	pub fn order(&self) -> Option<&SortState> {
		self.order.as_ref()
	}

	/// Returns `true` if the column can be sorted
	pub fn is_sortable(&self) -> bool {
		self.order.is_some()
	}

	/// Header link that promotes this column (see [`SortState::add_sort_by`])
	pub fn add_sort_url(&self) -> Option<String> {
		self.order.as_ref().map(SortState::add_sort_by)
	}

	/// Header link that drops this column from the sort
	pub fn remove_sort_url(&self) -> Option<String> {
		self.order.as_ref().map(SortState::remove_sort_by)
	}

	/// Header link that toggles this column's direction
	pub fn reverse_sort_url(&self) -> Option<String> {
		self.order.as_ref().map(SortState::reverse_sort_by)
	}
}

fn order_field(metadata: &dyn FieldMetadataProvider, field_name: &str) -> Result<Option<String>> {
	if field_name == STR_FIELD {
		return Ok(None);
	}
	if metadata.field(field_name).is_some() {
		return Ok(Some(field_name.to_string()));
	}
	match metadata.accessor(field_name) {
		Some(accessor) if accessor.is_alters_data() => {
			Err(SmartListError::AltersData(field_name.to_string()))
		}
		Some(accessor) => Ok(accessor.order_field().map(str::to_string)),
		// Projection rows carry names the record type does not declare
		None => Ok(Some(field_name.to_string())),
	}
}
