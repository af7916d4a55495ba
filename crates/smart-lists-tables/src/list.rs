//! The list view
//!
//! A [`ListView`] is assembled once per request from a record source, the
//! record type's metadata, and the current query parameters. Columns and
//! filters are built eagerly (so configuration errors surface before
//! anything renders); rows are produced lazily on each call to
//! [`ListView::items`].

use crate::column::ColumnDescriptor;
use crate::error::Result;
use crate::filter::{FilterDescriptor, FilterField};
use crate::item::Item;
use crate::metadata::FieldMetadataProvider;
use crate::record::{RecordSource, STR_FIELD};
use crate::settings::{
	DEFAULT_ORDERING_QUERY_PARAM, DEFAULT_PAGE_QUERY_PARAM, DEFAULT_SEARCH_QUERY_PARAM,
	ListSettings,
};
use crate::sort::{OrderBy, SortToken};
use indexmap::IndexMap;
use smart_lists_i18n::{Localizer, PassthroughLocalizer};
use smart_lists_urls::QueryParams;
use std::fmt;
use std::sync::Arc;

static PASSTHROUGH: PassthroughLocalizer = PassthroughLocalizer;

/// A sortable, filterable list of records
///
/// # Examples
///
/// ```
/// use smart_lists_tables::list::ListView;
/// use smart_lists_tables::metadata::{FieldMeta, StaticMetadata};
/// use smart_lists_tables::record::{FieldValue, InMemorySource};
/// use smart_lists_urls::QueryParams;
/// use std::collections::BTreeMap;
///
/// let rows = vec![BTreeMap::from([
///     ("title".to_string(), FieldValue::from("Printer on fire")),
///     ("done".to_string(), FieldValue::from(false)),
/// ])];
/// let source = InMemorySource::new(rows);
/// let meta = StaticMetadata::new("ticket")
///     .with_field(FieldMeta::new("title"))
///     .with_field(FieldMeta::boolean("done"));
///
/// let list = ListView::builder(&source, &meta)
///     .query_params(QueryParams::parse("o=-1&done=0"))
///     .list_display(["title", "done"])
///     .list_filter(["done"])
///     .build()
///     .unwrap();
///
/// assert_eq!(list.columns()[0].title(), "Title");
/// assert_eq!(list.columns()[0].add_sort_url().as_deref(), Some("?o=1&done=0"));
/// assert_eq!(list.ordering()[0].to_string(), "-title");
/// assert_eq!(list.filters()[0].active_option().unwrap().label(), "No");
///
/// let cells: Vec<String> = list
///     .items()
///     .flat_map(|item| item.fields().map(|cell| cell.render()).collect::<Vec<_>>())
///     .collect();
/// assert_eq!(cells, vec!["<td>Printer on fire</td>", "<td>False</td>"]);
/// ```
pub struct ListView<'a, S: RecordSource> {
	source: &'a S,
	localizer: &'a dyn Localizer,
	query_params: Arc<QueryParams>,
	ordering_param: String,
	search_param: String,
	page_param: String,
	search_fields: Vec<String>,
	token: SortToken,
	columns: Vec<ColumnDescriptor>,
	filters: Vec<FilterDescriptor>,
}

impl<'a, S: RecordSource> ListView<'a, S> {
	/// Start building a list over `source`
	pub fn builder(source: &'a S, metadata: &'a dyn FieldMetadataProvider) -> ListViewBuilder<'a, S> {
		ListViewBuilder::new(source, metadata)
	}

	/// Columns, ids `1..=N` in display order
	pub fn columns(&self) -> &[ColumnDescriptor] {
		&self.columns
	}

	/// Filters, in request order
	pub fn filters(&self) -> &[FilterDescriptor] {
		&self.filters
	}

	/// Rows of the list; every call iterates the source again
	pub fn items(&self) -> impl Iterator<Item = Item<'_, S::Record>> + '_ {
		self.source
			.records()
			.map(|record| Item::new(record, &self.columns, self.localizer))
	}

	/// The current query parameters
	pub fn query_params(&self) -> &QueryParams {
		&self.query_params
	}

	/// Name of the ordering query parameter
	pub fn ordering_query_param(&self) -> &str {
		&self.ordering_param
	}

	/// Name of the search query parameter
	pub fn search_query_param(&self) -> &str {
		&self.search_param
	}

	/// Name of the page query parameter
	pub fn page_query_param(&self) -> &str {
		&self.page_param
	}

	/// The current search text, empty when absent
	///
	/// Searching is left to the caller; see [`search_fields`](Self::search_fields).
	pub fn search_query(&self) -> &str {
		self.query_params.first(&self.search_param).unwrap_or_default()
	}

	/// Fields the caller should search in
	pub fn search_fields(&self) -> &[String] {
		&self.search_fields
	}

	/// The decoded sort token
	pub fn sort_token(&self) -> &SortToken {
		&self.token
	}

	/// The current sort as ordering expressions for the record source
	///
	/// Keys naming unsortable or out-of-range columns are skipped.
	pub fn ordering(&self) -> Vec<OrderBy> {
		self.token.order_by(|id| {
			let index = usize::try_from(id).ok()?.checked_sub(1)?;
			self.columns.get(index)?.order_field()
		})
	}

	/// Selected value (first value only) of each filter present in the query
	pub fn active_filters(&self) -> IndexMap<&str, &str> {
		self.filters
			.iter()
			.filter_map(|filter| {
				let name = filter.parameter_name();
				self.query_params.first(name).map(|value| (name, value))
			})
			.collect()
	}
}

impl<S: RecordSource> fmt::Debug for ListView<'_, S> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ListView")
			.field("query_params", &self.query_params)
			.field("token", &self.token)
			.field("columns", &self.columns)
			.field("filters", &self.filters)
			.finish_non_exhaustive()
	}
}

/// Builder for [`ListView`]
pub struct ListViewBuilder<'a, S: RecordSource> {
	source: &'a S,
	metadata: &'a dyn FieldMetadataProvider,
	localizer: &'a dyn Localizer,
	query_params: QueryParams,
	ordering_param: String,
	search_param: String,
	page_param: String,
	list_display: Vec<String>,
	list_filter: Vec<FilterField>,
	list_search: Vec<String>,
	settings: Option<ListSettings>,
}

impl<'a, S: RecordSource> ListViewBuilder<'a, S> {
	fn new(source: &'a S, metadata: &'a dyn FieldMetadataProvider) -> Self {
		Self {
			source,
			metadata,
			localizer: &PASSTHROUGH,
			query_params: QueryParams::new(),
			ordering_param: DEFAULT_ORDERING_QUERY_PARAM.to_string(),
			search_param: DEFAULT_SEARCH_QUERY_PARAM.to_string(),
			page_param: DEFAULT_PAGE_QUERY_PARAM.to_string(),
			list_display: Vec::new(),
			list_filter: Vec::new(),
			list_search: Vec::new(),
			settings: None,
		}
	}

	/// The query parameters of the current request
	pub fn query_params(mut self, query_params: QueryParams) -> Self {
		self.query_params = query_params;
		self
	}

	/// Fields shown as columns; `__str__` alone when empty
	pub fn list_display<I, F>(mut self, fields: I) -> Self
	where
		I: IntoIterator<Item = F>,
		F: Into<String>,
	{
		self.list_display = fields.into_iter().map(Into::into).collect();
		self
	}

	/// Filters offered above the list
	pub fn list_filter<I, F>(mut self, filters: I) -> Self
	where
		I: IntoIterator<Item = F>,
		F: Into<FilterField>,
	{
		self.list_filter = filters.into_iter().map(Into::into).collect();
		self
	}

	/// Append one filter
	pub fn filter(mut self, filter: impl Into<FilterField>) -> Self {
		self.list_filter.push(filter.into());
		self
	}

	/// Fields the caller searches in
	pub fn list_search<I, F>(mut self, fields: I) -> Self
	where
		I: IntoIterator<Item = F>,
		F: Into<String>,
	{
		self.list_search = fields.into_iter().map(Into::into).collect();
		self
	}

	/// Name of the ordering query parameter
	pub fn ordering_query_param(mut self, name: impl Into<String>) -> Self {
		self.ordering_param = name.into();
		self
	}

	/// Name of the search query parameter
	pub fn search_query_param(mut self, name: impl Into<String>) -> Self {
		self.search_param = name.into();
		self
	}

	/// Name of the page query parameter
	pub fn page_query_param(mut self, name: impl Into<String>) -> Self {
		self.page_param = name.into();
		self
	}

	/// Apply parameter names and field lists from `settings`
	///
	/// Filters added before this call are replaced. The settings are
	/// validated by [`build`](Self::build).
	pub fn settings(mut self, settings: &ListSettings) -> Self {
		self.settings = Some(settings.clone());
		self.ordering_query_param(settings.ordering_query_param.as_str())
			.search_query_param(settings.search_query_param.as_str())
			.page_query_param(settings.page_query_param.as_str())
			.list_display(settings.list_display.iter().map(String::as_str))
			.list_filter(settings.list_filter.iter().map(String::as_str))
			.list_search(settings.list_search.iter().map(String::as_str))
	}

	/// Localizer for labels and dates; [`PassthroughLocalizer`] by default
	pub fn localizer(mut self, localizer: &'a dyn Localizer) -> Self {
		self.localizer = localizer;
		self
	}

	/// Build the columns and filters
	///
	/// # Errors
	///
	/// [`SmartListError::Settings`](crate::error::SmartListError::Settings)
	/// if applied settings fail [`ListSettings::validate`]; any column or
	/// filter configuration error, or a malformed sort token.
	pub fn build(self) -> Result<ListView<'a, S>> {
		if let Some(settings) = &self.settings {
			settings.validate()?;
		}
		let query_params = Arc::new(self.query_params);
		let token = match query_params.first(&self.ordering_param) {
			Some(raw) => SortToken::parse(raw)?,
			None => SortToken::new(),
		};

		let list_display = if self.list_display.is_empty() {
			vec![STR_FIELD.to_string()]
		} else {
			self.list_display
		};
		let columns = list_display
			.into_iter()
			.zip(1..)
			.map(|(field, id)| {
				ColumnDescriptor::new(
					self.metadata,
					field,
					id,
					Arc::clone(&query_params),
					&self.ordering_param,
				)
			})
			.collect::<Result<Vec<_>>>()?;

		let filters = self
			.list_filter
			.iter()
			.map(|field| {
				FilterDescriptor::new(
					field,
					self.metadata,
					self.source,
					Arc::clone(&query_params),
					self.localizer,
				)
			})
			.collect::<Result<Vec<_>>>()?;

		tracing::debug!(
			columns = columns.len(),
			filters = filters.len(),
			sort = %token,
			"built list view"
		);

		Ok(ListView {
			source: self.source,
			localizer: self.localizer,
			query_params,
			ordering_param: self.ordering_param,
			search_param: self.search_param,
			page_param: self.page_param,
			search_fields: self.list_search,
			token,
			columns,
			filters,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::SmartListError;
	use crate::filter::ChoiceFilter;
	use crate::metadata::{AccessorMeta, FieldMeta, StaticMetadata};
	use crate::record::{FieldValue, InMemorySource};
	use rstest::*;
	use std::collections::BTreeMap;

	type Row = BTreeMap<String, FieldValue>;

	#[fixture]
	fn source() -> InMemorySource<Row> {
		InMemorySource::new(vec![
			Row::from([("title".to_string(), FieldValue::from("a"))]),
			Row::from([("title".to_string(), FieldValue::from("b"))]),
		])
	}

	#[fixture]
	fn metadata() -> StaticMetadata {
		StaticMetadata::new("ticket")
			.with_field(FieldMeta::new("title"))
			.with_field(FieldMeta::new("status").with_choices([("o", "Open")]))
			.with_accessor(AccessorMeta::new("age").with_order_field("created_at"))
			.with_accessor(AccessorMeta::new("summary"))
	}

	#[rstest]
	fn test_default_display_is_str(source: InMemorySource<Row>, metadata: StaticMetadata) {
		let list = ListView::builder(&source, &metadata).build().unwrap();
		assert_eq!(list.columns().len(), 1);
		assert_eq!(list.columns()[0].field_name(), "__str__");
		assert_eq!(list.columns()[0].title(), "Ticket");
		assert!(!list.columns()[0].is_sortable());
		assert!(list.filters().is_empty());
	}

	#[rstest]
	fn test_column_ids_follow_request_order(source: InMemorySource<Row>, metadata: StaticMetadata) {
		let list = ListView::builder(&source, &metadata)
			.list_display(["summary", "title", "age"])
			.build()
			.unwrap();
		let ids: Vec<_> = list.columns().iter().map(ColumnDescriptor::id).collect();
		assert_eq!(ids, vec![1, 2, 3]);
	}

	#[rstest]
	fn test_ordering_maps_ids_to_order_fields(source: InMemorySource<Row>, metadata: StaticMetadata) {
		let list = ListView::builder(&source, &metadata)
			.query_params(QueryParams::parse("o=3.-1.-2.9"))
			.list_display(["summary", "title", "age"])
			.build()
			.unwrap();
		let ordering: Vec<_> = list.ordering().iter().map(ToString::to_string).collect();
		assert_eq!(ordering, vec!["created_at", "-title"]);
		assert_eq!(list.sort_token().len(), 4);
	}

	#[rstest]
	fn test_malformed_sort_token(source: InMemorySource<Row>, metadata: StaticMetadata) {
		let error = ListView::builder(&source, &metadata)
			.query_params(QueryParams::parse("o=-"))
			.build()
			.unwrap_err();
		assert!(matches!(error, SmartListError::InvalidSortToken(_)));
	}

	#[rstest]
	fn test_search_passthrough(source: InMemorySource<Row>, metadata: StaticMetadata) {
		let list = ListView::builder(&source, &metadata)
			.query_params(QueryParams::parse("find=printer"))
			.search_query_param("find")
			.list_search(["title"])
			.build()
			.unwrap();
		assert_eq!(list.search_query(), "printer");
		assert_eq!(list.search_fields(), ["title".to_string()]);
		assert_eq!(list.search_query_param(), "find");

		let empty = ListView::builder(&source, &metadata).build().unwrap();
		assert_eq!(empty.search_query(), "");
	}

	#[rstest]
	fn test_active_filters(source: InMemorySource<Row>, metadata: StaticMetadata) {
		let list = ListView::builder(&source, &metadata)
			.query_params(QueryParams::parse("status=o&status=c&q=x"))
			.list_filter(["status"])
			.filter(FilterField::custom(ChoiceFilter::new("due", "Due")))
			.build()
			.unwrap();
		let active: Vec<_> = list.active_filters().into_iter().collect();
		assert_eq!(active, vec![("status", "o")]);
	}

	#[rstest]
	fn test_settings_apply(source: InMemorySource<Row>, metadata: StaticMetadata) {
		let settings = ListSettings {
			ordering_query_param: "sort".to_string(),
			list_display: vec!["title".to_string()],
			list_filter: vec!["status".to_string()],
			..ListSettings::default()
		};
		let list = ListView::builder(&source, &metadata)
			.query_params(QueryParams::parse("sort=1&o=zzz"))
			.settings(&settings)
			.build()
			.unwrap();
		assert_eq!(list.ordering_query_param(), "sort");
		assert_eq!(list.columns()[0].reverse_sort_url().as_deref(), Some("?sort=-1&o=zzz"));
		assert_eq!(list.filters()[0].parameter_name(), "status");
	}

	#[rstest]
	fn test_invalid_settings_abort_build(source: InMemorySource<Row>, metadata: StaticMetadata) {
		let settings = ListSettings {
			ordering_query_param: "page".to_string(),
			page_query_param: "page".to_string(),
			..ListSettings::default()
		};
		let error = ListView::builder(&source, &metadata)
			.settings(&settings)
			.build()
			.unwrap_err();
		assert!(matches!(error, SmartListError::Settings(_)));
		assert_eq!(
			error.to_string(),
			"Invalid list settings: `ordering_query_param` and `page_query_param` both use the query parameter `page`"
		);
	}

	#[rstest]
	fn test_items_are_restartable(source: InMemorySource<Row>, metadata: StaticMetadata) {
		let list = ListView::builder(&source, &metadata)
			.list_display(["title"])
			.build()
			.unwrap();
		let first: Vec<_> = list
			.items()
			.map(|item| item.fields().map(|cell| cell.format()).collect::<Vec<_>>())
			.collect();
		let second = list.items().count();
		assert_eq!(first, vec![vec!["a"], vec!["b"]]);
		assert_eq!(second, 2);
	}

	#[rstest]
	fn test_filter_errors_abort_build(source: InMemorySource<Row>, metadata: StaticMetadata) {
		let error = ListView::builder(&source, &metadata)
			.list_filter(["nope"])
			.build()
			.unwrap_err();
		assert!(matches!(error, SmartListError::UnknownFilterField { .. }));
	}
}
