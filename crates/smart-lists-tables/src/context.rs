//! Rendering context: a list view plus its pagination state

use crate::list::ListView;
use crate::record::RecordSource;
use serde::{Deserialize, Serialize};
use smart_lists_urls::build_query_string;

/// Pagination state of the page being rendered
///
/// The list view does not paginate; the caller slices its source and
/// describes the slice here.
///
/// # Examples
///
/// ```
/// use smart_lists_tables::context::PageInfo;
///
/// let page = PageInfo::new(2, 25, 60);
/// assert_eq!(page.total_pages, 3);
/// assert_eq!(page.offset(), 25);
/// assert!(page.has_previous());
/// assert!(page.has_next());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
	/// Current page, starting at 1
	pub page: u64,
	/// Records per page
	pub page_size: u64,
	/// Total number of records
	pub count: u64,
	/// Total number of pages, at least 1
	pub total_pages: u64,
}

impl PageInfo {
	/// Describe page `page` of `count` records split into pages of `page_size`
	///
	/// The page number is clamped into `1..=total_pages`; a zero page size
	/// is treated as one record per page.
	pub fn new(page: u64, page_size: u64, count: u64) -> Self {
		let page_size = page_size.max(1);
		let total_pages = count.div_ceil(page_size).max(1);
		Self {
			page: page.clamp(1, total_pages),
			page_size,
			count,
			total_pages,
		}
	}

	/// Index of the first record on this page
	///
	/// A deserialized page 0 counts as the first page.
	pub fn offset(&self) -> u64 {
		self.page.saturating_sub(1).saturating_mul(self.page_size)
	}

	/// Returns `true` if there is a page before this one
	pub fn has_previous(&self) -> bool {
		self.page > 1
	}

	/// Returns `true` if there is a page after this one
	pub fn has_next(&self) -> bool {
		self.page < self.total_pages
	}

	/// Returns `true` if there is more than one page
	pub fn is_paginated(&self) -> bool {
		self.total_pages > 1
	}
}

/// Everything a template needs to render one list page
pub struct ListContext<'a, S: RecordSource> {
	list: ListView<'a, S>,
	page: Option<PageInfo>,
}

impl<'a, S: RecordSource> ListContext<'a, S> {
	/// Context for an unpaginated list
	pub fn new(list: ListView<'a, S>) -> Self {
		Self { list, page: None }
	}

	/// Attach pagination state
	pub fn with_page(mut self, page: PageInfo) -> Self {
		self.page = Some(page);
		self
	}

	/// The list view
	pub fn list(&self) -> &ListView<'a, S> {
		&self.list
	}

	/// The pagination state, if any
	pub fn page(&self) -> Option<&PageInfo> {
		self.page.as_ref()
	}

	/// Returns `true` if there is more than one page
	pub fn is_paginated(&self) -> bool {
		self.page.is_some_and(|page| page.is_paginated())
	}

	/// Query string for page `number`, keeping sort, filters, and search
	///
	/// Page 1 drops the page parameter.
	pub fn page_url(&self, number: u64) -> String {
		let value = (number > 1).then(|| number.to_string());
		build_query_string(
			self.list.query_params(),
			[(self.list.page_query_param(), value)],
		)
	}

	/// Link to the previous page, if there is one
	pub fn previous_page_url(&self) -> Option<String> {
		self.page
			.filter(PageInfo::has_previous)
			.map(|page| self.page_url(page.page - 1))
	}

	/// Link to the next page, if there is one
	pub fn next_page_url(&self) -> Option<String> {
		self.page
			.filter(PageInfo::has_next)
			.map(|page| self.page_url(page.page + 1))
	}
}
