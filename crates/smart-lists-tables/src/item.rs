//! Rows and cells of a rendered list

use crate::column::ColumnDescriptor;
use crate::error::{Result, SmartListError};
use crate::record::{FieldValue, Record, ResolvedValue, resolve};
use smart_lists_i18n::Localizer;
use std::borrow::Cow;

/// One record of a list view, paired with the view's columns
pub struct Item<'v, R> {
	record: &'v R,
	columns: &'v [ColumnDescriptor],
	localizer: &'v dyn Localizer,
}

impl<'v, R: Record> Item<'v, R> {
	pub(crate) fn new(record: &'v R, columns: &'v [ColumnDescriptor], localizer: &'v dyn Localizer) -> Self {
		Self {
			record,
			columns,
			localizer,
		}
	}

	/// The underlying record
	pub fn record(&self) -> &'v R {
		self.record
	}

	/// One cell per column, in column order
	pub fn fields(&self) -> impl Iterator<Item = FieldCell<'v, R>> + '_ {
		self.columns
			.iter()
			.map(|column| FieldCell::new(self.record, column, self.localizer))
	}
}

/// The value of one column for one record
pub struct FieldCell<'v, R> {
	record: &'v R,
	column: &'v ColumnDescriptor,
	localizer: &'v dyn Localizer,
}

impl<'v, R: Record> FieldCell<'v, R> {
	fn new(record: &'v R, column: &'v ColumnDescriptor, localizer: &'v dyn Localizer) -> Self {
		Self {
			record,
			column,
			localizer,
		}
	}

	/// The column this cell belongs to
	pub fn column(&self) -> &'v ColumnDescriptor {
		self.column
	}

	/// Resolve the column's field on the record
	pub fn value(&self) -> ResolvedValue {
		let resolved = resolve(self.record, self.column.field_name());
		if resolved.is_missing() {
			tracing::debug!(
				field = self.column.field_name(),
				column = self.column.id(),
				"record has no value for column"
			);
		}
		resolved
	}

	/// The display text of the cell; dates go through the localizer
	pub fn format(&self) -> String {
		match self.value().into_value() {
			FieldValue::Date(date) => self.localizer.format_date(&date),
			FieldValue::DateTime(datetime) => self.localizer.format_datetime(&datetime),
			value => value.to_string(),
		}
	}

	/// The cell as an HTML table cell
	pub fn render(&self) -> String {
		format!("<td>{}</td>", escape(&self.format()))
	}

	/// The cell as an HTML table cell linking to the record
	///
	/// # Errors
	///
	/// [`SmartListError::MissingAbsoluteUrl`] if the record has no canonical
	/// URL.
	pub fn render_link(&self) -> Result<String> {
		let url = self
			.record
			.absolute_url()
			.ok_or_else(|| SmartListError::MissingAbsoluteUrl(std::any::type_name::<R>().to_string()))?;
		Ok(format!(
			"<td><a href=\"{}\">{}</a></td>",
			escape(&url),
			escape(&self.format())
		))
	}
}

/// Escape text for an HTML element body or a double-quoted attribute
fn escape(text: &str) -> Cow<'_, str> {
	if !text.contains(['&', '<', '>', '"']) {
		return Cow::Borrowed(text);
	}
	let mut escaped = String::with_capacity(text.len() + 16);
	for ch in text.chars() {
		match ch {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			_ => escaped.push(ch),
		}
	}
	Cow::Owned(escaped)
}
