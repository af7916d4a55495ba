use chrono::NaiveDate;
use rstest::*;
use smart_lists::prelude::*;

struct Invoice {
	number: u32,
	paid: bool,
	issued: NaiveDate,
}

impl Record for Invoice {
	fn attribute(&self, name: &str) -> Option<FieldValue> {
		match name {
			"number" => Some(self.number.into()),
			"paid" => Some(self.paid.into()),
			"issued" => Some(self.issued.into()),
			_ => None,
		}
	}

	fn display_name(&self) -> String {
		format!("Invoice {}", self.number)
	}
}

#[fixture]
fn invoices() -> InMemorySource<Invoice> {
	InMemorySource::new(vec![
		Invoice {
			number: 7,
			paid: true,
			issued: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
		},
		Invoice {
			number: 8,
			paid: false,
			issued: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
		},
	])
}

#[fixture]
fn metadata() -> StaticMetadata {
	StaticMetadata::new("invoice")
		.with_field(FieldMeta::new("number"))
		.with_field(FieldMeta::boolean("paid"))
		.with_field(FieldMeta::new("issued").with_verbose_name("issue date"))
}

#[rstest]
fn test_list_through_prelude(invoices: InMemorySource<Invoice>, metadata: StaticMetadata) {
	let localizer = CatalogLocalizer::new(MessageCatalog::new("en"));
	let list = ListView::builder(&invoices, &metadata)
		.query_params(QueryParams::parse("paid=1&o=-3"))
		.list_display(["__str__", "number", "issued"])
		.list_filter(["paid"])
		.localizer(&localizer)
		.build()
		.unwrap();

	let titles: Vec<_> = list.columns().iter().map(ColumnDescriptor::title).collect();
	assert_eq!(titles, vec!["Invoice", "Number", "Issue Date"]);
	assert_eq!(
		list.columns()[2].add_sort_url().as_deref(),
		Some("?paid=1&o=3")
	);
	assert_eq!(
		list.filters()[0].active_option().map(FilterOption::label),
		Some("Yes")
	);

	let rows: Vec<Vec<String>> = list
		.items()
		.map(|item| item.fields().map(|cell| cell.render()).collect())
		.collect();
	assert_eq!(
		rows[0],
		vec!["<td>Invoice 7</td>", "<td>7</td>", "<td>May 2, 2024</td>"]
	);
}

#[rstest]
fn test_empty_settings_show_display_name(invoices: InMemorySource<Invoice>, metadata: StaticMetadata) {
	let settings = ListSettings::from_toml_str("").unwrap();
	let list = ListView::builder(&invoices, &metadata)
		.settings(&settings)
		.build()
		.unwrap();
	assert_eq!(list.columns().len(), 1);
	assert_eq!(list.columns()[0].field_name(), "__str__");
	assert_eq!(list.ordering_query_param(), "o");
	assert_eq!(list.items().count(), 2);
}
