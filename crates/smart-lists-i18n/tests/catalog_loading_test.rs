use chrono::NaiveDate;
use rstest::*;
use serde_json::json;
use smart_lists_i18n::{CatalogLocalizer, Localizer, MessageCatalog};

#[fixture]
fn german_catalog() -> MessageCatalog {
	serde_json::from_value(json!({
		"locale": "de",
		"messages": {
			"All": "Alle",
			"Yes": "Ja",
			"No": "Nein",
		}
	}))
	.unwrap()
}

#[rstest]
fn test_catalog_deserializes(german_catalog: MessageCatalog) {
	assert_eq!(german_catalog.locale(), "de");
	assert_eq!(german_catalog.len(), 3);
	assert_eq!(german_catalog.get("All"), Some("Alle"));
}

#[rstest]
fn test_catalog_without_messages_is_empty() {
	let catalog: MessageCatalog = serde_json::from_value(json!({ "locale": "ja" })).unwrap();
	assert!(catalog.is_empty());
}

#[rstest]
fn test_catalog_round_trips_through_json(german_catalog: MessageCatalog) {
	let value = serde_json::to_value(&german_catalog).unwrap();
	let restored: MessageCatalog = serde_json::from_value(value).unwrap();
	assert_eq!(restored, german_catalog);
}

#[rstest]
fn test_localizer_from_loaded_catalog(german_catalog: MessageCatalog) {
	let localizer = CatalogLocalizer::new(german_catalog).with_date_format("j. F Y");
	let date = NaiveDate::from_ymd_opt(2024, 7, 4).unwrap();

	assert_eq!(localizer.translate("Yes"), "Ja");
	assert_eq!(localizer.translate("Maybe"), "Maybe");
	assert_eq!(localizer.format_date(&date), "4. July 2024");
}
