//! Property-based tests for sort token transitions
//!
//! Uses proptest to verify:
//! 1. Reversing a column twice restores the token
//! 2. Removing a column and adding it back makes it the ascending primary key
//! 3. A header click always leaves the column as the primary key
//! 4. Header links only touch the ordering parameter

use proptest::prelude::*;
use smart_lists_tables::{SortKey, SortState, SortToken};
use smart_lists_urls::QueryParams;
use std::sync::Arc;

fn token_strategy() -> impl Strategy<Value = SortToken> {
	prop::collection::vec((1u32..8, any::<bool>()), 0..6).prop_map(|keys| {
		keys.into_iter()
			.map(|(column, descending)| SortKey { column, descending })
			.collect()
	})
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(300))]

	/// Property: reverse is an involution
	#[test]
	fn prop_reverse_twice_is_identity(token in token_strategy(), column in 1u32..8) {
		prop_assert_eq!(token.reversed(column).reversed(column), token);
	}

	/// Property: remove then add promotes the column to ascending primary
	#[test]
	fn prop_remove_then_add_promotes(token in token_strategy(), column in 1u32..8) {
		let rest = token.removed(column);
		let promoted = rest.added(column);

		prop_assert_eq!(promoted.keys()[0], SortKey::ascending(column));
		prop_assert_eq!(&promoted.keys()[1..], rest.keys());
	}

	/// Property: after a header click the column is primary, other keys keep their order
	#[test]
	fn prop_add_makes_primary(token in token_strategy(), column in 1u32..8) {
		let added = token.added(column);

		prop_assert_eq!(added.keys()[0].column, column);
		prop_assert!(added.len() >= token.removed(column).len() + 1);
		let others: Vec<_> = added.keys().iter().filter(|key| key.column != column).collect();
		let before: Vec<_> = token.keys().iter().filter(|key| key.column != column).collect();
		prop_assert_eq!(others, before);
	}

	/// Property: decoding the canonical form gives back the token
	#[test]
	fn prop_canonical_form_decodes(token in token_strategy()) {
		prop_assert_eq!(SortToken::parse(&token.to_string()).unwrap(), token);
	}

	/// Property: links keep every other parameter
	#[test]
	fn prop_links_keep_other_parameters(
		token in token_strategy(),
		column in 1u32..8,
		page in "[0-9]{1,3}",
		status in "[a-z]{1,5}",
	) {
		let query = format!("page={}&o={}&status={}", page, token, status);
		let params = Arc::new(QueryParams::parse(&query));
		let state = SortState::new(params, column, "o").unwrap();

		for link in [state.add_sort_by(), state.remove_sort_by(), state.reverse_sort_by()] {
			let decoded = QueryParams::parse(&link);
			prop_assert_eq!(decoded.first("page"), Some(page.as_str()));
			prop_assert_eq!(decoded.first("status"), Some(status.as_str()));
			if let Some(raw) = decoded.first("o") {
				prop_assert!(!raw.is_empty());
				prop_assert!(SortToken::parse(raw).is_ok());
			}
		}
	}
}
