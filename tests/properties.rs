// Property tests for the counter invariants

use bagtty::catalog::{Catalog, Item, ItemId};
use bagtty::store::{clamp_quantity, BarEmphasis, Storefront};
use proptest::prelude::*;

fn store_with(stocks: &[u32]) -> Storefront {
    let items = stocks
        .iter()
        .enumerate()
        .map(|(i, &stock)| Item::new(&format!("item-{}", i), "Item", "misc", stock, ""))
        .collect();
    let mut store = Storefront::new(Catalog::new(items).expect("Catalog creation failed"));
    store.initialize();
    store
}

proptest! {
    #[test]
    fn stored_quantity_is_clamped(value in any::<i64>(), limit in 0u32..1000) {
        let mut store = store_with(&[limit]);
        let id = ItemId::from("item-0");

        store.update_counter(&id, &value.to_string(), limit);

        let entry = store.entry(&id).unwrap();
        prop_assert_eq!(entry.field.value(), i64::from(clamp_quantity(value, limit)));
        prop_assert!(entry.field.value() >= 0);
        prop_assert!(entry.field.value() <= i64::from(limit));
    }

    #[test]
    fn highlight_follows_quantity(value in -50i64..50, limit in 0u32..20) {
        let mut store = store_with(&[limit]);
        let id = ItemId::from("item-0");

        store.update_counter(&id, &value.to_string(), limit);

        let entry = store.entry(&id).unwrap();
        prop_assert_eq!(entry.highlighted, value >= 1);
        // A positive entry against a zero limit highlights but stores 0
        if limit > 0 {
            prop_assert_eq!(entry.highlighted, entry.field.value() >= 1);
        }
    }

    #[test]
    fn total_is_sum_of_fields(values in prop::collection::vec(0u32..100, 1..12)) {
        let stocks = vec![100; values.len()];
        let mut store = store_with(&stocks);

        for (i, value) in values.iter().enumerate() {
            store.set_quantity(&ItemId::new(format!("item-{}", i)), &value.to_string());
        }

        let expected: u64 = values.iter().map(|&v| u64::from(v)).sum();
        prop_assert_eq!(store.total(), expected);
        prop_assert_eq!(store.bar().total_text.clone(), expected.to_string());
        prop_assert_eq!(store.bar().emphasis == BarEmphasis::Active, expected > 0);
    }

    #[test]
    fn arbitrary_text_never_panics(text in ".{0,12}", limit in 0u32..10) {
        let mut store = store_with(&[limit]);
        let id = ItemId::from("item-0");

        store.update_counter(&id, &text, limit);

        let entry = store.entry(&id).unwrap();
        prop_assert!(entry.field.value() <= i64::from(limit));
        prop_assert!(store.total() <= u64::from(limit));
    }
}
