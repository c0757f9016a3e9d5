//! Property tests for editor mutations and aggregates.

use std::collections::BTreeSet;

use proptest::prelude::*;

use giftbox::{Gift, GiftItem, SugarRange};

use super::strategies::{gift_from, items, permissive_editor};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: adding merges lines by sweet id, so there is one line per sweet.
    #[test]
    fn property_add_keeps_one_line_per_sweet(items in items()) {
        let gift = gift_from(&items);

        let distinct: BTreeSet<u32> = items.iter().map(|item| item.sweet().id()).collect();
        prop_assert_eq!(gift.len(), distinct.len());
    }

    /// PROPERTY: sweets_count is the sum of the counts in list_all, and of the counts added.
    #[test]
    fn property_sweets_count_is_sum_of_counts(items in items()) {
        let editor = permissive_editor();
        let gift = gift_from(&items);

        let listed: u64 = editor
            .list_all(&gift)
            .into_data()
            .unwrap()
            .iter()
            .map(|item| u64::from(item.count()))
            .sum();
        let added: u64 = items.iter().map(|item| u64::from(item.count())).sum();

        let counted = editor.sweets_count(&gift).into_data().unwrap();
        prop_assert_eq!(counted, listed);
        prop_assert_eq!(counted, added);
    }

    /// PROPERTY: minted ids start at 1 and follow insertion order without gaps.
    #[test]
    fn property_minted_ids_are_sequential(items in items()) {
        let gift = gift_from(&items);

        let ids: Vec<Option<u32>> = gift.iter().map(GiftItem::id).collect();
        let expected: Vec<Option<u32>> = (1..=gift.len() as u32).map(Some).collect();
        prop_assert_eq!(ids, expected);
    }

    /// PROPERTY: every stored line can be fetched back by its id.
    #[test]
    fn property_get_by_id_finds_every_line(items in items()) {
        let editor = permissive_editor();
        let gift = gift_from(&items);

        for line in gift.iter() {
            let id = line.id().unwrap();
            let found = editor.get_by_id(&gift, id).into_data();
            prop_assert_eq!(found, Some(line));
        }
    }

    /// PROPERTY: doubling every count doubles the total weight and total price.
    #[test]
    fn property_totals_are_linear_in_count(items in items()) {
        let editor = permissive_editor();
        let gift = gift_from(&items);

        let doubled = Gift::from_items(
            gift.iter()
                .cloned()
                .map(|mut item| {
                    item.set_count(item.count() * 2);
                    item
                })
                .collect(),
        );

        let weight = editor.total_weight(&gift).into_data().unwrap();
        let doubled_weight = editor.total_weight(&doubled).into_data().unwrap();
        prop_assert!((doubled_weight - 2.0 * weight).abs() <= 1e-9 * weight.max(1.0));

        let price = editor.total_price(&gift).into_data().unwrap();
        let doubled_price = editor.total_price(&doubled).into_data().unwrap();
        prop_assert_eq!(doubled_price, price * rust_decimal::Decimal::TWO);
    }

    /// PROPERTY: the sugar filter returns exactly the sweets inside the inclusive range.
    #[test]
    fn property_sugar_filter_matches_bounds(
        items in items(),
        low in 0.0f64..50.0,
        span in 0.0f64..50.0,
    ) {
        let editor = permissive_editor();
        let gift = gift_from(&items);
        let range = SugarRange::new(low, low + span);

        let sweets = editor.get_sweets_by_sugar_range(&gift, &range).into_data().unwrap();
        let expected = gift
            .iter()
            .filter(|item| {
                let sugar = item.sweet().sugar_weight();
                sugar >= range.min_weight && sugar <= range.max_weight
            })
            .count();

        prop_assert_eq!(sweets.len(), expected);
        prop_assert!(sweets.iter().all(|sweet| range.contains(sweet.sugar_weight())));
    }

    /// PROPERTY: deleting a line removes exactly that line.
    #[test]
    fn property_delete_removes_one_line(items in items(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!items.is_empty());
        let editor = permissive_editor();
        let mut gift = gift_from(&items);
        let before = gift.len();
        let target = gift.items()[pick.index(before)].clone();

        let after = editor.delete(&mut gift, &target).into_data().unwrap();
        prop_assert_eq!(after.len(), before - 1);
        prop_assert!(!after.iter().any(|item| item.id() == target.id()));
    }
}
