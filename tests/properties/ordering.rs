//! Property tests for ordering sweets in a gift.

use proptest::prelude::*;

use giftbox::{Gift, GiftItem, SweetsOrderRule};

use super::strategies::{gift_from, items, permissive_editor};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: ordering by price yields non-decreasing prices.
    #[test]
    fn property_price_order_is_non_decreasing(items in items()) {
        let editor = permissive_editor();
        let gift = gift_from(&items);

        let ordered = editor
            .order_sweets_in_gift(&gift, SweetsOrderRule::Price)
            .into_data()
            .unwrap();

        prop_assert_eq!(ordered.len(), gift.len());
        prop_assert!(ordered
            .windows(2)
            .all(|pair| pair[0].sweet().price() <= pair[1].sweet().price()));
    }

    /// PROPERTY: ordering an already ordered gift changes nothing, for every rule.
    #[test]
    fn property_ordering_is_idempotent(items in items(), code in 0i32..5) {
        let editor = permissive_editor();
        let gift = gift_from(&items);

        let once: Vec<GiftItem> = editor
            .order_sweets_in_gift(&gift, code)
            .into_data()
            .unwrap()
            .into_iter()
            .cloned()
            .collect();
        let reordered = Gift::from_items(once.clone());
        let twice: Vec<GiftItem> = editor
            .order_sweets_in_gift(&reordered, code)
            .into_data()
            .unwrap()
            .into_iter()
            .cloned()
            .collect();

        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: ordering never changes the gift it reads.
    #[test]
    fn property_ordering_leaves_gift_untouched(items in items()) {
        let editor = permissive_editor();
        let gift = gift_from(&items);
        let snapshot = gift.clone();

        for rule in SweetsOrderRule::ALL {
            let _ = editor.order_sweets_in_gift(&gift, rule);
        }
        prop_assert_eq!(gift, snapshot);
    }

    /// PROPERTY: rule names and codes outside the known set are refused, never panic.
    #[test]
    fn property_unknown_rules_are_refused(
        name in "[a-z]{1,12}",
        code in prop_oneof![i32::MIN..0, 5i32..i32::MAX],
    ) {
        let editor = permissive_editor();
        let gift = Gift::new();

        let by_name = editor.order_sweets_in_gift(&gift, name.as_str());
        prop_assert_eq!(by_name.is_success(), name.parse::<SweetsOrderRule>().is_ok());
        prop_assert!(!editor.order_sweets_in_gift(&gift, code).is_success());
    }
}
