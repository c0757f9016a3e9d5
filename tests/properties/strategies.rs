//! Shared generators for gift property tests.

use proptest::prelude::*;
use rust_decimal::Decimal;

use giftbox::{Gift, GiftEditorService, GiftItem, GiftItemPolicy, SugarRangePolicy, Sweet};

/// Editor without an item count ceiling so generated merges never get refused
pub fn permissive_editor() -> GiftEditorService<SugarRangePolicy, GiftItemPolicy> {
    GiftEditorService::new(
        SugarRangePolicy::new(),
        GiftItemPolicy::new().with_max_item_count(u32::MAX),
    )
}

pub fn sweet() -> impl Strategy<Value = Sweet> {
    (
        1u32..16,
        "[A-Z][a-z]{1,8}",
        "[A-Z][a-z]{1,8}",
        1.0f64..100.0,
        0.0f64..=1.0,
        0i64..100_000,
    )
        .prop_map(|(id, name, manufacturer, weight, sugar_share, cents)| {
            Sweet::new(
                id,
                name,
                manufacturer,
                weight,
                weight * sugar_share,
                Decimal::new(cents, 2),
            )
            .expect("generated sweet is valid")
        })
}

pub fn items() -> impl Strategy<Value = Vec<GiftItem>> {
    proptest::collection::vec(
        (sweet(), 1u32..50).prop_map(|(sweet, count)| GiftItem::new(sweet, count)),
        0..24,
    )
}

/// Build a gift by adding every item through the editor
pub fn gift_from(items: &[GiftItem]) -> Gift {
    let editor = permissive_editor();
    let mut gift = Gift::new();
    for item in items {
        assert!(editor.add(&mut gift, item.clone()).is_success());
    }
    gift
}
