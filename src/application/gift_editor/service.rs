//! Gift Editor Service
//!
//! Stateless: everything it reads or changes lives in the `Gift` passed to
//! each call. Mutating operations borrow the gift mutably and change it in
//! place; no copy is made. Validation always runs before any mutation, and
//! each mutation is a single step (one merge, replace, append or removal).

use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::entities::{Gift, GiftItem, Sweet};
use crate::domain::policies::{GiftItemPolicy, SugarRangePolicy};
use crate::domain::ports::Validator;
use crate::domain::services::order_items;
use crate::domain::value_objects::{SugarRange, SweetsOrderRule};

use crate::application::response::{
    ServiceResponse, GIFT_MISSING, ITEM_MISSING, UNSUPPORTED_RULE,
};

const COUNT_OVERFLOW: &str = "gift item count overflow";
const PRICE_OVERFLOW: &str = "total price overflow";
const ID_OVERFLOW: &str = "gift item id overflow";

/// Gift editor - serves queries and edits over a caller's gift
///
/// Parameterized by the validators it runs before filtering (`SV`) and
/// before inserting or replacing items (`IV`).
pub struct GiftEditorService<SV, IV>
where
    SV: Validator<SugarRange>,
    IV: Validator<GiftItem>,
{
    sugar_range_validator: SV,
    gift_item_validator: IV,
}

impl GiftEditorService<SugarRangePolicy, GiftItemPolicy> {
    /// Editor using the default policies
    pub fn with_default_policies() -> Self {
        Self::new(SugarRangePolicy::default(), GiftItemPolicy::default())
    }
}

impl<SV, IV> GiftEditorService<SV, IV>
where
    SV: Validator<SugarRange>,
    IV: Validator<GiftItem>,
{
    pub fn new(sugar_range_validator: SV, gift_item_validator: IV) -> Self {
        Self {
            sugar_range_validator,
            gift_item_validator,
        }
    }

    /// Find the item with the given id
    pub fn get_by_id<'a>(
        &self,
        gift: impl Into<Option<&'a Gift>>,
        id: u32,
    ) -> ServiceResponse<&'a GiftItem> {
        let Some(gift) = gift.into() else {
            return ServiceResponse::failure(GIFT_MISSING);
        };

        match gift.iter().find(|item| item.id() == Some(id)) {
            Some(item) => {
                ServiceResponse::success_with_message(format!("item with id {id} found"), item)
            }
            None => ServiceResponse::failure(format!("item with id {id} not found")),
        }
    }

    /// All items in gift order; the gift's own slice, not a copy
    pub fn list_all<'a>(
        &self,
        gift: impl Into<Option<&'a Gift>>,
    ) -> ServiceResponse<&'a [GiftItem]> {
        match gift.into() {
            Some(gift) => ServiceResponse::success(gift.items()),
            None => ServiceResponse::failure(GIFT_MISSING),
        }
    }

    /// Sweets whose sugar weight lies in `range` (inclusive), in gift order
    pub fn get_sweets_by_sugar_range<'a>(
        &self,
        gift: impl Into<Option<&'a Gift>>,
        range: &SugarRange,
    ) -> ServiceResponse<Vec<&'a Sweet>> {
        let Some(gift) = gift.into() else {
            return ServiceResponse::failure(GIFT_MISSING);
        };

        let validation = self.sugar_range_validator.validate(range);
        if let Some(message) = validation.message() {
            debug!(%range, reason = message, "sugar range rejected");
            return ServiceResponse::failure(message);
        }

        let sweets = gift
            .iter()
            .map(GiftItem::sweet)
            .filter(|sweet| range.contains(sweet.sugar_weight()))
            .collect();

        ServiceResponse::success(sweets)
    }

    /// Items stably sorted by the sweet attribute `rule` selects
    ///
    /// `rule` may be a `SweetsOrderRule`, a rule name or a numeric code;
    /// anything that does not map to a rule is refused.
    pub fn order_sweets_in_gift<'a, R>(
        &self,
        gift: impl Into<Option<&'a Gift>>,
        rule: R,
    ) -> ServiceResponse<Vec<&'a GiftItem>>
    where
        R: TryInto<SweetsOrderRule>,
    {
        let Some(gift) = gift.into() else {
            return ServiceResponse::failure(GIFT_MISSING);
        };

        let rule: Result<SweetsOrderRule, _> = rule.try_into();
        let Ok(rule) = rule else {
            return ServiceResponse::failure(UNSUPPORTED_RULE);
        };

        ServiceResponse::success(order_items(gift, rule))
    }

    /// Add an item, merging it into an existing line for the same sweet
    ///
    /// A new line gets a freshly minted id; a merge only raises the count of
    /// the existing line. The merged line is validated again before it
    /// replaces the existing one.
    pub fn add<'a>(
        &self,
        gift: impl Into<Option<&'a mut Gift>>,
        item: impl Into<Option<GiftItem>>,
    ) -> ServiceResponse<&'a Gift> {
        let Some(gift) = gift.into() else {
            return ServiceResponse::failure(GIFT_MISSING);
        };
        let Some(mut item) = item.into() else {
            return ServiceResponse::failure(ITEM_MISSING);
        };

        if let Some(message) = self.rejection(&item) {
            return ServiceResponse::failure(message);
        }

        match gift.position_of_sweet(item.sweet().id()) {
            Some(index) => {
                let mut merged = gift.items()[index].clone();
                if !merged.merge_count(item.count()) {
                    return ServiceResponse::failure(COUNT_OVERFLOW);
                }
                if let Some(message) = self.rejection(&merged) {
                    return ServiceResponse::failure(message);
                }
                debug!(
                    item_id = ?merged.id(),
                    sweet_id = item.sweet().id(),
                    count = merged.count(),
                    "merged gift item"
                );
                gift.items_mut()[index] = merged;
            }
            None => {
                let Some(id) = gift.next_item_id() else {
                    return ServiceResponse::failure(ID_OVERFLOW);
                };
                item.assign_id(id);
                debug!(item_id = id, sweet_id = item.sweet().id(), "appended gift item");
                gift.items_mut().push(item);
            }
        }

        ServiceResponse::success(&*gift)
    }

    /// Replace the item with the same id, or append it with a new id
    ///
    /// An item whose id is unset or unknown is inserted rather than refused.
    /// Lines are matched by id only, so the result may hold two lines for
    /// the same sweet.
    pub fn update<'a>(
        &self,
        gift: impl Into<Option<&'a mut Gift>>,
        item: impl Into<Option<GiftItem>>,
    ) -> ServiceResponse<&'a Gift> {
        let Some(gift) = gift.into() else {
            return ServiceResponse::failure(GIFT_MISSING);
        };
        let Some(mut item) = item.into() else {
            return ServiceResponse::failure(ITEM_MISSING);
        };

        if let Some(message) = self.rejection(&item) {
            return ServiceResponse::failure(message);
        }

        match item.id().and_then(|id| gift.position_of_id(id)) {
            Some(index) => {
                debug!(item_id = ?item.id(), index, "replaced gift item");
                gift.items_mut()[index] = item;
            }
            None => {
                let Some(id) = gift.next_item_id() else {
                    return ServiceResponse::failure(ID_OVERFLOW);
                };
                debug!(requested = ?item.id(), item_id = id, "update target missing, appending");
                item.assign_id(id);
                gift.items_mut().push(item);
            }
        }

        ServiceResponse::success(&*gift)
    }

    /// Remove the first item equal to `item`; a missing item is not an error
    pub fn delete<'a, 'b>(
        &self,
        gift: impl Into<Option<&'a mut Gift>>,
        item: impl Into<Option<&'b GiftItem>>,
    ) -> ServiceResponse<&'a Gift> {
        let Some(gift) = gift.into() else {
            return ServiceResponse::failure(GIFT_MISSING);
        };
        let Some(item) = item.into() else {
            return ServiceResponse::failure(ITEM_MISSING);
        };

        if let Some(index) = gift.iter().position(|existing| existing == item) {
            gift.items_mut().remove(index);
            debug!(item_id = ?item.id(), "removed gift item");
        }

        ServiceResponse::success(&*gift)
    }

    /// Number of sweets: the sum of all counts
    pub fn sweets_count<'a>(&self, gift: impl Into<Option<&'a Gift>>) -> ServiceResponse<u64> {
        match gift.into() {
            Some(gift) => {
                ServiceResponse::success(gift.iter().map(|item| u64::from(item.count())).sum())
            }
            None => ServiceResponse::failure(GIFT_MISSING),
        }
    }

    /// Total weight in grams: sum of count × sweet weight
    pub fn total_weight<'a>(&self, gift: impl Into<Option<&'a Gift>>) -> ServiceResponse<f64> {
        match gift.into() {
            Some(gift) => ServiceResponse::success(gift.iter().map(GiftItem::line_weight).sum()),
            None => ServiceResponse::failure(GIFT_MISSING),
        }
    }

    /// Total price: sum of count × sweet price, in decimal arithmetic
    pub fn total_price<'a>(&self, gift: impl Into<Option<&'a Gift>>) -> ServiceResponse<Decimal> {
        let Some(gift) = gift.into() else {
            return ServiceResponse::failure(GIFT_MISSING);
        };

        let total = gift.iter().try_fold(Decimal::ZERO, |total, item| {
            item.line_price().and_then(|line| total.checked_add(line))
        });

        match total {
            Some(total) => ServiceResponse::success(total),
            None => ServiceResponse::failure(PRICE_OVERFLOW),
        }
    }

    /// Validator message for a rejected item
    fn rejection(&self, item: &GiftItem) -> Option<String> {
        let validation = self.gift_item_validator.validate(item);
        let message = validation.message()?.to_string();
        debug!(sweet_id = item.sweet().id(), reason = %message, "gift item rejected");
        Some(message)
    }
}
