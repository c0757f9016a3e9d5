//! Read-only commands: list, get, sugar, order, stats

use anyhow::Result;

use giftbox::presentation::GiftStats;
use giftbox::{Gift, GiftItem, SugarRange};

use super::{items_title, CommandContext};

pub fn cmd_list(ctx: &CommandContext, gift: &Gift) -> Result<()> {
    let response = ctx.editor().list_all(gift);
    ctx.respond(response, |renderer, _, items| {
        let items: Vec<&GiftItem> = items.iter().collect();
        renderer.items(&items_title(items.len()), &items)
    })
}

pub fn cmd_get(ctx: &CommandContext, gift: &Gift, id: u32) -> Result<()> {
    let response = ctx.editor().get_by_id(gift, id);
    ctx.respond(response, |renderer, message, item| {
        renderer.items(message, &[item])
    })
}

pub fn cmd_sugar(ctx: &CommandContext, gift: &Gift, min: f64, max: f64) -> Result<()> {
    let range = SugarRange::new(min, max);
    let response = ctx.editor().get_sweets_by_sugar_range(gift, &range);
    ctx.respond(response, |renderer, _, sweets| {
        let title = format!("{} with sugar in {}", sweets_title(sweets.len()), range);
        renderer.sweets(&title, &sweets)
    })
}

/// Order by a rule name or numeric code; the configured default when absent
pub fn cmd_order(ctx: &CommandContext, gift: &Gift, rule: Option<String>) -> Result<()> {
    let rule = rule.unwrap_or_else(|| ctx.config.display.default_order.to_string());
    let editor = ctx.editor();
    let response = match rule.trim().parse::<i32>() {
        Ok(code) => editor.order_sweets_in_gift(gift, code),
        Err(_) => editor.order_sweets_in_gift(gift, rule.as_str()),
    };
    ctx.respond(response, |renderer, _, items| {
        let title = format!("{} ordered by {}", items_title(items.len()), rule.trim());
        renderer.items(&title, &items)
    })
}

pub fn cmd_stats(ctx: &CommandContext, gift: &Gift) -> Result<()> {
    let editor = ctx.editor();
    let response = editor.total_price(gift).map(|price| GiftStats {
        items: gift.len(),
        sweets: editor.sweets_count(gift).into_data().unwrap_or_default(),
        weight: editor.total_weight(gift).into_data().unwrap_or_default(),
        price,
    });
    ctx.respond(response, |renderer, _, stats| renderer.stats(&stats))
}

fn sweets_title(count: usize) -> String {
    match count {
        1 => "1 sweet".to_string(),
        n => format!("{} sweets", n),
    }
}
