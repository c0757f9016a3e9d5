//! Editing commands: add, update, delete
//!
//! Edits apply to the gift loaded for this run; the resulting gift is printed.

use std::path::Path;

use anyhow::Result;
use tracing::info;

use giftbox::{Gift, GiftItem, ServiceResponse};

use super::context::load_item;
use super::{items_title, CommandContext};

pub fn cmd_add(ctx: &CommandContext, gift: &mut Gift, item: &Path) -> Result<()> {
    let item = load_item(item)?;
    info!(sweet_id = item.sweet().id(), count = item.count(), "adding gift item");
    let response = ctx.editor().add(gift, item);
    render_gift(ctx, "Added", response)
}

pub fn cmd_update(ctx: &CommandContext, gift: &mut Gift, item: &Path) -> Result<()> {
    let item = load_item(item)?;
    info!(item_id = ?item.id(), "updating gift item");
    let response = ctx.editor().update(gift, item);
    render_gift(ctx, "Updated", response)
}

pub fn cmd_delete(ctx: &CommandContext, gift: &mut Gift, id: u32) -> Result<()> {
    let editor = ctx.editor();
    let target = match editor.get_by_id(&*gift, id) {
        ServiceResponse::Success { data, .. } => data.clone(),
        ServiceResponse::Failure { message } => ctx.fail(&message),
    };

    info!(item_id = id, "deleting gift item");
    let response = editor.delete(gift, &target);
    render_gift(ctx, "Deleted", response)
}

fn render_gift(ctx: &CommandContext, verb: &str, response: ServiceResponse<&Gift>) -> Result<()> {
    ctx.respond(response, |renderer, _, gift| {
        let items: Vec<&GiftItem> = gift.iter().collect();
        let title = format!("{}; gift now has {}", verb, items_title(items.len()));
        renderer.items(&title, &items)
    })
}
