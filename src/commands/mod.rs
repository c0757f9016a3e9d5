//! Command handlers
//!
//! Each handler runs one editor operation over the loaded gift and prints
//! the rendered response. A failure response ends the process with status 1.

mod context;
mod edit;
mod query;

pub use context::{load_gift, CommandContext};
pub use edit::{cmd_add, cmd_delete, cmd_update};
pub use query::{cmd_get, cmd_list, cmd_order, cmd_stats, cmd_sugar};

/// "1 item" / "N items"
fn items_title(count: usize) -> String {
    match count {
        1 => "1 item".to_string(),
        n => format!("{} items", n),
    }
}
