#![no_main]

use giftbox::{Gift, GiftEditorService, SweetsOrderRule};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Any gift that parses must survive every query without panicking
    if let Ok(gift) = serde_json::from_slice::<Gift>(data) {
        let editor = GiftEditorService::with_default_policies();
        let _ = editor.sweets_count(&gift);
        let _ = editor.total_weight(&gift);
        let _ = editor.total_price(&gift);
        for rule in SweetsOrderRule::ALL {
            let _ = editor.order_sweets_in_gift(&gift, rule);
        }
    }
});
