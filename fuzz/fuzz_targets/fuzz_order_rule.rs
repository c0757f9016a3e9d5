#![no_main]

use giftbox::SweetsOrderRule;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(rule) = s.parse::<SweetsOrderRule>() {
            // Canonical names parse back to the same rule
            assert_eq!(rule.as_str().parse::<SweetsOrderRule>().ok(), Some(rule));
        }
    }
});
