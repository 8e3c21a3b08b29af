//! Fuzz target: `AlertMessage::new` description handling
//!
//! Arbitrary UTF-8, multi-byte sequences included, must truncate to the
//! wire bound without panicking or splitting a character.
//!
//! cargo fuzz run fuzz_alert_text

#![no_main]

use homesentry::analyzer::messages::{
    AlertCategory, AlertLevel, AlertMessage, MAX_DESCRIPTION_BYTES,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };
    let alert = AlertMessage::new(AlertCategory::Gas, AlertLevel::Critical, 1, text, 0);
    assert!(alert.description.len() <= MAX_DESCRIPTION_BYTES);
    assert!(text.starts_with(alert.description.as_str()));
    // Display must hold together for whatever survived truncation.
    let _ = alert.to_string();
});
