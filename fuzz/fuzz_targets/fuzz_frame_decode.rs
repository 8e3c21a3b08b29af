//! Fuzz target: `sensors::dht11::decode_frame`
//!
//! Drives arbitrary frames through the checksum validator and asserts the
//! accept/reject decision matches the checksum identity exactly.
//!
//! cargo fuzz run fuzz_frame_decode

#![no_main]

use homesentry::error::DecodeError;
use homesentry::sensors::dht11::decode_frame;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 5 {
        return;
    }
    let frame = [data[0], data[1], data[2], data[3], data[4]];
    let sum = frame[0]
        .wrapping_add(frame[1])
        .wrapping_add(frame[2])
        .wrapping_add(frame[3]);

    match decode_frame(frame) {
        Ok(r) => {
            assert_eq!(sum, frame[4], "accepted a frame with a bad checksum");
            assert_eq!(r.humidity_pct, i32::from(frame[0]));
            assert_eq!(r.temperature_c, i32::from(frame[2]));
        }
        Err(e) => {
            assert_eq!(e, DecodeError::Checksum);
            assert_ne!(sum, frame[4], "rejected a frame with a good checksum");
        }
    }
});
