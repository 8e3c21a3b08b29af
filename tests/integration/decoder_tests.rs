//! Single-wire decoder tests against scripted waveforms.
//!
//! These drive the real climate and ranging decoders through the
//! [`crate::mock_rig`] time model, so bit thresholds, handshake phases and
//! timeouts are exercised with exact microsecond widths.

use homesentry::error::DecodeError;
use homesentry::sensors::dht11::Dht11;
use homesentry::sensors::hcsr04::{HcSr04, distance_from_pulse_us};

use crate::mock_rig::{
    DHT_RELEASE_AT_US, FakeClock, FakeDelay, ScriptedPin, Waveform, WaveformBuilder,
    climate_frame, dht11_frame, echo_pulse, time_cell,
};

fn climate_rig(wave: Waveform) -> Dht11<ScriptedPin, FakeClock, FakeDelay> {
    let time = time_cell();
    Dht11::new(
        ScriptedPin::new(&time, wave),
        FakeClock::new(&time),
        FakeDelay::new(&time),
    )
}

/// A frame waveform with one explicit high-pulse width per bit, MSB-first.
fn frame_with_bit_widths(widths: &[u64; 40]) -> Waveform {
    let mut w = WaveformBuilder::start(true, DHT_RELEASE_AT_US + 20)
        .low(80)
        .high(80);
    for &width in widths {
        w = w.low(50).high(width);
    }
    w.low(50).build(true)
}

// ── Climate decoder ───────────────────────────────────────────

#[test]
fn full_frame_decodes_to_reading() {
    let mut dht = climate_rig(dht11_frame(climate_frame(55, 24)));
    let r = dht.read().unwrap();
    assert_eq!(r.humidity_pct, 55);
    assert_eq!(r.temperature_c, 24);
}

#[test]
fn start_signal_is_20ms_low_then_release() {
    let time = time_cell();
    let pin = ScriptedPin::new(&time, dht11_frame(climate_frame(40, 20)));
    let drives = pin.drive_log();
    let mut dht = Dht11::new(pin, FakeClock::new(&time), FakeDelay::new(&time));
    dht.read().unwrap();
    assert_eq!(*drives.borrow(), vec![(0, false), (20_000, true)]);
}

#[test]
fn corrupted_checksum_is_rejected() {
    let mut bytes = climate_frame(60, 25);
    bytes[4] = bytes[4].wrapping_add(1);
    let mut dht = climate_rig(dht11_frame(bytes));
    assert_eq!(dht.read(), Err(DecodeError::Checksum));
}

#[test]
fn fifty_microsecond_pulse_reads_zero() {
    // Humidity LSB and checksum LSB carry the probed width; everything else
    // is a clear zero.  At exactly 50 µs the bit must decode as 0.
    let mut widths = [30u64; 40];
    widths[7] = 50;
    widths[39] = 50;
    let mut dht = climate_rig(frame_with_bit_widths(&widths));
    let r = dht.read().unwrap();
    assert_eq!(r.humidity_pct, 0);
}

#[test]
fn fifty_one_microsecond_pulse_reads_one() {
    let mut widths = [30u64; 40];
    widths[7] = 51;
    widths[39] = 51;
    let mut dht = climate_rig(frame_with_bit_widths(&widths));
    let r = dht.read().unwrap();
    assert_eq!(r.humidity_pct, 1);
}

#[test]
fn absent_sensor_times_out_in_first_handshake_phase() {
    // Nothing ever pulls the line down.
    let mut dht = climate_rig(Waveform::flat(true));
    assert_eq!(dht.read(), Err(DecodeError::Timeout("response start")));
}

#[test]
fn stuck_line_after_handshake_times_out_per_bit_phase() {
    // Handshake completes, then the line never rises for the first bit.
    let wave = WaveformBuilder::start(true, DHT_RELEASE_AT_US + 20)
        .low(80)
        .high(80)
        .build(false);
    let mut dht = climate_rig(wave);
    assert_eq!(dht.read(), Err(DecodeError::Timeout("bit frame")));
}

// ── Ranging decoder ───────────────────────────────────────────

fn ranging_rig(echo_wave: Waveform) -> HcSr04<ScriptedPin, ScriptedPin, FakeClock, FakeDelay> {
    let time = time_cell();
    HcSr04::new(
        ScriptedPin::new(&time, Waveform::flat(false)),
        ScriptedPin::new(&time, echo_wave),
        FakeClock::new(&time),
        FakeDelay::new(&time),
    )
    .unwrap()
}

#[test]
fn echo_width_maps_to_truncated_centimetres() {
    // 583 µs of round-trip flight is 9.99 cm, which truncates to 9.
    let mut ranger = ranging_rig(echo_pulse(200, 583));
    assert_eq!(ranger.read().unwrap(), 9);
}

#[test]
fn six_hundred_micro_pulse_lands_on_door_threshold() {
    let mut ranger = ranging_rig(echo_pulse(200, 600));
    assert_eq!(ranger.read().unwrap(), 10);
}

#[test]
fn trigger_is_parked_low_then_pulsed_for_10us() {
    let time = time_cell();
    let trig = ScriptedPin::new(&time, Waveform::flat(false));
    let drives = trig.drive_log();
    let mut ranger = HcSr04::new(
        trig,
        ScriptedPin::new(&time, echo_pulse(200, 300)),
        FakeClock::new(&time),
        FakeDelay::new(&time),
    )
    .unwrap();
    ranger.read().unwrap();
    assert_eq!(*drives.borrow(), vec![(0, false), (0, true), (10, false)]);
}

#[test]
fn silent_echo_line_times_out() {
    let mut ranger = ranging_rig(Waveform::flat(false));
    assert_eq!(ranger.read(), Err(DecodeError::Timeout("echo rise")));
}

#[test]
fn conversion_is_monotonic_around_thresholds() {
    assert_eq!(distance_from_pulse_us(58), 0);
    assert_eq!(distance_from_pulse_us(59), 1);
    assert!(distance_from_pulse_us(583) <= distance_from_pulse_us(600));
}
