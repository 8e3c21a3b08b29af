//! GPIO pin assignments for the HomeSentry sensor board.
//!
//! Every driver takes its pin from here; no GPIO number appears anywhere
//! else in the image.  The map matches the deployed room-monitor wiring
//! harness, so a board revision is a one-file change.

// ---------------------------------------------------------------------------
// Climate sensor (DHT11, single-wire)
// ---------------------------------------------------------------------------

/// DHT11 data line — open-drain, idles high on the module's pull-up.
/// Driven low by us for the start signal, by the sensor for the reply.
pub const CLIMATE_DATA_GPIO: i32 = 4;

// ---------------------------------------------------------------------------
// Ultrasonic ranger (HC-SR04) — door-position detector
// ---------------------------------------------------------------------------

/// Trigger output: a >=10 µs high pulse starts a measurement.
pub const RANGE_TRIG_GPIO: i32 = 13;
/// Echo input: high for the duration of the ultrasonic round trip.
/// Fed through a divider to 3.3 V; internal pulls stay disabled.
pub const RANGE_ECHO_GPIO: i32 = 25;

// ---------------------------------------------------------------------------
// Digital threshold sensors
// ---------------------------------------------------------------------------

/// MQ-135 gas module comparator output. LOW = gas above the trim-pot
/// threshold; the module carries its own pull-up on D0.
pub const GAS_DETECT_GPIO: i32 = 27;

/// PIR motion sensor output. HIGH = motion within the detection window.
pub const MOTION_DETECT_GPIO: i32 = 21;
