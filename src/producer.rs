//! Sensor producer tasks.
//!
//! One thread per sensor channel.  Each thread owns its driver (passed in as
//! a `read` closure so the loop is target-agnostic), polls at a fixed
//! interval and publishes into [`SharedState`].  A failed read invalidates
//! the channel; the loop keeps running and the channel stays invalid until
//! the next good read.
//!
//! The producers never talk to each other and never touch the sinks.  All
//! cross-channel logic lives downstream in `analyzer`.

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{info, warn};

use crate::error::DecodeError;
use crate::sensors::dht11::ClimateReading;
use crate::state::SharedState;

/// Stack size for producer and aggregator threads.  The ESP-IDF pthread
/// default (3 KiB) is too tight for the formatting paths in the log macros.
pub const TASK_STACK_BYTES: usize = 8 * 1024;

// ═══════════════════════════════════════════════════════════════
//  Per-channel spawns
// ═══════════════════════════════════════════════════════════════

/// Spawn the climate producer (temperature + humidity, one frame per poll).
pub fn spawn_climate<F>(
    read: F,
    state: SharedState,
    interval: Duration,
    running: Arc<AtomicBool>,
) -> io::Result<JoinHandle<()>>
where
    F: FnMut() -> Result<ClimateReading, DecodeError> + Send + 'static,
{
    spawn_reader(
        "climate",
        read,
        state,
        interval,
        running,
        |s, r: ClimateReading| s.publish_climate(r.temperature_c, r.humidity_pct),
        SharedState::invalidate_climate,
    )
}

/// Spawn the gas producer.  `read` yields `true` while gas is detected.
pub fn spawn_gas<F>(
    read: F,
    state: SharedState,
    interval: Duration,
    running: Arc<AtomicBool>,
) -> io::Result<JoinHandle<()>>
where
    F: FnMut() -> Result<bool, DecodeError> + Send + 'static,
{
    spawn_reader(
        "gas",
        read,
        state,
        interval,
        running,
        |s, detected| s.publish_gas(detected),
        SharedState::invalidate_gas,
    )
}

/// Spawn the motion producer.  `read` yields `true` while motion is seen.
pub fn spawn_motion<F>(
    read: F,
    state: SharedState,
    interval: Duration,
    running: Arc<AtomicBool>,
) -> io::Result<JoinHandle<()>>
where
    F: FnMut() -> Result<bool, DecodeError> + Send + 'static,
{
    spawn_reader(
        "motion",
        read,
        state,
        interval,
        running,
        |s, detected| s.publish_motion(detected),
        SharedState::invalidate_motion,
    )
}

/// Spawn the range producer.  `read` yields a distance in centimetres; the
/// door is closed when the distance is at or below `door_closed_dist_cm`.
pub fn spawn_range<F>(
    mut read: F,
    state: SharedState,
    door_closed_dist_cm: u16,
    interval: Duration,
    running: Arc<AtomicBool>,
) -> io::Result<JoinHandle<()>>
where
    F: FnMut() -> Result<u16, DecodeError> + Send + 'static,
{
    spawn_reader(
        "range",
        move || read().map(|cm| (cm, cm <= door_closed_dist_cm)),
        state,
        interval,
        running,
        |s, (cm, closed)| s.publish_range(cm, closed),
        SharedState::invalidate_range,
    )
}

// ═══════════════════════════════════════════════════════════════
//  Shared loop
// ═══════════════════════════════════════════════════════════════

/// Read-then-sleep loop shared by every producer.  `publish` and
/// `invalidate` are plain fn pointers; everything channel-specific is
/// composed into `read` by the public spawns above.
fn spawn_reader<R, F>(
    name: &'static str,
    mut read: F,
    state: SharedState,
    interval: Duration,
    running: Arc<AtomicBool>,
    publish: fn(&SharedState, R),
    invalidate: fn(&SharedState),
) -> io::Result<JoinHandle<()>>
where
    R: Send + 'static,
    F: FnMut() -> Result<R, DecodeError> + Send + 'static,
{
    thread::Builder::new()
        .name(name.into())
        .stack_size(TASK_STACK_BYTES)
        .spawn(move || {
            info!("{name} producer started ({}ms poll)", interval.as_millis());
            while running.load(Ordering::Relaxed) {
                match read() {
                    Ok(value) => publish(&state, value),
                    Err(e) => {
                        warn!("{name} read failed: {e}");
                        invalidate(&state);
                    }
                }
                thread::sleep(interval);
            }
            info!("{name} producer stopped");
        })
}
