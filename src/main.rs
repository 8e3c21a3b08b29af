//! HomeSentry Firmware — Main Entry Point
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Producers (one thread per sensor)                           │
//! │  climate(DHT11) · gas(MQ-135) · motion(PIR) · range(HC-SR04) │
//! │        │ publish / invalidate                                │
//! │        ▼                                                     │
//! │  SharedState (mutex-guarded snapshot)                        │
//! │        │ one copy per tick                                   │
//! │        ▼                                                     │
//! │  Aggregator ──▶ SnapshotSink · AlertSink · IndicatorSink     │
//! └──────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::Duration;

use anyhow::Result;
use log::{error, info};

use homesentry::adapters::log_sink::{LogAlertSink, LogIndicatorSink, LogSnapshotSink};
use homesentry::analyzer::aggregator::{self, Aggregator};
use homesentry::board::Board;
use homesentry::config::SystemConfig;
use homesentry::producer;
use homesentry::state::SharedState;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  HomeSentry v{}                      ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    let config = SystemConfig::default();
    let poll = Duration::from_millis(u64::from(config.sensor_poll_interval_ms));
    let aggregate = Duration::from_millis(u64::from(config.aggregate_interval_ms));

    // ── 2. Hardware ───────────────────────────────────────────
    let Board {
        mut climate,
        mut ranger,
        mut gas,
        mut motion,
    } = Board::init()?;

    // ── 3. Shared state and lifecycle flag ────────────────────
    let state = SharedState::default();
    // Stays high for the life of the image; bench builds and tests use it
    // to wind the threads down.
    let running = Arc::new(AtomicBool::new(true));

    // ── 4. Producer tasks ─────────────────────────────────────
    let climate_task = producer::spawn_climate(
        move || climate.read(),
        state.clone(),
        poll,
        Arc::clone(&running),
    )?;
    let gas_task = producer::spawn_gas(
        move || gas.read(),
        state.clone(),
        poll,
        Arc::clone(&running),
    )?;
    let motion_task = producer::spawn_motion(
        move || motion.read(),
        state.clone(),
        poll,
        Arc::clone(&running),
    )?;
    let range_task = producer::spawn_range(
        move || ranger.read(),
        state.clone(),
        config.thresholds.door_closed_dist_cm,
        poll,
        Arc::clone(&running),
    )?;

    // ── 5. Aggregator ─────────────────────────────────────────
    // This node ships with the log-backed sinks; a field unit with network
    // consumers swaps them here without touching the aggregator.
    let agg = Aggregator::new(
        &config,
        Some(LogSnapshotSink::new()),
        Some(LogAlertSink::new()),
        Some(LogIndicatorSink::new()),
    );
    let agg_task = aggregator::spawn(agg, state.clone(), aggregate, Arc::clone(&running))?;

    info!("System ready: 4 producers + aggregator running.");

    // The flag never drops on-device, so these joins park the main task.
    for handle in [climate_task, gas_task, motion_task, range_task, agg_task] {
        let name = handle.thread().name().unwrap_or("worker").to_owned();
        if handle.join().is_err() {
            error!("{name} thread panicked");
        }
    }

    Ok(())
}
