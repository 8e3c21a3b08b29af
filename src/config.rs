//! Node configuration.
//!
//! All tunable parameters for the HomeSentry node. The defaults are the
//! deployed room-monitor values; the struct is built once at startup and
//! handed to tasks by copy — nothing mutates it afterwards.

use serde::{Deserialize, Serialize};

/// Alert threshold boundaries.
///
/// The humidity bounds are part of the deployed configuration but no alert
/// rule currently consumes them; only temperature, gas, motion and door are
/// evaluated (see `analyzer::alerts`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ThresholdConfig {
    /// Temperature above this raises a warning (°C).
    pub temp_high_c: i32,
    /// Temperature below this raises a warning (°C).
    pub temp_low_c: i32,
    /// Upper humidity bound (%RH).
    pub humidity_high_pct: i32,
    /// Lower humidity bound (%RH).
    pub humidity_low_pct: i32,
    /// Ranger reading at or below this means the door is closed (cm).
    pub door_closed_dist_cm: u16,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            temp_high_c: 30,
            temp_low_c: 15,
            humidity_high_pct: 80,
            humidity_low_pct: 20,
            door_closed_dist_cm: 10,
        }
    }
}

/// Top-level node configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SystemConfig {
    /// Alert boundaries.
    pub thresholds: ThresholdConfig,

    // --- Timing ---
    /// Producer poll interval per sensor (milliseconds)
    pub sensor_poll_interval_ms: u32,
    /// Aggregator tick interval (milliseconds)
    pub aggregate_interval_ms: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            thresholds: ThresholdConfig::default(),

            // Timing
            sensor_poll_interval_ms: 1000, // 1 Hz per sensor
            aggregate_interval_ms: 2000,   // one outbound snapshot per 2 s
        }
    }
}
