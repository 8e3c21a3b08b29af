//! Alert rules.
//!
//! The engine runs once per aggregator tick, over a snapshot copied out of
//! the shared state — never under the lock. Temperature, gas and motion are
//! level-triggered (they fire on every tick while their condition holds);
//! the door is edge-triggered through an explicit latch. A rule whose
//! validity flag is down is skipped entirely: no alert, no latch movement.
//!
//! Humidity has configured bounds but no rule — deployment parity, see
//! [`crate::config::ThresholdConfig`].

use heapless::Vec;

use crate::analyzer::messages::{AlertCategory, AlertLevel, AlertMessage};
use crate::config::ThresholdConfig;
use crate::state::Snapshot;

/// Upper bound on alerts one tick can raise; at most one per rule today.
pub const MAX_ALERTS_PER_TICK: usize = 8;

/// Everything one evaluation produced.
#[derive(Debug, Clone, Default)]
pub struct Assessment {
    /// Alerts in rule order: temperature, gas, motion, door.
    pub alerts: Vec<AlertMessage, MAX_ALERTS_PER_TICK>,
    /// Maximum severity raised this tick, INFO when quiet.
    pub level: AlertLevel,
}

impl Assessment {
    fn push(&mut self, alert: AlertMessage) {
        self.level = self.level.max(alert.severity);
        // Capacity covers every rule firing at once.
        let _ = self.alerts.push(alert);
    }
}

/// Threshold and edge rules plus their latch state.
pub struct AlertEngine {
    thresholds: ThresholdConfig,
    /// Last observed motion state. Updated but not consulted, so motion
    /// alerts repeat every tick while motion persists.
    /// TODO: decide whether motion should edge-trigger like the door, then
    /// either move this latch into the condition or delete it.
    #[allow(dead_code)]
    last_motion: bool,
    /// Door state latched from the last tick with a valid range reading.
    /// Starts "open", so a door already closed at boot alerts once.
    last_door_closed: bool,
}

impl AlertEngine {
    pub fn new(thresholds: ThresholdConfig) -> Self {
        Self {
            thresholds,
            last_motion: false,
            last_door_closed: false,
        }
    }

    /// Evaluate one tick. Mutates nothing but the latch fields.
    pub fn evaluate(&mut self, snap: &Snapshot, timestamp: u64) -> Assessment {
        let mut out = Assessment::default();

        // Temperature: at most one alert per tick, high checked first.
        if snap.climate_valid {
            if snap.temperature_c > self.thresholds.temp_high_c {
                out.push(AlertMessage::new(
                    AlertCategory::TempHigh,
                    AlertLevel::Warning,
                    snap.temperature_c,
                    "Temperature above threshold",
                    timestamp,
                ));
            } else if snap.temperature_c < self.thresholds.temp_low_c {
                out.push(AlertMessage::new(
                    AlertCategory::TempLow,
                    AlertLevel::Warning,
                    snap.temperature_c,
                    "Temperature below threshold",
                    timestamp,
                ));
            }
        }

        if snap.gas_valid && snap.gas_detected {
            out.push(AlertMessage::new(
                AlertCategory::Gas,
                AlertLevel::Critical,
                1,
                "Gas detected - potential hazard!",
                timestamp,
            ));
        }

        if snap.motion_valid && snap.motion_detected {
            out.push(AlertMessage::new(
                AlertCategory::Motion,
                AlertLevel::Info,
                1,
                "Motion detected",
                timestamp,
            ));
            self.last_motion = snap.motion_detected;
        }

        if snap.door_valid {
            if snap.door_closed && !self.last_door_closed {
                out.push(AlertMessage::new(
                    AlertCategory::DoorClosed,
                    AlertLevel::Info,
                    i32::from(snap.distance_cm),
                    "Door closed",
                    timestamp,
                ));
            } else if !snap.door_closed && self.last_door_closed {
                out.push(AlertMessage::new(
                    AlertCategory::DoorOpened,
                    AlertLevel::Info,
                    i32::from(snap.distance_cm),
                    "Door opened",
                    timestamp,
                ));
            }
            self.last_door_closed = snap.door_closed;
        }

        out
    }
}
