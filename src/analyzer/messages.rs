//! Outbound message types.
//!
//! The [`Aggregator`](super::aggregator::Aggregator) emits these through the
//! sink ports in [`super::ports`].  Adapters on the other side decide what to
//! do with them — render a dashboard file, append to the event log, pulse an
//! indicator line.  The core never learns what the consumers did.

use core::fmt;
use core::time::Duration;

use serde::{Deserialize, Serialize};

use crate::state::Snapshot;

/// Bound on an alert description, excluding any terminator a consumer adds.
pub const MAX_DESCRIPTION_BYTES: usize = 127;

/// Severity attached to every alert and summarized once per tick.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertLevel {
    #[default]
    Info,
    Warning,
    Critical,
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARNING"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Which rule raised an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertCategory {
    TempHigh,
    TempLow,
    Gas,
    Motion,
    DoorClosed,
    DoorOpened,
}

impl AlertCategory {
    /// Indicator code pulsed for this category, if any.
    ///
    /// Low temperature warns without a pulse, and both door edges share the
    /// one door code — deployed behavior, kept as-is.
    pub fn indicator(self) -> Option<IndicatorCode> {
        match self {
            Self::TempHigh => Some(IndicatorCode::Temperature),
            Self::TempLow => None,
            Self::Gas => Some(IndicatorCode::Gas),
            Self::Motion => Some(IndicatorCode::Motion),
            Self::DoorClosed | Self::DoorOpened => Some(IndicatorCode::Door),
        }
    }
}

/// Bare category code for the LED/buzzer indicator process.
///
/// The indicator maps each code to an output line and a hold time; the core
/// sends only the code. Hold times are part of that contract and exposed
/// here so local stand-ins can mimic the real process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum IndicatorCode {
    Motion = 0,
    Gas = 1,
    Temperature = 2,
    Door = 3,
}

impl IndicatorCode {
    /// How long the indicator process holds its line for this code.
    pub const fn pulse_duration(self) -> Duration {
        match self {
            Self::Motion => Duration::from_secs(2),
            Self::Gas => Duration::from_secs(5),
            Self::Temperature => Duration::from_secs(3),
            Self::Door => Duration::from_secs(3),
        }
    }
}

impl fmt::Display for IndicatorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Motion => write!(f, "motion"),
            Self::Gas => write!(f, "gas"),
            Self::Temperature => write!(f, "temperature"),
            Self::Door => write!(f, "door"),
        }
    }
}

/// One alert, created by the aggregator when a rule fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertMessage {
    pub category: AlertCategory,
    pub severity: AlertLevel,
    /// The value that tripped the rule: °C, cm, or 1 for presence.
    pub value: i32,
    pub description: heapless::String<MAX_DESCRIPTION_BYTES>,
    /// Unix seconds at emission.
    pub timestamp: u64,
}

impl AlertMessage {
    /// Build an alert, truncating the description to the wire bound.
    pub fn new(
        category: AlertCategory,
        severity: AlertLevel,
        value: i32,
        description: &str,
        timestamp: u64,
    ) -> Self {
        let mut cut = description.len().min(MAX_DESCRIPTION_BYTES);
        // Back off to a char boundary so a multi-byte tail cannot split.
        while !description.is_char_boundary(cut) {
            cut -= 1;
        }
        let mut d = heapless::String::new();
        let _ = d.push_str(&description[..cut]);
        Self {
            category,
            severity,
            value,
            description: d,
            timestamp,
        }
    }
}

impl fmt::Display for AlertMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} (value={})",
            self.severity, self.description, self.value
        )
    }
}

/// Periodic full-state message, emitted once per aggregator tick whether or
/// not any sensor is currently valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotMessage {
    pub sequence_num: u32,
    /// Unix seconds at emission.
    pub timestamp: u64,
    pub temperature: i32,
    pub temperature_valid: bool,
    pub humidity: i32,
    pub humidity_valid: bool,
    pub gas_detected: bool,
    pub gas_valid: bool,
    pub motion_detected: bool,
    pub motion_valid: bool,
    pub distance_cm: u16,
    pub door_closed: bool,
    pub door_valid: bool,
    pub alert_level: AlertLevel,
}

impl SnapshotMessage {
    /// Assemble the wire message from a state copy plus the tick's freshly
    /// claimed sequence number and level.
    ///
    /// `temperature_valid` and `humidity_valid` both mirror the single
    /// climate producer's flag; the wire contract keeps them as two fields.
    pub fn assemble(sequence_num: u32, timestamp: u64, snap: &Snapshot, level: AlertLevel) -> Self {
        Self {
            sequence_num,
            timestamp,
            temperature: snap.temperature_c,
            temperature_valid: snap.climate_valid,
            humidity: snap.humidity_pct,
            humidity_valid: snap.climate_valid,
            gas_detected: snap.gas_detected,
            gas_valid: snap.gas_valid,
            motion_detected: snap.motion_detected,
            motion_valid: snap.motion_valid,
            distance_cm: snap.distance_cm,
            door_closed: snap.door_closed,
            door_valid: snap.door_valid,
            alert_level: level,
        }
    }
}

impl fmt::Display for SnapshotMessage {
    /// Compact one-line summary for local logging; `?` marks a field whose
    /// producer is currently failing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} ", self.sequence_num)?;
        if self.temperature_valid {
            write!(f, "temp={}C hum={}% ", self.temperature, self.humidity)?;
        } else {
            write!(f, "temp=? hum=? ")?;
        }
        if self.gas_valid {
            write!(f, "gas={} ", if self.gas_detected { "yes" } else { "no" })?;
        } else {
            write!(f, "gas=? ")?;
        }
        if self.motion_valid {
            write!(
                f,
                "motion={} ",
                if self.motion_detected { "yes" } else { "no" }
            )?;
        } else {
            write!(f, "motion=? ")?;
        }
        if self.door_valid {
            write!(
                f,
                "dist={}cm door={} ",
                self.distance_cm,
                if self.door_closed { "closed" } else { "open" }
            )?;
        } else {
            write!(f, "dist=? door=? ")?;
        }
        write!(f, "level={}", self.alert_level)
    }
}
