//! Log-backed sink adapters.
//!
//! Implement the three outbound ports by writing to the logger (UART /
//! USB-CDC in production).  These are the sinks a bench unit runs with; a
//! future network adapter would implement the same traits.

use log::info;

use crate::analyzer::messages::{AlertMessage, IndicatorCode, SnapshotMessage};
use crate::analyzer::ports::{AlertSink, IndicatorSink, SnapshotSink};
use crate::error::SinkError;

/// Logs every snapshot as a single JSON line.
pub struct LogSnapshotSink;

impl LogSnapshotSink {
    pub fn new() -> Self {
        Self
    }
}

impl SnapshotSink for LogSnapshotSink {
    fn send(&mut self, msg: &SnapshotMessage) -> Result<(), SinkError> {
        match serde_json::to_string(msg) {
            Ok(json) => {
                info!("SNAP  | {json}");
                Ok(())
            }
            // A message the line format cannot carry is refused, not dropped
            // silently, so the caller's delivery warning fires.
            Err(_) => Err(SinkError::Rejected),
        }
    }
}

/// Logs every alert in its event-log form.
pub struct LogAlertSink;

impl LogAlertSink {
    pub fn new() -> Self {
        Self
    }
}

impl AlertSink for LogAlertSink {
    fn send(&mut self, msg: &AlertMessage) -> Result<(), SinkError> {
        info!("ALERT | {msg}");
        Ok(())
    }
}

/// Logs indicator pulses instead of driving a line.
pub struct LogIndicatorSink;

impl LogIndicatorSink {
    pub fn new() -> Self {
        Self
    }
}

impl IndicatorSink for LogIndicatorSink {
    fn trigger(&mut self, code: IndicatorCode) -> Result<(), SinkError> {
        info!(
            "PULSE | {code} held for {}s",
            code.pulse_duration().as_secs()
        );
        Ok(())
    }
}
