//! Sink ports — the boundary between the analysis core and its consumers.
//!
//! ```text
//!   Aggregator (domain) ──▶ Sink trait ──▶ Adapter ──▶ external process
//! ```
//!
//! The [`Aggregator`](super::aggregator::Aggregator) holds each sink as an
//! `Option`: every consumer is free to be absent and the node keeps running
//! in a degraded, locally-observable mode. Delivery through any of these is
//! best-effort at-most-once — implementations must not block for long and
//! must report failure rather than retry internally.

use crate::analyzer::messages::{AlertMessage, IndicatorCode, SnapshotMessage};
use crate::error::SinkError;

// ───────────────────────────────────────────────────────────────
// Snapshot sink (domain → dashboard/statistics process)
// ───────────────────────────────────────────────────────────────

/// Takes the once-per-tick full snapshot message.
pub trait SnapshotSink {
    fn send(&mut self, msg: &SnapshotMessage) -> Result<(), SinkError>;
}

// ───────────────────────────────────────────────────────────────
// Alert sink (domain → event log process)
// ───────────────────────────────────────────────────────────────

/// Takes each alert raised during a tick, in rule order.
pub trait AlertSink {
    fn send(&mut self, msg: &AlertMessage) -> Result<(), SinkError>;
}

// ───────────────────────────────────────────────────────────────
// Indicator sink (domain → LED/buzzer process)
// ───────────────────────────────────────────────────────────────

/// Takes a bare category code; the indicator process owns the mapping from
/// code to output line and hold time.
pub trait IndicatorSink {
    fn trigger(&mut self, code: IndicatorCode) -> Result<(), SinkError>;
}
