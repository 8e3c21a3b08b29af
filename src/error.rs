//! Unified error types for the HomeSentry firmware.
//!
//! Two small categories: decode errors raised by sensor drivers and sink
//! errors raised by outbound delivery. All variants are `Copy` so they pass
//! through producer loops and the aggregator without allocation. Neither
//! category is fatal: decode errors downgrade a snapshot validity flag, sink
//! errors downgrade delivery to local logging.

use core::fmt;

// ---------------------------------------------------------------------------
// Sensor decode errors
// ---------------------------------------------------------------------------

/// A sensor read failed before yielding a usable reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// A bounded wait for a line state elapsed. Carries the protocol phase
    /// that was being waited on, for the producer's log line.
    Timeout(&'static str),
    /// A full frame arrived but its checksum byte does not match the payload.
    Checksum,
    /// The underlying line read/write primitive failed.
    Line,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout(phase) => write!(f, "timeout waiting for {phase}"),
            Self::Checksum => write!(f, "frame checksum mismatch"),
            Self::Line => write!(f, "line I/O failed"),
        }
    }
}

impl core::error::Error for DecodeError {}

// ---------------------------------------------------------------------------
// Sink delivery errors
// ---------------------------------------------------------------------------

/// A downstream sink could not take a message.
///
/// Delivery is best-effort at-most-once: the aggregator logs the error and
/// moves on, it never retries within a tick and never stops the tick loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkError {
    /// The sink's channel is not reachable (collaborator absent or gone).
    Unavailable,
    /// The sink replied with a non-success status.
    Rejected,
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(f, "sink unavailable"),
            Self::Rejected => write!(f, "sink rejected message"),
        }
    }
}

impl core::error::Error for SinkError {}
