//! Adapters — concrete implementations of the outbound port traits.
//!
//! | Adapter    | Implements    | Connects to       |
//! |------------|---------------|-------------------|
//! | `log_sink` | SnapshotSink  | Serial log output |
//! |            | AlertSink     |                   |
//! |            | IndicatorSink |                   |
//!
//! The real downstream consumers (storage writer, event fan-out, indicator
//! line driver) live in separate firmware images; on this node their ports
//! are filled by the log adapters or left `None` for simulated sends.

pub mod log_sink;
