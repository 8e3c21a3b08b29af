//! HomeSentry room-monitor firmware library.
//!
//! Producer/aggregator firmware for a single room node: four sensor
//! producers publish into a mutex-guarded snapshot, and a periodic
//! aggregator turns snapshots into alerts and outbound messages.  All
//! device-specific code sits behind the `espidf` feature; the host build
//! compiles the full pipeline against test doubles.

#![deny(unused_must_use)]

pub mod adapters;
pub mod analyzer;
pub mod config;
pub mod error;
pub mod hal;
pub mod pins;
pub mod producer;
pub mod sensors;
pub mod state;

#[cfg(feature = "espidf")]
pub mod board;
