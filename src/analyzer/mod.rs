//! Central analysis stage.
//!
//! Producers publish raw channel values into [`crate::state::SharedState`];
//! everything downstream of that lives here.  [`alerts`] holds the threshold
//! and edge rules, [`messages`] the wire-facing message types, [`ports`] the
//! outbound sink traits, and [`aggregator`] the periodic task that ties them
//! together.

pub mod aggregator;
pub mod alerts;
pub mod messages;
pub mod ports;
