//! Sensor drivers.
//!
//! Two timed-protocol decoders ([`dht11`], [`hcsr04`]) built on the shared
//! [`crate::hal::wait_for_level`] primitive, and two plain digital reads
//! ([`gas`], [`motion`]). There is no synchronous read-all hub: every driver
//! is owned by its own producer thread (see [`crate::producer`]), which is
//! what keeps a 25 ms climate frame from delaying the other channels.

pub mod dht11;
pub mod gas;
pub mod hcsr04;
pub mod motion;
