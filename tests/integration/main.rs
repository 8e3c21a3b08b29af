//! Harness root for the integration suite.
//!
//! One submodule per subsystem, all built on the scripted doubles in
//! [`mock_rig`].  Everything here runs on the host; no hardware, no
//! device toolchain.

mod aggregator_tests;
mod decoder_tests;
