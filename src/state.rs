//! Shared sensor state.
//!
//! Four producer threads publish into one mutex-guarded [`Snapshot`]; the
//! aggregator copies the whole struct out once per tick.  Critical sections
//! are a handful of field assignments — sensor I/O and rule evaluation never
//! run under the lock.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::analyzer::messages::AlertLevel;

/// Latest value from every sensor channel plus aggregation bookkeeping.
///
/// Validity follows one rule everywhere: a failed read marks its channel
/// invalid and leaves the last good value in place, so consumers can tell
/// "stale" from "never seen" without losing the value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub temperature_c: i32,
    pub humidity_pct: i32,
    pub climate_valid: bool,

    pub gas_detected: bool,
    pub gas_valid: bool,

    pub motion_detected: bool,
    pub motion_valid: bool,

    pub distance_cm: u16,
    pub door_closed: bool,
    pub door_valid: bool,

    /// Level computed by the most recent aggregator tick.
    pub alert_level: AlertLevel,
    /// Ticks completed so far; the next outbound snapshot claims this value.
    pub sequence_num: u32,
}

/// Cloneable handle to the shared snapshot.
///
/// Every producer gets its own clone and calls only the publish methods for
/// its own channel; the aggregator is the only caller of [`snapshot`] and
/// [`finish_tick`]. That write-ownership split is by convention, but the
/// methods make it hard to get wrong.
///
/// [`snapshot`]: SharedState::snapshot
/// [`finish_tick`]: SharedState::finish_tick
#[derive(Clone)]
pub struct SharedState {
    inner: Arc<Mutex<Snapshot>>,
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Snapshot::default())),
        }
    }

    /// Critical sections are plain assignments; recover a poisoned guard
    /// instead of taking the whole node down.
    fn lock(&self) -> MutexGuard<'_, Snapshot> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn publish_climate(&self, temperature_c: i32, humidity_pct: i32) {
        let mut s = self.lock();
        s.temperature_c = temperature_c;
        s.humidity_pct = humidity_pct;
        s.climate_valid = true;
    }

    pub fn invalidate_climate(&self) {
        self.lock().climate_valid = false;
    }

    pub fn publish_gas(&self, detected: bool) {
        let mut s = self.lock();
        s.gas_detected = detected;
        s.gas_valid = true;
    }

    pub fn invalidate_gas(&self) {
        self.lock().gas_valid = false;
    }

    pub fn publish_motion(&self, detected: bool) {
        let mut s = self.lock();
        s.motion_detected = detected;
        s.motion_valid = true;
    }

    pub fn invalidate_motion(&self) {
        self.lock().motion_valid = false;
    }

    pub fn publish_range(&self, distance_cm: u16, door_closed: bool) {
        let mut s = self.lock();
        s.distance_cm = distance_cm;
        s.door_closed = door_closed;
        s.door_valid = true;
    }

    pub fn invalidate_range(&self) {
        self.lock().door_valid = false;
    }

    /// One consistent copy of the whole snapshot.
    pub fn snapshot(&self) -> Snapshot {
        *self.lock()
    }

    /// Record the tick's level and claim its sequence number.
    /// Post-increment: the first outbound snapshot is #0.
    pub fn finish_tick(&self, level: AlertLevel) -> u32 {
        let mut s = self.lock();
        s.alert_level = level;
        let seq = s.sequence_num;
        s.sequence_num += 1;
        seq
    }
}
