//! Line-level timing primitives shared by the protocol decoders.
//!
//! Both wire protocols in this system (single-wire climate frames, pulse-echo
//! ranging) reduce to the same primitive: busy-poll a digital line until it
//! reaches a target level, bounded by a deadline, and report how long that
//! took. [`wait_for_level`] is that primitive; both decoders are built on it.
//!
//! Time comes from a [`Clock`]:
//! - **`target_os = "espidf"`** — [`SystemClock`] wraps `esp_timer_get_time()`
//!   (microsecond precision, monotonic).
//! - **`not(target_os = "espidf")`** — [`SystemClock`] uses
//!   `std::time::Instant`; tests substitute scripted clocks.

use embedded_hal::digital::{InputPin, PinState};

use crate::error::DecodeError;

/// Monotonic microsecond time source.
///
/// Implementations must never step backwards; resolution should be 1 µs or
/// better, since bit decisions ride on ~25 µs differences.
pub trait Clock {
    /// Microseconds since an arbitrary fixed origin.
    fn now_us(&self) -> u64;
}

/// Platform monotonic clock.
pub struct SystemClock {
    #[cfg(not(target_os = "espidf"))]
    start: std::time::Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            #[cfg(not(target_os = "espidf"))]
            start: std::time::Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    #[cfg(target_os = "espidf")]
    fn now_us(&self) -> u64 {
        (unsafe { esp_idf_svc::sys::esp_timer_get_time() }) as u64
    }

    #[cfg(not(target_os = "espidf"))]
    fn now_us(&self) -> u64 {
        self.start.elapsed().as_micros() as u64
    }
}

/// Wall-clock seconds since the Unix epoch, 0 if the clock is unset
/// (e.g. pre-NTP on a fresh boot).
pub fn now_unix_secs() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}

/// Busy-poll `pin` until it reads `target`, bounded by `timeout_us`.
///
/// Returns the microseconds elapsed between entry and the first sample at the
/// target level — i.e. how long the line stayed at the *opposite* level —
/// which is exactly the pulse-width measurement both decoders need. `phase`
/// names the protocol step for the timeout error.
///
/// The loop deliberately never yields: the waits are tens of microseconds to
/// tens of milliseconds and the calling producer owns its thread.
pub fn wait_for_level<P, C>(
    pin: &mut P,
    clock: &C,
    target: PinState,
    timeout_us: u32,
    phase: &'static str,
) -> Result<u32, DecodeError>
where
    P: InputPin,
    C: Clock,
{
    let start = clock.now_us();
    loop {
        let level = if pin.is_high().map_err(|_| DecodeError::Line)? {
            PinState::High
        } else {
            PinState::Low
        };
        let elapsed = clock.now_us().saturating_sub(start);
        if level == target {
            return Ok(elapsed as u32);
        }
        if elapsed > u64::from(timeout_us) {
            return Err(DecodeError::Timeout(phase));
        }
    }
}
