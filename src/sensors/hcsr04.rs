//! HC-SR04 ultrasonic ranger, deployed as the door-position detector.
//!
//! A ≥10 µs pulse on the trigger line starts a measurement; the module then
//! holds its echo line high for the ultrasonic round-trip time. Distance is
//! the high-pulse width times the speed of sound, halved for the round trip.
//!
//! Trigger is a push-pull output, echo an input with pulls disabled; both are
//! configured once by the caller, never per read.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin, PinState};

use crate::error::DecodeError;
use crate::hal::{Clock, wait_for_level};

const TRIGGER_PULSE_US: u32 = 10; // module minimum
/// Bound on each echo wait. ~8.5 m round trip; anything longer is a lost
/// echo, not a door.
const ECHO_TIMEOUT_US: u32 = 50_000;
/// Speed of sound at room temperature, cm per µs.
const SOUND_CM_PER_US: f32 = 0.0343;

/// Convert an echo high-pulse width to whole centimetres (round trip halved,
/// fraction truncated). Monotonically non-decreasing in the pulse width.
pub fn distance_from_pulse_us(pulse_us: u32) -> u16 {
    (pulse_us as f32 * SOUND_CM_PER_US / 2.0) as u16
}

pub struct HcSr04<T, E, C, D> {
    trig: T,
    echo: E,
    clock: C,
    delay: D,
}

impl<T, E, C, D> HcSr04<T, E, C, D>
where
    T: OutputPin,
    E: InputPin,
    C: Clock,
    D: DelayNs,
{
    /// Parks the trigger line low so the first read starts from a clean edge.
    pub fn new(mut trig: T, echo: E, clock: C, delay: D) -> Result<Self, DecodeError> {
        trig.set_low().map_err(|_| DecodeError::Line)?;
        Ok(Self {
            trig,
            echo,
            clock,
            delay,
        })
    }

    /// One ranging cycle: trigger pulse, wait for the echo to rise, then
    /// measure until it falls.
    pub fn read(&mut self) -> Result<u16, DecodeError> {
        self.trig.set_high().map_err(|_| DecodeError::Line)?;
        self.delay.delay_us(TRIGGER_PULSE_US);
        self.trig.set_low().map_err(|_| DecodeError::Line)?;

        wait_for_level(
            &mut self.echo,
            &self.clock,
            PinState::High,
            ECHO_TIMEOUT_US,
            "echo rise",
        )?;
        let pulse_us = wait_for_level(
            &mut self.echo,
            &self.clock,
            PinState::Low,
            ECHO_TIMEOUT_US,
            "echo fall",
        )?;
        Ok(distance_from_pulse_us(pulse_us))
    }
}
