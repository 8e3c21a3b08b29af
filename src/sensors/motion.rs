//! PIR motion sensor, digital output.
//!
//! The module stretches each detection into a multi-second high pulse on its
//! output, so a 1 Hz poll cannot miss a person walking through the room.

use embedded_hal::digital::InputPin;

use crate::error::DecodeError;

pub struct MotionSensor<P> {
    pin: P,
}

impl<P: InputPin> MotionSensor<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Detected while the module holds the line high.
    pub fn read(&mut self) -> Result<bool, DecodeError> {
        self.pin.is_high().map_err(|_| DecodeError::Line)
    }
}
