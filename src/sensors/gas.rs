//! MQ-135 gas module, digital comparator output.
//!
//! Only the module's D0 comparator line is wired; its trim pot sets the
//! detection point on the board itself. The line idles high on the module's
//! own pull-up and is driven low while gas exceeds the trim threshold.

use embedded_hal::digital::InputPin;

use crate::error::DecodeError;

pub struct GasSensor<P> {
    pin: P,
}

impl<P: InputPin> GasSensor<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Detected while the comparator holds the line low.
    pub fn read(&mut self) -> Result<bool, DecodeError> {
        self.pin.is_low().map_err(|_| DecodeError::Line)
    }
}
