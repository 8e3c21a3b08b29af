//! DHT11 single-wire climate sensor.
//!
//! One open-drain data line carries the whole exchange. The controller holds
//! the line low to request a frame and releases it; the sensor answers with a
//! fixed low/high handshake and then 40 timed pulses. Every bit is a ~50 µs
//! low frame followed by a high pulse whose width encodes the value: ≤50 µs
//! is a 0, longer is a 1. Five bytes arrive MSB-first — humidity integer,
//! humidity fraction, temperature integer, temperature fraction, checksum.
//!
//! The driver is generic over the data pin, the microsecond clock and the
//! delay provider, so the complete protocol path runs on the host against
//! scripted waveforms. On-device construction lives in `board`.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin, PinState};

use crate::error::DecodeError;
use crate::hal::{Clock, wait_for_level};

/// Bytes per frame: humidity int/frac, temperature int/frac, checksum.
pub const FRAME_BYTES: usize = 5;

// Protocol timing, from the part's datasheet plus slack.
const START_LOW_MS: u32 = 20; // datasheet minimum 18 ms
const START_RELEASE_US: u32 = 40; // datasheet window 20-40 µs
const HANDSHAKE_TIMEOUT_US: u32 = 200; // each ~80 µs handshake phase
const BIT_FRAME_TIMEOUT_US: u32 = 100; // ~50 µs low frame per bit
const BIT_HIGH_TIMEOUT_US: u32 = 120; // ~70 µs is the longest valid pulse
/// High-pulse width separating a 0 from a 1.
const BIT_ONE_THRESHOLD_US: u32 = 50;

/// One decoded climate frame.
///
/// The DHT11 reports integer precision; the fractional bytes are reserved by
/// the part and not surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClimateReading {
    pub temperature_c: i32,
    pub humidity_pct: i32,
}

/// Validate a raw frame and extract the reading.
///
/// The checksum byte must equal the low byte of the sum of the four payload
/// bytes. Split out from the waveform path so frame handling can be checked
/// and fuzzed without a scripted line.
pub fn decode_frame(data: [u8; FRAME_BYTES]) -> Result<ClimateReading, DecodeError> {
    let sum = data[..4].iter().map(|&b| u16::from(b)).sum::<u16>();
    if (sum & 0xFF) as u8 != data[4] {
        return Err(DecodeError::Checksum);
    }
    Ok(ClimateReading {
        temperature_c: i32::from(data[2]),
        humidity_pct: i32::from(data[0]),
    })
}

pub struct Dht11<P, C, D> {
    pin: P,
    clock: C,
    delay: D,
}

impl<P, C, D> Dht11<P, C, D>
where
    P: InputPin + OutputPin,
    C: Clock,
    D: DelayNs,
{
    /// `pin` must be open-drain with a pull-up: driving it low asserts the
    /// start signal, driving it high releases the line to the sensor.
    pub fn new(pin: P, clock: C, delay: D) -> Self {
        Self { pin, clock, delay }
    }

    /// Run one full frame exchange.
    ///
    /// Holds the thread for ~25 ms (start signal plus 40 bits), busy-polling
    /// between edges. The driver owns the pin, so a second reader on the same
    /// line cannot exist.
    pub fn read(&mut self) -> Result<ClimateReading, DecodeError> {
        // Start signal: hold the line low, release, give the sensor the
        // window it needs to take over.
        self.pin.set_low().map_err(|_| DecodeError::Line)?;
        self.delay.delay_ms(START_LOW_MS);
        self.pin.set_high().map_err(|_| DecodeError::Line)?;
        self.delay.delay_us(START_RELEASE_US);

        // Sensor handshake: ~80 µs low, ~80 µs high, then the first bit frame.
        self.wait(PinState::Low, HANDSHAKE_TIMEOUT_US, "response start")?;
        self.wait(PinState::High, HANDSHAKE_TIMEOUT_US, "response low phase")?;
        self.wait(PinState::Low, HANDSHAKE_TIMEOUT_US, "response high phase")?;

        let mut data = [0u8; FRAME_BYTES];
        for byte in &mut data {
            for _ in 0..8 {
                self.wait(PinState::High, BIT_FRAME_TIMEOUT_US, "bit frame")?;
                let high_us = self.wait(PinState::Low, BIT_HIGH_TIMEOUT_US, "bit pulse")?;
                *byte <<= 1;
                if high_us > BIT_ONE_THRESHOLD_US {
                    *byte |= 1;
                }
            }
        }

        decode_frame(data)
    }

    fn wait(
        &mut self,
        target: PinState,
        timeout_us: u32,
        phase: &'static str,
    ) -> Result<u32, DecodeError> {
        wait_for_level(&mut self.pin, &self.clock, target, timeout_us, phase)
    }
}
