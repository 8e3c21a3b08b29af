//! Hardware composition root (device build only).
//!
//! Claims the GPIOs listed in [`crate::pins`], configures them and
//! assembles the four sensor drivers.  This is the only module that touches
//! esp-idf-hal directly; everything above it works against embedded-hal
//! traits and runs unchanged on the host.

use esp_idf_hal::delay::Delay;
use esp_idf_hal::gpio::{AnyIOPin, Input, InputOutput, Output, PinDriver, Pull};

use crate::hal::SystemClock;
use crate::pins;
use crate::sensors::dht11::Dht11;
use crate::sensors::gas::GasSensor;
use crate::sensors::hcsr04::HcSr04;
use crate::sensors::motion::MotionSensor;

pub type ClimateSensor = Dht11<PinDriver<'static, AnyIOPin, InputOutput>, SystemClock, Delay>;
pub type RangeSensor = HcSr04<
    PinDriver<'static, AnyIOPin, Output>,
    PinDriver<'static, AnyIOPin, Input>,
    SystemClock,
    Delay,
>;
pub type GasInput = GasSensor<PinDriver<'static, AnyIOPin, Input>>;
pub type MotionInput = MotionSensor<PinDriver<'static, AnyIOPin, Input>>;

/// The assembled sensor set.  Fields are public so `main` can move each
/// driver into its producer thread.
pub struct Board {
    pub climate: ClimateSensor,
    pub ranger: RangeSensor,
    pub gas: GasInput,
    pub motion: MotionInput,
}

impl Board {
    /// Claim and configure every sensor GPIO.  Call once at boot.
    ///
    /// The `AnyIOPin::new` calls are sound because each GPIO number appears
    /// exactly once in `pins` and nothing else in the image claims them.
    pub fn init() -> anyhow::Result<Self> {
        // Climate data line is bidirectional: open-drain, internal pull-up,
        // parked high so the sensor sees an idle bus.
        let mut climate_pin =
            PinDriver::input_output_od(unsafe { AnyIOPin::new(pins::CLIMATE_DATA_GPIO) })?;
        climate_pin.set_pull(Pull::Up)?;
        climate_pin.set_high()?;

        let trig = PinDriver::output(unsafe { AnyIOPin::new(pins::RANGE_TRIG_GPIO) })?;
        let mut echo = PinDriver::input(unsafe { AnyIOPin::new(pins::RANGE_ECHO_GPIO) })?;
        echo.set_pull(Pull::Floating)?;

        // Both detector modules drive their outputs; no internal pulls.
        let mut gas_pin = PinDriver::input(unsafe { AnyIOPin::new(pins::GAS_DETECT_GPIO) })?;
        gas_pin.set_pull(Pull::Floating)?;
        let mut motion_pin = PinDriver::input(unsafe { AnyIOPin::new(pins::MOTION_DETECT_GPIO) })?;
        motion_pin.set_pull(Pull::Floating)?;

        let ranger = HcSr04::new(trig, echo, SystemClock::new(), Delay::new_default())
            .map_err(|e| anyhow::anyhow!("ranger trigger line: {e}"))?;

        Ok(Self {
            climate: Dht11::new(climate_pin, SystemClock::new(), Delay::new_default()),
            ranger,
            gas: GasSensor::new(gas_pin),
            motion: MotionSensor::new(motion_pin),
        })
    }
}
