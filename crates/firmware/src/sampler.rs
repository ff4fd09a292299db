//! Per-cycle acquisition of the seven monitored inputs.

use embassy_stm32::{
    adc::{Adc, AnyAdcChannel},
    gpio::Input,
    peripherals::ADC1,
};
use tiltwheel_lib::surface::InputFrame;

/// Count subtracted from a raw conversion to recenter an accelerometer axis. The axes idle around
/// the ADC's midscale; after recentering, resting gravity reads near ±1024 on whichever axis
/// points down.
const AXIS_MIDPOINT: i32 = 2048;

/// Owns the input peripherals and reads each of them once per polling cycle.
///
/// Raw conversions are conditioned here into the domains the rest of the device works in: the ADC
/// converts at its 12-bit default, so the wiper reading is narrowed to 10 bits and each
/// accelerometer reading is recentered to a signed value. No debouncing and no filtering; every
/// sample is handed on as read, and deciding what changed is entirely the control surface's job.
pub struct Inputs {
    button_a: Input<'static>,
    button_b: Input<'static>,
    touch: Input<'static>,
    adc: Adc<'static, ADC1>,
    pot: AnyAdcChannel<ADC1>,
    accel_x: AnyAdcChannel<ADC1>,
    accel_y: AnyAdcChannel<ADC1>,
    accel_z: AnyAdcChannel<ADC1>,
}

impl Inputs {
    /// Gathers the device's input peripherals.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        button_a: Input<'static>,
        button_b: Input<'static>,
        touch: Input<'static>,
        adc: Adc<'static, ADC1>,
        pot: AnyAdcChannel<ADC1>,
        accel_x: AnyAdcChannel<ADC1>,
        accel_y: AnyAdcChannel<ADC1>,
        accel_z: AnyAdcChannel<ADC1>,
    ) -> Self {
        Self {
            button_a,
            button_b,
            touch,
            adc,
            pot,
            accel_x,
            accel_y,
            accel_z,
        }
    }

    /// Queries every input once, in a fixed order: buttons, touch pad, wiper, then the three
    /// accelerometer axes.
    pub fn sample(&mut self) -> InputFrame {
        InputFrame {
            button_a: self.button_a.is_high(),
            button_b: self.button_b.is_high(),
            touch: self.touch.is_high(),
            pot: self.adc.blocking_read(&mut self.pot) >> 2,
            accel_x: Self::recenter(self.adc.blocking_read(&mut self.accel_x)),
            accel_y: Self::recenter(self.adc.blocking_read(&mut self.accel_y)),
            accel_z: Self::recenter(self.adc.blocking_read(&mut self.accel_z)),
        }
    }

    /// Shifts a 12-bit conversion down to a signed reading centered on zero.
    fn recenter(sample: u16) -> i16 {
        (i32::from(sample) - AXIS_MIDPOINT) as i16
    }
}
