//! Change detection and rescaling for the seven monitored inputs.
//!
//! A [`ControlSurface`] owns the last-seen value of every input and turns one cycle's worth of raw
//! samples into the messages that should leave the device this cycle. Each input is considered
//! independently: the pushbutton-like inputs are edge-triggered, the analog inputs are
//! level-triggered, and every input carries its own fixed controller number.

mod analog;
pub use analog::*;

mod digital;
pub use digital::*;

use crate::midi::{self, ControlChange};
use tinyvec::ArrayVec;

/// Number of monitored inputs, and therefore the most messages one cycle can produce.
pub const INPUT_CNT: usize = 7;

/// The messages emitted by one update cycle, in input order.
pub type CycleMessages = ArrayVec<[ControlChange; INPUT_CNT]>;

/// One cycle's worth of raw samples, in the order the sampler reads them.
///
/// Analog readings arrive already conditioned to their native domains: the wiper is a 10-bit
/// reading, each accelerometer axis is a centered signed reading whose resting magnitude is
/// about 1024 and which can overshoot to about twice that when the device is shaken.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputFrame {
    /// Button A is pressed.
    pub button_a: bool,
    /// Button B is pressed.
    pub button_b: bool,
    /// The touch pad is being touched.
    pub touch: bool,
    /// Potentiometer wiper position, 0..=1023.
    pub pot: u16,
    /// Accelerometer X axis, centered.
    pub accel_x: i16,
    /// Accelerometer Y axis, centered.
    pub accel_y: i16,
    /// Accelerometer Z axis, centered.
    pub accel_z: i16,
}

/// The device's entire mutable state: the last-seen value of each input.
///
/// All seven entries live here as fields, held through one exclusive borrow per cycle by the
/// loop's single writer. Entries start from their rest sentinels (released buttons, zeroed
/// analog readings) and are mutated only by [`update`](Self::update), each according to its own
/// refresh policy.
pub struct ControlSurface {
    button_a: PushControl,
    button_b: PushControl,
    touch: PushControl,
    pot: WiperControl,
    accel_x: AxisControl,
    accel_y: AxisControl,
    accel_z: AxisControl,
}

impl Default for ControlSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlSurface {
    /// Constructs a surface with every input at its rest sentinel.
    pub fn new() -> Self {
        Self {
            button_a: PushControl::new(midi::BUTTON_A),
            button_b: PushControl::new(midi::BUTTON_B),
            touch: PushControl::new(midi::TOUCH_PAD),
            pot: WiperControl::new(midi::WIPER),
            accel_x: AxisControl::new(midi::ACCEL_X),
            accel_y: AxisControl::new(midi::ACCEL_Y),
            accel_z: AxisControl::new(midi::ACCEL_Z),
        }
    }

    /// Compares a frame of samples against the previous cycle and returns the messages to
    /// transmit, in input order.
    ///
    /// Inputs that did not change contribute nothing. An input whose rescaled value lands outside
    /// the 7-bit domain also contributes nothing; the message construction drops it.
    pub fn update(&mut self, frame: &InputFrame) -> CycleMessages {
        let cycle = [
            self.button_a.observe(frame.button_a),
            self.button_b.observe(frame.button_b),
            self.touch.observe(frame.touch),
            self.pot.observe(frame.pot),
            self.accel_x.observe(frame.accel_x),
            self.accel_y.observe(frame.accel_y),
            self.accel_z.observe(frame.accel_z),
        ];

        let mut messages = CycleMessages::new();
        for message in cycle.into_iter().flatten() {
            messages.push(message);
        }
        messages
    }
}
