//! Wire-format construction for the Control Change messages the device transmits.
//!
//! Everything the Tiltwheel says on the wire is a three-byte Control Change. Range checking happens
//! here, once, at construction: a request with any field outside the MIDI domain produces no message
//! at all rather than a malformed or truncated one, and the drop is silent.

use wmidi::{Channel, ControlFunction, ControlValue, MidiMessage, U7};

/// Status byte identifying a Control Change, before the channel bits are folded in.
const CONTROL_CHANGE_STATUS: u8 = 0xB0;

/// The channel every message is sent on. The downstream receiver listens on channel 0 only.
pub const CHANNEL: u8 = 0;

/// Controller number assigned to button A.
pub const BUTTON_A: u8 = 20;
/// Controller number assigned to button B.
pub const BUTTON_B: u8 = 21;
/// Controller number assigned to the touch pad.
pub const TOUCH_PAD: u8 = 22;
/// Controller number assigned to the potentiometer.
pub const WIPER: u8 = 23;
/// Controller number assigned to the accelerometer X axis.
pub const ACCEL_X: u8 = 24;
/// Controller number assigned to the accelerometer Y axis.
pub const ACCEL_Y: u8 = 25;
/// Controller number assigned to the accelerometer Z axis. The receiver ignores this controller,
/// but the axis is transmitted all the same.
pub const ACCEL_Z: u8 = 26;

/// A validated three-byte Control Change message.
///
/// Internally this holds [`wmidi`]'s channel and 7-bit value types, so an instance existing at all
/// means every field already passed its range check. The `Default` implementation exists only
/// because [`tinyvec`] requires that items implement [`Default`]; it is never transmitted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlChange {
    channel: Channel,
    function: ControlFunction,
    value: ControlValue,
}

impl Default for ControlChange {
    fn default() -> Self {
        Self {
            channel: Channel::Ch1,
            function: ControlFunction::BANK_SELECT,
            value: U7::MIN,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ControlChange {
    fn format(&self, fmt: defmt::Formatter) {
        let [status, controller, value] = self.to_bytes();
        defmt::write!(
            fmt,
            "ControlChange {{ status: {=u8:#x}, controller: {}, value: {} }}",
            status,
            controller,
            value
        );
    }
}

impl ControlChange {
    /// Builds a message from a channel, a controller number, and a value.
    ///
    /// Returns `None` (no message, nothing partially built) when the channel exceeds 15, the
    /// controller exceeds 127, or the value falls outside 0..=127. The value parameter is wide
    /// enough to carry an unclamped rescale result; an out-of-range excursion from an analog
    /// input is dropped here, never wrapped into a wrong-but-valid value.
    pub fn new(channel: u8, controller: u8, value: i32) -> Option<Self> {
        let channel = Channel::from_index(channel).ok()?;
        let function = ControlFunction(U7::try_from(controller).ok()?);
        let value = ControlValue::try_from(u8::try_from(value).ok()?).ok()?;

        Some(Self {
            channel,
            function,
            value,
        })
    }

    /// Serializes the message for the wire: `[0xB0 | channel, controller, value]`.
    pub fn to_bytes(&self) -> [u8; 3] {
        [
            CONTROL_CHANGE_STATUS | self.channel.index(),
            u8::from(self.function),
            u8::from(self.value),
        ]
    }

    /// Returns the equivalent [`wmidi`] message.
    pub fn to_midi_message(&self) -> MidiMessage<'static> {
        MidiMessage::ControlChange(self.channel, self.function, self.value)
    }
}
