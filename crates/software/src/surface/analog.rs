//! Level-triggered handling and rescaling for the analog inputs.
//!
//! Both analog control types emit whenever the sampled value differs from the last one seen, each
//! cycle, with the raw reading linearly mapped into the 7-bit controller domain. Neither clamps
//! its rescale: a reading past the nominal range maps past 127 and the message construction drops
//! it, which is the only overflow defense the device has. The two types refresh their stored
//! reading on different schedules; each keeps its own policy.

use crate::midi::{self, ControlChange};

/// The potentiometer.
///
/// Level-triggered on the 10-bit wiper reading. The rescale divides by the full 1024 count rather
/// than the 1023 maximum, so a full-scale reading maps to 126 and 127 is never produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WiperControl {
    controller: u8,
    last: u16,
}

impl WiperControl {
    /// Count of distinct wiper readings; the rescale divisor.
    const FULL_SCALE: i32 = 1024;

    /// Constructs a control that reports on the given controller number, initially at zero.
    pub fn new(controller: u8) -> Self {
        Self {
            controller,
            last: 0,
        }
    }

    /// Emits the rescaled reading when the wiper has moved since the previous cycle.
    ///
    /// The stored reading is refreshed every cycle, moved or not.
    pub fn observe(&mut self, raw: u16) -> Option<ControlChange> {
        let moved = raw != self.last;
        self.last = raw;
        if !moved {
            return None;
        }

        ControlChange::new(midi::CHANNEL, self.controller, Self::rescale(raw))
    }

    /// Maps the 10-bit wiper domain onto the 7-bit controller domain: `floor(raw / 1024 * 127)`,
    /// computed exactly in integer arithmetic.
    fn rescale(raw: u16) -> i32 {
        i32::from(raw) * 127 / Self::FULL_SCALE
    }
}

/// One accelerometer axis.
///
/// Level-triggered on the centered axis reading. All three axes go through this same pipeline;
/// that the receiver happens to ignore the Z controller is the receiver's business.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisControl {
    controller: u8,
    last: i16,
}

impl AxisControl {
    /// Offset added to a reading before rescaling, half the nominal swing of an axis.
    const REST_OFFSET: i32 = 1024;
    /// Nominal peak-to-peak swing of an axis; the rescale divisor.
    const FULL_SCALE: i32 = 2048;

    /// Constructs a control that reports on the given controller number, initially at zero.
    pub fn new(controller: u8) -> Self {
        Self {
            controller,
            last: 0,
        }
    }

    /// Emits the rescaled reading when the axis has moved since the previous cycle.
    ///
    /// The stored reading is latched only when a change is detected. Detection precedes
    /// encoding, so a reading whose rescale is dropped still counts as seen.
    pub fn observe(&mut self, raw: i16) -> Option<ControlChange> {
        if raw == self.last {
            return None;
        }
        self.last = raw;

        ControlChange::new(midi::CHANNEL, self.controller, Self::rescale(raw))
    }

    /// Maps a centered axis reading onto the 7-bit controller domain:
    /// `floor(abs((raw + 1024) / 2048 * 127))`, computed exactly in integer arithmetic. The
    /// magnitude is taken after the offset, so readings below −1024 fold back into the positive
    /// domain.
    fn rescale(raw: i16) -> i32 {
        (i32::from(raw) + Self::REST_OFFSET).abs() * 127 / Self::FULL_SCALE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod wiper {
        use super::*;

        #[test]
        fn rescale_spans_the_wiper_domain() {
            assert_eq!(0, WiperControl::rescale(0), "Expected left but got right");
            assert_eq!(
                63,
                WiperControl::rescale(512),
                "Expected left but got right"
            );
            assert_eq!(
                126,
                WiperControl::rescale(1023),
                "Expected left but got right"
            );
        }

        #[test]
        fn movement_emits() {
            let mut wiper = WiperControl::new(midi::WIPER);
            let message = wiper.observe(1023).expect("movement should emit");
            assert_eq!(
                [0xB0, 23, 126],
                message.to_bytes(),
                "Expected left but got right"
            );
        }

        #[test]
        fn holding_position_emits_nothing() {
            let mut wiper = WiperControl::new(midi::WIPER);
            wiper.observe(512).expect("movement should emit");
            assert_eq!(None, wiper.observe(512));
        }

        #[test]
        fn reading_is_refreshed_even_without_movement() {
            let mut wiper = WiperControl {
                controller: midi::WIPER,
                last: 512,
            };
            assert_eq!(None, wiper.observe(512));
            assert_eq!(512, wiper.last, "Expected the reading to be refreshed");
        }
    }

    mod axis {
        use super::*;

        #[test]
        fn rescale_spans_the_nominal_swing() {
            assert_eq!(
                0,
                AxisControl::rescale(-1024),
                "Expected left but got right"
            );
            assert_eq!(63, AxisControl::rescale(0), "Expected left but got right");
            assert_eq!(
                127,
                AxisControl::rescale(1024),
                "Expected left but got right"
            );
        }

        #[test]
        fn rescale_folds_readings_below_the_offset() {
            // −1100 lands 76 counts below the offset; the magnitude maps back up to 4
            assert_eq!(4, AxisControl::rescale(-1100), "Expected left but got right");
        }

        #[test]
        fn movement_emits() {
            let mut axis = AxisControl::new(midi::ACCEL_X);
            let message = axis.observe(1024).expect("movement should emit");
            assert_eq!(
                [0xB0, 24, 127],
                message.to_bytes(),
                "Expected left but got right"
            );
        }

        #[test]
        fn holding_still_emits_nothing() {
            let mut axis = AxisControl::new(midi::ACCEL_Y);
            axis.observe(100).expect("movement should emit");
            assert_eq!(None, axis.observe(100));
        }

        #[test]
        fn unchanged_reading_is_not_rewritten() {
            let mut axis = AxisControl {
                controller: midi::ACCEL_Y,
                last: 100,
            };
            assert_eq!(None, axis.observe(100));
            assert_eq!(100, axis.last, "Expected the reading to be untouched");
        }

        #[test]
        fn overshoot_is_latched_even_though_the_message_is_dropped() {
            let mut axis = AxisControl::new(midi::ACCEL_Z);

            // past the nominal swing: rescales to 190, outside the 7-bit domain
            assert_eq!(None, axis.observe(2047));
            assert_eq!(2047, axis.last, "Expected the reading to be latched");
        }
    }
}
