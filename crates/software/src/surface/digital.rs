//! Edge-triggered handling for the pushbutton-like inputs.

use crate::midi::{self, ControlChange};

/// Value transmitted when a pushbutton-like input becomes pressed.
const PRESSED: i32 = 1;
/// Value transmitted when a pushbutton-like input becomes released.
const RELEASED: i32 = 0;

/// A button-like input: either of the pushbuttons or the touch pad.
///
/// Emits only on transitions. Sustained state, held down or left alone, produces nothing no
/// matter how many cycles it lasts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PushControl {
    controller: u8,
    last: bool,
}

impl PushControl {
    /// Constructs a control that reports on the given controller number, initially released.
    pub fn new(controller: u8) -> Self {
        Self {
            controller,
            last: false,
        }
    }

    /// Compares the sampled state against the previous cycle's and emits 1 on press, 0 on release,
    /// nothing otherwise.
    ///
    /// The stored state is refreshed every cycle, transition or not, so the next comparison is
    /// always against the immediately-prior sample.
    pub fn observe(&mut self, pressed: bool) -> Option<ControlChange> {
        let message = match (self.last, pressed) {
            (false, true) => ControlChange::new(midi::CHANNEL, self.controller, PRESSED),
            (true, false) => ControlChange::new(midi::CHANNEL, self.controller, RELEASED),
            _ => None,
        };
        self.last = pressed;

        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_emits_one() {
        let mut button = PushControl::new(midi::BUTTON_A);
        let message = button.observe(true).expect("press should emit");
        assert_eq!(
            [0xB0, 20, 1],
            message.to_bytes(),
            "Expected left but got right"
        );
    }

    #[test]
    fn release_emits_zero() {
        let mut button = PushControl {
            controller: midi::BUTTON_B,
            last: true,
        };
        let message = button.observe(false).expect("release should emit");
        assert_eq!(
            [0xB0, 21, 0],
            message.to_bytes(),
            "Expected left but got right"
        );
    }

    #[test]
    fn sustained_state_emits_nothing() {
        let mut button = PushControl::new(midi::TOUCH_PAD);
        assert_eq!(None, button.observe(false));

        button.observe(true).expect("press should emit");
        assert_eq!(None, button.observe(true));
        assert_eq!(None, button.observe(true));
    }

    #[test]
    fn state_is_refreshed_every_cycle() {
        let mut button = PushControl::new(midi::BUTTON_A);

        button.observe(true).expect("press should emit");
        assert!(button.last, "Expected the press to be latched");

        assert_eq!(None, button.observe(true));
        assert!(button.last, "Expected the held state to be latched");

        button.observe(false).expect("release should emit");
        assert!(!button.last, "Expected the release to be latched");
    }
}
