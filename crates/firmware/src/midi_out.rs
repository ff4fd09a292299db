//! The MIDI-dedicated serial output.

use defmt::info;
use embassy_stm32::{mode::Blocking, usart::UartTx};
use tiltwheel_lib::midi::ControlChange;

/// Standard MIDI serial rate.
pub const MIDI_BAUD: u32 = 31250;

/// Transmit-only MIDI port.
///
/// The control stream is fire-and-forget: writes block until the bytes are buffered and that is
/// the whole contract. No acknowledgement, no retry, no backpressure signalling; a receiver that
/// has gone away is indistinguishable from one that is listening.
pub struct MidiOut {
    tx: UartTx<'static, Blocking>,
}

impl MidiOut {
    /// Wraps an already-configured transmitter.
    pub fn new(tx: UartTx<'static, Blocking>) -> Self {
        Self { tx }
    }

    /// Pushes one message down the wire. A failed write is dropped; the control stream carries
    /// no recovery.
    pub fn send(&mut self, message: &ControlChange) {
        info!("Transmitting {}", message);
        let _ = self.tx.blocking_write(&message.to_bytes());
    }
}
