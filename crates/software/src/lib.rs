//! This crate contains architecture-agnostic logic for the Tiltwheel, a handheld MIDI controller which
//! translates a small control surface (two pushbuttons, a capacitive touch pad, a potentiometer, and a
//! three-axis accelerometer) into [MIDI](https://midi.org/midi-1-0) Control Change messages carried on
//! a dedicated serial line.

#![deny(missing_docs)]
#![no_std]

pub mod midi;

pub mod scheduler;

pub mod surface;
