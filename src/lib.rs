//! Bit-banged driver for the TDA1311A (and PT8211) 16 bit stereo DAC.
//!
//! The DAC gets three lines: bit clock, channel select (word select) and data.
//! Each channel keeps its last sample; `send_channel` / `send_both` clock them out MSB first.
//!
//! ```ignore
//! let mut dac = Tda1311a::from_pins(bck, ws, din);
//! dac.configure_pins()?;
//! dac.set_samples(left, right);
//! dac.send_both()?;
//! ```
#![deny(unsafe_code)]
#![deny(warnings)]
#![cfg_attr(not(test), no_std)]

pub mod channel;
pub mod dac;
pub mod lines;
pub mod samples;

pub use channel::Channel;
pub use dac::Tda1311a;
pub use lines::{ConstPins, Gpio, GpioLines, PinMap, Pins, RuntimePins, SerialLines};
pub use samples::Samples;

/// Minimal bit clock cycle time of the DAC.
pub const MIN_BIT_CYCLE_NS: u32 = 54;
/// Minimal bit clock high / low pulse width of the DAC.
pub const MIN_PULSE_WIDTH_NS: u32 = 15;
