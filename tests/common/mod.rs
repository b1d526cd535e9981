//! Recording GPIO port for host tests.

#![allow(dead_code)]

use std::collections::BTreeSet;
use std::convert::Infallible;

use embedded_hal::digital::v2::PinState;
use tda1311a::Gpio;

pub const CLOCK: u8 = 10;
pub const CHAN: u8 = 7;
pub const DATA: u8 = 6;

#[derive(Debug, Default)]
pub struct Port {
    pub outputs: BTreeSet<u8>,
    pub writes: Vec<(u8, PinState)>,
}

impl Gpio for Port {
    type Error = Infallible;

    fn set_output(&mut self, pin: u8) -> Result<(), Infallible> {
        self.outputs.insert(pin);
        Ok(())
    }

    fn write(&mut self, pin: u8, state: PinState) -> Result<(), Infallible> {
        self.writes.push((pin, state));
        Ok(())
    }
}

impl Port {
    /// Levels written to the data pin, 1 for high.
    pub fn data_bits(&self) -> Vec<u8> {
        self.writes
            .iter()
            .filter(|(pin, _)| *pin == DATA)
            .map(|(_, state)| (*state == PinState::High) as u8)
            .collect()
    }

    pub fn writes_to(&self, pin: u8) -> Vec<PinState> {
        self.writes
            .iter()
            .filter(|(p, _)| *p == pin)
            .map(|(_, state)| *state)
            .collect()
    }
}

/// The bits of `word`, MSB first.
pub fn msb_first(word: u16) -> Vec<u8> {
    (0..16).rev().map(|bit| ((word >> bit) & 1) as u8).collect()
}
