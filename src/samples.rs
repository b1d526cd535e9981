//! Last requested sample of both channels

use crate::channel::Channel;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Samples {
    left: u16,
    right: u16,
}

impl Samples {
    pub const fn new(left: u16, right: u16) -> Self {
        Samples { left, right }
    }

    pub fn get(&self, channel: Channel) -> u16 {
        match channel {
            Channel::Left => self.left,
            Channel::Right => self.right,
        }
    }

    fn slot(&mut self, channel: Channel) -> &mut u16 {
        match channel {
            Channel::Left => &mut self.left,
            Channel::Right => &mut self.right,
        }
    }

    pub fn set(&mut self, channel: Channel, value: u16) {
        *self.slot(channel) = value;
    }

    /// Replaces bits 0..8, bits 8..16 are kept.
    pub fn set_low_byte(&mut self, channel: Channel, byte: u8) {
        let slot = self.slot(channel);
        *slot = (*slot & 0xFF00) | u16::from(byte);
    }

    /// Replaces bits 8..16, bits 0..8 are kept.
    pub fn set_high_byte(&mut self, channel: Channel, byte: u8) {
        let slot = self.slot(channel);
        *slot = (*slot & 0x00FF) | (u16::from(byte) << 8);
    }

    pub fn set_both(&mut self, left: u16, right: u16) {
        self.left = left;
        self.right = right;
    }
}
