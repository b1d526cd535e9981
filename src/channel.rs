//! Left / right channel of the DAC

use embedded_hal::digital::v2::PinState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    Left,
    Right,
}

impl Channel {
    /// Level of the channel select (WS) line while this channel is loaded.
    pub fn select_level(self) -> PinState {
        match self {
            Channel::Left => PinState::High,
            Channel::Right => PinState::Low,
        }
    }
}

/// Only the least significant bit counts: even numbers are `Left`, odd ones `Right`.
///
/// Arduino TDA1311A code numbers `Left` as 1 (HIGH); port such calls with `Channel::Left`, not the number.
impl From<u8> for Channel {
    fn from(channel: u8) -> Self {
        if channel & 0x01 == 0 {
            Channel::Left
        } else {
            Channel::Right
        }
    }
}
