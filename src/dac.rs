//! TDA1311A 16 bit stereo DAC (BCK, WS, DIN) on three output lines
//! PT8211 equivalent
//!
//! Data is sent MSB first, the DAC latches DIN on the rising edge of BCK.
//! WS selects the channel being loaded and is held for the whole word.

use embedded_hal::digital::v2::{OutputPin, PinState};

use crate::channel::Channel;
use crate::lines::{Gpio, GpioLines, PinMap, Pins, RuntimePins, SerialLines};
use crate::samples::Samples;

pub struct Tda1311a<L> {
    lines: L,
    samples: Samples,
}

impl<L: SerialLines> Tda1311a<L> {
    pub fn new(lines: L) -> Self {
        let mut dac = Tda1311a {
            lines,
            samples: Samples::default(),
        };
        dac.set_samples(0, 0);
        dac
    }

    /// Must be called once before the first send.
    pub fn configure_pins(&mut self) -> Result<(), L::Error> {
        self.lines.configure()?;
        #[cfg(feature = "defmt")]
        defmt::debug!("tda1311a: lines configured as outputs");
        Ok(())
    }

    pub fn set_low_byte<C: Into<Channel>>(&mut self, channel: C, byte: u8) {
        self.samples.set_low_byte(channel.into(), byte);
    }

    pub fn set_high_byte<C: Into<Channel>>(&mut self, channel: C, byte: u8) {
        self.samples.set_high_byte(channel.into(), byte);
    }

    pub fn set_sample<C: Into<Channel>>(&mut self, channel: C, value: u16) {
        self.samples.set(channel.into(), value);
    }

    pub fn set_samples(&mut self, left: u16, right: u16) {
        self.samples.set_both(left, right);
    }

    pub fn sample<C: Into<Channel>>(&self, channel: C) -> u16 {
        self.samples.get(channel.into())
    }

    pub fn samples(&self) -> Samples {
        self.samples
    }

    /// Clocks the stored sample of `channel` into the DAC.
    ///
    /// Nothing but pin writes happen between the clock edges, keep it that way:
    /// the DAC needs a bit clock cycle of at least [`MIN_BIT_CYCLE_NS`](crate::MIN_BIT_CYCLE_NS)
    /// and pulses of at least [`MIN_PULSE_WIDTH_NS`](crate::MIN_PULSE_WIDTH_NS).
    /// BCK is left high after the last bit.
    pub fn send_channel<C: Into<Channel>>(&mut self, channel: C) -> Result<(), L::Error> {
        let channel = channel.into();
        let word = self.samples.get(channel);

        self.lines.set_select(channel.select_level())?;

        if cfg!(feature = "byte-loop") {
            shift_bytes(&mut self.lines, word)
        } else {
            shift_word(&mut self.lines, word)
        }
    }

    /// Left then right, back to back.
    pub fn send_both(&mut self) -> Result<(), L::Error> {
        self.send_channel(Channel::Left)?;
        self.send_channel(Channel::Right)
    }

    /// `send_both` with interrupts masked, so no handler can stretch a clock pulse.
    #[cfg(feature = "cortex-m")]
    pub fn send_both_uninterrupted(&mut self) -> Result<(), L::Error> {
        cortex_m::interrupt::free(|_| self.send_both())
    }

    pub fn release(self) -> L {
        self.lines
    }
}

impl<CLKPIN, CHANPIN, DATAPIN, ERROR> Tda1311a<Pins<CLKPIN, CHANPIN, DATAPIN>>
where
    CLKPIN: OutputPin<Error = ERROR>,
    CHANPIN: OutputPin<Error = ERROR>,
    DATAPIN: OutputPin<Error = ERROR>,
{
    pub fn from_pins(clk: CLKPIN, chan: CHANPIN, data: DATAPIN) -> Self {
        Self::new(Pins::new(clk, chan, data))
    }
}

impl<G: Gpio> Tda1311a<GpioLines<G, RuntimePins>> {
    pub fn with_pin_numbers(gpio: G, clock: u8, chan: u8, data: u8) -> Self {
        Self::new(GpioLines::new(gpio, RuntimePins { clock, chan, data }))
    }
}

impl<G: Gpio, M: PinMap> Tda1311a<GpioLines<G, M>> {
    /// Use with [`ConstPins`](crate::lines::ConstPins) to have the pin numbers fixed at compile time.
    pub fn with_pin_map(gpio: G, pins: M) -> Self {
        Self::new(GpioLines::new(gpio, pins))
    }
}

#[inline(always)]
fn shift_word<L: SerialLines>(lines: &mut L, word: u16) -> Result<(), L::Error> {
    let mut mask: u16 = 0x8000;

    while mask != 0 {
        lines.set_clock(PinState::Low)?;
        lines.set_data(PinState::from(word & mask != 0))?;
        //data is clocked in on the rising edge
        lines.set_clock(PinState::High)?;
        mask >>= 1;
    }

    Ok(())
}

#[inline(always)]
fn shift_bytes<L: SerialLines>(lines: &mut L, word: u16) -> Result<(), L::Error> {
    let [high, low] = word.to_be_bytes();
    shift_byte(lines, high)?;
    shift_byte(lines, low)
}

#[inline(always)]
fn shift_byte<L: SerialLines>(lines: &mut L, byte: u8) -> Result<(), L::Error> {
    let mut mask: u8 = 0x80;

    while mask != 0 {
        lines.set_clock(PinState::Low)?;
        lines.set_data(PinState::from(byte & mask != 0))?;
        //data is clocked in on the rising edge
        lines.set_clock(PinState::High)?;
        mask >>= 1;
    }

    Ok(())
}
