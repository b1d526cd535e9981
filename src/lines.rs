//! The three output lines of the DAC: bit clock (BCK), channel select (WS) and data (DIN)
//!
//! Two flavours are provided:
//! - [`Pins`]: three `embedded_hal` output pins, already configured by the HAL type-state,
//! - [`GpioLines`]: a port addressed by pin numbers, the numbers given either as
//!   const generics ([`ConstPins`]) or at runtime ([`RuntimePins`]).

use embedded_hal::digital::v2::{OutputPin, PinState};

pub trait SerialLines {
    type Error;

    /// Puts all three lines into output mode. Calling it again must not change anything.
    fn configure(&mut self) -> Result<(), Self::Error>;
    fn set_select(&mut self, state: PinState) -> Result<(), Self::Error>;
    fn set_clock(&mut self, state: PinState) -> Result<(), Self::Error>;
    fn set_data(&mut self, state: PinState) -> Result<(), Self::Error>;
}

pub struct Pins<CLKPIN, CHANPIN, DATAPIN> {
    clk: CLKPIN,
    chan: CHANPIN,
    data: DATAPIN,
}

impl<CLKPIN, CHANPIN, DATAPIN> Pins<CLKPIN, CHANPIN, DATAPIN> {
    pub fn new(clk: CLKPIN, chan: CHANPIN, data: DATAPIN) -> Self {
        Pins { clk, chan, data }
    }

    pub fn release(self) -> (CLKPIN, CHANPIN, DATAPIN) {
        (self.clk, self.chan, self.data)
    }
}

impl<CLKPIN, CHANPIN, DATAPIN, ERROR> SerialLines for Pins<CLKPIN, CHANPIN, DATAPIN>
where
    CLKPIN: OutputPin<Error = ERROR>,
    CHANPIN: OutputPin<Error = ERROR>,
    DATAPIN: OutputPin<Error = ERROR>,
{
    type Error = ERROR;

    //the HAL hands out the pins already in push-pull output mode
    fn configure(&mut self) -> Result<(), ERROR> {
        Ok(())
    }

    #[inline(always)]
    fn set_select(&mut self, state: PinState) -> Result<(), ERROR> {
        self.chan.set_state(state)
    }

    #[inline(always)]
    fn set_clock(&mut self, state: PinState) -> Result<(), ERROR> {
        self.clk.set_state(state)
    }

    #[inline(always)]
    fn set_data(&mut self, state: PinState) -> Result<(), ERROR> {
        self.data.set_state(state)
    }
}

/// A GPIO port whose pins are addressed by number.
pub trait Gpio {
    type Error;

    fn set_output(&mut self, pin: u8) -> Result<(), Self::Error>;
    fn write(&mut self, pin: u8, state: PinState) -> Result<(), Self::Error>;
}

impl<G: Gpio> Gpio for &mut G {
    type Error = G::Error;

    #[inline(always)]
    fn set_output(&mut self, pin: u8) -> Result<(), Self::Error> {
        (**self).set_output(pin)
    }

    #[inline(always)]
    fn write(&mut self, pin: u8, state: PinState) -> Result<(), Self::Error> {
        (**self).write(pin, state)
    }
}

/// Which pin number carries which line.
pub trait PinMap {
    fn clock(&self) -> u8;
    fn chan(&self) -> u8;
    fn data(&self) -> u8;
}

/// Pin numbers fixed at compile time, so the port writes see constants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConstPins<const CLOCK: u8, const CHAN: u8, const DATA: u8>;

impl<const CLOCK: u8, const CHAN: u8, const DATA: u8> PinMap for ConstPins<CLOCK, CHAN, DATA> {
    #[inline(always)]
    fn clock(&self) -> u8 {
        CLOCK
    }

    #[inline(always)]
    fn chan(&self) -> u8 {
        CHAN
    }

    #[inline(always)]
    fn data(&self) -> u8 {
        DATA
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuntimePins {
    pub clock: u8,
    pub chan: u8,
    pub data: u8,
}

impl PinMap for RuntimePins {
    #[inline(always)]
    fn clock(&self) -> u8 {
        self.clock
    }

    #[inline(always)]
    fn chan(&self) -> u8 {
        self.chan
    }

    #[inline(always)]
    fn data(&self) -> u8 {
        self.data
    }
}

pub struct GpioLines<G, M> {
    gpio: G,
    pins: M,
}

impl<G, M> GpioLines<G, M> {
    pub fn new(gpio: G, pins: M) -> Self {
        GpioLines { gpio, pins }
    }

    pub fn release(self) -> (G, M) {
        (self.gpio, self.pins)
    }
}

impl<G: Gpio, M: PinMap> SerialLines for GpioLines<G, M> {
    type Error = G::Error;

    fn configure(&mut self) -> Result<(), G::Error> {
        self.gpio.set_output(self.pins.clock())?;
        self.gpio.set_output(self.pins.chan())?;
        self.gpio.set_output(self.pins.data())
    }

    #[inline(always)]
    fn set_select(&mut self, state: PinState) -> Result<(), G::Error> {
        self.gpio.write(self.pins.chan(), state)
    }

    #[inline(always)]
    fn set_clock(&mut self, state: PinState) -> Result<(), G::Error> {
        self.gpio.write(self.pins.clock(), state)
    }

    #[inline(always)]
    fn set_data(&mut self, state: PinState) -> Result<(), G::Error> {
        self.gpio.write(self.pins.data(), state)
    }
}
