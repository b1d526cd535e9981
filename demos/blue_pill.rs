//! TDA1311A / PT8211 on a blue pill, playing a triangle on the left
//! and its inverse on the right channel.
//!
//! ```text
//! BP    <-> TDA1311A
//! PB10  <-> BCK (bit clock)
//! PB7   <-> WS  (channel select)
//! PB6   <-> DATA
//! ```
//!
//! Build in release mode, the debug build is too slow for a usable sample rate:
//! `cargo build --release --example blue_pill --features blue-pill --target thumbv7m-none-eabi`
#![deny(unsafe_code)]
#![no_main]
#![no_std]

use cortex_m_rt::entry;
use nb::block;
use panic_halt as _;
use stm32f1xx_hal::{pac, prelude::*, timer::Timer};
use tda1311a::{Channel, Tda1311a};

const SAMPLE_RATE_HZ: u32 = 32_000;
const PHASE_STEP: u16 = 0x0100; // ~125Hz at 32kHz

#[entry]
fn main() -> ! {
    let cp = cortex_m::Peripherals::take().unwrap();
    let dp = pac::Peripherals::take().unwrap();

    let mut flash = dp.FLASH.constrain();
    let mut rcc = dp.RCC.constrain();

    //max clocks, the bit loop needs them
    let clocks = rcc
        .cfgr
        .use_hse(8.mhz())
        .sysclk(72.mhz())
        .pclk1(36.mhz())
        .freeze(&mut flash.acr);

    let mut gpiob = dp.GPIOB.split(&mut rcc.apb2);

    let mut dac = Tda1311a::from_pins(
        gpiob.pb10.into_push_pull_output(&mut gpiob.crh),
        gpiob.pb7.into_push_pull_output(&mut gpiob.crl),
        gpiob.pb6.into_push_pull_output(&mut gpiob.crl),
    );
    dac.configure_pins().unwrap();

    let mut timer = Timer::syst(cp.SYST, &clocks).start_count_down(SAMPLE_RATE_HZ.hz());

    let mut phase: u16 = 0;
    loop {
        let level = if phase < 0x8000 { phase << 1 } else { !phase << 1 };
        dac.set_sample(Channel::Left, level);
        dac.set_sample(Channel::Right, !level);
        dac.send_both_uninterrupted().unwrap();

        phase = phase.wrapping_add(PHASE_STEP);
        block!(timer.wait()).ok();
    }
}
