//! Halloween WS2812 light show
//!
//! Drives a 50-pixel strip through the cue script: slow color fades with
//! randomized lightning and strobe interruptions.
//!
//! Wiring (RP2040):
//! - GPIO20: WS2812 data line (via PIO0)
//! - GPIO26: left floating, sampled once to seed the show randomness

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::Pull;
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio::{InterruptHandler, Pio};
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use {defmt_rtt as _, panic_probe as _};

use fairground_core::led::{XorShift32, STRIP_LEN};
use fairground_firmware::tasks::lights;

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => InterruptHandler<PIO0>;
});

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Light show starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Seed the show randomness from a floating ADC pin
    let mut adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let mut noise = Channel::new_pin(p.PIN_26, Pull::None);
    let seed = adc.blocking_read(&mut noise).unwrap_or(0) as u32;
    let mut rng = XorShift32::new(seed);
    debug!("Show randomness seeded: {}", seed);

    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);

    let program = PioWs2812Program::new(&mut common);
    let mut strip: PioWs2812<'_, PIO0, 0, STRIP_LEN> =
        PioWs2812::new(&mut common, sm0, p.DMA_CH0, p.PIN_20, &program);

    info!("WS2812 strip initialized ({} pixels)", STRIP_LEN);

    lights::light_show(&mut strip, &mut rng).await;
}
