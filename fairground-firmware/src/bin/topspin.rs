//! Top Spin ride controller
//!
//! Sequences the two H-bridge DC motors of the Faller Top Spin model
//! through the show script, against the debounced base and side switches.
//!
//! Wiring (RP2040):
//! - GPIO2/3: main-arm bridge IN-A/IN-B, GPIO4: main-arm PWM
//! - GPIO6/7: chair bridge IN-A/IN-B, GPIO8: chair PWM
//! - GPIO14/15: base/side switch inputs (pulled up, switch closes to ground)
//! - GPIO16/17: base/side status outputs mirroring the accepted values
//! - GPIO25: onboard status LED for the trim feedback blinks

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::pwm::Pwm;
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use fairground_firmware::channels::SHOW_DONE;
use fairground_firmware::tasks::{self, MotorPins};

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Top Spin controller starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Switch inputs are pulled up; the arm and chair pull them low
    let base_in = Input::new(p.PIN_14, Pull::Up);
    let side_in = Input::new(p.PIN_15, Pull::Up);
    let base_status = Output::new(p.PIN_16, Level::Low);
    let side_status = Output::new(p.PIN_17, Level::Low);
    let status_led = Output::new(p.PIN_25, Level::Low);

    let arm = MotorPins {
        in_a: Output::new(p.PIN_2, Level::Low),
        in_b: Output::new(p.PIN_3, Level::Low),
        pwm: Pwm::new_output_a(p.PWM_SLICE2, p.PIN_4, tasks::ride::pwm_config()),
    };
    let chair = MotorPins {
        in_a: Output::new(p.PIN_6, Level::Low),
        in_b: Output::new(p.PIN_7, Level::Low),
        pwm: Pwm::new_output_a(p.PWM_SLICE4, p.PIN_8, tasks::ride::pwm_config()),
    };

    spawner
        .spawn(tasks::sampler_task(base_in, side_in, base_status, side_status))
        .unwrap();
    spawner.spawn(tasks::ride_task(arm, chair, status_led)).unwrap();

    info!("All tasks spawned, ride running");

    SHOW_DONE.wait().await;
    info!("Ride show finished");

    // The sampler keeps mirroring the switches; nothing else to do
    loop {
        Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
