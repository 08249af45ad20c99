//! Switch input sampler task
//!
//! Samples both switch inputs on a fixed 1 ms tick, debounces them, mirrors
//! the accepted values onto the status pins and publishes them to the
//! sensor shares. Runs for the life of the firmware, independent of
//! whatever the ride task is doing.

use defmt::*;
use embassy_rp::gpio::{Input, Level, Output};
use embassy_time::{Duration, Ticker};

use fairground_core::input::DebouncedLine;

use crate::channels::{BASE_SENSOR, SIDE_SENSOR};

/// Sampling period in milliseconds
pub const SAMPLE_PERIOD_MS: u64 = 1;

/// Sampler task - debounce both switches and republish their state
#[embassy_executor::task]
pub async fn sampler_task(
    base_in: Input<'static>,
    side_in: Input<'static>,
    mut base_status: Output<'static>,
    mut side_status: Output<'static>,
) {
    info!("Sampler task started");

    let mut base = DebouncedLine::default();
    let mut side = DebouncedLine::default();

    let mut ticker = Ticker::every(Duration::from_millis(SAMPLE_PERIOD_MS));

    loop {
        ticker.next().await;

        let base_level = base.sample(base_in.is_high());
        let side_level = side.sample(side_in.is_high());

        base_status.set_level(Level::from(base_level));
        side_status.set_level(Level::from(side_level));

        BASE_SENSOR.publish(base_level, base.take_fell());
        SIDE_SENSOR.publish(side_level, side.take_fell());
    }
}
