//! Halloween light show
//!
//! Interprets the cue script against real time and pushes frames to the
//! WS2812 strip. The whole strip always shows a single color; fades scale
//! it through the brightness ramp, crossovers occasionally interrupt with
//! lightning or a strobe.

use defmt::*;
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio_programs::ws2812::PioWs2812;
use embassy_time::{Duration, Instant, Timer};
use smart_leds::RGB8;

use fairground_core::led::color::{BLACK, WHITE};
use fairground_core::led::{
    lightning_plan, pick_crossover, BrightnessRamp, Crossover, Cue, Rgb, XorShift32, HALLOWEEN,
    STRIP_LEN,
};
use fairground_core::led::effect::{FADE_STEP_MS, STROBE_PERIOD_MS};

/// Run the cue script. Loops forever; never returns.
pub async fn light_show(strip: &mut PioWs2812<'_, PIO0, 0, STRIP_LEN>, rng: &mut XorShift32) {
    let mut frame = [RGB8::default(); STRIP_LEN];

    loop {
        for cue in HALLOWEEN {
            trace!("Cue: {:?}", cue);
            match *cue {
                Cue::FadeIn { color } => {
                    fade(strip, &mut frame, color, BrightnessRamp::rising()).await;
                }
                Cue::FadeOut { color } => {
                    fade(strip, &mut frame, color, BrightnessRamp::falling()).await;
                }
                Cue::Hold { ms } => {
                    Timer::after_millis(ms as u64).await;
                }
                Cue::Crossover => {
                    crossover(strip, &mut frame, rng).await;
                }
            }
        }
    }
}

/// Paint the whole strip one color and latch it out.
async fn paint(
    strip: &mut PioWs2812<'_, PIO0, 0, STRIP_LEN>,
    frame: &mut [RGB8; STRIP_LEN],
    color: Rgb,
) {
    frame.fill(RGB8::new(color.r, color.g, color.b));
    strip.write(frame).await;
}

/// Fade the strip through a brightness ramp, one step per `FADE_STEP_MS`.
async fn fade(
    strip: &mut PioWs2812<'_, PIO0, 0, STRIP_LEN>,
    frame: &mut [RGB8; STRIP_LEN],
    color: Rgb,
    ramp: BrightnessRamp,
) {
    for level in ramp {
        paint(strip, frame, color.scaled(level)).await;
        Timer::after_millis(FADE_STEP_MS as u64).await;
    }
}

/// Resolve a crossover cue and play whatever it picked.
async fn crossover(
    strip: &mut PioWs2812<'_, PIO0, 0, STRIP_LEN>,
    frame: &mut [RGB8; STRIP_LEN],
    rng: &mut XorShift32,
) {
    match pick_crossover(rng) {
        Some(Crossover::Lightning) => {
            debug!("Crossover: lightning");
            for flash in lightning_plan(rng) {
                paint(strip, frame, WHITE).await;
                Timer::after_millis(flash.on_ms as u64).await;
                paint(strip, frame, BLACK).await;
                Timer::after_millis(flash.off_ms as u64).await;
            }
        }
        Some(Crossover::Strobe { duration_ms }) => {
            debug!("Crossover: strobe for {} ms", duration_ms);
            let end = Instant::now() + Duration::from_millis(duration_ms as u64);
            while Instant::now() < end {
                paint(strip, frame, WHITE).await;
                Timer::after_millis(STROBE_PERIOD_MS as u64).await;
                paint(strip, frame, BLACK).await;
                Timer::after_millis(STROBE_PERIOD_MS as u64).await;
            }
        }
        None => {}
    }
}
