//! Animation cues and fades

use super::color::{self, Rgb};
use super::rng::XorShift32;

/// Milliseconds between fade brightness steps.
pub const FADE_STEP_MS: u16 = 10;

/// Strobe half-period: white and black each held this long.
pub const STROBE_PERIOD_MS: u16 = 35;

/// One cue of the light show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Cue {
    /// Fade the whole strip from black up to `color`
    FadeIn { color: Rgb },
    /// Hold the current frame
    Hold { ms: u16 },
    /// Fade the whole strip from `color` down to black
    FadeOut { color: Rgb },
    /// Maybe interrupt the show with lightning or a strobe
    Crossover,
}

/// The Halloween loop. Runs forever, top to bottom.
pub const HALLOWEEN: &[Cue] = &[
    Cue::FadeIn { color: color::ORANGE },
    Cue::Hold { ms: 7000 },
    Cue::FadeOut { color: color::ORANGE },
    Cue::Crossover,
    Cue::FadeIn { color: color::PURPLE },
    Cue::Hold { ms: 7000 },
    Cue::FadeOut { color: color::PURPLE },
    Cue::FadeIn { color: color::RED },
    Cue::Hold { ms: 7000 },
    Cue::Crossover,
    Cue::FadeOut { color: color::RED },
    Cue::FadeIn { color: color::GREEN },
    Cue::Hold { ms: 7000 },
    Cue::FadeOut { color: color::GREEN },
    Cue::Crossover,
    Cue::FadeIn { color: color::BLUE },
    Cue::Hold { ms: 7000 },
    Cue::Crossover,
    Cue::FadeOut { color: color::BLUE },
    Cue::Crossover,
];

/// Brightness levels for a fade, one per `FADE_STEP_MS`.
#[derive(Debug, Clone)]
pub struct BrightnessRamp {
    next: i16,
    step: i16,
}

impl BrightnessRamp {
    /// Black to full brightness.
    pub fn rising() -> Self {
        Self { next: 0, step: 1 }
    }

    /// Full brightness to black.
    pub fn falling() -> Self {
        Self { next: 255, step: -1 }
    }
}

impl Iterator for BrightnessRamp {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if !(0..=255).contains(&self.next) {
            return None;
        }
        let level = self.next as u8;
        self.next += self.step;
        Some(level)
    }
}

/// What a crossover cue resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Crossover {
    /// A burst of random white flashes
    Lightning,
    /// Rapid white/black strobing for the given duration
    Strobe { duration_ms: u16 },
}

/// Resolve a crossover cue.
///
/// Most of the time a crossover does nothing; a high roll picks lightning,
/// a low roll picks a strobe of random length.
pub fn pick_crossover(rng: &mut XorShift32) -> Option<Crossover> {
    let roll = rng.range(0, 100);
    if roll > 85 {
        Some(Crossover::Lightning)
    } else if roll < 20 {
        Some(Crossover::Strobe {
            duration_ms: rng.range(750, 2000) as u16,
        })
    } else {
        None
    }
}
