//! Halloween LED animation engine
//!
//! Pure animation logic for the 50-pixel WS2812 strip: the color palette,
//! fade ramps, the cue script, and the randomized strobe/lightning
//! crossovers. The firmware interprets cues against real time and pushes
//! frames to the strip.

pub mod color;
pub mod effect;
pub mod lightning;
pub mod rng;

pub use color::Rgb;
pub use effect::{pick_crossover, BrightnessRamp, Crossover, Cue, HALLOWEEN};
pub use lightning::{lightning_plan, Flash};
pub use rng::XorShift32;

/// Pixels on the strip.
pub const STRIP_LEN: usize = 50;
