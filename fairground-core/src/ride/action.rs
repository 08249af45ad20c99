//! Ride actions and the show script

use crate::traits::Direction;

/// One step of the ride choreography
///
/// Actions execute strictly in order; each blocks until its motion or wait
/// completes. Timed moves rely on physical end-stops, counted moves on the
/// side sensor the main arm sweeps past once per revolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Rotate the main arm for a number of full revolutions
    RotateArm {
        dir: Direction,
        turns: u8,
        duty: u8,
    },
    /// Run the main arm for a fixed time (partial swings)
    NudgeArm { dir: Direction, duty: u8, ms: u16 },
    /// Run the chair motor for a fixed time
    SpinChair { dir: Direction, duty: u8, ms: u16 },
    /// Do nothing for a fixed time
    Dwell { ms: u16 },
    /// Return the main arm to its home position against the side sensor
    SeekHome,
    /// Fine-tune the chair against the base sensor, with LED feedback
    TrimChair,
}

use crate::traits::Direction::{Backward, Forward};

/// The Top Spin show, start to finish.
///
/// Timings and duties are tuned against the physical model; the script ends
/// with the arm homed and the chair trimmed level.
pub const SHOW: &[Action] = &[
    Action::RotateArm { dir: Forward, turns: 5, duty: 255 },
    Action::Dwell { ms: 2000 },
    Action::RotateArm { dir: Backward, turns: 5, duty: 255 },
    Action::Dwell { ms: 2000 },
    Action::NudgeArm { dir: Forward, duty: 255, ms: 1600 },
    Action::Dwell { ms: 4000 },
    Action::SpinChair { dir: Forward, duty: 255, ms: 5000 },
    Action::Dwell { ms: 4000 },
    Action::SpinChair { dir: Backward, duty: 255, ms: 5200 },
    Action::Dwell { ms: 3000 },
    Action::SpinChair { dir: Forward, duty: 100, ms: 6200 },
    Action::Dwell { ms: 4000 },
    Action::SpinChair { dir: Backward, duty: 75, ms: 5900 },
    Action::Dwell { ms: 6000 },
    Action::SpinChair { dir: Forward, duty: 75, ms: 5500 },
    Action::Dwell { ms: 4000 },
    Action::RotateArm { dir: Backward, turns: 5, duty: 255 },
    Action::NudgeArm { dir: Backward, duty: 255, ms: 500 },
    Action::Dwell { ms: 3000 },
    Action::SpinChair { dir: Backward, duty: 60, ms: 6200 },
    Action::Dwell { ms: 1000 },
    Action::SpinChair { dir: Forward, duty: 255, ms: 5200 },
    Action::Dwell { ms: 4000 },
    Action::RotateArm { dir: Backward, turns: 2, duty: 255 },
    Action::NudgeArm { dir: Backward, duty: 255, ms: 350 },
    Action::Dwell { ms: 1000 },
    Action::SpinChair { dir: Forward, duty: 75, ms: 6000 },
    Action::Dwell { ms: 500 },
    Action::SpinChair { dir: Forward, duty: 255, ms: 5200 },
    Action::Dwell { ms: 4000 },
    Action::SeekHome,
    Action::Dwell { ms: 500 },
    Action::TrimChair,
];
