//! Top Spin ride choreography
//!
//! The ride is a fixed, hand-authored sequence of motor actions. This module
//! holds the action vocabulary, the show script itself, and the revolution
//! counter that turns debounced side-sensor readings into completed main-arm
//! turns.

pub mod action;
pub mod counter;

pub use action::{Action, SHOW};
pub use counter::RevolutionCounter;
