//! Embassy async tasks
//!
//! Each task runs independently and communicates via the shares in
//! [`crate::channels`].

pub mod lights;
pub mod ride;
pub mod sampler;

pub use ride::{ride_task, MotorPins};
pub use sampler::sampler_task;
