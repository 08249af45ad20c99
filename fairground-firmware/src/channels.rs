//! Shared state between tasks
//!
//! The sampler is the only writer of the sensor shares; the ride task reads
//! them. The fields are primitive-width atomics with relaxed ordering -
//! single writer, single core, no ordering between the two fields matters.
//! `portable-atomic` supplies the swap, which thumbv6 lacks natively.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use portable_atomic::{AtomicBool, Ordering};

/// Debounced state of one switch input, published by the sampler.
pub struct SensorShare {
    /// Accepted (debounced) level
    level: AtomicBool,
    /// Latched on accepted high-to-low transitions until a consumer takes it
    fell: AtomicBool,
}

impl SensorShare {
    pub const fn new() -> Self {
        Self {
            level: AtomicBool::new(false),
            fell: AtomicBool::new(false),
        }
    }

    /// Publish one sampler tick. A `fell` of `false` leaves any latched
    /// transition in place.
    pub fn publish(&self, level: bool, fell: bool) {
        self.level.store(level, Ordering::Relaxed);
        if fell {
            self.fell.store(true, Ordering::Relaxed);
        }
    }

    /// The accepted level.
    pub fn level(&self) -> bool {
        self.level.load(Ordering::Relaxed)
    }

    /// Take and clear the latched falling transition.
    pub fn take_fell(&self) -> bool {
        self.fell.swap(false, Ordering::Relaxed)
    }
}

/// Chair base sensor (levelling switch)
pub static BASE_SENSOR: SensorShare = SensorShare::new();

/// Main-arm side sensor (once-per-revolution switch)
pub static SIDE_SENSOR: SensorShare = SensorShare::new();

/// Signalled by the ride task when the show script has finished
pub static SHOW_DONE: Signal<CriticalSectionRawMutex, ()> = Signal::new();
