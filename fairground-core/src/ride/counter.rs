//! Main-arm revolution counting
//!
//! The arm sweeps past the side sensor once per revolution, pulling the
//! debounced line low while it covers the sensor. One revolution is a
//! complete low pulse: the accepted value falling, then rising again.

/// Counts completed main-arm revolutions from debounced sensor levels.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RevolutionCounter {
    remaining: u8,
    phase: Phase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum Phase {
    /// Waiting for the arm to reach the sensor (accepted value to fall)
    AwaitingFall,
    /// Waiting for the arm to clear the sensor (accepted value to rise)
    AwaitingRise,
}

impl RevolutionCounter {
    /// Count `turns` full revolutions.
    pub fn new(turns: u8) -> Self {
        Self {
            remaining: turns,
            phase: Phase::AwaitingFall,
        }
    }

    /// Feed the current accepted sensor level.
    ///
    /// Returns `true` once all requested revolutions have completed.
    pub fn feed(&mut self, level: bool) -> bool {
        match self.phase {
            Phase::AwaitingFall => {
                if !level {
                    self.phase = Phase::AwaitingRise;
                }
            }
            Phase::AwaitingRise => {
                if level {
                    self.remaining = self.remaining.saturating_sub(1);
                    self.phase = Phase::AwaitingFall;
                }
            }
        }
        self.remaining == 0
    }

    /// Revolutions still to go.
    pub fn remaining(&self) -> u8 {
        self.remaining
    }
}
