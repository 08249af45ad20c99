//! Brushed DC motor driver trait
//!
//! Both ride motors are plain brushed motors behind an H-bridge: a direction
//! pair plus an 8-bit PWM duty. There is no feedback and no ramping; the
//! ride script commands instant speed changes and relies on timed moves and
//! physical end-stops.

/// Motor rotation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Forward rotation (IN-A high, IN-B low)
    Forward,
    /// Backward rotation (IN-A low, IN-B high)
    Backward,
}

impl Direction {
    /// Get the opposite direction
    pub fn opposite(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// Errors that can occur with motor operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorError {
    /// Motor driver is disabled
    Disabled,
    /// A duty of zero was commanded; use `stop` instead
    InvalidDuty,
}

/// Trait for brushed DC motor drivers
pub trait MotorDriver {
    /// Set the rotation direction
    ///
    /// Implementations may ignore this while the motor is running; both
    /// ride motors are always stopped before reversing.
    fn set_direction(&mut self, dir: Direction);

    /// Get the current direction
    fn direction(&self) -> Direction;

    /// Enable or disable the driver
    ///
    /// When disabled, the motor coasts to a stop.
    fn enable(&mut self, enabled: bool);

    /// Check if the driver is enabled
    fn is_enabled(&self) -> bool;

    /// Run at the given PWM duty (1-255)
    fn drive(&mut self, duty: u8) -> Result<(), MotorError>;

    /// Stop the motor (both bridge legs low, duty 0)
    fn stop(&mut self);

    /// Check if the motor is currently being driven
    fn is_running(&self) -> bool;

    /// Check if the motor is stopped
    fn is_stopped(&self) -> bool {
        !self.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_direction() {
        assert_eq!(Direction::Forward.opposite(), Direction::Backward);
        assert_eq!(Direction::Backward.opposite(), Direction::Forward);
        assert_eq!(Direction::Forward.opposite().opposite(), Direction::Forward);
    }
}
