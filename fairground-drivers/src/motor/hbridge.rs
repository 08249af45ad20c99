//! H-bridge DC motor driver
//!
//! Models a two-leg H-bridge (L298N and friends) with an 8-bit PWM duty.
//! Exactly one leg is high while driving; both legs low is a coast stop.
//!
//! # Usage
//!
//! The driver holds the commanded state; the firmware reads the computed
//! pin states and applies them to GPIO and PWM peripherals.
//!
//! ```ignore
//! let mut motor = HBridge::new();
//! motor.enable(true);
//! motor.set_direction(Direction::Forward);
//! motor.drive(255)?;
//!
//! motor.apply_direction(&mut in_a, &mut in_b)?;
//! pwm.set_duty(motor.duty());
//! ```

use embedded_hal::digital::OutputPin;

use fairground_core::traits::{Direction, MotorDriver, MotorError};

/// H-bridge driver state
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HBridge {
    direction: Direction,
    /// Commanded PWM duty; zero means stopped
    duty: u8,
    enabled: bool,
}

impl HBridge {
    /// Create a new driver, disabled and stopped.
    pub const fn new() -> Self {
        Self {
            direction: Direction::Forward,
            duty: 0,
            enabled: false,
        }
    }

    /// The commanded PWM duty (0 when stopped).
    pub fn duty(&self) -> u8 {
        self.duty
    }

    /// Bridge leg and PWM states for the current command:
    /// `(in_a, in_b, duty)`.
    pub fn pin_states(&self) -> (bool, bool, u8) {
        if self.duty == 0 {
            return (false, false, 0);
        }
        match self.direction {
            Direction::Forward => (true, false, self.duty),
            Direction::Backward => (false, true, self.duty),
        }
    }

    /// Write the bridge legs through `embedded-hal` output pins.
    pub fn apply_direction<E, A, B>(&self, in_a: &mut A, in_b: &mut B) -> Result<(), E>
    where
        A: OutputPin<Error = E>,
        B: OutputPin<Error = E>,
    {
        let (a, b, _) = self.pin_states();
        if a {
            in_a.set_high()?;
        } else {
            in_a.set_low()?;
        }
        if b {
            in_b.set_high()?;
        } else {
            in_b.set_low()?;
        }
        Ok(())
    }
}

impl Default for HBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl MotorDriver for HBridge {
    fn set_direction(&mut self, dir: Direction) {
        // Only allow direction change when stopped
        if self.duty == 0 {
            self.direction = dir;
        }
    }

    fn direction(&self) -> Direction {
        self.direction
    }

    fn enable(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.duty = 0;
        }
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn drive(&mut self, duty: u8) -> Result<(), MotorError> {
        if !self.enabled {
            return Err(MotorError::Disabled);
        }
        if duty == 0 {
            return Err(MotorError::InvalidDuty);
        }
        self.duty = duty;
        Ok(())
    }

    fn stop(&mut self) {
        self.duty = 0;
    }

    fn is_running(&self) -> bool {
        self.duty > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::{ErrorType, OutputPin};

    /// Pin double recording the last written level.
    #[derive(Default)]
    struct MockPin {
        high: bool,
    }

    impl ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.high = true;
            Ok(())
        }
    }

    #[test]
    fn test_initial_state() {
        let motor = HBridge::new();
        assert!(!motor.is_enabled());
        assert!(motor.is_stopped());
        assert_eq!(motor.pin_states(), (false, false, 0));
    }

    #[test]
    fn test_drive_requires_enable() {
        let mut motor = HBridge::new();
        assert_eq!(motor.drive(255), Err(MotorError::Disabled));
    }

    #[test]
    fn test_drive_rejects_zero_duty() {
        let mut motor = HBridge::new();
        motor.enable(true);
        assert_eq!(motor.drive(0), Err(MotorError::InvalidDuty));
    }

    #[test]
    fn test_forward_pin_states() {
        let mut motor = HBridge::new();
        motor.enable(true);
        motor.set_direction(Direction::Forward);
        motor.drive(200).unwrap();
        assert_eq!(motor.pin_states(), (true, false, 200));
    }

    #[test]
    fn test_backward_pin_states() {
        let mut motor = HBridge::new();
        motor.enable(true);
        motor.set_direction(Direction::Backward);
        motor.drive(75).unwrap();
        assert_eq!(motor.pin_states(), (false, true, 75));
    }

    #[test]
    fn test_stop_coasts_both_legs_low() {
        let mut motor = HBridge::new();
        motor.enable(true);
        motor.drive(255).unwrap();
        motor.stop();
        assert!(motor.is_stopped());
        assert_eq!(motor.pin_states(), (false, false, 0));
    }

    #[test]
    fn test_disable_stops_motor() {
        let mut motor = HBridge::new();
        motor.enable(true);
        motor.drive(255).unwrap();
        motor.enable(false);
        assert!(motor.is_stopped());
        assert_eq!(motor.drive(100), Err(MotorError::Disabled));
    }

    #[test]
    fn test_direction_change_only_when_stopped() {
        let mut motor = HBridge::new();
        motor.enable(true);
        motor.drive(255).unwrap();

        // Ignored while running
        motor.set_direction(Direction::Backward);
        assert_eq!(motor.direction(), Direction::Forward);

        motor.stop();
        motor.set_direction(Direction::Backward);
        assert_eq!(motor.direction(), Direction::Backward);
    }

    #[test]
    fn test_apply_direction_writes_pins() {
        let mut motor = HBridge::new();
        let mut in_a = MockPin::default();
        let mut in_b = MockPin::default();

        motor.enable(true);
        motor.drive(255).unwrap();
        motor.apply_direction(&mut in_a, &mut in_b).unwrap();
        assert!(in_a.high);
        assert!(!in_b.high);

        motor.stop();
        motor.set_direction(Direction::Backward);
        motor.drive(80).unwrap();
        motor.apply_direction(&mut in_a, &mut in_b).unwrap();
        assert!(!in_a.high);
        assert!(in_b.high);

        motor.stop();
        motor.apply_direction(&mut in_a, &mut in_b).unwrap();
        assert!(!in_a.high);
        assert!(!in_b.high);
    }
}
