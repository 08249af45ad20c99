//! Debounce filter for mechanical switch inputs
//!
//! Each monitored line owns one [`DebouncedLine`]. The sampler feeds it one
//! raw reading per tick; a reading must disagree with the accepted value for
//! a full threshold of consecutive ticks before the accepted value flips.
//!
//! Falling transitions of the accepted value (switch release on a pull-up
//! line) are latched in a flag that only the consumer clears, so a release
//! is never lost between polls.

/// Ticks of sustained disagreement before a reading is accepted.
pub const DEFAULT_DEBOUNCE_TICKS: u8 = 5;

/// Debounce state for a single digital input line.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebouncedLine {
    /// The filtered, trusted reading.
    accepted: bool,
    /// Consecutive-disagreement counter, saturating at `threshold`.
    counter: u8,
    /// Latched on accepted high-to-low transitions; cleared by `take_fell`.
    fell: bool,
    threshold: u8,
}

impl DebouncedLine {
    /// Create a line with the given threshold, starting accepted-low.
    pub const fn new(threshold: u8) -> Self {
        Self {
            accepted: false,
            counter: 0,
            fell: false,
            threshold,
        }
    }

    /// Feed one raw reading. Call once per sampler tick.
    ///
    /// Returns the accepted value after this tick.
    pub fn sample(&mut self, raw: bool) -> bool {
        if raw == self.accepted && self.counter > 0 {
            self.counter -= 1;
        }
        if raw != self.accepted {
            self.counter += 1;
        }

        if self.counter >= self.threshold {
            if self.accepted && !raw {
                self.fell = true;
            }
            self.accepted = raw;
            self.counter = 0;
        }

        self.accepted
    }

    /// The current accepted value.
    pub fn accepted(&self) -> bool {
        self.accepted
    }

    /// Whether a falling transition has been latched since the last take.
    pub fn has_fallen(&self) -> bool {
        self.fell
    }

    /// Take and clear the falling-transition flag.
    pub fn take_fell(&mut self) -> bool {
        let fell = self.fell;
        self.fell = false;
        fell
    }

    /// Current counter value (bounded by the threshold).
    pub fn counter(&self) -> u8 {
        self.counter
    }
}

impl Default for DebouncedLine {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_TICKS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_after_threshold_consistent_samples() {
        let mut line = DebouncedLine::new(5);

        // [1,1,1,1,1] from accepted=0: flips only on the 5th sample
        for _ in 0..4 {
            assert!(!line.sample(true));
        }
        assert!(line.sample(true));
    }

    #[test]
    fn test_fast_toggle_never_accepted() {
        let mut line = DebouncedLine::new(5);

        // Alternating every tick never reaches the threshold
        for i in 0..100 {
            line.sample(i % 2 == 0);
            assert!(!line.accepted());
        }
    }

    #[test]
    fn test_counter_bounded() {
        let mut line = DebouncedLine::new(5);

        for _ in 0..50 {
            line.sample(true);
            assert!(line.counter() < 5);
        }
    }

    #[test]
    fn test_counter_decays_on_agreement() {
        let mut line = DebouncedLine::new(5);

        line.sample(true);
        line.sample(true);
        assert_eq!(line.counter(), 2);

        line.sample(false);
        assert_eq!(line.counter(), 1);
        line.sample(false);
        assert_eq!(line.counter(), 0);
        line.sample(false);
        assert_eq!(line.counter(), 0);
    }

    #[test]
    fn test_fall_latched_until_taken() {
        let mut line = DebouncedLine::new(5);

        // Go high
        for _ in 0..5 {
            line.sample(true);
        }
        assert!(line.accepted());
        assert!(!line.has_fallen());

        // Go low: flag latches
        for _ in 0..5 {
            line.sample(false);
        }
        assert!(!line.accepted());
        assert!(line.has_fallen());

        // Stays latched across further sampling
        for _ in 0..20 {
            line.sample(false);
        }
        assert!(line.has_fallen());

        // Taken exactly once
        assert!(line.take_fell());
        assert!(!line.take_fell());
    }

    #[test]
    fn test_rise_does_not_set_fall_flag() {
        let mut line = DebouncedLine::new(5);

        for _ in 0..5 {
            line.sample(true);
        }
        assert!(line.accepted());
        assert!(!line.has_fallen());
    }

    #[test]
    fn test_noise_burst_shorter_than_threshold_rejected() {
        let mut line = DebouncedLine::new(5);

        for _ in 0..5 {
            line.sample(true);
        }

        // 4-tick low glitch, then high again
        for _ in 0..4 {
            line.sample(false);
        }
        assert!(line.accepted());
        for _ in 0..10 {
            line.sample(true);
        }
        assert!(line.accepted());
        assert!(!line.has_fallen());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Any input held stable for >= threshold ticks is accepted.
            #[test]
            fn stable_input_converges(
                prefix in proptest::collection::vec(any::<bool>(), 0..32),
                level: bool,
            ) {
                let mut line = DebouncedLine::new(5);
                for raw in prefix {
                    line.sample(raw);
                }
                for _ in 0..5 {
                    line.sample(level);
                }
                prop_assert_eq!(line.accepted(), level);
            }

            /// The counter never leaves [0, threshold] for any input stream.
            #[test]
            fn counter_stays_bounded(
                samples in proptest::collection::vec(any::<bool>(), 0..256),
                threshold in 1u8..16,
            ) {
                let mut line = DebouncedLine::new(threshold);
                for raw in samples {
                    line.sample(raw);
                    prop_assert!(line.counter() <= threshold);
                }
            }

            /// The fall flag is only ever set by a high-to-low accepted
            /// transition, and once taken it stays clear while the input
            /// holds steady.
            #[test]
            fn fall_flag_tracks_accepted_falls(
                samples in proptest::collection::vec(any::<bool>(), 0..256),
            ) {
                let mut line = DebouncedLine::new(5);
                let mut falls_seen = 0u32;
                let mut was_accepted = false;
                for raw in samples {
                    line.sample(raw);
                    if was_accepted && !line.accepted() {
                        falls_seen += 1;
                    }
                    was_accepted = line.accepted();
                }
                let mut takes = 0u32;
                while line.take_fell() {
                    takes += 1;
                }
                // Latched flag records at least one fall iff one happened,
                // and taking clears it exactly once.
                prop_assert_eq!(takes > 0, falls_seen > 0);
                prop_assert!(takes <= 1);
            }
        }
    }
}
