//! Lightning burst planning

use heapless::Vec;

use super::rng::XorShift32;

/// Upper bound on flashes per burst (draws are 2..=5).
pub const MAX_FLASHES: usize = 8;

/// One white flash: strip on for `on_ms`, dark for `off_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Flash {
    pub on_ms: u16,
    pub off_ms: u16,
}

/// Plan one lightning burst.
///
/// A burst is 2 to 5 flashes. At most one flash in the burst is a long
/// "main strike" (100-350 ms); the rest are short flickers.
pub fn lightning_plan(rng: &mut XorShift32) -> Vec<Flash, MAX_FLASHES> {
    let mut plan = Vec::new();
    let count = rng.range(2, 6);
    let mut had_strike = false;

    for _ in 0..count {
        let large = rng.range(0, 100);
        let on_ms = if large > 40 && !had_strike {
            had_strike = true;
            rng.range(100, 350)
        } else {
            rng.range(20, 50)
        };
        let off_ms = rng.range(30, 70);
        let _ = plan.push(Flash {
            on_ms: on_ms as u16,
            off_ms: off_ms as u16,
        });
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_count_in_range() {
        let mut rng = XorShift32::new(99);
        for _ in 0..500 {
            let plan = lightning_plan(&mut rng);
            assert!((2..=5).contains(&plan.len()));
        }
    }

    #[test]
    fn test_at_most_one_long_strike() {
        let mut rng = XorShift32::new(1234);
        for _ in 0..500 {
            let plan = lightning_plan(&mut rng);
            let strikes = plan.iter().filter(|f| f.on_ms >= 100).count();
            assert!(strikes <= 1);
        }
    }

    #[test]
    fn test_durations_in_range() {
        let mut rng = XorShift32::new(5);
        for _ in 0..500 {
            for flash in lightning_plan(&mut rng) {
                assert!((20..350).contains(&flash.on_ms));
                assert!((30..70).contains(&flash.off_ms));
            }
        }
    }

    #[test]
    fn test_long_strikes_do_occur() {
        let mut rng = XorShift32::new(8);
        let mut strikes = 0;
        for _ in 0..500 {
            strikes += lightning_plan(&mut rng)
                .iter()
                .filter(|f| f.on_ms >= 100)
                .count();
        }
        assert!(strikes > 0);
    }
}
