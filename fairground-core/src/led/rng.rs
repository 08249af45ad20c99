//! Small PRNG for the light show
//!
//! Show randomness only needs to look varied, not be well distributed.
//! The firmware seeds this from a floating ADC pin at boot.

/// Xorshift32 generator.
#[derive(Debug, Clone)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    /// Create a generator. A zero seed is remapped (xorshift has a fixed
    /// point at zero).
    pub const fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 0x6b8b_4567 } else { seed },
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform-ish draw from the half-open range `[lo, hi)`.
    pub fn range(&mut self, lo: u32, hi: u32) -> u32 {
        debug_assert!(lo < hi);
        lo + self.next_u32() % (hi - lo)
    }
}
