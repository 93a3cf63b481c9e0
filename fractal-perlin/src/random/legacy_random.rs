//! 48-bit linear congruential generator.

use crate::random::Random;

const MULTIPLIER: i64 = 0x5_DEEC_E66D;
const INCREMENT: i64 = 0xB;
const MODULUS_MASK: i64 = (1 << 48) - 1;
const DOUBLE_UNIT: f64 = 1.0 / (1u64 << 53) as f64;

/// Linear congruential random source with 48 bits of state.
///
/// Every reseed of a [`PerlinNoise`](crate::PerlinNoise) shuffles its table
/// from a fresh one of these.
#[derive(Debug, Clone)]
pub struct LegacyRandom {
    seed: i64,
}

impl LegacyRandom {
    /// Create a random source from a seed.
    #[must_use]
    pub const fn from_seed(seed: u64) -> Self {
        Self {
            seed: (seed as i64 ^ MULTIPLIER) & MODULUS_MASK,
        }
    }

    /// Advance the state and return its top `bits` bits.
    #[inline]
    const fn next(&mut self, bits: u32) -> i32 {
        self.seed = self.seed.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT) & MODULUS_MASK;
        (self.seed >> (48 - bits)) as i32
    }
}

impl Random for LegacyRandom {
    fn next_i32(&mut self) -> i32 {
        self.next(32)
    }

    fn next_i32_bounded(&mut self, bound: i32) -> i32 {
        debug_assert!(bound > 0, "bound must be positive, got {bound}");

        // Powers of two take the high bits directly
        if bound & bound.wrapping_neg() == bound {
            return ((i64::from(bound) * i64::from(self.next(31))) >> 31) as i32;
        }

        // Reject draws from the incomplete final bucket to stay uniform
        loop {
            let bits = self.next(31);
            let val = bits % bound;
            if bits.wrapping_sub(val).wrapping_add(bound - 1) >= 0 {
                return val;
            }
        }
    }

    fn next_f64(&mut self) -> f64 {
        let high = i64::from(self.next(26)) << 27;
        let low = i64::from(self.next(27));
        (high + low) as f64 * DOUBLE_UNIT
    }
}
