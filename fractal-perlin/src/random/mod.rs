//! Deterministic random sources used to build permutation tables.
//!
//! Implemented in-crate so that a given seed yields the same table on every
//! platform and across dependency upgrades.

pub mod legacy_random;

/// A seedable stream of pseudo-random numbers.
pub trait Random {
    /// Next uniformly distributed `i32` over the whole range.
    fn next_i32(&mut self) -> i32;

    /// Next uniformly distributed `i32` in `[0, bound)`.
    ///
    /// `bound` must be positive.
    fn next_i32_bounded(&mut self, bound: i32) -> i32;

    /// Next uniformly distributed `f64` in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Advance the stream by `count` draws, discarding the results.
    fn consume_count(&mut self, count: u32) {
        for _ in 0..count {
            self.next_i32();
        }
    }
}
