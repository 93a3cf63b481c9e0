//! Interpolation and lattice math used by the noise kernel.

/// Quintic fade curve: `6t^5 - 15t^4 + 10t^3`.
///
/// First and second derivatives vanish at `t = 0` and `t = 1`, so neighbouring
/// lattice cells join without visible creases.
#[inline]
#[must_use]
pub const fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Linear interpolation.
///
/// Formula: `a + t * (b - a)`
#[inline]
#[must_use]
pub const fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

/// Lattice cell of `v` in the 256-wide permutation table: `floor(v) mod 256`.
///
/// Exact for every finite `v`. NaN and infinities map to 0.
#[inline]
#[must_use]
pub fn lattice_index(v: f64) -> usize {
    v.floor().rem_euclid(256.0) as usize
}
