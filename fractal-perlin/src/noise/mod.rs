//! Noise generation primitives.
//!
//! - [`PerlinNoise`] - Octave-summed Perlin noise over a seeded permutation table

mod perlin_noise;

pub use perlin_noise::{DEFAULT_OCTAVES, DEFAULT_PERSISTENCE, PerlinNoise};

/// Dot product of a hashed gradient with the offset `(x, y, z)`.
///
/// Branch form of the reference gradient table: the low 4 bits of `hash` pick
/// one of the `±a ± b` edge gradients. Reordering these branches changes which
/// gradient each hash selects, so the structure is kept exactly.
#[inline]
#[must_use]
pub(crate) const fn grad(hash: u8, x: f64, y: f64, z: f64) -> f64 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    (if h & 1 == 0 { u } else { -u }) + (if h & 2 == 0 { v } else { -v })
}
