//! Process-wide default generator.
//!
//! Created on first use with seed 0 and default parameters, then lives for
//! the rest of the process. The free functions here take the lock for a
//! single call; use [`default_generator`] to hold it across several calls or
//! to change `octaves`/`persistence` on the shared instance.

use std::sync::LazyLock;

use parking_lot::RwLock;

use crate::noise::PerlinNoise;

static DEFAULT_NOISE: LazyLock<RwLock<PerlinNoise>> = LazyLock::new(|| {
    tracing::debug!("Initializing default Perlin noise generator");
    RwLock::new(PerlinNoise::new())
});

/// The lock guarding the shared default generator.
#[must_use]
pub fn default_generator() -> &'static RwLock<PerlinNoise> {
    &DEFAULT_NOISE
}

/// Sample 1D noise from the default generator.
#[must_use]
pub fn noise_1d(x: f64) -> f64 {
    DEFAULT_NOISE.read().noise_1d(x)
}

/// Sample 2D noise from the default generator.
#[must_use]
pub fn noise_2d(x: f64, y: f64) -> f64 {
    DEFAULT_NOISE.read().noise_2d(x, y)
}

/// Sample 3D noise from the default generator.
#[must_use]
pub fn noise_3d(x: f64, y: f64, z: f64) -> f64 {
    DEFAULT_NOISE.read().noise_3d(x, y, z)
}

/// Reseed the default generator.
pub fn seed(seed: i64) {
    DEFAULT_NOISE.write().seed(seed);
}
