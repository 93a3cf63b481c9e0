//! Octave-summed Perlin noise.
//!
//! Each octave samples the same permutation table at double the previous
//! frequency with `persistence` times the previous amplitude. The sum is
//! divided by the total amplitude so the result stays in `[0, 1]` for any
//! valid octave count and persistence.

use crate::error::{Axis, NoiseError, check_finite, check_parameters};
use crate::math::{fade, lattice_index, lerp};
use crate::noise::grad;
use crate::random::Random;
use crate::random::legacy_random::LegacyRandom;
use crate::settings::NoiseSettings;

/// Default number of octaves summed per sample.
pub const DEFAULT_OCTAVES: u32 = 8;
/// Default amplitude multiplier between consecutive octaves.
pub const DEFAULT_PERSISTENCE: f64 = 0.5;

/// Seeded fractal Perlin noise generator.
///
/// Holds a 512-entry permutation table (a shuffle of `0..256` mirrored into
/// the second half, so `index + 1` lookups never wrap) plus the octave
/// parameters. `octaves` and `persistence` may be changed between calls and
/// take effect on the next sample.
#[derive(Debug, Clone)]
pub struct PerlinNoise {
    p: [u8; 512],
    seed: i64,
    /// Number of octaves summed per sample. Must be at least 1; zero makes
    /// every sample NaN.
    pub octaves: u32,
    /// Amplitude multiplier per octave, in `(0, 1]`. Values `<= 0` degrade the
    /// output rather than failing.
    pub persistence: f64,
}

impl Default for PerlinNoise {
    fn default() -> Self {
        Self::new()
    }
}

impl PerlinNoise {
    /// Create a generator with 8 octaves, persistence 0.5 and seed 0.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    /// Create a generator with default parameters and the given seed.
    #[must_use]
    pub fn with_seed(seed: i64) -> Self {
        let mut noise = Self {
            p: [0; 512],
            seed,
            octaves: DEFAULT_OCTAVES,
            persistence: DEFAULT_PERSISTENCE,
        };
        noise.seed(seed);
        noise
    }

    /// Create a generator from validated settings.
    pub fn from_settings(settings: &NoiseSettings) -> Result<Self, NoiseError> {
        settings.validate()?;
        let mut noise = Self::with_seed(settings.seed);
        noise.octaves = settings.octaves;
        noise.persistence = settings.persistence;
        Ok(noise)
    }

    /// Current parameters as settings, including the last applied seed.
    #[must_use]
    pub const fn settings(&self) -> NoiseSettings {
        NoiseSettings {
            seed: self.seed,
            octaves: self.octaves,
            persistence: self.persistence,
        }
    }

    /// Replace the permutation table with one shuffled from `seed`.
    ///
    /// `octaves` and `persistence` are left untouched.
    pub fn seed(&mut self, seed: i64) {
        self.p = Self::permutation_from(&mut LegacyRandom::from_seed(seed as u64));
        self.seed = seed;
        tracing::debug!(seed, "Reseeded Perlin permutation table");
    }

    /// The seed the current permutation table was built from.
    #[must_use]
    pub const fn current_seed(&self) -> i64 {
        self.seed
    }

    /// The full 512-entry permutation table.
    #[must_use]
    pub const fn permutation(&self) -> &[u8; 512] {
        &self.p
    }

    /// Fisher-Yates shuffle of `0..256`, mirrored into the upper half.
    fn permutation_from<R: Random>(random: &mut R) -> [u8; 512] {
        let mut p = [0u8; 512];
        for (i, val) in p.iter_mut().enumerate().take(256) {
            *val = i as u8;
        }

        for i in 0..256 {
            let offset = random.next_i32_bounded((256 - i) as i32) as usize;
            p.swap(i, i + offset);
        }

        let (low, high) = p.split_at_mut(256);
        high.copy_from_slice(low);
        p
    }

    /// Sample 1D fractal noise. Same as `noise_3d(x, 0, 0)`.
    #[inline]
    #[must_use]
    pub fn noise_1d(&self, x: f64) -> f64 {
        self.noise_3d(x, 0.0, 0.0)
    }

    /// Sample 2D fractal noise. Same as `noise_3d(x, y, 0)`.
    #[inline]
    #[must_use]
    pub fn noise_2d(&self, x: f64, y: f64) -> f64 {
        self.noise_3d(x, y, 0.0)
    }

    /// Sample 3D fractal noise.
    ///
    /// Returns a value in `[0, 1]` for finite input. Non-finite input
    /// propagates as NaN; use [`Self::try_noise_3d`] to reject it instead.
    #[must_use]
    pub fn noise_3d(&self, x: f64, y: f64, z: f64) -> f64 {
        let mut total = 0.0;
        let mut max_value = 0.0;
        let mut frequency = 1.0;
        let mut amplitude = 1.0;

        for _ in 0..self.octaves {
            total += self.sample_octave(x * frequency, y * frequency, z * frequency) * amplitude;
            max_value += amplitude;
            amplitude *= self.persistence;
            frequency *= 2.0;
        }

        total / max_value
    }

    /// Checked [`Self::noise_1d`].
    pub fn try_noise_1d(&self, x: f64) -> Result<f64, NoiseError> {
        self.try_noise_3d(x, 0.0, 0.0)
    }

    /// Checked [`Self::noise_2d`].
    pub fn try_noise_2d(&self, x: f64, y: f64) -> Result<f64, NoiseError> {
        self.try_noise_3d(x, y, 0.0)
    }

    /// Checked [`Self::noise_3d`].
    ///
    /// Fails on non-finite coordinates, a zero octave count, or a persistence
    /// that is not a positive finite number.
    pub fn try_noise_3d(&self, x: f64, y: f64, z: f64) -> Result<f64, NoiseError> {
        check_parameters(self.octaves, self.persistence)?;
        let x = check_finite(Axis::X, x)?;
        let y = check_finite(Axis::Y, y)?;
        let z = check_finite(Axis::Z, z)?;
        Ok(self.noise_3d(x, y, z))
    }

    #[inline]
    const fn p(&self, index: usize) -> usize {
        self.p[index] as usize
    }

    /// Single octave of Perlin noise, remapped from `[-1, 1]` to `[0, 1]`.
    #[must_use]
    pub(crate) fn sample_octave(&self, x: f64, y: f64, z: f64) -> f64 {
        let xi = lattice_index(x);
        let yi = lattice_index(y);
        let zi = lattice_index(z);

        let xf = x - x.floor();
        let yf = y - y.floor();
        let zf = z - z.floor();

        let u = fade(xf);
        let v = fade(yf);
        let w = fade(zf);

        // Hash the 8 cube corners
        let a = self.p(xi) + yi;
        let aa = self.p(a) + zi;
        let ab = self.p(a + 1) + zi;
        let b = self.p(xi + 1) + yi;
        let ba = self.p(b) + zi;
        let bb = self.p(b + 1) + zi;

        let p = &self.p;
        let x1 = lerp(u, grad(p[aa], xf, yf, zf), grad(p[ba], xf - 1.0, yf, zf));
        let x2 = lerp(
            u,
            grad(p[ab], xf, yf - 1.0, zf),
            grad(p[bb], xf - 1.0, yf - 1.0, zf),
        );
        let y1 = lerp(v, x1, x2);

        let x3 = lerp(
            u,
            grad(p[aa + 1], xf, yf, zf - 1.0),
            grad(p[ba + 1], xf - 1.0, yf, zf - 1.0),
        );
        let x4 = lerp(
            u,
            grad(p[ab + 1], xf, yf - 1.0, zf - 1.0),
            grad(p[bb + 1], xf - 1.0, yf - 1.0, zf - 1.0),
        );
        let y2 = lerp(v, x3, x4);

        (lerp(w, y1, y2) + 1.0) / 2.0
    }
}
