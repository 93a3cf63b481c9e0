//! Seedable fractal Perlin noise.
//!
//! - [`PerlinNoise`] - Octave-summed 1D/2D/3D Perlin noise in `[0, 1]`
//! - [`NoiseSettings`] - Validated, deserializable generator configuration
//! - [`global`] - A process-wide default generator behind free functions
//!
//! ```
//! use fractal_perlin::PerlinNoise;
//!
//! let mut noise = PerlinNoise::new();
//! noise.seed(42);
//! let height = noise.noise_2d(0.25, 1.75);
//! assert!((0.0..=1.0).contains(&height));
//! ```

pub mod error;
pub mod global;
pub mod math;
pub mod noise;
pub mod random;
pub mod settings;

pub use error::NoiseError;
pub use global::{noise_1d, noise_2d, noise_3d, seed};
pub use noise::PerlinNoise;
pub use settings::NoiseSettings;
