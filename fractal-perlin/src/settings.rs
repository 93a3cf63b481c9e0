//! Generator configuration.

use serde::{Deserialize, Serialize};

use crate::error::{NoiseError, check_parameters};
use crate::noise::{DEFAULT_OCTAVES, DEFAULT_PERSISTENCE, PerlinNoise};

const fn default_octaves() -> u32 {
    DEFAULT_OCTAVES
}

const fn default_persistence() -> f64 {
    DEFAULT_PERSISTENCE
}

/// Parameters needed to rebuild a [`PerlinNoise`].
///
/// Missing fields fall back to the generator defaults, so `{}` is a valid
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoiseSettings {
    /// Seed for the permutation table.
    #[serde(default)]
    pub seed: i64,
    /// Number of octaves summed per sample.
    #[serde(default = "default_octaves")]
    pub octaves: u32,
    /// Amplitude multiplier per octave.
    #[serde(default = "default_persistence")]
    pub persistence: f64,
}

impl Default for NoiseSettings {
    fn default() -> Self {
        Self {
            seed: 0,
            octaves: default_octaves(),
            persistence: default_persistence(),
        }
    }
}

impl NoiseSettings {
    /// Parse and validate settings from JSON text.
    pub fn from_json(text: &str) -> Result<Self, NoiseError> {
        let settings: Self = serde_json::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check that these settings produce finite noise.
    pub fn validate(&self) -> Result<(), NoiseError> {
        check_parameters(self.octaves, self.persistence)
    }

    /// Build a generator from these settings.
    pub fn build(&self) -> Result<PerlinNoise, NoiseError> {
        PerlinNoise::from_settings(self)
    }
}
