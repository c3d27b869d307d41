//! Noise filter parameters.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Deepest octree level the voxel keys can address.
pub const MAX_OCTREE_LEVEL: u8 = 21;

const fn default_epsilon() -> f64 {
    0.2
}

const fn default_octree_level() -> u8 {
    9
}

const fn default_min_component_size() -> usize {
    100
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FusionConfig {
    /// Tolerance below the AHN ground surface before a point counts as noise.
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,

    /// Octree level used for connected-component clustering.
    #[serde(default = "default_octree_level")]
    pub octree_level: u8,

    /// Components with fewer points than this are noise.
    #[serde(default = "default_min_component_size")]
    pub min_component_size: usize,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            epsilon: default_epsilon(),
            octree_level: default_octree_level(),
            min_component_size: default_min_component_size(),
        }
    }
}

impl FusionConfig {
    /// Check value ranges.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` for a negative or non-finite
    /// epsilon, or an octree level outside `1..=MAX_OCTREE_LEVEL`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "fusion.epsilon".to_string(),
                reason: format!("must be a finite value >= 0, got {}", self.epsilon),
            });
        }
        if !(1..=MAX_OCTREE_LEVEL).contains(&self.octree_level) {
            return Err(ConfigError::InvalidValue {
                field: "fusion.octree_level".to_string(),
                reason: format!(
                    "must be between 1 and {MAX_OCTREE_LEVEL}, got {}",
                    self.octree_level
                ),
            });
        }
        Ok(())
    }
}
