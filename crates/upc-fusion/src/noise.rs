//! Noise labelling from ground elevation and cluster size.

use tracing::{debug, info};
use upc_config::FusionConfig;

use crate::Point;
use crate::ahn::AhnReader;
use crate::components::ConnectedComponents;
use crate::error::FusionError;
use crate::fuser::Fuser;

/// Labels points below the AHN ground surface and points in small clusters.
///
/// A masked point is noise when it lies more than `epsilon` below the
/// interpolated ground, or when its connected component (see
/// [`ConnectedComponents`]) has fewer than `min_component_size` points.
/// Points where the ground is unknown are judged on cluster size alone.
#[derive(Debug, Clone)]
pub struct NoiseFilter<R> {
    label: u16,
    reader: R,
    epsilon: f64,
    octree_level: u8,
    min_component_size: usize,
}

impl<R: AhnReader> NoiseFilter<R> {
    /// Filter with default parameters (epsilon 0.2, octree level 9, min size 100).
    pub fn new(label: u16, reader: R) -> Self {
        let defaults = FusionConfig::default();
        Self {
            label,
            reader,
            epsilon: defaults.epsilon,
            octree_level: defaults.octree_level,
            min_component_size: defaults.min_component_size,
        }
    }

    /// Filter with parameters taken from configuration.
    ///
    /// # Errors
    /// Returns `FusionError::Config` when the parameters are out of range.
    pub fn from_config(label: u16, reader: R, config: &FusionConfig) -> Result<Self, FusionError> {
        config.validate()?;
        Ok(Self {
            label,
            reader,
            epsilon: config.epsilon,
            octree_level: config.octree_level,
            min_component_size: config.min_component_size,
        })
    }

    #[must_use]
    pub const fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    #[must_use]
    pub const fn with_octree_level(mut self, octree_level: u8) -> Self {
        self.octree_level = octree_level;
        self
    }

    #[must_use]
    pub const fn with_min_component_size(mut self, min_component_size: usize) -> Self {
        self.min_component_size = min_component_size;
        self
    }
}

impl<R: AhnReader> Fuser for NoiseFilter<R> {
    fn label(&self) -> u16 {
        self.label
    }

    fn label_mask(
        &self,
        points: &[Point],
        labels: &[u16],
        mask: &[bool],
        tilecode: &str,
    ) -> Result<Vec<bool>, FusionError> {
        if mask.len() != points.len() {
            return Err(FusionError::ShapeMismatch {
                what: "mask",
                expected: points.len(),
                actual: mask.len(),
            });
        }
        // An empty `labels` means no prior labelling.
        if !labels.is_empty() && labels.len() != points.len() {
            return Err(FusionError::ShapeMismatch {
                what: "labels",
                expected: points.len(),
                actual: labels.len(),
            });
        }

        let mut label_mask = vec![false; points.len()];
        let selected: Vec<usize> = (0..points.len()).filter(|&i| mask[i]).collect();
        if selected.is_empty() {
            debug!(label = self.label, tilecode, "noise filter: empty mask");
            return Ok(label_mask);
        }
        let subset: Vec<Point> = selected.iter().map(|&i| points[i]).collect();

        let components = ConnectedComponents::new(self.octree_level).label(&subset);
        let sizes = ConnectedComponents::sizes(&components);

        let ground = self
            .reader
            .filter_tile(tilecode)?
            .ground_interpolator()?
            .interpolate_points(&subset);

        let mut noise = 0usize;
        for (k, &index) in selected.iter().enumerate() {
            let small = sizes[components[k]] < self.min_component_size;
            // NaN ground compares false, so uncovered points are never "below".
            let below = subset[k][2] - ground[k] < -self.epsilon;
            if small || below {
                label_mask[index] = true;
                noise += 1;
            }
        }

        info!(
            label = self.label,
            tilecode,
            points = selected.len(),
            components = sizes.len(),
            noise,
            "noise filter processed"
        );
        Ok(label_mask)
    }
}
