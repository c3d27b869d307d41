//! AHN elevation tiles.

use std::collections::HashMap;

use crate::error::FusionError;
use crate::interpolation::GridInterpolator;

/// Ground surface of one tile on a regular grid.
///
/// `ground_surface` is row-major with `y.len()` rows of `x.len()` values;
/// cells without data hold NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct AhnTile {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub ground_surface: Vec<f64>,
}

impl AhnTile {
    /// Bilinear interpolator over the ground surface.
    ///
    /// # Errors
    /// Returns `FusionError::InvalidGrid` when the axes or surface are malformed.
    pub fn ground_interpolator(&self) -> Result<GridInterpolator, FusionError> {
        GridInterpolator::new(
            self.x.clone(),
            self.y.clone(),
            self.ground_surface.clone(),
        )
    }
}

/// Source of AHN tiles by tile code.
pub trait AhnReader {
    /// Elevation data covering `tilecode`.
    ///
    /// # Errors
    /// Returns `FusionError::TileNotFound` when the tile is unknown.
    fn filter_tile(&self, tilecode: &str) -> Result<AhnTile, FusionError>;
}

/// Tiles held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryAhnReader {
    tiles: HashMap<String, AhnTile>,
}

impl MemoryAhnReader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, tilecode: impl Into<String>, tile: AhnTile) {
        self.tiles.insert(tilecode.into(), tile);
    }

    #[must_use]
    pub fn with_tile(mut self, tilecode: impl Into<String>, tile: AhnTile) -> Self {
        self.insert(tilecode, tile);
        self
    }
}

impl AhnReader for MemoryAhnReader {
    fn filter_tile(&self, tilecode: &str) -> Result<AhnTile, FusionError> {
        self.tiles
            .get(tilecode)
            .cloned()
            .ok_or_else(|| FusionError::TileNotFound(tilecode.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tile_is_an_error() {
        let reader = MemoryAhnReader::new();
        let err = reader.filter_tile("2386_9702").unwrap_err();
        assert!(matches!(err, FusionError::TileNotFound(code) if code == "2386_9702"));
    }

    #[test]
    fn stored_tile_is_returned() {
        let tile = AhnTile {
            x: vec![0.0, 1.0],
            y: vec![0.0, 1.0],
            ground_surface: vec![0.0; 4],
        };
        let reader = MemoryAhnReader::new().with_tile("t", tile.clone());
        assert_eq!(reader.filter_tile("t").unwrap(), tile);
    }
}
