//! Fusion error types.

/// Errors from fusion processors and their data sources.
#[derive(Debug, thiserror::Error)]
pub enum FusionError {
    /// No elevation data is available for the tile.
    #[error("no AHN data for tile {0}")]
    TileNotFound(String),

    /// Grid axes or values do not describe a regular grid.
    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    /// Per-point inputs have different lengths.
    #[error("{what} has {actual} entries, expected {expected}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Processor parameters are out of range.
    #[error(transparent)]
    Config(#[from] upc_config::ConfigError),
}
