//! # upc-fusion
//!
//! Fusion-stage processors that assign a class label to points of a
//! point-cloud tile. Each processor implements [`Fuser`] and returns a
//! boolean mask of the points it claims.
//!
//! Currently provided:
//! - [`NoiseFilter`]: points below the AHN ground surface, or in clusters
//!   too small to be real objects.
//!
//! Supporting pieces:
//! - [`AhnReader`] / [`AhnTile`]: elevation grids keyed by tile code
//! - [`GridInterpolator`]: bilinear lookup on a regular grid
//! - [`ConnectedComponents`]: voxel-grid clustering

mod ahn;
mod components;
pub mod error;
mod fuser;
mod interpolation;
mod noise;

pub use ahn::{AhnReader, AhnTile, MemoryAhnReader};
pub use components::ConnectedComponents;
pub use error::FusionError;
pub use fuser::Fuser;
pub use interpolation::GridInterpolator;
pub use noise::NoiseFilter;

/// A point as `[x, y, z]`.
pub type Point = [f64; 3];
