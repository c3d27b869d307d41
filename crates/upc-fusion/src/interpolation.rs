//! Bilinear interpolation on a regular grid.

use rayon::prelude::*;

use crate::Point;
use crate::error::FusionError;

/// Interpolates values given on the nodes of a rectilinear grid.
///
/// Queries outside the grid, or touching a NaN node, return NaN.
#[derive(Debug, Clone)]
pub struct GridInterpolator {
    x: Vec<f64>,
    y: Vec<f64>,
    /// Row-major, `y.len()` rows of `x.len()` values.
    values: Vec<f64>,
}

enum Order {
    Increasing,
    Decreasing,
}

fn axis_order(axis: &[f64], name: &str) -> Result<Order, FusionError> {
    if axis.len() < 2 {
        return Err(FusionError::InvalidGrid(format!(
            "{name} axis needs at least 2 nodes, got {}",
            axis.len()
        )));
    }
    if axis.iter().any(|v| !v.is_finite()) {
        return Err(FusionError::InvalidGrid(format!(
            "{name} axis contains non-finite values"
        )));
    }
    if axis.windows(2).all(|w| w[0] < w[1]) {
        Ok(Order::Increasing)
    } else if axis.windows(2).all(|w| w[0] > w[1]) {
        Ok(Order::Decreasing)
    } else {
        Err(FusionError::InvalidGrid(format!(
            "{name} axis is not strictly monotonic"
        )))
    }
}

/// Index `i` such that `axis[i] <= v <= axis[i + 1]`, or `None` outside.
fn bracket(axis: &[f64], v: f64) -> Option<usize> {
    let first = *axis.first()?;
    let last = *axis.last()?;
    if !(first..=last).contains(&v) {
        return None;
    }
    let upper = axis.partition_point(|node| *node <= v);
    Some(upper.saturating_sub(1).min(axis.len() - 2))
}

impl GridInterpolator {
    /// Build an interpolator. Decreasing axes are flipped to increasing.
    ///
    /// # Errors
    /// Returns `FusionError::InvalidGrid` when an axis has fewer than two
    /// nodes, is not strictly monotonic, or `values` does not hold
    /// `x.len() * y.len()` entries.
    pub fn new(mut x: Vec<f64>, mut y: Vec<f64>, mut values: Vec<f64>) -> Result<Self, FusionError> {
        let x_order = axis_order(&x, "x")?;
        let y_order = axis_order(&y, "y")?;
        let (nx, ny) = (x.len(), y.len());
        if values.len() != nx * ny {
            return Err(FusionError::InvalidGrid(format!(
                "expected {ny} x {nx} = {} values, got {}",
                nx * ny,
                values.len()
            )));
        }

        if matches!(x_order, Order::Decreasing) {
            x.reverse();
            for row in values.chunks_mut(nx) {
                row.reverse();
            }
        }
        if matches!(y_order, Order::Decreasing) {
            y.reverse();
            values = values
                .chunks(nx)
                .rev()
                .flat_map(<[f64]>::iter)
                .copied()
                .collect();
        }

        Ok(Self { x, y, values })
    }

    /// Interpolated value at `(x, y)`.
    #[must_use]
    pub fn interpolate(&self, x: f64, y: f64) -> f64 {
        let (Some(ix), Some(iy)) = (bracket(&self.x, x), bracket(&self.y, y)) else {
            return f64::NAN;
        };
        let nx = self.x.len();
        let tx = (x - self.x[ix]) / (self.x[ix + 1] - self.x[ix]);
        let ty = (y - self.y[iy]) / (self.y[iy + 1] - self.y[iy]);

        let v00 = self.values[iy * nx + ix];
        let v10 = self.values[iy * nx + ix + 1];
        let v01 = self.values[(iy + 1) * nx + ix];
        let v11 = self.values[(iy + 1) * nx + ix + 1];

        let bottom = v00.mul_add(1.0 - tx, v10 * tx);
        let top = v01.mul_add(1.0 - tx, v11 * tx);
        bottom.mul_add(1.0 - ty, top * ty)
    }

    /// Interpolated value under every point, using its `x` and `y`.
    #[must_use]
    pub fn interpolate_points(&self, points: &[Point]) -> Vec<f64> {
        points
            .par_iter()
            .map(|p| self.interpolate(p[0], p[1]))
            .collect()
    }
}
