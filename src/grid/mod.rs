//! Regular node grids and their per-cell fractions.
//!
//! A grid stores one level-set sample per node, x-fastest, with the same spacing `h` along every
//! axis. Each cell's samples are gathered in the corner order of the single-cell queries, and
//! per-cell results come back in the same x-fastest order as the cells.

pub use self::cube_grid::CubeGrid;
pub use self::quad_grid::QuadGrid;

use crate::math::Real;
use crate::FractionError;
use alloc::vec::Vec;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

mod cube_grid;
mod quad_grid;

/// Checks the node dimensions, spacing and values of a grid.
fn validate(dims: &[usize], spacing: Real, values: &[Real]) -> Result<(), FractionError> {
    if let Some((axis, nodes)) = dims.iter().enumerate().find(|(_, n)| **n < 2) {
        return Err(FractionError::GridTooSmall {
            axis,
            nodes: *nodes,
        });
    }

    let expected: usize = dims.iter().product();
    if values.len() != expected {
        return Err(FractionError::GridSize {
            expected,
            found: values.len(),
        });
    }

    if !spacing.is_finite() || spacing <= 0.0 {
        return Err(FractionError::InvalidSpacing(spacing));
    }

    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(FractionError::NonFiniteSample { index }),
        None => Ok(()),
    }
}

/// Evaluates `f` on every cell id in `0..count`.
#[cfg(feature = "parallel")]
fn map_cells<F>(count: usize, f: F) -> Vec<Real>
where
    F: Fn(usize) -> Real + Sync + Send,
{
    (0..count).into_par_iter().map(f).collect()
}

/// Evaluates `f` on every cell id in `0..count`.
#[cfg(not(feature = "parallel"))]
fn map_cells<F>(count: usize, f: F) -> Vec<Real>
where
    F: Fn(usize) -> Real,
{
    (0..count).map(f).collect()
}

/// Sums `f` over every cell id in `0..count`.
#[cfg(feature = "parallel")]
fn sum_cells<F>(count: usize, f: F) -> Real
where
    F: Fn(usize) -> Real + Sync + Send,
{
    (0..count).into_par_iter().map(f).sum()
}

/// Sums `f` over every cell id in `0..count`.
#[cfg(not(feature = "parallel"))]
fn sum_cells<F>(count: usize, f: F) -> Real
where
    F: Fn(usize) -> Real,
{
    (0..count).map(f).sum()
}
