//! Inside fractions and interface measures of single cells.
//!
//! Every query runs the same pipeline: classify the corner signs into a table index, look the
//! index up in the dispatch table, relabel the samples into the orientation the selected
//! formula expects, and evaluate that formula.
//!
//! Results are measured on the unit cell. Scale interface lengths by `h`, interface areas and
//! quad areas by `h²` and cube volumes by `h³` for a cell of side `h`.

pub use self::checked::{cube_samples, quad_samples};
pub use self::quad::QuadSaddle;

use self::cube_surface::canonical_interface_area;
use self::cube_volume::canonical_volume;
use self::quad::{canonical_quad_area, canonical_quad_length};
use crate::cell::{cube_index, quad_index, rotate_cube_samples, rotate_quad_samples};
use crate::dispatch::{cube_dispatch, quad_dispatch, CubeDispatch};
use crate::math::{CubeSamples, QuadSamples, Real};

mod checked;
mod cube_surface;
mod cube_volume;
mod quad;

/// The inside area fraction and interface length of a quad.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct QuadMeasures {
    /// Fraction of the cell area lying inside, in `[0, 1]`.
    pub area_fraction: Real,
    /// Length of the interface inside the unit cell.
    pub interface_length: Real,
}

/// The inside volume fraction and interface area of a cube.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct CubeMeasures {
    /// Fraction of the cell volume lying inside, in `[0, 1]`.
    pub volume_fraction: Real,
    /// Area of the interface inside the unit cell.
    pub interface_area: Real,
}

fn canonical_quad(samples: &QuadSamples) -> (u8, QuadSamples) {
    let entry = quad_dispatch(quad_index(samples));
    (
        entry.case,
        rotate_quad_samples(samples, usize::from(entry.rotation)),
    )
}

fn canonical_cube(samples: &CubeSamples) -> (CubeDispatch, CubeSamples) {
    let entry = cube_dispatch(cube_index(samples));
    (entry, rotate_cube_samples(samples, entry.rotation))
}

/// The fraction of a square cell lying on the inside (negative) side of the level set.
///
/// `samples` are the level-set values at the corners `(i,j) (i+1,j) (i+1,j+1) (i,j+1)`. A
/// corner is inside iff its sample is strictly negative. When diagonal corners share a sign,
/// the inside corners are connected iff the sum of the samples is negative.
///
/// The result lies in `[0, 1]`.
pub fn quad_area_fraction(samples: QuadSamples) -> Real {
    let (case, canonical) = canonical_quad(&samples);
    canonical_quad_area(case, &canonical)
}

/// The length of the interface crossing a unit square cell.
///
/// Uses the same corner order and saddle rule as [`quad_area_fraction`]. The result lies in
/// `[0, 2√2]`.
pub fn quad_interface_length(samples: QuadSamples) -> Real {
    let (case, canonical) = canonical_quad(&samples);
    canonical_quad_length(case, &canonical)
}

/// Both measures of a quad, classifying the samples only once.
pub fn quad_measures(samples: QuadSamples) -> QuadMeasures {
    let (case, canonical) = canonical_quad(&samples);
    QuadMeasures {
        area_fraction: canonical_quad_area(case, &canonical),
        interface_length: canonical_quad_length(case, &canonical),
    }
}

/// The fraction of a cubic cell lying on the inside (negative) side of the level set.
///
/// `samples` are the level-set values at the corners `v0..v7` of the unit cube, with
/// `v0 = (0,0,0)`, `v1 = (1,0,0)`, `v2 = (1,1,0)`, `v3 = (0,1,0)` and `v4..v7` the same corners
/// at `z = 1`. A corner is inside iff its sample is strictly negative.
///
/// The result lies in `[0, 1]`.
pub fn cube_volume_fraction(samples: CubeSamples) -> Real {
    let (entry, canonical) = canonical_cube(&samples);
    canonical_volume(entry.case, entry.tunnel, &canonical)
}

/// The area of the interface crossing a unit cube cell.
///
/// Uses the same corner order as [`cube_volume_fraction`]. The interface is the triangulation
/// of the edge crossings selected by the canonical case of the sign pattern.
pub fn cube_interface_area(samples: CubeSamples) -> Real {
    let (entry, canonical) = canonical_cube(&samples);
    canonical_interface_area(entry.case, entry.tunnel, &canonical)
}

/// Both measures of a cube, classifying the samples only once.
pub fn cube_measures(samples: CubeSamples) -> CubeMeasures {
    let (entry, canonical) = canonical_cube(&samples);
    CubeMeasures {
        volume_fraction: canonical_volume(entry.case, entry.tunnel, &canonical),
        interface_area: canonical_interface_area(entry.case, entry.tunnel, &canonical),
    }
}
