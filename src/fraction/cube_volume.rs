//! Closed-form inside volume of each canonical cube case.
//!
//! Every case is written for samples already rotated into its canonical orientation (see
//! [`CUBE_CANONICAL_INDICES`](crate::dispatch::CUBE_CANONICAL_INDICES)). Volumes combine three
//! kinds of terms:
//!
//! - products of edge fractions, for tetrahedra and wedges cut off at inside corners or edges;
//! - pyramids with apex at the origin over a cube face, for faces the cut leaves mostly inside;
//! - cones from the origin over the interface fan of the case, through [`fan_volume6`].

use super::cube_surface::{
    fan_volume6, CASE_11, CASE_14, CASE_15_SHEET, CASE_16, CASE_19, CASE_9_ALTERNATE,
    CASE_9_PRIMARY,
};
use crate::dispatch::TunnelTriangulation;
use crate::math::{CubeSamples, Real};
use crate::utils::{edge_fraction as frac, ONE_SIXTH, ONE_THIRD};

/// Six times the volume of the tetrahedron cut off at an inside corner.
///
/// `v[0]` is the corner sample, `v[1..4]` the samples of its three neighbors.
#[inline]
fn corner_tetra6(v: [Real; 4]) -> Real {
    frac(v[0], v[1]) * frac(v[0], v[2]) * frac(v[0], v[3])
}

/// Six times the volume of the tetrahedron cut off at the only outside corner.
#[inline]
fn outside_corner_tetra6(v: [Real; 4]) -> Real {
    (1.0 - frac(v[0], v[1])) * (1.0 - frac(v[0], v[2])) * (1.0 - frac(v[0], v[3]))
}

/// Six times the volume of the wedge cut off along an edge with two inside corners.
///
/// `v[0..3]` and `v[3..6]` are the two faces adjacent to the edge, each listed as a path
/// through the edge; `v[1]`-`v[4]` is the inside edge itself.
#[inline]
fn edge_wedge6(v: [Real; 6]) -> Real {
    let shared = frac(v[3], v[4]);
    (frac(v[0], v[1]) + shared) * frac(v[1], v[2]) + shared * frac(v[4], v[5])
}

/// Area of the unit square once a right triangle with legs `1 - a` and `1 - b` is cut from
/// one of its corners.
#[inline]
fn notched_square_area(a: Real, b: Real) -> Real {
    1.0 - 0.5 * (1.0 - a) * (1.0 - b)
}

/// The inside volume fraction of a canonical case, for samples already in canonical orientation.
pub(crate) fn canonical_volume(case: u8, tunnel: TunnelTriangulation, v: &CubeSamples) -> Real {
    match case {
        0 => 0.0,
        1 => ONE_SIXTH * corner_tetra6([v[0], v[1], v[3], v[4]]),
        2 => ONE_SIXTH * edge_wedge6([v[3], v[0], v[4], v[2], v[1], v[5]]),
        3 => {
            ONE_SIXTH
                * (corner_tetra6([v[0], v[1], v[3], v[4]]) + corner_tetra6([v[5], v[1], v[6], v[4]]))
        }
        4 => {
            ONE_SIXTH
                * (corner_tetra6([v[0], v[1], v[3], v[4]]) + corner_tetra6([v[6], v[7], v[5], v[2]]))
        }
        5 => {
            let e3 = frac(v[0], v[3]);
            let e11 = frac(v[3], v[7]);
            let pyramid = frac(v[1], v[5]) * notched_square_area(frac(v[0], v[1]), e3) / 3.0;
            pyramid + ONE_SIXTH * ((frac(v[2], v[6]) + e11) + e3 * e11)
        }
        6 => {
            ONE_SIXTH
                * (edge_wedge6([v[3], v[0], v[4], v[2], v[1], v[5]])
                    + corner_tetra6([v[6], v[7], v[5], v[2]]))
        }
        7 => {
            ONE_SIXTH
                * (corner_tetra6([v[4], v[0], v[5], v[7]])
                    + corner_tetra6([v[1], v[0], v[2], v[5]])
                    + corner_tetra6([v[6], v[7], v[5], v[2]]))
        }
        // Two prisms over the bottom face, split along its 0-2 diagonal.
        8 => {
            ONE_SIXTH
                * (2.0 * frac(v[0], v[4])
                    + frac(v[1], v[5])
                    + 2.0 * frac(v[2], v[6])
                    + frac(v[3], v[7]))
        }
        9 => {
            let e10 = frac(v[2], v[6]);
            let e6 = frac(v[6], v[7]);
            let faces = notched_square_area(e6, e10) / 3.0
                + ONE_SIXTH * frac(v[1], v[2]) * e10
                + ONE_SIXTH * (e6 * frac(v[4], v[7]));
            let fan = match tunnel {
                TunnelTriangulation::Primary => CASE_9_PRIMARY,
                TunnelTriangulation::Alternate => CASE_9_ALTERNATE,
            };
            faces + ONE_SIXTH * fan_volume6(v, fan)
        }
        10 => {
            ONE_SIXTH
                * (edge_wedge6([v[4], v[7], v[6], v[0], v[3], v[2]])
                    + edge_wedge6([v[2], v[1], v[0], v[6], v[5], v[4]]))
        }
        11 => {
            let e5 = frac(v[5], v[6]);
            let e6 = frac(v[6], v[7]);
            let faces = ONE_SIXTH * (frac(v[1], v[2]) + e5)
                + notched_square_area(e6, frac(v[3], v[7])) / 3.0
                + ONE_SIXTH * (e5 * e6);
            faces + ONE_SIXTH * fan_volume6(v, CASE_11)
        }
        12 => {
            let e0 = frac(v[0], v[1]);
            let e9 = frac(v[1], v[5]);
            frac(v[3], v[7]) * notched_square_area(e0, frac(v[0], v[3])) / 3.0
                + ONE_SIXTH
                    * ((e9 + frac(v[2], v[6]))
                        + e0 * e9
                        + corner_tetra6([v[4], v[0], v[5], v[7]]))
        }
        13 => {
            ONE_SIXTH
                * (corner_tetra6([v[4], v[0], v[5], v[7]])
                    + corner_tetra6([v[1], v[0], v[2], v[5]])
                    + corner_tetra6([v[6], v[7], v[5], v[2]])
                    + corner_tetra6([v[3], v[0], v[2], v[7]]))
        }
        14 => {
            let e10 = frac(v[2], v[6]);
            let e6 = frac(v[6], v[7]);
            let faces = ONE_SIXTH * (frac(v[1], v[5]) + e10)
                + ONE_SIXTH * (e6 * frac(v[4], v[7]))
                + notched_square_area(e6, e10) / 3.0;
            faces + ONE_SIXTH * fan_volume6(v, CASE_14)
        }
        15 => {
            let e10 = frac(v[2], v[6]);
            let e6 = frac(v[6], v[7]);
            notched_square_area(e6, e10) / 3.0
                + ONE_SIXTH * frac(v[1], v[2]) * e10
                + ONE_SIXTH * (e6 * frac(v[4], v[7]))
                + ONE_SIXTH * fan_volume6(v, CASE_15_SHEET)
                + ONE_SIXTH * corner_tetra6([v[5], v[4], v[1], v[6]])
        }
        16 => {
            let e10 = frac(v[2], v[6]);
            let e5 = frac(v[5], v[6]);
            let e6 = frac(v[6], v[7]);
            ONE_SIXTH * fan_volume6(v, CASE_16)
                + ONE_SIXTH * (frac(v[1], v[2]) * e10 + e5 * frac(v[1], v[5]))
                + notched_square_area(e6, e10) / 3.0
                + notched_square_area(e6, e5) / 3.0
        }
        // From here on the outside region is the small one: evaluate it and complement.
        17 => {
            let e3 = frac(v[0], v[3]);
            let e11 = frac(v[3], v[7]);
            let outside = (1.0 - frac(v[1], v[5])) * (1.0 - 0.5 * frac(v[0], v[1]) * e3) / 3.0
                + ONE_SIXTH * ((1.0 - frac(v[2], v[6])) + (1.0 - e11) + (1.0 - e3) * (1.0 - e11));
            1.0 - outside
        }
        18 => {
            1.0 - ONE_SIXTH
                * (outside_corner_tetra6([v[0], v[1], v[3], v[4]])
                    + outside_corner_tetra6([v[6], v[5], v[2], v[7]]))
        }
        19 => {
            let e5 = frac(v[5], v[6]);
            let outside = -ONE_SIXTH * fan_volume6(v, CASE_19)
                + ONE_THIRD * (0.5 * (1.0 - frac(v[1], v[5])) * (1.0 - e5))
                + ONE_THIRD * (0.5 * (1.0 - e5) * (1.0 - frac(v[4], v[5])));
            1.0 - outside
        }
        20 => {
            let e1 = frac(v[1], v[2]);
            1.0 - ONE_SIXTH
                * (((1.0 - frac(v[0], v[3])) + (1.0 - e1)) * (1.0 - frac(v[0], v[4]))
                    + (1.0 - e1) * (1.0 - frac(v[1], v[5])))
        }
        21 => 1.0 - ONE_SIXTH * outside_corner_tetra6([v[0], v[1], v[3], v[4]]),
        22 => 1.0,
        _ => {
            log::debug!("Hit unexpected state in the cube dispatch: canonical case {case}.");
            0.0
        }
    }
}
