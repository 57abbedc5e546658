//! Closed-form inside area and interface length of each quad sign pattern.

use crate::math::{QuadSamples, Real};
use crate::utils::edge_fraction as frac;
use na::ComplexField; // for .sqrt()

/// How the inside corners of a checkerboard quad are connected.
///
/// A quad whose diagonal corners share a sign can be cut in two ways. The choice is made from
/// the sign of the sample sum, which is the sign of the bilinear interpolant at the cell center.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum QuadSaddle {
    /// The center is inside: one inside region crosses the cell, two outside corners are cut off.
    Joined,
    /// The center is outside: each inside corner is cut off on its own.
    Separated,
}

impl QuadSaddle {
    /// Picks the connectivity of a checkerboard quad from its samples.
    ///
    /// A sum of exactly zero counts as outside, like a zero sample does.
    pub fn resolve(samples: &QuadSamples) -> Self {
        if samples.iter().sum::<Real>() < 0.0 {
            QuadSaddle::Joined
        } else {
            QuadSaddle::Separated
        }
    }
}

#[inline]
fn leg_length(a: Real, b: Real) -> Real {
    ComplexField::sqrt(a * a + b * b)
}

#[inline]
fn slanted_length(a: Real, b: Real) -> Real {
    let d = a - b;
    ComplexField::sqrt(1.0 + d * d)
}

/// The inside area fraction of formula family `case`, for samples already relabeled for it.
pub(crate) fn canonical_quad_area(case: u8, v: &QuadSamples) -> Real {
    match case {
        0 => 0.0,
        1 => 0.5 * frac(v[0], v[1]) * frac(v[0], v[3]),
        2 => 0.5 * frac(v[1], v[0]) * frac(v[1], v[2]),
        3 => 0.5 * (frac(v[0], v[3]) + frac(v[1], v[2])),
        4 => 0.5 * frac(v[2], v[1]) * frac(v[2], v[3]),
        5 => match QuadSaddle::resolve(v) {
            QuadSaddle::Joined => {
                1.0 - 0.5
                    * ((1.0 - frac(v[0], v[1])) * (1.0 - frac(v[1], v[2]))
                        + (1.0 - frac(v[3], v[0])) * (1.0 - frac(v[3], v[2])))
            }
            QuadSaddle::Separated => {
                0.5 * (frac(v[0], v[1]) * frac(v[0], v[3]) + frac(v[2], v[1]) * frac(v[2], v[3]))
            }
        },
        6 => 0.5 * (frac(v[1], v[0]) + frac(v[2], v[3])),
        7 => 1.0 - 0.5 * (1.0 - frac(v[0], v[3])) * (1.0 - frac(v[2], v[3])),
        8 => 0.5 * frac(v[0], v[3]) * frac(v[2], v[3]),
        9 => 0.5 * (frac(v[0], v[1]) + frac(v[3], v[2])),
        11 => 1.0 - 0.5 * (1.0 - frac(v[1], v[2])) * (1.0 - frac(v[2], v[3])),
        12 => 0.5 * (frac(v[0], v[3]) + frac(v[2], v[1])),
        13 => 1.0 - 0.5 * (1.0 - frac(v[0], v[1])) * (1.0 - frac(v[1], v[2])),
        14 => 1.0 - 0.5 * (1.0 - frac(v[0], v[1])) * (1.0 - frac(v[0], v[3])),
        15 => 1.0,
        _ => {
            log::debug!("Hit unexpected state in the quad dispatch: case {case}.");
            0.0
        }
    }
}

/// The interface length of formula family `case`, for samples already relabeled for it.
pub(crate) fn canonical_quad_length(case: u8, v: &QuadSamples) -> Real {
    match case {
        0 | 15 => 0.0,
        1 => leg_length(frac(v[0], v[1]), frac(v[0], v[3])),
        2 => leg_length(frac(v[1], v[0]), frac(v[1], v[2])),
        3 => slanted_length(frac(v[0], v[3]), frac(v[1], v[2])),
        4 => leg_length(frac(v[2], v[1]), frac(v[2], v[3])),
        5 => match QuadSaddle::resolve(v) {
            QuadSaddle::Joined => {
                leg_length(1.0 - frac(v[0], v[1]), 1.0 - frac(v[1], v[2]))
                    + leg_length(1.0 - frac(v[3], v[0]), 1.0 - frac(v[3], v[2]))
            }
            QuadSaddle::Separated => {
                leg_length(frac(v[0], v[1]), frac(v[0], v[3]))
                    + leg_length(frac(v[2], v[1]), frac(v[2], v[3]))
            }
        },
        6 => slanted_length(frac(v[1], v[0]), frac(v[2], v[3])),
        7 => leg_length(1.0 - frac(v[0], v[3]), 1.0 - frac(v[2], v[3])),
        8 => leg_length(frac(v[0], v[3]), frac(v[2], v[3])),
        9 => slanted_length(frac(v[0], v[1]), frac(v[3], v[2])),
        11 => leg_length(1.0 - frac(v[1], v[2]), 1.0 - frac(v[2], v[3])),
        12 => slanted_length(frac(v[0], v[3]), frac(v[2], v[1])),
        13 => leg_length(1.0 - frac(v[0], v[1]), 1.0 - frac(v[1], v[2])),
        14 => leg_length(1.0 - frac(v[0], v[1]), 1.0 - frac(v[0], v[3])),
        _ => {
            log::debug!("Hit unexpected state in the quad dispatch: case {case}.");
            0.0
        }
    }
}
