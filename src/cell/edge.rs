use super::corner_point;
use crate::math::{CubeSamples, Point, Real};
use crate::utils::edge_fraction;

/// One of the twelve edges of the unit cube.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CubeEdge {
    /// The sample indices fed to [`edge_fraction`], near endpoint first.
    pub samples: [usize; 2],
    /// The corners the edge-crossing point is interpolated between.
    ///
    /// The fraction is measured from `endpoints[0]`. This is not always the corner of
    /// `samples[0]`: edges 2 and 6 run along `+x` while their samples are listed `+x` first.
    pub endpoints: [usize; 2],
}

impl CubeEdge {
    const fn new(samples: [usize; 2], endpoints: [usize; 2]) -> Self {
        Self { samples, endpoints }
    }
}

/// The twelve edges of the unit cube: four along `x` or `y` on the bottom face (0-3), the same
/// four on the top face (4-7), then the four vertical edges (8-11).
pub const CUBE_EDGES: [CubeEdge; 12] = [
    CubeEdge::new([0, 1], [0, 1]),
    CubeEdge::new([1, 2], [1, 2]),
    CubeEdge::new([2, 3], [3, 2]),
    CubeEdge::new([0, 3], [0, 3]),
    CubeEdge::new([4, 5], [4, 5]),
    CubeEdge::new([5, 6], [5, 6]),
    CubeEdge::new([6, 7], [7, 6]),
    CubeEdge::new([4, 7], [4, 7]),
    CubeEdge::new([0, 4], [0, 4]),
    CubeEdge::new([1, 5], [1, 5]),
    CubeEdge::new([2, 6], [2, 6]),
    CubeEdge::new([3, 7], [3, 7]),
];

/// Which end of an edge the crossing fraction is measured from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    /// The point sits at `t` from the first endpoint.
    Inside,
    /// The point sits at `1 - t` from the first endpoint.
    Outside,
}

/// The edge-crossing point of `edge` for the given cube samples.
///
/// The two sides are reflections of each other along the edge. Canonical-case formulas pick
/// whichever keeps their triangle fans consistently wound.
#[inline]
pub fn edge_point(edge: usize, samples: &CubeSamples, side: Side) -> Point<Real> {
    let CubeEdge {
        samples: [a, b],
        endpoints: [from, to],
    } = CUBE_EDGES[edge];
    let t = edge_fraction(samples[a], samples[b]);
    let t = match side {
        Side::Inside => t,
        Side::Outside => 1.0 - t,
    };
    let from = corner_point(from);
    from + (corner_point(to) - from) * t
}
