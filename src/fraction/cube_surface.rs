//! The cut interface of each canonical cube case, as fans of triangles over edge crossings.

use crate::cell::{edge_point, Side};
use crate::dispatch::TunnelTriangulation;
use crate::math::{CubeSamples, Real};
use crate::utils::{signed_volume, triangle_area2};

/// A triangle vertex: the crossing on `edge`, measured from `side`.
pub(crate) type Vertex = (usize, Side);
pub(crate) type Triangle = [Vertex; 3];

const fn i(edge: usize) -> Vertex {
    (edge, Side::Inside)
}

const fn o(edge: usize) -> Vertex {
    (edge, Side::Outside)
}

const CASE_1: &[Triangle] = &[[i(0), i(8), i(3)]];
const CASE_2: &[Triangle] = &[[i(1), i(8), i(3)], [i(9), i(8), i(1)]];
const CASE_3: &[Triangle] = &[[o(9), i(5), o(4)], [i(0), i(8), i(3)]];
const CASE_4: &[Triangle] = &[[i(0), i(8), i(3)], [o(5), o(10), o(6)]];
const CASE_5: &[Triangle] = &[
    [o(3), i(9), o(0)],
    [o(3), i(11), i(9)],
    [i(11), i(10), i(9)],
];
const CASE_6: &[Triangle] = &[
    [i(1), i(8), i(3)],
    [i(1), i(9), i(8)],
    [o(5), o(10), o(6)],
];
const CASE_7: &[Triangle] = &[
    [i(1), i(9), o(0)],
    [o(5), o(10), o(6)],
    [o(8), i(4), i(7)],
];
const CASE_8: &[Triangle] = &[[i(9), i(8), i(10)], [i(10), i(8), i(11)]];
pub(crate) const CASE_9_PRIMARY: &[Triangle] = &[
    [i(10), o(7), i(6)],
    [o(1), o(7), i(10)],
    [o(1), i(8), o(7)],
    [o(1), i(0), i(8)],
];
pub(crate) const CASE_9_ALTERNATE: &[Triangle] = &[
    [i(10), o(1), i(0)],
    [i(6), i(10), i(0)],
    [i(6), i(0), i(8)],
    [i(6), i(8), o(7)],
];
const CASE_10: &[Triangle] = &[
    [o(3), i(6), i(2)],
    [o(3), o(7), i(6)],
    [i(1), i(5), o(0)],
    [i(5), o(4), o(0)],
];
pub(crate) const CASE_11: &[Triangle] = &[
    [i(0), i(8), i(11)],
    [i(0), i(11), o(5)],
    [i(0), o(5), o(1)],
    [o(5), i(11), o(6)],
];
const CASE_12: &[Triangle] = &[
    [i(4), i(7), o(8)],
    [i(9), o(0), i(11)],
    [i(9), i(11), i(10)],
    [i(11), o(0), o(3)],
];
const CASE_13: &[Triangle] = &[
    [o(0), i(1), i(9)],
    [i(4), i(7), o(8)],
    [i(2), o(3), i(11)],
    [o(5), o(10), o(6)],
];
pub(crate) const CASE_14: &[Triangle] = &[
    [o(0), o(3), o(7)],
    [o(0), o(7), i(10)],
    [o(0), i(10), i(9)],
    [i(6), i(10), o(7)],
];
pub(crate) const CASE_15_SHEET: &[Triangle] = &[
    [o(1), i(6), i(10)],
    [o(1), o(7), i(6)],
    [o(1), i(0), o(7)],
    [i(8), o(7), i(0)],
];
const CASE_15_CORNER: &[Triangle] = &[[o(9), i(5), o(4)]];
pub(crate) const CASE_16: &[Triangle] = &[
    [o(1), o(3), i(6)],
    [o(1), i(6), i(10)],
    [o(3), o(8), i(6)],
    [i(5), i(6), o(9)],
    [o(8), o(9), i(6)],
];
const CASE_17: &[Triangle] = &[
    [i(3), i(0), o(9)],
    [i(3), o(9), o(11)],
    [o(11), o(9), o(10)],
];
const CASE_18: &[Triangle] = &[[o(0), o(3), o(8)], [i(5), i(6), i(10)]];
pub(crate) const CASE_19: &[Triangle] = &[
    [o(8), i(4), o(5)],
    [o(8), o(5), o(3)],
    [i(9), o(0), o(5)],
    [o(0), o(3), o(5)],
];
const CASE_20: &[Triangle] = &[[o(1), o(3), o(8)], [o(9), o(1), o(8)]];
const CASE_21: &[Triangle] = &[[o(0), o(3), o(8)]];

/// The triangle sheets making up the interface of a canonical case.
///
/// Empty for the two trivial cases and for out-of-range ids.
pub(crate) fn interface_sheets(
    case: u8,
    tunnel: TunnelTriangulation,
) -> &'static [&'static [Triangle]] {
    match case {
        1 => &[CASE_1],
        2 => &[CASE_2],
        3 => &[CASE_3],
        4 => &[CASE_4],
        5 => &[CASE_5],
        6 => &[CASE_6],
        7 => &[CASE_7],
        8 => &[CASE_8],
        9 => match tunnel {
            TunnelTriangulation::Primary => &[CASE_9_PRIMARY],
            TunnelTriangulation::Alternate => &[CASE_9_ALTERNATE],
        },
        10 => &[CASE_10],
        11 => &[CASE_11],
        12 => &[CASE_12],
        13 => &[CASE_13],
        14 => &[CASE_14],
        15 => &[CASE_15_SHEET, CASE_15_CORNER],
        16 => &[CASE_16],
        17 => &[CASE_17],
        18 => &[CASE_18],
        19 => &[CASE_19],
        20 => &[CASE_20],
        21 => &[CASE_21],
        _ => &[],
    }
}

/// Twice the total area of a triangle fan.
pub(crate) fn fan_area2(samples: &CubeSamples, fan: &[Triangle]) -> Real {
    fan.iter().fold(0.0, |acc, [a, b, c]| {
        let a = edge_point(a.0, samples, a.1);
        let b = edge_point(b.0, samples, b.1);
        let c = edge_point(c.0, samples, c.1);
        acc + triangle_area2(&a, &b, &c)
    })
}

/// Six times the signed volume of the cone from the origin over a triangle fan.
pub(crate) fn fan_volume6(samples: &CubeSamples, fan: &[Triangle]) -> Real {
    fan.iter().fold(0.0, |acc, [a, b, c]| {
        let a = edge_point(a.0, samples, a.1);
        let b = edge_point(b.0, samples, b.1);
        let c = edge_point(c.0, samples, c.1);
        acc + signed_volume(&a, &b, &c)
    })
}

/// The interface area of a canonical case, for samples already in canonical orientation.
pub(crate) fn canonical_interface_area(
    case: u8,
    tunnel: TunnelTriangulation,
    samples: &CubeSamples,
) -> Real {
    if usize::from(case) >= crate::dispatch::CUBE_CASE_COUNT {
        log::debug!("Hit unexpected state in the cube dispatch: canonical case {case}.");
        return 0.0;
    }

    let twice_area = interface_sheets(case, tunnel)
        .iter()
        .fold(0.0, |acc, fan| acc + fan_area2(samples, fan));
    0.5 * twice_area
}
