use crate::math::{Point, Real};

/// Corner coordinates of the unit cube, in cube sample order.
///
/// Two layers along `z`, each numbered counter-clockwise when seen from `+z`.
pub const UNIT_CUBE_CORNERS: [[Real; 3]; 8] = [
    [0.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [1.0, 1.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    [1.0, 0.0, 1.0],
    [1.0, 1.0, 1.0],
    [0.0, 1.0, 1.0],
];

/// The position of the `i`-th corner of the unit cube.
#[inline]
pub fn corner_point(i: usize) -> Point<Real> {
    Point::from(UNIT_CUBE_CORNERS[i])
}
