use crate::math::{Point, Real};

/// Six times the signed volume of the tetrahedron `(0, p, q, r)`.
///
/// Computed as `((q - p) x (p - r)) . p`, the cone from the origin over the triangle `pqr`.
/// Summing it over a closed fan of triangles gives six times the enclosed volume.
#[inline]
pub fn signed_volume(p: &Point<Real>, q: &Point<Real>, r: &Point<Real>) -> Real {
    (q - p).cross(&(p - r)).dot(&p.coords)
}

/// Twice the area of the triangle `pqr`.
#[inline]
pub fn triangle_area2(p: &Point<Real>, q: &Point<Real>, r: &Point<Real>) -> Real {
    (q - p).cross(&(r - p)).norm()
}
