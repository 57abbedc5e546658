use crate::math::Real;

/// Where the zero of the linear interpolant between two edge samples lies.
///
/// `a` is the sample at the near endpoint and `b` the sample at the far one. The result is
/// always in `[0, 1]`:
///
/// - both samples inside (negative): `1`, the whole edge counts as inside;
/// - `a < 0 <= b`: `a / (a - b)`, measured from the near endpoint;
/// - `b < 0 <= a`: `b / (b - a)`, measured from the far endpoint;
/// - both samples outside: `0`.
///
/// A sample equal to zero is outside, so a division only happens when the two samples have
/// strictly different classifications and the denominator cannot vanish.
#[inline]
pub fn edge_fraction(a: Real, b: Real) -> Real {
    match (a < 0.0, b < 0.0) {
        (true, true) => 1.0,
        (true, false) => a / (a - b),
        (false, true) => b / (b - a),
        (false, false) => 0.0,
    }
}
