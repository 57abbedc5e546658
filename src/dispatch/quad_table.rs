/// The number of quad formula families, trivial ones included.
pub const QUAD_CASE_COUNT: usize = 16;

/// The quad formula family and sample relabeling for one sign pattern.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct QuadDispatch {
    /// The formula family, in `[0, 16)`.
    pub case: u8,
    /// Index into [`QUAD_ROTATIONS`](crate::cell::QUAD_ROTATIONS).
    pub rotation: u8,
}

const fn d(case: u8, rotation: u8) -> QuadDispatch {
    QuadDispatch { case, rotation }
}

// Every pattern has its own formula except the second checkerboard, which is the first one
// seen after a quarter turn.
const QUAD_DISPATCH: [QuadDispatch; 16] = [
    d(0, 0),
    d(1, 0),
    d(2, 0),
    d(3, 0),
    d(4, 0),
    d(5, 0),
    d(6, 0),
    d(7, 0),
    d(8, 0),
    d(9, 0),
    d(5, 1),
    d(11, 0),
    d(12, 0),
    d(13, 0),
    d(14, 0),
    d(15, 0),
];

/// The dispatch entry of the quad sign pattern `index`.
///
/// # Panics
/// If `index >= 16`.
#[inline]
pub fn quad_dispatch(index: usize) -> QuadDispatch {
    QUAD_DISPATCH[index]
}
