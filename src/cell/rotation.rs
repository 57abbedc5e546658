use crate::math::{CubeSamples, QuadSamples};

// Row `r` lists, for each corner of the rotated cube, the corner whose sample it receives.
const CUBE_ROTATIONS: [[usize; 8]; 24] = [
    [0, 1, 2, 3, 4, 5, 6, 7],
    [4, 5, 1, 0, 7, 6, 2, 3],
    [7, 6, 5, 4, 3, 2, 1, 0],
    [3, 2, 6, 7, 0, 1, 5, 4],
    [4, 0, 3, 7, 5, 1, 2, 6],
    [5, 4, 7, 6, 1, 0, 3, 2],
    [1, 5, 6, 2, 0, 4, 7, 3],
    [3, 0, 1, 2, 7, 4, 5, 6],
    [2, 3, 0, 1, 6, 7, 4, 5],
    [1, 2, 3, 0, 5, 6, 7, 4],
    [0, 4, 5, 1, 3, 7, 6, 2],
    [0, 3, 7, 4, 1, 2, 6, 5],
    [2, 1, 5, 6, 3, 0, 4, 7],
    [5, 1, 0, 4, 6, 2, 3, 7],
    [5, 6, 2, 1, 4, 7, 3, 0],
    [7, 3, 2, 6, 4, 0, 1, 5],
    [2, 6, 7, 3, 1, 5, 4, 0],
    [7, 4, 0, 3, 6, 5, 1, 2],
    [1, 0, 4, 5, 2, 3, 7, 6],
    [3, 7, 4, 0, 2, 6, 5, 1],
    [6, 7, 3, 2, 5, 4, 0, 1],
    [6, 2, 1, 5, 7, 3, 0, 4],
    [4, 7, 6, 5, 0, 3, 2, 1],
    [6, 5, 4, 7, 2, 1, 0, 3],
];

/// The quad relabelings used by the quad dispatch table: identity and one quarter turn.
pub const QUAD_ROTATIONS: [[usize; 4]; 2] = [[0, 1, 2, 3], [1, 2, 3, 0]];

/// One of the 24 proper rotations of the cube, acting on corner labels.
///
/// Rotations are fixed relabelings of the standard corner numbering, not matrices: applying one
/// to a sample vector only reorders it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct CubeRotation(u8);

impl CubeRotation {
    /// The number of proper rotations of the cube.
    pub const COUNT: usize = 24;

    /// The rotation that leaves every corner in place.
    pub const IDENTITY: Self = Self(0);

    /// The rotation with the given table id, if `id < 24`.
    pub fn new(id: u8) -> Option<Self> {
        (usize::from(id) < Self::COUNT).then_some(Self(id))
    }

    pub(crate) const fn from_table(id: u8) -> Self {
        assert!((id as usize) < Self::COUNT);
        Self(id)
    }

    /// Iterates through all 24 rotations, identity first.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::COUNT as u8).map(Self)
    }

    /// The table id of this rotation.
    pub fn id(self) -> u8 {
        self.0
    }

    /// For each corner of the rotated cube, the source corner it reads from.
    pub fn permutation(self) -> &'static [usize; 8] {
        &CUBE_ROTATIONS[usize::from(self.0)]
    }

    /// Reorders per-corner values: `result[i] = values[self.permutation()[i]]`.
    #[inline]
    pub fn apply<T: Copy>(self, values: &[T; 8]) -> [T; 8] {
        let perm = self.permutation();
        core::array::from_fn(|i| values[perm[i]])
    }

    /// The sign-pattern index of the rotated samples, given the index of the unrotated ones.
    pub fn apply_to_index(self, index: usize) -> usize {
        self.permutation()
            .iter()
            .enumerate()
            .fold(0, |mask, (i, &src)| mask | (((index >> src) & 1) << i))
    }
}

/// Reorders cube samples by the given rotation.
#[inline]
pub fn rotate_cube_samples(samples: &CubeSamples, rotation: CubeRotation) -> CubeSamples {
    rotation.apply(samples)
}

/// Reorders quad samples by one of the [`QUAD_ROTATIONS`].
#[inline]
pub fn rotate_quad_samples(samples: &QuadSamples, rotation: usize) -> QuadSamples {
    let perm = &QUAD_ROTATIONS[rotation];
    core::array::from_fn(|i| samples[perm[i]])
}
