use crate::math::{CubeSamples, QuadSamples, Real};

#[inline]
fn sign_mask(samples: &[Real]) -> usize {
    samples
        .iter()
        .enumerate()
        .fold(0, |mask, (i, s)| if *s < 0.0 { mask | (1 << i) } else { mask })
}

/// The marching-squares table index of a quad: bit `i` is set iff `samples[i] < 0`.
///
/// The comparison is strict: a sample equal to zero is classified as outside.
#[inline]
pub fn quad_index(samples: &QuadSamples) -> usize {
    sign_mask(samples)
}

/// The marching-cubes table index of a cube: bit `i` is set iff `samples[i] < 0`.
///
/// The comparison is strict: a sample equal to zero is classified as outside.
#[inline]
pub fn cube_index(samples: &CubeSamples) -> usize {
    sign_mask(samples)
}
