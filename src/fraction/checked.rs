use crate::math::{CubeSamples, QuadSamples, Real};
use crate::FractionError;

fn checked_samples<const N: usize>(samples: &[Real]) -> Result<[Real; N], FractionError> {
    let samples: [Real; N] = samples
        .try_into()
        .map_err(|_| FractionError::SampleCount {
            expected: N,
            found: samples.len(),
        })?;

    match samples.iter().position(|s| !s.is_finite()) {
        Some(index) => Err(FractionError::NonFiniteSample { index }),
        None => Ok(samples),
    }
}

/// Validates a slice of quad corner samples.
///
/// The slice must hold exactly four finite samples, in the order
/// `(i,j) (i+1,j) (i+1,j+1) (i,j+1)`.
pub fn quad_samples(samples: &[Real]) -> Result<QuadSamples, FractionError> {
    checked_samples(samples)
}

/// Validates a slice of cube corner samples.
///
/// The slice must hold exactly eight finite samples, in the order `v0..v7` of the unit cube.
pub fn cube_samples(samples: &[Real]) -> Result<CubeSamples, FractionError> {
    checked_samples(samples)
}
