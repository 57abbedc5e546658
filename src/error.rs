use crate::math::Real;

/// Invalid input to one of the checked entry points or to a grid constructor.
///
/// The fraction kernels themselves never fail; only the slice and grid surfaces validate
/// their input.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum FractionError {
    /// A sample slice does not have one sample per cell corner.
    #[error("expected {expected} corner samples, found {found}.")]
    SampleCount {
        /// The number of corners of the cell.
        expected: usize,
        /// The length of the given slice.
        found: usize,
    },
    /// A sample is NaN or infinite.
    #[error("the sample {index} is not finite.")]
    NonFiniteSample {
        /// The position of the offending sample.
        index: usize,
    },
    /// A grid needs at least two nodes along each axis to contain a cell.
    #[error("a grid needs at least two nodes along each axis, found {nodes} along axis {axis}.")]
    GridTooSmall {
        /// The offending axis: 0 for x, 1 for y, 2 for z.
        axis: usize,
        /// The number of nodes along that axis.
        nodes: usize,
    },
    /// The number of node values does not match the grid dimensions.
    #[error("the grid dimensions require {expected} node values, found {found}.")]
    GridSize {
        /// The product of the node dimensions.
        expected: usize,
        /// The number of values given.
        found: usize,
    },
    /// The node spacing must be finite and strictly positive.
    #[error("invalid node spacing {0}.")]
    InvalidSpacing(Real),
}
