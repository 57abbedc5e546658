//! Lookup tables mapping a raw sign pattern to the formula that evaluates it.
//!
//! Both tables are `const` data. A quad pattern maps to one of 16 formula families, possibly
//! after a quarter turn of its samples; a cube pattern maps to one of 23 canonical cases, a
//! [`CubeRotation`](crate::cell::CubeRotation) bringing the samples into the orientation that
//! case expects, and the [`TunnelTriangulation`] used by the tunnel case.

pub use self::cube_table::{
    cube_dispatch, CubeDispatch, TunnelTriangulation, CUBE_CANONICAL_INDICES, CUBE_CASE_COUNT,
};
pub use self::quad_table::{quad_dispatch, QuadDispatch, QUAD_CASE_COUNT};

mod cube_table;
mod quad_table;
