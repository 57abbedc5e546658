//! Scalar and simplex helpers shared by the 2D and 3D engines.

pub use self::edge_fraction::edge_fraction;
pub use self::simplex::{signed_volume, triangle_area2};
pub(crate) use self::consts::*;

mod consts;
mod edge_fraction;
mod simplex;
