//! Conventions of the unit cell: corner layout, sign classification, rotations and edges.

pub use self::corners::{corner_point, UNIT_CUBE_CORNERS};
pub use self::edge::{edge_point, CubeEdge, Side, CUBE_EDGES};
pub use self::rotation::{rotate_cube_samples, rotate_quad_samples, CubeRotation, QUAD_ROTATIONS};
pub use self::sign_mask::{cube_index, quad_index};

mod corners;
mod edge;
mod rotation;
mod sign_mask;
