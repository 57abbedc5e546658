/*!
cutcell
========

**cutcell** computes how much of a square or cubic grid cell lies on the inside of an implicit
surface, given only the level-set values sampled at the cell corners.

The four entry points are [`quad_area_fraction`], [`quad_interface_length`],
[`cube_volume_fraction`] and [`cube_interface_area`]. Each one classifies the corner signs,
looks the pattern up in a dispatch table, rotates the samples into the orientation of a
canonical case and evaluates that case's closed-form formula.

# Corner ordering

The corner order is a binding contract. Samples given in another order still produce a value
in range, just the wrong one.

```text
 quad:  3 ──── 2        cube:     7 ──────── 6
        │      │                 /│         /│
        │      │                4 ──────── 5 │
        0 ──── 1                │ 3 ───────│─2
                                │/         │/
                                0 ──────── 1

 quad: (i,j) (i+1,j) (i+1,j+1) (i,j+1)
 cube: v0=(0,0,0) v1=(1,0,0) v2=(1,1,0) v3=(0,1,0)
       v4=(0,0,1) v5=(1,0,1) v6=(1,1,1) v7=(0,1,1)
```

A sample is *inside* iff it is strictly negative; a sample equal to zero is outside.
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![allow(clippy::excessive_precision)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[cfg(test)]
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod cell;
pub mod dispatch;
mod error;
pub mod fraction;
#[cfg(feature = "alloc")]
pub mod grid;
pub mod utils;

pub use self::error::FractionError;
pub use self::fraction::{
    cube_interface_area, cube_measures, cube_samples, cube_volume_fraction, quad_area_fraction,
    quad_interface_length, quad_measures, quad_samples, CubeMeasures, QuadMeasures,
};

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Point3, Vector3};

    /// The point type of the unit cube.
    pub use Point3 as Point;

    /// The vector type of the unit cube.
    pub use Vector3 as Vector;

    /// The four level-set samples of a quad, in the order `(i,j) (i+1,j) (i+1,j+1) (i,j+1)`.
    pub type QuadSamples = [Real; 4];

    /// The eight level-set samples of a cube, in the order `v0..v7` of the unit cube.
    pub type CubeSamples = [Real; 8];
}
