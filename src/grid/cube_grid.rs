use super::{map_cells, sum_cells, validate};
use crate::fraction::{cube_interface_area, cube_volume_fraction};
use crate::math::{CubeSamples, Point, Real};
use crate::FractionError;
use alloc::vec::Vec;

/// Level-set samples on the nodes of a regular 3D grid.
///
/// Node `(i, j, k)` sits at `(i * h, j * h, k * h)` and its sample is stored at
/// `i + nx * (j + ny * k)`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct CubeGrid {
    dims: [usize; 3],
    spacing: Real,
    values: Vec<Real>,
}

impl CubeGrid {
    /// Creates a grid from its node dimensions, node spacing and x-fastest node samples.
    ///
    /// Fails under the same conditions as [`QuadGrid::try_new`](super::QuadGrid::try_new).
    pub fn try_new(
        dims: [usize; 3],
        spacing: Real,
        values: Vec<Real>,
    ) -> Result<Self, FractionError> {
        validate(&dims, spacing, &values)?;
        Ok(Self {
            dims,
            spacing,
            values,
        })
    }

    /// Samples `f` at the position of every node.
    pub fn from_fn(
        dims: [usize; 3],
        spacing: Real,
        mut f: impl FnMut(Point<Real>) -> Real,
    ) -> Result<Self, FractionError> {
        let mut values = Vec::with_capacity(dims[0] * dims[1] * dims[2]);
        for k in 0..dims[2] {
            for j in 0..dims[1] {
                for i in 0..dims[0] {
                    values.push(f(Point::new(i as Real, j as Real, k as Real) * spacing));
                }
            }
        }
        Self::try_new(dims, spacing, values)
    }

    /// The number of nodes along each axis.
    pub fn dims(&self) -> [usize; 3] {
        self.dims
    }

    /// The distance between adjacent nodes.
    pub fn spacing(&self) -> Real {
        self.spacing
    }

    /// The node samples, x-fastest.
    pub fn values(&self) -> &[Real] {
        &self.values
    }

    /// The number of cells along each axis.
    pub fn cell_dims(&self) -> [usize; 3] {
        [self.dims[0] - 1, self.dims[1] - 1, self.dims[2] - 1]
    }

    /// The total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cell_dims().iter().product()
    }

    /// The corner samples of cell `(i, j, k)`, in the order `v0..v7` of the unit cube.
    ///
    /// # Panics
    /// If the cell is out of the grid.
    pub fn cell_samples(&self, cell: [usize; 3]) -> CubeSamples {
        let [cx, cy, cz] = self.cell_dims();
        assert!(
            cell[0] < cx && cell[1] < cy && cell[2] < cz,
            "cell {cell:?} is out of the grid"
        );

        let sx = 1;
        let sy = self.dims[0];
        let sz = self.dims[0] * self.dims[1];
        let base = cell[0] + cell[1] * sy + cell[2] * sz;
        [
            self.values[base],
            self.values[base + sx],
            self.values[base + sx + sy],
            self.values[base + sy],
            self.values[base + sz],
            self.values[base + sx + sz],
            self.values[base + sx + sy + sz],
            self.values[base + sy + sz],
        ]
    }

    fn linear_cell_samples(&self, id: usize) -> CubeSamples {
        let [cx, cy, _] = self.cell_dims();
        self.cell_samples([id % cx, (id / cx) % cy, id / (cx * cy)])
    }

    /// The inside volume fraction of every cell, x-fastest.
    pub fn volume_fractions(&self) -> Vec<Real> {
        log::trace!("Computing the volume fractions of {} cube cells.", self.cell_count());
        map_cells(self.cell_count(), |id| {
            cube_volume_fraction(self.linear_cell_samples(id))
        })
    }

    /// The interface area inside every cell of the unit grid, x-fastest.
    ///
    /// Multiply by the squared [`Self::spacing`] for areas in grid units.
    pub fn interface_areas(&self) -> Vec<Real> {
        log::trace!("Computing the interface areas of {} cube cells.", self.cell_count());
        map_cells(self.cell_count(), |id| {
            cube_interface_area(self.linear_cell_samples(id))
        })
    }

    /// The total inside volume of the grid.
    pub fn inside_volume(&self) -> Real {
        let fractions = sum_cells(self.cell_count(), |id| {
            cube_volume_fraction(self.linear_cell_samples(id))
        });
        fractions * self.spacing * self.spacing * self.spacing
    }

    /// The total area of the interface over the grid.
    pub fn interface_area(&self) -> Real {
        let areas = sum_cells(self.cell_count(), |id| {
            cube_interface_area(self.linear_cell_samples(id))
        });
        areas * self.spacing * self.spacing
    }
}
