use super::{map_cells, sum_cells, validate};
use crate::fraction::{quad_area_fraction, quad_interface_length};
use crate::math::{QuadSamples, Real};
use crate::FractionError;
use alloc::vec::Vec;
use na::Point2;

/// Level-set samples on the nodes of a regular 2D grid.
///
/// Node `(i, j)` sits at `(i * h, j * h)` and its sample is stored at `i + j * nx`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct QuadGrid {
    dims: [usize; 2],
    spacing: Real,
    values: Vec<Real>,
}

impl QuadGrid {
    /// Creates a grid from its node dimensions, node spacing and x-fastest node samples.
    ///
    /// Fails if an axis has fewer than two nodes, if `values` does not hold one sample per
    /// node, if `spacing` is not strictly positive, or if a sample is not finite.
    pub fn try_new(
        dims: [usize; 2],
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
        dims: [usize; 2],
        spacing: Real,
        mut f: impl FnMut(Point2<Real>) -> Real,
    ) -> Result<Self, FractionError> {
        let mut values = Vec::with_capacity(dims[0] * dims[1]);
        for j in 0..dims[1] {
            for i in 0..dims[0] {
                values.push(f(Point2::new(i as Real, j as Real) * spacing));
            }
        }
        Self::try_new(dims, spacing, values)
    }

    /// The number of nodes along each axis.
    pub fn dims(&self) -> [usize; 2] {
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
    pub fn cell_dims(&self) -> [usize; 2] {
        [self.dims[0] - 1, self.dims[1] - 1]
    }

    /// The total number of cells.
    pub fn cell_count(&self) -> usize {
        let [cx, cy] = self.cell_dims();
        cx * cy
    }

    /// The corner samples of cell `(i, j)`, in the order `(i,j) (i+1,j) (i+1,j+1) (i,j+1)`.
    ///
    /// # Panics
    /// If the cell is out of the grid.
    pub fn cell_samples(&self, cell: [usize; 2]) -> QuadSamples {
        let [cx, cy] = self.cell_dims();
        assert!(cell[0] < cx && cell[1] < cy, "cell {cell:?} is out of the grid");

        let nx = self.dims[0];
        let base = cell[0] + cell[1] * nx;
        [
            self.values[base],
            self.values[base + 1],
            self.values[base + 1 + nx],
            self.values[base + nx],
        ]
    }

    fn linear_cell_samples(&self, id: usize) -> QuadSamples {
        let cx = self.dims[0] - 1;
        self.cell_samples([id % cx, id / cx])
    }

    /// The inside area fraction of every cell, x-fastest.
    pub fn area_fractions(&self) -> Vec<Real> {
        log::trace!("Computing the area fractions of {} quad cells.", self.cell_count());
        map_cells(self.cell_count(), |id| {
            quad_area_fraction(self.linear_cell_samples(id))
        })
    }

    /// The interface length inside every cell of the unit grid, x-fastest.
    ///
    /// Multiply by [`Self::spacing`] for lengths in grid units.
    pub fn interface_lengths(&self) -> Vec<Real> {
        log::trace!("Computing the interface lengths of {} quad cells.", self.cell_count());
        map_cells(self.cell_count(), |id| {
            quad_interface_length(self.linear_cell_samples(id))
        })
    }

    /// The total inside area of the grid.
    pub fn inside_area(&self) -> Real {
        let fractions = sum_cells(self.cell_count(), |id| {
            quad_area_fraction(self.linear_cell_samples(id))
        });
        fractions * self.spacing * self.spacing
    }

    /// The total length of the interface over the grid.
    pub fn interface_length(&self) -> Real {
        let lengths = sum_cells(self.cell_count(), |id| {
            quad_interface_length(self.linear_cell_samples(id))
        });
        lengths * self.spacing
    }
}
