//! Dense space-time solution storage
//!
//! # Indexing Convention
//!
//! The grid is stored as a [`DMatrix`] with **rows = time layers** and
//! **columns = spatial points**: `grid.value(j, i)` is u(x_i, t_j).
//! This convention is part of the public contract so that presenters
//! (tables, CSV, plots) can be swapped without touching numerical
//! code.

use nalgebra::{DMatrix, DVector};

/// 2-D solution grid u(x_i, t_j)
///
/// Invariants maintained by the grid builder and the schemes:
/// - row 0 holds the initial profile sampled at each spatial point,
/// - columns 0 and Nx hold the fixed boundary values in every row.
///
/// During time-stepping the grid is owned by the engine; afterwards it
/// is handed to presenters read-only as part of
/// [`HeatSolution`](crate::solver::HeatSolution).
#[derive(Debug, Clone, PartialEq)]
pub struct SolutionGrid {
    values: DMatrix<f64>,
}

impl SolutionGrid {
    /// Allocate a zeroed grid with `n_layers` rows and `n_points` columns
    pub fn zeros(n_layers: usize, n_points: usize) -> Self {
        Self {
            values: DMatrix::zeros(n_layers, n_points),
        }
    }

    /// Number of time layers (rows)
    pub fn n_layers(&self) -> usize {
        self.values.nrows()
    }

    /// Number of spatial points (columns)
    pub fn n_points(&self) -> usize {
        self.values.ncols()
    }

    /// Read u(x_i, t_j)
    pub fn value(&self, layer: usize, point: usize) -> f64 {
        self.values[(layer, point)]
    }

    /// Write u(x_i, t_j)
    pub fn set_value(&mut self, layer: usize, point: usize, value: f64) {
        self.values[(layer, point)] = value;
    }

    /// One time layer as an owned vector over the spatial points
    pub fn layer(&self, layer: usize) -> DVector<f64> {
        self.values.row(layer).transpose()
    }

    /// Overwrite an entire time layer
    ///
    /// # Panics
    ///
    /// Panics when `values` does not have exactly `n_points` entries.
    pub fn set_layer(&mut self, layer: usize, values: &DVector<f64>) {
        assert_eq!(
            values.len(),
            self.n_points(),
            "layer length must match the spatial point count"
        );
        for (i, &v) in values.iter().enumerate() {
            self.values[(layer, i)] = v;
        }
    }

    /// Write solved interior values into a layer, leaving boundaries alone
    ///
    /// # Panics
    ///
    /// Panics when `values` does not have exactly `n_points - 2` entries.
    pub fn set_interior(&mut self, layer: usize, values: &DVector<f64>) {
        assert_eq!(
            values.len(),
            self.n_points() - 2,
            "interior length must match the interior point count"
        );
        for (k, &v) in values.iter().enumerate() {
            self.values[(layer, k + 1)] = v;
        }
    }

    /// Fix the boundary columns to the given values for all layers
    pub fn set_boundary_columns(&mut self, left: f64, right: f64) {
        let last = self.n_points() - 1;
        for j in 0..self.n_layers() {
            self.values[(j, 0)] = left;
            self.values[(j, last)] = right;
        }
    }

    /// Raw matrix view for presenters (rows = time, columns = space)
    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.values
    }
}

// =================================================================================================
// Tests
// =================================================================================================
