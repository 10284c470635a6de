//! Grid construction
//!
//! This module builds the discretized space-time grid for a heat
//! problem:
//!
//! - [`SpatialAxis`] / [`TemporalAxis`]: uniform axes
//! - [`SolutionGrid`]: dense u(x_i, t_j) storage
//! - [`build`]: allocate the grid with initial and boundary values
//!   imposed
//!
//! # Construction Order
//!
//! The builder fills the grid in three steps:
//!
//! 1. every entry starts at zero,
//! 2. the t = 0 row is set to the initial profile sampled at each
//!    spatial coordinate,
//! 3. the x = 0 and x = L columns are set to the fixed boundary
//!    values for all time layers.
//!
//! Step 3 runs last, so a profile that disagrees with a boundary value
//! at a corner is overruled by the boundary — the corner entries
//! always hold the configured boundary values.

mod axis;
mod solution;

pub use axis::{SpatialAxis, TemporalAxis};
pub use solution::SolutionGrid;

use crate::problem::HeatProblem;
use crate::solver::{Discretization, SolveError};

/// Discretized domain: axes plus the allocated solution grid
///
/// `warnings` carries non-fatal discretization notices (currently the
/// whole-step truncation of a domain length that is not an exact
/// multiple of dx). Schemes copy them onto the returned solution.
#[derive(Debug)]
pub struct SpaceTimeGrid {
    /// Spatial axis over [0, L]
    pub x: SpatialAxis,

    /// Temporal axis over [0, Nt·dt]
    pub t: TemporalAxis,

    /// Solution storage with initial and boundary values imposed
    pub u: SolutionGrid,

    /// Non-fatal discretization notices
    pub warnings: Vec<String>,
}

/// Build the space-time grid for a problem and discretization
///
/// Validates both inputs first; any non-positive or non-finite step,
/// or a step count that resolves to zero, fails with
/// [`SolveError::InvalidInput`] before anything is allocated.
///
/// # Example
///
/// ```rust
/// use heat_rs::grid;
/// use heat_rs::problem::HeatProblem;
/// use heat_rs::solver::Discretization;
///
/// let problem = HeatProblem::heated_rod();
/// let disc = Discretization::with_steps(0.25, 0.25, 5);
///
/// let built = grid::build(&problem, &disc).unwrap();
/// assert_eq!(built.x.len(), 17);
/// assert_eq!(built.t.len(), 6);
/// assert_eq!(built.u.value(0, 16), 8.0); // boundary overrules profile corner
/// ```
pub fn build(problem: &HeatProblem, disc: &Discretization) -> Result<SpaceTimeGrid, SolveError> {
    problem.validate()?;
    disc.validate()?;

    let x = SpatialAxis::uniform(problem.length, disc.dx)?;
    let steps = disc.horizon.steps(disc.dt)?;
    let t = TemporalAxis::uniform(disc.dt, steps)?;

    let mut warnings = Vec::new();
    if let Some(rest) = x.truncation() {
        warnings.push(format!(
            "domain length {} is not an exact multiple of dx = {}; \
             truncated to {} intervals ({:e} left over)",
            problem.length,
            disc.dx,
            x.len() - 1,
            rest
        ));
    }

    let mut u = SolutionGrid::zeros(t.len(), x.len());

    let initial = problem.initial.sample(&x);
    u.set_layer(0, &initial);
    u.set_boundary_columns(problem.left_value, problem.right_value);

    Ok(SpaceTimeGrid { x, t, u, warnings })
}

// =================================================================================================
// Tests
// =================================================================================================
