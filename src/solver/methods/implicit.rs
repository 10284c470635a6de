//! Implicit (backward-time, centered-space) scheme
//!
//! # Mathematical Background
//!
//! Discretizing ∂u/∂t = α·∂²u/∂x² with a backward difference in time
//! couples the unknowns of the new layer:
//!
//! ```text
//! −r·u[j+1, i−1] + (1 + 2r)·u[j+1, i] − r·u[j+1, i+1] = u[j, i]
//! ```
//!
//! with r = α·Δt / Δx². Only the interior points are solved for; the
//! boundary points are fixed Dirichlet values, so their known
//! contributions move to the right-hand side:
//!
//! ```text
//! b[0]    = u[j, 1]      + r·u(0, t)
//! b[last] = u[j, Nx−1]   + r·u(L, t)
//! ```
//!
//! The boundary values are time-invariant here, so reading them "at
//! the new layer" (the backward-time formulation) and "at the old
//! layer" coincide.
//!
//! # Characteristics
//!
//! - **Order**: first-order in time, second-order in space
//! - **Stability**: unconditional — any r works
//! - **Cost**: one interior-sized tridiagonal solve per step

use nalgebra::DVector;

use crate::grid;
use crate::problem::HeatProblem;
use crate::solver;
use crate::solver::assembly;
use crate::solver::linear::{DenseLu, LinearSolver};
use crate::solver::{Discretization, HeatSolution, Scheme, SolveError};

/// Backward-time centered-space time-stepping scheme
///
/// The coefficient matrix is assembled once before stepping and reused
/// for every layer; only the right-hand side changes per step. The
/// linear solve is delegated to a [`LinearSolver`] collaborator
/// (dense LU by default, swappable via [`ImplicitScheme::with_solver`]).
///
/// # Example
///
/// ```rust
/// use heat_rs::problem::HeatProblem;
/// use heat_rs::solver::{Discretization, ImplicitScheme, Scheme, Thomas};
///
/// let problem = HeatProblem::heated_rod();
/// let disc = Discretization::with_steps(0.25, 0.25, 5);
///
/// // Default dense LU collaborator
/// let solution = ImplicitScheme::new().solve(&problem, &disc).unwrap();
///
/// // Or the O(n) Thomas algorithm
/// let solution = ImplicitScheme::with_solver(Box::new(Thomas::new()))
///     .solve(&problem, &disc)
///     .unwrap();
/// assert_eq!(solution.len(), 6);
/// ```
pub struct ImplicitScheme {
    linear: Box<dyn LinearSolver>,
}

impl ImplicitScheme {
    /// Create with the default dense LU collaborator
    pub fn new() -> Self {
        Self {
            linear: Box::new(DenseLu::new()),
        }
    }

    /// Create with a custom linear-solver collaborator
    pub fn with_solver(linear: Box<dyn LinearSolver>) -> Self {
        Self { linear }
    }
}

impl Default for ImplicitScheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheme for ImplicitScheme {
    fn solve(
        &self,
        problem: &HeatProblem,
        disc: &Discretization,
    ) -> Result<HeatSolution, SolveError> {
        // ====== Step 1: Validation and setup ======

        let built = grid::build(problem, disc)?;
        let (x, t, mut u, warnings) = (built.x, built.t, built.u, built.warnings);

        let r = disc.diffusion_ratio(problem.diffusivity);
        let n_interior = x.interior_len();
        let steps = t.steps();

        if n_interior == 0 {
            return Err(SolveError::InvalidInput(
                "the grid has no interior points to solve for".to_string(),
            ));
        }

        // Assembled once; the matrix depends only on r, not on time or
        // solution state
        let a = assembly::implicit_interior_matrix(n_interior, r);

        // ====== Step 2: Time-stepping ======

        let (left, right) = problem.boundary();

        for j in 0..steps {
            // Right-hand side: previous layer's interior values with
            // the known boundary contributions folded in
            let mut b = DVector::from_fn(n_interior, |k, _| u.value(j, k + 1));
            b[0] += r * left;
            b[n_interior - 1] += r * right;

            let solved = self.linear.solve(&a, &b).map_err(|err| match err {
                SolveError::SingularSystem(msg) => SolveError::SingularSystem(format!(
                    "cannot advance to time layer {}: {}",
                    j + 1,
                    msg
                )),
                other => other,
            })?;

            solver::validate_layer(&solved, j + 1)?;

            // Boundary entries of the new layer stay at their fixed
            // values; only the solved interior is written
            u.set_interior(j + 1, &solved);
        }

        // ====== Step 3: Build result ======

        let mut solution = HeatSolution::new(x, t, u);
        solution.warnings = warnings;

        solution.add_metadata("scheme", self.name());
        solution.add_metadata("linear solver", self.linear.name());
        solution.add_metadata("r", &r.to_string());
        solution.add_metadata("dx", &disc.dx.to_string());
        solution.add_metadata("dt", &disc.dt.to_string());
        solution.add_metadata("time steps", &steps.to_string());
        solution.add_metadata("initial profile", problem.initial.description());

        Ok(solution)
    }

    fn name(&self) -> &str {
        "Implicit (BTCS)"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
