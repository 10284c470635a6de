//! Crank-Nicolson (time-centered) scheme
//!
//! # Mathematical Background
//!
//! Averaging the explicit and implicit discretizations around the
//! half-step t_{j+½} gives
//!
//! ```text
//! A·u[j+1] = B·u[j]
//! ```
//!
//! where A carries 1 + 2r / −r, B carries 1 − 2r / r, and
//! r = α·Δt / (2·Δx²) — half the explicit ratio, reflecting the
//! half-step averaging.
//!
//! Unlike the implicit scheme, both matrices span the **full** point
//! range; the first and last rows of A and B are identity rows, so the
//! solved boundary entries equal the fixed boundary values exactly by
//! construction — no separate post-fix is needed.
//!
//! # Characteristics
//!
//! - **Order**: second-order in both time and space
//! - **Stability**: unconditional
//! - **Cost**: one full-sized matrix-vector product plus one solve per
//!   step

use crate::grid;
use crate::problem::HeatProblem;
use crate::solver;
use crate::solver::assembly;
use crate::solver::linear::{DenseLu, LinearSolver};
use crate::solver::{Discretization, HeatSolution, Scheme, SolveError};

/// Time-centered time-stepping scheme
///
/// Both coefficient matrices are assembled once before stepping; each
/// step computes b = B·u[j] and solves A·u[j+1] = b through the
/// [`LinearSolver`] collaborator (dense LU by default).
///
/// # Example
///
/// ```rust
/// use heat_rs::problem::HeatProblem;
/// use heat_rs::solver::{CrankNicolsonScheme, Discretization, Scheme};
///
/// let solution = CrankNicolsonScheme::new()
///     .solve(
///         &HeatProblem::heated_rod(),
///         &Discretization::with_total_time(0.25, 0.22, 5.0),
///     )
///     .unwrap();
///
/// // ⌊5.0 / 0.22⌋ = 22 steps
/// assert_eq!(solution.len(), 23);
/// ```
pub struct CrankNicolsonScheme {
    linear: Box<dyn LinearSolver>,
}

impl CrankNicolsonScheme {
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

impl Default for CrankNicolsonScheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheme for CrankNicolsonScheme {
    fn solve(
        &self,
        problem: &HeatProblem,
        disc: &Discretization,
    ) -> Result<HeatSolution, SolveError> {
        // ====== Step 1: Validation and setup ======

        let built = grid::build(problem, disc)?;
        let (x, t, mut u, warnings) = (built.x, built.t, built.u, built.warnings);

        // Half the explicit ratio: the scheme averages the two
        // half-step contributions
        let r = disc.diffusion_ratio(problem.diffusivity) / 2.0;
        let n_points = x.len();
        let steps = t.steps();

        // Assembled once over the full point range, Dirichlet rows
        // applied to both; immutable during stepping
        let (a, b_matrix) = assembly::crank_nicolson_pair(n_points, r);

        // ====== Step 2: Time-stepping ======

        for j in 0..steps {
            let layer = u.layer(j);

            // Full matrix-vector product; the identity boundary rows
            // of B pass the boundary values straight through to b
            let rhs = &b_matrix * &layer;

            let solved = self.linear.solve(&a, &rhs).map_err(|err| match err {
                SolveError::SingularSystem(msg) => SolveError::SingularSystem(format!(
                    "cannot advance to time layer {}: {}",
                    j + 1,
                    msg
                )),
                other => other,
            })?;

            solver::validate_layer(&solved, j + 1)?;

            // The identity rows of A guarantee solved boundary entries
            // equal the fixed values; the whole layer is written as-is
            u.set_layer(j + 1, &solved);
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
        "Crank-Nicolson"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
