//! Explicit (forward-time, centered-space) scheme
//!
//! # Mathematical Background
//!
//! Discretizing ∂u/∂t = α·∂²u/∂x² with a forward difference in time
//! and a centered difference in space gives the update
//!
//! ```text
//! u[j+1, i] = r·u[j, i−1] + (1 − 2r)·u[j, i] + r·u[j, i+1]
//! ```
//!
//! with r = α·Δt / Δx². Each new layer is computed directly from known
//! previous-layer values — there is no system to solve.
//!
//! # Characteristics
//!
//! - **Order**: first-order in time, second-order in space
//! - **Stability**: conditional, r ≤ 0.5
//! - **Cost**: O(Nx) per step, no linear solve
//!
//! # Stability
//!
//! When r > 0.5 the scheme may be unstable. The run is NOT blocked:
//! instability manifests as growing oscillation in the grid, and the
//! returned solution carries a
//! [`StabilityReport`](crate::solver::StabilityReport) so callers can
//! decide what to do with the result.

use crate::grid;
use crate::problem::HeatProblem;
use crate::solver;
use crate::solver::{
    Discretization, HeatSolution, Scheme, SolveError, StabilityReport,
    EXPLICIT_STABILITY_THRESHOLD,
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Forward-time centered-space time-stepping scheme
///
/// # Algorithm
///
/// 1. Validate problem and discretization
/// 2. Build the grid (initial layer and boundary columns imposed)
/// 3. For each step j = 0 … Nt−1: compute the interior of layer j+1
///    from layer j with the three-point stencil; boundaries keep their
///    fixed values
/// 4. Attach run metadata and the stability report, if any
///
/// # Example
///
/// ```rust
/// use heat_rs::problem::HeatProblem;
/// use heat_rs::solver::{Discretization, ExplicitScheme, Scheme};
///
/// let solution = ExplicitScheme::new()
///     .solve(&HeatProblem::heated_rod(), &Discretization::with_steps(0.25, 0.25, 5))
///     .unwrap();
///
/// // r = 0.25 ≤ 0.5: no stability report
/// assert!(solution.stability.is_none());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ExplicitScheme;

impl ExplicitScheme {
    /// Create a new explicit scheme
    pub fn new() -> Self {
        Self
    }
}

impl Scheme for ExplicitScheme {
    fn solve(
        &self,
        problem: &HeatProblem,
        disc: &Discretization,
    ) -> Result<HeatSolution, SolveError> {
        // ====== Step 1: Validation and setup ======

        // grid::build validates both inputs before allocating
        let built = grid::build(problem, disc)?;
        let (x, t, mut u, warnings) = (built.x, built.t, built.u, built.warnings);

        let r = disc.diffusion_ratio(problem.diffusivity);
        let n_points = x.len();
        let steps = t.steps();

        // The stability check is advisory: the loop below runs either
        // way, and r > 0.5 shows up as oscillation in the grid
        let stability = if r > EXPLICIT_STABILITY_THRESHOLD {
            Some(StabilityReport {
                ratio: r,
                threshold: EXPLICIT_STABILITY_THRESHOLD,
            })
        } else {
            None
        };

        // ====== Step 2: Time-stepping ======

        for j in 0..steps {
            let previous = u.layer(j);

            #[cfg(feature = "parallel")]
            let interior: Vec<f64> = if n_points - 2 >= solver::parallel_threshold() {
                (1..n_points - 1)
                    .into_par_iter()
                    .map(|i| {
                        r * previous[i - 1] + (1.0 - 2.0 * r) * previous[i] + r * previous[i + 1]
                    })
                    .collect()
            } else {
                (1..n_points - 1)
                    .map(|i| {
                        r * previous[i - 1] + (1.0 - 2.0 * r) * previous[i] + r * previous[i + 1]
                    })
                    .collect()
            };

            #[cfg(not(feature = "parallel"))]
            let interior: Vec<f64> = (1..n_points - 1)
                .map(|i| r * previous[i - 1] + (1.0 - 2.0 * r) * previous[i] + r * previous[i + 1])
                .collect();

            let interior = nalgebra::DVector::from_vec(interior);

            // Fail before writing so an already-broken layer never
            // lands in the grid
            solver::validate_layer(&interior, j + 1)?;

            u.set_interior(j + 1, &interior);
        }

        // ====== Step 3: Build result ======

        let mut solution = HeatSolution::new(x, t, u);
        solution.stability = stability;
        solution.warnings = warnings;

        solution.add_metadata("scheme", self.name());
        solution.add_metadata("r", &r.to_string());
        solution.add_metadata("dx", &disc.dx.to_string());
        solution.add_metadata("dt", &disc.dt.to_string());
        solution.add_metadata("time steps", &steps.to_string());
        solution.add_metadata("initial profile", problem.initial.description());

        Ok(solution)
    }

    fn name(&self) -> &str {
        "Explicit (FTCS)"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
