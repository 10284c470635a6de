//! Numerical schemes
//!
//! This module provides the time-stepping engines for the 1-D heat
//! equation and the shared types they need.
//!
//! # Core Concepts
//!
//! The architecture separates concerns into three layers:
//!
//! 1. **Problem** ([`HeatProblem`](crate::problem::HeatProblem)) —
//!    WHAT to solve: domain, diffusivity, boundary values, initial
//!    profile.
//! 2. **Discretization** ([`Discretization`]) — HOW to solve: step
//!    sizes and the time horizon.
//! 3. **Scheme** ([`Scheme`] trait) — the numerical method advancing
//!    the grid one time layer per step.
//!
//! The same problem can be solved with different schemes and the same
//! scheme can be applied to different problems, which is what the
//! cross-scheme consistency tests rely on.
//!
//! # Module Organization
//!
//! - **`traits`**: [`Scheme`], [`Discretization`], [`TimeHorizon`],
//!   [`HeatSolution`], [`StabilityReport`], [`SolveError`]
//! - **`assembly`**: coefficient matrix construction
//! - **`linear`**: the linear-solver collaborator ([`DenseLu`],
//!   [`Thomas`])
//! - **`methods`**: the three schemes — [`ExplicitScheme`],
//!   [`ImplicitScheme`], [`CrankNicolsonScheme`]
//!
//! # Scheme Selection
//!
//! - **Explicit (FTCS)**: no linear solve, O(Nx) per step, but only
//!   conditionally stable (r ≤ 0.5). A run with r > 0.5 still
//!   executes and carries a [`StabilityReport`].
//! - **Implicit (BTCS)**: one tridiagonal solve per step over the
//!   interior points; unconditionally stable.
//! - **Crank-Nicolson**: time-centered average of the two; one solve
//!   per step over the full point range, second-order accurate in
//!   time.

// =================================================================================================
// Module Declarations
// =================================================================================================
pub mod assembly;
pub mod linear;
mod methods;
mod traits;

// =================================================================================================
// Parallel Execution Threshold
// =================================================================================================
//
// Deciding *when* to hand the interior update off to Rayon is a
// numerical-execution concern, so it lives here rather than with the
// grid. The threshold is stored in an AtomicUsize so that it can be
// changed at runtime (useful in benchmarks and tests) without a mutex
// on every step. Relaxed ordering is sufficient: the value is a
// performance hint, not a synchronisation point.
// =================================================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

/// Default number of interior points above which the explicit scheme
/// switches to parallel iteration (with the `parallel` feature).
///
/// Below this point the overhead of Rayon's thread-pool dispatch
/// outweighs the per-point work of the three-term update.
const DEFAULT_PARALLEL_THRESHOLD: usize = 999;

/// Runtime-configurable parallel-execution threshold.
///
/// Read via [`parallel_threshold()`], written via
/// [`set_parallel_threshold()`].
static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Return the current parallel-execution threshold.
///
/// The explicit scheme uses sequential iteration when a layer has
/// fewer interior points than this value and switches to Rayon above
/// it — but only when the crate is compiled with the `parallel`
/// feature.
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Set the parallel-execution threshold to a new value.
///
/// # Panics
///
/// Panics when `threshold == 0`; a zero threshold would force parallel
/// dispatch on every single-point update.
pub fn set_parallel_threshold(threshold: usize) {
    assert!(threshold > 0, "parallel threshold must be at least 1");
    PARALLEL_THRESHOLD.store(threshold, Ordering::Relaxed);
}

/// RAII guard that saves the current threshold on construction and
/// restores it on drop.
///
/// Only compiled in test builds. Prevents one test from leaking a
/// modified threshold into the next.
#[cfg(test)]
pub(crate) struct ThresholdGuard {
    previous: usize,
}

#[cfg(test)]
impl ThresholdGuard {
    /// Set the threshold to `new_value` and return a guard that will
    /// restore the previous value on drop.
    pub(crate) fn save(new_value: usize) -> Self {
        let previous = parallel_threshold();
        set_parallel_threshold(new_value);
        Self { previous }
    }
}

#[cfg(test)]
impl Drop for ThresholdGuard {
    fn drop(&mut self) {
        // Bypass the public setter so that restoring to any value
        // never panics.
        PARALLEL_THRESHOLD.store(self.previous, Ordering::Relaxed);
    }
}

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use traits::{
    Discretization, HeatSolution, Scheme, SolveError, StabilityReport, TimeHorizon,
    EXPLICIT_STABILITY_THRESHOLD,
};

pub use linear::{DenseLu, LinearSolver, Thomas};

pub use methods::{CrankNicolsonScheme, ExplicitScheme, ImplicitScheme};

// =================================================================================================
// Helper Functions
// =================================================================================================

use nalgebra::DVector;

/// Validate a freshly computed time layer for numerical issues
///
/// Checks that the layer contains no NaN or Inf values, which would
/// indicate numerical instability or a broken solve. Called by every
/// scheme after each step so problems surface at the layer that
/// produced them rather than propagating silently.
pub(crate) fn validate_layer(layer: &DVector<f64>, step: usize) -> Result<(), SolveError> {
    if layer.iter().any(|v| v.is_nan()) {
        return Err(SolveError::Numerical(format!(
            "NaN detected at time layer {}; try reducing the time step",
            step
        )));
    }
    if layer.iter().any(|v| v.is_infinite()) {
        return Err(SolveError::Numerical(format!(
            "infinity detected at time layer {}; the solution has overflowed",
            step
        )));
    }
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold_value() {
        assert_eq!(DEFAULT_PARALLEL_THRESHOLD, 999);
    }

    #[test]
    fn test_get_and_set_threshold() {
        let _guard = ThresholdGuard::save(500);
        assert_eq!(parallel_threshold(), 500);
    }

    #[test]
    #[should_panic(expected = "parallel threshold must be at least 1")]
    fn test_zero_threshold_panics() {
        set_parallel_threshold(0);
    }

    #[test]
    fn test_threshold_guard_restores_previous_value() {
        let before = parallel_threshold();
        {
            let _guard = ThresholdGuard::save(42);
            assert_eq!(parallel_threshold(), 42);
        }
        assert_eq!(parallel_threshold(), before);
    }

    #[test]
    fn test_validate_layer_accepts_finite_values() {
        let layer = DVector::from_vec(vec![0.0, 1.5, -2.0, 8.0]);
        assert!(validate_layer(&layer, 3).is_ok());
    }

    #[test]
    fn test_validate_layer_rejects_nan() {
        let layer = DVector::from_vec(vec![0.0, f64::NAN, 1.0]);
        let err = validate_layer(&layer, 7).unwrap_err();
        assert!(err.to_string().contains("NaN"));
        assert!(err.to_string().contains("7"));
    }

    #[test]
    fn test_validate_layer_rejects_infinity() {
        let layer = DVector::from_vec(vec![0.0, f64::INFINITY, 1.0]);
        let err = validate_layer(&layer, 2).unwrap_err();
        assert!(err.to_string().contains("infinity"));
    }
}
