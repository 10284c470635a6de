//! Heat problem definition
//!
//! A [`HeatProblem`] combines the physical data of a 1-D diffusion
//! problem: domain, diffusivity, Dirichlet boundary values and the
//! initial profile. It is the "WHAT to solve" (not "HOW to solve" —
//! that is [`Discretization`](crate::solver::Discretization)).

use crate::problem::InitialProfile;
use crate::solver::SolveError;

/// 1-D heat conduction problem with Dirichlet boundaries
///
/// Represents ∂u/∂t = α·∂²u/∂x² on [0, L] with
/// u(0, t) = `left_value`, u(L, t) = `right_value` and
/// u(x, 0) given by `initial`.
///
/// # Design
///
/// The same problem can be solved with different schemes. All
/// parameters are explicit fields — there is no process-wide state,
/// so independent runs share nothing.
///
/// # Example
///
/// ```rust
/// use heat_rs::problem::{HeatProblem, InitialProfile};
///
/// let problem = HeatProblem::new(
///     4.0,
///     1.0 / 16.0,
///     (0.0, 8.0),
///     InitialProfile::quadratic(0.5, 8.0),
/// );
/// assert!(problem.validate().is_ok());
/// ```
#[derive(Debug)]
pub struct HeatProblem {
    /// Length L of the spatial domain
    pub length: f64,

    /// Diffusion coefficient α
    pub diffusivity: f64,

    /// Fixed boundary value u(0, t)
    pub left_value: f64,

    /// Fixed boundary value u(L, t)
    pub right_value: f64,

    /// Initial condition u(x, 0)
    pub initial: InitialProfile,
}

impl HeatProblem {
    /// Create a problem from explicit parameters
    ///
    /// `boundary` is the pair (u(0,t), u(L,t)).
    pub fn new(
        length: f64,
        diffusivity: f64,
        boundary: (f64, f64),
        initial: InitialProfile,
    ) -> Self {
        Self {
            length,
            diffusivity,
            left_value: boundary.0,
            right_value: boundary.1,
            initial,
        }
    }

    /// The reference heated-rod problem
    ///
    /// 16·∂u/∂t = ∂²u/∂x² on [0, 4] with u(0,t) = 0, u(4,t) = 8 and
    /// u(x,0) = 0.5·x·(8 − x).
    pub fn heated_rod() -> Self {
        Self::new(
            4.0,
            1.0 / 16.0,
            (0.0, 8.0),
            InitialProfile::quadratic(0.5, 8.0),
        )
    }

    /// Validate the physical parameters
    ///
    /// Fails with [`SolveError::InvalidInput`] when the length or the
    /// diffusivity is non-positive, or when any parameter is not
    /// finite. Boundary values only need to be finite.
    pub fn validate(&self) -> Result<(), SolveError> {
        if !self.length.is_finite() || self.length <= 0.0 {
            return Err(SolveError::InvalidInput(format!(
                "domain length must be finite and positive, got {}",
                self.length
            )));
        }
        if !self.diffusivity.is_finite() || self.diffusivity <= 0.0 {
            return Err(SolveError::InvalidInput(format!(
                "diffusivity must be finite and positive, got {}",
                self.diffusivity
            )));
        }
        if !self.left_value.is_finite() || !self.right_value.is_finite() {
            return Err(SolveError::InvalidInput(
                "boundary values must be finite".to_string(),
            ));
        }
        Ok(())
    }

    /// Boundary value pair (u(0,t), u(L,t))
    pub fn boundary(&self) -> (f64, f64) {
        (self.left_value, self.right_value)
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heated_rod_parameters() {
        let problem = HeatProblem::heated_rod();
        assert!((problem.length - 4.0).abs() < 1e-12);
        assert!((problem.diffusivity - 0.0625).abs() < 1e-12);
        assert_eq!(problem.boundary(), (0.0, 8.0));

        // Initial profile peaks at 8 on the right boundary
        assert!((problem.initial.evaluate(4.0) - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_validate_accepts_heated_rod() {
        assert!(HeatProblem::heated_rod().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_length() {
        let problem = HeatProblem::new(-1.0, 0.1, (0.0, 0.0), InitialProfile::constant(0.0));
        let err = problem.validate().unwrap_err();
        assert!(err.to_string().contains("length"));
    }

    #[test]
    fn test_validate_rejects_zero_diffusivity() {
        let problem = HeatProblem::new(1.0, 0.0, (0.0, 0.0), InitialProfile::constant(0.0));
        let err = problem.validate().unwrap_err();
        assert!(err.to_string().contains("diffusivity"));
    }

    #[test]
    fn test_validate_rejects_nan_boundary() {
        let problem = HeatProblem::new(1.0, 0.1, (f64::NAN, 0.0), InitialProfile::constant(0.0));
        assert!(problem.validate().is_err());
    }
}
