//! Initial condition u(x, 0) as a pluggable function of x

use nalgebra::DVector;
use std::fmt;

use crate::grid::SpatialAxis;

/// Initial spatial profile u(x, 0)
///
/// Wraps an arbitrary function of the spatial coordinate so that the
/// initial condition can be swapped without touching numerical code.
///
/// # Example
///
/// ```rust
/// use heat_rs::problem::InitialProfile;
///
/// // The reference quadratic profile 0.5·x·(8 − x)
/// let profile = InitialProfile::quadratic(0.5, 8.0);
/// assert!((profile.evaluate(2.0) - 6.0).abs() < 1e-12);
///
/// // Any closure works
/// let ramp = InitialProfile::from_fn(|x| 2.0 * x);
/// assert!((ramp.evaluate(1.5) - 3.0).abs() < 1e-12);
/// ```
pub struct InitialProfile {
    function: Box<dyn Fn(f64) -> f64 + Send + Sync>,
    description: String,
}

impl InitialProfile {
    /// Create a profile from an arbitrary function of x
    pub fn from_fn<F>(function: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self {
            function: Box::new(function),
            description: "custom".to_string(),
        }
    }

    /// Quadratic profile `scale·x·(peak − x)`
    ///
    /// With `scale = 0.5` and `peak = 8.0` this is the reference
    /// profile 0.5·x·(8 − x) of the heated-rod problem.
    pub fn quadratic(scale: f64, peak: f64) -> Self {
        Self {
            function: Box::new(move |x| scale * x * (peak - x)),
            description: format!("{}*x*({} - x)", scale, peak),
        }
    }

    /// Uniform profile u(x, 0) = value
    pub fn constant(value: f64) -> Self {
        Self {
            function: Box::new(move |_| value),
            description: format!("constant {}", value),
        }
    }

    /// Evaluate the profile at a single coordinate
    pub fn evaluate(&self, x: f64) -> f64 {
        (self.function)(x)
    }

    /// Sample the profile at every point of a spatial axis
    pub fn sample(&self, axis: &SpatialAxis) -> DVector<f64> {
        DVector::from_iterator(axis.len(), axis.points().iter().map(|&x| self.evaluate(x)))
    }

    /// Short human-readable description (used in metadata)
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Debug for InitialProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InitialProfile")
            .field("description", &self.description)
            .finish()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
