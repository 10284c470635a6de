//! Scheme traits and shared solver types
//!
//! # Design Philosophy
//!
//! This module mirrors the split between WHAT and HOW:
//! - [`HeatProblem`](crate::problem::HeatProblem) is the WHAT
//! - [`Discretization`] is the HOW (step sizes and time horizon)
//! - [`Scheme`] is the numerical method applied to both
//! - [`HeatSolution`] is the result handed to presenters
//!
//! # Stability Guarantee
//!
//! The [`Scheme`] trait is the stable seam of the crate: new schemes
//! can be added without touching existing code, and presenters depend
//! only on [`HeatSolution`].

use std::collections::HashMap;

use thiserror::Error;

use crate::grid::{SolutionGrid, SpatialAxis, TemporalAxis};
use crate::problem::HeatProblem;

// =================================================================================================
// Errors
// =================================================================================================

/// Errors raised by grid construction and time-stepping
///
/// Stability is deliberately NOT an error — an explicit run with
/// r > 0.5 still executes and reports a [`StabilityReport`] on the
/// returned solution instead.
#[derive(Debug, Error)]
pub enum SolveError {
    /// Invalid parameter caught before any computation
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The assembled linear system has no unique solution
    ///
    /// Fatal for the run; the coefficient matrix is static, so a retry
    /// would reproduce the same failure.
    #[error("singular system: {0}")]
    SingularSystem(String),

    /// NaN or infinity detected in a computed layer
    #[error("numerical error: {0}")]
    Numerical(String),
}

// =================================================================================================
// Time horizon
// =================================================================================================

/// How long to run: a total time or an explicit step count
///
/// The reference problem is posed both ways in practice, so both are
/// accepted. A total time resolves to ⌊T / dt⌋ whole steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeHorizon {
    /// Run until t = T (resolved to whole steps of dt, rounded down)
    TotalTime(f64),

    /// Run exactly this many steps
    Steps(usize),
}

impl TimeHorizon {
    /// Resolve the horizon to a whole number of steps of size `dt`
    pub fn steps(&self, dt: f64) -> Result<usize, SolveError> {
        match *self {
            TimeHorizon::Steps(n) => {
                if n == 0 {
                    Err(SolveError::InvalidInput(
                        "number of time steps must be greater than 0".to_string(),
                    ))
                } else {
                    Ok(n)
                }
            }
            TimeHorizon::TotalTime(total) => {
                if !total.is_finite() || total <= 0.0 {
                    return Err(SolveError::InvalidInput(format!(
                        "total time must be finite and positive, got {}",
                        total
                    )));
                }
                let n = (total / dt).floor() as usize;
                if n == 0 {
                    return Err(SolveError::InvalidInput(format!(
                        "total time {} is shorter than one time step dt = {}",
                        total, dt
                    )));
                }
                Ok(n)
            }
        }
    }
}

// =================================================================================================
// Discretization
// =================================================================================================

/// Numerical discretization parameters (the HOW)
///
/// # Example
///
/// ```rust
/// use heat_rs::solver::{Discretization, TimeHorizon};
///
/// // Five steps of 0.25 on a 0.25 spatial grid
/// let disc = Discretization::with_steps(0.25, 0.25, 5);
///
/// // Or run until t = 5.0
/// let disc = Discretization::with_total_time(0.25, 0.22, 5.0);
/// assert_eq!(disc.horizon, TimeHorizon::TotalTime(5.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Discretization {
    /// Spatial step Δx
    pub dx: f64,

    /// Time step Δt
    pub dt: f64,

    /// Total time or explicit step count
    pub horizon: TimeHorizon,
}

impl Discretization {
    /// Create from explicit fields
    pub fn new(dx: f64, dt: f64, horizon: TimeHorizon) -> Self {
        Self { dx, dt, horizon }
    }

    /// Create with an explicit step count
    pub fn with_steps(dx: f64, dt: f64, steps: usize) -> Self {
        Self::new(dx, dt, TimeHorizon::Steps(steps))
    }

    /// Create with a total run time
    pub fn with_total_time(dx: f64, dt: f64, total_time: f64) -> Self {
        Self::new(dx, dt, TimeHorizon::TotalTime(total_time))
    }

    /// Validate steps and horizon
    pub fn validate(&self) -> Result<(), SolveError> {
        if !self.dx.is_finite() || self.dx <= 0.0 {
            return Err(SolveError::InvalidInput(format!(
                "spatial step dx must be finite and positive, got {}",
                self.dx
            )));
        }
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(SolveError::InvalidInput(format!(
                "time step dt must be finite and positive, got {}",
                self.dt
            )));
        }
        self.horizon.steps(self.dt).map(|_| ())
    }

    /// Diffusion ratio r = α·Δt / Δx²
    ///
    /// Controls the coefficients of every scheme and the stability of
    /// the explicit one. The Crank-Nicolson scheme halves this value
    /// to account for its half-step averaging.
    pub fn diffusion_ratio(&self, diffusivity: f64) -> f64 {
        diffusivity * self.dt / (self.dx * self.dx)
    }
}

// =================================================================================================
// Stability report
// =================================================================================================

/// Threshold above which the explicit scheme may be unstable
pub const EXPLICIT_STABILITY_THRESHOLD: f64 = 0.5;

/// Advisory stability notice for the explicit scheme
///
/// Produced when r exceeds [`EXPLICIT_STABILITY_THRESHOLD`]. The run
/// still executes — instability shows up as growing oscillation in the
/// grid, not as a blocked execution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StabilityReport {
    /// The diffusion ratio of the run
    pub ratio: f64,

    /// The threshold that was exceeded
    pub threshold: f64,
}

impl std::fmt::Display for StabilityReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "the scheme may be unstable: r = {} > {}",
            self.ratio, self.threshold
        )
    }
}

// =================================================================================================
// Solution
// =================================================================================================

/// Completed solve: axes, grid and run diagnostics
///
/// The grid follows the documented convention rows = time layers,
/// columns = spatial points. Presenters receive the solution by shared
/// reference and never mutate it.
#[derive(Debug)]
pub struct HeatSolution {
    /// Spatial axis over [0, L]
    pub x: SpatialAxis,

    /// Temporal axis over [0, Nt·dt]
    pub t: TemporalAxis,

    /// Solution grid u(x_i, t_j)
    pub grid: SolutionGrid,

    /// Present when the explicit stability threshold was exceeded
    pub stability: Option<StabilityReport>,

    /// Non-fatal discretization notices from the grid builder
    pub warnings: Vec<String>,

    /// Run diagnostics (scheme name, r, dx, dt, steps, ...)
    pub metadata: HashMap<String, String>,
}

impl HeatSolution {
    /// Create a solution with empty diagnostics
    pub fn new(x: SpatialAxis, t: TemporalAxis, grid: SolutionGrid) -> Self {
        Self {
            x,
            t,
            grid,
            stability: None,
            warnings: Vec::new(),
            metadata: HashMap::new(),
        }
    }

    /// Attach a diagnostic key/value pair
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    /// Number of time layers in the solution
    pub fn len(&self) -> usize {
        self.grid.n_layers()
    }

    /// True when the solution holds no layers (never after a solve)
    pub fn is_empty(&self) -> bool {
        self.grid.n_layers() == 0
    }

    /// The final time layer
    pub fn final_layer(&self) -> nalgebra::DVector<f64> {
        self.grid.layer(self.grid.n_layers() - 1)
    }
}

// =================================================================================================
// Scheme trait
// =================================================================================================

/// A finite-difference time-stepping scheme
///
/// Implementations validate their inputs, build the grid, advance one
/// time layer per step and return the completed [`HeatSolution`].
///
/// # Implementing a New Scheme
///
/// ```rust,ignore
/// use heat_rs::solver::{Scheme, Discretization, HeatSolution, SolveError};
/// use heat_rs::problem::HeatProblem;
///
/// pub struct MyScheme;
///
/// impl Scheme for MyScheme {
///     fn solve(
///         &self,
///         problem: &HeatProblem,
///         disc: &Discretization,
///     ) -> Result<HeatSolution, SolveError> {
///         // 1. validate, 2. build grid, 3. step, 4. attach metadata
///         todo!()
///     }
///
///     fn name(&self) -> &str {
///         "My Scheme"
///     }
/// }
/// ```
pub trait Scheme {
    /// Solve the problem on the given discretization
    fn solve(
        &self,
        problem: &HeatProblem,
        disc: &Discretization,
    ) -> Result<HeatSolution, SolveError>;

    /// Human-readable scheme name
    fn name(&self) -> &str;
}

// =================================================================================================
// Tests
// =================================================================================================
