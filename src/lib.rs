//! heat-rs: 1-D Heat Equation Finite-Difference Solvers
//!
//! Solves ∂u/∂t = α·∂²u/∂x² on a finite interval with Dirichlet
//! boundary values and a pluggable initial profile, using three
//! classic time-stepping schemes.
//!
//! # Architecture
//!
//! heat-rs is built on two core principles:
//!
//! 1. **Separation of problem and numerics**
//!    - The problem defines the equation data (what to solve)
//!    - The schemes provide the methods (how to solve)
//!
//! 2. **Stable seams**
//!    - The `Scheme` trait for time-stepping methods
//!    - The `LinearSolver` trait for the per-step linear solve
//!    - A documented grid convention for presenters
//!
//! # Quick Start
//!
//! ```rust
//! use heat_rs::problem::HeatProblem;
//! use heat_rs::solver::{Discretization, ExplicitScheme, ImplicitScheme, Scheme};
//!
//! // 16·∂u/∂t = ∂²u/∂x² on [0, 4], u(0,t) = 0, u(4,t) = 8,
//! // u(x,0) = 0.5·x·(8−x)
//! let problem = HeatProblem::heated_rod();
//! let disc = Discretization::with_steps(0.25, 0.25, 5);
//!
//! // Explicit scheme: r = 0.25, stable
//! let explicit = ExplicitScheme::new().solve(&problem, &disc).unwrap();
//! assert!(explicit.stability.is_none());
//!
//! // Same problem, implicit scheme
//! let implicit = ImplicitScheme::new().solve(&problem, &disc).unwrap();
//!
//! // Grid convention: rows = time layers, columns = spatial points
//! assert_eq!(explicit.grid.n_layers(), 6);
//! assert_eq!(explicit.grid.n_points(), 17);
//! ```
//!
//! # Modules
//!
//! - [`problem`]: problem definition (domain, boundaries, initial profile)
//! - [`grid`]: axes and solution grid construction
//! - [`solver`]: the three schemes and their collaborators
//! - [`output`]: visualization and export of finished solutions

// Core modules
pub mod grid;
pub mod problem;
pub mod solver;

pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use heat_rs::prelude::*;
    //!
    //! let solution = CrankNicolsonScheme::new()
    //!     .solve(
    //!         &HeatProblem::heated_rod(),
    //!         &Discretization::with_total_time(0.25, 0.22, 5.0),
    //!     )
    //!     .unwrap();
    //! assert_eq!(solution.len(), 23);
    //! ```
    pub use crate::problem::{HeatProblem, InitialProfile};
    pub use crate::solver::{
        CrankNicolsonScheme, Discretization, ExplicitScheme, HeatSolution, ImplicitScheme,
        Scheme, SolveError, StabilityReport, TimeHorizon,
    };
}
