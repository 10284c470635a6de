//! Problem definition (the WHAT)
//!
//! This module defines the physical problem to solve, independently of
//! any numerical method:
//!
//! - [`HeatProblem`]: domain, diffusivity, Dirichlet boundary values
//!   and initial profile
//! - [`InitialProfile`]: pluggable initial condition u(x, 0)
//!
//! # Architecture
//!
//! The problem definition is **separate from numerical schemes**:
//! - The problem provides the **equation data** (physics)
//! - The scheme provides the **method** to solve it (numerics)
//!
//! This separation allows:
//! - Same problem solved with different schemes (explicit, implicit,
//!   Crank-Nicolson)
//! - Same scheme applied to different problems
//!
//! # Example
//!
//! ```rust
//! use heat_rs::problem::{HeatProblem, InitialProfile};
//!
//! // The classic heated rod: 16·∂u/∂t = ∂²u/∂x² on [0, 4],
//! // u(0,t) = 0, u(4,t) = 8, u(x,0) = 0.5·x·(8−x)
//! let problem = HeatProblem::heated_rod();
//! assert!(problem.validate().is_ok());
//!
//! // Or a custom problem with a pluggable profile
//! let problem = HeatProblem::new(
//!     1.0,                                   // length
//!     0.001,                                 // diffusivity
//!     (1.0, 0.0),                            // boundary values
//!     InitialProfile::from_fn(|x| 1.0 - x),  // u(x, 0)
//! );
//! ```

mod config;
mod profile;

pub use config::HeatProblem;
pub use profile::InitialProfile;
