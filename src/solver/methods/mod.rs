//! Finite-difference time-stepping schemes
//!
//! This module contains the concrete implementations of the
//! [`Scheme`](crate::solver::Scheme) trait.
//!
//! # Architecture
//!
//! The separation between the abstract scheme interface
//! (`solver::traits`) and concrete implementations (`solver::methods`)
//! keeps the seam stable: new schemes can be added without modifying
//! existing code.
//!
//! # Available Schemes
//!
//! - **[`ExplicitScheme`]**: forward-time, centered-space (FTCS)
//!   - No linear system; the update is purely local
//!   - O(Nx) work per step
//!   - Conditionally stable: requires r ≤ 0.5
//!
//! - **[`ImplicitScheme`]**: backward-time, centered-space (BTCS)
//!   - One interior-sized tridiagonal solve per step
//!   - Unconditionally stable
//!
//! - **[`CrankNicolsonScheme`]**: time-centered average of the two
//!   - One full-sized solve per step, B·u right-hand side
//!   - Unconditionally stable, second-order accurate in time
//!
//! # Example
//!
//! ```rust
//! use heat_rs::problem::HeatProblem;
//! use heat_rs::solver::{Discretization, Scheme};
//! use heat_rs::solver::{ExplicitScheme, ImplicitScheme, CrankNicolsonScheme};
//!
//! let problem = HeatProblem::heated_rod();
//! let disc = Discretization::with_steps(0.25, 0.25, 5);
//!
//! // Same problem, three schemes
//! let explicit = ExplicitScheme::new().solve(&problem, &disc).unwrap();
//! let implicit = ImplicitScheme::new().solve(&problem, &disc).unwrap();
//! let cn = CrankNicolsonScheme::new().solve(&problem, &disc).unwrap();
//!
//! assert_eq!(explicit.len(), 6);
//! assert_eq!(implicit.len(), 6);
//! assert_eq!(cn.len(), 6);
//! ```

mod crank_nicolson;
mod explicit;
mod implicit;

// Re-exports for convenience
pub use crank_nicolson::CrankNicolsonScheme;
pub use explicit::ExplicitScheme;
pub use implicit::ImplicitScheme;
