//! Visualization of completed solutions
//!
//! Renders spatial profiles of a [`HeatSolution`](crate::solver::HeatSolution)
//! with the `plotters` library.
//!
//! # Organization
//!
//! - **`config`**: shared plot configuration ([`PlotConfig`])
//! - **`profiles`**: u(x, t) curves for selected or evenly spaced time
//!   layers, plus cross-solution comparison overlays
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use heat_rs::output::visualization::{plot_profiles, PlotConfig};
//!
//! let solution = scheme.solve(&problem, &disc)?;
//!
//! // Default styling
//! plot_profiles(&solution, &[0, 2, 5], "profiles.png", None)?;
//!
//! // Custom title
//! let config = PlotConfig::profiles("Heat Distribution (Implicit)");
//! plot_profiles(&solution, &[0, 2, 5], "implicit.png", Some(&config))?;
//! ```

pub mod config;
pub mod profiles;

pub use config::PlotConfig;
pub use profiles::{plot_profile_comparison, plot_profile_evolution, plot_profiles};
