//! Output module for completed solutions
//!
//! Presents a finished [`HeatSolution`](crate::solver::HeatSolution)
//! without ever mutating it:
//!
//! - **Visualization**: PNG/SVG profile plots using `plotters`
//! - **Export**: CSV files and plain-text tables
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← this file
//! ├── visualization/      ← plots
//! │   ├── config.rs
//! │   └── profiles.rs
//! └── export/             ← data export
//!     ├── csv.rs
//!     └── table.rs
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use heat_rs::output::visualization::plot_profiles;
//! use heat_rs::output::export::{export_solution_csv, format_solution_table};
//!
//! let solution = scheme.solve(&problem, &disc)?;
//!
//! println!("{}", format_solution_table(&solution, None));
//! export_solution_csv(&solution, "rod.csv", None)?;
//! plot_profiles(&solution, &[0, 2, 5], "rod.png", None)?;
//! ```
//!
//! # Design
//!
//! Presenters depend only on the documented grid convention
//! (rows = time layers, columns = spatial points) and the public
//! accessors of `HeatSolution`, so they can be replaced without
//! touching numerical code.

pub mod export;
pub mod visualization;

// Re-export commonly used items for convenience
pub use export::{export_solution_csv, format_solution_table, CsvConfig, TableConfig};
pub use visualization::{plot_profile_comparison, plot_profile_evolution, plot_profiles, PlotConfig};
