//! Plain-text table rendering of a solution grid
//!
//! Formats the grid as a fixed-width table: one header row of spatial
//! coordinates and one row per (possibly strided) time layer. Meant
//! for terminal inspection of small grids; large grids are better
//! served by [CSV export](crate::output::export::export_solution_csv).
//!
//! ```text
//!               x=0.00   x=0.25   x=0.50   ...
//! j=0 (t=0.00)  0.0000   0.9688   1.8750   ...
//! j=1 (t=0.25)  0.0000   0.9531   1.8594   ...
//! ```

use std::error::Error;
use std::io::Write;

use crate::solver::HeatSolution;

/// Configuration for text table rendering
#[derive(Clone)]
pub struct TableConfig {
    /// Number of decimal places (default: 4)
    pub precision: usize,

    /// Render every n-th time layer (default: 1, i.e. all layers)
    ///
    /// The final layer is always included so the end state is visible
    /// even when the stride skips it.
    pub layer_stride: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            precision: 4,
            layer_stride: 1,
        }
    }
}

impl TableConfig {
    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: render every n-th layer
    ///
    /// A stride of 0 is treated as 1.
    pub fn layer_stride(mut self, stride: usize) -> Self {
        self.layer_stride = stride.max(1);
        self
    }
}

/// Render the solution grid as a fixed-width text table
pub fn format_solution_table(solution: &HeatSolution, config: Option<&TableConfig>) -> String {
    let default_config = TableConfig::default();
    let config = config.unwrap_or(&default_config);

    let stride = config.layer_stride.max(1);
    let n_layers = solution.len();
    let last = n_layers - 1;

    let mut layers: Vec<usize> = (0..n_layers).step_by(stride).collect();
    if layers.last() != Some(&last) {
        layers.push(last);
    }

    // Column width fits the widest formatted value, the coordinate
    // headers and a two-space gutter
    let value_width = layers
        .iter()
        .flat_map(|&j| (0..solution.x.len()).map(move |i| (j, i)))
        .map(|(j, i)| format!("{:.*}", config.precision, solution.grid.value(j, i)).len())
        .max()
        .unwrap_or(0);
    let header_width = solution
        .x
        .points()
        .iter()
        .map(|&x| format!("x={:.2}", x).len())
        .max()
        .unwrap_or(0);
    let column = value_width.max(header_width) + 2;

    let label_width = layers
        .iter()
        .map(|&j| format!("j={} (t={:.2})", j, solution.t.points()[j]).len())
        .max()
        .unwrap_or(0)
        + 2;

    let mut out = String::new();

    // Header row of spatial coordinates
    out.push_str(&" ".repeat(label_width));
    for &x in solution.x.points() {
        out.push_str(&format!("{:>column$}", format!("x={:.2}", x)));
    }
    out.push('\n');

    // One row per selected layer
    for &j in &layers {
        let label = format!("j={} (t={:.2})", j, solution.t.points()[j]);
        out.push_str(&format!("{:<label_width$}", label));
        for i in 0..solution.x.len() {
            out.push_str(&format!(
                "{:>column$}",
                format!("{:.*}", config.precision, solution.grid.value(j, i))
            ));
        }
        out.push('\n');
    }

    out
}

/// Write the table to any writer
pub fn write_solution_table<W: Write>(
    writer: &mut W,
    solution: &HeatSolution,
    config: Option<&TableConfig>,
) -> Result<(), Box<dyn Error>> {
    writer.write_all(format_solution_table(solution, config).as_bytes())?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
