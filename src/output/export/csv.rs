//! CSV export for completed solutions
//!
//! Writes the solution grid as CSV, one row per time layer: the first
//! column is t, followed by one column per spatial point. Compatible
//! with Excel, pandas, MATLAB and most analysis tools.
//!
//! # Quick Example
//!
//! ```rust,ignore
//! use heat_rs::output::export::export_solution_csv;
//!
//! export_solution_csv(&solution, "rod.csv", None)?;
//! ```
//!
//! **Output** (`rod.csv`):
//!
//! ```csv
//! t,u(x=0.00),u(x=0.25),u(x=0.50),...
//! 0.000000,0.000000,0.968750,1.875000,...
//! 0.250000,0.000000,0.953125,1.859375,...
//! ```
//!
//! With `include_metadata` the run diagnostics are prepended as `#`
//! comment lines.

use std::error::Error;
use std::fs::File;
use std::io::Write;

use crate::solver::HeatSolution;

// =================================================================================================
// Configuration
// =================================================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust
/// use heat_rs::output::export::CsvConfig;
///
/// // European format, 10 decimal places
/// let config = CsvConfig::european().precision(10);
/// assert_eq!(config.delimiter, ';');
/// ```
#[derive(Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Prepend `#` comment lines with run metadata (default: false)
    pub include_metadata: bool,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
        }
    }
}

impl CsvConfig {
    /// European CSV format (semicolon columns, comma decimals)
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// High precision preset (12 decimal places)
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata header comments
    pub fn with_metadata(mut self) -> Self {
        self.include_metadata = true;
        self
    }

    fn format_value(&self, value: f64) -> String {
        let text = format!("{:.*}", self.precision, value);
        if self.decimal_separator != '.' {
            text.replace('.', &self.decimal_separator.to_string())
        } else {
            text
        }
    }
}

// =================================================================================================
// Export
// =================================================================================================

/// Export a solution grid to a CSV file
///
/// One row per time layer; the first column holds t, the remaining
/// columns hold u at each spatial point. The solution is read-only.
///
/// # Errors
///
/// Returns an error when the file cannot be written.
pub fn export_solution_csv(
    solution: &HeatSolution,
    output_path: &str,
    config: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {
    let default_config = CsvConfig::default();
    let config = config.unwrap_or(&default_config);

    let mut file = File::create(output_path)?;

    if config.include_metadata {
        writeln!(file, "# 1-D heat equation solution")?;
        let mut keys: Vec<&String> = solution.metadata.keys().collect();
        keys.sort();
        for key in keys {
            writeln!(file, "# {}: {}", key, solution.metadata[key])?;
        }
        for warning in &solution.warnings {
            writeln!(file, "# warning: {}", warning)?;
        }
        if let Some(report) = &solution.stability {
            writeln!(file, "# warning: {}", report)?;
        }
        writeln!(file, "#")?;
    }

    // Header: t plus one column per spatial coordinate
    let mut header = String::from("t");
    for &x in solution.x.points() {
        header.push(config.delimiter);
        header.push_str(&format!("u(x={:.2})", x));
    }
    writeln!(file, "{}", header)?;

    // One row per time layer
    for (j, &t) in solution.t.points().iter().enumerate() {
        let mut row = config.format_value(t);
        for i in 0..solution.x.len() {
            row.push(config.delimiter);
            row.push_str(&config.format_value(solution.grid.value(j, i)));
        }
        writeln!(file, "{}", row)?;
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
