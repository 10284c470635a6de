//! Helper functions for integration tests

use heat_rs::solver::{Discretization, HeatSolution};

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

/// The discretization used by the reference heated-rod runs
pub fn heated_rod_disc(steps: usize) -> Discretization {
    Discretization::with_steps(0.25, 0.25, steps)
}

/// Minimum and maximum over one time layer of a solution
pub fn layer_bounds(solution: &HeatSolution, layer: usize) -> (f64, f64) {
    let values = solution.grid.layer(layer);
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    (min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_error() {
        assert!((relative_error(1.0, 1.0) - 0.0).abs() < 1e-10);
        assert!((relative_error(1.1, 1.0) - 0.1).abs() < 1e-10);
        assert!((relative_error(0.9, 1.0) - 0.1).abs() < 1e-10);
    }
}
