//! Uniform spatial and temporal axes
//!
//! Both axes compute their points directly from the index
//! (`i as f64 * step`) instead of accumulating `x += step`, so the
//! last point matches the nominal extent within machine epsilon even
//! for steps that are not exactly representable in binary.

use crate::solver::SolveError;

/// Uniformly spaced spatial axis over [0, L]
///
/// Holds Nx + 1 coordinates with spacing `dx`, where
/// Nx = ⌊L / dx⌋ (round down to the nearest whole step count).
/// When L is not an exact multiple of dx the trailing remainder is
/// recorded and surfaced as a non-fatal warning by the grid builder.
///
/// Immutable after construction.
#[derive(Debug, Clone)]
pub struct SpatialAxis {
    points: Vec<f64>,
    step: f64,
    remainder: f64,
}

impl SpatialAxis {
    /// Build the axis for a domain of length `length` and step `dx`
    ///
    /// Fails with [`SolveError::InvalidInput`] when `dx` is
    /// non-positive, non-finite, or larger than the domain.
    pub fn uniform(length: f64, dx: f64) -> Result<Self, SolveError> {
        if !dx.is_finite() || dx <= 0.0 {
            return Err(SolveError::InvalidInput(format!(
                "spatial step dx must be finite and positive, got {}",
                dx
            )));
        }

        let intervals = (length / dx).floor() as usize;
        if intervals == 0 {
            return Err(SolveError::InvalidInput(format!(
                "spatial step dx = {} does not fit in domain of length {}",
                dx, length
            )));
        }

        let remainder = length - intervals as f64 * dx;
        let points = (0..=intervals).map(|i| i as f64 * dx).collect();

        Ok(Self {
            points,
            step: dx,
            remainder,
        })
    }

    /// Number of grid points (Nx + 1)
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the axis holds no points (never after `uniform`)
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of interior points (all except the two boundaries)
    pub fn interior_len(&self) -> usize {
        self.points.len().saturating_sub(2)
    }

    /// Grid spacing dx
    pub fn step(&self) -> f64 {
        self.step
    }

    /// The coordinates, ordered from 0 to L
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Remainder left over by the whole-step truncation
    ///
    /// `Some(rest)` when L was not an exact multiple of dx, within a
    /// relative tolerance of one part in 1e9 of dx.
    pub fn truncation(&self) -> Option<f64> {
        if self.remainder.abs() > self.step * 1e-9 {
            Some(self.remainder)
        } else {
            None
        }
    }
}

/// Uniformly spaced temporal axis over [0, Nt·dt]
///
/// Holds Nt + 1 time values; time values are exact multiples of `dt`.
#[derive(Debug, Clone)]
pub struct TemporalAxis {
    points: Vec<f64>,
    step: f64,
}

impl TemporalAxis {
    /// Build the axis for `steps` time steps of size `dt`
    pub fn uniform(dt: f64, steps: usize) -> Result<Self, SolveError> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(SolveError::InvalidInput(format!(
                "time step dt must be finite and positive, got {}",
                dt
            )));
        }
        if steps == 0 {
            return Err(SolveError::InvalidInput(
                "number of time steps must be greater than 0".to_string(),
            ));
        }

        let points = (0..=steps).map(|j| j as f64 * dt).collect();
        Ok(Self { points, step: dt })
    }

    /// Number of time layers (Nt + 1)
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the axis holds no points (never after `uniform`)
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of time steps Nt
    pub fn steps(&self) -> usize {
        self.points.len() - 1
    }

    /// Step size dt
    pub fn step(&self) -> f64 {
        self.step
    }

    /// The time values, ordered from 0
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Total covered time Nt·dt
    pub fn total_time(&self) -> f64 {
        *self.points.last().expect("axis is never empty")
    }
}

// =================================================================================================
// Tests
// =================================================================================================
