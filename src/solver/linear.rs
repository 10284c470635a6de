//! Linear solver collaborator
//!
//! The implicit and Crank-Nicolson schemes call out to a
//! [`LinearSolver`] each time step. The trait is a seam: the engines
//! never care how A·x = b is solved, so the solver can be swapped
//! without touching numerical logic.
//!
//! Two implementations are provided:
//!
//! - [`DenseLu`]: LU decomposition with partial pivoting (nalgebra).
//!   Works for any square system; the default.
//! - [`Thomas`]: the Thomas algorithm specialized to tridiagonal
//!   systems, O(n) per solve. Reads the three bands off the matrix and
//!   rejects systems with entries outside them.
//!
//! Both report a system without a unique solution as
//! [`SolveError::SingularSystem`] — never as a silent NaN.

use nalgebra::{DMatrix, DVector};

use crate::solver::SolveError;

/// Pivots with magnitude at or below this are treated as singular
const PIVOT_TOLERANCE: f64 = 1.0e-14;

/// Solves square linear systems A·x = b
pub trait LinearSolver: Send + Sync {
    /// Solve A·x = b, returning the solution vector
    ///
    /// Fails with [`SolveError::SingularSystem`] when the system has
    /// no unique solution, and with [`SolveError::InvalidInput`] when
    /// the shapes are inconsistent.
    fn solve(&self, a: &DMatrix<f64>, b: &DVector<f64>) -> Result<DVector<f64>, SolveError>;

    /// Human-readable solver name
    fn name(&self) -> &str;
}

fn check_shapes(a: &DMatrix<f64>, b: &DVector<f64>) -> Result<(), SolveError> {
    if a.nrows() != a.ncols() {
        return Err(SolveError::InvalidInput(format!(
            "coefficient matrix must be square, got {}x{}",
            a.nrows(),
            a.ncols()
        )));
    }
    if a.nrows() != b.len() {
        return Err(SolveError::InvalidInput(format!(
            "right-hand side length {} does not match system size {}",
            b.len(),
            a.nrows()
        )));
    }
    Ok(())
}

// =================================================================================================
// Dense LU
// =================================================================================================

/// Dense LU solver with partial pivoting
///
/// The default collaborator. Suitable for any square system; cost is
/// O(n³) per solve.
#[derive(Debug, Clone, Copy, Default)]
pub struct DenseLu;

impl DenseLu {
    /// Create a new dense LU solver
    pub fn new() -> Self {
        Self
    }
}

impl LinearSolver for DenseLu {
    fn solve(&self, a: &DMatrix<f64>, b: &DVector<f64>) -> Result<DVector<f64>, SolveError> {
        check_shapes(a, b)?;

        let solution = a
            .clone()
            .lu()
            .solve(b)
            .ok_or_else(|| SolveError::SingularSystem("LU decomposition failed".to_string()))?;

        // A nearly singular matrix can slip past the decomposition and
        // surface as non-finite entries instead
        if solution.iter().any(|v| !v.is_finite()) {
            return Err(SolveError::SingularSystem(
                "solution contains non-finite values".to_string(),
            ));
        }

        Ok(solution)
    }

    fn name(&self) -> &str {
        "Dense LU"
    }
}

// =================================================================================================
// Thomas algorithm
// =================================================================================================

/// Thomas algorithm for tridiagonal systems
///
/// Forward elimination followed by back substitution over the three
/// bands, O(n) per solve. The matrix must be tridiagonal; entries
/// outside the bands are rejected as invalid input rather than
/// silently ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct Thomas;

impl Thomas {
    /// Create a new Thomas solver
    pub fn new() -> Self {
        Self
    }

    /// Extract (sub, main, super) bands, rejecting off-band entries
    fn bands(a: &DMatrix<f64>) -> Result<(Vec<f64>, Vec<f64>, Vec<f64>), SolveError> {
        let n = a.nrows();
        for i in 0..n {
            for j in 0..n {
                if j + 1 < i || j > i + 1 {
                    if a[(i, j)] != 0.0 {
                        return Err(SolveError::InvalidInput(format!(
                            "matrix is not tridiagonal: nonzero entry at ({}, {})",
                            i, j
                        )));
                    }
                }
            }
        }

        let sub = (0..n).map(|i| if i > 0 { a[(i, i - 1)] } else { 0.0 }).collect();
        let main = (0..n).map(|i| a[(i, i)]).collect();
        let sup = (0..n)
            .map(|i| if i + 1 < n { a[(i, i + 1)] } else { 0.0 })
            .collect();
        Ok((sub, main, sup))
    }
}

impl LinearSolver for Thomas {
    fn solve(&self, a: &DMatrix<f64>, b: &DVector<f64>) -> Result<DVector<f64>, SolveError> {
        check_shapes(a, b)?;

        let n = b.len();
        let (sub, main, sup) = Self::bands(a)?;

        let mut c_prime = vec![0.0; n];
        let mut d_prime = vec![0.0; n];

        // Forward sweep
        if main[0].abs() <= PIVOT_TOLERANCE {
            return Err(SolveError::SingularSystem(
                "zero pivot in first row".to_string(),
            ));
        }
        c_prime[0] = sup[0] / main[0];
        d_prime[0] = b[0] / main[0];

        for i in 1..n {
            let denom = main[i] - sub[i] * c_prime[i - 1];
            if denom.abs() <= PIVOT_TOLERANCE {
                return Err(SolveError::SingularSystem(format!(
                    "zero pivot at row {}",
                    i
                )));
            }
            if i + 1 < n {
                c_prime[i] = sup[i] / denom;
            }
            d_prime[i] = (b[i] - sub[i] * d_prime[i - 1]) / denom;
        }

        // Back substitution
        let mut x = DVector::zeros(n);
        x[n - 1] = d_prime[n - 1];
        for i in (0..n - 1).rev() {
            x[i] = d_prime[i] - c_prime[i] * x[i + 1];
        }

        Ok(x)
    }

    fn name(&self) -> &str {
        "Thomas"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
