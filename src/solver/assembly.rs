//! Coefficient matrix assembly
//!
//! The implicit and Crank-Nicolson schemes solve a linear system per
//! time step; this module builds the coefficient matrices once, before
//! stepping begins. Assembly is split into two separately testable
//! steps:
//!
//! 1. [`tridiagonal`]: build the nearest-neighbour coupling pattern,
//! 2. [`apply_dirichlet_rows`]: overwrite the first and last rows with
//!    identity rows that pin the boundary unknowns.
//!
//! All coefficients are exact functions of the diffusion ratio r; the
//! matrices never change during time-stepping — only right-hand-side
//! vectors do.
//!
//! # Per-scheme shapes
//!
//! - Implicit: one (N_interior × N_interior) matrix with diagonal
//!   1 + 2r and off-diagonals −r. No boundary rows: boundary points
//!   are excluded from the solved system and folded into the
//!   right-hand side instead.
//! - Crank-Nicolson: two (N_full × N_full) matrices, A (1 + 2r / −r)
//!   and B (1 − 2r / r), both with Dirichlet boundary rows applied.

use nalgebra::DMatrix;

/// Build an n×n tridiagonal matrix with constant bands
///
/// `diag` fills the main diagonal, `off` both off-diagonals. For a
/// single unknown (n = 1) the result is just `[diag]`.
pub fn tridiagonal(n: usize, diag: f64, off: f64) -> DMatrix<f64> {
    let mut m = DMatrix::zeros(n, n);
    for i in 0..n {
        if i > 0 {
            m[(i, i - 1)] = off;
        }
        m[(i, i)] = diag;
        if i + 1 < n {
            m[(i, i + 1)] = off;
        }
    }
    m
}

/// Overwrite the first and last rows with identity rows
///
/// After this, the first and last unknowns of any system A·u = b solve
/// to b's first and last entries exactly — the mechanism that pins
/// Dirichlet boundary values in the Crank-Nicolson scheme.
pub fn apply_dirichlet_rows(m: &mut DMatrix<f64>) {
    let n = m.nrows();
    for col in 0..n {
        m[(0, col)] = 0.0;
        m[(n - 1, col)] = 0.0;
    }
    m[(0, 0)] = 1.0;
    m[(n - 1, n - 1)] = 1.0;
}

/// Coefficient matrix of the implicit (backward-time) scheme
///
/// Sized to the interior point count; diagonal 1 + 2r, off-diagonals
/// −r. Boundary contributions are folded into the right-hand side by
/// the scheme, so no boundary rows are needed here.
pub fn implicit_interior_matrix(n_interior: usize, r: f64) -> DMatrix<f64> {
    tridiagonal(n_interior, 1.0 + 2.0 * r, -r)
}

/// Coefficient matrix pair (A, B) of the Crank-Nicolson scheme
///
/// Both matrices span the full point range. A carries 1 + 2r / −r,
/// B carries 1 − 2r / r; the first and last rows of both are Dirichlet
/// identity rows. With r = 0 both degenerate to the identity.
pub fn crank_nicolson_pair(n_full: usize, r: f64) -> (DMatrix<f64>, DMatrix<f64>) {
    let mut a = tridiagonal(n_full, 1.0 + 2.0 * r, -r);
    let mut b = tridiagonal(n_full, 1.0 - 2.0 * r, r);
    apply_dirichlet_rows(&mut a);
    apply_dirichlet_rows(&mut b);
    (a, b)
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tridiagonal_pattern() {
        let m = tridiagonal(4, 2.0, -1.0);

        // Bands
        for i in 0..4 {
            assert_eq!(m[(i, i)], 2.0);
        }
        for i in 1..4 {
            assert_eq!(m[(i, i - 1)], -1.0);
            assert_eq!(m[(i - 1, i)], -1.0);
        }

        // Everything else zero
        assert_eq!(m[(0, 2)], 0.0);
        assert_eq!(m[(0, 3)], 0.0);
        assert_eq!(m[(3, 0)], 0.0);
    }

    #[test]
    fn test_tridiagonal_single_unknown() {
        let m = tridiagonal(1, 3.0, -1.0);
        assert_eq!(m.nrows(), 1);
        assert_eq!(m[(0, 0)], 3.0);
    }

    #[test]
    fn test_dirichlet_rows_are_identity_rows() {
        let mut m = tridiagonal(5, 1.5, -0.25);
        apply_dirichlet_rows(&mut m);

        for col in 0..5 {
            assert_eq!(m[(0, col)], if col == 0 { 1.0 } else { 0.0 });
            assert_eq!(m[(4, col)], if col == 4 { 1.0 } else { 0.0 });
        }

        // Interior rows untouched
        assert_eq!(m[(2, 1)], -0.25);
        assert_eq!(m[(2, 2)], 1.5);
        assert_eq!(m[(2, 3)], -0.25);
    }

    #[test]
    fn test_implicit_matrix_coefficients() {
        let r = 0.25;
        let a = implicit_interior_matrix(15, r);

        assert_eq!(a.nrows(), 15);
        assert_eq!(a[(7, 7)], 1.5);
        assert_eq!(a[(7, 6)], -0.25);
        assert_eq!(a[(7, 8)], -0.25);

        // No boundary rows: corners keep the tridiagonal pattern
        assert_eq!(a[(0, 0)], 1.5);
        assert_eq!(a[(0, 1)], -0.25);
    }

    #[test]
    fn test_crank_nicolson_pair_coefficients() {
        let r = 0.11;
        let (a, b) = crank_nicolson_pair(17, r);

        assert!((a[(5, 5)] - 1.22).abs() < 1e-12);
        assert!((a[(5, 4)] + 0.11).abs() < 1e-12);
        assert!((b[(5, 5)] - 0.78).abs() < 1e-12);
        assert!((b[(5, 6)] - 0.11).abs() < 1e-12);

        // Boundary rows pin the boundary unknowns on both matrices
        assert_eq!(a[(0, 0)], 1.0);
        assert_eq!(a[(0, 1)], 0.0);
        assert_eq!(a[(16, 16)], 1.0);
        assert_eq!(a[(16, 15)], 0.0);
        assert_eq!(b[(0, 0)], 1.0);
        assert_eq!(b[(16, 16)], 1.0);
    }

    #[test]
    fn test_crank_nicolson_zero_ratio_is_identity() {
        let (a, b) = crank_nicolson_pair(9, 0.0);
        let identity = DMatrix::<f64>::identity(9, 9);
        assert_eq!(a, identity);
        assert_eq!(b, identity);
    }
}
