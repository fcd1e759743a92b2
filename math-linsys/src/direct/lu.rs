//! LU decomposition solver
//!
//! Factors a regular square matrix as `A = L U` with `L` unit lower
//! triangular and `U` upper triangular. No rows are swapped: a zero pivot
//! is reported instead.

use crate::direct::back_substitution::{back_substitution, forward_substitution};
use crate::direct::gaussian::eliminate_below;
use crate::error::{Result, SolverError};
use crate::matrix_ops::{ensure_len, ensure_square};
use crate::system::Solution;
use crate::traits::Real;
use ndarray::{Array1, Array2};

/// LU decomposition result
#[derive(Debug, Clone, PartialEq)]
pub struct LuDecomposition<T: Real> {
    /// Unit lower triangular factor holding the elimination coefficients
    pub l: Array2<T>,
    /// Upper triangular factor
    pub u: Array2<T>,
}

impl<T: Real> LuDecomposition<T> {
    /// Matrix dimension
    pub fn n(&self) -> usize {
        self.u.nrows()
    }

    /// Solve Ax = b using the pre-computed factors
    ///
    /// Forward substitution with `L`, then back substitution with `U`.
    pub fn solve(&self, b: &Array1<T>) -> Result<Solution<T>> {
        ensure_len(self.n(), b.len())?;
        let y = forward_substitution(&self.l, b)?;
        back_substitution(&self.u, &y)
    }

    /// Multiply the factors back together
    pub fn reconstruct(&self) -> Array2<T> {
        self.l.dot(&self.u)
    }
}

/// Compute the LU decomposition of a square regular matrix.
///
/// # Errors
/// - [`SolverError::NotSquare`] if `a` is not square
/// - [`SolverError::NotRegular`] if a pivot is exactly zero
pub fn lu_decomposition<T: Real>(a: &Array2<T>) -> Result<LuDecomposition<T>> {
    ensure_square(a)?;
    let n = a.nrows();

    let mut l = Array2::eye(n);
    let mut u = a.to_owned();

    for i in 0..n.saturating_sub(1) {
        if u[[i, i]] == T::zero() {
            return Err(SolverError::NotRegular { pivot: i });
        }
        eliminate_below(&mut u, i, i, |j, coef| l[[j, i]] = coef);
    }

    Ok(LuDecomposition { l, u })
}

/// Solve Ax = b using LU decomposition
///
/// This is a convenience function that combines factorization and solve.
pub fn lu_solve<T: Real>(a: &Array2<T>, b: &Array1<T>) -> Result<Solution<T>> {
    ensure_len(a.nrows(), b.len())?;
    lu_decomposition(a)?.solve(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix_ops::{is_lower_triangular, is_upper_triangular};
    use approx::assert_relative_eq;
    use ndarray::array;

    fn assert_matrix_eq(actual: &Array2<f64>, expected: &Array2<f64>) {
        assert_eq!(actual.dim(), expected.dim());
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert_relative_eq!(*a, *e, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_lu_2x2() {
        let a = array![[2.0, 1.0], [7.0, 3.0]];
        let lu = lu_decomposition(&a).expect("LU should succeed");

        assert_matrix_eq(&lu.l, &array![[1.0, 0.0], [3.5, 1.0]]);
        assert_matrix_eq(&lu.u, &array![[2.0, 1.0], [0.0, -0.5]]);
    }

    #[test]
    fn test_lu_3x3() {
        let a = array![[5.0, 3.0, 6.0], [5.0, 4.0, 2.0], [2.0, 6.0, 4.0]];
        let lu = lu_decomposition(&a).expect("LU should succeed");

        let expected_l = array![[1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.4, 4.8, 1.0]];
        let expected_u = array![[5.0, 3.0, 6.0], [0.0, 1.0, -4.0], [0.0, 0.0, 20.8]];
        assert_matrix_eq(&lu.l, &expected_l);
        assert_matrix_eq(&lu.u, &expected_u);

        assert!(is_lower_triangular(&lu.l));
        assert!(is_upper_triangular(&lu.u));
        assert_matrix_eq(&lu.reconstruct(), &a);
    }

    #[test]
    fn test_lu_not_regular() {
        let a = array![[5.0, 3.0, 6.0], [5.0, 3.0, 2.0], [2.0, 6.0, 4.0]];
        assert_eq!(
            lu_decomposition(&a).unwrap_err(),
            SolverError::NotRegular { pivot: 1 }
        );
    }

    #[test]
    fn test_lu_not_square() {
        let a = array![[1.0, 2.0, 5.0], [3.0, 4.0, 3.0]];
        assert_eq!(
            lu_decomposition(&a).unwrap_err(),
            SolverError::NotSquare { rows: 2, cols: 3 }
        );
    }

    #[test]
    fn test_lu_factorize_and_solve() {
        let a = array![[4.0_f64, 1.0, 0.0], [1.0, 3.0, 1.0], [0.0, 1.0, 2.0]];

        let factorization = lu_decomposition(&a).expect("Factorization should succeed");

        // Solve multiple RHS
        let b1 = array![1.0_f64, 2.0, 3.0];
        let x1 = factorization.solve(&b1).expect("Solve should succeed");

        let ax1 = a.dot(&x1.x);
        for i in 0..3 {
            assert_relative_eq!(ax1[i], b1[i], epsilon = 1e-10);
        }

        let b2 = array![4.0_f64, 5.0, 6.0];
        let x2 = factorization.solve(&b2).expect("Solve should succeed");

        let ax2 = a.dot(&x2.x);
        for i in 0..3 {
            assert_relative_eq!(ax2[i], b2[i], epsilon = 1e-10);
        }
    }

    #[test]
    fn test_lu_solve_f32() {
        let a = array![[4.0_f32, 1.0], [1.0, 3.0]];
        let b = array![1.0_f32, 2.0];

        let solution = lu_solve(&a, &b).expect("LU solve should succeed");

        let ax = a.dot(&solution.x);
        for i in 0..2 {
            assert_relative_eq!(ax[i], b[i], epsilon = 1e-5);
        }
    }

    #[test]
    fn test_lu_solve_dimension_mismatch() {
        let a = Array2::<f64>::eye(3);
        let b = array![1.0, 2.0];
        assert!(lu_solve(&a, &b).unwrap_err().is_shape_error());
    }
}
