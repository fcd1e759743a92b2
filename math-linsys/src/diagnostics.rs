//! Convergence diagnostics for the iterative solvers
//!
//! Nothing here changes a solve: [`is_diagonally_dominant`] is an advisory
//! check a caller can run before iterating, and [`ResidualReport`] measures
//! how well a final iterate satisfies the original system.

use crate::error::Result;
use crate::matrix_ops::{ensure_len, is_square};
use crate::traits::Real;
use crate::vector_ops::vector_norm;
use ndarray::{Array1, Array2};
use num_traits::ToPrimitive;

/// Strict row diagonal dominance: `|a_ii| > Σ_{j≠i} |a_ij|` for every row.
///
/// Sufficient, not necessary, for Jacobi and Gauss-Seidel to converge.
/// Non-square matrices are never dominant.
pub fn is_diagonally_dominant<T: Real>(a: &Array2<T>) -> bool {
    if !is_square(a) {
        return false;
    }

    let two = T::one() + T::one();
    a.rows().into_iter().enumerate().all(|(i, row)| {
        let row_sum = row.iter().fold(T::zero(), |acc, v| acc + v.abs());
        two * row[i].abs() > row_sum
    })
}

/// How well an approximate solution satisfies `A x = b`
#[derive(Debug, Clone, PartialEq)]
pub struct ResidualReport<T: Real> {
    /// `A x` for the reported iterate
    pub predicted: Array1<T>,
    /// Euclidean distance `||A x - b||`
    pub residual: T,
}

impl<T: Real> ResidualReport<T> {
    /// Evaluate `x` against the system `(a, b)`
    pub fn compute(a: &Array2<T>, b: &Array1<T>, x: &Array1<T>) -> Result<Self> {
        ensure_len(a.ncols(), x.len())?;
        ensure_len(a.nrows(), b.len())?;

        let predicted = a.dot(x);
        let residual = vector_norm(&(&predicted - b));
        Ok(Self {
            predicted,
            residual,
        })
    }

    /// Emit the report through the `log` facade
    pub fn log(&self, method: &str) {
        log::info!(
            "{}: final iterate predicts b = {:?}, residual = {:.6e}",
            method,
            self.predicted.as_slice().unwrap_or(&[]),
            self.residual.to_f64().unwrap_or(0.0)
        );
    }
}
