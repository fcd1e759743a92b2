//! Back and forward substitution for triangular systems

use crate::error::{Result, SolverError};
use crate::matrix_ops::{ensure_len, ensure_square, first_nonzero_below_diagonal};
use crate::system::Solution;
use crate::traits::Real;
use ndarray::{Array1, Array2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Back substitution configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BackSubstitutionConfig<R> {
    /// Value assigned to a free unknown (zero pivot on a consistent row)
    pub free_value: R,
}

impl<R: Real> Default for BackSubstitutionConfig<R> {
    fn default() -> Self {
        Self {
            free_value: R::zero(),
        }
    }
}

/// Solve `U x = b` for an upper triangular `U`, with free unknowns set to zero.
///
/// See [`back_substitution_with`].
pub fn back_substitution<T: Real>(upper: &Array2<T>, b: &Array1<T>) -> Result<Solution<T>> {
    back_substitution_with(upper, b, &BackSubstitutionConfig::default())
}

/// Solve `U x = b` for an upper triangular `U`.
///
/// Rows are processed from last to first. A zero on the diagonal makes the
/// unknown free: if the row is already satisfied by the unknowns below it,
/// the unknown takes `config.free_value`, otherwise the system has no
/// solution.
///
/// # Errors
/// - [`SolverError::NotSquare`] if `upper` is not square
/// - [`SolverError::DimensionMismatch`] if `b` does not match the row count
/// - [`SolverError::NotUpperTriangular`] on a nonzero entry below the diagonal
/// - [`SolverError::NoSolution`] on an inconsistent zero-pivot row
pub fn back_substitution_with<T: Real>(
    upper: &Array2<T>,
    b: &Array1<T>,
    config: &BackSubstitutionConfig<T>,
) -> Result<Solution<T>> {
    ensure_square(upper)?;
    ensure_len(upper.nrows(), b.len())?;
    if let Some((row, col)) = first_nonzero_below_diagonal(upper) {
        return Err(SolverError::NotUpperTriangular { row, col });
    }

    let n = upper.nrows();
    let mut x = Array1::zeros(n);
    let mut free_variables = Vec::new();

    for i in (0..n).rev() {
        let mut total = T::zero();
        for j in ((i + 1)..n).rev() {
            total += upper[[i, j]] * x[j];
        }

        let pivot = upper[[i, i]];
        if pivot == T::zero() {
            if total != b[i] {
                return Err(SolverError::NoSolution { row: i });
            }
            log::warn!(
                "x{} is a free parameter, using {:?} as default",
                i,
                config.free_value
            );
            x[i] = config.free_value;
            free_variables.push(i);
        } else {
            x[i] = (b[i] - total) / pivot;
        }
    }

    free_variables.reverse();
    Ok(Solution { x, free_variables })
}

/// Solve `L y = b` for a unit lower triangular `L`.
///
/// The diagonal is taken to be one and entries above it are ignored, so the
/// `L` factor of an LU decomposition can be passed as is.
pub fn forward_substitution<T: Real>(lower: &Array2<T>, b: &Array1<T>) -> Result<Array1<T>> {
    ensure_square(lower)?;
    ensure_len(lower.nrows(), b.len())?;

    let n = lower.nrows();
    let mut y = b.clone();
    for i in 0..n {
        for j in 0..i {
            let l_ij = lower[[i, j]];
            y[i] = y[i] - l_ij * y[j];
        }
    }
    Ok(y)
}
