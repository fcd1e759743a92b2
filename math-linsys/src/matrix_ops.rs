//! Dense matrix utilities shared by the direct and iterative solvers
//!
//! Shape and structure checks, the `L + D + U` splitting used by the
//! stationary methods, and a Gauss-Jordan inverse.

use crate::error::{Result, SolverError};
use crate::traits::Real;
use ndarray::Array2;

/// Strict-lower, diagonal and strict-upper parts of a matrix, `A = L + D + U`
#[derive(Debug, Clone)]
pub struct SplitMatrix<T: Real> {
    /// Entries strictly below the diagonal
    pub lower: Array2<T>,
    /// Diagonal entries
    pub diagonal: Array2<T>,
    /// Entries strictly above the diagonal
    pub upper: Array2<T>,
}

/// Check whether a matrix is square
#[inline]
pub fn is_square<T>(a: &Array2<T>) -> bool {
    a.nrows() == a.ncols()
}

/// Fail with [`SolverError::NotSquare`] unless `a` is square
pub fn ensure_square<T>(a: &Array2<T>) -> Result<()> {
    if is_square(a) {
        Ok(())
    } else {
        Err(SolverError::NotSquare {
            rows: a.nrows(),
            cols: a.ncols(),
        })
    }
}

/// Fail with [`SolverError::DimensionMismatch`] unless `got == expected`
#[inline]
pub fn ensure_len(expected: usize, got: usize) -> Result<()> {
    if expected == got {
        Ok(())
    } else {
        Err(SolverError::DimensionMismatch { expected, got })
    }
}

/// Position `(row, col)` of the first nonzero entry strictly below the diagonal
pub fn first_nonzero_below_diagonal<T: Real>(a: &Array2<T>) -> Option<(usize, usize)> {
    (1..a.nrows()).find_map(|i| {
        (0..i.min(a.ncols()))
            .find(|&j| a[[i, j]] != T::zero())
            .map(|j| (i, j))
    })
}

/// Every strictly-below-diagonal entry is exactly zero
pub fn is_upper_triangular<T: Real>(a: &Array2<T>) -> bool {
    first_nonzero_below_diagonal(a).is_none()
}

/// Every strictly-above-diagonal entry is exactly zero
pub fn is_lower_triangular<T: Real>(a: &Array2<T>) -> bool {
    a.indexed_iter()
        .all(|((i, j), &v)| j <= i || v == T::zero())
}

/// Check the row-echelon shape: each nonzero row starts strictly to the
/// right of the row above, and zero rows sit at the bottom.
pub fn is_row_echelon<T: Real>(a: &Array2<T>) -> bool {
    let mut previous_lead: Option<usize> = None;
    let mut seen_zero_row = false;

    for row in a.rows() {
        match row.iter().position(|&v| v != T::zero()) {
            None => seen_zero_row = true,
            Some(lead) => {
                if seen_zero_row || previous_lead.is_some_and(|prev| lead <= prev) {
                    return false;
                }
                previous_lead = Some(lead);
            }
        }
    }
    true
}

/// Split `a` into its strict-lower, diagonal and strict-upper parts
pub fn split_ldu<T: Real>(a: &Array2<T>) -> SplitMatrix<T> {
    let shape = a.raw_dim();
    let mut lower = Array2::zeros(shape);
    let mut diagonal = Array2::zeros(shape);
    let mut upper = Array2::zeros(shape);

    for ((i, j), &v) in a.indexed_iter() {
        match i.cmp(&j) {
            std::cmp::Ordering::Greater => lower[[i, j]] = v,
            std::cmp::Ordering::Equal => diagonal[[i, j]] = v,
            std::cmp::Ordering::Less => upper[[i, j]] = v,
        }
    }

    SplitMatrix {
        lower,
        diagonal,
        upper,
    }
}

/// Invert a square matrix by Gauss-Jordan elimination with partial pivoting.
///
/// A pivot column with no nonzero candidate is reported as
/// [`SolverError::NotRegular`]. The test is exact, so badly scaled but
/// invertible matrices are accepted.
pub fn invert<T: Real>(a: &Array2<T>) -> Result<Array2<T>> {
    ensure_square(a)?;
    let n = a.nrows();

    let mut work = a.clone();
    let mut inv = Array2::eye(n);

    for k in 0..n {
        let mut max_val = work[[k, k]].abs();
        let mut max_row = k;
        for i in (k + 1)..n {
            let val = work[[i, k]].abs();
            if val > max_val {
                max_val = val;
                max_row = i;
            }
        }

        if max_val == T::zero() {
            return Err(SolverError::NotRegular { pivot: k });
        }

        if max_row != k {
            for j in 0..n {
                work.swap([k, j], [max_row, j]);
                inv.swap([k, j], [max_row, j]);
            }
        }

        let pivot_inv = T::one() / work[[k, k]];
        for j in 0..n {
            work[[k, j]] *= pivot_inv;
            inv[[k, j]] *= pivot_inv;
        }

        for i in 0..n {
            if i == k {
                continue;
            }
            let factor = work[[i, k]];
            if factor == T::zero() {
                continue;
            }
            for j in 0..n {
                let w = work[[k, j]];
                let v = inv[[k, j]];
                work[[i, j]] -= factor * w;
                inv[[i, j]] -= factor * v;
            }
        }
    }

    Ok(inv)
}
