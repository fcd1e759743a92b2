//! Gaussian elimination
//!
//! Two reductions to row-echelon form share one elimination step:
//! - [`regular_gaussian_elim`] never swaps rows and refuses a zero pivot
//! - [`complete_gaussian_elim`] swaps rows and skips rank-deficient columns,
//!   so it accepts any rectangular or singular input
//!
//! [`gaussian_solve`] and [`pivoted_gaussian_solve`] run them on the
//! augmented matrix `[A | b]` and substitute back.

use crate::direct::back_substitution::{BackSubstitutionConfig, back_substitution};
use crate::error::{Result, SolverError};
use crate::matrix_ops::ensure_square;
use crate::system::{LinearSystem, Solution};
use crate::traits::Real;
use ndarray::{Array1, Array2};
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How [`complete_gaussian_elim_with`] chooses the pivot row in a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PivotStrategy {
    /// First nonzero entry at or below the current row (default)
    #[default]
    FirstNonZero,
    /// Entry of largest magnitude at or below the current row (partial pivoting)
    LargestMagnitude,
}

/// Subtract multiples of the pivot row from every row below it so that
/// column `col` becomes zero under the pivot.
///
/// `record` receives `(row, coefficient)` for each eliminated row. Entries left
/// of `col` in the pivot row must already be zero.
pub(crate) fn eliminate_below<T, F>(work: &mut Array2<T>, row: usize, col: usize, mut record: F)
where
    T: Real,
    F: FnMut(usize, T),
{
    let (rows, cols) = work.dim();
    let pivot = work[[row, col]];

    for j in (row + 1)..rows {
        let coef = work[[j, col]] / pivot;
        record(j, coef);
        if coef == T::zero() {
            continue;
        }
        work[[j, col]] = T::zero();
        for k in (col + 1)..cols {
            let update = coef * work[[row, k]];
            work[[j, k]] -= update;
        }
    }
}

/// Reduce a matrix to row-echelon form without row swaps.
///
/// Pivots are taken on the diagonal for `i < min(rows - 1, cols)`, so an
/// augmented matrix `[A | b]` can be passed directly.
///
/// # Errors
/// [`SolverError::NotRegular`] as soon as a pivot is exactly zero, even when
/// swapping rows would have succeeded.
pub fn regular_gaussian_elim<T: Real>(a: &Array2<T>) -> Result<Array2<T>> {
    let mut work = a.to_owned();
    let pivots = a.nrows().saturating_sub(1).min(a.ncols());

    for i in 0..pivots {
        if work[[i, i]] == T::zero() {
            return Err(SolverError::NotRegular { pivot: i });
        }
        eliminate_below(&mut work, i, i, |_, _| {});
    }

    Ok(work)
}

/// Reduce any matrix to row-echelon form, swapping rows as needed.
///
/// Uses [`PivotStrategy::FirstNonZero`]; see [`complete_gaussian_elim_with`].
pub fn complete_gaussian_elim<T: Real>(a: &Array2<T>) -> Array2<T> {
    complete_gaussian_elim_with(a, PivotStrategy::FirstNonZero)
}

/// Reduce any matrix to row-echelon form, swapping rows as needed.
///
/// Row and column cursors advance independently: a column with no nonzero
/// entry at or below the current row is skipped without consuming a row.
/// Never fails, whatever the shape or rank of `a`.
pub fn complete_gaussian_elim_with<T: Real>(a: &Array2<T>, strategy: PivotStrategy) -> Array2<T> {
    let mut work = a.to_owned();
    let (rows, cols) = work.dim();
    let mut row = 0;
    let mut col = 0;

    while row < rows && col < cols {
        let Some(pivot_row) = find_pivot(&work, row, col, strategy) else {
            log::debug!("column {} has no pivot at or below row {}", col, row);
            col += 1;
            continue;
        };

        if pivot_row != row {
            log::debug!("swapping rows {} and {}", row, pivot_row);
            for k in 0..cols {
                work.swap([row, k], [pivot_row, k]);
            }
        }

        eliminate_below(&mut work, row, col, |_, _| {});
        row += 1;
        col += 1;
    }

    work
}

fn find_pivot<T: Real>(
    work: &Array2<T>,
    row: usize,
    col: usize,
    strategy: PivotStrategy,
) -> Option<usize> {
    let mut candidates = (row..work.nrows()).filter(|&i| work[[i, col]] != T::zero());
    match strategy {
        PivotStrategy::FirstNonZero => candidates.next(),
        PivotStrategy::LargestMagnitude => candidates.max_by(|&x, &y| {
            work[[x, col]]
                .abs()
                .partial_cmp(&work[[y, col]].abs())
                .unwrap_or(Ordering::Equal)
        }),
    }
}

/// Solve a square system by regular elimination on `[A | b]` followed by
/// back substitution.
///
/// # Errors
/// Shape errors, [`SolverError::NotRegular`] if a row swap would be needed,
/// and [`SolverError::NoSolution`] for inconsistent systems.
pub fn gaussian_solve<T: Real>(a: &Array2<T>, b: &Array1<T>) -> Result<Solution<T>> {
    ensure_square(a)?;
    let system = LinearSystem::new(a.to_owned(), b.to_owned())?;

    let reduced = regular_gaussian_elim(&system.augmented())?;
    let (upper, rhs) = LinearSystem::from_augmented(&reduced).into_parts();
    back_substitution(&upper, &rhs)
}

/// Solve a square system by complete elimination on `[A | b]`, free unknowns
/// set to zero.
///
/// See [`pivoted_gaussian_solve_with`].
pub fn pivoted_gaussian_solve<T: Real>(a: &Array2<T>, b: &Array1<T>) -> Result<Solution<T>> {
    pivoted_gaussian_solve_with(a, b, &BackSubstitutionConfig::default())
}

/// Solve a square system by complete elimination on `[A | b]`.
///
/// Each nonzero row of the echelon form determines the unknown of its
/// leading column; columns without a pivot are free and take
/// `config.free_value`.
///
/// # Errors
/// Shape errors, and [`SolverError::NoSolution`] when a row of the reduced
/// matrix is zero except for its right-hand side.
pub fn pivoted_gaussian_solve_with<T: Real>(
    a: &Array2<T>,
    b: &Array1<T>,
    config: &BackSubstitutionConfig<T>,
) -> Result<Solution<T>> {
    ensure_square(a)?;
    let n = a.ncols();

    let system = LinearSystem::new(a.to_owned(), b.to_owned())?;
    let reduced = complete_gaussian_elim(&system.augmented());

    let mut x = Array1::from_elem(n, config.free_value);
    let mut is_pivot = vec![false; n];

    for i in (0..reduced.nrows()).rev() {
        let Some(lead) = (0..n).find(|&j| reduced[[i, j]] != T::zero()) else {
            if reduced[[i, n]] != T::zero() {
                return Err(SolverError::NoSolution { row: i });
            }
            continue;
        };

        let mut total = T::zero();
        for j in ((lead + 1)..n).rev() {
            total += reduced[[i, j]] * x[j];
        }
        x[lead] = (reduced[[i, n]] - total) / reduced[[i, lead]];
        is_pivot[lead] = true;
    }

    let free_variables: Vec<usize> = (0..n).filter(|&j| !is_pivot[j]).collect();
    for &j in &free_variables {
        log::warn!(
            "x{} is a free parameter, using {:?} as default",
            j,
            config.free_value
        );
    }

    Ok(Solution { x, free_variables })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix_ops::is_row_echelon;
    use approx::assert_relative_eq;
    use ndarray::array;

    fn assert_matrix_eq(actual: &Array2<f64>, expected: &Array2<f64>) {
        assert_eq!(actual.dim(), expected.dim());
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert_relative_eq!(*a, *e, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_regular_identity() {
        let a = Array2::<f64>::eye(3);
        assert_eq!(regular_gaussian_elim(&a).unwrap(), a);
    }

    #[test]
    fn test_regular_square() {
        let a = array![[2.0, 2.0, 3.0], [1.0, 3.0, 4.0], [1.0, 1.0, 1.0]];
        let expected = array![[2.0, 2.0, 3.0], [0.0, 2.0, 2.5], [0.0, 0.0, -0.5]];
        assert_matrix_eq(&regular_gaussian_elim(&a).unwrap(), &expected);

        // the last pivot is never checked
        let a = array![[1.0, 2.0, 3.0], [1.0, 1.0, 1.0], [1.0, 1.0, 1.0]];
        let expected = array![[1.0, 2.0, 3.0], [0.0, -1.0, -2.0], [0.0, 0.0, 0.0]];
        assert_matrix_eq(&regular_gaussian_elim(&a).unwrap(), &expected);
    }

    #[test]
    fn test_regular_rectangular() {
        let tall = array![[1.0, 2.0], [1.0, 3.0], [1.0, 1.0]];
        let expected = array![[1.0, 2.0], [0.0, 1.0], [0.0, 0.0]];
        assert_matrix_eq(&regular_gaussian_elim(&tall).unwrap(), &expected);

        let wide = array![[1.0, 2.0, 3.0, 4.0], [1.0, 3.0, 4.0, 5.0], [1.0, 1.0, 1.0, 1.0]];
        let expected = array![[1.0, 2.0, 3.0, 4.0], [0.0, 1.0, 1.0, 1.0], [0.0, 0.0, -1.0, -2.0]];
        assert_matrix_eq(&regular_gaussian_elim(&wide).unwrap(), &expected);
    }

    #[test]
    fn test_regular_rejects_zero_pivot() {
        let a = array![[1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, 1.0]];
        assert_eq!(
            regular_gaussian_elim(&a).unwrap_err(),
            SolverError::NotRegular { pivot: 1 }
        );

        // solvable with a swap, still refused
        let permutation = array![[0.0, 1.0], [1.0, 0.0]];
        assert_eq!(
            regular_gaussian_elim(&permutation).unwrap_err(),
            SolverError::NotRegular { pivot: 0 }
        );
    }

    #[test]
    fn test_complete_rank_deficient() {
        let a = array![[2.0, 2.0, 3.0], [1.0, 1.0, 1.0], [1.0, 1.0, 1.0]];
        let expected = array![[2.0, 2.0, 3.0], [0.0, 0.0, -0.5], [0.0, 0.0, 0.0]];
        assert_matrix_eq(&complete_gaussian_elim(&a), &expected);

        let a = array![[1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 2.0, 3.0]];
        let expected = array![[1.0, 1.0, 1.0], [0.0, 1.0, 2.0], [0.0, 0.0, 0.0]];
        assert_matrix_eq(&complete_gaussian_elim(&a), &expected);

        let ones = Array2::<f64>::ones((3, 3));
        let expected = array![[1.0, 1.0, 1.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]];
        assert_matrix_eq(&complete_gaussian_elim(&ones), &expected);
    }

    #[test]
    fn test_complete_rectangular() {
        let tall = array![[1.0, 2.0], [1.0, 3.0], [1.0, 1.0]];
        let expected = array![[1.0, 2.0], [0.0, 1.0], [0.0, 0.0]];
        assert_matrix_eq(&complete_gaussian_elim(&tall), &expected);

        let wide = array![
            [1.0, 1.0, 2.0, 1.0, 1.0],
            [1.0, 1.0, 1.0, 3.0, 2.0],
            [1.0, 1.0, 2.0, 1.0, 3.0],
            [1.0, 1.0, 1.0, 1.0, 4.0]
        ];
        let expected = array![
            [1.0, 1.0, 2.0, 1.0, 1.0],
            [0.0, 0.0, -1.0, 2.0, 1.0],
            [0.0, 0.0, 0.0, -2.0, 2.0],
            [0.0, 0.0, 0.0, 0.0, 2.0]
        ];
        let reduced = complete_gaussian_elim(&wide);
        assert_matrix_eq(&reduced, &expected);
        assert!(is_row_echelon(&reduced));
    }

    #[test]
    fn test_complete_swaps_rows() {
        let permutation = array![[0.0, 1.0], [1.0, 0.0]];
        assert_eq!(
            complete_gaussian_elim(&permutation),
            array![[1.0, 0.0], [0.0, 1.0]]
        );
    }

    #[test]
    fn test_largest_magnitude_pivot() {
        let a = array![[1.0, 2.0], [4.0, 1.0]];
        let reduced = complete_gaussian_elim_with(&a, PivotStrategy::LargestMagnitude);
        assert_matrix_eq(&reduced, &array![[4.0, 1.0], [0.0, 1.75]]);

        let first = complete_gaussian_elim(&a);
        assert_matrix_eq(&first, &array![[1.0, 2.0], [0.0, -7.0]]);
    }

    #[test]
    fn test_gaussian_solve() {
        let a = array![[2.0_f64, 1.0, -1.0], [-3.0, -1.0, 2.0], [-2.0, 1.0, 2.0]];
        let b = array![8.0_f64, -11.0, -3.0];
        let solution = gaussian_solve(&a, &b).unwrap();

        assert!(solution.is_unique());
        assert_relative_eq!(solution.x[0], 2.0, epsilon = 1e-12);
        assert_relative_eq!(solution.x[1], 3.0, epsilon = 1e-12);
        assert_relative_eq!(solution.x[2], -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_gaussian_solve_needs_swap() {
        let a = array![[0.0, 1.0], [1.0, 0.0]];
        let b = array![2.0, 3.0];

        assert!(gaussian_solve(&a, &b).unwrap_err().is_regularity_error());

        let solution = pivoted_gaussian_solve(&a, &b).unwrap();
        assert_eq!(solution.x, array![3.0, 2.0]);
    }

    #[test]
    fn test_pivoted_solve_underdetermined() {
        let a = array![[0.0, 1.0], [0.0, 1.0]];
        let solution = pivoted_gaussian_solve(&a, &array![1.0, 1.0]).unwrap();
        assert_eq!(solution.x, array![0.0, 1.0]);
        assert_eq!(solution.free_variables, vec![0]);

        let err = pivoted_gaussian_solve(&a, &array![1.0, 2.0]).unwrap_err();
        assert_eq!(err, SolverError::NoSolution { row: 1 });
    }
}
