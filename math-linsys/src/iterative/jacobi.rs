//! Jacobi iteration
//!
//! Splits `A = L + D + U` and iterates `x = -D^(-1) (L + U) x + D^(-1) b`,
//! updating every component from the previous iterate only.

use crate::error::Result;
use crate::iterative::fixed_point::IterationConfig;
use crate::iterative::stationary::{IterativeSolution, invert_splitting, stationary_solve};
use crate::matrix_ops::split_ldu;
use crate::traits::{IterationPair, IterationScheme, Real};
use ndarray::{Array1, Array2};

/// Jacobi scheme: `M = -D^(-1) (L + U)`, `c = D^(-1) b`
///
/// Requires every diagonal entry of `A` to be nonzero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Jacobi;

impl<T: Real> IterationScheme<T> for Jacobi {
    fn name(&self) -> &'static str {
        "Jacobi"
    }

    fn iteration_pair(&self, a: &Array2<T>, b: &Array1<T>) -> Result<IterationPair<T>> {
        let split = split_ldu(a);
        let diag_inverse = invert_splitting(&split.diagonal, "Jacobi")?;

        let m = -diag_inverse.dot(&(&split.lower + &split.upper));
        let c = diag_inverse.dot(b);
        Ok(IterationPair { m, c })
    }
}

/// Solve Ax = b using Jacobi iteration from the zero vector
pub fn jacobi<T: Real>(
    a: &Array2<T>,
    b: &Array1<T>,
    config: &IterationConfig<T>,
) -> Result<IterativeSolution<T>> {
    jacobi_with_guess(a, b, None, config)
}

/// Solve Ax = b using Jacobi iteration with an initial guess
pub fn jacobi_with_guess<T: Real>(
    a: &Array2<T>,
    b: &Array1<T>,
    x0: Option<&Array1<T>>,
    config: &IterationConfig<T>,
) -> Result<IterativeSolution<T>> {
    stationary_solve(&Jacobi, a, b, x0, config)
}
