//! Gauss-Seidel iteration
//!
//! Iterates `x = -(L + D)^(-1) U x + (L + D)^(-1) b`, which amounts to
//! reusing each freshly updated component within the same sweep.

use crate::error::Result;
use crate::iterative::fixed_point::IterationConfig;
use crate::iterative::stationary::{IterativeSolution, invert_splitting, stationary_solve};
use crate::matrix_ops::split_ldu;
use crate::traits::{IterationPair, IterationScheme, Real};
use ndarray::{Array1, Array2};

/// Gauss-Seidel scheme: `M = -(L + D)^(-1) U`, `c = (L + D)^(-1) b`
///
/// Requires `L + D` to be invertible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GaussSeidel;

impl<T: Real> IterationScheme<T> for GaussSeidel {
    fn name(&self) -> &'static str {
        "Gauss-Seidel"
    }

    fn iteration_pair(&self, a: &Array2<T>, b: &Array1<T>) -> Result<IterationPair<T>> {
        let split = split_ldu(a);
        let ld_inverse = invert_splitting(&(&split.lower + &split.diagonal), "Gauss-Seidel")?;

        let m = -ld_inverse.dot(&split.upper);
        let c = ld_inverse.dot(b);
        Ok(IterationPair { m, c })
    }
}

/// Solve Ax = b using Gauss-Seidel iteration from the zero vector
pub fn gauss_seidel<T: Real>(
    a: &Array2<T>,
    b: &Array1<T>,
    config: &IterationConfig<T>,
) -> Result<IterativeSolution<T>> {
    gauss_seidel_with_guess(a, b, None, config)
}

/// Solve Ax = b using Gauss-Seidel iteration with an initial guess
pub fn gauss_seidel_with_guess<T: Real>(
    a: &Array2<T>,
    b: &Array1<T>,
    x0: Option<&Array1<T>>,
    config: &IterationConfig<T>,
) -> Result<IterativeSolution<T>> {
    stationary_solve(&GaussSeidel, a, b, x0, config)
}
