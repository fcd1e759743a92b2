//! Richardson (Neumann series) iteration
//!
//! Rewrites `A x = b` as `x = (I - A) x + b`. Converges when the spectral
//! radius of `I - A` is below one, i.e. when `A` is close to the identity.

use crate::error::Result;
use crate::iterative::fixed_point::IterationConfig;
use crate::iterative::stationary::{IterativeSolution, stationary_solve};
use crate::traits::{IterationPair, IterationScheme, Real};
use ndarray::{Array1, Array2};

/// Richardson scheme: `M = I - A`, `c = b`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Richardson;

impl<T: Real> IterationScheme<T> for Richardson {
    fn name(&self) -> &'static str {
        "Richardson"
    }

    fn iteration_pair(&self, a: &Array2<T>, b: &Array1<T>) -> Result<IterationPair<T>> {
        let m = Array2::eye(a.nrows()) - a;
        Ok(IterationPair { m, c: b.clone() })
    }
}

/// Solve Ax = b using Richardson iteration from the zero vector
pub fn richardson<T: Real>(
    a: &Array2<T>,
    b: &Array1<T>,
    config: &IterationConfig<T>,
) -> Result<IterativeSolution<T>> {
    richardson_with_guess(a, b, None, config)
}

/// Solve Ax = b using Richardson iteration with an initial guess
pub fn richardson_with_guess<T: Real>(
    a: &Array2<T>,
    b: &Array1<T>,
    x0: Option<&Array1<T>>,
    config: &IterationConfig<T>,
) -> Result<IterativeSolution<T>> {
    stationary_solve(&Richardson, a, b, x0, config)
}
