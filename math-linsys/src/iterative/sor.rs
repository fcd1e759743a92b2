//! Successive over-relaxation (SOR)
//!
//! Weighted Gauss-Seidel: `M = -(ωL + D)^(-1) (ωU + (ω - 1) D)` and
//! `c = ω (ωL + D)^(-1) b`. `ω = 1` is exactly Gauss-Seidel; values in
//! `(1, 2)` over-relax and often converge faster. Convergence requires
//! `0 < ω < 2`, which is not enforced.

use crate::error::Result;
use crate::iterative::fixed_point::IterationConfig;
use crate::iterative::stationary::{IterativeSolution, invert_splitting, stationary_solve};
use crate::matrix_ops::split_ldu;
use crate::traits::{IterationPair, IterationScheme, Real};
use ndarray::{Array1, Array2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// SOR scheme with relaxation factor `omega`
///
/// Requires `ωL + D` to be invertible.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sor<R> {
    /// Relaxation factor ω
    pub omega: R,
}

impl<R> Sor<R> {
    /// Create an SOR scheme with the given relaxation factor
    pub fn new(omega: R) -> Self {
        Self { omega }
    }
}

impl Default for Sor<f64> {
    fn default() -> Self {
        Self { omega: 1.5 }
    }
}

impl Default for Sor<f32> {
    fn default() -> Self {
        Self { omega: 1.5 }
    }
}

impl<T: Real> IterationScheme<T> for Sor<T> {
    fn name(&self) -> &'static str {
        "SOR"
    }

    fn iteration_pair(&self, a: &Array2<T>, b: &Array1<T>) -> Result<IterationPair<T>> {
        let omega = self.omega;
        let split = split_ldu(a);

        let weighted = &split.lower * omega + &split.diagonal;
        let weighted_inverse = invert_splitting(&weighted, "SOR")?;

        let rhs = &split.upper * omega + &split.diagonal * (omega - T::one());
        let m = -weighted_inverse.dot(&rhs);
        let c = weighted_inverse.dot(b) * omega;
        Ok(IterationPair { m, c })
    }
}

/// Solve Ax = b using SOR from the zero vector
///
/// Pass `&Sor::default()` for the default relaxation factor of 1.5.
pub fn sor<T: Real>(
    a: &Array2<T>,
    b: &Array1<T>,
    scheme: &Sor<T>,
    config: &IterationConfig<T>,
) -> Result<IterativeSolution<T>> {
    sor_with_guess(a, b, None, scheme, config)
}

/// Solve Ax = b using SOR with an initial guess
pub fn sor_with_guess<T: Real>(
    a: &Array2<T>,
    b: &Array1<T>,
    x0: Option<&Array1<T>>,
    scheme: &Sor<T>,
    config: &IterationConfig<T>,
) -> Result<IterativeSolution<T>> {
    stationary_solve(scheme, a, b, x0, config)
}
