//! Shared driver for the stationary methods
//!
//! Validates the system, asks the [`IterationScheme`] for `(M, c)`, runs the
//! fixed-point engine and evaluates the residual of the final iterate.

use crate::diagnostics::ResidualReport;
use crate::error::{Result, SolverError};
use crate::iterative::fixed_point::{IterationConfig, StopReason, fixed_point_iterate};
use crate::matrix_ops::{ensure_len, ensure_square, invert};
use crate::traits::{IterationPair, IterationScheme, Real};
use ndarray::{Array1, Array2};

/// Stationary iterative solver result
#[derive(Debug, Clone)]
pub struct IterativeSolution<T: Real> {
    /// Solution vector
    pub x: Array1<T>,
    /// Number of fixed-point steps taken
    pub iterations: usize,
    /// Why the iteration stopped
    pub stop_reason: StopReason,
    /// Distance between the last two iterates
    pub last_step: T,
    /// Final residual ||A x - b||
    pub residual: T,
}

impl<T: Real> IterativeSolution<T> {
    /// Whether convergence was achieved
    pub fn converged(&self) -> bool {
        self.stop_reason == StopReason::Converged
    }
}

/// Solve `A x = b` with any stationary scheme.
///
/// # Arguments
/// * `scheme` - Strategy deriving `(M, c)` from `(A, b)`
/// * `a` - Square system matrix
/// * `b` - Right-hand side vector
/// * `x0` - Optional initial guess (zero vector if `None`)
/// * `config` - Threshold and iteration budget
///
/// # Errors
/// Shape errors, and [`SolverError::Singular`] when the scheme cannot
/// invert its splitting. Non-convergence is reported through
/// [`IterativeSolution::stop_reason`].
pub fn stationary_solve<T, S>(
    scheme: &S,
    a: &Array2<T>,
    b: &Array1<T>,
    x0: Option<&Array1<T>>,
    config: &IterationConfig<T>,
) -> Result<IterativeSolution<T>>
where
    T: Real,
    S: IterationScheme<T> + ?Sized,
{
    ensure_square(a)?;
    ensure_len(a.nrows(), b.len())?;

    let IterationPair { m, c } = scheme.iteration_pair(a, b)?;
    let result = fixed_point_iterate(&m, &c, x0, config)?;

    let report = ResidualReport::compute(a, b, &result.x)?;
    report.log(scheme.name());

    Ok(IterativeSolution {
        x: result.x,
        iterations: result.iterations,
        stop_reason: result.stop_reason,
        last_step: result.last_step,
        residual: report.residual,
    })
}

/// Invert a splitting matrix, reporting failure against the method name
pub(crate) fn invert_splitting<T: Real>(
    splitting: &Array2<T>,
    method: &'static str,
) -> Result<Array2<T>> {
    invert(splitting).map_err(|err| {
        if err.is_regularity_error() {
            SolverError::Singular { method }
        } else {
            err
        }
    })
}
