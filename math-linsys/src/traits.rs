//! Core traits for linear algebra operations
//!
//! This module defines the fundamental abstractions used throughout the solver library:
//! - [`Real`]: Trait for the floating-point scalar types the solvers work with
//! - [`LinearOperator`]: Trait for matrix-like objects that can perform matrix-vector products
//! - [`IterationScheme`]: Trait for strategies deriving a fixed-point iteration from `A x = b`

use crate::error::Result;
use ndarray::{Array1, Array2, LinalgScalar, ScalarOperand};
use num_traits::{Float, FromPrimitive, NumAssign};
use std::fmt::Debug;

/// Trait for scalar types that can be used in linear algebra operations.
///
/// # Implementations
///
/// Provided for:
/// - `f64` (default for most applications)
/// - `f32` (for memory-constrained applications)
pub trait Real:
    Float
    + NumAssign
    + FromPrimitive
    + LinalgScalar
    + ScalarOperand
    + Debug
    + Send
    + Sync
    + 'static
{
}

impl Real for f64 {}

impl Real for f32 {}

/// Trait for linear operators (matrices) that can perform matrix-vector products.
///
/// The fixed-point engine only needs `y = M * x`, so any operator
/// exposing that product can drive it.
pub trait LinearOperator<T: Real>: Send + Sync {
    /// Number of rows in the operator
    fn num_rows(&self) -> usize;

    /// Number of columns in the operator
    fn num_cols(&self) -> usize;

    /// Apply the operator: y = A * x
    fn apply(&self, x: &Array1<T>) -> Array1<T>;

    /// Check if the operator is square
    fn is_square(&self) -> bool {
        self.num_rows() == self.num_cols()
    }
}

impl<T: Real> LinearOperator<T> for Array2<T> {
    fn num_rows(&self) -> usize {
        self.nrows()
    }

    fn num_cols(&self) -> usize {
        self.ncols()
    }

    fn apply(&self, x: &Array1<T>) -> Array1<T> {
        self.dot(x)
    }
}

/// Iteration matrix and additive vector of a stationary method:
/// `x_{k+1} = M * x_k + c`.
///
/// Owned by the call that built it and dropped once the iteration ends.
#[derive(Debug, Clone)]
pub struct IterationPair<T: Real> {
    /// Iteration matrix M
    pub m: Array2<T>,
    /// Additive vector c
    pub c: Array1<T>,
}

/// A stationary iterative method, described by how it splits `A x = b`
/// into a fixed-point problem.
///
/// The splitting (and any inversion it needs) is computed once per solve,
/// never per iteration.
pub trait IterationScheme<T: Real> {
    /// Human-readable method name, used in logs and errors
    fn name(&self) -> &'static str;

    /// Derive `(M, c)` from the system `(A, b)`.
    ///
    /// Callers guarantee `a` is square and `b.len() == a.nrows()`.
    fn iteration_pair(&self, a: &Array2<T>, b: &Array1<T>) -> Result<IterationPair<T>>;
}
