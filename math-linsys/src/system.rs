//! Linear systems `A x = b` and their solutions

use crate::error::Result;
use crate::matrix_ops::ensure_len;
use crate::traits::Real;
use ndarray::{Array1, Array2, s};

/// A linear system `A x = b` whose matrix and right-hand side have the same
/// number of rows.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem<T: Real> {
    a: Array2<T>,
    b: Array1<T>,
}

impl<T: Real> LinearSystem<T> {
    /// Pair a matrix with a right-hand side, checking their row counts agree
    pub fn new(a: Array2<T>, b: Array1<T>) -> Result<Self> {
        ensure_len(a.nrows(), b.len())?;
        Ok(Self { a, b })
    }

    /// Split an augmented matrix `[A | b]` back into a system.
    ///
    /// The last column becomes `b`; a matrix without columns yields an
    /// empty `A` with a zero right-hand side.
    pub fn from_augmented(augmented: &Array2<T>) -> Self {
        let rows = augmented.nrows();
        let Some(last) = augmented.ncols().checked_sub(1) else {
            return Self {
                a: Array2::zeros((rows, 0)),
                b: Array1::zeros(rows),
            };
        };
        Self {
            a: augmented.slice(s![.., ..last]).to_owned(),
            b: augmented.column(last).to_owned(),
        }
    }

    /// Coefficient matrix
    pub fn a(&self) -> &Array2<T> {
        &self.a
    }

    /// Right-hand side
    pub fn b(&self) -> &Array1<T> {
        &self.b
    }

    /// Number of equations (rows)
    pub fn num_equations(&self) -> usize {
        self.a.nrows()
    }

    /// Number of unknowns (columns)
    pub fn num_unknowns(&self) -> usize {
        self.a.ncols()
    }

    /// Build the augmented matrix `[A | b]`
    pub fn augmented(&self) -> Array2<T> {
        let cols = self.a.ncols();
        let mut augmented = Array2::zeros((self.a.nrows(), cols + 1));
        augmented.slice_mut(s![.., ..cols]).assign(&self.a);
        augmented.column_mut(cols).assign(&self.b);
        augmented
    }

    /// Consume the system, returning `(A, b)`
    pub fn into_parts(self) -> (Array2<T>, Array1<T>) {
        (self.a, self.b)
    }
}

/// Solution of a direct solve
///
/// Unknowns that were left undetermined by the system received the
/// configured default value and are listed in `free_variables`.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<T: Real> {
    /// Solution vector
    pub x: Array1<T>,
    /// Indices of the free unknowns, in ascending order
    pub free_variables: Vec<usize>,
}

impl<T: Real> Solution<T> {
    /// True when every unknown was determined by the system
    pub fn is_unique(&self) -> bool {
        self.free_variables.is_empty()
    }

    /// Number of unknowns
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// True for a system with no unknowns
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}
