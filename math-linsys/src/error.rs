//! Error types for the linear system solvers.
//!
//! Direct solvers report shape, triangularity, regularity and consistency
//! problems through [`SolverError`]. Iterative solvers only fail on shape or
//! singular splittings: running out of iterations is reported through
//! [`StopReason`](crate::iterative::StopReason), never as an error.

use thiserror::Error;

/// Errors that can occur while solving a linear system.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// The operation requires a square matrix.
    #[error("matrix is not square: {rows} rows, {cols} columns")]
    NotSquare {
        /// Number of rows of the offending matrix
        rows: usize,
        /// Number of columns of the offending matrix
        cols: usize,
    },

    /// A vector length does not match the matrix it is paired with.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Expected length
        expected: usize,
        /// Actual length provided
        got: usize,
    },

    /// Back substitution was given a matrix with entries below the diagonal.
    #[error("matrix is not upper triangular: nonzero entry at ({row}, {col})")]
    NotUpperTriangular {
        /// Row of the first nonzero strictly-lower entry
        row: usize,
        /// Column of the first nonzero strictly-lower entry
        col: usize,
    },

    /// Unpivoted elimination met a zero pivot.
    #[error("matrix is not regular: zero pivot at position {pivot}")]
    NotRegular {
        /// Index of the zero pivot
        pivot: usize,
    },

    /// The splitting matrix of an iterative method cannot be inverted.
    #[error("{method} splitting matrix is singular")]
    Singular {
        /// Name of the iterative method that built the splitting
        method: &'static str,
    },

    /// A zero pivot row of an upper triangular system is inconsistent.
    #[error("system has no solution: row {row} is inconsistent")]
    NoSolution {
        /// Row where the inconsistency was detected
        row: usize,
    },
}

/// A specialized `Result` type for solver operations.
pub type Result<T> = std::result::Result<T, SolverError>;

impl SolverError {
    /// Returns `true` if this is a shape error.
    ///
    /// This includes `NotSquare` and `DimensionMismatch`.
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            SolverError::NotSquare { .. } | SolverError::DimensionMismatch { .. }
        )
    }

    /// Returns `true` if the matrix could not be reduced or inverted
    /// without pivoting.
    ///
    /// This includes `NotRegular` and `Singular`.
    pub fn is_regularity_error(&self) -> bool {
        matches!(
            self,
            SolverError::NotRegular { .. } | SolverError::Singular { .. }
        )
    }

    /// Returns `true` if the system was found to be inconsistent.
    pub fn is_no_solution(&self) -> bool {
        matches!(self, SolverError::NoSolution { .. })
    }
}
