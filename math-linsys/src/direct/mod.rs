//! Direct solvers for linear systems
//!
//! This module provides direct (non-iterative) solvers:
//! - [`back_substitution`]: upper triangular systems, with free-variable handling
//! - [`regular_gaussian_elim`] / [`complete_gaussian_elim`]: reduction to row-echelon form
//! - [`lu_decomposition`]: unpivoted LU factorization of a regular matrix
//! - [`gaussian_solve`], [`pivoted_gaussian_solve`], [`lu_solve`]: full solves of `A x = b`

mod back_substitution;
mod gaussian;
mod lu;

pub use back_substitution::{
    BackSubstitutionConfig, back_substitution, back_substitution_with, forward_substitution,
};
pub use gaussian::{
    PivotStrategy, complete_gaussian_elim, complete_gaussian_elim_with, gaussian_solve,
    pivoted_gaussian_solve, pivoted_gaussian_solve_with, regular_gaussian_elim,
};
pub use lu::{LuDecomposition, lu_decomposition, lu_solve};
