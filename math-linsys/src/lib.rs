//! Dense linear system solvers
//!
//! This crate solves `A x = b` by direct elimination and by stationary
//! iteration, on dense `ndarray` matrices.
//!
//! # Features
//!
//! - **Direct Solvers**: back substitution, regular and pivoted Gaussian elimination, LU decomposition
//! - **Iterative Solvers**: Richardson, Jacobi, Gauss-Seidel, SOR on a shared fixed-point engine
//! - **Diagnostics**: diagonal dominance check and residual reports
//! - **Generic Scalar Types**: Works with f64 and f32
//!
//! Inputs are never mutated: every routine works on its own copy.
//!
//! # Example
//!
//! ```
//! use math_audio_linsys::{IterationConfig, gauss_seidel, lu_solve};
//! use ndarray::array;
//!
//! let a = array![[4.0_f64, 1.0], [1.0, 3.0]];
//! let b = array![1.0_f64, 2.0];
//!
//! let direct = lu_solve(&a, &b)?;
//!
//! let config = IterationConfig { threshold: 1e-12, max_iterations: 100, print_interval: 0 };
//! let iterative = gauss_seidel(&a, &b, &config)?;
//! assert!(iterative.converged());
//! assert!((direct.x[0] - iterative.x[0]).abs() < 1e-10);
//! # Ok::<(), math_audio_linsys::SolverError>(())
//! ```

pub mod diagnostics;
pub mod direct;
pub mod error;
pub mod iterative;
pub mod matrix_ops;
pub mod system;
pub mod traits;
pub mod vector_ops;

// Re-export main types
pub use error::{Result, SolverError};
pub use system::{LinearSystem, Solution};
pub use traits::{IterationPair, IterationScheme, LinearOperator, Real};

// Re-export direct solvers
pub use direct::{
    BackSubstitutionConfig, LuDecomposition, PivotStrategy, back_substitution,
    back_substitution_with, complete_gaussian_elim, complete_gaussian_elim_with,
    forward_substitution, gaussian_solve, lu_decomposition, lu_solve, pivoted_gaussian_solve,
    pivoted_gaussian_solve_with, regular_gaussian_elim,
};

// Re-export iterative solvers
pub use iterative::{
    FixedPointSolution, GaussSeidel, IterationConfig, IterativeSolution, Jacobi, Richardson, Sor,
    StopReason, fixed_point_iterate, gauss_seidel, gauss_seidel_with_guess, jacobi,
    jacobi_with_guess, richardson, richardson_with_guess, sor, sor_with_guess, stationary_solve,
};

// Re-export diagnostics
pub use diagnostics::{ResidualReport, is_diagonally_dominant};
