//! Stationary iterative solvers for linear systems
//!
//! Every method derives a fixed-point problem `x = M x + c` from `A x = b`
//! and hands it to one shared engine:
//! - [`richardson`]: `M = I - A` (Neumann series)
//! - [`jacobi`]: diagonal splitting
//! - [`gauss_seidel`]: lower-triangular splitting
//! - [`sor`]: relaxed Gauss-Seidel with factor ω
//!
//! Reaching the iteration limit is reported through [`StopReason`], never as
//! an error.

mod fixed_point;
mod gauss_seidel;
mod jacobi;
mod richardson;
mod sor;
mod stationary;

pub use fixed_point::{FixedPointSolution, IterationConfig, StopReason, fixed_point_iterate};
pub use gauss_seidel::{GaussSeidel, gauss_seidel, gauss_seidel_with_guess};
pub use jacobi::{Jacobi, jacobi, jacobi_with_guess};
pub use richardson::{Richardson, richardson, richardson_with_guess};
pub use sor::{Sor, sor, sor_with_guess};
pub use stationary::{IterativeSolution, stationary_solve};
