//! Fixed-point iteration engine
//!
//! Every stationary method reduces to `x_{k+1} = M x_k + c` for a constant
//! iteration matrix `M` and vector `c`. The engine repeats that step until
//! two successive iterates are closer than the threshold or the iteration
//! budget is spent.
//!
//! The spectral radius of `M` is not checked, so the sequence may diverge;
//! see [`is_diagonally_dominant`](crate::diagnostics::is_diagonally_dominant).

use crate::error::Result;
use crate::matrix_ops::ensure_len;
use crate::traits::{LinearOperator, Real};
use crate::vector_ops::distance;
use ndarray::Array1;
use num_traits::ToPrimitive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stationary iteration configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IterationConfig<R> {
    /// Stop once two successive iterates are closer than this distance
    pub threshold: R,
    /// Maximum number of fixed-point steps (the first step is always taken)
    pub max_iterations: usize,
    /// Print progress every N iterations (0 = no output)
    pub print_interval: usize,
}

impl Default for IterationConfig<f64> {
    fn default() -> Self {
        Self {
            threshold: 1e-5,
            max_iterations: 30,
            print_interval: 0,
        }
    }
}

impl Default for IterationConfig<f32> {
    fn default() -> Self {
        Self {
            threshold: 1e-5,
            max_iterations: 30,
            print_interval: 0,
        }
    }
}

impl<R> IterationConfig<R> {
    /// Create config with a specific iteration budget
    pub fn with_max_iterations(max_iterations: usize) -> Self
    where
        Self: Default,
    {
        Self {
            max_iterations,
            ..Default::default()
        }
    }

    /// Create config with a specific convergence threshold
    pub fn with_threshold(threshold: R) -> Self
    where
        Self: Default,
    {
        Self {
            threshold,
            ..Default::default()
        }
    }
}

/// Why a fixed-point iteration stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StopReason {
    /// Two successive iterates were closer than the threshold
    Converged,
    /// The iteration budget was spent first
    IterationLimit,
}

/// Fixed-point iteration result
#[derive(Debug, Clone)]
pub struct FixedPointSolution<T: Real> {
    /// Last computed iterate
    pub x: Array1<T>,
    /// Number of fixed-point steps taken
    pub iterations: usize,
    /// Why the iteration stopped
    pub stop_reason: StopReason,
    /// Distance between the last two iterates
    pub last_step: T,
}

impl<T: Real> FixedPointSolution<T> {
    /// Whether convergence was achieved
    pub fn converged(&self) -> bool {
        self.stop_reason == StopReason::Converged
    }
}

/// Iterate `x_{k+1} = M x_k + c` starting from `x0` (zero vector if `None`).
///
/// # Arguments
/// * `m` - Iteration matrix, square with the length of `c`
/// * `c` - Additive vector
/// * `x0` - Optional initial guess
/// * `config` - Threshold and iteration budget
///
/// # Returns
/// The last iterate with the number of steps taken and why iteration stopped.
/// Hitting the iteration limit is not an error. Iterates that overflow keep
/// running until the limit and report [`StopReason::IterationLimit`].
pub fn fixed_point_iterate<T, M>(
    m: &M,
    c: &Array1<T>,
    x0: Option<&Array1<T>>,
    config: &IterationConfig<T>,
) -> Result<FixedPointSolution<T>>
where
    T: Real,
    M: LinearOperator<T> + ?Sized,
{
    let n = c.len();
    ensure_len(n, m.num_rows())?;
    ensure_len(n, m.num_cols())?;

    let mut previous = match x0 {
        Some(x0) => {
            ensure_len(n, x0.len())?;
            x0.clone()
        }
        None => Array1::zeros(n),
    };

    let mut current = m.apply(&previous) + c;
    let mut last_step = distance(&current, &previous);
    let mut iterations = 1;

    // a NaN step (overflowed iterates) never counts as converged
    let keep_going = |step: T| step.is_nan() || step >= config.threshold;
    while iterations < config.max_iterations && keep_going(last_step) {
        previous = current;
        current = m.apply(&previous) + c;
        last_step = distance(&current, &previous);
        iterations += 1;

        if config.print_interval > 0 && iterations % config.print_interval == 0 {
            log::info!(
                "Fixed-point iteration {}: step = {:.6e}",
                iterations,
                last_step.to_f64().unwrap_or(0.0)
            );
        }
    }

    let stop_reason = if last_step < config.threshold {
        StopReason::Converged
    } else {
        StopReason::IterationLimit
    };

    log::debug!(
        "Fixed-point iteration stopped after {} iterations: {:?} (step = {:.6e})",
        iterations,
        stop_reason,
        last_step.to_f64().unwrap_or(0.0)
    );

    Ok(FixedPointSolution {
        x: current,
        iterations,
        stop_reason,
        last_step,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::{Array2, array};

    #[test]
    fn test_default_config() {
        let config = IterationConfig::<f64>::default();
        assert_relative_eq!(config.threshold, 1e-5);
        assert_eq!(config.max_iterations, 30);
        assert_eq!(config.print_interval, 0);

        let config = IterationConfig::<f64>::with_max_iterations(3);
        assert_eq!(config.max_iterations, 3);
        assert_relative_eq!(config.threshold, 1e-5);
    }

    #[test]
    fn test_first_step_is_c() {
        let m = array![[0.0, -0.5], [-0.5, 0.0]];
        let c = array![3.0, 3.0];
        let config = IterationConfig::<f64>::with_max_iterations(1);

        let solution = fixed_point_iterate(&m, &c, None, &config).unwrap();
        assert_eq!(solution.x, c);
        assert_eq!(solution.iterations, 1);
        assert_eq!(solution.stop_reason, StopReason::IterationLimit);
    }

    #[test]
    fn test_converges_to_fixed_point() {
        // x = M x + c has the unique fixed point [2, 2]
        let m = array![[0.0_f64, -0.5], [-0.5, 0.0]];
        let c = array![3.0_f64, 3.0];
        let config = IterationConfig {
            threshold: 1e-10,
            max_iterations: 200,
            print_interval: 0,
        };

        let solution = fixed_point_iterate(&m, &c, None, &config).unwrap();
        assert!(solution.converged());
        assert!(solution.iterations < 200);
        assert!(solution.last_step < 1e-10);
        assert_relative_eq!(solution.x[0], 2.0, epsilon = 1e-9);
        assert_relative_eq!(solution.x[1], 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_budget_still_takes_one_step() {
        let m = Array2::<f64>::zeros((2, 2));
        let c = array![1.0, 1.0];
        let config = IterationConfig::<f64>::with_max_iterations(0);

        let solution = fixed_point_iterate(&m, &c, None, &config).unwrap();
        assert_eq!(solution.iterations, 1);
        assert_eq!(solution.x, c);
    }

    #[test]
    fn test_converged_on_last_allowed_step() {
        // M = 0 reaches the fixed point after one step; the second step moves nowhere
        let m = Array2::<f64>::zeros((2, 2));
        let c = array![1.0, -1.0];
        let config = IterationConfig::<f64>::with_max_iterations(2);

        let solution = fixed_point_iterate(&m, &c, None, &config).unwrap();
        assert_eq!(solution.iterations, 2);
        assert_eq!(solution.stop_reason, StopReason::Converged);
    }

    #[test]
    fn test_divergence_is_not_an_error() {
        let m = array![[2.0, 0.0], [0.0, 2.0]];
        let c = array![1.0, 1.0];
        let config = IterationConfig::<f64>::with_max_iterations(10);

        let solution = fixed_point_iterate(&m, &c, None, &config).unwrap();
        assert_eq!(solution.iterations, 10);
        assert_eq!(solution.stop_reason, StopReason::IterationLimit);
        assert_relative_eq!(solution.x[0], 1023.0);
    }

    #[test]
    fn test_overflow_runs_to_limit() {
        // iterates overflow to inf after two steps, then the step turns NaN
        let m = array![[1e200_f64, 0.0], [0.0, 1e200]];
        let c = array![1e200_f64, 1e200];
        let config = IterationConfig::<f64>::with_max_iterations(30);

        let solution = fixed_point_iterate(&m, &c, None, &config).unwrap();
        assert_eq!(solution.iterations, 30);
        assert_eq!(solution.stop_reason, StopReason::IterationLimit);
        assert!(solution.last_step.is_nan());
        assert!(!solution.converged());
    }

    #[test]
    fn test_initial_guess_length() {
        let m = Array2::<f64>::eye(2);
        let c = array![1.0, 1.0];
        let x0 = array![1.0, 2.0, 3.0];
        let config = IterationConfig::<f64>::default();
        let err = fixed_point_iterate(&m, &c, Some(&x0), &config).unwrap_err();
        assert!(err.is_shape_error());
    }
}
