//! Vector norms and distances used by the solvers

use crate::traits::Real;
use ndarray::Array1;

/// Compute vector 2-norm: ||x||_2 = sqrt(Σ x_i^2)
#[inline]
pub fn vector_norm<T: Real>(x: &Array1<T>) -> T {
    x.dot(x).sqrt()
}

/// Euclidean distance ||x - y||_2 between two vectors of equal length
#[inline]
pub fn distance<T: Real>(x: &Array1<T>, y: &Array1<T>) -> T {
    debug_assert_eq!(x.len(), y.len(), "Vector lengths must match for distance");
    let mut sum = T::zero();
    for (xi, yi) in x.iter().zip(y.iter()) {
        let d = *xi - *yi;
        sum += d * d;
    }
    sum.sqrt()
}
