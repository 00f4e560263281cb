//! Cardinal B-splines on integer knots.
//!
//! The centered spline Bₙ is the n-fold convolution of the unit box on
//! [−1/2, 1/2]; its support is [−(n+1)/2, (n+1)/2]. The forward spline
//! Nₙ(x) = Bₙ(x − (n+1)/2) has support [0, n+1]. Values outside the
//! support are exactly zero.
//!
//! Evaluation runs the Cox–de Boor recursion bottom-up over a triangle of
//! lower-degree values held in a heap buffer of length n + 2, so each call
//! costs O(n²) with no recomputation.
//!
//! At a jump of the degree-0 box the value is the midpoint 1/2, which keeps
//! Bₙ symmetric for every n and makes the derivative formulas exact at knots.
//!
//! # Example
//!
//! ```
//! use specfun::bspline::{cardinal_b_spline, forward_cardinal_b_spline};
//! use specfun::policy::Policy;
//!
//! let pol = Policy::standard();
//!
//! // Cubic B-spline peak
//! assert!((cardinal_b_spline(3, 0.0, &pol).unwrap() - 2.0 / 3.0).abs() < 1e-15);
//!
//! // Forward spline is shifted to [0, n+1]
//! assert_eq!(forward_cardinal_b_spline(3, -0.1, &pol).unwrap(), 0.0);
//! assert_eq!(forward_cardinal_b_spline(3, 4.0, &pol).unwrap(), 0.0);
//! ```

use alloc::vec;

use crate::policy::Policy;
use crate::special::SpecialError;
use crate::FloatScalar;

#[cfg(test)]
mod tests;

/// Centered cardinal B-spline Bₙ(x) of degree n.
///
/// # Errors
///
/// [`SpecialError::DomainError`] for NaN `x`;
/// [`SpecialError::ConvergenceFailure`] when n exceeds the policy's
/// iteration cap.
pub fn cardinal_b_spline<T: FloatScalar>(
    n: u32,
    x: T,
    policy: &Policy<T>,
) -> Result<T, SpecialError> {
    if x.is_nan() {
        return Err(policy.domain_error("cardinal_b_spline"));
    }
    check_degree(n, policy, "cardinal_b_spline")?;
    Ok(centered(n, x.abs()))
}

/// First derivative Bₙ'(x) = Bₙ₋₁(x + 1/2) − Bₙ₋₁(x − 1/2); zero for n = 0.
///
/// # Example
///
/// ```
/// use specfun::bspline::cardinal_b_spline_prime;
/// use specfun::policy::Policy;
///
/// // B₃(x) = 2/3 − x² + |x|³/2 on [−1, 1]
/// let d = cardinal_b_spline_prime(3, 0.5, &Policy::standard()).unwrap();
/// assert!((d - (-0.625)).abs() < 1e-15);
/// ```
pub fn cardinal_b_spline_prime<T: FloatScalar>(
    n: u32,
    x: T,
    policy: &Policy<T>,
) -> Result<T, SpecialError> {
    if x.is_nan() {
        return Err(policy.domain_error("cardinal_b_spline_prime"));
    }
    check_degree(n, policy, "cardinal_b_spline_prime")?;
    if n == 0 {
        return Ok(T::zero());
    }
    let half = T::lit(0.5);
    Ok(centered(n - 1, (x + half).abs()) - centered(n - 1, (x - half).abs()))
}

/// Second derivative Bₙ''(x) = Bₙ₋₂(x + 1) − 2Bₙ₋₂(x) + Bₙ₋₂(x − 1);
/// zero for n < 2.
pub fn cardinal_b_spline_double_prime<T: FloatScalar>(
    n: u32,
    x: T,
    policy: &Policy<T>,
) -> Result<T, SpecialError> {
    if x.is_nan() {
        return Err(policy.domain_error("cardinal_b_spline_double_prime"));
    }
    check_degree(n, policy, "cardinal_b_spline_double_prime")?;
    if n < 2 {
        return Ok(T::zero());
    }
    let one = T::one();
    let m = n - 2;
    Ok(centered(m, (x + one).abs()) - T::lit(2.0) * centered(m, x.abs())
        + centered(m, (x - one).abs()))
}

/// Forward (causal) cardinal B-spline Nₙ(x) = Bₙ(x − (n+1)/2), supported
/// on [0, n+1].
///
/// # Errors
///
/// [`SpecialError::DomainError`] for NaN `x`;
/// [`SpecialError::ConvergenceFailure`] when n exceeds the policy's
/// iteration cap.
pub fn forward_cardinal_b_spline<T: FloatScalar>(
    n: u32,
    x: T,
    policy: &Policy<T>,
) -> Result<T, SpecialError> {
    if x.is_nan() {
        return Err(policy.domain_error("forward_cardinal_b_spline"));
    }
    check_degree(n, policy, "forward_cardinal_b_spline")?;
    let width = T::from_usize(n as usize + 1);
    if x <= T::zero() || x >= width {
        return Ok(if n == 0 && (x == T::zero() || x == width) {
            T::lit(0.5)
        } else {
            T::zero()
        });
    }
    Ok(centered(n, (x - width * T::lit(0.5)).abs()))
}

/// Refuse degrees above the policy's iteration cap.
fn check_degree<T: FloatScalar>(
    n: u32,
    policy: &Policy<T>,
    name: &'static str,
) -> Result<(), SpecialError> {
    if n as usize > policy.max_iter {
        return Err(policy.convergence_failure(name));
    }
    Ok(())
}

/// Bₙ(a) for a = |x| ≥ 0.
fn centered<T: FloatScalar>(n: u32, a: T) -> T {
    let half_support = T::from_usize(n as usize + 1) * T::lit(0.5);
    if a >= half_support {
        // n = 0 has a jump at ±1/2
        return if n == 0 && a == half_support {
            T::lit(0.5)
        } else {
            T::zero()
        };
    }
    cox_de_boor(n, a + half_support)
}

/// Nₙ(t) for 0 < t < n + 1 by the triangular Cox–de Boor scheme:
///
/// N_k(t − j) = [(t − j)·N_{k−1}(t − j) + (k + 1 − t + j)·N_{k−1}(t − j − 1)] / k
fn cox_de_boor<T: FloatScalar>(n: u32, t: T) -> T {
    let n = n as usize;
    let mut v = vec![T::zero(); n + 2];
    let m = t.floor().to_usize().unwrap_or(0).min(n);
    v[m] = T::one();

    for k in 1..=n {
        let kf = T::from_usize(k);
        let kp1 = T::from_usize(k + 1);
        for j in 0..=(n - k) {
            let s = t - T::from_usize(j);
            v[j] = (s * v[j] + (kp1 - s) * v[j + 1]) / kf;
        }
    }
    v[0]
}
