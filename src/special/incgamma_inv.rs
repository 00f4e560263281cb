//! Inverses of the regularized incomplete gamma functions.
//!
//! Halley iteration on whichever of P or Q is the smaller tail, kept inside
//! a bracket that every function evaluation tightens. A step that leaves the
//! bracket is replaced by bisection (or doubling while the bracket is still
//! open above), so the iteration cannot wander off.

use crate::policy::Policy;
use crate::FloatScalar;
use super::incgamma::{gamma_p_derivative, gamma_pq};
use super::SpecialError;

/// Inverse of the regularized lower incomplete gamma function.
///
/// Returns x such that P(a, x) = p. Requires a > 0 and 0 ≤ p ≤ 1.
///
/// # Errors
///
/// [`SpecialError::DomainError`] for parameters outside the domain,
/// [`SpecialError::Overflow`] for p = 1 (x = ∞),
/// [`SpecialError::Underflow`] when the root is below the smallest normal
/// value, and [`SpecialError::ConvergenceFailure`] if the iteration cap is
/// reached.
///
/// # Example
///
/// ```
/// use specfun::policy::Policy;
/// use specfun::special::{gamma_p, gamma_p_inv};
///
/// let pol = Policy::standard();
/// let x = gamma_p_inv(3.0, 0.5, &pol).unwrap();
/// assert!((x - 2.6740603137235603).abs() < 1e-12);
/// assert!((gamma_p(3.0, x, &pol).unwrap() - 0.5).abs() < 1e-14);
/// ```
pub fn gamma_p_inv<T: FloatScalar>(a: T, p: T, policy: &Policy<T>) -> Result<T, SpecialError> {
    const NAME: &str = "gamma_p_inv";
    let zero = T::zero();
    let one = T::one();

    if a.is_nan() || p.is_nan() || !a.is_finite() || a <= zero || p < zero || p > one {
        return Err(policy.domain_error(NAME));
    }
    if p == zero {
        return Ok(zero);
    }
    if p == one {
        return Err(policy.overflow(NAME));
    }
    invert(a, p, one - p, policy, NAME)
}

/// Inverse of the regularized upper incomplete gamma function.
///
/// Returns x such that Q(a, x) = q. Requires a > 0 and 0 ≤ q ≤ 1.
///
/// # Example
///
/// ```
/// use specfun::policy::Policy;
/// use specfun::special::{gamma_q, gamma_q_inv};
///
/// let pol = Policy::standard();
/// let x = gamma_q_inv(2.0, 1e-10, &pol).unwrap();
/// let q = gamma_q(2.0, x, &pol).unwrap();
/// assert!((q / 1e-10 - 1.0).abs() < 1e-10);
/// ```
pub fn gamma_q_inv<T: FloatScalar>(a: T, q: T, policy: &Policy<T>) -> Result<T, SpecialError> {
    const NAME: &str = "gamma_q_inv";
    let zero = T::zero();
    let one = T::one();

    if a.is_nan() || q.is_nan() || !a.is_finite() || a <= zero || q < zero || q > one {
        return Err(policy.domain_error(NAME));
    }
    if q == one {
        return Ok(zero);
    }
    if q == zero {
        return Err(policy.overflow(NAME));
    }
    invert(a, one - q, q, policy, NAME)
}

/// Solve on the smaller of the two tails; `p + q = 1`, both in (0, 1).
fn invert<T: FloatScalar>(
    a: T,
    p: T,
    q: T,
    policy: &Policy<T>,
    name: &'static str,
) -> Result<T, SpecialError> {
    let zero = T::zero();
    let one = T::one();
    let half = T::lit(0.5);
    let two = T::lit(2.0);
    let tol = T::lit(4.0) * policy.epsilon;

    let upper = p > half;
    let target = if upper { q } else { p };

    let mut x = initial_guess(a, p, q).max(policy.underflow_floor);
    let mut lo = zero;
    let mut hi = T::infinity();

    for iter in 0..policy.max_iter {
        let (pv, qv) = gamma_pq(a, x, policy)?;
        let f = if upper { qv - target } else { pv - target };
        if f == zero {
            tracing::trace!(iterations = iter, "gamma inverse hit exact root");
            return Ok(x);
        }

        // P increases with x and Q decreases.
        let x_too_large = if upper { f < zero } else { f > zero };
        if x_too_large {
            hi = x;
        } else {
            lo = x;
        }
        // Root lies below the smallest normal value.
        if hi <= policy.underflow_floor {
            return Err(policy.underflow(name));
        }

        let dp = match gamma_p_derivative(a, x, policy) {
            Ok(d) => d,
            Err(SpecialError::Overflow) => T::infinity(),
            Err(e) => return Err(e),
        };
        let fp = if upper { -dp } else { dp };

        let mut next = T::nan();
        if fp != zero && fp.is_finite() {
            let newton = f / fp;
            // f''/f' = (a − 1)/x − 1 for both P and Q
            let curvature = (a - one) / x - one;
            let denom = one - half * newton * curvature;
            let step = if denom > half { newton / denom } else { newton };
            next = x - step;
        }
        if !(next > lo && next < hi) {
            next = if hi.is_finite() {
                half * (lo + hi)
            } else {
                (x * two).max(x + one)
            };
        }

        if next <= zero {
            return Err(policy.underflow(name));
        }

        let step_small = (next - x).abs() <= tol * next;
        let bracket_small = hi.is_finite() && (hi - lo) <= tol * hi;
        x = next;
        if step_small || bracket_small {
            tracing::trace!(iterations = iter + 1, "gamma inverse converged");
            return Ok(x);
        }
    }
    Err(policy.convergence_failure(name))
}

/// Starting point: Wilson–Hilferty cube root normal approximation for
/// a > 1, the leading term of the series for small a.
fn initial_guess<T: FloatScalar>(a: T, p: T, q: T) -> T {
    let one = T::one();
    let two = T::lit(2.0);

    if a > one {
        // Standard normal upper quantile of min(p, q), Abramowitz & Stegun 26.2.22
        let pp = p.min(q);
        let t = (-two * pp.ln()).sqrt();
        let mut z = t
            - (T::lit(2.30753) + T::lit(0.27061) * t)
                / (one + t * (T::lit(0.99229) + t * T::lit(0.04481)));
        if p < T::lit(0.5) {
            z = -z;
        }
        let nine_a = T::lit(9.0) * a;
        let base = one - one / nine_a + z / (T::lit(3.0) * a.sqrt());
        (a * base * base * base).max(T::lit(1e-3))
    } else {
        let t = one - a * (T::lit(0.253) + a * T::lit(0.12));
        if p < t {
            (p / t).powf(one / a)
        } else {
            one - (q / (one - t)).ln()
        }
    }
}
