//! Error function and complementary error function.
//!
//! Uses the relation erf(x) = P(1/2, x²) through the incomplete gamma
//! engine, combined with a small-argument Taylor series.

use crate::policy::Policy;
use crate::FloatScalar;
use super::incgamma::gamma_pq;
use super::SpecialError;

/// Below this |x| the Taylor series is used.
const TAYLOR_LIMIT: f64 = 0.5;

/// Error function erf(x).
///
/// erf(x) = (2/√π) ∫₀ˣ e^{−t²} dt
///
/// For |x| < 0.5 uses the Taylor series of erf; for larger |x| uses
/// the regularized incomplete gamma function P(1/2, x²).
///
/// # Example
///
/// ```
/// use specfun::policy::Policy;
/// use specfun::special::erf;
///
/// let pol = Policy::standard();
/// assert!(erf(0.0, &pol).unwrap().abs() < 1e-16);
/// assert!((erf(1.0, &pol).unwrap() - 0.8427007929497149).abs() < 1e-13);
/// assert!((erf(6.0, &pol).unwrap() - 1.0).abs() < 1e-15);
/// ```
pub fn erf<T: FloatScalar>(x: T, policy: &Policy<T>) -> Result<T, SpecialError> {
    const NAME: &str = "erf";
    let one = T::one();

    if x.is_nan() {
        return Err(policy.domain_error(NAME));
    }
    if x.is_infinite() {
        return Ok(x.signum());
    }

    let ax = x.abs();
    if ax < T::lit(TAYLOR_LIMIT) {
        return taylor(x, policy);
    }

    let sign = if x < T::zero() { -one } else { one };
    let (p, _q) = gamma_pq(T::lit(0.5), ax * ax, policy)?;
    Ok(sign * p)
}

/// Complementary error function erfc(x) = 1 − erf(x).
///
/// For positive x, computes erfc directly via Q(1/2, x²) to avoid
/// cancellation. Values below the smallest normal flush to zero.
///
/// # Example
///
/// ```
/// use specfun::policy::Policy;
/// use specfun::special::erfc;
///
/// let pol = Policy::standard();
/// assert!((erfc(0.0, &pol).unwrap() - 1.0).abs() < 1e-16);
/// assert!((erfc(3.0, &pol).unwrap() / 2.2090496998585441e-5 - 1.0).abs() < 1e-12);
/// ```
pub fn erfc<T: FloatScalar>(x: T, policy: &Policy<T>) -> Result<T, SpecialError> {
    const NAME: &str = "erfc";
    let zero = T::zero();
    let one = T::one();
    let two = T::lit(2.0);

    if x.is_nan() {
        return Err(policy.domain_error(NAME));
    }
    if x == T::infinity() {
        return Ok(zero);
    }
    if x == T::neg_infinity() {
        return Ok(two);
    }

    let ax = x.abs();
    if ax < T::lit(TAYLOR_LIMIT) {
        return Ok(one - taylor(x, policy)?);
    }

    // erfc(x) = Q(1/2, x²) for x > 0, 1 + P(1/2, x²) for x < 0
    let (p, q) = gamma_pq(T::lit(0.5), ax * ax, policy)?;
    if x > zero {
        Ok(if q < policy.underflow_floor { zero } else { q })
    } else {
        Ok(one + p)
    }
}

/// erf(x) = 2/√π · Σ (−1)ⁿ x^{2n+1} / (n!(2n+1)).
fn taylor<T: FloatScalar>(x: T, policy: &Policy<T>) -> Result<T, SpecialError> {
    let x2 = x * x;
    let mut power = x;
    let mut sum = x;
    for n in 1..policy.max_iter {
        power = -power * x2 / T::from_usize(n);
        let term = power / T::from_usize(2 * n + 1);
        sum = sum + term;
        if term.abs() <= policy.epsilon * sum.abs() {
            return Ok(T::lit(core::f64::consts::FRAC_2_SQRT_PI) * sum);
        }
    }
    Err(policy.convergence_failure("erf series"))
}
