//! Beta function and log-beta.

use crate::policy::Policy;
use crate::FloatScalar;
use super::gamma_fn::{lgamma, tgamma, tgamma_delta_ratio};
use super::SpecialError;

/// Beta function B(a, b) = Γ(a)·Γ(b) / Γ(a+b).
///
/// Evaluated as Γ(small) · Γ(big)/Γ(big+small) with the second factor a
/// [`tgamma_delta_ratio`], so B stays accurate when Γ(b) alone overflows.
/// Falls back to `exp(lbeta)` when both arguments are large.
///
/// Requires a > 0 and b > 0.
///
/// # Errors
///
/// [`SpecialError::DomainError`] outside the domain;
/// [`SpecialError::Underflow`] when B(a, b) is below the smallest normal.
///
/// # Example
///
/// ```
/// use specfun::policy::Policy;
/// use specfun::special::beta;
///
/// let pol = Policy::standard();
///
/// // B(1, 1) = 1
/// assert!((beta(1.0, 1.0, &pol).unwrap() - 1.0).abs() < 1e-14);
///
/// // B(2, 3) = 1/12
/// assert!((beta(2.0, 3.0, &pol).unwrap() - 1.0 / 12.0).abs() < 1e-14);
/// ```
pub fn beta<T: FloatScalar>(a: T, b: T, policy: &Policy<T>) -> Result<T, SpecialError> {
    const NAME: &str = "beta";
    check_domain(a, b, policy, NAME)?;
    match beta_direct(a, b, policy) {
        Some(v) => Ok(v),
        None => policy.check_nonzero(lbeta_sum(a, b, policy)?.exp(), NAME),
    }
}

/// Natural logarithm of the beta function, ln B(a, b).
///
/// # Example
///
/// ```
/// use specfun::policy::Policy;
/// use specfun::special::lbeta;
///
/// // ln B(1, 1) = 0
/// assert!(lbeta(1.0, 1.0, &Policy::standard()).unwrap().abs() < 1e-14);
/// ```
pub fn lbeta<T: FloatScalar>(a: T, b: T, policy: &Policy<T>) -> Result<T, SpecialError> {
    check_domain(a, b, policy, "lbeta")?;
    match beta_direct(a, b, policy) {
        Some(v) => Ok(v.ln()),
        None => lbeta_sum(a, b, policy),
    }
}

fn check_domain<T: FloatScalar>(
    a: T,
    b: T,
    policy: &Policy<T>,
    name: &'static str,
) -> Result<(), SpecialError> {
    let zero = T::zero();
    if !a.is_finite() || !b.is_finite() || a <= zero || b <= zero {
        return Err(policy.domain_error(name));
    }
    Ok(())
}

/// Γ(small)·Γ(big)/Γ(big+small), or `None` if a factor leaves the range.
fn beta_direct<T: FloatScalar>(a: T, b: T, policy: &Policy<T>) -> Option<T> {
    let (small, big) = if a < b { (a, b) } else { (b, a) };
    let g = tgamma(small, policy).ok()?;
    let r = tgamma_delta_ratio(big, small, policy).ok()?;
    let v = g * r;
    if v.is_finite() && v >= policy.underflow_floor {
        Some(v)
    } else {
        None
    }
}

fn lbeta_sum<T: FloatScalar>(a: T, b: T, policy: &Policy<T>) -> Result<T, SpecialError> {
    Ok(lgamma(a, policy)? + lgamma(b, policy)? - lgamma(a + b, policy)?)
}
