//! Orthogonal polynomials: Hermite, Jacobi and Gegenbauer, with derivatives.
//!
//! All families are evaluated with their forward three-term recurrence from
//! the two lowest degrees. Derivatives reduce to a scaled polynomial of the
//! same family with shifted parameters, so no differentiation is done
//! numerically. A derivative order above the degree is exactly zero.
//!
//! # Example
//!
//! ```
//! use specfun::policy::Policy;
//! use specfun::poly::{gegenbauer, hermite, jacobi};
//!
//! let pol = Policy::standard();
//!
//! // H₂(x) = 4x² − 2
//! assert!((hermite(2, 1.5, &pol).unwrap() - 7.0).abs() < 1e-14);
//!
//! // Legendre as both Jacobi(0, 0) and Gegenbauer(1/2)
//! let p = jacobi(10, 0.0, 0.0, 0.4, &pol).unwrap();
//! let c = gegenbauer(10, 0.5, 0.4, &pol).unwrap();
//! assert!((p - c).abs() < 1e-14);
//! ```

mod gegenbauer;
mod hermite;
mod jacobi;

#[cfg(test)]
mod tests;

pub use gegenbauer::{gegenbauer, gegenbauer_derivative, gegenbauer_prime};
pub use hermite::{hermite, hermite_next, HermiteCursor};
pub use jacobi::{jacobi, jacobi_derivative, jacobi_double_prime, jacobi_prime};

use crate::policy::Policy;
use crate::special::SpecialError;
use crate::FloatScalar;

/// Validate the evaluation point shared by every family.
fn check_point<T: FloatScalar>(
    n: u32,
    x: T,
    policy: &Policy<T>,
    name: &'static str,
) -> Result<(), SpecialError> {
    if x.is_nan() {
        return Err(policy.domain_error(name));
    }
    if x.is_infinite() && n > 0 {
        return Err(policy.overflow(name));
    }
    Ok(())
}

/// Run a three-term recurrence from (p₀, p₁) up to degree `n`.
///
/// `step(k, p_k, p_{k−1})` returns p_{k+1}. Any non-finite iterate is
/// reported as overflow.
fn forward_recurrence<T, F>(
    n: u32,
    p0: T,
    p1: T,
    policy: &Policy<T>,
    name: &'static str,
    mut step: F,
) -> Result<T, SpecialError>
where
    T: FloatScalar,
    F: FnMut(u32, T, T) -> T,
{
    if n == 0 {
        return Ok(p0);
    }
    let mut prev = p0;
    let mut cur = policy.check(p1, name)?;
    for k in 1..n {
        let next = policy.check(step(k, cur, prev), name)?;
        prev = cur;
        cur = next;
    }
    Ok(cur)
}
