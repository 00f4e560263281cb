use crate::policy::Policy;
use crate::special::SpecialError;
use crate::FloatScalar;

use super::{check_point, forward_recurrence};

fn check_lambda<T: FloatScalar>(
    lambda: T,
    policy: &Policy<T>,
    name: &'static str,
) -> Result<(), SpecialError> {
    if !lambda.is_finite() || lambda <= T::lit(-0.5) {
        return Err(policy.domain_error(name));
    }
    Ok(())
}

fn gegenbauer_unchecked<T: FloatScalar>(
    n: u32,
    lambda: T,
    x: T,
    policy: &Policy<T>,
    name: &'static str,
) -> Result<T, SpecialError> {
    let one = T::one();
    let two = T::lit(2.0);
    forward_recurrence(n, one, two * lambda * x, policy, name, |k, ck, ckm1| {
        let kf = T::from_usize(k as usize);
        (two * (kf + lambda) * x * ck - (kf + two * lambda - one) * ckm1) / (kf + one)
    })
}

/// Gegenbauer (ultraspherical) polynomial C_n^λ(x).
///
/// C₀ = 1, C₁ = 2λx, (n+1)Cₙ₊₁ = 2(n+λ)x·Cₙ − (n+2λ−1)Cₙ₋₁.
/// Requires λ > −1/2.
///
/// # Example
///
/// ```
/// use specfun::policy::Policy;
/// use specfun::poly::gegenbauer;
///
/// let v = gegenbauer(4, 2.5, -0.6, &Policy::standard()).unwrap();
/// assert!((v - (-5.264)).abs() < 1e-13);
/// ```
pub fn gegenbauer<T: FloatScalar>(
    n: u32,
    lambda: T,
    x: T,
    policy: &Policy<T>,
) -> Result<T, SpecialError> {
    const NAME: &str = "gegenbauer";
    check_lambda(lambda, policy, NAME)?;
    check_point(n, x, policy, NAME)?;
    gegenbauer_unchecked(n, lambda, x, policy, NAME)
}

/// k-th derivative dᵏ/dxᵏ C_n^λ(x) = 2ᵏ(λ)ₖ·C_{n−k}^{λ+k}(x), 0 for k > n.
pub fn gegenbauer_derivative<T: FloatScalar>(
    n: u32,
    lambda: T,
    x: T,
    k: u32,
    policy: &Policy<T>,
) -> Result<T, SpecialError> {
    const NAME: &str = "gegenbauer_derivative";
    check_lambda(lambda, policy, NAME)?;
    if k > n {
        return Ok(T::zero());
    }
    check_point(n - k, x, policy, NAME)?;

    let two = T::lit(2.0);
    let mut scale = T::one();
    for j in 0..k {
        scale = scale * two * (lambda + T::from_usize(j as usize));
    }
    let scale = policy.check(scale, NAME)?;

    let c = gegenbauer_unchecked(n - k, lambda + T::from_usize(k as usize), x, policy, NAME)?;
    policy.check(scale * c, NAME)
}

/// First derivative 2λ·C_{n−1}^{λ+1}(x).
///
/// # Example
///
/// ```
/// use specfun::policy::Policy;
/// use specfun::poly::gegenbauer_prime;
///
/// let v = gegenbauer_prime(5, 0.75, 0.3, &Policy::standard()).unwrap();
/// assert!((v - (-0.568927734375)).abs() < 1e-13);
/// ```
pub fn gegenbauer_prime<T: FloatScalar>(
    n: u32,
    lambda: T,
    x: T,
    policy: &Policy<T>,
) -> Result<T, SpecialError> {
    gegenbauer_derivative(n, lambda, x, 1, policy)
}
