use crate::policy::Policy;
use crate::special::SpecialError;
use crate::FloatScalar;

use super::{check_point, forward_recurrence};

fn check_params<T: FloatScalar>(
    alpha: T,
    beta: T,
    policy: &Policy<T>,
    name: &'static str,
) -> Result<(), SpecialError> {
    let m1 = -T::one();
    if !alpha.is_finite() || !beta.is_finite() || alpha <= m1 || beta <= m1 {
        return Err(policy.domain_error(name));
    }
    Ok(())
}

/// P_n^{(α,β)}(x) for already validated parameters.
fn jacobi_unchecked<T: FloatScalar>(
    n: u32,
    alpha: T,
    beta: T,
    x: T,
    policy: &Policy<T>,
    name: &'static str,
) -> Result<T, SpecialError> {
    let one = T::one();
    let two = T::lit(2.0);
    let ab = alpha + beta;
    let p1 = (alpha + one) + (ab + two) * (x - one) / two;

    // DLMF 18.9.2 written for p_{k+1}
    forward_recurrence(n, one, p1, policy, name, |k, pk, pkm1| {
        let kf = T::from_usize(k as usize);
        let c = two * kf + ab;
        let a1 = two * (kf + one) * (kf + ab + one) * c;
        let a2 = (c + one) * (alpha * alpha - beta * beta);
        let a3 = c * (c + one) * (c + two);
        let a4 = two * (kf + alpha) * (kf + beta) * (c + two);
        ((a2 + a3 * x) * pk - a4 * pkm1) / a1
    })
}

/// Jacobi polynomial P_n^{(α,β)}(x).
///
/// Requires α > −1 and β > −1.
///
/// # Example
///
/// ```
/// use specfun::policy::Policy;
/// use specfun::poly::jacobi;
///
/// let v = jacobi(3, 1.0, 2.0, -0.7, &Policy::standard()).unwrap();
/// assert!((v - (-2.3665)).abs() < 1e-13);
/// ```
pub fn jacobi<T: FloatScalar>(
    n: u32,
    alpha: T,
    beta: T,
    x: T,
    policy: &Policy<T>,
) -> Result<T, SpecialError> {
    const NAME: &str = "jacobi";
    check_params(alpha, beta, policy, NAME)?;
    check_point(n, x, policy, NAME)?;
    jacobi_unchecked(n, alpha, beta, x, policy, NAME)
}

/// k-th derivative of the Jacobi polynomial with respect to x.
///
/// dᵏ/dxᵏ P_n^{(α,β)}(x) = Π_{j=1..k} (n+α+β+j)/2 · P_{n−k}^{(α+k,β+k)}(x),
/// and 0 for k > n.
///
/// # Example
///
/// ```
/// use specfun::policy::Policy;
/// use specfun::poly::jacobi_derivative;
///
/// let v = jacobi_derivative(5, 0.5, 1.5, 0.3, 3, &Policy::standard()).unwrap();
/// assert!((v - (-64.35)).abs() < 1e-11);
/// ```
pub fn jacobi_derivative<T: FloatScalar>(
    n: u32,
    alpha: T,
    beta: T,
    x: T,
    k: u32,
    policy: &Policy<T>,
) -> Result<T, SpecialError> {
    const NAME: &str = "jacobi_derivative";
    check_params(alpha, beta, policy, NAME)?;
    if k > n {
        return Ok(T::zero());
    }
    check_point(n - k, x, policy, NAME)?;

    let half = T::lit(0.5);
    let base = T::from_usize(n as usize) + alpha + beta;
    let mut scale = T::one();
    for j in 1..=k {
        scale = scale * (base + T::from_usize(j as usize)) * half;
    }
    let scale = policy.check(scale, NAME)?;

    let kf = T::from_usize(k as usize);
    let p = jacobi_unchecked(n - k, alpha + kf, beta + kf, x, policy, NAME)?;
    policy.check(scale * p, NAME)
}

/// First derivative of P_n^{(α,β)}(x).
///
/// # Example
///
/// ```
/// use specfun::policy::Policy;
/// use specfun::poly::jacobi_prime;
///
/// let v = jacobi_prime(5, 0.5, 1.5, 0.3, &Policy::standard()).unwrap();
/// assert!((v - 1.126125).abs() < 1e-13);
/// ```
pub fn jacobi_prime<T: FloatScalar>(
    n: u32,
    alpha: T,
    beta: T,
    x: T,
    policy: &Policy<T>,
) -> Result<T, SpecialError> {
    jacobi_derivative(n, alpha, beta, x, 1, policy)
}

/// Second derivative of P_n^{(α,β)}(x).
pub fn jacobi_double_prime<T: FloatScalar>(
    n: u32,
    alpha: T,
    beta: T,
    x: T,
    policy: &Policy<T>,
) -> Result<T, SpecialError> {
    jacobi_derivative(n, alpha, beta, x, 2, policy)
}
