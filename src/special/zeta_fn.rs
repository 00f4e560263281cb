//! Riemann zeta function for real arguments.

use crate::policy::Policy;
use crate::FloatScalar;
use super::gamma_fn::{lgamma, tgamma};
use super::tables::BERNOULLI_OVER_FACTORIAL;
use super::{sin_pi, SpecialError};

/// Riemann zeta function ζ(s) for real s ≠ 1.
///
/// - s ≥ 3N: direct summation of Σ k^(−s) (N is the policy's
///   Euler-Maclaurin split)
/// - 0 < s < 3N: Euler-Maclaurin summation with N explicit terms and
///   Bernoulli corrections
/// - s < 0: functional equation
///   ζ(s) = 2^s π^(s−1) sin(πs/2) Γ(1−s) ζ(1−s), in log space when
///   Γ(1−s) overflows
///
/// ζ(0) = −1/2 and the trivial zeros ζ(−2k) = 0 are returned exactly. For
/// |s| < √ε the first-order Taylor expansion about 0 is used.
///
/// # Errors
///
/// [`SpecialError::DomainError`] at the pole s = 1, for NaN and −∞;
/// [`SpecialError::Overflow`] when |ζ(s)| exceeds the width (large
/// negative s).
///
/// # Example
///
/// ```
/// use specfun::policy::Policy;
/// use specfun::special::riemann_zeta;
///
/// let pol = Policy::standard();
/// let z2 = riemann_zeta(2.0, &pol).unwrap();
/// assert!((z2 - core::f64::consts::PI.powi(2) / 6.0).abs() < 1e-14);
///
/// // ζ(−1) = −1/12
/// assert!((riemann_zeta(-1.0, &pol).unwrap() + 1.0 / 12.0).abs() < 1e-15);
///
/// assert!(riemann_zeta(1.0, &pol).is_err());
/// ```
pub fn riemann_zeta<T: FloatScalar>(s: T, policy: &Policy<T>) -> Result<T, SpecialError> {
    const NAME: &str = "riemann_zeta";
    let zero = T::zero();
    let one = T::one();
    let half = T::lit(0.5);

    if s.is_nan() || s == T::neg_infinity() || s == one {
        return Err(policy.domain_error(NAME));
    }
    if s == T::infinity() {
        return Ok(one);
    }
    if s == zero {
        return Ok(-half);
    }
    if s.abs() < policy.epsilon.sqrt() {
        // ζ(s) = −1/2 − ln(2π)·s/2 + O(s²); 1 − s would round to the pole
        return Ok(-half - half * T::TAU().ln() * s);
    }
    if s < zero {
        let h = s * half;
        if h == h.floor() {
            return Ok(zero);
        }
        return functional_equation(s, policy);
    }
    zeta_nonnegative(s, policy)
}

/// ζ(s) for s > 0, s ≠ 1.
fn zeta_nonnegative<T: FloatScalar>(s: T, policy: &Policy<T>) -> Result<T, SpecialError> {
    let split = policy.euler_maclaurin_split();
    if s >= T::from_usize(3 * split) {
        direct_sum(s, policy)
    } else {
        euler_maclaurin(s, split, policy)
    }
}

/// Σ k^(−s) until the next term is below ε relative to the sum.
fn direct_sum<T: FloatScalar>(s: T, policy: &Policy<T>) -> Result<T, SpecialError> {
    let mut sum = T::one();
    for k in 2..policy.max_iter {
        let term = T::from_usize(k).powf(-s);
        sum = sum + term;
        if term < policy.epsilon * sum {
            return Ok(sum);
        }
    }
    Err(policy.convergence_failure("riemann_zeta direct sum"))
}

/// Euler-Maclaurin with split point N:
///
/// ζ(s) = Σ_{k<N} k^(−s) + N^(1−s)/(s−1) + N^(−s)/2
///        + Σ_j B_{2j}/(2j)! · s(s+1)…(s+2j−2) · N^(−s−2j+1)
fn euler_maclaurin<T: FloatScalar>(
    s: T,
    split: usize,
    policy: &Policy<T>,
) -> Result<T, SpecialError> {
    let one = T::one();
    let two = T::lit(2.0);
    let n = T::from_usize(split);

    let mut sum = T::zero();
    for k in (1..split).rev() {
        sum = sum + T::from_usize(k).powf(-s);
    }
    let n_pow = n.powf(-s);
    sum = sum + n * n_pow / (s - one) + T::lit(0.5) * n_pow;

    let n2 = n * n;
    let mut factor = s * n_pow / n;
    for (j, &b) in BERNOULLI_OVER_FACTORIAL.iter().enumerate() {
        let term = T::lit(b) * factor;
        sum = sum + term;
        if term.abs() < policy.epsilon * sum.abs() {
            return policy.check(sum, "riemann_zeta");
        }
        let m = s + two * T::from_usize(j + 1);
        factor = factor * (m - one) * m / n2;
    }
    Err(policy.convergence_failure("riemann_zeta Euler-Maclaurin"))
}

/// Reflection to 1 − s > 1 for negative, non-even-integer s.
fn functional_equation<T: FloatScalar>(s: T, policy: &Policy<T>) -> Result<T, SpecialError> {
    const NAME: &str = "riemann_zeta";
    let one = T::one();
    let two = T::lit(2.0);
    let pi = T::PI();

    let t = one - s;
    let zeta_t = zeta_nonnegative(t, policy)?;
    let sine = sin_pi(s * T::lit(0.5));

    match tgamma(t, policy) {
        Ok(g) => {
            let scale = two.powf(s) * pi.powf(s - one);
            policy.check(scale * g * sine * zeta_t, NAME)
        }
        Err(SpecialError::Overflow) => {
            // ζ(1−s) > 1 here, so the sign is that of the sine
            let ln_mag = s * two.ln() + (s - one) * pi.ln() + sine.abs().ln()
                + lgamma(t, policy)?
                + zeta_t.ln();
            let mag = ln_mag.exp();
            policy.check(if sine < T::zero() { -mag } else { mag }, NAME)
        }
        Err(e) => Err(e),
    }
}
