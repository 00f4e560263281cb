//! Digamma, trigamma and polygamma via recurrence and asymptotic expansion.

use crate::policy::Policy;
use crate::FloatScalar;
use super::gamma_fn::lgamma;
use super::tables::BERNOULLI_OVER_FACTORIAL;
use super::{cos_pi, is_gamma_pole, sin_pi, SpecialError};

/// Bernoulli-number-derived coefficients for the asymptotic expansion
/// of digamma: ψ(x) ≈ ln(x) − 1/(2x) − Σ B_{2k}/(2k · x^{2k}).
/// These are B_{2k}/(2k) for k = 1..7.
/// B2=1/6, B4=-1/30, B6=1/42, B8=-1/30, B10=5/66, B12=-691/2730, B14=7/6
const DIGAMMA_ASYMP: [f64; 7] = [
    1.0 / 12.0,               // B2/2 = (1/6)/2
    -1.0 / 120.0,             // B4/4 = (-1/30)/4
    1.0 / 252.0,              // B6/6 = (1/42)/6
    -1.0 / 240.0,             // B8/8 = (-1/30)/8
    1.0 / 132.0,              // B10/10 = (5/66)/10
    -691.0 / 32760.0,         // B12/12 = (-691/2730)/12
    1.0 / 12.0,               // B14/14 = (7/6)/14 = 1/12
];

/// Orders up to this use exact running products for n!/y^{n+1}; above it
/// the log form is cheaper and just as accurate relative to the result.
const PRODUCT_ORDER_MAX: u32 = 32;

/// Digamma function ψ(x) = d/dx ln Γ(x).
///
/// Uses the recurrence relation ψ(x+1) = ψ(x) + 1/x to shift x up to the
/// policy's asymptotic cut-off, then applies a 7-term asymptotic expansion
/// in 1/x². For negative x, uses the reflection formula
/// ψ(x) = ψ(1−x) − π·cot(πx).
///
/// # Errors
///
/// [`SpecialError::DomainError`] at the poles 0, −1, −2, …, for NaN and −∞;
/// [`SpecialError::Overflow`] for +∞.
///
/// # Example
///
/// ```
/// use specfun::policy::Policy;
/// use specfun::special::digamma;
///
/// // ψ(1) = −γ (Euler-Mascheroni constant)
/// let euler_mascheroni = 0.5772156649015329_f64;
/// let v = digamma(1.0, &Policy::standard()).unwrap();
/// assert!((v + euler_mascheroni).abs() < 1e-14);
/// ```
pub fn digamma<T: FloatScalar>(x: T, policy: &Policy<T>) -> Result<T, SpecialError> {
    const NAME: &str = "digamma";
    let zero = T::zero();
    let one = T::one();

    if x.is_nan() || x == T::neg_infinity() || is_gamma_pole(x) {
        return Err(policy.domain_error(NAME));
    }
    if x == T::infinity() {
        return Err(policy.overflow(NAME));
    }

    if x < zero {
        let cot = cos_pi(x) / sin_pi(x);
        let value = digamma_positive(one - x, policy) - T::PI() * cot;
        return policy.check(value, NAME);
    }

    policy.check(digamma_positive(x, policy), NAME)
}

/// ψ(x) for x > 0.
fn digamma_positive<T: FloatScalar>(x: T, policy: &Policy<T>) -> T {
    let zero = T::zero();
    let one = T::one();
    let half = T::lit(0.5);

    // Recurrence: shift x up to the cut-off
    let mut result = zero;
    let mut xx = x;
    let threshold = policy.asymptotic_cutoff();
    while xx < threshold {
        result = result - one / xx;
        xx = xx + one;
    }

    // Asymptotic expansion: ψ(x) ≈ ln(x) - 1/(2x) - Σ coeff_k / x^{2k}
    result = result + xx.ln() - half / xx;

    let inv_x2 = one / (xx * xx);
    let mut term = inv_x2;
    for &c in &DIGAMMA_ASYMP {
        result = result - T::lit(c) * term;
        term = term * inv_x2;
    }

    result
}

/// Trigamma function ψ₁(x) = d²/dx² ln Γ(x).
///
/// Same as [`polygamma`]`(1, x)`; negative arguments use the reflection
/// ψ₁(x) + ψ₁(1−x) = π²/sin²(πx).
///
/// # Example
///
/// ```
/// use specfun::policy::Policy;
/// use specfun::special::trigamma;
///
/// // ψ₁(1) = π²/6
/// let v = trigamma(1.0, &Policy::standard()).unwrap();
/// assert!((v - core::f64::consts::PI.powi(2) / 6.0).abs() < 1e-14);
/// ```
pub fn trigamma<T: FloatScalar>(x: T, policy: &Policy<T>) -> Result<T, SpecialError> {
    polygamma(1, x, policy)
}

/// Polygamma function ψ⁽ⁿ⁾(x), the n-th derivative of ψ.
///
/// ψ⁽ⁿ⁾(x) = (−1)ⁿ⁺¹ n! Σ_{k≥0} 1/(x+k)ⁿ⁺¹. The first terms of the sum are
/// taken explicitly until x + k reaches `cut-off + n`, and the tail uses the
/// differentiated Stirling series
///
/// (n−1)!/xⁿ · [1 + n/(2x) + Σ B_{2k}/(2k)! · n(n+1)…(n+2k−1)/x^{2k}].
///
/// Factorials are never formed on their own, so large orders do not
/// overflow unless the result does.
///
/// # Errors
///
/// [`SpecialError::DomainError`] at poles; [`SpecialError::Overflow`] when
/// the result is too large; [`SpecialError::ConvergenceFailure`] when the
/// required number of recurrence steps exceeds the policy cap.
///
/// # Example
///
/// ```
/// use specfun::policy::Policy;
/// use specfun::special::polygamma;
///
/// // ψ''(1) = −2ζ(3)
/// let v = polygamma(2, 1.0, &Policy::standard()).unwrap();
/// assert!((v + 2.4041138063191886).abs() < 1e-13);
/// ```
pub fn polygamma<T: FloatScalar>(n: u32, x: T, policy: &Policy<T>) -> Result<T, SpecialError> {
    const NAME: &str = "polygamma";
    let zero = T::zero();
    let one = T::one();

    if n == 0 {
        return digamma(x, policy);
    }
    if x.is_nan() || x == T::neg_infinity() || is_gamma_pole(x) {
        return Err(policy.domain_error(NAME));
    }
    if x == T::infinity() {
        return Ok(zero);
    }

    if n == 1 && x < zero {
        let s = sin_pi(x);
        let reflected = polygamma_positive(1, one - x, policy)?;
        let value = T::PI() * T::PI() / (s * s) - reflected;
        return policy.check(value, NAME);
    }

    polygamma_positive(n, x, policy)
}

/// ψ⁽ⁿ⁾(x) for n ≥ 1 by upward recurrence and the asymptotic tail.
/// Negative non-integer x is accepted; the recurrence walks across zero.
fn polygamma_positive<T: FloatScalar>(
    n: u32,
    x: T,
    policy: &Policy<T>,
) -> Result<T, SpecialError> {
    const NAME: &str = "polygamma";
    let one = T::one();
    let nf = T::from_usize(n as usize);
    let ln_n_factorial = if n > PRODUCT_ORDER_MAX {
        lgamma(nf + one, policy)?
    } else {
        T::zero()
    };

    let target = policy.asymptotic_cutoff() + nf;
    let mut shift_sum = T::zero();
    let mut xs = x;
    let mut steps = 0usize;
    while xs < target {
        if steps >= policy.max_iter {
            return Err(policy.convergence_failure(NAME));
        }
        shift_sum = shift_sum + factorial_over_power(n, xs, ln_n_factorial);
        xs = xs + one;
        steps += 1;
    }

    let tail = asymptotic_tail(n, xs, policy)?;
    let magnitude = shift_sum + tail;
    let value = if n % 2 == 1 { magnitude } else { -magnitude };
    policy.check(value, NAME)
}

/// n!/y^{n+1} for y ≠ 0, signed.
fn factorial_over_power<T: FloatScalar>(n: u32, y: T, ln_n_factorial: T) -> T {
    if n <= PRODUCT_ORDER_MAX {
        let mut v = y.recip();
        for j in 1..=n {
            v = v * T::from_usize(j as usize) / y;
        }
        return v;
    }
    let mag = (ln_n_factorial - T::from_usize(n as usize + 1) * y.abs().ln()).exp();
    // y^{n+1} is negative only for y < 0 and n even
    if y < T::zero() && n % 2 == 0 {
        -mag
    } else {
        mag
    }
}

/// (n−1)!/xⁿ · [1 + n/(2x) + Σ B_{2k}/(2k)! · (n)_{2k}/x^{2k}] for x ≥ n + cut-off.
fn asymptotic_tail<T: FloatScalar>(n: u32, x: T, policy: &Policy<T>) -> Result<T, SpecialError> {
    let one = T::one();
    let nf = T::from_usize(n as usize);

    let prefix = if n <= PRODUCT_ORDER_MAX {
        let mut v = x.recip();
        for j in 1..n {
            v = v * T::from_usize(j as usize) / x;
        }
        v
    } else {
        (lgamma(nf, policy)? - nf * x.ln()).exp()
    };

    let inv_x2 = (x * x).recip();
    let mut series = one + nf / (T::lit(2.0) * x);
    let mut rising = one;
    for (k, &b) in BERNOULLI_OVER_FACTORIAL.iter().enumerate() {
        let m = nf + T::from_usize(2 * k);
        rising = rising * m * (m + one) * inv_x2;
        let term = T::lit(b) * rising;
        series = series + term;
        if term.abs() < policy.epsilon * series.abs() {
            return Ok(prefix * series);
        }
    }
    Err(policy.convergence_failure("polygamma asymptotic series"))
}
