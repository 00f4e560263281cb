//! Gamma family, digamma/polygamma, Riemann zeta, beta and error functions.
//!
//! All functions are generic over [`FloatScalar`] (f32/f64), take the
//! [`Policy`](crate::policy::Policy) of the width they run at, and return
//! `Result<T, SpecialError>`. They never return NaN or infinity as `Ok`.
//!
//! # Functions
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`tgamma`] | Gamma function Γ(x) |
//! | [`lgamma`] | Log-gamma ln\|Γ(x)\| |
//! | [`tgamma_ratio`] | Γ(a)/Γ(b) |
//! | [`tgamma_delta_ratio`] | Γ(a)/Γ(a+δ) |
//! | [`gamma_p`] / [`gamma_q`] | Regularized incomplete gamma P(a,x), Q(a,x) |
//! | [`tgamma_lower`] / [`tgamma_upper`] | Non-regularized γ(a,x), Γ(a,x) |
//! | [`gamma_p_derivative`] | ∂P/∂x |
//! | [`gamma_p_inv`] / [`gamma_q_inv`] | Inverses in x |
//! | [`digamma`] / [`trigamma`] / [`polygamma`] | ψ⁽ⁿ⁾(x) |
//! | [`riemann_zeta`] | ζ(s) |
//! | [`beta`] / [`lbeta`] | B(a,b), ln B(a,b) |
//! | [`erf`] / [`erfc`] | Error function and complement |
//!
//! # Example
//!
//! ```
//! use specfun::policy::Policy;
//! use specfun::special::{tgamma, gamma_p, gamma_q, riemann_zeta};
//!
//! let pol = Policy::standard();
//!
//! // Γ(5) = 4! = 24
//! assert_eq!(tgamma(5.0, &pol).unwrap(), 24.0);
//!
//! // P + Q = 1
//! let s = gamma_p(3.0, 2.0, &pol).unwrap() + gamma_q(3.0, 2.0, &pol).unwrap();
//! assert!((s - 1.0).abs() < 1e-15);
//!
//! // ζ(-2) is a trivial zero
//! assert_eq!(riemann_zeta(-2.0, &pol).unwrap(), 0.0);
//! ```

use crate::FloatScalar;

mod beta_fn;
mod digamma_fn;
mod erf_fn;
mod gamma_fn;
mod incgamma;
mod incgamma_inv;
pub(crate) mod tables;
mod zeta_fn;

#[cfg(test)]
mod tests;

pub use beta_fn::{beta, lbeta};
pub use digamma_fn::{digamma, polygamma, trigamma};
pub use erf_fn::{erf, erfc};
pub use gamma_fn::{lgamma, tgamma, tgamma_delta_ratio, tgamma_ratio};
pub use incgamma::{gamma_p, gamma_p_derivative, gamma_q, tgamma_lower, tgamma_upper};
pub use incgamma_inv::{gamma_p_inv, gamma_q_inv};
pub use zeta_fn::riemann_zeta;

pub(crate) use gamma_fn::factorial_from_table;

/// Errors from special function evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SpecialError {
    /// Input outside the function's domain (a pole, a negative Carlson
    /// argument, a NaN input, ...).
    #[error("input outside function domain")]
    DomainError,
    /// The exact result is finite but larger than the width can represent.
    #[error("result overflows the representable range")]
    Overflow,
    /// The exact result is non-zero but smaller than the width can represent.
    #[error("result underflows the representable range")]
    Underflow,
    /// Series, continued fraction or iteration hit the policy's cap.
    #[error("series/continued fraction did not converge")]
    ConvergenceFailure,
}

// ---------------------------------------------------------------------------
// Lanczos approximation constants (g = 7, n = 9)
// Coefficients from Paul Godfrey / Boost / CPython.
// ---------------------------------------------------------------------------

/// Lanczos parameter g.
pub(crate) const LANCZOS_G: f64 = 7.0;

/// Lanczos series coefficients (n = 9).
pub(crate) const LANCZOS_COEFFS: [f64; 9] = [
    0.99999999999980993,
    676.5203681218851,
    -1259.1392167224028,
    771.32342877765313,
    -176.61502916214059,
    12.507343278686905,
    -0.13857109526572012,
    9.9843695780195716e-6,
    1.5056327351493116e-7,
];

/// Evaluate the Lanczos series Ag(z) = c0 + c1/(z+1) + c2/(z+2) + ...
///
/// With `t = z + g + 1/2`, Γ(z+1) = √(2π) · t^(z+1/2) · e^(−t) · Ag(z).
#[inline]
pub(crate) fn lanczos_sum<T: FloatScalar>(z: T) -> T {
    let mut sum = T::lit(LANCZOS_COEFFS[0]);
    for (i, &c) in LANCZOS_COEFFS[1..].iter().enumerate() {
        sum = sum + T::lit(c) / (z + T::from_usize(i + 1));
    }
    sum
}

/// True when `x` is a pole of Γ (0, −1, −2, ...).
#[inline]
pub(crate) fn is_gamma_pole<T: FloatScalar>(x: T) -> bool {
    x <= T::zero() && x == x.floor()
}

/// Reduce `x` to `n + r` with `n` an integer and |r| ≤ 1/2; returns
/// `(r, n is odd)`. Exact in binary floating point.
#[inline]
fn reduce_half<T: FloatScalar>(x: T) -> (T, bool) {
    let n = x.round();
    let r = x - n;
    let half_n = n * T::lit(0.5);
    (r, half_n != half_n.floor())
}

/// sin(πx) without the error of forming πx for large |x|.
pub(crate) fn sin_pi<T: FloatScalar>(x: T) -> T {
    let (r, odd) = reduce_half(x);
    let s = (T::PI() * r).sin();
    if odd {
        -s
    } else {
        s
    }
}

/// cos(πx) with the same reduction as [`sin_pi`].
pub(crate) fn cos_pi<T: FloatScalar>(x: T) -> T {
    let (r, odd) = reduce_half(x);
    if r.abs() == T::lit(0.5) {
        return T::zero();
    }
    let c = (T::PI() * r).cos();
    if odd {
        -c
    } else {
        c
    }
}
