//! Factorials, double factorials, rising/falling factorials and binomial
//! coefficients.
//!
//! Small arguments come from exact tables (i! for i ≤ 170 and i!! for
//! i ≤ 300); only the prefix of a table that is finite at the call's width
//! is used. Larger arguments go through the gamma engine, which reports
//! [`SpecialError::Overflow`] once the value leaves the range.
//!
//! # Example
//!
//! ```
//! use specfun::combinatorics::{binomial_coefficient, double_factorial, factorial};
//! use specfun::policy::Policy;
//!
//! let pol = Policy::standard();
//! assert_eq!(factorial(0, &pol).unwrap(), 1.0);
//! assert_eq!(double_factorial(5, &pol).unwrap(), 15.0);
//! assert_eq!(binomial_coefficient(10, 3, &pol).unwrap(), 120.0);
//! ```

use crate::policy::Policy;
use crate::special::tables::DOUBLE_FACTORIALS;
use crate::special::{beta, factorial_from_table, lgamma, tgamma, tgamma_delta_ratio, SpecialError};
use crate::FloatScalar;


/// Largest count evaluated as an explicit product.
const MAX_PRODUCT_TERMS: u32 = 64;

/// i! as a float.
///
/// # Errors
///
/// [`SpecialError::Overflow`] above 170 (f64) / 34 (f32).
pub fn factorial<T: FloatScalar>(i: u32, policy: &Policy<T>) -> Result<T, SpecialError> {
    if let Some(v) = factorial_from_table(i as usize) {
        return Ok(v);
    }
    tgamma(T::from_usize(i as usize) + T::one(), policy)
}

/// Double factorial i!! = i·(i−2)·(i−4)·…, with 0!! = 1!! = 1.
///
/// # Errors
///
/// [`SpecialError::Overflow`] above 300 (f64) / 56 (f32).
///
/// # Example
///
/// ```
/// use specfun::combinatorics::double_factorial;
/// use specfun::policy::Policy;
///
/// let pol = Policy::standard();
/// assert_eq!(double_factorial(8, &pol).unwrap(), 384.0);
/// assert!(double_factorial(301, &pol).is_err());
/// ```
pub fn double_factorial<T: FloatScalar>(i: u32, policy: &Policy<T>) -> Result<T, SpecialError> {
    const NAME: &str = "double_factorial";
    if let Some(&v) = DOUBLE_FACTORIALS.get(i as usize) {
        let v = T::lit(v);
        if v.is_finite() {
            return Ok(v);
        }
    }

    // (2m)!! = 2^m m!,  (2m−1)!! = 2^m Γ(m + 1/2)/√π
    let half = T::lit(0.5);
    let x = T::from_usize(i as usize);
    let ln2 = T::LN_2();
    let ln_v = if i % 2 == 0 {
        half * x * ln2 + lgamma(half * x + T::one(), policy)?
    } else {
        half * (x + T::one()) * ln2 + lgamma(half * x + T::one(), policy)? - half * T::PI().ln()
    };
    policy.check(ln_v.exp(), NAME)
}

/// Rising factorial (Pochhammer symbol) (x)ᵢ = x(x+1)…(x+i−1), (x)₀ = 1.
///
/// Short products are multiplied out; longer ones use
/// 1/[`tgamma_delta_ratio`]`(x, i)`. When every factor is negative the
/// reflection (x)ᵢ = (−1)ⁱ(−x−i+1)ᵢ moves the work to positive arguments.
///
/// # Example
///
/// ```
/// use specfun::combinatorics::rising_factorial;
/// use specfun::policy::Policy;
///
/// let pol = Policy::standard();
/// assert_eq!(rising_factorial(3.0, 4, &pol).unwrap(), 360.0);
/// assert_eq!(rising_factorial(-2.0, 5, &pol).unwrap(), 0.0);
/// ```
pub fn rising_factorial<T: FloatScalar>(x: T, i: u32, policy: &Policy<T>) -> Result<T, SpecialError> {
    const NAME: &str = "rising_factorial";
    let zero = T::zero();
    let one = T::one();

    if !x.is_finite() {
        return Err(policy.domain_error(NAME));
    }
    if i == 0 {
        return Ok(one);
    }

    let n = T::from_usize(i as usize);
    if i <= MAX_PRODUCT_TERMS {
        let mut prod = one;
        for j in 0..i {
            prod = policy.check(prod * (x + T::from_usize(j as usize)), NAME)?;
        }
        return Ok(prod);
    }

    // Last factor x + i − 1 negative: all factors are negative.
    if x + n - one < zero {
        let v = rising_factorial(-x - n + one, i, policy)?;
        return Ok(if i % 2 == 1 { -v } else { v });
    }
    // A zero factor somewhere in the product.
    if x <= zero && x == x.floor() {
        return Ok(zero);
    }

    match tgamma_delta_ratio(x, n, policy) {
        Ok(r) => policy.check(r.recip(), NAME),
        Err(SpecialError::Underflow) => Err(policy.overflow(NAME)),
        Err(SpecialError::Overflow) => Err(SpecialError::Underflow),
        Err(e) => Err(e),
    }
}

/// Falling factorial x(x−1)…(x−i+1) = (x−i+1)ᵢ.
///
/// # Example
///
/// ```
/// use specfun::combinatorics::falling_factorial;
/// use specfun::policy::Policy;
///
/// let pol = Policy::standard();
/// assert_eq!(falling_factorial(10.0, 4, &pol).unwrap(), 5040.0);
/// assert_eq!(falling_factorial(3.0, 5, &pol).unwrap(), 0.0);
/// ```
pub fn falling_factorial<T: FloatScalar>(x: T, i: u32, policy: &Policy<T>) -> Result<T, SpecialError> {
    if !x.is_finite() {
        return Err(policy.domain_error("falling_factorial"));
    }
    if i == 0 {
        return Ok(T::one());
    }
    rising_factorial(x - T::from_usize(i as usize) + T::one(), i, policy)
}

/// Binomial coefficient C(n, k) as a float.
///
/// C(n, k) = 0 for k > n and 1 for k ∈ {0, n}. With k folded to
/// min(k, n−k), results below 2^mantissa are computed exactly in integer
/// arithmetic. Larger values come from the product Π (n−k+j)/j of k terms
/// for small k and from 1/(k·B(k, n−k+1)) otherwise; factorials are never
/// divided directly.
///
/// # Errors
///
/// [`SpecialError::Overflow`] when C(n, k) exceeds the width.
///
/// # Example
///
/// ```
/// use specfun::combinatorics::binomial_coefficient;
/// use specfun::policy::Policy;
///
/// let pol = Policy::standard();
/// assert_eq!(binomial_coefficient(200, 3, &pol).unwrap(), 1313400.0);
/// assert_eq!(binomial_coefficient(3, 7, &pol).unwrap(), 0.0);
/// ```
pub fn binomial_coefficient<T: FloatScalar>(
    n: u32,
    k: u32,
    policy: &Policy<T>,
) -> Result<T, SpecialError> {
    const NAME: &str = "binomial_coefficient";
    let one = T::one();

    if k > n {
        return Ok(T::zero());
    }
    if k == 0 || k == n {
        return Ok(one);
    }
    let k = k.min(n - k);

    if let Some(c) = exact_binomial(n, k, T::MANTISSA_DIGITS) {
        return Ok(T::lit(c as f64));
    }

    if k <= MAX_PRODUCT_TERMS {
        let base = T::from_usize((n - k) as usize);
        let mut r = one;
        for j in 1..=k {
            let jf = T::from_usize(j as usize);
            r = policy.check(r * (base + jf) / jf, NAME)?;
        }
        return Ok(r);
    }

    let kf = T::from_usize(k as usize);
    let b = match beta(kf, T::from_usize((n - k) as usize) + one, policy) {
        Ok(b) => b,
        Err(SpecialError::Underflow) => return Err(policy.overflow(NAME)),
        Err(e) => return Err(e),
    };
    policy.check((kf * b).recip(), NAME)
}

/// C(n, k) for k ≤ n/2 in integer arithmetic, if it is below 2^digits.
///
/// Each partial product r·(n−k+j)/j is C(n−k+j, j), so the division is
/// exact.
fn exact_binomial(n: u32, k: u32, digits: u32) -> Option<u64> {
    let limit = 1_u128 << digits;
    let base = u128::from(n - k);
    let mut r = 1_u128;
    for j in 1..=u128::from(k) {
        r = r * (base + j) / j;
        if r >= limit {
            return None;
        }
    }
    u64::try_from(r).ok()
}
