use crate::policy::Policy;
use crate::special::SpecialError;
use crate::FloatScalar;

use super::{check_point, forward_recurrence};

/// Physicists' Hermite polynomial Hₙ(x).
///
/// H₀ = 1, H₁ = 2x, Hₙ₊₁ = 2x·Hₙ − 2n·Hₙ₋₁.
///
/// # Errors
///
/// [`SpecialError::DomainError`] for NaN `x`; [`SpecialError::Overflow`]
/// when an iterate leaves the representable range.
///
/// # Example
///
/// ```
/// use specfun::policy::Policy;
/// use specfun::poly::hermite;
///
/// // H₃(x) = 8x³ − 12x
/// let v = hermite(3, 0.5, &Policy::standard()).unwrap();
/// assert!((v - (-5.0)).abs() < 1e-14);
/// ```
pub fn hermite<T: FloatScalar>(n: u32, x: T, policy: &Policy<T>) -> Result<T, SpecialError> {
    const NAME: &str = "hermite";
    check_point(n, x, policy, NAME)?;
    let two = T::lit(2.0);
    forward_recurrence(n, T::one(), two * x, policy, NAME, |k, hk, hkm1| {
        hermite_next(k, x, hk, hkm1)
    })
}

/// One step of the Hermite recurrence: Hₙ₊₁ = 2x·Hₙ − 2n·Hₙ₋₁.
///
/// The inputs are trusted, not validated, so this can be driven by callers
/// that already hold Hₙ and Hₙ₋₁.
///
/// # Example
///
/// ```
/// use specfun::policy::Policy;
/// use specfun::poly::{hermite, hermite_next};
///
/// let pol = Policy::standard();
/// let x = 0.7;
/// let h4 = hermite(4, x, &pol).unwrap();
/// let h5 = hermite_next(4, x, h4, hermite(3, x, &pol).unwrap());
/// assert!((h5 - hermite(5, x, &pol).unwrap()).abs() < 1e-12);
/// ```
#[inline]
pub fn hermite_next<T: FloatScalar>(n: u32, x: T, hn: T, hnm1: T) -> T {
    let two = T::lit(2.0);
    two * x * hn - two * T::from_usize(n as usize) * hnm1
}

/// Cursor over the Hermite sequence at a fixed point.
///
/// Holds (n, x, Hₙ, Hₙ₋₁) so the next degree costs one recurrence step.
/// The pair is always consistent: it only moves through [`advance`].
///
/// [`advance`]: HermiteCursor::advance
///
/// # Example
///
/// ```
/// use specfun::policy::Policy;
/// use specfun::poly::{hermite, HermiteCursor};
///
/// let mut c = HermiteCursor::new(1.3_f64);
/// for _ in 0..10 {
///     c.advance();
/// }
/// assert_eq!(c.degree(), 10);
/// let h10 = hermite(10, 1.3, &Policy::standard()).unwrap();
/// assert!((c.value() - h10).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HermiteCursor<T> {
    n: u32,
    x: T,
    current: T,
    previous: T,
}

impl<T: FloatScalar> HermiteCursor<T> {
    /// Start at H₀(x) = 1.
    pub fn new(x: T) -> Self {
        // H₋₁ = 0 makes the first step produce H₁ = 2x
        Self { n: 0, x, current: T::one(), previous: T::zero() }
    }

    /// Current degree n.
    pub fn degree(&self) -> u32 {
        self.n
    }

    /// Evaluation point.
    pub fn x(&self) -> T {
        self.x
    }

    /// Hₙ(x).
    pub fn value(&self) -> T {
        self.current
    }

    /// Hₙ₋₁(x) (zero at degree 0).
    pub fn previous(&self) -> T {
        self.previous
    }

    /// Step to degree n + 1 and return Hₙ₊₁(x).
    pub fn advance(&mut self) -> T {
        let next = hermite_next(self.n, self.x, self.current, self.previous);
        self.previous = self.current;
        self.current = next;
        self.n += 1;
        next
    }
}

impl<T: FloatScalar> Iterator for HermiteCursor<T> {
    type Item = T;

    /// Yields Hₙ(x) and moves to the next degree.
    fn next(&mut self) -> Option<T> {
        let v = self.current;
        self.advance();
        Some(v)
    }
}
