//! Precision policy: per-width tolerances and iteration caps.
//!
//! Every iterative algorithm in the crate takes a `&Policy<T>` the same way
//! the root finders take their settings struct. The policy is a plain value;
//! building one has no side effects and cannot fail.
//!
//! # Example
//!
//! ```
//! use specfun::policy::{Policy, Width};
//! use specfun::special::tgamma;
//!
//! let pol = Policy::<f64>::new(Width::Standard);
//! assert!((tgamma(5.0, &pol).unwrap() - 24.0).abs() < 1e-12);
//!
//! // f32 defaults to the reduced width
//! let red = Policy::<f32>::default();
//! assert_eq!(red.width, Width::Reduced);
//! ```

use crate::special::SpecialError;
use crate::FloatScalar;

/// Floating-point width an operation is evaluated at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    /// Single precision (`f32`).
    Reduced,
    /// Double precision (`f64`).
    Standard,
    /// Widest native float on stable Rust (`f64`), with the largest caps.
    Extended,
}

impl Width {
    /// Iteration ceiling for series, continued fractions and root finding.
    pub const fn max_iter(self) -> usize {
        match self {
            Width::Reduced => 1_000,
            Width::Standard => 5_000,
            Width::Extended => 10_000,
        }
    }

    /// Argument above which the digamma/polygamma asymptotic series is used.
    const fn asymptotic_cutoff(self) -> f64 {
        match self {
            Width::Reduced => 6.0,
            Width::Standard => 10.0,
            Width::Extended => 12.0,
        }
    }

    /// Number of explicit terms before the Euler-Maclaurin tail in zeta.
    const fn euler_maclaurin_split(self) -> usize {
        match self {
            Width::Reduced => 6,
            Width::Standard => 10,
            Width::Extended => 12,
        }
    }
}

/// Convergence constants for one width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Policy<T> {
    /// Width these constants belong to.
    pub width: Width,
    /// Relative convergence target (machine epsilon of `T`).
    pub epsilon: T,
    /// Maximum number of iterations for any single loop.
    pub max_iter: usize,
    /// Smallest positive normal value of `T`.
    pub underflow_floor: T,
    /// Largest finite value of `T`.
    pub overflow_ceiling: T,
}

impl<T: FloatScalar> Policy<T> {
    /// Build the policy for `width` using the limits of `T`.
    pub fn new(width: Width) -> Self {
        Self {
            width,
            epsilon: T::epsilon(),
            max_iter: width.max_iter(),
            underflow_floor: T::min_positive_value(),
            overflow_ceiling: T::max_value(),
        }
    }

    /// Cut-off for the digamma / polygamma asymptotic expansion.
    pub fn asymptotic_cutoff(&self) -> T {
        T::lit(self.width.asymptotic_cutoff())
    }

    /// Split point N of the Euler-Maclaurin zeta summation.
    pub fn euler_maclaurin_split(&self) -> usize {
        self.width.euler_maclaurin_split()
    }

    /// Stopping tolerance for Carlson duplication, `scale · ε^(1/6)`.
    ///
    /// The Taylor correction after duplication is fifth order, so the
    /// truncation error is `O(tol^6)`.
    pub fn carlson_tolerance(&self, scale: f64) -> T {
        T::lit(scale) * self.epsilon.powf(T::lit(1.0 / 6.0))
    }

    /// Accept a finished value, mapping non-finite results to errors.
    pub(crate) fn check(&self, value: T, function: &'static str) -> Result<T, SpecialError> {
        if value.is_nan() {
            tracing::debug!(function, "evaluation produced NaN");
            Err(SpecialError::DomainError)
        } else if value.is_infinite() {
            tracing::debug!(function, "result exceeds the representable range");
            Err(SpecialError::Overflow)
        } else {
            Ok(value)
        }
    }

    /// Like [`check`](Self::check), but a zero result means the exact value
    /// was flushed and is reported as underflow.
    pub(crate) fn check_nonzero(&self, value: T, function: &'static str) -> Result<T, SpecialError> {
        let v = self.check(value, function)?;
        if v == T::zero() {
            tracing::debug!(function, "non-zero result flushed to zero");
            return Err(SpecialError::Underflow);
        }
        Ok(v)
    }

    pub(crate) fn domain_error(&self, function: &'static str) -> SpecialError {
        tracing::debug!(function, width = ?self.width, "argument outside domain");
        SpecialError::DomainError
    }

    pub(crate) fn convergence_failure(&self, function: &'static str) -> SpecialError {
        tracing::debug!(
            function,
            width = ?self.width,
            max_iter = self.max_iter,
            "iteration cap reached"
        );
        SpecialError::ConvergenceFailure
    }

    pub(crate) fn overflow(&self, function: &'static str) -> SpecialError {
        tracing::debug!(function, width = ?self.width, "result overflows");
        SpecialError::Overflow
    }

    pub(crate) fn underflow(&self, function: &'static str) -> SpecialError {
        tracing::debug!(function, width = ?self.width, "result underflows");
        SpecialError::Underflow
    }
}

impl Policy<f32> {
    /// Reduced-width policy.
    pub fn reduced() -> Self {
        Self::new(Width::Reduced)
    }
}

impl Policy<f64> {
    /// Standard-width policy.
    pub fn standard() -> Self {
        Self::new(Width::Standard)
    }

    /// Extended-width policy.
    pub fn extended() -> Self {
        Self::new(Width::Extended)
    }
}

impl Default for Policy<f32> {
    fn default() -> Self {
        Self::reduced()
    }
}

impl Default for Policy<f64> {
    fn default() -> Self {
        Self::standard()
    }
}
