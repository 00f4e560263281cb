//! Carlson symmetric elliptic integrals RC, RF, RD, RJ and RG.
//!
//! Each form is evaluated by Carlson's duplication theorem: the arguments are
//! replaced by their averages with λ = √x√y + √y√z + √z√x until they agree
//! to within the policy's Carlson tolerance, then a fifth-order Taylor
//! expansion about the mean finishes the job.
//!
//! All arguments must be finite. Negative or NaN arguments, and more zero
//! arguments than a form allows, are [`SpecialError::DomainError`]s.
//!
//! # Example
//!
//! ```
//! use specfun::elliptic::{ellint_rc, ellint_rf};
//! use specfun::policy::Policy;
//!
//! let pol = Policy::standard();
//!
//! // RF(0, 1, 1) = π/2, the complete integral K(0)
//! let k0 = ellint_rf(0.0, 1.0, 1.0, &pol).unwrap();
//! assert!((k0 - core::f64::consts::FRAC_PI_2).abs() < 1e-15);
//!
//! // RC(x, x) = 1/√x
//! assert!((ellint_rc(4.0, 4.0, &pol).unwrap() - 0.5).abs() < 1e-16);
//! ```
//!
//! [`SpecialError::DomainError`]: crate::special::SpecialError::DomainError

mod carlson;


pub use carlson::{ellint_rc, ellint_rd, ellint_rf, ellint_rg, ellint_rj};
