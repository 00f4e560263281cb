//! # specfun
//!
//! Pure-Rust special functions, no-std compatible. Every engine is generic
//! over the float type and takes a precision [`Policy`], so one
//! implementation serves all three widths.
//!
//! ## Quick start
//!
//! ```
//! use specfun::policy::Policy;
//! use specfun::special::{gamma_p, gamma_q, tgamma};
//!
//! let pol = Policy::standard();
//! assert_eq!(tgamma(5.0, &pol).unwrap(), 24.0);
//!
//! let (p, q) = (gamma_p(2.5, 1.0, &pol).unwrap(), gamma_q(2.5, 1.0, &pol).unwrap());
//! assert!((p + q - 1.0).abs() < 1e-14);
//!
//! // Same thing through the per-width entry points
//! assert_eq!(specfun::flat::tgammaf(5.0).unwrap(), 24.0_f32);
//! ```
//!
//! ## Modules
//!
//! - [`special`]: Gamma engine: Γ, ln|Γ|, gamma ratios, regularized and
//!   non-regularized incomplete gamma with inverses and derivative, digamma,
//!   trigamma, polygamma, Riemann ζ, beta and the error functions.
//!
//! - [`elliptic`]: Carlson symmetric integrals R_C, R_F, R_D, R_J, R_G by
//!   the duplication theorem.
//!
//! - [`poly`]: Hermite (with a stepping cursor), Jacobi and Gegenbauer
//!   polynomials and their derivatives by three-term recurrence.
//!
//! - [`bspline`]: Centered and forward cardinal B-splines with first and
//!   second derivatives.
//!
//! - [`combinatorics`]: Factorials, double factorials, rising/falling
//!   factorials, binomial coefficients.
//!
//! - [`flat`]: One plain function per operation and width: `tgamma`
//!   (standard, `f64`), `tgammaf` (reduced, `f32`), `tgammal` (extended).
//!
//! - [`policy`]: [`Width`] and the per-width [`Policy`] constants.
//!
//! - [`traits`]: [`FloatScalar`], the bound every engine is generic over.
//!
//! ## Errors
//!
//! Every fallible operation returns `Result<T, SpecialError>`. Failures are
//! also emitted as `tracing` events at debug level with the function name and
//! width attached; install any subscriber to see them.
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | Hardware FPU via system libm, `std::error::Error` impls |
//! | `libm`  | baseline | Pure-Rust software float fallback |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod bspline;
pub mod combinatorics;
pub mod elliptic;
pub mod flat;
pub mod policy;
pub mod poly;
pub mod special;
pub mod traits;

pub use policy::{Policy, Width};
pub use special::SpecialError;
pub use traits::FloatScalar;
