//! Per-width entry points.
//!
//! One plain function per operation and width, with no logic of their own:
//! each builds the width's [`Policy`] and forwards to the generic engine.
//! The base name runs at standard width (`f64`), the `f` suffix at reduced
//! width (`f32`) and the `l` suffix at extended width.
//!
//! # Example
//!
//! ```
//! use specfun::flat::{tgamma, tgammaf, tgammal};
//!
//! assert_eq!(tgamma(5.0).unwrap(), 24.0);
//! assert_eq!(tgammaf(5.0).unwrap(), 24.0_f32);
//! assert_eq!(tgammal(5.0).unwrap(), 24.0);
//! ```

use crate::policy::Policy;
use crate::special::SpecialError;

/// Argument type for a width: `real` follows the width, `uint` is a degree,
/// order or count.
macro_rules! kind_ty {
    (real, $t:ty) => { $t };
    (uint, $t:ty) => { u32 };
}

macro_rules! flat {
    ($(
        $module:ident :: $func:ident => $name:ident, $f:ident, $l:ident ( $($arg:ident : $kind:tt),* );
    )*) => {
        $(
            #[doc = concat!(
                "[`", stringify!($func), "`](crate::", stringify!($module), "::",
                stringify!($func), ") at standard width (`f64`)."
            )]
            pub fn $name($($arg: kind_ty!($kind, f64)),*) -> Result<f64, SpecialError> {
                crate::$module::$func($($arg,)* &Policy::standard())
            }

            #[doc = concat!(
                "[`", stringify!($func), "`](crate::", stringify!($module), "::",
                stringify!($func), ") at reduced width (`f32`)."
            )]
            pub fn $f($($arg: kind_ty!($kind, f32)),*) -> Result<f32, SpecialError> {
                crate::$module::$func($($arg,)* &Policy::reduced())
            }

            #[doc = concat!(
                "[`", stringify!($func), "`](crate::", stringify!($module), "::",
                stringify!($func), ") at extended width."
            )]
            pub fn $l($($arg: kind_ty!($kind, f64)),*) -> Result<f64, SpecialError> {
                crate::$module::$func($($arg,)* &Policy::extended())
            }
        )*
    };
}

flat! {
    // Gamma engine
    special::tgamma => tgamma, tgammaf, tgammal (x: real);
    special::lgamma => lgamma, lgammaf, lgammal (x: real);
    special::tgamma_ratio => tgamma_ratio, tgamma_ratiof, tgamma_ratiol (a: real, b: real);
    special::tgamma_delta_ratio => tgamma_delta_ratio, tgamma_delta_ratiof, tgamma_delta_ratiol (a: real, delta: real);
    special::tgamma_lower => tgamma_lower, tgamma_lowerf, tgamma_lowerl (a: real, x: real);
    special::tgamma_upper => tgamma_upper, tgamma_upperf, tgamma_upperl (a: real, x: real);
    special::gamma_p => gamma_p, gamma_pf, gamma_pl (a: real, x: real);
    special::gamma_q => gamma_q, gamma_qf, gamma_ql (a: real, x: real);
    special::gamma_p_inv => gamma_p_inv, gamma_p_invf, gamma_p_invl (a: real, p: real);
    special::gamma_q_inv => gamma_q_inv, gamma_q_invf, gamma_q_invl (a: real, q: real);
    special::gamma_p_derivative => gamma_p_derivative, gamma_p_derivativef, gamma_p_derivativel (a: real, x: real);

    // Digamma / polygamma / zeta
    special::digamma => digamma, digammaf, digammal (x: real);
    special::trigamma => trigamma, trigammaf, trigammal (x: real);
    special::polygamma => polygamma, polygammaf, polygammal (n: uint, x: real);
    special::riemann_zeta => riemann_zeta, riemann_zetaf, riemann_zetal (s: real);

    // Beta and error functions
    special::beta => beta, betaf, betal (a: real, b: real);
    special::lbeta => lbeta, lbetaf, lbetal (a: real, b: real);
    special::erf => erf, erff, erfl (x: real);
    special::erfc => erfc, erfcf, erfcl (x: real);

    // Carlson elliptic integrals
    elliptic::ellint_rc => ellint_rc, ellint_rcf, ellint_rcl (x: real, y: real);
    elliptic::ellint_rf => ellint_rf, ellint_rff, ellint_rfl (x: real, y: real, z: real);
    elliptic::ellint_rd => ellint_rd, ellint_rdf, ellint_rdl (x: real, y: real, z: real);
    elliptic::ellint_rj => ellint_rj, ellint_rjf, ellint_rjl (x: real, y: real, z: real, p: real);
    elliptic::ellint_rg => ellint_rg, ellint_rgf, ellint_rgl (x: real, y: real, z: real);

    // Orthogonal polynomials
    poly::hermite => hermite, hermitef, hermitel (n: uint, x: real);
    poly::jacobi => jacobi, jacobif, jacobil (n: uint, alpha: real, beta: real, x: real);
    poly::jacobi_prime => jacobi_prime, jacobi_primef, jacobi_primel (n: uint, alpha: real, beta: real, x: real);
    poly::jacobi_double_prime => jacobi_double_prime, jacobi_double_primef, jacobi_double_primel (n: uint, alpha: real, beta: real, x: real);
    poly::jacobi_derivative => jacobi_derivative, jacobi_derivativef, jacobi_derivativel (n: uint, alpha: real, beta: real, x: real, k: uint);
    poly::gegenbauer => gegenbauer, gegenbauerf, gegenbauerl (n: uint, lambda: real, x: real);
    poly::gegenbauer_prime => gegenbauer_prime, gegenbauer_primef, gegenbauer_primel (n: uint, lambda: real, x: real);
    poly::gegenbauer_derivative => gegenbauer_derivative, gegenbauer_derivativef, gegenbauer_derivativel (n: uint, lambda: real, x: real, k: uint);

    // Cardinal B-splines
    bspline::cardinal_b_spline => cardinal_b_spline, cardinal_b_splinef, cardinal_b_splinel (n: uint, x: real);
    bspline::cardinal_b_spline_prime => cardinal_b_spline_prime, cardinal_b_spline_primef, cardinal_b_spline_primel (n: uint, x: real);
    bspline::cardinal_b_spline_double_prime => cardinal_b_spline_double_prime, cardinal_b_spline_double_primef, cardinal_b_spline_double_primel (n: uint, x: real);
    bspline::forward_cardinal_b_spline => forward_cardinal_b_spline, forward_cardinal_b_splinef, forward_cardinal_b_splinel (n: uint, x: real);

    // Combinatorics
    combinatorics::factorial => factorial, factorialf, factoriall (i: uint);
    combinatorics::double_factorial => double_factorial, double_factorialf, double_factoriall (i: uint);
    combinatorics::rising_factorial => rising_factorial, rising_factorialf, rising_factoriall (x: real, i: uint);
    combinatorics::falling_factorial => falling_factorial, falling_factorialf, falling_factoriall (x: real, i: uint);
    combinatorics::binomial_coefficient => binomial_coefficient, binomial_coefficientf, binomial_coefficientl (n: uint, k: uint);
}

/// [`hermite_next`](crate::poly::hermite_next) at standard width (`f64`).
pub fn hermite_next(n: u32, x: f64, hn: f64, hnm1: f64) -> f64 {
    crate::poly::hermite_next(n, x, hn, hnm1)
}

/// [`hermite_next`](crate::poly::hermite_next) at reduced width (`f32`).
pub fn hermite_nextf(n: u32, x: f32, hn: f32, hnm1: f32) -> f32 {
    crate::poly::hermite_next(n, x, hn, hnm1)
}

/// [`hermite_next`](crate::poly::hermite_next) at extended width.
pub fn hermite_nextl(n: u32, x: f64, hn: f64, hnm1: f64) -> f64 {
    crate::poly::hermite_next(n, x, hn, hnm1)
}
