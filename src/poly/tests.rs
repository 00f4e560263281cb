use super::*;
use crate::policy::Policy;
use crate::special::SpecialError;

fn approx_eq(a: f64, b: f64, tol: f64) {
    assert!(
        (a - b).abs() < tol,
        "approx_eq failed: {a} vs {b}, diff = {}, tol = {tol}",
        (a - b).abs()
    );
}

fn pol() -> Policy<f64> {
    Policy::standard()
}

// ======================== Hermite ========================

#[test]
fn hermite_low_degrees() {
    let p = pol();
    for &x in &[-1.5_f64, 0.0, 0.3, 2.0] {
        assert_eq!(hermite(0, x, &p).unwrap(), 1.0);
        approx_eq(hermite(1, x, &p).unwrap(), 2.0 * x, 1e-15);
        approx_eq(hermite(2, x, &p).unwrap(), 4.0 * x * x - 2.0, 1e-14);
        approx_eq(hermite(3, x, &p).unwrap(), 8.0 * x.powi(3) - 12.0 * x, 1e-13);
    }
}

#[test]
fn hermite_values() {
    let p = pol();
    approx_eq(hermite(5, 0.7, &p).unwrap(), 34.49824, 1e-12);
    let h10 = hermite(10, 1.3, &p).unwrap();
    assert!(((h10 + 66123.413033062409) / 66123.413033062409).abs() < 1e-14);
}

#[test]
fn hermite_next_reproduces_recurrence() {
    let p = pol();
    for n in 1..15_u32 {
        for &x in &[-2.0_f64, -0.4, 0.0, 0.9, 3.1] {
            let hn = hermite(n, x, &p).unwrap();
            let hnm1 = hermite(n - 1, x, &p).unwrap();
            let expected = hermite(n + 1, x, &p).unwrap();
            let got = hermite_next(n, x, hn, hnm1);
            assert!(
                (got - expected).abs() <= 1e-13 * expected.abs().max(1.0),
                "n = {n}, x = {x}: {got} vs {expected}"
            );
        }
    }
}

#[test]
fn hermite_cursor_walks_the_sequence() {
    let p = pol();
    let x = -0.8_f64;
    let cursor = HermiteCursor::new(x);
    for (n, v) in cursor.take(12).enumerate() {
        let expected = hermite(n as u32, x, &p).unwrap();
        approx_eq(v, expected, 1e-9);
    }

    let mut c = HermiteCursor::new(x);
    assert_eq!(c.degree(), 0);
    assert_eq!(c.previous(), 0.0);
    approx_eq(c.advance(), 2.0 * x, 1e-15);
    assert_eq!(c.degree(), 1);
    assert_eq!(c.previous(), 1.0);
    assert_eq!(c.x(), x);
}

#[test]
fn hermite_errors() {
    let p = pol();
    assert_eq!(hermite(3, f64::NAN, &p), Err(SpecialError::DomainError));
    assert_eq!(hermite(3, f64::INFINITY, &p), Err(SpecialError::Overflow));
    assert_eq!(hermite(0, f64::INFINITY, &p), Ok(1.0));
    assert_eq!(hermite(400, 1e3, &p), Err(SpecialError::Overflow));
}

// ======================== Jacobi ========================

#[test]
fn jacobi_values() {
    let p = pol();
    approx_eq(jacobi(5, 0.5, 1.5, 0.3, &p).unwrap(), 0.5180175, 1e-14);
    approx_eq(jacobi(3, 1.0, 2.0, -0.7, &p).unwrap(), -2.3665, 1e-14);
    approx_eq(jacobi(10, 0.0, 0.0, 0.4, &p).unwrap(), 0.0968390644, 1e-14);
}

#[test]
fn jacobi_at_one() {
    let p = pol();
    // P_n^{(α,β)}(1) = (α+1)_n / n!
    let (a, b) = (0.5_f64, 2.0);
    let mut expected = 1.0;
    for n in 0..8_u32 {
        approx_eq(jacobi(n, a, b, 1.0, &p).unwrap(), expected, 1e-12);
        expected *= (a + 1.0 + n as f64) / (n as f64 + 1.0);
    }
}

#[test]
fn jacobi_derivatives() {
    let p = pol();
    approx_eq(jacobi_prime(5, 0.5, 1.5, 0.3, &p).unwrap(), 1.126125, 1e-13);
    approx_eq(jacobi_double_prime(5, 0.5, 1.5, 0.3, &p).unwrap(), -22.5225, 1e-12);
    approx_eq(jacobi_derivative(5, 0.5, 1.5, 0.3, 3, &p).unwrap(), -64.35, 1e-11);
    assert_eq!(jacobi_derivative(5, 0.5, 1.5, 0.3, 6, &p), Ok(0.0));
    assert_eq!(jacobi_derivative(5, 0.5, 1.5, 0.3, 0, &p), jacobi(5, 0.5, 1.5, 0.3, &p));
}

#[test]
fn jacobi_derivative_matches_finite_difference() {
    let p = pol();
    let (n, a, b, x, h) = (7_u32, -0.3_f64, 0.8, 0.45, 1e-6);
    let fd = (jacobi(n, a, b, x + h, &p).unwrap() - jacobi(n, a, b, x - h, &p).unwrap()) / (2.0 * h);
    approx_eq(jacobi_prime(n, a, b, x, &p).unwrap(), fd, 1e-6);
}

#[test]
fn jacobi_domain() {
    let p = pol();
    assert_eq!(jacobi(3, -1.0, 0.0, 0.5, &p), Err(SpecialError::DomainError));
    assert_eq!(jacobi(3, 0.0, -1.5, 0.5, &p), Err(SpecialError::DomainError));
    assert_eq!(jacobi_prime(3, -2.0, 0.0, 0.5, &p), Err(SpecialError::DomainError));
}

// ======================== Gegenbauer ========================

#[test]
fn gegenbauer_values() {
    let p = pol();
    approx_eq(gegenbauer(5, 0.75, 0.3, &p).unwrap(), 0.6372080859375, 1e-14);
    approx_eq(gegenbauer(4, 2.5, -0.6, &p).unwrap(), -5.264, 1e-13);
    approx_eq(gegenbauer(10, 0.5, 0.4, &p).unwrap(), 0.0968390644, 1e-14);
}

#[test]
fn gegenbauer_lambda_one_is_chebyshev_u() {
    let p = pol();
    // C_n^1(cos θ) = sin((n+1)θ)/sin θ
    let theta = 0.9_f64;
    for n in 0..10_u32 {
        let expected = ((n as f64 + 1.0) * theta).sin() / theta.sin();
        approx_eq(gegenbauer(n, 1.0, theta.cos(), &p).unwrap(), expected, 1e-13);
    }
}

#[test]
fn gegenbauer_derivatives() {
    let p = pol();
    approx_eq(gegenbauer_prime(5, 0.75, 0.3, &p).unwrap(), -0.568927734375, 1e-13);
    approx_eq(gegenbauer_derivative(5, 0.75, 0.3, 3, &p).unwrap(), -15.70078125, 1e-12);
    assert_eq!(gegenbauer_derivative(5, 0.75, 0.3, 9, &p), Ok(0.0));
}

#[test]
fn gegenbauer_domain() {
    let p = pol();
    assert_eq!(gegenbauer(3, -0.5, 0.2, &p), Err(SpecialError::DomainError));
    assert_eq!(gegenbauer(3, f64::NAN, 0.2, &p), Err(SpecialError::DomainError));
}

#[test]
fn reduced_width() {
    let p = Policy::reduced();
    let v = jacobi(10, 0.0_f32, 0.0, 0.4, &p).unwrap();
    assert!((v - 0.096_839_06).abs() < 1e-6, "{v}");
    let v = hermite(5, 0.7_f32, &p).unwrap();
    assert!((v - 34.49824).abs() < 1e-4, "{v}");
}
