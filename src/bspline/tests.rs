use super::*;
use crate::policy::Policy;

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

#[test]
fn low_degree_closed_forms() {
    let p = pol();
    assert_eq!(cardinal_b_spline(0, 0.2, &p).unwrap(), 1.0);
    assert_eq!(cardinal_b_spline(0, 0.5, &p).unwrap(), 0.5);
    approx_eq(cardinal_b_spline(1, 0.0, &p).unwrap(), 1.0, 1e-15);
    approx_eq(cardinal_b_spline(1, -0.25, &p).unwrap(), 0.75, 1e-15);
    approx_eq(cardinal_b_spline(2, 0.0, &p).unwrap(), 0.75, 1e-15);
    approx_eq(cardinal_b_spline(2, 0.5, &p).unwrap(), 0.5, 1e-15);
    approx_eq(cardinal_b_spline(3, 0.0, &p).unwrap(), 2.0 / 3.0, 1e-15);
    approx_eq(cardinal_b_spline(3, 1.0, &p).unwrap(), 1.0 / 6.0, 1e-15);
}

#[test]
fn cubic_matches_piecewise_formula() {
    let p = pol();
    for i in 0..40 {
        let x = -2.0 + 0.1 * i as f64;
        let a = x.abs();
        let expected = if a < 1.0 {
            2.0 / 3.0 - a * a + a.powi(3) / 2.0
        } else if a < 2.0 {
            (2.0 - a).powi(3) / 6.0
        } else {
            0.0
        };
        approx_eq(cardinal_b_spline(3, x, &p).unwrap(), expected, 1e-14);
    }
}

#[test]
fn symmetric() {
    let p = pol();
    for n in 0..8_u32 {
        for &x in &[0.1_f64, 0.7, 1.3, 2.9] {
            assert_eq!(
                cardinal_b_spline(n, x, &p).unwrap(),
                cardinal_b_spline(n, -x, &p).unwrap()
            );
        }
    }
}

#[test]
fn partition_of_unity() {
    let p = pol();
    for n in 1..9_u32 {
        let x = 0.37_f64;
        let mut sum = 0.0;
        for j in -10..=10 {
            sum += cardinal_b_spline(n, x + j as f64, &p).unwrap();
        }
        approx_eq(sum, 1.0, 1e-14);
    }
}

#[test]
fn zero_outside_support() {
    let p = pol();
    for n in 0..10_u32 {
        let h = (n as f64 + 1.0) / 2.0;
        for &d in &[0.0_f64, 1e-9, 0.5, 3.0, 1e6] {
            if n > 0 || d > 0.0 {
                assert_eq!(cardinal_b_spline(n, h + d, &p).unwrap(), 0.0);
                assert_eq!(cardinal_b_spline(n, -h - d, &p).unwrap(), 0.0);
            }
        }
        let w = n as f64 + 1.0;
        for &x in &[-1e-12_f64, -1.0, w + 1e-12, w + 5.0] {
            assert_eq!(forward_cardinal_b_spline(n, x, &p).unwrap(), 0.0, "n = {n}, x = {x}");
        }
        if n > 0 {
            assert_eq!(forward_cardinal_b_spline(n, 0.0, &p).unwrap(), 0.0);
            assert_eq!(forward_cardinal_b_spline(n, w, &p).unwrap(), 0.0);
        }
        assert_eq!(cardinal_b_spline(n, f64::INFINITY, &p).unwrap(), 0.0);
    }
}

#[test]
fn forward_is_shifted_centered() {
    let p = pol();
    for n in 0..7_u32 {
        let h = (n as f64 + 1.0) / 2.0;
        for &x in &[0.3_f64, 1.1, 2.45, 3.9] {
            approx_eq(
                forward_cardinal_b_spline(n, x, &p).unwrap(),
                cardinal_b_spline(n, x - h, &p).unwrap(),
                1e-15,
            );
        }
    }
}

#[test]
fn derivatives() {
    let p = pol();
    approx_eq(cardinal_b_spline_prime(3, 0.5, &p).unwrap(), -0.625, 1e-15);
    approx_eq(cardinal_b_spline_prime(3, -0.5, &p).unwrap(), 0.625, 1e-15);
    approx_eq(cardinal_b_spline_double_prime(3, 0.5, &p).unwrap(), -0.5, 1e-15);
    assert_eq!(cardinal_b_spline_prime(0, 0.1, &p).unwrap(), 0.0);
    assert_eq!(cardinal_b_spline_double_prime(1, 0.1, &p).unwrap(), 0.0);
    assert_eq!(cardinal_b_spline_prime(4, 3.0, &p).unwrap(), 0.0);
}

#[test]
fn derivative_matches_finite_difference() {
    let p = pol();
    let (n, x, h) = (5_u32, 0.83_f64, 1e-6);
    let fd = (cardinal_b_spline(n, x + h, &p).unwrap() - cardinal_b_spline(n, x - h, &p).unwrap())
        / (2.0 * h);
    approx_eq(cardinal_b_spline_prime(n, x, &p).unwrap(), fd, 1e-8);
    let fd2 = (cardinal_b_spline_prime(n, x + h, &p).unwrap()
        - cardinal_b_spline_prime(n, x - h, &p).unwrap())
        / (2.0 * h);
    approx_eq(cardinal_b_spline_double_prime(n, x, &p).unwrap(), fd2, 1e-8);
}

#[test]
fn nan_is_domain_error() {
    let p = pol();
    assert!(cardinal_b_spline(3, f64::NAN, &p).is_err());
    assert!(forward_cardinal_b_spline(3, f64::NAN, &p).is_err());
}

#[test]
fn reduced_width() {
    let p = Policy::reduced();
    let v = cardinal_b_spline(3, 0.0_f32, &p).unwrap();
    assert!((v - 2.0 / 3.0).abs() < 1e-6);
}

#[test]
fn degree_capped_by_policy() {
    let r = Policy::reduced();
    let cap = r.max_iter as u32;
    assert!(cardinal_b_spline(cap, 0.0_f32, &r).unwrap() > 0.0);
    let over = cap + 1;
    assert_eq!(cardinal_b_spline(over, 0.0_f32, &r), Err(SpecialError::ConvergenceFailure));
    assert_eq!(cardinal_b_spline_prime(over, 0.3_f32, &r), Err(SpecialError::ConvergenceFailure));
    assert_eq!(
        cardinal_b_spline_double_prime(over, 0.3_f32, &r),
        Err(SpecialError::ConvergenceFailure)
    );
    assert_eq!(forward_cardinal_b_spline(over, 2.0_f32, &r), Err(SpecialError::ConvergenceFailure));

    let p = pol();
    assert_eq!(cardinal_b_spline(u32::MAX, 0.0, &p), Err(SpecialError::ConvergenceFailure));
    assert_eq!(forward_cardinal_b_spline(u32::MAX, 1.0, &p), Err(SpecialError::ConvergenceFailure));
}
