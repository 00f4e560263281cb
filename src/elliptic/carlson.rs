use crate::policy::Policy;
use crate::special::SpecialError;
use crate::FloatScalar;

/// Tolerance scales relative to ε^(1/6) for each form. Each is the largest
/// relative spread of the arguments at which the truncated fifth-order
/// series of that form stays below ε, from Carlson's error bounds.
const RF_TOL_SCALE: f64 = 1.0;
const RD_TOL_SCALE: f64 = 0.6;
const RC_TOL_SCALE: f64 = 0.5;
const RJ_TOL_SCALE: f64 = 0.6;

#[inline]
fn is_bad<T: FloatScalar>(v: T) -> bool {
    !v.is_finite() || v < T::zero()
}

#[inline]
fn zeros<T: FloatScalar>(vals: &[T]) -> usize {
    vals.iter().filter(|&&v| v == T::zero()).count()
}

/// Arguments in ascending order.
#[inline]
fn sort3<T: FloatScalar>(x: T, y: T, z: T) -> (T, T, T) {
    let (a, b) = if x <= y { (x, y) } else { (y, x) };
    if z >= b {
        (a, b, z)
    } else if z >= a {
        (a, z, b)
    } else {
        (z, a, b)
    }
}

#[inline]
fn max3<T: FloatScalar>(a: T, b: T, c: T) -> T {
    a.abs().max(b.abs()).max(c.abs())
}

/// Exact rescaling of the arguments to magnitude about one.
///
/// Every Carlson form is homogeneous, so multiplying all arguments by
/// 1/s with s = 4^h scales the result by a power of √s = 2^h. Using an
/// even power of two keeps the square roots in the duplication exact, so
/// results are unchanged for arguments that never needed it.
struct Rescale<T> {
    inv_s: T,
    root: T,
    inv_root: T,
}

impl<T: FloatScalar> Rescale<T> {
    /// Pick h from the largest argument magnitude `m`, clamped so that both
    /// s and 1/s are normal numbers.
    fn new(m: T, policy: &Policy<T>) -> Self {
        let two = T::lit(2.0);
        let half = T::lit(0.5);
        let limit = (policy.overflow_ceiling.log2() * half).floor() - T::one();
        let h = if m > T::zero() {
            (m.log2() * half).floor().max(-limit).min(limit)
        } else {
            T::zero()
        };
        let h = h.to_i32().unwrap_or(0);
        let inv_root = two.powi(-h);
        Self {
            inv_s: inv_root * inv_root,
            root: two.powi(h),
            inv_root,
        }
    }

    #[inline]
    fn down(&self, v: T) -> T {
        v * self.inv_s
    }

    /// Undo the scaling for a form of degree −3/2 (RD, RJ).
    #[inline]
    fn up_three_halves(&self, r: T) -> T {
        r * self.inv_s * self.inv_root
    }
}

/// Degenerate Carlson integral RC(x, y) = ½∫₀^∞ (t+x)^(−1/2) (t+y)^(−1) dt.
///
/// Requires x ≥ 0 and y ≠ 0. For y < 0 the Cauchy principal value
/// `√(x/(x−y)) · RC(x−y, −y)` is returned.
///
/// # Example
///
/// ```
/// use specfun::elliptic::ellint_rc;
/// use specfun::policy::Policy;
///
/// // RC(0, 1/4) = π
/// let v = ellint_rc(0.0, 0.25, &Policy::standard()).unwrap();
/// assert!((v - core::f64::consts::PI).abs() < 1e-14);
/// ```
pub fn ellint_rc<T: FloatScalar>(x: T, y: T, policy: &Policy<T>) -> Result<T, SpecialError> {
    const NAME: &str = "ellint_rc";
    let zero = T::zero();

    if is_bad(x) || !y.is_finite() || y == zero {
        return Err(policy.domain_error(NAME));
    }
    if x == y {
        return policy.check(x.sqrt().recip(), NAME);
    }

    let sc = Rescale::new(x.max(y.abs()), policy);
    let (x, y) = (sc.down(x), sc.down(y));
    let (xt, yt, w) = if y > zero {
        (x, y, T::one())
    } else {
        let xt = x - y;
        (xt, -y, x.sqrt() / xt.sqrt())
    };
    let v = rc_duplicate(xt, yt, policy)?;
    policy.check(w * v * sc.inv_root, NAME)
}

/// RC for x ≥ 0, y > 0.
fn rc_duplicate<T: FloatScalar>(x: T, y: T, policy: &Policy<T>) -> Result<T, SpecialError> {
    let one = T::one();
    let quarter = T::lit(0.25);
    let third = T::lit(1.0 / 3.0);
    let two = T::lit(2.0);
    let tol = policy.carlson_tolerance(RC_TOL_SCALE);

    let mut xt = x;
    let mut yt = y;
    for _ in 0..policy.max_iter {
        let lambda = two * xt.sqrt() * yt.sqrt() + yt;
        xt = quarter * (xt + lambda);
        yt = quarter * (yt + lambda);
        let ave = third * (xt + yt + yt);
        let s = (yt - ave) / ave;
        if s.abs() <= tol {
            let series = one
                + s * s
                    * (T::lit(0.3)
                        + s * (T::lit(1.0 / 7.0) + s * (T::lit(0.375) + s * T::lit(9.0 / 22.0))));
            return Ok(series / ave.sqrt());
        }
    }
    Err(policy.convergence_failure("ellint_rc"))
}

/// Carlson's elliptic integral of the first kind,
/// RF(x, y, z) = ½∫₀^∞ [(t+x)(t+y)(t+z)]^(−1/2) dt.
///
/// Requires x, y, z ≥ 0 with at most one of them zero. Symmetric in all
/// three arguments.
///
/// # Example
///
/// ```
/// use specfun::elliptic::ellint_rf;
/// use specfun::policy::Policy;
///
/// let v = ellint_rf(1.0, 2.0, 3.0, &Policy::standard()).unwrap();
/// assert!((v - 0.7269459354689082).abs() < 1e-15);
/// ```
pub fn ellint_rf<T: FloatScalar>(x: T, y: T, z: T, policy: &Policy<T>) -> Result<T, SpecialError> {
    const NAME: &str = "ellint_rf";
    if is_bad(x) || is_bad(y) || is_bad(z) || zeros(&[x, y, z]) > 1 {
        return Err(policy.domain_error(NAME));
    }
    let sc = Rescale::new(max3(x, y, z), policy);
    let v = rf_duplicate(sc.down(x), sc.down(y), sc.down(z), policy)?;
    policy.check_nonzero(v * sc.inv_root, NAME)
}

fn rf_duplicate<T: FloatScalar>(x: T, y: T, z: T, policy: &Policy<T>) -> Result<T, SpecialError> {
    let one = T::one();
    let quarter = T::lit(0.25);
    let third = T::lit(1.0 / 3.0);
    let tol = policy.carlson_tolerance(RF_TOL_SCALE);

    let (mut xt, mut yt, mut zt) = (x, y, z);
    for _ in 0..policy.max_iter {
        let (sx, sy, sz) = (xt.sqrt(), yt.sqrt(), zt.sqrt());
        let lambda = sx * (sy + sz) + sy * sz;
        xt = quarter * (xt + lambda);
        yt = quarter * (yt + lambda);
        zt = quarter * (zt + lambda);
        let ave = third * (xt + yt + zt);
        let dx = (ave - xt) / ave;
        let dy = (ave - yt) / ave;
        let dz = (ave - zt) / ave;
        if max3(dx, dy, dz) <= tol {
            let e2 = dx * dy - dz * dz;
            let e3 = dx * dy * dz;
            let series = one
                + (T::lit(1.0 / 24.0) * e2 - T::lit(0.1) - T::lit(3.0 / 44.0) * e3) * e2
                + T::lit(1.0 / 14.0) * e3;
            return Ok(series / ave.sqrt());
        }
    }
    Err(policy.convergence_failure("ellint_rf"))
}

/// Carlson's elliptic integral of the second kind,
/// RD(x, y, z) = (3/2)∫₀^∞ (t+x)^(−1/2) (t+y)^(−1/2) (t+z)^(−3/2) dt.
///
/// Requires x, y ≥ 0 with at most one of them zero, and z > 0. Symmetric
/// in x and y only.
///
/// # Example
///
/// ```
/// use specfun::elliptic::ellint_rd;
/// use specfun::policy::Policy;
///
/// let v = ellint_rd(0.0, 2.0, 1.0, &Policy::standard()).unwrap();
/// assert!((v - 1.7972103521033883).abs() < 1e-14);
/// ```
pub fn ellint_rd<T: FloatScalar>(x: T, y: T, z: T, policy: &Policy<T>) -> Result<T, SpecialError> {
    const NAME: &str = "ellint_rd";
    if is_bad(x) || is_bad(y) || is_bad(z) || z == T::zero() || zeros(&[x, y]) > 1 {
        return Err(policy.domain_error(NAME));
    }
    let sc = Rescale::new(max3(x, y, z), policy);
    let v = rd_duplicate(sc.down(x), sc.down(y), sc.down(z), policy)?;
    policy.check_nonzero(sc.up_three_halves(v), NAME)
}

fn rd_duplicate<T: FloatScalar>(x: T, y: T, z: T, policy: &Policy<T>) -> Result<T, SpecialError> {
    let one = T::one();
    let three = T::lit(3.0);
    let quarter = T::lit(0.25);
    let fifth = T::lit(0.2);
    let tol = policy.carlson_tolerance(RD_TOL_SCALE);

    let c1 = T::lit(3.0 / 14.0);
    let c2 = T::lit(1.0 / 6.0);
    let c3 = T::lit(9.0 / 22.0);
    let c4 = T::lit(3.0 / 26.0);
    let c5 = T::lit(9.0 / 88.0);
    let c6 = T::lit(9.0 / 52.0);

    let (mut xt, mut yt, mut zt) = (x, y, z);
    let mut sum = T::zero();
    let mut fac = one;
    for _ in 0..policy.max_iter {
        let (sx, sy, sz) = (xt.sqrt(), yt.sqrt(), zt.sqrt());
        let lambda = sx * (sy + sz) + sy * sz;
        sum = sum + fac / (sz * (zt + lambda));
        fac = quarter * fac;
        xt = quarter * (xt + lambda);
        yt = quarter * (yt + lambda);
        zt = quarter * (zt + lambda);
        let ave = fifth * (xt + yt + three * zt);
        let dx = (ave - xt) / ave;
        let dy = (ave - yt) / ave;
        let dz = (ave - zt) / ave;
        if max3(dx, dy, dz) <= tol {
            let ea = dx * dy;
            let eb = dz * dz;
            let ec = ea - eb;
            let ed = ea - T::lit(6.0) * eb;
            let ee = ed + ec + ec;
            let series = one
                + ed * (-c1 + c5 * ed - c6 * dz * ee)
                + dz * (c2 * ee + dz * (-c3 * ec + dz * c4 * ea));
            return Ok(three * sum + fac * series / (ave * ave.sqrt()));
        }
    }
    Err(policy.convergence_failure("ellint_rd"))
}

/// Carlson's elliptic integral of the third kind,
/// RJ(x, y, z, p) = (3/2)∫₀^∞ [(t+x)(t+y)(t+z)]^(−1/2) (t+p)^(−1) dt.
///
/// Requires x, y, z ≥ 0 with at most one of them zero, and p ≠ 0. For
/// p < 0 the Cauchy principal value is computed with Carlson's
/// transformation to the positive fourth argument
/// q = y + (z−y)(y−x)/(y−p), y being the middle argument:
///
/// (y−p)·RJ(x,y,z,p) = (q−y)·RJ(x,y,z,q) − 3RF(x,y,z) + 3·RC(xz/y, pq/y)
///
/// # Example
///
/// ```
/// use specfun::elliptic::ellint_rj;
/// use specfun::policy::Policy;
///
/// let pol = Policy::standard();
/// let v = ellint_rj(2.0, 3.0, 4.0, 5.0, &pol).unwrap();
/// assert!((v - 0.14297579667156754).abs() < 1e-15);
///
/// // principal value
/// let pv = ellint_rj(2.0, 3.0, 4.0, -0.5, &pol).unwrap();
/// assert!((pv - 0.24723819703051564).abs() < 1e-14);
/// ```
pub fn ellint_rj<T: FloatScalar>(
    x: T,
    y: T,
    z: T,
    p: T,
    policy: &Policy<T>,
) -> Result<T, SpecialError> {
    const NAME: &str = "ellint_rj";
    let zero = T::zero();
    let three = T::lit(3.0);

    if is_bad(x) || is_bad(y) || is_bad(z) || zeros(&[x, y, z]) > 1 || !p.is_finite() || p == zero {
        return Err(policy.domain_error(NAME));
    }

    let sc = Rescale::new(max3(x, y, z).max(p.abs()), policy);
    let (x, y, z, p) = (sc.down(x), sc.down(y), sc.down(z), sc.down(p));

    if p > zero {
        let v = rj_duplicate(x, y, z, p, policy)?;
        return policy.check_nonzero(sc.up_three_halves(v), NAME);
    }

    // Principal value, with the middle argument in the y slot.
    let (lo, mid, hi) = sort3(x, y, z);

    let a = (mid - p).recip();
    let b = a * (hi - mid) * (mid - lo);
    let q = mid + b;
    let rho = lo * hi / mid;
    let tau = p * q / mid;
    let rcx = ellint_rc(rho, tau, policy)?;
    let rj = rj_duplicate(lo, mid, hi, q, policy)?;
    let rf = rf_duplicate(lo, mid, hi, policy)?;
    policy.check(sc.up_three_halves(a * (b * rj + three * (rcx - rf))), NAME)
}

/// RJ for p > 0.
fn rj_duplicate<T: FloatScalar>(
    x: T,
    y: T,
    z: T,
    p: T,
    policy: &Policy<T>,
) -> Result<T, SpecialError> {
    let one = T::one();
    let two = T::lit(2.0);
    let three = T::lit(3.0);
    let quarter = T::lit(0.25);
    let fifth = T::lit(0.2);
    let tol = policy.carlson_tolerance(RJ_TOL_SCALE);

    let c1 = T::lit(3.0 / 14.0);
    let c2 = T::lit(1.0 / 3.0);
    let c3 = T::lit(3.0 / 22.0);
    let c4 = T::lit(3.0 / 26.0);
    let c5 = T::lit(9.0 / 88.0);
    let c6 = T::lit(9.0 / 52.0);
    let c7 = T::lit(1.0 / 6.0);
    let c8 = T::lit(3.0 / 11.0);

    let (mut xt, mut yt, mut zt, mut pt) = (x, y, z, p);
    let mut sum = T::zero();
    let mut fac = one;
    for _ in 0..policy.max_iter {
        let (sx, sy, sz) = (xt.sqrt(), yt.sqrt(), zt.sqrt());
        let lambda = sx * (sy + sz) + sy * sz;
        let alpha = pt * (sx + sy + sz) + sx * sy * sz;
        let alpha = alpha * alpha;
        let beta = pt * (pt + lambda) * (pt + lambda);
        sum = sum + fac * rc_duplicate(alpha, beta, policy)?;
        fac = quarter * fac;
        xt = quarter * (xt + lambda);
        yt = quarter * (yt + lambda);
        zt = quarter * (zt + lambda);
        pt = quarter * (pt + lambda);
        let ave = fifth * (xt + yt + zt + pt + pt);
        let dx = (ave - xt) / ave;
        let dy = (ave - yt) / ave;
        let dz = (ave - zt) / ave;
        let dp = (ave - pt) / ave;
        if max3(dx, dy, dz).max(dp.abs()) <= tol {
            let ea = dx * (dy + dz) + dy * dz;
            let eb = dx * dy * dz;
            let ec = dp * dp;
            let ed = ea - three * ec;
            let ee = eb + two * dp * (ea - ec);
            let series = one
                + ed * (-c1 + c5 * ed - c6 * ee)
                + eb * (c7 + dp * (-c8 + dp * c4))
                + dp * ea * (c2 - dp * c3)
                - c2 * dp * ec;
            return Ok(three * sum + fac * series / (ave * ave.sqrt()));
        }
    }
    Err(policy.convergence_failure("ellint_rj"))
}

/// Carlson's completely symmetric elliptic integral of the second kind,
/// RG(x, y, z) = (1/4π)∫∫ √(x sin²θ cos²φ + y sin²θ sin²φ + z cos²θ) sin θ dθ dφ.
///
/// Requires x, y, z ≥ 0. Evaluated as
/// 2RG = z·RF − (x−z)(y−z)·RD(x,y,z)/3 + √(xy/z) with z the middle
/// argument, where the correction term cannot cancel.
///
/// # Example
///
/// ```
/// use specfun::elliptic::ellint_rg;
/// use specfun::policy::Policy;
///
/// // RG(0, 16, 16) = π
/// let v = ellint_rg(0.0, 16.0, 16.0, &Policy::standard()).unwrap();
/// assert!((v - core::f64::consts::PI).abs() < 1e-14);
/// ```
pub fn ellint_rg<T: FloatScalar>(x: T, y: T, z: T, policy: &Policy<T>) -> Result<T, SpecialError> {
    const NAME: &str = "ellint_rg";
    let zero = T::zero();
    let half = T::lit(0.5);

    if is_bad(x) || is_bad(y) || is_bad(z) {
        return Err(policy.domain_error(NAME));
    }

    let (lo, mid, hi) = sort3(x, y, z);

    // RG(0, 0, z) = √z/2
    if mid == zero {
        return Ok(half * hi.sqrt());
    }

    let sc = Rescale::new(hi, policy);
    let (lo, mid, hi) = (sc.down(lo), sc.down(mid), sc.down(hi));
    let rf = rf_duplicate(lo, hi, mid, policy)?;
    let rd = rd_duplicate(lo, hi, mid, policy)?;
    let v = mid * rf - (lo - mid) * (hi - mid) * rd / T::lit(3.0) + (lo * hi / mid).sqrt();
    policy.check(half * v * sc.root, NAME)
}
