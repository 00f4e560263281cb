use core::fmt::{Debug, Display};
use num_traits::{Float, FloatConst};

/// Trait for the floating-point types every engine is generic over.
///
/// Covers `f32` (reduced width) and `f64` (standard and extended widths).
/// Adds infallible conversions for literals and counters so algorithms can
/// write `T::lit(0.5)` instead of `T::from(0.5).unwrap()`.
pub trait FloatScalar: Float + FloatConst + Debug + Display + Send + Sync + 'static {
    /// Number of mantissa bits, including the implicit one.
    const MANTISSA_DIGITS: u32;

    /// Convert an `f64` constant, rounding to the nearest representable value.
    fn lit(v: f64) -> Self;

    /// Convert a loop counter or degree.
    fn from_usize(n: usize) -> Self;
}

macro_rules! impl_float_scalar {
    ($($t:ty => $digits:expr),*) => {
        $(
            impl FloatScalar for $t {
                const MANTISSA_DIGITS: u32 = $digits;

                #[inline] fn lit(v: f64) -> $t { v as $t }
                #[inline] fn from_usize(n: usize) -> $t { n as $t }
            }
        )*
    };
}

impl_float_scalar!(f32 => 24, f64 => 53);
