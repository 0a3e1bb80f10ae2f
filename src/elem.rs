//! Element-type capabilities.
//!
//! Every vector operation is gated by the capabilities of its element type,
//! expressed as ordinary trait bounds: component-wise arithmetic by the
//! `core::ops` traits, zeroing by [`num_traits::Zero`], and norm extraction
//! by the [`Sqrt`] trait below. A type missing a capability is simply
//! missing the corresponding operations; there is no runtime error path.

/// Square-root capability with C-style promotion.
///
/// Floating-point types produce their own type; primitive integers promote
/// to `f64` first, so the norm of an integer vector is a `f64` (matching
/// what `sqrt` does to an `int` in C). Implement this for a custom element
/// type to give its vectors `eucnorm` and `normalize`.
pub trait Sqrt {
    /// The type the square root is produced in.
    type Output;

    /// Returns the square root of `self`.
    fn sqrt(self) -> Self::Output;
}

macro_rules! impl_sqrt_float {
    ($($t:ty),*) => {
        $(
            impl Sqrt for $t {
                type Output = $t;

                #[inline(always)]
                fn sqrt(self) -> $t { <$t>::sqrt(self) }
            }
        )*
    };
}

macro_rules! impl_sqrt_int {
    ($($t:ty),*) => {
        $(
            impl Sqrt for $t {
                type Output = f64;

                #[inline(always)]
                fn sqrt(self) -> f64 { (self as f64).sqrt() }
            }
        )*
    };
}

impl_sqrt_float!(f32, f64);
impl_sqrt_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::Sqrt;

    #[test]
    fn float_sqrt_keeps_the_type() {
        let x: f32 = Sqrt::sqrt(4.0f32);
        assert_eq!(x, 2.0f32);
        let y: f64 = Sqrt::sqrt(2.25f64);
        assert_eq!(y, 1.5f64);
    }

    #[test]
    fn integer_sqrt_promotes_to_f64() {
        let x: f64 = Sqrt::sqrt(25i32);
        assert_eq!(x, 5.0);
        let y: f64 = Sqrt::sqrt(2u64);
        assert!((y - core::f64::consts::SQRT_2).abs() < 1e-12);
    }
}
