//! Operator implementations for vectors.
//!
//! Binary `+` and `-` combine two vectors of the same dimension and layout
//! (or a vector and a pack) into a transient pack; `*` and `/` scale by the
//! element type, with `*` also available with the scalar on the left. The
//! compound assignments are spelled out as `component = component op rhs`,
//! so an element type only needs the plain operator, not the assigning
//! variant.
//!
//! Operand element types may differ wherever the element operator itself
//! is heterogeneous: `Vector<T, N> + Vector<U, N>` exists whenever
//! `T: Add<U>`, and produces a pack of the element output type.

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::{
    layout::Layout,
    pack::{ResultPack1, ResultPack2, ResultPack3, ResultPack4},
    vector::Vector,
};

impl<T: PartialEq<U>, U, const N: usize, L: Layout> PartialEq<Vector<U, N, L>>
    for Vector<T, N, L>
{
    fn eq(&self, other: &Vector<U, N, L>) -> bool {
        self.elems
            .iter()
            .zip(other.elems.iter())
            .all(|(a, b)| a == b)
    }
}

impl<T: Eq, const N: usize, L: Layout> Eq for Vector<T, N, L> {}

macro_rules! impl_vector_ops {
    ($($n:literal, $pack:ident { $($f:ident: $a:ident, $b:ident, $i:tt);+ });+ $(;)?) => {
        $(
            impl<T: Add<U>, U, L: Layout> Add<Vector<U, $n, L>> for Vector<T, $n, L> {
                type Output = $pack<<T as Add<U>>::Output>;

                #[inline]
                fn add(self, rhs: Vector<U, $n, L>) -> Self::Output {
                    let [$($a),+] = self.elems;
                    let [$($b),+] = rhs.elems;
                    $pack { $($f: $a + $b),+ }
                }
            }

            impl<T: Sub<U>, U, L: Layout> Sub<Vector<U, $n, L>> for Vector<T, $n, L> {
                type Output = $pack<<T as Sub<U>>::Output>;

                #[inline]
                fn sub(self, rhs: Vector<U, $n, L>) -> Self::Output {
                    let [$($a),+] = self.elems;
                    let [$($b),+] = rhs.elems;
                    $pack { $($f: $a - $b),+ }
                }
            }

            impl<T: Add<U>, U, L: Layout> Add<$pack<U>> for Vector<T, $n, L> {
                type Output = $pack<<T as Add<U>>::Output>;

                #[inline]
                fn add(self, rhs: $pack<U>) -> Self::Output { self + Vector::from(rhs) }
            }

            impl<T: Sub<U>, U, L: Layout> Sub<$pack<U>> for Vector<T, $n, L> {
                type Output = $pack<<T as Sub<U>>::Output>;

                #[inline]
                fn sub(self, rhs: $pack<U>) -> Self::Output { self - Vector::from(rhs) }
            }

            impl<T: Mul + Copy, L: Layout> Mul<T> for Vector<T, $n, L> {
                type Output = $pack<<T as Mul>::Output>;

                #[inline]
                fn mul(self, rhs: T) -> Self::Output {
                    $pack { $($f: self.elems[$i] * rhs),+ }
                }
            }

            impl<T: Div + Copy, L: Layout> Div<T> for Vector<T, $n, L> {
                type Output = $pack<<T as Div>::Output>;

                #[inline]
                fn div(self, rhs: T) -> Self::Output {
                    $pack { $($f: self.elems[$i] / rhs),+ }
                }
            }

            impl<T: Neg, L: Layout> Neg for Vector<T, $n, L> {
                type Output = $pack<<T as Neg>::Output>;

                #[inline]
                fn neg(self) -> Self::Output {
                    let [$($a),+] = self.elems;
                    $pack { $($f: -$a),+ }
                }
            }

            impl<T, U, L: Layout> AddAssign<Vector<U, $n, L>> for Vector<T, $n, L>
            where T: Add<U, Output = T> + Copy
            {
                #[inline]
                fn add_assign(&mut self, rhs: Vector<U, $n, L>) {
                    let [$($b),+] = rhs.elems;
                    $(self.elems[$i] = self.elems[$i] + $b;)+
                }
            }

            impl<T, U, L: Layout> SubAssign<Vector<U, $n, L>> for Vector<T, $n, L>
            where T: Sub<U, Output = T> + Copy
            {
                #[inline]
                fn sub_assign(&mut self, rhs: Vector<U, $n, L>) {
                    let [$($b),+] = rhs.elems;
                    $(self.elems[$i] = self.elems[$i] - $b;)+
                }
            }

            impl<T, U, L: Layout> AddAssign<$pack<U>> for Vector<T, $n, L>
            where T: Add<U, Output = T> + Copy
            {
                #[inline]
                fn add_assign(&mut self, rhs: $pack<U>) { *self += Vector::from(rhs); }
            }

            impl<T, U, L: Layout> SubAssign<$pack<U>> for Vector<T, $n, L>
            where T: Sub<U, Output = T> + Copy
            {
                #[inline]
                fn sub_assign(&mut self, rhs: $pack<U>) { *self -= Vector::from(rhs); }
            }

            impl<T, L: Layout> MulAssign<T> for Vector<T, $n, L>
            where T: Mul<Output = T> + Copy
            {
                #[inline]
                fn mul_assign(&mut self, rhs: T) {
                    $(self.elems[$i] = self.elems[$i] * rhs;)+
                }
            }

            impl<T, L: Layout> DivAssign<T> for Vector<T, $n, L>
            where T: Div<Output = T> + Copy
            {
                #[inline]
                fn div_assign(&mut self, rhs: T) {
                    $(self.elems[$i] = self.elems[$i] / rhs;)+
                }
            }

            impl<T: PartialEq<U>, U, L: Layout> PartialEq<$pack<U>> for Vector<T, $n, L> {
                fn eq(&self, other: &$pack<U>) -> bool {
                    true $(&& self.elems[$i] == other.$f)+
                }
            }
        )+
    };
}

impl_vector_ops! {
    1, ResultPack1 { x: ax, bx, 0 };
    2, ResultPack2 { x: ax, bx, 0; y: ay, by, 1 };
    3, ResultPack3 { x: ax, bx, 0; y: ay, by, 1; z: az, bz, 2 };
    4, ResultPack4 { x: ax, bx, 0; y: ay, by, 1; z: az, bz, 2; w: aw, bw, 3 };
}

// `scalar * vector` and `scalar * pack` for the primitive numeric types.
// Orphan rules keep this from being generic over the scalar, so each
// primitive gets its own impl.
macro_rules! impl_scalar_lhs_mul {
    ($t:ty => $($n:literal, $pack:ident { $($f:ident: $i:tt),+ });+ $(;)?) => {
        $(
            impl<L: Layout> Mul<Vector<$t, $n, L>> for $t {
                type Output = $pack<$t>;

                #[inline]
                fn mul(self, rhs: Vector<$t, $n, L>) -> $pack<$t> {
                    $pack { $($f: self * rhs.elems[$i]),+ }
                }
            }

            impl Mul<$pack<$t>> for $t {
                type Output = $pack<$t>;

                #[inline]
                fn mul(self, rhs: $pack<$t>) -> $pack<$t> {
                    $pack { $($f: self * rhs.$f),+ }
                }
            }
        )+
    };
}

macro_rules! impl_scalar_lhs_mul_all {
    ($($t:ty),+ $(,)?) => {
        $(
            impl_scalar_lhs_mul!($t =>
                1, ResultPack1 { x: 0 };
                2, ResultPack2 { x: 0, y: 1 };
                3, ResultPack3 { x: 0, y: 1, z: 2 };
                4, ResultPack4 { x: 0, y: 1, z: 2, w: 3 };
            );
        )+
    };
}

impl_scalar_lhs_mul_all!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

#[cfg(test)]
mod tests {
    use crate::{
        pack::{ResultPack2, ResultPack3},
        vector::{vec2, vec3, Vector},
    };
    use core::ops::{Add, Mul};
    use proptest::prelude::*;

    #[test]
    fn vector_addition_packs_the_sums() {
        let a = vec3(1, 2, 3);
        let b = vec3(4, 5, 6);
        let sum = a + b;
        assert_eq!((sum.x, sum.y, sum.z), (5, 7, 9));
        let materialized: Vector<i32, 3> = sum.into();
        assert!(materialized == vec3(5, 7, 9));
    }

    #[test]
    fn vector_subtraction_and_negation() {
        let d = vec2(5.0, 7.0) - vec2(1.0, 2.0);
        assert_eq!((d.x, d.y), (4.0, 5.0));

        let n = -vec3(1, -2, 3);
        assert_eq!((n.x, n.y, n.z), (-1, 2, -3));
    }

    #[test]
    fn chained_expressions_flow_through_packs() {
        let a = vec3(1, 2, 3);
        let b = vec3(4, 5, 6);
        let c = vec3(5, 5, 5);
        // vector + vector -> pack, then pack - vector -> pack.
        let r = (a + b) - c;
        assert_eq!((r.x, r.y, r.z), (0, 2, 4));
        // vector - pack works the same way.
        let r = c - (a + a);
        assert_eq!((r.x, r.y, r.z), (3, 1, -1));
    }

    #[test]
    fn scalar_multiplication_commutes() {
        let v = vec3(1.0f32, 2.0, 3.0);
        let left = 2.0 * v;
        let right = v * 2.0;
        assert!(left == right);
        assert_eq!((left.x, left.y, left.z), (2.0, 4.0, 6.0));

        // Scalar-left also applies to packs. The scalar impls are
        // per-primitive, so the literal must be pinned to select one.
        let p = 3i32 * (vec2(1, 2) + vec2(0, 0));
        assert_eq!((p.x, p.y), (3, 6));
    }

    #[test]
    fn scalar_division() {
        let q = vec2(9.0, 3.0) / 3.0;
        assert_eq!((q.x, q.y), (3.0, 1.0));
        let q = vec3(9, 3, 1) / 2;
        assert_eq!((q.x, q.y, q.z), (4, 1, 0));
    }

    #[test]
    fn compound_assignment() {
        let mut v = vec3(1, 2, 3);
        v += vec3(10, 10, 10);
        assert!(v == vec3(11, 12, 13));
        v -= vec3(1, 2, 3);
        assert!(v == vec3(10, 10, 10));
        v *= 3;
        assert!(v == vec3(30, 30, 30));
        v /= 10;
        assert!(v == vec3(3, 3, 3));

        // Packs can be folded in without materializing first.
        let (a, b) = (vec3(1, 1, 1), vec3(2, 2, 2));
        v += a + b;
        assert!(v == vec3(6, 6, 6));
        v -= a + a;
        assert!(v == vec3(4, 4, 4));
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Gain(i32);

    impl Mul for Gain {
        type Output = Gain;

        fn mul(self, rhs: Gain) -> Gain { Gain(self.0 * rhs.0) }
    }

    #[test]
    fn compound_assignment_needs_only_the_plain_operator() {
        // Gain has Mul but deliberately no MulAssign; `*=` still works
        // because the assignment is spelled `x = x * rhs`.
        let mut v = vec2(Gain(2), Gain(3));
        v *= Gain(4);
        assert_eq!(v.x(), Gain(8));
        assert_eq!(v.y(), Gain(12));
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Count(u32);

    impl Add<u32> for Count {
        type Output = u64;

        fn add(self, rhs: u32) -> u64 { u64::from(self.0) + u64::from(rhs) }
    }

    #[test]
    fn mixed_element_types_follow_the_element_operator() {
        let counts = vec2(Count(1), Count(2));
        let deltas = vec2(30u32, 40u32);
        let totals: ResultPack2<u64> = counts + deltas;
        assert_eq!((totals.x, totals.y), (31, 42));
    }

    #[test]
    fn equality_between_vectors_and_packs() {
        let v = vec3(1, 2, 3);
        assert!(v == vec3(1, 2, 3));
        assert!(v != vec3(1, 2, 4));

        let p = ResultPack3::from(v);
        assert!(v == p);
        assert!(p == v);
    }

    proptest! {
        #[test]
        fn addition_commutes(ax in -1e6f64..1e6, ay in -1e6f64..1e6,
            bx in -1e6f64..1e6, by in -1e6f64..1e6)
        {
            let a = vec2(ax, ay);
            let b = vec2(bx, by);
            prop_assert!(a + b == b + a);
        }

        #[test]
        fn scaling_scales_the_norm(x in -1e3f64..1e3, y in -1e3f64..1e3, s in 0.0f64..1e3) {
            let v = vec2(x, y);
            let scaled: Vector<f64, 2> = (v * s).into();
            prop_assert!((scaled.eucnorm() - s * v.eucnorm()).abs() <= 1e-9 * (1.0 + s));
        }
    }
}
