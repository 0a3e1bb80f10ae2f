//! Transient result packs.
//!
//! Every arithmetic expression over vectors produces a *pack* rather than a
//! new vector: a plain aggregate of the component results with public
//! fields. Packs deliberately have no mutating operators and no accessors
//! beyond their fields; they exist to carry a result until it is read or
//! folded back into a vector (via [`From`]), and their distinct type keeps
//! vector-returning and pack-returning code paths apart. The pack types are
//! marked `#[must_use]` because a discarded arithmetic result usually means
//! the caller wanted the compound-assignment form instead.
//!
//! Binary operators are heterogeneous over element types wherever the
//! element operator itself is: adding a pack of `T` to a pack of `U` is
//! available whenever `T: Add<U>`, and the output pack carries the element
//! operator's output type.

use core::ops::{Add, Div, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::{layout::Layout, vector::Vector};

/// Result of arithmetic over 1D vectors.
#[must_use = "arithmetic produces a transient pack and does nothing unless used"]
#[repr(C)]
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ResultPack1<T> {
    /// The first (and only) component.
    pub x: T,
}

/// Result of arithmetic over 2D vectors.
#[must_use = "arithmetic produces a transient pack and does nothing unless used"]
#[repr(C)]
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ResultPack2<T> {
    /// The first component.
    pub x: T,
    /// The second component.
    pub y: T,
}

/// Result of arithmetic over 3D vectors.
#[must_use = "arithmetic produces a transient pack and does nothing unless used"]
#[repr(C)]
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ResultPack3<T> {
    /// The first component.
    pub x: T,
    /// The second component.
    pub y: T,
    /// The third component.
    pub z: T,
}

/// Result of arithmetic over 4D vectors.
#[must_use = "arithmetic produces a transient pack and does nothing unless used"]
#[repr(C)]
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ResultPack4<T> {
    /// The first component.
    pub x: T,
    /// The second component.
    pub y: T,
    /// The third component.
    pub z: T,
    /// The fourth component.
    pub w: T,
}

macro_rules! impl_pack {
    ($pack:ident, $n:literal { $($f:ident),+ }) => {
        impl<T> From<[T; $n]> for $pack<T> {
            #[inline]
            fn from(elems: [T; $n]) -> Self {
                let [$($f),+] = elems;
                $pack { $($f),+ }
            }
        }

        impl<T> From<$pack<T>> for [T; $n] {
            #[inline]
            fn from(pack: $pack<T>) -> Self { [$(pack.$f),+] }
        }

        impl<T, L: Layout> From<Vector<T, $n, L>> for $pack<T> {
            #[inline]
            fn from(v: Vector<T, $n, L>) -> Self {
                let [$($f),+] = v.to_array();
                $pack { $($f),+ }
            }
        }

        impl<T: Add<U>, U> Add<$pack<U>> for $pack<T> {
            type Output = $pack<<T as Add<U>>::Output>;

            #[inline]
            fn add(self, rhs: $pack<U>) -> Self::Output {
                $pack { $($f: self.$f + rhs.$f),+ }
            }
        }

        impl<T: Sub<U>, U> Sub<$pack<U>> for $pack<T> {
            type Output = $pack<<T as Sub<U>>::Output>;

            #[inline]
            fn sub(self, rhs: $pack<U>) -> Self::Output {
                $pack { $($f: self.$f - rhs.$f),+ }
            }
        }

        impl<T: Add<U>, U, L: Layout> Add<Vector<U, $n, L>> for $pack<T> {
            type Output = $pack<<T as Add<U>>::Output>;

            #[inline]
            fn add(self, rhs: Vector<U, $n, L>) -> Self::Output { self + $pack::from(rhs) }
        }

        impl<T: Sub<U>, U, L: Layout> Sub<Vector<U, $n, L>> for $pack<T> {
            type Output = $pack<<T as Sub<U>>::Output>;

            #[inline]
            fn sub(self, rhs: Vector<U, $n, L>) -> Self::Output { self - $pack::from(rhs) }
        }

        impl<T: Mul<T> + Copy> Mul<T> for $pack<T> {
            type Output = $pack<<T as Mul<T>>::Output>;

            #[inline]
            fn mul(self, rhs: T) -> Self::Output {
                $pack { $($f: self.$f * rhs),+ }
            }
        }

        impl<T: Div<T> + Copy> Div<T> for $pack<T> {
            type Output = $pack<<T as Div<T>>::Output>;

            #[inline]
            fn div(self, rhs: T) -> Self::Output {
                $pack { $($f: self.$f / rhs),+ }
            }
        }

        impl<T: PartialEq<U>, U> PartialEq<$pack<U>> for $pack<T> {
            #[inline]
            fn eq(&self, other: &$pack<U>) -> bool { true $(&& self.$f == other.$f)+ }
        }

        impl<T: PartialEq<U>, U, L: Layout> PartialEq<Vector<U, $n, L>> for $pack<T> {
            #[inline]
            fn eq(&self, other: &Vector<U, $n, L>) -> bool {
                let [$($f),+] = other.as_array();
                true $(&& self.$f == *$f)+
            }
        }

        // repr(C) over T fields only, so a pack of plain-old-data elements
        // is itself plain old data.
        unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for $pack<T> {}

        unsafe impl<T: bytemuck::Pod> bytemuck::Pod for $pack<T> {}

        impl<T: approx::AbsDiffEq> approx::AbsDiffEq for $pack<T>
        where T::Epsilon: Copy
        {
            type Epsilon = T::Epsilon;

            fn default_epsilon() -> Self::Epsilon { T::default_epsilon() }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                true $(&& T::abs_diff_eq(&self.$f, &other.$f, epsilon))+
            }
        }

        impl<T: approx::RelativeEq> approx::RelativeEq for $pack<T>
        where T::Epsilon: Copy
        {
            fn default_max_relative() -> Self::Epsilon { T::default_max_relative() }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                true $(&& T::relative_eq(&self.$f, &other.$f, epsilon, max_relative))+
            }
        }

        impl<T: approx::UlpsEq> approx::UlpsEq for $pack<T>
        where T::Epsilon: Copy
        {
            fn default_max_ulps() -> u32 { T::default_max_ulps() }

            fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
                true $(&& T::ulps_eq(&self.$f, &other.$f, epsilon, max_ulps))+
            }
        }
    };
}

impl_pack!(ResultPack1, 1 { x });
impl_pack!(ResultPack2, 2 { x, y });
impl_pack!(ResultPack3, 3 { x, y, z });
impl_pack!(ResultPack4, 4 { x, y, z, w });
