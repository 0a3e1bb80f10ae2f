//! The generic fixed-dimension vector type.
//!
//! `Vector<T, N, L>` stores its components inline as `[T; N]` and is
//! `repr(transparent)` over that array; the layout parameter `L` selects
//! which of the two historical access families the value belongs to (see
//! [`crate::layout`]). All arithmetic produces transient packs (see
//! [`crate::pack`]); the vector itself only mutates through `set`,
//! `zero_self`, the `_mut` accessors, indexing, and the
//! compound-assignment operators.
//!
//! Operations appear exactly when the element type can support them: each
//! method names the capabilities it is built from as trait bounds, so a
//! vector over a type without e.g. `Div` simply has no `normalize`.

use core::{
    fmt,
    marker::PhantomData,
    ops::{Add, Div, Index, IndexMut, Mul, Sub},
};

use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::{
    elem::Sqrt,
    layout::{Layout, Prefixed},
    pack::{ResultPack1, ResultPack2, ResultPack3, ResultPack4},
};

/// A fixed-dimension Euclidean vector over element type `T`.
///
/// The dimension is a compile-time constant; the convenience aliases in
/// [`crate::aliases`] cover the supported 1–4D range for `f32`, `i32` and
/// `f64` elements. The layout parameter defaults to [`Prefixed`], the
/// family whose 3D/4D vectors expose borrowed prefix views.
#[repr(transparent)]
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(
    serialize = "[T; N]: serde::Serialize",
    deserialize = "[T; N]: serde::Deserialize<'de>"
))]
pub struct Vector<T, const N: usize, L: Layout = Prefixed> {
    pub(crate) elems: [T; N],
    #[serde(skip)]
    _layout: PhantomData<L>,
}

impl<T, const N: usize, L: Layout> Vector<T, N, L> {
    /// Creates a vector from its component array.
    #[inline]
    pub const fn new(elems: [T; N]) -> Self {
        Self {
            elems,
            _layout: PhantomData,
        }
    }

    /// Creates a vector with every component set to `value`.
    #[inline]
    pub const fn splat(value: T) -> Self
    where T: Copy {
        Self::new([value; N])
    }

    /// Creates a vector with every component zero.
    #[inline]
    pub fn zeros() -> Self
    where T: Zero {
        Self::new(core::array::from_fn(|_| T::zero()))
    }

    /// The number of components.
    #[inline(always)]
    #[must_use]
    pub const fn dimension(&self) -> usize { N }

    /// Sets every component to zero in place.
    #[inline]
    pub fn zero_self(&mut self)
    where T: Zero {
        for e in self.elems.iter_mut() {
            e.set_zero();
        }
    }

    /// Borrows the components as an array.
    #[inline(always)]
    pub const fn as_array(&self) -> &[T; N] { &self.elems }

    /// Mutably borrows the components as an array.
    #[inline(always)]
    pub fn as_mut_array(&mut self) -> &mut [T; N] { &mut self.elems }

    /// Consumes the vector, returning its component array.
    #[inline]
    pub fn to_array(self) -> [T; N] { self.elems }

    /// Borrows the components as a slice.
    #[inline(always)]
    pub fn as_slice(&self) -> &[T] { &self.elems }

    /// Mutably borrows the components as a slice.
    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] { &mut self.elems }

    /// Borrows an array as a vector without copying.
    #[inline]
    pub fn from_array_ref(elems: &[T; N]) -> &Self { bytemuck::TransparentWrapper::wrap_ref(elems) }

    /// Mutably borrows an array as a vector without copying.
    #[inline]
    pub fn from_array_mut(elems: &mut [T; N]) -> &mut Self {
        bytemuck::TransparentWrapper::wrap_mut(elems)
    }

    /// Iterates over the components.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> { self.elems.iter() }

    /// Mutably iterates over the components.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> { self.elems.iter_mut() }

    /// Applies `f` to every component, producing a vector of the results.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Vector<U, N, L>
    where F: FnMut(T) -> U {
        Vector::new(self.elems.map(f))
    }

    /// Rebrands the vector with another storage layout, keeping components.
    #[inline]
    pub fn with_layout<M: Layout>(self) -> Vector<T, N, M> { Vector::new(self.elems) }
}

impl<T: Default, const N: usize, L: Layout> Default for Vector<T, N, L> {
    fn default() -> Self { Self::new(core::array::from_fn(|_| T::default())) }
}

impl<T: fmt::Debug, const N: usize, L: Layout> fmt::Debug for Vector<T, N, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector<{}, {}>({:?})", N, L::NAME, self.elems)
    }
}

impl<T: fmt::Display, const N: usize, L: Layout> fmt::Display for Vector<T, N, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, e) in self.elems.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", e)?;
        }
        write!(f, "]")
    }
}

impl<T, const N: usize, L: Layout> From<[T; N]> for Vector<T, N, L> {
    #[inline]
    fn from(elems: [T; N]) -> Self { Self::new(elems) }
}

impl<T, const N: usize, L: Layout> From<Vector<T, N, L>> for [T; N] {
    #[inline]
    fn from(v: Vector<T, N, L>) -> Self { v.elems }
}

impl<T, const N: usize, L: Layout> Index<usize> for Vector<T, N, L> {
    type Output = T;

    #[inline(always)]
    fn index(&self, index: usize) -> &T { &self.elems[index] }
}

impl<T, const N: usize, L: Layout> IndexMut<usize> for Vector<T, N, L> {
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut T { &mut self.elems[index] }
}

impl<T, const N: usize, L: Layout> IntoIterator for Vector<T, N, L> {
    type IntoIter = core::array::IntoIter<T, N>;
    type Item = T;

    #[inline]
    fn into_iter(self) -> Self::IntoIter { self.elems.into_iter() }
}

impl<'a, T, const N: usize, L: Layout> IntoIterator for &'a Vector<T, N, L> {
    type IntoIter = core::slice::Iter<'a, T>;
    type Item = &'a T;

    #[inline]
    fn into_iter(self) -> Self::IntoIter { self.elems.iter() }
}

impl<'a, T, const N: usize, L: Layout> IntoIterator for &'a mut Vector<T, N, L> {
    type IntoIter = core::slice::IterMut<'a, T>;
    type Item = &'a mut T;

    #[inline]
    fn into_iter(self) -> Self::IntoIter { self.elems.iter_mut() }
}

// Vector is repr(transparent) over its component array; the marker carries
// no data. These let borrowed arrays be viewed as vectors and make vectors
// of plain-old-data elements plain old data themselves.
unsafe impl<T, const N: usize, L: Layout> bytemuck::TransparentWrapper<[T; N]>
    for Vector<T, N, L>
{
}

unsafe impl<T: bytemuck::Zeroable, const N: usize, L: Layout> bytemuck::Zeroable
    for Vector<T, N, L>
{
}

unsafe impl<T: bytemuck::Pod, const N: usize, L: Layout + 'static> bytemuck::Pod
    for Vector<T, N, L>
{
}

impl<T: approx::AbsDiffEq, const N: usize, L: Layout> approx::AbsDiffEq for Vector<T, N, L>
where T::Epsilon: Copy
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon { T::default_epsilon() }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.elems
            .iter()
            .zip(other.elems.iter())
            .all(|(a, b)| T::abs_diff_eq(a, b, epsilon))
    }
}

impl<T: approx::RelativeEq, const N: usize, L: Layout> approx::RelativeEq for Vector<T, N, L>
where T::Epsilon: Copy
{
    fn default_max_relative() -> Self::Epsilon { T::default_max_relative() }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.elems
            .iter()
            .zip(other.elems.iter())
            .all(|(a, b)| T::relative_eq(a, b, epsilon, max_relative))
    }
}

impl<T: approx::UlpsEq, const N: usize, L: Layout> approx::UlpsEq for Vector<T, N, L>
where T::Epsilon: Copy
{
    fn default_max_ulps() -> u32 { T::default_max_ulps() }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.elems
            .iter()
            .zip(other.elems.iter())
            .all(|(a, b)| T::ulps_eq(a, b, epsilon, max_ulps))
    }
}

macro_rules! impl_from_pack {
    ($($pack:ident, $n:literal { $($f:ident),+ });+ $(;)?) => {
        $(
            impl<T, L: Layout> From<$pack<T>> for Vector<T, $n, L> {
                #[inline]
                fn from(pack: $pack<T>) -> Self { Self::new([$(pack.$f),+]) }
            }
        )+
    };
}

impl_from_pack! {
    ResultPack1, 1 { x };
    ResultPack2, 2 { x, y };
    ResultPack3, 3 { x, y, z };
    ResultPack4, 4 { x, y, z, w };
}

macro_rules! fold_add {
    (($head:expr) $(($tail:expr))*) => { $head $(+ $tail)* };
}

macro_rules! impl_components {
    ($n:literal: $(($f:ident, $f_mut:ident, $i:tt)),+) => {
        impl<T, L: Layout> Vector<T, $n, L> {
            $(
                #[doc = concat!("Returns component `", stringify!($f), "`.")]
                #[inline(always)]
                pub const fn $f(&self) -> T
                where T: Copy {
                    self.elems[$i]
                }

                #[doc = concat!("Mutably borrows component `", stringify!($f), "`.")]
                #[inline(always)]
                pub fn $f_mut(&mut self) -> &mut T { &mut self.elems[$i] }
            )+

            /// Assigns every component at once.
            #[inline]
            pub fn set(&mut self, $($f: T),+) {
                $(self.elems[$i] = $f;)+
            }
        }
    };
}

impl_components!(1: (x, x_mut, 0));
impl_components!(2: (x, x_mut, 0), (y, y_mut, 1));
impl_components!(3: (x, x_mut, 0), (y, y_mut, 1), (z, z_mut, 2));
impl_components!(4: (x, x_mut, 0), (y, y_mut, 1), (z, z_mut, 2), (w, w_mut, 3));

macro_rules! impl_dot {
    ($($n:literal: $(($i:tt))+);+ $(;)?) => {
        $(
            impl<T, L: Layout> Vector<T, $n, L> {
                /// Dot product, accumulated component by component in order.
                ///
                /// Accepts another vector or a pack.
                #[inline]
                #[must_use]
                pub fn dot(&self, rhs: impl Into<Self>) -> T
                where T: Mul<Output = T> + Add<Output = T> + Copy {
                    let rhs = rhs.into();
                    fold_add!($((self.elems[$i] * rhs.elems[$i]))+)
                }

                /// Squared Euclidean norm, `dot(self)`.
                #[inline]
                #[must_use]
                pub fn eucnorm_squared(&self) -> T
                where T: Mul<Output = T> + Add<Output = T> + Copy {
                    self.dot(*self)
                }
            }
        )+
    };
}

impl_dot! {
    1: (0);
    2: (0)(1);
    3: (0)(1)(2);
    4: (0)(1)(2)(3);
}

macro_rules! impl_norm_ops {
    ($($n:literal, $pack:ident { $($f:ident: $i:tt),+ });+ $(;)?) => {
        $(
            impl<T, L: Layout> Vector<T, $n, L> {
                /// Euclidean norm, `sqrt(eucnorm_squared())`.
                ///
                /// The square root goes through [`Sqrt`], so integer vectors
                /// produce an `f64` norm while float vectors keep their own
                /// precision.
                #[inline]
                #[must_use]
                pub fn eucnorm(&self) -> <T as Sqrt>::Output
                where T: Sqrt + Mul<Output = T> + Add<Output = T> + Copy {
                    Sqrt::sqrt(self.eucnorm_squared())
                }

                /// Returns a pack of each component divided by [`eucnorm`].
                ///
                /// Exists only when the element type divides by the norm
                /// type; integer elements have no `i32 / f64` division, so
                /// integer vectors cannot be normalized. The norm is not
                /// checked for zero: floats follow IEEE semantics, anything
                /// else follows the element's own division behavior.
                ///
                /// [`eucnorm`]: Self::eucnorm
                #[inline]
                pub fn normalize(&self) -> $pack<<T as Div<<T as Sqrt>::Output>>::Output>
                where
                    T: Sqrt + Mul<Output = T> + Add<Output = T> + Copy,
                    T: Div<<T as Sqrt>::Output>,
                    <T as Sqrt>::Output: Copy,
                {
                    let norm = self.eucnorm();
                    $pack { $($f: self.elems[$i] / norm),+ }
                }

                /// Divides every component by the norm in place.
                #[inline]
                pub fn normalize_self(&mut self)
                where
                    T: Sqrt + Mul<Output = T> + Add<Output = T> + Copy,
                    T: Div<<T as Sqrt>::Output, Output = T>,
                    <T as Sqrt>::Output: Copy,
                {
                    let norm = self.eucnorm();
                    for e in self.elems.iter_mut() {
                        *e = *e / norm;
                    }
                }
            }
        )+
    };
}

impl_norm_ops! {
    2, ResultPack2 { x: 0, y: 1 };
    3, ResultPack3 { x: 0, y: 1, z: 2 };
    4, ResultPack4 { x: 0, y: 1, z: 2, w: 3 };
}

impl<T, L: Layout> Vector<T, 1, L> {
    /// Returns the raw component as the "norm" of a 1D vector.
    ///
    /// This is historical behavior carried over deliberately: no square
    /// root is taken and no absolute value is applied, so a negative
    /// component yields a negative norm, unlike `sqrt(eucnorm_squared())`.
    /// Callers wanting a true 1D Euclidean norm should take the absolute
    /// value themselves.
    #[inline]
    #[must_use]
    pub fn eucnorm(&self) -> T
    where T: Copy {
        self.elems[0]
    }

    /// Returns a pack of the component divided by [`eucnorm`], i.e. by
    /// itself: `1` for any non-zero component.
    ///
    /// [`eucnorm`]: Self::eucnorm
    #[inline]
    pub fn normalize(&self) -> ResultPack1<<T as Div>::Output>
    where T: Div + Copy {
        ResultPack1 {
            x: self.elems[0] / self.elems[0],
        }
    }

    /// Divides the component by itself in place.
    #[inline]
    pub fn normalize_self(&mut self)
    where T: Div<Output = T> + Copy {
        self.elems[0] = self.elems[0] / self.elems[0];
    }
}

impl<T, L: Layout> Vector<T, 3, L> {
    /// Cross product; accepts another vector or a pack.
    ///
    /// Degenerate (parallel) inputs produce the zero pack, with no special
    /// handling.
    #[inline]
    pub fn cross(&self, rhs: impl Into<Self>) -> ResultPack3<T>
    where T: Mul<Output = T> + Sub<Output = T> + Copy {
        let rhs = rhs.into();
        let [ax, ay, az] = self.elems;
        let [bx, by, bz] = rhs.elems;
        ResultPack3 {
            x: ay * bz - az * by,
            y: az * bx - ax * bz,
            z: ax * by - ay * bx,
        }
    }
}

macro_rules! impl_prefix_views {
    ($n:literal => $($name:ident / $name_mut:ident -> $k:literal),+) => {
        impl<T> Vector<T, $n, Prefixed> {
            $(
                #[doc = concat!(
                    "Borrows the leading ", stringify!($k),
                    " components as a vector view.\n\nThe view aliases this \
                    vector's own storage; it is a reinterpretation, not a \
                    copy."
                )]
                #[inline]
                #[must_use]
                pub fn $name(&self) -> &Vector<T, $k, Prefixed> {
                    // Sound: repr(transparent) over [T; N] means the first
                    // $k components are laid out exactly like [T; $k].
                    unsafe { &*(self.elems.as_ptr() as *const Vector<T, $k, Prefixed>) }
                }

                #[doc = concat!(
                    "Mutably borrows the leading ", stringify!($k),
                    " components as a vector view.\n\nMutations through the \
                    view are mutations of this vector."
                )]
                #[inline]
                #[must_use]
                pub fn $name_mut(&mut self) -> &mut Vector<T, $k, Prefixed> {
                    unsafe { &mut *(self.elems.as_mut_ptr() as *mut Vector<T, $k, Prefixed>) }
                }
            )+
        }
    };
}

impl_prefix_views!(3 => xy / xy_mut -> 2);
impl_prefix_views!(4 => xy / xy_mut -> 2, xyz / xyz_mut -> 3);

/// Creates a 1D vector in the default layout.
#[inline]
pub const fn vec1<T>(x: T) -> Vector<T, 1> { Vector::new([x]) }

/// Creates a 2D vector in the default layout.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vector<T, 2> { Vector::new([x, y]) }

/// Creates a 3D vector in the default layout.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vector<T, 3> { Vector::new([x, y, z]) }

/// Creates a 4D vector in the default layout.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vector<T, 4> { Vector::new([x, y, z, w]) }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        aliases::{EucDoubleVector2, EucFloatVector3, EucIntVector2},
        layout::Compact,
    };
    use approx::assert_ulps_eq;
    use proptest::prelude::*;

    #[test]
    fn construction_and_access() {
        let v = vec3(1.0f32, 2.0, 3.0);
        assert_eq!(v.x(), 1.0);
        assert_eq!(v.y(), 2.0);
        assert_eq!(v.z(), 3.0);
        assert_eq!(v.dimension(), 3);

        let s: Vector<f32, 4> = Vector::splat(2.5);
        assert_eq!(s.as_array(), &[2.5; 4]);

        let z: Vector<i32, 2> = Vector::zeros();
        assert_eq!(z.to_array(), [0, 0]);

        let d: Vector<f64, 3> = Vector::default();
        assert_eq!(d.as_slice(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn mutation_through_accessors_and_set() {
        let mut v = vec2(1, 2);
        *v.x_mut() = 10;
        *v.y_mut() += 1;
        assert_eq!(v.to_array(), [10, 3]);

        let mut v = vec3(1.0f32, 2.0, 3.0);
        v.set(4.0, 5.0, 6.0);
        assert_eq!(v.as_array(), &[4.0, 5.0, 6.0]);

        v.zero_self();
        assert_eq!(v.as_array(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn indexing_and_iteration() {
        let mut v = vec4(1, 2, 3, 4);
        assert_eq!(v[0], 1);
        assert_eq!(v[3], 4);
        v[2] = 30;
        assert_eq!(v.z(), 30);
        assert_eq!(v.iter().sum::<i32>(), 37);
        assert_eq!((&v).into_iter().count(), 4);
    }

    #[test]
    fn map_and_layout_conversion() {
        let v = vec3(1, 2, 3).map(|e| e as f64 * 0.5);
        assert_eq!(v.to_array(), [0.5, 1.0, 1.5]);

        let c: Vector<i32, 3, Compact> = vec3(1, 2, 3).with_layout();
        assert_eq!(c.to_array(), [1, 2, 3]);
        let p: Vector<i32, 3> = c.with_layout();
        assert_eq!(p.to_array(), [1, 2, 3]);
    }

    #[test]
    fn array_views_share_storage() {
        let mut raw = [1.0f32, 2.0, 3.0];
        {
            let v = Vector::<f32, 3>::from_array_mut(&mut raw);
            *v.y_mut() = 20.0;
        }
        assert_eq!(raw, [1.0, 20.0, 3.0]);
        let v = Vector::<f32, 3>::from_array_ref(&raw);
        assert_eq!(v.y(), 20.0);
    }

    #[test]
    fn prefix_views_alias_the_vector() {
        let mut v = vec4(1.0f32, 2.0, 3.0, 4.0);
        assert_eq!(v.xy().as_array(), &[1.0, 2.0]);
        assert_eq!(v.xyz().as_array(), &[1.0, 2.0, 3.0]);

        *v.xy_mut().x_mut() = 10.0;
        v.xyz_mut().set(7.0, 8.0, 9.0);
        assert_eq!(v.x(), 7.0);
        assert_eq!(v.y(), 8.0);
        assert_eq!(v.z(), 9.0);
        assert_eq!(v.w(), 4.0);

        // A view is a full vector of its own dimension.
        let n = v.xyz().eucnorm_squared();
        assert_eq!(n, 7.0 * 7.0 + 8.0 * 8.0 + 9.0 * 9.0);
    }

    #[test]
    fn dot_products() {
        let a = vec3(1, 2, 3);
        let b = vec3(4, 5, 6);
        assert_eq!(a.dot(b), 32);
        assert_eq!(vec1(7).dot(vec1(6)), 42);

        // Packs are accepted directly.
        let p = crate::pack::ResultPack3::from([1, 1, 1]);
        assert_eq!(a.dot(p), 6);
    }

    #[test]
    fn norms() {
        let v = EucIntVector2::new([3, 4]);
        assert_eq!(v.eucnorm_squared(), 25);
        assert_eq!(v.eucnorm(), 5.0f64);

        let v = EucFloatVector3::new([2.0, 3.0, 6.0]);
        assert_eq!(v.eucnorm_squared(), 49.0);
        assert_eq!(v.eucnorm(), 7.0f32);
    }

    #[test]
    fn one_dimensional_norm_is_the_raw_component() {
        let v = vec1(-5.0f32);
        assert_eq!(v.eucnorm(), -5.0);
        assert_eq!(v.eucnorm_squared(), 25.0);

        let v = vec1(-3);
        assert_eq!(v.eucnorm(), -3);
        let unit = v.normalize();
        assert_eq!(unit.x, 1);
    }

    #[test]
    fn normalization() {
        let v = EucDoubleVector2::new([3.0, 4.0]);
        let unit = v.normalize();
        assert_ulps_eq!(unit.x, 0.6);
        assert_ulps_eq!(unit.y, 0.8);
        let unit: EucDoubleVector2 = v.normalize().into();
        assert_ulps_eq!(unit.eucnorm(), 1.0);

        let mut v = EucFloatVector3::new([1.0, 2.0, 2.0]);
        v.normalize_self();
        assert_ulps_eq!(v.eucnorm(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn cross_products() {
        let x = vec3(1.0f32, 0.0, 0.0);
        let y = vec3(0.0f32, 1.0, 0.0);
        let z = x.cross(y);
        assert_eq!((z.x, z.y, z.z), (0.0, 0.0, 1.0));

        let a = vec3(1, 2, 3);
        let b = vec3(4, 5, 6);
        let c = a.cross(b);
        assert_eq!((c.x, c.y, c.z), (-3, 6, -3));
        // Accepts a pack operand.
        let c2 = a.cross(crate::pack::ResultPack3::from([4, 5, 6]));
        assert!(c == c2);
    }

    #[test]
    fn display_and_debug() {
        let v = vec3(1, 2, 3);
        assert_eq!(format!("{}", v), "[1, 2, 3]");
        assert_eq!(format!("{:?}", v), "Vector<3, Prefixed>([1, 2, 3])");
        let c: Vector<i32, 2, Compact> = Vector::new([5, 6]);
        assert_eq!(format!("{:?}", c), "Vector<2, Compact>([5, 6])");
    }

    #[test]
    fn serde_yaml_round_trip() {
        let v = vec3(1.5f64, -2.0, 0.25);
        let serialized = serde_yaml::to_string(&v).unwrap();
        let deserialized: Vector<f64, 3> = serde_yaml::from_str(&serialized).unwrap();
        assert!(v == deserialized);

        // Transparent representation: a vector is just its sequence.
        let from_seq: Vector<i32, 2, Compact> = serde_yaml::from_str("[3, 4]").unwrap();
        assert_eq!(from_seq.to_array(), [3, 4]);
    }

    #[test]
    fn pod_casting() {
        let v = vec3(1.0f32, 2.0, 3.0);
        let bytes: &[u8] = bytemuck::bytes_of(&v);
        assert_eq!(bytes.len(), core::mem::size_of::<f32>() * 3);
        let back: &Vector<f32, 3> = bytemuck::from_bytes(bytes);
        assert!(*back == v);
    }

    proptest! {
        #[test]
        fn dot_is_symmetric(ax in -1e3f64..1e3, ay in -1e3f64..1e3, az in -1e3f64..1e3,
            bx in -1e3f64..1e3, by in -1e3f64..1e3, bz in -1e3f64..1e3)
        {
            let a = vec3(ax, ay, az);
            let b = vec3(bx, by, bz);
            prop_assert_eq!(a.dot(b), b.dot(a));
        }

        #[test]
        fn cross_is_orthogonal_and_anticommutative(
            ax in -1e3f64..1e3, ay in -1e3f64..1e3, az in -1e3f64..1e3,
            bx in -1e3f64..1e3, by in -1e3f64..1e3, bz in -1e3f64..1e3)
        {
            let a = vec3(ax, ay, az);
            let b = vec3(bx, by, bz);
            let c: Vector<f64, 3> = a.cross(b).into();
            let scale = a.eucnorm() * b.eucnorm() + 1.0;
            prop_assert!((c.dot(a) / scale).abs() < 1e-9);
            prop_assert!((c.dot(b) / scale).abs() < 1e-9);

            let d = b.cross(a);
            prop_assert_eq!(c.x(), -d.x);
            prop_assert_eq!(c.y(), -d.y);
            prop_assert_eq!(c.z(), -d.z);
        }

        #[test]
        fn normalized_vectors_have_unit_norm(
            x in -1e3f64..1e3, y in -1e3f64..1e3, z in -1e3f64..1e3)
        {
            prop_assume!(x * x + y * y + z * z > 1e-6);
            let v: Vector<f64, 3> = vec3(x, y, z).normalize().into();
            prop_assert!((v.eucnorm() - 1.0).abs() < 1e-9);
        }

        #[test]
        fn norm_squared_matches_dot(x in -1e3f32..1e3, y in -1e3f32..1e3) {
            let v = vec2(x, y);
            prop_assert_eq!(v.eucnorm_squared(), v.dot(v));
        }
    }
}
