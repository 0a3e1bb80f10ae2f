//! Named aliases for the supported element types, dimensions and layouts.
//!
//! The `EuclideanVector*` names follow the historical families. The plain
//! and `Rec` families differed only in how they stored their components;
//! both honor the prefix-view contract, so both map to the [`Prefixed`]
//! layout here. The sealed `Cmpl` family has no views and maps to
//! [`Compact`]. 1D vectors predate the family split and exist once, in
//! the default layout. The short `Vec1`..`Vec4` aliases keep the element
//! type and layout open.

use crate::{
    layout::{Compact, Prefixed},
    vector::Vector,
};

/// A 1D vector, generic over element type and layout.
pub type Vec1<T, L = Prefixed> = Vector<T, 1, L>;
/// A 2D vector, generic over element type and layout.
pub type Vec2<T, L = Prefixed> = Vector<T, 2, L>;
/// A 3D vector, generic over element type and layout.
pub type Vec3<T, L = Prefixed> = Vector<T, 3, L>;
/// A 4D vector, generic over element type and layout.
pub type Vec4<T, L = Prefixed> = Vector<T, 4, L>;

/// A 1D vector over an arbitrary element type.
pub type EuclideanVector1<E> = Vector<E, 1>;
/// A 2D vector of the plain view-capable family.
pub type EuclideanVector2<E> = Vector<E, 2>;
/// A 3D vector of the plain view-capable family.
pub type EuclideanVector3<E> = Vector<E, 3>;
/// A 4D vector of the plain view-capable family.
pub type EuclideanVector4<E> = Vector<E, 4>;

/// A 2D vector under the recursive family's name.
pub type EuclideanRecVector2<E> = Vector<E, 2, Prefixed>;
/// A 3D vector under the recursive family's name.
pub type EuclideanRecVector3<E> = Vector<E, 3, Prefixed>;
/// A 4D vector under the recursive family's name.
pub type EuclideanRecVector4<E> = Vector<E, 4, Prefixed>;

/// A 2D vector of the compact family.
pub type EuclideanCmplVector2<E> = Vector<E, 2, Compact>;
/// A 3D vector of the compact family.
pub type EuclideanCmplVector3<E> = Vector<E, 3, Compact>;
/// A 4D vector of the compact family.
pub type EuclideanCmplVector4<E> = Vector<E, 4, Compact>;

// Concrete element types: `Float` is f32, `Double` is f64, `Int` is i32.

pub type EucFloatVector1 = EuclideanVector1<f32>;
pub type EucFloatVector2 = EuclideanVector2<f32>;
pub type EucFloatVector3 = EuclideanVector3<f32>;
pub type EucFloatVector4 = EuclideanVector4<f32>;

pub type EucIntVector1 = EuclideanVector1<i32>;
pub type EucIntVector2 = EuclideanVector2<i32>;
pub type EucIntVector3 = EuclideanVector3<i32>;
pub type EucIntVector4 = EuclideanVector4<i32>;

pub type EucDoubleVector1 = EuclideanVector1<f64>;
pub type EucDoubleVector2 = EuclideanVector2<f64>;
pub type EucDoubleVector3 = EuclideanVector3<f64>;
pub type EucDoubleVector4 = EuclideanVector4<f64>;

pub type EucRecFloatVector2 = EuclideanRecVector2<f32>;
pub type EucRecFloatVector3 = EuclideanRecVector3<f32>;
pub type EucRecFloatVector4 = EuclideanRecVector4<f32>;

pub type EucRecIntVector2 = EuclideanRecVector2<i32>;
pub type EucRecIntVector3 = EuclideanRecVector3<i32>;
pub type EucRecIntVector4 = EuclideanRecVector4<i32>;

pub type EucRecDoubleVector2 = EuclideanRecVector2<f64>;
pub type EucRecDoubleVector3 = EuclideanRecVector3<f64>;
pub type EucRecDoubleVector4 = EuclideanRecVector4<f64>;

pub type EucCmplFloatVector2 = EuclideanCmplVector2<f32>;
pub type EucCmplFloatVector3 = EuclideanCmplVector3<f32>;
pub type EucCmplFloatVector4 = EuclideanCmplVector4<f32>;

pub type EucCmplIntVector2 = EuclideanCmplVector2<i32>;
pub type EucCmplIntVector3 = EuclideanCmplVector3<i32>;
pub type EucCmplIntVector4 = EuclideanCmplVector4<i32>;

pub type EucCmplDoubleVector2 = EuclideanCmplVector2<f64>;
pub type EucCmplDoubleVector3 = EuclideanCmplVector3<f64>;
pub type EucCmplDoubleVector4 = EuclideanCmplVector4<f64>;

// The layout marker carries no data, so a vector is exactly its elements.
static_assertions::assert_eq_size!(EucFloatVector3, [f32; 3]);
static_assertions::assert_eq_size!(EucIntVector2, [i32; 2]);
static_assertions::assert_eq_size!(EucCmplDoubleVector4, [f64; 4]);
static_assertions::assert_impl_all!(EucFloatVector3: Copy, Send, Sync);
