//! Fixed-dimension Euclidean vectors with layout-selectable storage.
//!
//! A [`Vector<T, N, L>`](Vector) holds `N` components of element type `T`
//! inline, for `N` from 1 to 4. Arithmetic never mutates its operands and
//! never allocates: every operator returns a transient [`ResultPack1`]..
//! [`ResultPack4`] of named components, which converts back into a vector
//! (or an array) when the caller decides where the result lives. Packs are
//! `#[must_use]`, so a discarded computation is a warning.
//!
//! ```
//! use eucvec::{vec3, EucFloatVector3};
//!
//! let a = vec3(1.0f32, 2.0, 3.0);
//! let b = vec3(4.0f32, 5.0, 6.0);
//! let sum: EucFloatVector3 = (a + b).into();
//! assert_eq!(sum.as_array(), &[5.0, 7.0, 9.0]);
//!
//! assert_eq!(a.dot(b), 32.0);
//! assert_eq!(vec3(2.0f32, 3.0, 6.0).eucnorm(), 7.0);
//! let up = vec3(1.0f32, 0.0, 0.0).cross(vec3(0.0, 1.0, 0.0));
//! assert_eq!((up.x, up.y, up.z), (0.0, 0.0, 1.0));
//! ```
//!
//! Operations exist exactly when the element type supports them: each
//! method and operator names its requirements as bounds on `T`, so
//! `Vector<String, 2>` simply has no `+`, and integer vectors have a
//! [`eucnorm`](Vector::eucnorm) (via [`Sqrt`] promotion to `f64`) but no
//! `normalize`, since `i32` cannot divide by an `f64` norm.
//!
//! The layout parameter keeps the historical storage families apart.
//! [`Prefixed`] vectors expose their leading components as borrowed
//! views; [`Compact`] vectors answer the same names with copying
//! swizzles:
//!
//! ```
//! use eucvec::{EucCmplDoubleVector3, EucRecDoubleVector3};
//!
//! let mut v = EucRecDoubleVector3::new([1.0, 2.0, 3.0]);
//! *v.xy_mut().y_mut() = 20.0; // the view writes through
//! assert_eq!(v.y(), 20.0);
//!
//! let c: EucCmplDoubleVector3 = v.with_layout();
//! let xy = c.xy(); // compact: a copying swizzle
//! assert_eq!((xy.x, xy.y), (1.0, 20.0));
//! ```
//!
//! Beyond the prefix names, every ordered component selection is a
//! generated swizzle on both layouts: `v.zyx()`, `v.ww()`, `v.yyww()` and
//! the rest each return a pack of the selected components.

mod aliases;
mod elem;
mod layout;
mod ops;
mod pack;
mod swizzle;
mod vector;

pub use aliases::*;
pub use elem::Sqrt;
pub use layout::{Compact, Layout, Prefixed};
pub use pack::{ResultPack1, ResultPack2, ResultPack3, ResultPack4};
pub use vector::{vec1, vec2, vec3, vec4, Vector};
