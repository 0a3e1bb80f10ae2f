//! Storage layout strategies for vectors.
//!
//! Historically this library shipped several vector families with the same
//! arithmetic contract: two whose lower dimensions were reachable as
//! reference views into the vector's own storage (differing only in how
//! they laid the components out), and one sealed flat aggregate offering
//! copy-only access. All store their components contiguously here; the
//! family split survives as a type-level strategy parameter that only
//! controls whether borrowed prefix views exist.

use core::fmt::Debug;

/// Prefix-viewable layout.
///
/// The leading components of a 3D/4D vector double as a lower-dimensional
/// vector borrowed in place: [`xy()`](crate::Vector::xy) and
/// [`xyz()`](crate::Vector::xyz) return references, not copies. Pick this
/// layout when sub-vector views are wanted; it is the default.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Prefixed;

/// Sealed flat layout.
///
/// No borrowed prefix views; `xy()`/`xyz()` behave like every other
/// swizzle and return an independent copy. Pick this layout when the
/// vector should be a plain value with no aliased sub-views.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Compact;

/// Strategy trait for vector storage layouts.
pub trait Layout: Debug + Copy + Clone {
    /// The name of the layout, used in debug output.
    const NAME: &'static str;
}

impl Layout for Prefixed {
    const NAME: &'static str = "Prefixed";
}

impl Layout for Compact {
    const NAME: &'static str = "Compact";
}
