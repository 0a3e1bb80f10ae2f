//! Generated component-selection ("swizzle") accessors.
//!
//! Every ordered combination of component names, with repetition, is a
//! method: `v.zyx()` on a 3D vector packs `(z, y, x)`, `v.ww()` on a 4D
//! vector packs `(w, w)`. All swizzles copy their components out into a
//! pack, so they need `T: Copy` and never borrow the vector.
//!
//! Two names are special on the prefixed layout: `xy` on 3D/4D vectors and
//! `xyz` on 4D vectors are borrowed prefix views (see [`crate::vector`]),
//! not copying swizzles. On the compact layout those names are ordinary
//! swizzles like the rest, defined at the bottom of this module.
//!
//! The grids are spelled out axis list by axis list instead of one big
//! cross product: a `macro_rules` repetition cannot multiply two captured
//! lists in a single arm, so each level of these macros peels one axis and
//! hands the remaining lists down.

use paste::paste;

use crate::{
    layout::{Compact, Layout},
    pack::{ResultPack2, ResultPack3, ResultPack4},
    vector::Vector,
};

macro_rules! swizzle2_row {
    ($n:literal, $a:ident: $ai:tt, ($(($b:ident: $bi:tt))+)) => {
        paste! {
            impl<T: Copy, L: Layout> Vector<T, $n, L> {
                $(
                    #[doc = concat!(
                        "Returns the `(", stringify!($a), ", ", stringify!($b),
                        ")` components as a pack."
                    )]
                    #[inline]
                    pub fn [<$a $b>](&self) -> ResultPack2<T> {
                        ResultPack2 {
                            x: self.elems[$ai],
                            y: self.elems[$bi],
                        }
                    }
                )+
            }
        }
    };
}

macro_rules! swizzle2_grid {
    ($n:literal: ($(($a:ident: $ai:tt))+), $bs:tt) => {
        $(swizzle2_row!($n, $a: $ai, $bs);)+
    };
}

macro_rules! swizzle3_row {
    ($n:literal, $a:ident: $ai:tt, $b:ident: $bi:tt, ($(($c:ident: $ci:tt))+)) => {
        paste! {
            impl<T: Copy, L: Layout> Vector<T, $n, L> {
                $(
                    #[doc = concat!(
                        "Returns the `(", stringify!($a), ", ", stringify!($b),
                        ", ", stringify!($c), ")` components as a pack."
                    )]
                    #[inline]
                    pub fn [<$a $b $c>](&self) -> ResultPack3<T> {
                        ResultPack3 {
                            x: self.elems[$ai],
                            y: self.elems[$bi],
                            z: self.elems[$ci],
                        }
                    }
                )+
            }
        }
    };
}

macro_rules! swizzle3_mid {
    ($n:literal, $a:ident: $ai:tt, ($(($b:ident: $bi:tt))+), $cs:tt) => {
        $(swizzle3_row!($n, $a: $ai, $b: $bi, $cs);)+
    };
}

macro_rules! swizzle3_grid {
    ($n:literal: ($(($a:ident: $ai:tt))+), $bs:tt, $cs:tt) => {
        $(swizzle3_mid!($n, $a: $ai, $bs, $cs);)+
    };
}

macro_rules! swizzle4_row {
    ($a:ident: $ai:tt, $b:ident: $bi:tt, $c:ident: $ci:tt, ($(($d:ident: $di:tt))+)) => {
        paste! {
            impl<T: Copy, L: Layout> Vector<T, 4, L> {
                $(
                    #[doc = concat!(
                        "Returns the `(", stringify!($a), ", ", stringify!($b),
                        ", ", stringify!($c), ", ", stringify!($d),
                        ")` components as a pack."
                    )]
                    #[inline]
                    pub fn [<$a $b $c $d>](&self) -> ResultPack4<T> {
                        ResultPack4 {
                            x: self.elems[$ai],
                            y: self.elems[$bi],
                            z: self.elems[$ci],
                            w: self.elems[$di],
                        }
                    }
                )+
            }
        }
    };
}

macro_rules! swizzle4_mid2 {
    ($a:ident: $ai:tt, $b:ident: $bi:tt, ($(($c:ident: $ci:tt))+), $ds:tt) => {
        $(swizzle4_row!($a: $ai, $b: $bi, $c: $ci, $ds);)+
    };
}

macro_rules! swizzle4_mid1 {
    ($a:ident: $ai:tt, ($(($b:ident: $bi:tt))+), $cs:tt, $ds:tt) => {
        $(swizzle4_mid2!($a: $ai, $b: $bi, $cs, $ds);)+
    };
}

macro_rules! swizzle4_grid {
    (($(($a:ident: $ai:tt))+), $bs:tt, $cs:tt, $ds:tt) => {
        $(swizzle4_mid1!($a: $ai, $bs, $cs, $ds);)+
    };
}

// 2D: the full two-component grid. `xy` is a swizzle here; only 3D and 4D
// vectors reserve that name for the prefix view.
swizzle2_grid!(2: ((x: 0)(y: 1)), ((x: 0)(y: 1)));

// 3D pairs, minus `xy`.
swizzle2_grid!(3: ((x: 0)), ((x: 0)(z: 2)));
swizzle2_grid!(3: ((y: 1)(z: 2)), ((x: 0)(y: 1)(z: 2)));

// 3D triples: the full grid, identity included.
swizzle3_grid!(
    3: ((x: 0)(y: 1)(z: 2)),
    ((x: 0)(y: 1)(z: 2)),
    ((x: 0)(y: 1)(z: 2))
);

// 4D pairs, minus `xy`.
swizzle2_grid!(4: ((x: 0)), ((x: 0)(z: 2)(w: 3)));
swizzle2_grid!(4: ((y: 1)(z: 2)(w: 3)), ((x: 0)(y: 1)(z: 2)(w: 3)));

// 4D triples, minus `xyz`.
swizzle3_grid!(
    4: ((x: 0)),
    ((x: 0)(z: 2)(w: 3)),
    ((x: 0)(y: 1)(z: 2)(w: 3))
);
swizzle3_grid!(4: ((x: 0)), ((y: 1)), ((x: 0)(y: 1)(w: 3)));
swizzle3_grid!(
    4: ((y: 1)(z: 2)(w: 3)),
    ((x: 0)(y: 1)(z: 2)(w: 3)),
    ((x: 0)(y: 1)(z: 2)(w: 3))
);

// 4D quadruples: the full grid, identity included.
swizzle4_grid!(
    ((x: 0)(y: 1)(z: 2)(w: 3)),
    ((x: 0)(y: 1)(z: 2)(w: 3)),
    ((x: 0)(y: 1)(z: 2)(w: 3)),
    ((x: 0)(y: 1)(z: 2)(w: 3))
);

impl<T: Copy> Vector<T, 3, Compact> {
    /// Returns the `(x, y)` components as a pack.
    ///
    /// On the compact layout this is a copying swizzle like any other;
    /// only the prefixed layout exposes `xy` as a borrowed view.
    #[inline]
    pub fn xy(&self) -> ResultPack2<T> {
        ResultPack2 {
            x: self.elems[0],
            y: self.elems[1],
        }
    }
}

impl<T: Copy> Vector<T, 4, Compact> {
    /// Returns the `(x, y)` components as a pack.
    ///
    /// On the compact layout this is a copying swizzle like any other;
    /// only the prefixed layout exposes `xy` as a borrowed view.
    #[inline]
    pub fn xy(&self) -> ResultPack2<T> {
        ResultPack2 {
            x: self.elems[0],
            y: self.elems[1],
        }
    }

    /// Returns the `(x, y, z)` components as a pack.
    ///
    /// On the compact layout this is a copying swizzle like any other;
    /// only the prefixed layout exposes `xyz` as a borrowed view.
    #[inline]
    pub fn xyz(&self) -> ResultPack3<T> {
        ResultPack3 {
            x: self.elems[0],
            y: self.elems[1],
            z: self.elems[2],
        }
    }
}
