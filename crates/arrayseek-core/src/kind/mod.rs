//! Per-kind equality predicates shared by the equality and search layers.
//!
//! Two rules exist per kind:
//! - exact equality (bit-pattern for floats), used by deep equality and hashing
//! - search equality, which is exact for discrete kinds and a `±ε` window
//!   for floating kinds
//!
//! Search equality is not transitive for floats, so it must never back
//! `PartialEq`/`Hash` implementations.

mod tolerance;


use arrayseek_primitives::ElementKind;
use std::fmt;

// re-exports
pub use tolerance::{Exact, Tolerance};

///
/// CONSTANTS
///

/// Hash contribution of `true`.
pub const TRUE_HASH: i32 = 1231;

/// Hash contribution of `false`.
pub const FALSE_HASH: i32 = 1237;

///
/// EqualityKind
///
/// Exact equality and hash contribution for one flat element kind.
///
/// `exact_eq` must be an equivalence relation and must agree with
/// `hash_contribution`.
///

pub trait EqualityKind {
    fn exact_eq(&self, other: &Self) -> bool;

    fn hash_contribution(&self) -> i32;
}

///
/// SearchKind
///
/// Search-time equality. Discrete kinds take [`Exact`] and compare with
/// `==`; floating kinds take a [`Tolerance`] window.
///

pub trait SearchKind {
    type Tolerance: Copy + Default + fmt::Debug;

    const KIND: ElementKind;

    fn search_eq(&self, other: &Self, tolerance: Self::Tolerance) -> bool;
}

/// Fold a 64-bit pattern into 32 bits by xoring the halves.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_possible_wrap)]
pub const fn fold_u64(bits: u64) -> i32 {
    (bits ^ (bits >> 32)) as u32 as i32
}

macro_rules! impl_discrete_kind {
    ( $( $ty:ty => $kind:ident, |$v:ident| $contribution:expr; )* ) => {
        $(
            impl EqualityKind for $ty {
                fn exact_eq(&self, other: &Self) -> bool {
                    self == other
                }

                fn hash_contribution(&self) -> i32 {
                    let $v = *self;
                    $contribution
                }
            }

            impl SearchKind for $ty {
                type Tolerance = Exact;

                const KIND: ElementKind = ElementKind::$kind;

                fn search_eq(&self, other: &Self, _: Exact) -> bool {
                    self == other
                }
            }
        )*
    };
}

macro_rules! impl_floating_kind {
    ( $( $ty:ty => $kind:ident, |$bits:ident| $contribution:expr; )* ) => {
        $(
            impl EqualityKind for $ty {
                fn exact_eq(&self, other: &Self) -> bool {
                    self.to_bits() == other.to_bits()
                }

                fn hash_contribution(&self) -> i32 {
                    let $bits = self.to_bits();
                    $contribution
                }
            }

            impl SearchKind for $ty {
                type Tolerance = Tolerance<$ty>;

                const KIND: ElementKind = ElementKind::$kind;

                // equal infinities match although their difference is NaN;
                // NaN never matches, itself included
                fn search_eq(&self, other: &Self, tolerance: Self::Tolerance) -> bool {
                    self == other || (self - other).abs() <= tolerance.get()
                }
            }
        )*
    };
}

#[allow(clippy::cast_sign_loss)]
#[allow(clippy::cast_possible_wrap)]
mod impls {
    use super::*;

    impl_discrete_kind! {
        i64 => Int64, |v| fold_u64(v as u64);
        i32 => Int32, |v| v;
        i16 => Int16, |v| i32::from(v);
        i8 => Int8, |v| i32::from(v);
        bool => Bool, |v| if v { TRUE_HASH } else { FALSE_HASH };
        char => Char, |v| u32::from(v) as i32;
    }

    impl_floating_kind! {
        f64 => Float64, |bits| fold_u64(bits);
        f32 => Float32, |bits| bits as i32;
    }
}
