//! Dynamic array model: one tagged union variant per element kind.
//!
//! Slice-level APIs resolve the kind statically through a type parameter;
//! `Array` resolves it once per call by matching its variant.


use crate::{
    equality::{self, ScalarEquality},
    kind::{Exact, SearchKind},
    shuffle::{self, RandomIndex},
};
use arrayseek_primitives::ElementKind;
use std::hash::{Hash, Hasher};

// Expand one expression per array variant, binding the element vector.
macro_rules! match_array {
    ($array:expr, |$items:ident| $body:expr) => {
        match $array {
            $crate::value::Array::Int64($items) => $body,
            $crate::value::Array::Int32($items) => $body,
            $crate::value::Array::Int16($items) => $body,
            $crate::value::Array::Int8($items) => $body,
            $crate::value::Array::Float64($items) => $body,
            $crate::value::Array::Float32($items) => $body,
            $crate::value::Array::Bool($items) => $body,
            $crate::value::Array::Char($items) => $body,
            $crate::value::Array::Reference($items) => $body,
        }
    };
}

///
/// Array
///
/// Fixed-length, zero-indexed sequence of one element kind.
/// `Reference` arrays hold [`Element`]s and may nest further arrays.
///

#[derive(Clone, Debug)]
pub enum Array<R> {
    Int64(Vec<i64>),
    Int32(Vec<i32>),
    Int16(Vec<i16>),
    Int8(Vec<i8>),
    Float64(Vec<f64>),
    Float32(Vec<f32>),
    Bool(Vec<bool>),
    Char(Vec<char>),
    Reference(Vec<Element<R>>),
}

impl<R> Array<R> {
    #[must_use]
    pub const fn kind(&self) -> ElementKind {
        match self {
            Self::Int64(_) => ElementKind::Int64,
            Self::Int32(_) => ElementKind::Int32,
            Self::Int16(_) => ElementKind::Int16,
            Self::Int8(_) => ElementKind::Int8,
            Self::Float64(_) => ElementKind::Float64,
            Self::Float32(_) => ElementKind::Float32,
            Self::Bool(_) => ElementKind::Bool,
            Self::Char(_) => ElementKind::Char,
            Self::Reference(_) => ElementKind::Reference,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match_array!(self, |items| items.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Deep equality with a caller-supplied scalar rule for opaque references.
    pub fn deep_equals_by<S>(&self, other: &Self, scalar: &S) -> bool
    where
        S: ScalarEquality<R>,
    {
        equality::arrays_equal_by(self, other, scalar)
    }

    /// Structural hash with a caller-supplied scalar rule for opaque references.
    pub fn structural_hash_by<S>(&self, scalar: &S) -> i32
    where
        S: ScalarEquality<R>,
    {
        equality::array_hash_by(self, scalar)
    }

    /// Reorder in place with random pairwise swaps; returns `self` for chaining.
    pub fn shuffle<G>(&mut self, rng: &mut G) -> &mut Self
    where
        G: RandomIndex + ?Sized,
    {
        match_array!(self, |items| {
            shuffle::shuffle(items.as_mut_slice(), rng);
        });

        self
    }
}

impl<R: PartialEq> Array<R> {
    #[must_use]
    pub fn deep_equals(&self, other: &Self) -> bool {
        equality::arrays_equal(self, other)
    }
}

impl<R: Hash> Array<R> {
    #[must_use]
    pub fn structural_hash(&self) -> i32 {
        equality::array_hash(self)
    }
}

impl<R: PartialEq> PartialEq for Array<R> {
    fn eq(&self, other: &Self) -> bool {
        self.deep_equals(other)
    }
}

// bit-exact float equality is reflexive, so Eq holds whenever R's does
impl<R: Eq> Eq for Array<R> {}

impl<R: Hash> Hash for Array<R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.structural_hash());
    }
}

macro_rules! impl_array_from_vec {
    ( $( $ty:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl<R> From<Vec<$ty>> for Array<R> {
                fn from(items: Vec<$ty>) -> Self {
                    Self::$variant(items)
                }
            }
        )*
    };
}

impl_array_from_vec! {
    i64 => Int64,
    i32 => Int32,
    i16 => Int16,
    i8 => Int8,
    f64 => Float64,
    f32 => Float32,
    bool => Bool,
    char => Char,
}

impl<R> From<Vec<Element<R>>> for Array<R> {
    fn from(items: Vec<Element<R>>) -> Self {
        Self::Reference(items)
    }
}

///
/// Element
///
/// One slot of a `Reference` array, or a top-level value handed to the
/// equality layer.
///
/// Null   → absent reference
/// Value  → opaque value compared by the caller's scalar rule
/// Array  → nested array compared structurally
///

#[derive(Clone, Debug)]
pub enum Element<R> {
    Null,
    Value(R),
    Array(Array<R>),
}

impl<R> Element<R> {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn as_array(&self) -> Option<&Array<R>> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }

    pub fn deep_equals_by<S>(&self, other: &Self, scalar: &S) -> bool
    where
        S: ScalarEquality<R>,
    {
        equality::deep_equals_by(self, other, scalar)
    }

    pub fn structural_hash_by<S>(&self, scalar: &S) -> i32
    where
        S: ScalarEquality<R>,
    {
        equality::structural_hash_by(self, scalar)
    }
}

impl<R: PartialEq> Element<R> {
    #[must_use]
    pub fn deep_equals(&self, other: &Self) -> bool {
        equality::deep_equals(self, other)
    }
}

impl<R: Hash> Element<R> {
    #[must_use]
    pub fn structural_hash(&self) -> i32 {
        equality::structural_hash(self)
    }
}

impl<R: PartialEq> PartialEq for Element<R> {
    fn eq(&self, other: &Self) -> bool {
        self.deep_equals(other)
    }
}

impl<R: Eq> Eq for Element<R> {}

impl<R: Hash> Hash for Element<R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.structural_hash());
    }
}

// Reference search uses the same deep equality as the equality layer.
impl<R: PartialEq> SearchKind for Element<R> {
    type Tolerance = Exact;

    const KIND: ElementKind = ElementKind::Reference;

    fn search_eq(&self, other: &Self, _: Exact) -> bool {
        self.deep_equals(other)
    }
}

impl<R> From<Array<R>> for Element<R> {
    fn from(array: Array<R>) -> Self {
        Self::Array(array)
    }
}

impl<R> From<Option<R>> for Element<R> {
    fn from(value: Option<R>) -> Self {
        value.map_or(Self::Null, Self::Value)
    }
}
