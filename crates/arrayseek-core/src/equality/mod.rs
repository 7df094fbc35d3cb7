//! Recursive deep equality and the matching structural hash.
//!
//! Equality here is bit-exact for floats so that it stays an equivalence
//! relation; the search layer's tolerance windows never apply.
//!
//! Hash contract: `deep_equals(a, b)` implies
//! `structural_hash(a) == structural_hash(b)`.

mod scalar;


use crate::{
    kind::EqualityKind,
    value::{Array, Element},
};
use std::hash::Hash;

// re-exports
pub use scalar::{ScalarEquality, ValueEquality, value_hash};

///
/// CONSTANTS
///

/// Initial accumulator of every structural hash.
pub const HASH_SEED: i32 = 17;

/// Per-element multiplier of the structural hash fold.
pub const HASH_MULTIPLIER: i32 = 37;

/// Contribution of a null value or null element.
pub const NULL_HASH: i32 = 0;

///
/// Flat slices
///

/// Null-aware, bit-exact equality of two flat slices of one kind.
#[must_use]
pub fn slices_equal<T: EqualityKind>(left: Option<&[T]>, right: Option<&[T]>) -> bool {
    match (left, right) {
        (None, None) => true,
        (Some(left), Some(right)) => exact_slices_equal(left, right),
        _ => false,
    }
}

/// Structural hash of a flat slice; a null slice hashes to [`NULL_HASH`].
#[must_use]
pub fn slice_hash<T: EqualityKind>(items: Option<&[T]>) -> i32 {
    items.map_or(NULL_HASH, flat_hash)
}

///
/// Values
///

/// Deep equality using `PartialEq` for opaque references.
#[must_use]
pub fn deep_equals<R: PartialEq>(left: &Element<R>, right: &Element<R>) -> bool {
    elements_equal_with(left, right, &|left: &R, right: &R| left == right)
}

/// Deep equality with a caller-supplied scalar rule for opaque references.
pub fn deep_equals_by<R, S>(left: &Element<R>, right: &Element<R>, scalar: &S) -> bool
where
    S: ScalarEquality<R> + ?Sized,
{
    elements_equal_with(left, right, &|left: &R, right: &R| {
        scalar.scalar_eq(left, right)
    })
}

/// Structural hash using `Hash` for opaque references.
#[must_use]
pub fn structural_hash<R: Hash>(value: &Element<R>) -> i32 {
    element_hash_with(value, &value_hash::<R>)
}

/// Structural hash with a caller-supplied scalar rule for opaque references.
pub fn structural_hash_by<R, S>(value: &Element<R>, scalar: &S) -> i32
where
    S: ScalarEquality<R> + ?Sized,
{
    element_hash_with(value, &|value: &R| scalar.scalar_hash(value))
}

///
/// Arrays
///

pub(crate) fn arrays_equal<R: PartialEq>(left: &Array<R>, right: &Array<R>) -> bool {
    arrays_equal_with(left, right, &|left: &R, right: &R| left == right)
}

pub(crate) fn arrays_equal_by<R, S>(left: &Array<R>, right: &Array<R>, scalar: &S) -> bool
where
    S: ScalarEquality<R> + ?Sized,
{
    arrays_equal_with(left, right, &|left: &R, right: &R| {
        scalar.scalar_eq(left, right)
    })
}

pub(crate) fn array_hash<R: Hash>(array: &Array<R>) -> i32 {
    array_hash_with(array, &value_hash::<R>)
}

pub(crate) fn array_hash_by<R, S>(array: &Array<R>, scalar: &S) -> i32
where
    S: ScalarEquality<R> + ?Sized,
{
    array_hash_with(array, &|value: &R| scalar.scalar_hash(value))
}

///
/// Recursion
///

fn elements_equal_with<R, F>(left: &Element<R>, right: &Element<R>, scalar_eq: &F) -> bool
where
    F: Fn(&R, &R) -> bool,
{
    match (left, right) {
        (Element::Null, Element::Null) => true,
        (Element::Value(left), Element::Value(right)) => scalar_eq(left, right),
        (Element::Array(left), Element::Array(right)) => {
            arrays_equal_with(left, right, scalar_eq)
        }
        _ => false,
    }
}

// Same kind, same length, and pairwise equal under that kind's exact rule.
fn arrays_equal_with<R, F>(left: &Array<R>, right: &Array<R>, scalar_eq: &F) -> bool
where
    F: Fn(&R, &R) -> bool,
{
    match (left, right) {
        (Array::Int64(left), Array::Int64(right)) => exact_slices_equal(left, right),
        (Array::Int32(left), Array::Int32(right)) => exact_slices_equal(left, right),
        (Array::Int16(left), Array::Int16(right)) => exact_slices_equal(left, right),
        (Array::Int8(left), Array::Int8(right)) => exact_slices_equal(left, right),
        (Array::Float64(left), Array::Float64(right)) => exact_slices_equal(left, right),
        (Array::Float32(left), Array::Float32(right)) => exact_slices_equal(left, right),
        (Array::Bool(left), Array::Bool(right)) => exact_slices_equal(left, right),
        (Array::Char(left), Array::Char(right)) => exact_slices_equal(left, right),
        (Array::Reference(left), Array::Reference(right)) => {
            left.len() == right.len()
                && left
                    .iter()
                    .zip(right)
                    .all(|(left, right)| elements_equal_with(left, right, scalar_eq))
        }
        _ => false,
    }
}

fn element_hash_with<R, F>(value: &Element<R>, scalar_hash: &F) -> i32
where
    F: Fn(&R) -> i32,
{
    match value {
        Element::Null => NULL_HASH,
        Element::Value(value) => scalar_hash(value),
        Element::Array(array) => array_hash_with(array, scalar_hash),
    }
}

fn array_hash_with<R, F>(array: &Array<R>, scalar_hash: &F) -> i32
where
    F: Fn(&R) -> i32,
{
    match array {
        Array::Int64(items) => flat_hash(items),
        Array::Int32(items) => flat_hash(items),
        Array::Int16(items) => flat_hash(items),
        Array::Int8(items) => flat_hash(items),
        Array::Float64(items) => flat_hash(items),
        Array::Float32(items) => flat_hash(items),
        Array::Bool(items) => flat_hash(items),
        Array::Char(items) => flat_hash(items),
        Array::Reference(items) => {
            fold_hash(items.iter().map(|item| element_hash_with(item, scalar_hash)))
        }
    }
}

fn exact_slices_equal<T: EqualityKind>(left: &[T], right: &[T]) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .zip(right)
            .all(|(left, right)| left.exact_eq(right))
}

fn flat_hash<T: EqualityKind>(items: &[T]) -> i32 {
    fold_hash(items.iter().map(EqualityKind::hash_contribution))
}

// h = h * K + contribution, wrapping at 32 bits
fn fold_hash(contributions: impl Iterator<Item = i32>) -> i32 {
    contributions.fold(HASH_SEED, |hash, contribution| {
        hash.wrapping_mul(HASH_MULTIPLIER)
            .wrapping_add(contribution)
    })
}
