//! Core engine for arrayseek: deep equality and structural hashing over
//! (nested) typed arrays, tolerant single-element and sub-sequence search,
//! and the in-place pairwise-swap shuffle.
//!
//! The engine is stateless. Every operation reads only its arguments;
//! `shuffle` is the only one that writes, and it takes `&mut`.
#![warn(unreachable_pub)]

pub mod config;
pub mod equality;
pub mod error;
pub mod kind;
pub mod obs;
pub mod search;
pub mod shuffle;
pub mod value;

pub use arrayseek_primitives::{ALL_ELEMENT_KINDS, ElementFamily, ElementKind};

///
/// Prelude
///
/// Domain vocabulary and the extension traits needed for method syntax.
///

pub mod prelude {
    pub use crate::{
        config::SearchOptions,
        kind::{Exact, Tolerance},
        search::{ArraySearch as _, MatchExt as _},
        value::{Array, Element},
    };
}
