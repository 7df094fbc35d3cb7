//! ## Crate layout
//! - `core`: array model, deep equality, structural hashing, search, shuffle.
//! - `primitives`: the closed element-kind vocabulary and its metadata.
//!
//! The `prelude` module brings the array model, search options, and the
//! method-syntax extension traits into scope.

pub use arrayseek_core as core;
pub use arrayseek_primitives as primitives;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//
// Surface
//

pub use crate::core::{
    config::SearchOptions,
    equality::{ScalarEquality, ValueEquality, deep_equals, structural_hash},
    error::{ErrorClass, SearchError},
    search::{ArraySearcher, FROM_END, NOT_FOUND},
    shuffle::{RandomIndex, shuffle},
    value::{Array, Element},
};
pub use crate::primitives::{ALL_ELEMENT_KINDS, ElementFamily, ElementKind};

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::core::{
        config::SearchOptions,
        kind::{Exact, Tolerance},
        obs::{SearchTraceEvent, SearchTraceSink},
        search::{ArraySearch as _, ArraySearcher, MatchExt as _},
        shuffle::RandomIndex as _,
        value::{Array, Element},
    };
    pub use crate::primitives::ElementKind;
}
