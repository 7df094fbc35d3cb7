//! Single-element and sub-sequence search over flat arrays.
//!
//! Contract:
//! - a null haystack is absence (`Ok(None)`), never an error
//! - a null pattern is a caller mistake (`Err(SearchError::NullPattern)`)
//! - bounds are clamped, never rejected
//! - nothing here mutates its inputs
//!
//! Forward search clamps a negative `from` to 0; backward search treats a
//! negative `from` as "nothing left to scan".

mod dispatch;
mod ext;
mod scan;

#[cfg(test)]
mod tests;

use crate::{error::SearchError, kind::SearchKind};

// re-exports
pub use dispatch::ArraySearcher;
pub use ext::ArraySearch;

///
/// CONSTANTS
///

/// Numeric "not found" sentinel for callers that need an index-or-minus-one.
pub const NOT_FOUND: isize = -1;

/// `from` value meaning "start at the far end" for backward search.
pub const FROM_END: isize = isize::MAX;

///
/// MatchExt
///
/// Conversion of a match result into its numeric sentinel rendition.
///

pub trait MatchExt {
    fn to_sentinel(self) -> isize;
}

impl MatchExt for Option<usize> {
    #[allow(clippy::cast_possible_wrap)]
    fn to_sentinel(self) -> isize {
        // slice indices never exceed isize::MAX
        self.map_or(NOT_FOUND, |index| index as isize)
    }
}

///
/// Sub-sequence search
///

/// First start index `>= from` at which `needle` occurs in `haystack`.
pub fn first_index_of<T: SearchKind>(
    haystack: Option<&[T]>,
    needle: Option<&[T]>,
    from: isize,
    tolerance: T::Tolerance,
) -> Result<Option<usize>, SearchError> {
    let needle = require_pattern(needle)?;

    Ok(haystack.and_then(|haystack| {
        scan::forward(haystack, needle, from, |a, b| a.search_eq(b, tolerance))
    }))
}

/// First start index in `[start, end)` at which `needle` occurs entirely
/// inside that range. `end` is clamped to `[0, len]`; a `start` beyond the
/// clamped `end` finds nothing, even for an empty needle.
pub fn first_index_of_in<T: SearchKind>(
    haystack: Option<&[T]>,
    needle: Option<&[T]>,
    start: isize,
    end: isize,
    tolerance: T::Tolerance,
) -> Result<Option<usize>, SearchError> {
    let needle = require_pattern(needle)?;

    Ok(haystack.and_then(|haystack| {
        scan::forward_in(haystack, needle, start, end, |a, b| a.search_eq(b, tolerance))
    }))
}

/// Last start index `<= from` at which `needle` occurs in `haystack`.
/// Pass [`FROM_END`] to scan the whole haystack.
pub fn last_index_of<T: SearchKind>(
    haystack: Option<&[T]>,
    needle: Option<&[T]>,
    from: isize,
    tolerance: T::Tolerance,
) -> Result<Option<usize>, SearchError> {
    let needle = require_pattern(needle)?;

    Ok(haystack.and_then(|haystack| {
        scan::backward(haystack, needle, from, |a, b| a.search_eq(b, tolerance))
    }))
}

/// `first_index_of(...)` found something.
pub fn contains<T: SearchKind>(
    haystack: Option<&[T]>,
    needle: Option<&[T]>,
    tolerance: T::Tolerance,
) -> Result<bool, SearchError> {
    first_index_of(haystack, needle, 0, tolerance).map(|found| found.is_some())
}

///
/// Single-element search
///

#[must_use]
pub fn first_index_of_element<T: SearchKind>(
    haystack: Option<&[T]>,
    element: &T,
    from: isize,
    tolerance: T::Tolerance,
) -> Option<usize> {
    haystack.and_then(|haystack| {
        scan::forward_element(haystack, element, from, |a, b| a.search_eq(b, tolerance))
    })
}

#[must_use]
pub fn last_index_of_element<T: SearchKind>(
    haystack: Option<&[T]>,
    element: &T,
    from: isize,
    tolerance: T::Tolerance,
) -> Option<usize> {
    haystack.and_then(|haystack| {
        scan::backward_element(haystack, element, from, |a, b| a.search_eq(b, tolerance))
    })
}

#[must_use]
pub fn contains_element<T: SearchKind>(
    haystack: Option<&[T]>,
    element: &T,
    tolerance: T::Tolerance,
) -> bool {
    first_index_of_element(haystack, element, 0, tolerance).is_some()
}

///
/// Caller-supplied equality
///

/// Forward sub-sequence search under an arbitrary equality predicate.
/// The predicate receives `(haystack_item, needle_item)`.
pub fn first_index_of_by<T, F>(haystack: &[T], needle: &[T], from: isize, eq: F) -> Option<usize>
where
    F: Fn(&T, &T) -> bool,
{
    scan::forward(haystack, needle, from, eq)
}

/// Backward sub-sequence search under an arbitrary equality predicate.
pub fn last_index_of_by<T, F>(haystack: &[T], needle: &[T], from: isize, eq: F) -> Option<usize>
where
    F: Fn(&T, &T) -> bool,
{
    scan::backward(haystack, needle, from, eq)
}

fn require_pattern<T>(needle: Option<&[T]>) -> Result<&[T], SearchError> {
    needle.ok_or_else(|| {
        tracing::debug!("rejected search with null pattern");
        SearchError::NullPattern
    })
}
