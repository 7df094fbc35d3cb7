//! Linear-scan state machines behind every search entry point.
//!
//! Sub-sequence search is the naive first-element scan + sequential
//! verify; a mismatch discards all partial progress and resumes one slot
//! further. Worst case is `O(|haystack| × |needle|)`. Tolerance equality is
//! not transitive, so failure-function shortcuts are not applicable.

/// Forward sub-sequence scan from `from` (negative clamps to 0).
pub(crate) fn forward<T, F>(haystack: &[T], needle: &[T], from: isize, eq: F) -> Option<usize>
where
    F: Fn(&T, &T) -> bool,
{
    let len = haystack.len();
    let from = usize::try_from(from).unwrap_or(0);

    if from >= len {
        return needle.is_empty().then_some(len);
    }

    let Some((first, rest)) = needle.split_first() else {
        return Some(from);
    };

    let max_start = len.checked_sub(needle.len())?;
    if max_start < from {
        return None;
    }

    (from..=max_start).find(|&start| {
        eq(&haystack[start], first)
            && rest
                .iter()
                .zip(&haystack[start + 1..])
                .all(|(expected, actual)| eq(actual, expected))
    })
}

/// Backward sub-sequence scan; `from` names the latest allowed start index.
///
/// A negative `from` finds nothing, unlike the forward scan which clamps.
pub(crate) fn backward<T, F>(haystack: &[T], needle: &[T], from: isize, eq: F) -> Option<usize>
where
    F: Fn(&T, &T) -> bool,
{
    let from = usize::try_from(from).ok()?;
    let max_start = haystack.len().checked_sub(needle.len())?;
    let start = from.min(max_start);

    let Some((last, rest)) = needle.split_last() else {
        return Some(start);
    };
    let tail = rest.len();

    (0..=start).rev().find(|&start| {
        eq(&haystack[start + tail], last)
            && rest
                .iter()
                .zip(&haystack[start..start + tail])
                .rev()
                .all(|(expected, actual)| eq(actual, expected))
    })
}

/// Forward single-element scan; no verification phase.
pub(crate) fn forward_element<T, F>(haystack: &[T], element: &T, from: isize, eq: F) -> Option<usize>
where
    F: Fn(&T, &T) -> bool,
{
    let from = usize::try_from(from).unwrap_or(0);

    haystack
        .iter()
        .enumerate()
        .skip(from)
        .find_map(|(index, item)| eq(item, element).then_some(index))
}

/// Backward single-element scan; `from` beyond the end clamps to the last slot.
pub(crate) fn backward_element<T, F>(haystack: &[T], element: &T, from: isize, eq: F) -> Option<usize>
where
    F: Fn(&T, &T) -> bool,
{
    let from = usize::try_from(from).ok()?;
    let start = from.min(haystack.len().checked_sub(1)?);

    haystack[..=start]
        .iter()
        .rposition(|item| eq(item, element))
}

/// Forward scan restricted to `[from, end)`; `end` clamps into `[0, len]`.
///
/// A start past the clamped end finds nothing, empty needle included.
pub(crate) fn forward_in<T, F>(
    haystack: &[T],
    needle: &[T],
    from: isize,
    end: isize,
    eq: F,
) -> Option<usize>
where
    F: Fn(&T, &T) -> bool,
{
    let end = clamp_end(haystack.len(), end);
    if usize::try_from(from).unwrap_or(0) > end {
        return None;
    }

    forward(&haystack[..end], needle, from, eq)
}

fn clamp_end(len: usize, end: isize) -> usize {
    usize::try_from(end).map_or(0, |end| end.min(len))
}
