//! Best-effort in-place shuffle.
//!
//! Performs exactly `len` random pairwise swaps. This is NOT Fisher–Yates and
//! does not produce a uniform distribution over permutations; callers that
//! need unbiased permutations must not rely on it.


use rand::Rng;

///
/// RandomIndex
///
/// Injected source of uniform indices in `[0, bound)`.
/// Implemented for every `rand::Rng`; tests may script their own.
///

pub trait RandomIndex {
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<G: Rng + ?Sized> RandomIndex for G {
    fn next_index(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

/// Shuffle `items` in place and return the same slice for chaining.
///
/// For each slot, two independent indices are drawn and the elements at
/// those positions are swapped when the indices differ. Slices of length
/// 0 or 1 are returned untouched without drawing.
pub fn shuffle<'a, T, G>(items: &'a mut [T], rng: &mut G) -> &'a mut [T]
where
    G: RandomIndex + ?Sized,
{
    let len = items.len();
    if len <= 1 {
        return items;
    }

    tracing::trace!(len, "shuffling array");

    for _ in 0..len {
        let pos_a = rng.next_index(len);
        let pos_b = rng.next_index(len);

        if pos_a != pos_b {
            items.swap(pos_a, pos_b);
        }
    }

    items
}
