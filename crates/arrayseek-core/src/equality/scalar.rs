use crate::kind::fold_u64;
use std::hash::{Hash, Hasher};
use xxhash_rust::xxh3::Xxh3;

///
/// ScalarEquality
///
/// Equality and hash rule for opaque (non-array) reference values.
///
/// Implementations must keep `scalar_eq(a, b)` ⇒ `scalar_hash(a) == scalar_hash(b)`.
///

pub trait ScalarEquality<R: ?Sized> {
    fn scalar_eq(&self, left: &R, right: &R) -> bool;

    fn scalar_hash(&self, value: &R) -> i32;
}

///
/// ValueEquality
///
/// Default scalar rule: `PartialEq` for equality, `Hash` fed through xxh3
/// for the hash.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct ValueEquality;

impl<R> ScalarEquality<R> for ValueEquality
where
    R: PartialEq + Hash + ?Sized,
{
    fn scalar_eq(&self, left: &R, right: &R) -> bool {
        left == right
    }

    fn scalar_hash(&self, value: &R) -> i32 {
        value_hash(value)
    }
}

/// Hash an opaque value through xxh3, folded to 32 bits.
#[must_use]
pub fn value_hash<R: Hash + ?Sized>(value: &R) -> i32 {
    let mut hasher = ScalarHasher::default();
    value.hash(&mut hasher);

    fold_u64(hasher.finish())
}

///
/// ScalarHasher
///
/// `std::hash::Hasher` adapter over a streaming xxh3 state.
///

struct ScalarHasher(Xxh3);

impl Default for ScalarHasher {
    fn default() -> Self {
        Self(Xxh3::new())
    }
}

impl Hasher for ScalarHasher {
    fn finish(&self) -> u64 {
        self.0.digest()
    }

    fn write(&mut self, bytes: &[u8]) {
        self.0.update(bytes);
    }
}
