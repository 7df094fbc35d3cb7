use crate::error::SearchError;
use derive_more::Display;

///
/// Exact
///
/// Tolerance marker for discrete kinds; search equality is plain `==`.
///

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Exact;

///
/// Tolerance
///
/// Validated symmetric search window for floating kinds.
/// Never NaN and never negative; an infinite window is allowed.
///

#[derive(Clone, Copy, Debug, Default, Display, PartialEq, PartialOrd)]
pub struct Tolerance<F>(F);

macro_rules! impl_tolerance {
    ( $( $ty:ty ),* ) => {
        $(
            impl Tolerance<$ty> {
                /// Zero-width window; matches bit-distinct zeros but never NaN.
                pub const ZERO: Self = Self(0.0);

                /// Fallible constructor that rejects NaN and negative windows.
                #[allow(clippy::useless_conversion)]
                pub fn new(epsilon: $ty) -> Result<Self, SearchError> {
                    SearchError::check_tolerance(f64::from(epsilon))?;

                    Ok(Self(epsilon))
                }

                #[must_use]
                pub const fn get(self) -> $ty {
                    self.0
                }
            }

            impl TryFrom<$ty> for Tolerance<$ty> {
                type Error = SearchError;

                fn try_from(epsilon: $ty) -> Result<Self, Self::Error> {
                    Self::new(epsilon)
                }
            }
        )*
    };
}

impl_tolerance!(f32, f64);

impl Tolerance<f32> {
    /// Narrow an `f64` window to `f32`, rounding up so the window never
    /// comes out narrower than requested.
    #[allow(clippy::cast_possible_truncation)]
    pub fn widened_from(epsilon: f64) -> Result<Self, SearchError> {
        SearchError::check_tolerance(epsilon)?;

        let narrowed = epsilon as f32;
        if f64::from(narrowed) < epsilon {
            return Ok(Self(narrowed.next_up()));
        }

        Ok(Self(narrowed))
    }
}
