use crate::{error::SearchError, search::FROM_END};
use serde::{Deserialize, Serialize};

///
/// SearchOptions
///
/// Caller-facing knobs for the dynamic `Array` search API.
///
/// from_index  → start bound; forward defaults to 0, backward to the end
/// end_index   → exclusive end bound, forward search only
/// tolerance   → `±ε` window, floating kinds only; narrowed to `f32`
///               for Float32 arrays, rounding up
///

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchOptions {
    pub from_index: Option<isize>,
    pub end_index: Option<isize>,
    pub tolerance: Option<f64>,
}

impl SearchOptions {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            from_index: None,
            end_index: None,
            tolerance: None,
        }
    }

    #[must_use]
    pub const fn with_from_index(mut self, from_index: isize) -> Self {
        self.from_index = Some(from_index);
        self
    }

    #[must_use]
    pub const fn with_end_index(mut self, end_index: isize) -> Self {
        self.end_index = Some(end_index);
        self
    }

    #[must_use]
    pub const fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    /// Reject NaN or negative tolerance windows.
    pub fn validate(&self) -> Result<(), SearchError> {
        match self.tolerance {
            Some(tolerance) => SearchError::check_tolerance(tolerance),
            None => Ok(()),
        }
    }

    #[must_use]
    pub fn forward_from(&self) -> isize {
        self.from_index.unwrap_or(0)
    }

    #[must_use]
    pub fn backward_from(&self) -> isize {
        self.from_index.unwrap_or(FROM_END)
    }
}

///
/// TESTS
///
