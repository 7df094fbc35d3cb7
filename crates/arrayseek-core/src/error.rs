use arrayseek_primitives::ElementKind;
use std::fmt;
use thiserror::Error as ThisError;

///
/// SearchError
///
/// Malformed-query failures. Absence of a match is never an error;
/// these only signal caller mistakes and are never retried.
///

#[derive(Clone, Debug, PartialEq, ThisError)]
pub enum SearchError {
    #[error("search pattern must not be null")]
    NullPattern,

    #[error("tolerance must be non-negative, got {value}")]
    NegativeTolerance { value: f64 },

    #[error("tolerance must not be NaN")]
    NanTolerance,

    #[error("{kind} arrays do not accept a tolerance window")]
    ToleranceUnsupported { kind: ElementKind },

    #[error("pattern kind {pattern} does not match haystack kind {haystack}")]
    KindMismatch {
        haystack: ElementKind,
        pattern: ElementKind,
    },

    #[error("backward search does not accept an end bound")]
    EndBoundUnsupported,
}

impl SearchError {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::NullPattern
            | Self::NegativeTolerance { .. }
            | Self::NanTolerance
            | Self::KindMismatch { .. } => ErrorClass::InvalidArgument,
            Self::ToleranceUnsupported { .. } | Self::EndBoundUnsupported => {
                ErrorClass::Unsupported
            }
        }
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}: {self}", self.class())
    }

    /// Reject a tolerance window that is NaN or below zero.
    pub(crate) fn check_tolerance(value: f64) -> Result<(), Self> {
        if value.is_nan() {
            return Err(Self::NanTolerance);
        }
        if value < 0.0 {
            return Err(Self::NegativeTolerance { value });
        }

        Ok(())
    }
}

///
/// ErrorClass
/// Coarse error taxonomy for caller-side classification.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    InvalidArgument,
    Unsupported,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InvalidArgument => "invalid_argument",
            Self::Unsupported => "unsupported",
        };
        write!(f, "{label}")
    }
}

///
/// TESTS
///
