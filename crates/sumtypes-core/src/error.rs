//! Error types for union construction

use core::fmt;

/// Result type for fallible union construction
pub type SumResult<T> = Result<T, SumError>;

/// Errors that can occur while building a union value
///
/// Only construction can fail. Dispatch is an exhaustive match over a closed
/// enum, so there is no runtime "bad discriminant" error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SumError {
    /// A payload-bearing variant was given no payload
    InvalidArgument {
        /// Union type being built, e.g. `Either3`
        union: &'static str,
        /// Variant that required the payload, e.g. `second`
        variant: &'static str,
    },
}

impl SumError {
    #[inline]
    pub(crate) const fn missing(union: &'static str, variant: &'static str) -> Self {
        SumError::InvalidArgument { union, variant }
    }

    /// Variant that rejected the payload
    pub const fn variant(&self) -> &'static str {
        match self {
            SumError::InvalidArgument { variant, .. } => *variant,
        }
    }
}

impl fmt::Display for SumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SumError::InvalidArgument { union, variant } => {
                write!(f, "invalid argument: {}::{} requires a payload", union, variant)
            }
        }
    }
}

impl std::error::Error for SumError {}

/// Turn a possibly-missing payload into a payload or an `InvalidArgument`.
///
/// Shared by every `try_*` constructor; logs the rejection at debug level.
#[inline]
pub(crate) fn require<T>(
    value: Option<T>,
    union: &'static str,
    variant: &'static str,
) -> SumResult<T> {
    match value {
        Some(v) => Ok(v),
        None => {
            crate::kdebug!("rejected missing payload for {}::{}", union, variant);
            Err(SumError::missing(union, variant))
        }
    }
}
