//! Error types for the sunrise almanac library.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur when shaping calculation results.
///
/// The calculation itself is infallible; only the recomposition of a
/// computed clock time into an absolute timestamp can fail, when the
/// target time zone has no representation for that local time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A computed local time could not be represented as a timestamp.
    InvalidDateTime {
        /// Description of the date/time constraint violation.
        message: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDateTime { message } => {
                write!(f, "invalid date/time: {message}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid date/time error.
    #[must_use]
    pub const fn invalid_datetime(message: &'static str) -> Self {
        Self::InvalidDateTime { message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(feature = "std")]
    fn test_error_display() {
        let err = Error::invalid_datetime("local time does not exist");
        assert_eq!(
            err.to_string(),
            "invalid date/time: local time does not exist"
        );
    }
}
