//! Error types for the date utilities.

/// Error type for all fallible operations in the date utilities.
///
/// Parsing never panics on bad input; it returns [`DateError::Unparseable`]
/// instead, and callers decide what to do with it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DateError {
    /// The input text could not be interpreted as a date in the given format.
    #[error("could not parse {input:?} as {format}")]
    Unparseable {
        /// The text that was rejected.
        input: String,
        /// Name of the format that was attempted.
        format: &'static str,
    },

    /// A day-of-year ordinal is outside the year it was looked up in.
    #[error("day of year out of range: {day} (must be 1..={max})")]
    DayOutOfRange {
        /// The ordinal that was provided.
        day: u16,
        /// The last valid ordinal for the year (365 or 366).
        max: u16,
    },
}

impl DateError {
    pub(crate) fn unparseable(input: &str, format: &'static str) -> Self {
        Self::Unparseable {
            input: input.to_string(),
            format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_unparseable() {
        let err = DateError::unparseable("garbage", "ISO 8601");
        assert_eq!(err.to_string(), "could not parse \"garbage\" as ISO 8601");
    }

    #[test]
    fn error_day_out_of_range() {
        let err = DateError::DayOutOfRange { day: 366, max: 365 };
        assert_eq!(err.to_string(), "day of year out of range: 366 (must be 1..=365)");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<DateError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<DateError>();
    }

    #[test]
    fn error_is_clone_and_eq() {
        let err = DateError::DayOutOfRange { day: 0, max: 366 };
        assert_eq!(err.clone(), err);
        assert_ne!(err, DateError::DayOutOfRange { day: 0, max: 365 });
    }
}
