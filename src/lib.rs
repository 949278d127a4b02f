//! datekit - small date and time utilities
//!
//! Pure functions for parsing RFC 2822 and ISO 8601 dates, checking leap
//! years, formatting the span between two instants, measuring the angle
//! between analog clock hands and turning a day-of-year ordinal into a
//! month and day.
//!
//! # Modules
//!
//! * [`utils`] - The date utility functions
//! * [`error`] - Error type returned by fallible operations
//! * [`config`] - Configuration for the `datekit` command-line tool
//! * [`logger`] - File logging for the command-line tool
//!
//! # Example
//!
//! ```
//! use datekit::utils::{day_of_year_to_date, format_time_span, parse_iso8601};
//!
//! let start = parse_iso8601("2000-01-01T10:00:00Z").unwrap();
//! let end = parse_iso8601("2000-01-01T15:20:10.453Z").unwrap();
//! assert_eq!(format_time_span(&start, &end), "05:20:10.453");
//!
//! assert_eq!(day_of_year_to_date(60, true).unwrap(), "February, 29");
//! ```

/// Configuration module for the command-line tool
pub mod config;

/// Format strings, month names and file locations
pub mod constants;

/// Error types
pub mod error;

/// Logging setup for the command-line tool
pub mod logger;

/// Date utility functions
pub mod utils;

pub use error::DateError;
pub use utils::Instant;
