//! Date utility modules.
//!
//! Pure functions over dates and times. Nothing here touches the file system,
//! the clock or any shared mutable state, so every function can be called
//! concurrently without coordination.
//!
//! # Available Utilities
//!
//! - [`datetime`] - RFC 2822 / ISO 8601 parsing, leap years and time spans
//! - [`clock`] - Angle between the hands of an analog clock
//! - [`ordinal`] - Day-of-year to `"Month, day"` conversion

pub mod clock;
pub mod datetime;
pub mod ordinal;

pub use clock::{clock_hands_angle, clock_hands_angle_degrees};
pub use datetime::{
    format_time_span, from_parts, is_leap, is_leap_year, parse_iso8601, parse_rfc2822, parse_rfc2822_with, Instant,
};
pub use ordinal::{day_of_year_to_date, month_day};
