//! Constants used throughout the crate
//!
//! Format strings, lookup names and file locations live here so the library
//! and the command-line front end agree on them.

/// Timestamp layout used in log lines
pub const LOG_TIMESTAMP_FORMAT: &str = "%H:%M:%S%.3f";

// Format names reported in parse errors
pub const FORMAT_RFC2822: &str = "RFC 2822";
pub const FORMAT_ISO8601: &str = "ISO 8601";

/// Loose date-time patterns tried after strict RFC 2822 parsing fails.
///
/// Patterns without clock fields match a date at midnight UTC.
pub const DEFAULT_LOOSE_FORMATS: &[&str] = &[
    "%B %d, %Y %H:%M:%S",
    "%B %d, %Y %H:%M",
    "%B %d, %Y",
    "%b %d, %Y %H:%M:%S",
    "%b %d, %Y",
    "%d %B %Y %H:%M:%S",
    "%d %B %Y",
    "%a %b %d %Y %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d",
    "%a, %d %b %Y %H:%M:%S",
    "%a, %d %b %Y %H:%M",
    "%a, %d %b %Y",
];

/// Offset-less ISO 8601 date-time patterns, interpreted as UTC.
pub const ISO8601_NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"];

/// ISO 8601 date-time patterns with a compact or extended numeric offset.
pub const ISO8601_OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
];

/// ISO 8601 calendar date.
pub const ISO8601_DATE_FORMAT: &str = "%Y-%m-%d";

/// English month names, January first
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// Files
pub const APP_NAME: &str = "datekit";
pub const LOCAL_CONFIG_FILE: &str = "datekit.toml";
pub const XDG_CONFIG_FILE: &str = "config.toml";
pub const LOG_FILE_NAME: &str = "datekit.log";

// Messages
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
