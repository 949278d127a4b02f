//! Date and time utility functions
//!
//! Parsing from RFC 2822 and ISO 8601 text, the Gregorian leap-year rule and
//! elapsed-time formatting. Every parsed value is normalized to UTC.

use crate::constants::{
    DEFAULT_LOOSE_FORMATS, FORMAT_ISO8601, FORMAT_RFC2822, ISO8601_DATE_FORMAT, ISO8601_NAIVE_FORMATS,
    ISO8601_OFFSET_FORMATS,
};
use crate::error::DateError;
use chrono::format::{Fixed, Item, Numeric, StrftimeItems};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Utc};
use log::debug;

/// An absolute point in time, normalized to UTC with sub-millisecond resolution.
pub type Instant = DateTime<Utc>;

const MILLIS_PER_SECOND: u64 = 1_000;
const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: u64 = 24 * MILLIS_PER_HOUR;

/// Build an [`Instant`] from calendar and clock fields.
///
/// `month` and `day` are 1-based. Returns `None` when the fields do not name
/// a real UTC date and time (e.g. February 30 or hour 24).
pub fn from_parts(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32, millis: u32) -> Option<Instant> {
    NaiveDate::from_ymd_opt(year, month, day)?
        .and_hms_milli_opt(hour, minute, second, millis)
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Parse an RFC 2822 date, falling back to the built-in loose formats
///
/// # Arguments
/// * `text` - e.g. `"Tue, 26 Jan 2016 13:48:02 GMT"` or `"December 17, 1995 03:24:00"`
///
/// # Returns
/// * `Result<Instant, DateError>` - The instant in UTC, or [`DateError::Unparseable`]
pub fn parse_rfc2822(text: &str) -> Result<Instant, DateError> {
    parse_rfc2822_with(text, DEFAULT_LOOSE_FORMATS)
}

/// Parse an RFC 2822 date, falling back to caller-supplied loose formats
///
/// Strict RFC 2822 is tried first, then RFC 2822 with a `GMT+hh` style zone
/// rewritten to a numeric offset, then each of `loose_formats` in order.
/// Loose matches carry no offset and are taken as UTC.
pub fn parse_rfc2822_with<S: AsRef<str>>(text: &str, loose_formats: &[S]) -> Result<Instant, DateError> {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Some(normalized) = normalize_zone_suffix(text) {
        debug!("RFC 2822: retrying {:?} as {:?}", text, normalized);
        if let Ok(dt) = DateTime::parse_from_rfc2822(&normalized) {
            return Ok(dt.with_timezone(&Utc));
        }
    }

    for format in loose_formats {
        if let Some(instant) = parse_naive(text, format.as_ref()) {
            debug!("RFC 2822: {:?} matched loose format {:?}", text, format.as_ref());
            return Ok(instant);
        }
    }

    debug!("RFC 2822: no format matched {:?}", text);
    Err(DateError::unparseable(text, FORMAT_RFC2822))
}

/// Parse an ISO 8601 date-time and normalize it to UTC
///
/// Accepts RFC 3339 (`2016-01-19T16:07:37+00:00`, `2016-01-19T08:07:37Z`),
/// minute precision with a zone (`2016-01-19T16:07Z`), compact offsets
/// (`+0100`), offset-less date-times (taken as UTC) and bare calendar dates
/// (midnight UTC).
pub fn parse_iso8601(text: &str) -> Result<Instant, DateError> {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.with_timezone(&Utc));
    }

    // chrono's offset specifiers do not take `Z`
    let zoned = match text.strip_suffix(['Z', 'z']) {
        Some(local) => format!("{}+00:00", local),
        None => text.to_string(),
    };
    if let Some(dt) = ISO8601_OFFSET_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(&zoned, format).ok())
    {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Some(instant) = ISO8601_NAIVE_FORMATS.iter().find_map(|format| parse_naive(text, format)) {
        debug!("ISO 8601: {:?} has no offset, assuming UTC", text);
        return Ok(instant);
    }

    if let Some(instant) = parse_naive(text, ISO8601_DATE_FORMAT) {
        return Ok(instant);
    }

    debug!("ISO 8601: no format matched {:?}", text);
    Err(DateError::unparseable(text, FORMAT_ISO8601))
}

/// Is the given year a leap year in the proleptic Gregorian calendar?
pub fn is_leap(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Is the year of `date` a leap year? Only the calendar year is read.
pub fn is_leap_year<D: Datelike>(date: &D) -> bool {
    is_leap(date.year())
}

/// Format the time between two instants as `HH:mm:ss.sss`
///
/// The order of `start` and `end` does not matter. Hours wrap at 24, so a
/// span of a day or more loses its day component.
pub fn format_time_span(start: &Instant, end: &Instant) -> String {
    let millis = end.signed_duration_since(*start).num_milliseconds().unsigned_abs() % MILLIS_PER_DAY;

    let hours = millis / MILLIS_PER_HOUR;
    let minutes = millis % MILLIS_PER_HOUR / MILLIS_PER_MINUTE;
    let seconds = millis % MILLIS_PER_MINUTE / MILLIS_PER_SECOND;
    let fraction = millis % MILLIS_PER_SECOND;

    format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, seconds, fraction)
}

/// Parse `text` with `format` as UTC.
///
/// A format without clock fields matches a date at midnight. A format with
/// clock fields must match them all; the time is never dropped.
fn parse_naive(text: &str, format: &str) -> Option<Instant> {
    if has_time_fields(format) {
        return NaiveDateTime::parse_from_str(text, format)
            .ok()
            .map(|naive| Utc.from_utc_datetime(&naive));
    }
    NaiveDate::parse_from_str(text, format)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Does `format` contain an hour, minute, second or sub-second specifier?
fn has_time_fields(format: &str) -> bool {
    StrftimeItems::new(format).any(|item| {
        matches!(
            item,
            Item::Numeric(
                Numeric::Hour | Numeric::Hour12 | Numeric::Minute | Numeric::Second | Numeric::Nanosecond,
                _
            ) | Item::Fixed(
                Fixed::LowerAmPm
                    | Fixed::UpperAmPm
                    | Fixed::Nanosecond
                    | Fixed::Nanosecond3
                    | Fixed::Nanosecond6
                    | Fixed::Nanosecond9
            )
        )
    })
}

/// Rewrite a trailing `GMT+01`, `UTC-0530` or `UT+05:30` zone as `+0100` etc.
///
/// Returns `None` when the last token is not such a zone.
fn normalize_zone_suffix(text: &str) -> Option<String> {
    let (head, zone) = text.rsplit_once(' ')?;
    let offset = ["GMT", "UTC", "UT"].iter().find_map(|prefix| zone.strip_prefix(prefix))?;

    let sign = match offset.as_bytes().first()? {
        b'+' => '+',
        b'-' => '-',
        _ => return None,
    };
    let digits: String = offset[1..].chars().filter(|c| *c != ':').collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let (hours, minutes) = match digits.len() {
        1 | 2 => (digits.as_str(), "00"),
        3 | 4 => digits.split_at(digits.len() - 2),
        _ => return None,
    };

    Some(format!("{} {}{:0>2}{}", head, sign, hours, minutes))
}
