//! Day-of-year to calendar date conversion.

use crate::constants::MONTH_NAMES;
use crate::error::DateError;
use log::debug;

/// Number of days in each month of a common year (index 0 = January).
pub(crate) const DAYS_PER_MONTH: [u16; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Number of days in each month of a leap year (index 0 = January).
pub(crate) const DAYS_PER_MONTH_LEAP: [u16; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Day-of-year on which each month of a common year ends.
pub(crate) const MONTH_END_DOY: [u16; 12] = [31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334, 365];

/// Day-of-year on which each month of a leap year ends.
pub(crate) const MONTH_END_DOY_LEAP: [u16; 12] = [31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335, 366];

fn tables(is_leap: bool) -> (&'static [u16; 12], &'static [u16; 12]) {
    if is_leap {
        (&DAYS_PER_MONTH_LEAP, &MONTH_END_DOY_LEAP)
    } else {
        (&DAYS_PER_MONTH, &MONTH_END_DOY)
    }
}

/// Returns the 1-based `(month, day)` for a day-of-year ordinal.
///
/// # Errors
///
/// Returns [`DateError::DayOutOfRange`] if `day` is 0 or past the last day
/// of the year (365, or 366 when `is_leap`).
pub fn month_day(day: u16, is_leap: bool) -> Result<(u8, u8), DateError> {
    let (days_per_month, month_end) = tables(is_leap);

    month_end
        .iter()
        .position(|&end| day <= end)
        .filter(|_| day >= 1)
        .map(|index| {
            let day_of_month = days_per_month[index] - (month_end[index] - day);
            (index as u8 + 1, day_of_month as u8)
        })
        .ok_or_else(|| {
            let max = month_end[11];
            debug!("day of year {} outside 1..={}", day, max);
            DateError::DayOutOfRange { day, max }
        })
}

/// Formats a day-of-year ordinal as `"<Month>, <day>"`, e.g. `"February, 29"`.
///
/// # Errors
///
/// Returns [`DateError::DayOutOfRange`] for ordinals outside the year.
pub fn day_of_year_to_date(day: u16, is_leap: bool) -> Result<String, DateError> {
    let (month, day_of_month) = month_day(day, is_leap)?;
    Ok(format!("{}, {}", MONTH_NAMES[usize::from(month) - 1], day_of_month))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_integrity_totals() {
        let common: u16 = DAYS_PER_MONTH.iter().sum();
        let leap: u16 = DAYS_PER_MONTH_LEAP.iter().sum();
        assert_eq!(common, 365);
        assert_eq!(leap, 366);
    }

    #[test]
    fn table_integrity_month_end() {
        for is_leap in [false, true] {
            let (days_per_month, month_end) = tables(is_leap);
            let mut running = 0;
            for m in 0..12 {
                running += days_per_month[m];
                assert_eq!(month_end[m], running, "month end mismatch at month {} (leap={})", m + 1, is_leap);
            }
        }
    }

    #[test]
    fn month_day_boundaries() {
        assert_eq!(month_day(1, false).unwrap(), (1, 1));
        assert_eq!(month_day(31, false).unwrap(), (1, 31));
        assert_eq!(month_day(32, false).unwrap(), (2, 1));
        assert_eq!(month_day(59, false).unwrap(), (2, 28));
        assert_eq!(month_day(60, true).unwrap(), (2, 29));
        assert_eq!(month_day(61, true).unwrap(), (3, 1));
    }

    #[test]
    fn month_day_zero_rejected() {
        assert_eq!(month_day(0, false).unwrap_err(), DateError::DayOutOfRange { day: 0, max: 365 });
        assert_eq!(month_day(0, true).unwrap_err(), DateError::DayOutOfRange { day: 0, max: 366 });
    }

    #[test]
    fn every_ordinal_maps_to_a_valid_day() {
        for is_leap in [false, true] {
            let (days_per_month, month_end) = tables(is_leap);
            for d in 1..=month_end[11] {
                let (m, day) = month_day(d, is_leap).unwrap();
                assert!((1..=12).contains(&m));
                assert!(day >= 1 && u16::from(day) <= days_per_month[usize::from(m) - 1], "bad day for ordinal {d}");
            }
        }
    }
}
