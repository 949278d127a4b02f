use datekit::utils::{day_of_year_to_date, is_leap, month_day};
use datekit::DateError;

#[test]
fn test_day_of_year_to_date_examples() {
    assert_eq!(day_of_year_to_date(41, false).unwrap(), "February, 10");
    assert_eq!(day_of_year_to_date(60, false).unwrap(), "March, 1");
    assert_eq!(day_of_year_to_date(60, true).unwrap(), "February, 29");
    assert_eq!(day_of_year_to_date(365, false).unwrap(), "December, 31");
    assert_eq!(day_of_year_to_date(366, true).unwrap(), "December, 31");
}

#[test]
fn test_day_of_year_to_date_first_days() {
    assert_eq!(day_of_year_to_date(1, false).unwrap(), "January, 1");
    assert_eq!(day_of_year_to_date(1, true).unwrap(), "January, 1");
    assert_eq!(day_of_year_to_date(365, true).unwrap(), "December, 30");
}

#[test]
fn test_day_of_year_to_date_out_of_range() {
    assert_eq!(
        day_of_year_to_date(0, false).unwrap_err(),
        DateError::DayOutOfRange { day: 0, max: 365 }
    );
    assert_eq!(
        day_of_year_to_date(366, false).unwrap_err(),
        DateError::DayOutOfRange { day: 366, max: 365 }
    );
    assert_eq!(
        day_of_year_to_date(367, true).unwrap_err(),
        DateError::DayOutOfRange { day: 367, max: 366 }
    );
}

#[test]
fn test_month_day_matches_chrono_ordinals() {
    for year in [2015, 2016] {
        let leap = is_leap(year);
        let last = if leap { 366 } else { 365 };
        for ordinal in 1..=last {
            let date = chrono::NaiveDate::from_yo_opt(year, u32::from(ordinal)).unwrap();
            let (month, day) = month_day(ordinal, leap).unwrap();
            assert_eq!(
                (u32::from(month), u32::from(day)),
                (chrono::Datelike::month(&date), chrono::Datelike::day(&date)),
                "ordinal {ordinal} in {year}"
            );
        }
    }
}
