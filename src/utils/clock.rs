//! Angle between the hands of an analog clock.

use crate::utils::datetime::Instant;
use chrono::Timelike;

/// Angle in degrees between the hour and minute hands at `instant` (UTC).
///
/// Only the hour and minute are read. The hands are measured in half-degree
/// units (`|hour * 60 - minute * 11|`), so the hour hand's drift within the
/// hour is accounted for exactly. A result over 180 degrees is reduced by
/// 180 once; it is not folded to `360 - x`, so times such as 11:00 report
/// 150 rather than 30.
pub fn clock_hands_angle_degrees(instant: &Instant) -> f64 {
    let hour = instant.hour() % 12;
    let minute = instant.minute();

    let mut half_degrees = (hour * 60).abs_diff(minute * 11) % 720;
    if half_degrees > 360 {
        half_degrees -= 360;
    }

    f64::from(half_degrees) / 2.0
}

/// Angle in radians between the hour and minute hands at `instant` (UTC).
///
/// Same computation as [`clock_hands_angle_degrees`]; the conversion to
/// radians happens once, on the final value.
pub fn clock_hands_angle(instant: &Instant) -> f64 {
    clock_hands_angle_degrees(instant).to_radians()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::datetime::from_parts;

    fn at(hour: u32, minute: u32) -> Instant {
        from_parts(2016, 4, 5, hour, minute, 0, 0).unwrap()
    }

    #[test]
    fn degrees_on_the_hour() {
        assert_eq!(clock_hands_angle_degrees(&at(0, 0)), 0.0);
        assert_eq!(clock_hands_angle_degrees(&at(3, 0)), 90.0);
        assert_eq!(clock_hands_angle_degrees(&at(6, 0)), 180.0);
        assert_eq!(clock_hands_angle_degrees(&at(12, 0)), 0.0);
    }

    #[test]
    fn degrees_with_minutes() {
        // 03:30 -> |180 - 330| = 150 half-degrees
        assert_eq!(clock_hands_angle_degrees(&at(3, 30)), 75.0);
        // 09:45 -> |540 - 495| = 45 half-degrees
        assert_eq!(clock_hands_angle_degrees(&at(9, 45)), 22.5);
    }

    #[test]
    fn single_correction_is_preserved() {
        // 11:00 -> 660 half-degrees, reduced once to 300
        assert_eq!(clock_hands_angle_degrees(&at(11, 0)), 150.0);
        assert_eq!(clock_hands_angle_degrees(&at(23, 0)), 150.0);
    }

    #[test]
    fn seconds_are_ignored() {
        let with_seconds = from_parts(2016, 4, 5, 3, 0, 59, 999).unwrap();
        assert_eq!(clock_hands_angle_degrees(&with_seconds), 90.0);
    }
}
