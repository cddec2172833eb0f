//! Countdown formatting shared by the surge overlay and the campaign list.

use chrono::{DateTime, Utc};

/// Format a second count as `M:SS`.
///
/// Minutes are not capped, so 600 formats as `10:00`.
pub fn format_countdown(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Time left until `end` as `HH:MM:SS`, or `Ended` once `end` has passed.
pub fn format_remaining(end: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = end.signed_duration_since(now);
    if diff.num_milliseconds() <= 0 {
        return "Ended".to_string();
    }

    let total_secs = diff.num_seconds();
    let h = total_secs / 3600;
    let m = (total_secs % 3600) / 60;
    let s = total_secs % 60;
    format!("{:02}:{:02}:{:02}", h, m, s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_format_countdown_examples() {
        assert_eq!(format_countdown(163), "2:43");
        assert_eq!(format_countdown(0), "0:00");
        assert_eq!(format_countdown(59), "0:59");
        assert_eq!(format_countdown(60), "1:00");
        assert_eq!(format_countdown(600), "10:00");
    }

    #[test]
    fn test_format_remaining_pads_fields() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
        let end = now + Duration::hours(22) + Duration::minutes(5) + Duration::seconds(7);
        assert_eq!(format_remaining(end, now), "22:05:07");
    }

    #[test]
    fn test_format_remaining_truncates_subsecond() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
        let end = now + Duration::milliseconds(1500);
        assert_eq!(format_remaining(end, now), "00:00:01");
    }

    #[test]
    fn test_format_remaining_ended() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
        assert_eq!(format_remaining(now, now), "Ended");
        assert_eq!(format_remaining(now - Duration::seconds(1), now), "Ended");
    }

    #[test]
    fn test_format_remaining_past_99_hours() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
        let end = now + Duration::hours(120);
        assert_eq!(format_remaining(end, now), "120:00:00");
    }
}
