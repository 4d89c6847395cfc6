//! Duration formatting for interval progress.
//!
//! Interval durations are shown as `MM:SS`. Minutes are not wrapped into
//! hours, so a 90-minute interval reads `90:00`. Negative durations print as
//! `00:00`.
//!
//! ```rust
//! use pomo::libs::formatter::format_duration;
//! use chrono::TimeDelta;
//!
//! assert_eq!(format_duration(&TimeDelta::seconds(83)), "01:23");
//! assert_eq!(format_duration(&TimeDelta::minutes(25)), "25:00");
//! ```

use chrono::TimeDelta;

/// Formats a duration as zero-padded `MM:SS`, clamping negatives to zero.
pub fn format_duration(duration: &TimeDelta) -> String {
    let total = duration.num_seconds().max(0);
    format!("{:02}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_duration(&TimeDelta::zero()), "00:00");
        assert_eq!(format_duration(&TimeDelta::seconds(59)), "00:59");
        assert_eq!(format_duration(&TimeDelta::seconds(61)), "01:01");
        assert_eq!(format_duration(&TimeDelta::minutes(15)), "15:00");
    }

    #[test]
    fn long_durations_keep_counting_minutes() {
        assert_eq!(format_duration(&TimeDelta::minutes(90)), "90:00");
        assert_eq!(format_duration(&TimeDelta::minutes(125)), "125:00");
    }

    #[test]
    fn negative_durations_clamp_to_zero() {
        assert_eq!(format_duration(&TimeDelta::seconds(-30)), "00:00");
    }

    #[test]
    fn drops_sub_second_precision() {
        assert_eq!(format_duration(&TimeDelta::milliseconds(1999)), "00:01");
    }
}
