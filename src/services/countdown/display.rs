//! Pure readout helpers for the countdown engine.
//!
//! Kept separate from the state-mutating engine so formatting and
//! progress math are testable without faking wall-clock time.

/// Remaining time at or below which the warning palette applies.
pub const WARNING_THRESHOLD_SECS: u32 = 5 * 60;

/// Zero-padded `MM:SS` readout. Minutes are not wrapped at an hour,
/// so a 90-minute session starts at "90:00".
pub fn format_remaining(remaining_seconds: u32) -> String {
    format!("{:02}:{:02}", remaining_seconds / 60, remaining_seconds % 60)
}

/// Fraction of the session still remaining, driving the progress ring.
///
/// 1.0 at start, 0.0 at expiry. A zero total (malformed configuration)
/// reads as fully elapsed.
pub fn progress_fraction(remaining_seconds: u32, total_seconds: u32) -> f32 {
    if total_seconds == 0 {
        0.0
    } else {
        remaining_seconds as f32 / total_seconds as f32
    }
}

/// Whether the visual treatment should switch to the warning palette.
/// Has no effect on timing logic.
pub fn is_warning(remaining_seconds: u32) -> bool {
    remaining_seconds <= WARNING_THRESHOLD_SECS
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, "00:00")]
    #[test_case(5, "00:05")]
    #[test_case(59, "00:59")]
    #[test_case(60, "01:00")]
    #[test_case(61, "01:01")]
    #[test_case(600, "10:00")]
    #[test_case(5400, "90:00")]
    fn test_format_remaining(seconds: u32, expected: &str) {
        assert_eq!(format_remaining(seconds), expected);
    }

    #[test]
    fn test_progress_fraction_bounds() {
        assert_eq!(progress_fraction(5400, 5400), 1.0);
        assert_eq!(progress_fraction(0, 5400), 0.0);
        assert_eq!(progress_fraction(2700, 5400), 0.5);
    }

    #[test]
    fn test_progress_fraction_zero_total_reads_elapsed() {
        assert_eq!(progress_fraction(0, 0), 0.0);
    }

    #[test_case(301, false)]
    #[test_case(300, true)]
    #[test_case(5, true)]
    #[test_case(0, true)]
    fn test_warning_threshold(seconds: u32, expected: bool) {
        assert_eq!(is_warning(seconds), expected);
    }
}
