// SPDX-License-Identifier: MPL-2.0
//! Clock-style rendering of playback positions.

const SECS_PER_HOUR: u64 = 3600;
const SECS_PER_MINUTE: u64 = 60;

/// Formats a position in seconds as `H:MM:SS` or `M:SS`.
///
/// Fractions are truncated toward zero. Minutes are zero-padded only when
/// an hour component is present; seconds are always two digits. Negative
/// and non-finite input is the caller's responsibility and renders as `0:00`.
///
/// # Examples
///
/// ```
/// use embed_player::domain::video::format_time;
///
/// assert_eq!(format_time(0.0), "0:00");
/// assert_eq!(format_time(65.9), "1:05");
/// assert_eq!(format_time(3661.0), "1:01:01");
/// ```
#[must_use]
pub fn format_time(secs: f64) -> String {
    let total = if secs.is_finite() && secs > 0.0 {
        secs.trunc() as u64
    } else {
        0
    };

    let hours = total / SECS_PER_HOUR;
    let minutes = (total % SECS_PER_HOUR) / SECS_PER_MINUTE;
    let seconds = total % SECS_PER_MINUTE;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_without_hours() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(5.0), "0:05");
        assert_eq!(format_time(65.0), "1:05");
        assert_eq!(format_time(600.0), "10:00");
        assert_eq!(format_time(3599.99), "59:59");
    }

    #[test]
    fn formats_with_hours() {
        assert_eq!(format_time(3600.0), "1:00:00");
        assert_eq!(format_time(3661.0), "1:01:01");
        assert_eq!(format_time(36_000.0 + 754.0), "10:12:34");
    }

    #[test]
    fn truncates_fractions() {
        assert_eq!(format_time(59.999), "0:59");
        assert_eq!(format_time(60.0), "1:00");
    }

    #[test]
    fn guards_invalid_input() {
        assert_eq!(format_time(-3.0), "0:00");
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
    }
}
