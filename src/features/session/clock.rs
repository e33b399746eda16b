//! Clock-style parsing and formatting for interval lengths.
//!
//! Accepts `MM:SS` (as typed into the timer settings), bare seconds (`45`)
//! and unit strings like `90s`, `1m30s` or `2m`.

use chrono::Duration;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, TimerError};

static CLOCK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,3}):([0-5]?\d)$").unwrap_or_else(|e| panic!("Invalid clock regex: {e}"))
});

static UNIT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(\d+)h)?(?:(\d+)m)?(?:(\d+)s)?$")
        .unwrap_or_else(|e| panic!("Invalid duration regex: {e}"))
});

fn capture_u32(caps: &regex::Captures<'_>, group: usize) -> Option<u32> {
    caps.get(group).and_then(|m| m.as_str().parse().ok())
}

/// Parse an interval length into whole seconds.
///
/// # Errors
///
/// Returns `TimerError::InvalidConfig` if the text is not a recognised
/// duration or the value overflows.
pub fn parse_clock(text: &str) -> Result<u32> {
    let s = text.trim().to_lowercase();
    let invalid = || TimerError::InvalidConfig(format!("Invalid duration: {text:?}"));

    if let Ok(seconds) = s.parse::<u32>() {
        return Ok(seconds);
    }

    if let Some(caps) = CLOCK_PATTERN.captures(&s) {
        let minutes = capture_u32(&caps, 1).ok_or_else(invalid)?;
        let seconds = capture_u32(&caps, 2).ok_or_else(invalid)?;
        return minutes
            .checked_mul(60)
            .and_then(|m| m.checked_add(seconds))
            .ok_or_else(invalid);
    }

    if s.is_empty() {
        return Err(invalid());
    }

    let caps = UNIT_PATTERN.captures(&s).ok_or_else(invalid)?;
    let hours = capture_u32(&caps, 1).unwrap_or(0);
    let minutes = capture_u32(&caps, 2).unwrap_or(0);
    let seconds = capture_u32(&caps, 3).unwrap_or(0);

    hours
        .checked_mul(3600)
        .and_then(|h| minutes.checked_mul(60).and_then(|m| h.checked_add(m)))
        .and_then(|hm| hm.checked_add(seconds))
        .ok_or_else(invalid)
}

/// Format seconds as `MM:SS`.
#[must_use]
pub fn format_clock(seconds: u32) -> String {
    let minutes = seconds / 60;
    let seconds = seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Format a duration as a human-readable string.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let total_seconds = d.num_seconds();
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;

    let plural = |n: i64| if n == 1 { "" } else { "s" };

    if minutes < 1 {
        return format!("{seconds} second{}", plural(seconds));
    }

    let hours = minutes / 60;
    let minutes = minutes % 60;

    match (hours, minutes, seconds) {
        (0, m, 0) => format!("{m} minute{}", plural(m)),
        (0, m, s) => format!("{m} minute{}, {s} second{}", plural(m), plural(s)),
        (h, 0, _) => format!("{h} hour{}", plural(h)),
        (h, m, _) => format!("{h} hour{}, {m} minute{}", plural(h), plural(m)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_clock_mmss() {
        assert_eq!(parse_clock("00:05").unwrap(), 5);
        assert_eq!(parse_clock("01:30").unwrap(), 90);
        assert_eq!(parse_clock("10:00").unwrap(), 600);
        assert_eq!(parse_clock("2:5").unwrap(), 125);
    }

    #[test]
    fn test_parse_clock_bare_seconds() {
        assert_eq!(parse_clock("45").unwrap(), 45);
        assert_eq!(parse_clock(" 7 ").unwrap(), 7);
    }

    #[test]
    fn test_parse_clock_units() {
        assert_eq!(parse_clock("90s").unwrap(), 90);
        assert_eq!(parse_clock("1m30s").unwrap(), 90);
        assert_eq!(parse_clock("2m").unwrap(), 120);
        assert_eq!(parse_clock("1h").unwrap(), 3600);
    }

    #[test]
    fn test_parse_clock_invalid() {
        assert!(parse_clock("").is_err());
        assert!(parse_clock("abc").is_err());
        assert!(parse_clock("00:75").is_err());
        assert!(parse_clock("-5").is_err());
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(5), "00:05");
        assert_eq!(format_clock(90), "01:30");
        assert_eq!(format_clock(3600), "60:00");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::seconds(1)), "1 second");
        assert_eq!(format_duration(Duration::seconds(45)), "45 seconds");
        assert_eq!(format_duration(Duration::minutes(25)), "25 minutes");
        assert_eq!(format_duration(Duration::seconds(90)), "1 minute, 30 seconds");
        assert_eq!(format_duration(Duration::hours(2)), "2 hours");
        assert_eq!(format_duration(Duration::minutes(90)), "1 hour, 30 minutes");
    }
}
