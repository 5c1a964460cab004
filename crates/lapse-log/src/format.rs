//! Human-readable duration formatting.

use std::time::Duration;

use chrono::TimeDelta;

/// Formats a duration at a scale suited to its size.
///
/// Sub-second values keep two decimals of their unit (`"850ns"`,
/// `"12.50µs"`, `"3.25ms"`), values under a minute are shown in seconds
/// (`"4.20s"`), and longer ones in whole units (`"1m 30s"`, `"2h 5m"`).
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let nanos = duration.as_nanos();
    if nanos < 1_000 {
        return format!("{nanos}ns");
    }
    if nanos < 1_000_000 {
        return format!("{:.2}µs", nanos as f64 / 1_000.0);
    }
    if nanos < 1_000_000_000 {
        return format!("{:.2}ms", nanos as f64 / 1_000_000.0);
    }

    let total_secs = duration.as_secs();
    if total_secs < 60 {
        return format!("{:.2}s", duration.as_secs_f64());
    }

    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    if hours > 0 {
        if minutes > 0 {
            format!("{hours}h {minutes}m")
        } else {
            format!("{hours}h")
        }
    } else if seconds > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{minutes}m")
    }
}

/// Formats a signed duration, prefixing negative values with `-`.
#[must_use]
pub fn format_delta(delta: TimeDelta) -> String {
    let magnitude = delta.abs().to_std().unwrap_or(Duration::ZERO);
    if delta < TimeDelta::zero() {
        format!("-{}", format_duration(magnitude))
    } else {
        format_duration(magnitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_sub_second() {
        assert_eq!(format_duration(Duration::ZERO), "0ns");
        assert_eq!(format_duration(Duration::from_nanos(850)), "850ns");
        assert_eq!(format_duration(Duration::from_nanos(12_500)), "12.50µs");
        assert_eq!(format_duration(Duration::from_micros(3_250)), "3.25ms");
        assert_eq!(format_duration(Duration::from_millis(500)), "500.00ms");
    }

    #[test]
    fn test_format_seconds_and_up() {
        assert_eq!(format_duration(Duration::from_millis(4_200)), "4.20s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
        assert_eq!(format_duration(Duration::from_secs(600)), "10m");
        assert_eq!(format_duration(Duration::from_secs(3600)), "1h");
        assert_eq!(format_duration(Duration::from_secs(7_500)), "2h 5m");
    }

    #[test]
    fn test_format_delta() {
        assert_eq!(format_delta(TimeDelta::milliseconds(5)), "5.00ms");
        assert_eq!(format_delta(TimeDelta::seconds(-90)), "-1m 30s");
    }
}
