//! Clock display for the remaining time.

use super::unit::TimeUnit;

/// Formats signed `remaining` seconds for display in `unit`.
///
/// Hours render as `HH:MM:SS`, minutes as `MM:SS` and seconds as the bare
/// zero-padded count. The seconds form never rolls over, so 125 renders as
/// `125`. Negative values get a leading `-`.
///
/// ```rust
/// use notedeck_widgets::timer::{format_remaining, TimeUnit};
///
/// assert_eq!(format_remaining(3725, TimeUnit::Hours), "01:02:05");
/// assert_eq!(format_remaining(-65, TimeUnit::Minutes), "-01:05");
/// assert_eq!(format_remaining(125, TimeUnit::Seconds), "125");
/// ```
pub fn format_remaining(remaining: i64, unit: TimeUnit) -> String {
    let sign = if remaining < 0 { "-" } else { "" };
    let abs = remaining.unsigned_abs();

    match unit {
        TimeUnit::Hours => format!(
            "{}{:02}:{:02}:{:02}",
            sign,
            abs / 3600,
            (abs % 3600) / 60,
            abs % 60
        ),
        TimeUnit::Minutes => format!("{}{:02}:{:02}", sign, abs / 60, abs % 60),
        TimeUnit::Seconds => format!("{}{:02}", sign, abs),
    }
}

/// Presentation category of the remaining time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Time left.
    Counting,
    /// Exactly zero.
    AtZero,
    /// Past zero.
    Exceeded,
}

impl Tone {
    /// Classifies `remaining` seconds.
    pub fn of(remaining: i64) -> Self {
        match remaining {
            r if r > 0 => Tone::Counting,
            0 => Tone::AtZero,
            _ => Tone::Exceeded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hours_layout() {
        for t in [0_i64, 1, 59, 60, 3599, 3600, 3661, 86_399, 360_000] {
            let expected = format!("{:02}:{:02}:{:02}", t / 3600, (t % 3600) / 60, t % 60);
            assert_eq!(format_remaining(t, TimeUnit::Hours), expected, "t = {t}");
        }
    }

    #[test]
    fn test_negative_is_prefixed_positive() {
        for unit in TimeUnit::ALL {
            for t in [1_i64, 5, 59, 60, 125, 3600, 3725] {
                assert_eq!(
                    format_remaining(-t, unit),
                    format!("-{}", format_remaining(t, unit)),
                    "t = -{t}, unit = {unit}"
                );
            }
        }
    }

    #[test]
    fn test_seconds_has_no_rollover() {
        assert_eq!(format_remaining(125, TimeUnit::Seconds), "125");
        assert_eq!(format_remaining(5, TimeUnit::Seconds), "05");
        assert_eq!(format_remaining(-5, TimeUnit::Seconds), "-05");
        assert_eq!(format_remaining(0, TimeUnit::Seconds), "00");
    }

    #[test]
    fn test_minutes_do_not_roll_into_hours() {
        assert_eq!(format_remaining(65, TimeUnit::Minutes), "01:05");
        assert_eq!(format_remaining(7200, TimeUnit::Minutes), "120:00");
    }

    #[test]
    fn test_extreme_values() {
        assert_eq!(
            format_remaining(i64::MIN, TimeUnit::Seconds),
            format!("-{}", i64::MIN.unsigned_abs())
        );
    }

    #[test]
    fn test_tone() {
        assert_eq!(Tone::of(1), Tone::Counting);
        assert_eq!(Tone::of(0), Tone::AtZero);
        assert_eq!(Tone::of(-1), Tone::Exceeded);
    }
}
