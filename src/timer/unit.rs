//! Units a timer duration can be configured in.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Unit of the configured duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    /// Multiplier 1.
    #[default]
    Seconds,
    /// Multiplier 60.
    Minutes,
    /// Multiplier 3600.
    Hours,
}

/// Returned when a unit name is not `seconds`, `minutes` or `hours`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown time unit {0:?}")]
pub struct ParseUnitError(pub String);

impl TimeUnit {
    /// All units in selector order.
    pub const ALL: [TimeUnit; 3] = [TimeUnit::Seconds, TimeUnit::Minutes, TimeUnit::Hours];

    /// Seconds per unit.
    pub fn multiplier(self) -> i64 {
        match self {
            TimeUnit::Seconds => 1,
            TimeUnit::Minutes => 60,
            TimeUnit::Hours => 3600,
        }
    }

    /// Lower-case name, as shown in the unit selector.
    pub fn label(self) -> &'static str {
        match self {
            TimeUnit::Seconds => "seconds",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Hours => "hours",
        }
    }

    /// The next unit in selector order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            TimeUnit::Seconds => TimeUnit::Minutes,
            TimeUnit::Minutes => TimeUnit::Hours,
            TimeUnit::Hours => TimeUnit::Seconds,
        }
    }

    /// Converts `value` expressed in `self` into `to`, rounding half up.
    ///
    /// `convert(90, Minutes)` from seconds is 2; 89 seconds is 1.
    pub fn convert(self, value: u32, to: TimeUnit) -> u32 {
        let secs = u64::from(value) * self.multiplier() as u64;
        let divisor = to.multiplier() as u64;
        let rounded = (secs + divisor / 2) / divisor;
        u32::try_from(rounded).unwrap_or(u32::MAX)
    }

    /// Seconds in `value` units.
    pub fn to_seconds(self, value: u32) -> i64 {
        i64::from(value) * self.multiplier()
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeUnit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeUnit::ALL
            .into_iter()
            .find(|u| u.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseUnitError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multipliers() {
        assert_eq!(TimeUnit::Seconds.multiplier(), 1);
        assert_eq!(TimeUnit::Minutes.multiplier(), 60);
        assert_eq!(TimeUnit::Hours.multiplier(), 3600);
    }

    #[test]
    fn test_convert_rounds_half_up() {
        assert_eq!(TimeUnit::Seconds.convert(90, TimeUnit::Minutes), 2);
        assert_eq!(TimeUnit::Seconds.convert(89, TimeUnit::Minutes), 1);
        assert_eq!(TimeUnit::Seconds.convert(30, TimeUnit::Minutes), 1);
        assert_eq!(TimeUnit::Seconds.convert(29, TimeUnit::Minutes), 0);
        assert_eq!(TimeUnit::Minutes.convert(90, TimeUnit::Hours), 2);
        assert_eq!(TimeUnit::Seconds.convert(1, TimeUnit::Hours), 0);
    }

    #[test]
    fn test_convert_up_is_exact() {
        assert_eq!(TimeUnit::Minutes.convert(2, TimeUnit::Seconds), 120);
        assert_eq!(TimeUnit::Hours.convert(99, TimeUnit::Minutes), 5940);
        assert_eq!(TimeUnit::Hours.convert(99, TimeUnit::Seconds), 356_400);
    }

    #[test]
    fn test_convert_saturates() {
        assert_eq!(TimeUnit::Hours.convert(u32::MAX, TimeUnit::Seconds), u32::MAX);
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(TimeUnit::Seconds.next(), TimeUnit::Minutes);
        assert_eq!(TimeUnit::Minutes.next(), TimeUnit::Hours);
        assert_eq!(TimeUnit::Hours.next(), TimeUnit::Seconds);
    }

    #[test]
    fn test_parse() {
        assert_eq!("minutes".parse::<TimeUnit>(), Ok(TimeUnit::Minutes));
        assert_eq!(" Hours ".parse::<TimeUnit>(), Ok(TimeUnit::Hours));
        assert_eq!(
            "days".parse::<TimeUnit>(),
            Err(ParseUnitError("days".to_string()))
        );
        assert_eq!(TimeUnit::Seconds.to_string(), "seconds");
    }
}
