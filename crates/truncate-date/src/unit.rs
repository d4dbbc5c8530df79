//! Truncation granularity.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TruncateError;

pub(crate) const MILLIS_PER_SECOND: i64 = 1_000;
pub(crate) const MILLIS_PER_MINUTE: i64 = 60_000;
pub(crate) const MILLIS_PER_HOUR: i64 = 3_600_000;
pub(crate) const MILLIS_PER_DAY: i64 = 86_400_000;

/// The unit to truncate to. All precision finer than the unit is dropped.
///
/// The textual tags are the lowercase variant names (`"millisecond"`,
/// `"second"`, ... `"year"`). Parsing is exact: `"Day"` or `" day"` are
/// not recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Month,
    Year,
}

impl TimeUnit {
    /// Every unit, finest first.
    pub const ALL: [TimeUnit; 7] = [
        TimeUnit::Millisecond,
        TimeUnit::Second,
        TimeUnit::Minute,
        TimeUnit::Hour,
        TimeUnit::Day,
        TimeUnit::Month,
        TimeUnit::Year,
    ];

    /// The textual tag for this unit.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Millisecond => "millisecond",
            TimeUnit::Second => "second",
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
            TimeUnit::Month => "month",
            TimeUnit::Year => "year",
        }
    }

    /// Width of the unit in milliseconds, or `None` for the calendar units
    /// (month, year) whose length varies.
    pub fn fixed_width_millis(&self) -> Option<i64> {
        match self {
            TimeUnit::Millisecond => Some(1),
            TimeUnit::Second => Some(MILLIS_PER_SECOND),
            TimeUnit::Minute => Some(MILLIS_PER_MINUTE),
            TimeUnit::Hour => Some(MILLIS_PER_HOUR),
            TimeUnit::Day => Some(MILLIS_PER_DAY),
            TimeUnit::Month | TimeUnit::Year => None,
        }
    }
}

impl FromStr for TimeUnit {
    type Err = TruncateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "millisecond" => Ok(TimeUnit::Millisecond),
            "second" => Ok(TimeUnit::Second),
            "minute" => Ok(TimeUnit::Minute),
            "hour" => Ok(TimeUnit::Hour),
            "day" => Ok(TimeUnit::Day),
            "month" => Ok(TimeUnit::Month),
            "year" => Ok(TimeUnit::Year),
            _ => Err(TruncateError::UnrecognizedUnit),
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_tag() {
        for unit in TimeUnit::ALL {
            assert_eq!(unit.as_str().parse::<TimeUnit>(), Ok(unit));
            assert_eq!(unit.to_string(), unit.as_str());
        }
    }

    #[test]
    fn test_parse_is_exact() {
        for tag in ["Day", " day", "days", "", "ms", "shakes of a lamb's tail"] {
            assert_eq!(
                tag.parse::<TimeUnit>(),
                Err(TruncateError::UnrecognizedUnit),
                "tag: {tag:?}"
            );
        }
    }

    #[test]
    fn test_all_is_ordered_finest_first() {
        let mut sorted = TimeUnit::ALL;
        sorted.sort();
        assert_eq!(sorted, TimeUnit::ALL);
        assert_eq!(TimeUnit::ALL.first(), Some(&TimeUnit::Millisecond));
        assert_eq!(TimeUnit::ALL.last(), Some(&TimeUnit::Year));
    }

    #[test]
    fn test_fixed_widths() {
        assert_eq!(TimeUnit::Millisecond.fixed_width_millis(), Some(1));
        assert_eq!(TimeUnit::Second.fixed_width_millis(), Some(1_000));
        assert_eq!(TimeUnit::Minute.fixed_width_millis(), Some(60_000));
        assert_eq!(TimeUnit::Hour.fixed_width_millis(), Some(3_600_000));
        assert_eq!(TimeUnit::Day.fixed_width_millis(), Some(86_400_000));
        assert_eq!(TimeUnit::Month.fixed_width_millis(), None);
        assert_eq!(TimeUnit::Year.fixed_width_millis(), None);
    }

    #[test]
    fn test_serde_uses_lowercase_tags() {
        assert_eq!(
            serde_json::to_string(&TimeUnit::Month).unwrap(),
            "\"month\""
        );
        let unit: TimeUnit = serde_json::from_str("\"hour\"").unwrap();
        assert_eq!(unit, TimeUnit::Hour);
        assert!(serde_json::from_str::<TimeUnit>("\"fortnight\"").is_err());
    }
}
