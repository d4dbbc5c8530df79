//! The native date type accepted as input and produced as output.
//!
//! An [`Instant`] is either a valid UTC datetime with millisecond precision
//! or an invalid time. Invalid times keep the non-finite value they were
//! built from, so `NaN` in gives `NaN` out and `+∞` in gives `+∞` out.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Datelike, TimeZone, Utc};
use serde::{Serialize, Serializer};

/// Largest magnitude, in milliseconds, of a native time value
/// (100,000,000 days either side of the epoch).
///
/// Valid instants are also bounded by the range of `chrono::DateTime<Utc>`
/// (roughly ±262,000 years, about ±8.2e15 ms), which is the narrower of the
/// two: a finite value inside `MAX_TIME_MILLIS` but outside chrono's range
/// still produces an invalid instant.
pub const MAX_TIME_MILLIS: f64 = 8.64e15;

#[derive(Debug, Clone, Copy)]
enum Repr {
    Valid(DateTime<Utc>),
    Invalid(f64),
}

/// A point in time, or an invalid time.
#[derive(Debug, Clone, Copy)]
pub struct Instant {
    repr: Repr,
}

impl Instant {
    /// Build an instant from milliseconds since the Unix epoch.
    ///
    /// Non-finite input produces an invalid instant carrying that value.
    /// Finite input is truncated toward zero to whole milliseconds; values
    /// beyond [`MAX_TIME_MILLIS`] or outside chrono's datetime range produce
    /// an invalid `NaN` instant.
    ///
    /// ```
    /// use truncate_date::Instant;
    ///
    /// assert_eq!(Instant::from_millis(1586953815123.9).get_time(), 1586953815123.0);
    /// assert!(!Instant::from_millis(f64::NAN).is_valid());
    /// assert!(!Instant::from_millis(1e300).is_valid());
    /// ```
    pub fn from_millis(millis: f64) -> Self {
        if !millis.is_finite() {
            return Instant {
                repr: Repr::Invalid(millis),
            };
        }
        let millis = millis.trunc();
        if millis.abs() > MAX_TIME_MILLIS {
            return Instant::invalid();
        }
        match DateTime::<Utc>::from_timestamp_millis(millis as i64) {
            Some(dt) => Instant {
                repr: Repr::Valid(dt),
            },
            None => Instant::invalid(),
        }
    }

    /// The invalid instant, holding `NaN`.
    pub fn invalid() -> Self {
        Instant {
            repr: Repr::Invalid(f64::NAN),
        }
    }

    /// Milliseconds since the Unix epoch; non-finite for invalid instants.
    pub fn get_time(&self) -> f64 {
        match self.repr {
            Repr::Valid(dt) => dt.timestamp_millis() as f64,
            Repr::Invalid(millis) => millis,
        }
    }

    /// Milliseconds since the Unix epoch, or `None` for invalid instants.
    pub fn timestamp_millis(&self) -> Option<i64> {
        self.to_datetime().map(|dt| dt.timestamp_millis())
    }

    pub fn is_valid(&self) -> bool {
        matches!(self.repr, Repr::Valid(_))
    }

    /// The instant as a chrono UTC datetime, or `None` if invalid.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        match self.repr {
            Repr::Valid(dt) => Some(dt),
            Repr::Invalid(_) => None,
        }
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Instant {
    /// Sub-millisecond precision is dropped.
    fn from(dt: DateTime<Tz>) -> Self {
        Instant::from_millis(dt.with_timezone(&Utc).timestamp_millis() as f64)
    }
}

impl PartialEq for Instant {
    fn eq(&self, other: &Self) -> bool {
        self.get_time() == other.get_time()
    }
}

impl PartialOrd for Instant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.get_time().partial_cmp(&other.get_time())
    }
}

impl fmt::Display for Instant {
    /// `YYYY-MM-DDTHH:MM:SS.sssZ`, or `Invalid Date`.
    ///
    /// Years outside 0..=9999 use the expanded form with a sign and six
    /// digits: `+010000-01-01T00:00:00.000Z`, `-000001-12-31T00:00:00.000Z`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dt = match self.repr {
            Repr::Valid(dt) => dt,
            Repr::Invalid(_) => return f.write_str("Invalid Date"),
        };
        let year = dt.year();
        if (0..=9999).contains(&year) {
            write!(f, "{:04}", year)?;
        } else {
            let sign = if year < 0 { '-' } else { '+' };
            write!(f, "{}{:06}", sign, year.unsigned_abs())?;
        }
        write!(f, "{}", dt.format("-%m-%dT%H:%M:%S%.3fZ"))
    }
}

impl Serialize for Instant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.repr {
            Repr::Valid(_) => serializer.collect_str(self),
            Repr::Invalid(_) => serializer.serialize_none(),
        }
    }
}
