//! Accepted input shapes and their normalization to epoch milliseconds.
//!
//! [`TimeValue`] is the closed set of shapes the truncator understands.
//! Dynamic inputs are classified once, when they are converted into a
//! `TimeValue`; everything after that works on the closed set.

use chrono::{DateTime, TimeZone};
use serde_json::Value;

use crate::error::TruncateError;
use crate::instant::Instant;
use crate::parse::parse_date_string;

/// A date wrapper exposing `to_date()`, as moment and Day.js objects do.
///
/// Return `None` when the wrapper cannot produce an instant; the value is
/// then treated as an invalid time rather than an error.
pub trait ToDate {
    fn to_date(&self) -> Option<Instant>;
}

/// A date wrapper exposing `to_js_date()`, as Luxon objects do.
pub trait ToJsDate {
    fn to_js_date(&self) -> Option<Instant>;
}

/// A time value in one of the accepted shapes.
#[derive(Clone, Copy)]
pub enum TimeValue<'a> {
    /// Milliseconds since the Unix epoch. `NaN` and infinities are allowed.
    Millis(f64),
    /// A timestamp string, read with [`parse_date_string`].
    Text(&'a str),
    /// A native instant.
    Instant(Instant),
    /// A wrapper converted through [`ToDate::to_date`].
    ToDate(&'a dyn ToDate),
    /// A wrapper converted through [`ToJsDate::to_js_date`].
    ToJsDate(&'a dyn ToJsDate),
}

impl TimeValue<'_> {
    /// Resolve the value to milliseconds since the Unix epoch.
    ///
    /// Unparseable strings and wrappers that return no instant resolve to
    /// `NaN`. Numeric values are passed through untouched.
    pub fn epoch_millis(&self) -> f64 {
        match *self {
            TimeValue::Millis(millis) => millis,
            TimeValue::Text(s) => parse_date_string(s),
            TimeValue::Instant(instant) => instant.get_time(),
            TimeValue::ToDate(wrapper) => wrapper
                .to_date()
                .map_or(f64::NAN, |instant| instant.get_time()),
            TimeValue::ToJsDate(wrapper) => wrapper
                .to_js_date()
                .map_or(f64::NAN, |instant| instant.get_time()),
        }
    }

    /// Short name of the shape, used in `Debug` output.
    fn shape(&self) -> &'static str {
        match self {
            TimeValue::Millis(_) => "Millis",
            TimeValue::Text(_) => "Text",
            TimeValue::Instant(_) => "Instant",
            TimeValue::ToDate(_) => "ToDate",
            TimeValue::ToJsDate(_) => "ToJsDate",
        }
    }
}

impl std::fmt::Debug for TimeValue<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeValue::Millis(millis) => f.debug_tuple("Millis").field(millis).finish(),
            TimeValue::Text(s) => f.debug_tuple("Text").field(s).finish(),
            TimeValue::Instant(instant) => f.debug_tuple("Instant").field(instant).finish(),
            TimeValue::ToDate(_) | TimeValue::ToJsDate(_) => f.write_str(self.shape()),
        }
    }
}

// ── Conversions ─────────────────────────────────────────────────────────────

impl From<f64> for TimeValue<'_> {
    fn from(millis: f64) -> Self {
        TimeValue::Millis(millis)
    }
}

impl From<i64> for TimeValue<'_> {
    fn from(millis: i64) -> Self {
        TimeValue::Millis(millis as f64)
    }
}

impl<'a> From<&'a str> for TimeValue<'a> {
    fn from(s: &'a str) -> Self {
        TimeValue::Text(s)
    }
}

impl<'a> From<&'a String> for TimeValue<'a> {
    fn from(s: &'a String) -> Self {
        TimeValue::Text(s.as_str())
    }
}

impl From<Instant> for TimeValue<'_> {
    fn from(instant: Instant) -> Self {
        TimeValue::Instant(instant)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for TimeValue<'_> {
    fn from(dt: DateTime<Tz>) -> Self {
        TimeValue::Instant(Instant::from(dt))
    }
}

/// JSON numbers and strings are time values; every other JSON shape is
/// rejected with [`TruncateError::UnrecognizedValue`].
impl<'a> TryFrom<&'a Value> for TimeValue<'a> {
    type Error = TruncateError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => n
                .as_f64()
                .map(TimeValue::Millis)
                .ok_or(TruncateError::UnrecognizedValue),
            Value::String(s) => Ok(TimeValue::Text(s.as_str())),
            Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => {
                Err(TruncateError::UnrecognizedValue)
            }
        }
    }
}
