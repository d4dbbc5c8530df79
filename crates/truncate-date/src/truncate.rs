//! Truncation of time values to a unit boundary in UTC.
//!
//! # Functions
//!
//! - [`truncate_date`] — Normalize any accepted value and truncate it to a named unit
//! - [`truncate_date_with_options`] — Same, with configurable unit checking
//! - [`truncate`] — Truncate epoch milliseconds to a typed [`TimeUnit`]
//!
//! Invalid times are data, not errors: `NaN`, infinities, out-of-range values
//! and unparseable strings all produce an invalid [`Instant`].

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::Serialize;

use crate::error::{Result, TruncateError};
use crate::instant::Instant;
use crate::unit::{TimeUnit, MILLIS_PER_DAY};
use crate::value::TimeValue;

// ── Options ─────────────────────────────────────────────────────────────────

/// When the unit argument of [`truncate_date_with_options`] is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum UnitCheck {
    /// Validate the unit only once the value is known to be a finite time.
    /// An unrecognized unit paired with an invalid time returns the invalid
    /// instant instead of an error.
    #[default]
    Deferred,
    /// Validate the unit before looking at the value.
    Strict,
}

/// Options for [`truncate_date_with_options`].
#[derive(Debug, Clone, Default)]
pub struct TruncateOptions {
    /// When the unit argument is validated.
    pub unit_check: UnitCheck,
}

// ── truncate_date ───────────────────────────────────────────────────────────

/// Truncate a time value so that all precision finer than `unit` is lost.
///
/// Uses [`UnitCheck::Deferred`]. For strict unit validation, use
/// [`truncate_date_with_options`].
///
/// # Arguments
///
/// * `unit` — One of `"millisecond"`, `"second"`, `"minute"`, `"hour"`,
///   `"day"`, `"month"`, `"year"`
/// * `value` — Anything convertible into a [`TimeValue`]: epoch milliseconds,
///   a timestamp string, an [`Instant`], a chrono `DateTime`, a wrapper via
///   [`TimeValue::ToDate`] / [`TimeValue::ToJsDate`], or a `&serde_json::Value`
///
/// # Returns
///
/// The truncated [`Instant`]. An invalid input time produces an invalid
/// output instant.
///
/// # Errors
///
/// Returns [`TruncateError::UnrecognizedValue`] if `value` has an
/// unsupported shape, or [`TruncateError::UnrecognizedUnit`] if `unit` is not
/// recognized and the value is a valid time.
///
/// # Examples
///
/// ```
/// use truncate_date::truncate_date;
///
/// let month = truncate_date("month", "2020-04-15T12:30:15.123Z").unwrap();
/// assert_eq!(month.to_string(), "2020-04-01T00:00:00.000Z");
///
/// let invalid = truncate_date("second", f64::NAN).unwrap();
/// assert!(invalid.get_time().is_nan());
/// ```
pub fn truncate_date<'a, V>(unit: &str, value: V) -> Result<Instant>
where
    V: TryInto<TimeValue<'a>>,
    TruncateError: From<V::Error>,
{
    truncate_date_with_options(unit, value, &TruncateOptions::default())
}

/// Truncate a time value with options.
///
/// With [`UnitCheck::Deferred`] the steps are: convert the value, resolve
/// it to epoch milliseconds, return early if the time is not finite, then
/// parse the unit and truncate. With [`UnitCheck::Strict`] the unit is parsed
/// first, so an unrecognized unit is always an error.
///
/// # Errors
///
/// See [`truncate_date`].
pub fn truncate_date_with_options<'a, V>(
    unit: &str,
    value: V,
    options: &TruncateOptions,
) -> Result<Instant>
where
    V: TryInto<TimeValue<'a>>,
    TruncateError: From<V::Error>,
{
    let checked_unit = match options.unit_check {
        UnitCheck::Strict => Some(unit.parse::<TimeUnit>()?),
        UnitCheck::Deferred => None,
    };

    let value: TimeValue<'a> = value.try_into()?;
    let millis = value.epoch_millis();
    if !millis.is_finite() {
        return Ok(Instant::from_millis(millis));
    }

    let unit = match checked_unit {
        Some(unit) => unit,
        None => unit.parse::<TimeUnit>()?,
    };
    Ok(truncate(unit, millis))
}

// ── truncate ────────────────────────────────────────────────────────────────

/// Truncate epoch milliseconds to the start of `unit` in UTC.
///
/// Second through day are fixed-width and truncate by modulus against the
/// epoch, rounding toward negative infinity so that pre-epoch times land on
/// the start of their own second, minute, hour, or day. Month and year are
/// built from the calendar fields of the day-truncated time.
///
/// ```
/// use truncate_date::{truncate, TimeUnit};
///
/// // 1969-12-31T23:59:59.999Z
/// assert_eq!(truncate(TimeUnit::Day, -1.0).get_time(), -86_400_000.0);
/// assert_eq!(truncate(TimeUnit::Year, 1586953815123.0).to_string(), "2020-01-01T00:00:00.000Z");
/// ```
pub fn truncate(unit: TimeUnit, millis: f64) -> Instant {
    let instant = Instant::from_millis(millis);
    let Some(millis) = instant.timestamp_millis() else {
        return instant;
    };

    let truncated = match unit {
        TimeUnit::Millisecond => return instant,
        TimeUnit::Second | TimeUnit::Minute | TimeUnit::Hour | TimeUnit::Day => unit
            .fixed_width_millis()
            .map(|width| truncate_fixed(millis, width)),
        TimeUnit::Month => start_of_month(millis),
        TimeUnit::Year => start_of_year(millis),
    };

    truncated.map_or_else(Instant::invalid, |millis| Instant::from_millis(millis as f64))
}

// ── Internal helpers ────────────────────────────────────────────────────────

/// `millis − (millis mod width)` with a non-negative modulus.
fn truncate_fixed(millis: i64, width: i64) -> i64 {
    millis - millis.rem_euclid(width)
}

/// The UTC calendar date containing `millis`.
fn truncate_to_day(millis: i64) -> Option<NaiveDate> {
    DateTime::<Utc>::from_timestamp_millis(truncate_fixed(millis, MILLIS_PER_DAY))
        .map(|dt| dt.date_naive())
}

fn start_of_month(millis: i64) -> Option<i64> {
    let day = truncate_to_day(millis)?;
    midnight_millis(day.year(), day.month(), 1)
}

fn start_of_year(millis: i64) -> Option<i64> {
    let day = truncate_to_day(millis)?;
    midnight_millis(day.year(), 1, 1)
}

/// Epoch milliseconds of 00:00:00.000 UTC on the given date.
fn midnight_millis(year: i32, month: u32, day: u32) -> Option<i64> {
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis())
}
