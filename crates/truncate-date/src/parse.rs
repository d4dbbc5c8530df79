//! Standard date-string parsing for textual time values.
//!
//! Accepts the canonical timestamp formats (RFC 3339 / ISO 8601 and
//! RFC 2822). Every format is read in UTC: strings without an offset are
//! taken to be UTC rather than local time.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};

use crate::instant::Instant;

/// Leap year standing in for an expanded year while the rest of the
/// timestamp is parsed, so `-02-29` is accepted and later checked against
/// the real year.
const PLACEHOLDER_YEAR: i32 = 2000;

/// ISO 8601 date-time layouts without an offset, most specific first.
const NAIVE_DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a date string into milliseconds since the Unix epoch.
///
/// Returns `NaN` when the string is not a recognized timestamp. Parsed
/// values go through the same range clip as [`Instant::from_millis`].
///
/// # Supported Formats
///
/// - RFC 3339: `"2020-04-15T12:30:15.123Z"`, `"2020-04-15T14:30:15+02:00"`
/// - ISO date-time without offset (UTC): `"2020-04-15T12:30"`, `"2020-04-15 12:30:15.123"`
/// - ISO date (UTC midnight): `"2020-04-15"`, `"2020-04"`, `"2020"`
/// - ISO expanded years (sign and six digits) in any of the forms above:
///   `"+010000-01-01T00:00:00.000Z"`, `"-000001-12-31"`
/// - RFC 2822: `"Wed, 15 Apr 2020 12:30:15 GMT"`
///
/// # Examples
///
/// ```
/// use truncate_date::parse_date_string;
///
/// assert_eq!(parse_date_string("2020-04-15T12:30:15.123Z"), 1586953815123.0);
/// assert_eq!(parse_date_string("1970-01-02"), 86400000.0);
/// assert!(parse_date_string("not a date").is_nan());
/// ```
pub fn parse_date_string(s: &str) -> f64 {
    let s = s.trim();

    try_rfc3339(s)
        .or_else(|| try_naive_datetime(s))
        .or_else(|| try_iso_date(s))
        .or_else(|| try_expanded_year(s))
        .or_else(|| try_rfc2822(s))
        .map(|dt| Instant::from(dt).get_time())
        .unwrap_or(f64::NAN)
}

// ── Format parsers ──────────────────────────────────────────────────────────

fn try_rfc3339(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}

fn try_rfc2822(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(s)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}

/// Date-time with no offset, read as UTC.
fn try_naive_datetime(s: &str) -> Option<DateTime<Utc>> {
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// `YYYY-MM-DD`, `YYYY-MM`, or `YYYY` → midnight UTC on the first day
/// of the period.
fn try_iso_date(s: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| match s.split_once('-') {
            Some((year, month)) => {
                let year = parse_fixed_digits(year, 4)?;
                let month = parse_fixed_digits(month, 2)?;
                NaiveDate::from_ymd_opt(year as i32, month, 1)
            }
            None => NaiveDate::from_ymd_opt(parse_fixed_digits(s, 4)? as i32, 1, 1),
        })?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}

/// `±YYYYYY` followed by any of the four-digit-year forms. `-000000` is
/// rejected.
fn try_expanded_year(s: &str) -> Option<DateTime<Utc>> {
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'+') => (false, &s[1..]),
        Some(b'-') => (true, &s[1..]),
        _ => return None,
    };
    let digits = parse_fixed_digits(rest.get(..6)?, 6)? as i32;
    if negative && digits == 0 {
        return None;
    }
    let year = if negative { -digits } else { digits };

    let tail = &rest[6..];
    if !tail.is_empty() && !tail.starts_with('-') {
        return None;
    }
    let placeholder = format!("{PLACEHOLDER_YEAR}{tail}");

    // Offsets apply to the wall-clock time, so the year is swapped in
    // before converting to UTC.
    if let Ok(dt) = DateTime::parse_from_rfc3339(&placeholder) {
        let local = dt.naive_local().with_year(year)?;
        return local
            .and_local_timezone(*dt.offset())
            .single()
            .map(|dt| dt.with_timezone(&Utc));
    }

    try_naive_datetime(&placeholder)
        .or_else(|| try_iso_date(&placeholder))
        .and_then(|dt| dt.naive_utc().with_year(year))
        .map(|naive| naive.and_utc())
}

/// Parse exactly `width` ASCII digits.
fn parse_fixed_digits(s: &str, width: usize) -> Option<u32> {
    if s.len() != width || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
