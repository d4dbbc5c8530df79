//! # truncate-date
//!
//! Truncate a point in time to millisecond, second, minute, hour, day,
//! month, or year precision. Truncation always happens against the UTC
//! calendar, whatever form the input arrives in.
//!
//! Inputs can be epoch milliseconds, timestamp strings, native instants,
//! chrono datetimes, or third-party wrappers that implement [`ToDate`] or
//! [`ToJsDate`]. Invalid times pass straight through as invalid instants.
//!
//! ## Modules
//!
//! - [`truncate`](mod@truncate) — Entry points and the unit truncation algorithm
//! - [`value`] — Accepted input shapes and normalization to epoch milliseconds
//! - [`instant`] — The native date type returned by every truncation
//! - [`unit`] — The seven truncation units
//! - [`parse`] — Standard date-string parsing
//! - [`error`] — Error types
//!
//! ```
//! use truncate_date::{truncate_date, TruncateError};
//!
//! let day = truncate_date("day", 1586953815123.0).unwrap();
//! assert_eq!(day.to_string(), "2020-04-15T00:00:00.000Z");
//!
//! let err = truncate_date("fortnight", 1586953815123.0).unwrap_err();
//! assert_eq!(err, TruncateError::UnrecognizedUnit);
//! assert_eq!(err.to_string(), "Unrecognized time unit.");
//! ```

pub mod error;
pub mod instant;
pub mod parse;
pub mod truncate;
pub mod unit;
pub mod value;

pub use error::{Result, TruncateError, UNIT_ERROR_MESSAGE, VALUE_ERROR_MESSAGE};
pub use instant::{Instant, MAX_TIME_MILLIS};
pub use parse::parse_date_string;
pub use truncate::{
    truncate, truncate_date, truncate_date_with_options, TruncateOptions, UnitCheck,
};
pub use unit::TimeUnit;
pub use value::{TimeValue, ToDate, ToJsDate};
