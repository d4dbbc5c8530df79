//! Error types for truncate-date operations.

use std::convert::Infallible;

use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;

/// Message carried by [`TruncateError::UnrecognizedUnit`].
///
/// Consumers that match on error text can compare against this constant.
pub const UNIT_ERROR_MESSAGE: &str = "Unrecognized time unit.";

/// Message carried by [`TruncateError::UnrecognizedValue`].
pub const VALUE_ERROR_MESSAGE: &str = "Unrecognized time value.";

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TruncateError {
    /// The unit argument is not one of the seven recognized tags.
    #[error("{}", UNIT_ERROR_MESSAGE)]
    UnrecognizedUnit,

    /// The value argument has a shape that cannot be read as a time.
    #[error("{}", VALUE_ERROR_MESSAGE)]
    UnrecognizedValue,
}

impl TruncateError {
    /// The exact message text for this error.
    pub fn message(&self) -> &'static str {
        match self {
            TruncateError::UnrecognizedUnit => UNIT_ERROR_MESSAGE,
            TruncateError::UnrecognizedValue => VALUE_ERROR_MESSAGE,
        }
    }

    /// Stable snake_case identifier for this error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            TruncateError::UnrecognizedUnit => "unrecognized_unit",
            TruncateError::UnrecognizedValue => "unrecognized_value",
        }
    }
}

impl Serialize for TruncateError {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("TruncateError", 2)?;
        state.serialize_field("kind", self.kind())?;
        state.serialize_field("message", self.message())?;
        state.end()
    }
}

// Lets infallible `Into<TimeValue>` conversions go through the same
// `TryInto` bound as the fallible JSON boundary.
impl From<Infallible> for TruncateError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

pub type Result<T> = std::result::Result<T, TruncateError>;
