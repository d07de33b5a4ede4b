use crate::{ChronoField, ChronoUnit, ValueRange};

/// Error type for every fallible calendar operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// The year, month and day do not name a date in the chronology.
    #[error("{0}")]
    InvalidDate(String),

    /// A field value lies outside the field's valid range.
    #[error("Invalid value for {field} (valid values {range}): {value}")]
    InvalidValue {
        field: ChronoField,
        value: i64,
        range: ValueRange,
    },

    #[error("Unsupported field: {0}")]
    UnsupportedField(ChronoField),

    #[error("Unsupported unit: {0}")]
    UnsupportedUnit(ChronoUnit),

    /// An era belonging to another chronology was supplied.
    #[error("Era must be {expected}")]
    EraMismatch { expected: &'static str },

    #[error("Invalid era: {0}")]
    InvalidEra(i64),

    #[error("Chronology mismatch, expected: {expected}, actual: {actual}")]
    ChronologyMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// Two fields resolved to different values for the same target field.
    #[error("Conflict found: {field} {existing} differs from {field} {value}")]
    FieldConflict {
        field: ChronoField,
        existing: i64,
        value: i64,
    },

    #[error("Arithmetic overflow: {0}")]
    Overflow(&'static str),

    #[error("Invalid date format: {0}")]
    Parse(String),
}

impl CalendarError {
    pub(crate) fn invalid_date(msg: impl Into<String>) -> Self {
        Self::InvalidDate(msg.into())
    }
}
