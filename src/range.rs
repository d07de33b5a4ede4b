use std::fmt;

use crate::{CalendarError, ChronoField};

/// The range of valid values for a field.
///
/// Fields whose maximum depends on the date (day of month, day of year)
/// carry both the smallest and the largest maximum, e.g. `1 - 28/31`.
/// A range is always non-empty: `min <= smallest_max <= largest_max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueRange {
    min: i64,
    smallest_max: i64,
    largest_max: i64,
}

impl ValueRange {
    /// Creates a fixed range.
    ///
    /// # Panics
    /// Panics in debug builds if `min > max`; every range in this crate is a constant.
    pub const fn of(min: i64, max: i64) -> Self {
        debug_assert!(min <= max);
        Self {
            min,
            smallest_max: max,
            largest_max: max,
        }
    }

    /// Creates a range whose maximum varies between `smallest_max` and `largest_max`.
    pub const fn of_variable(min: i64, smallest_max: i64, largest_max: i64) -> Self {
        debug_assert!(min <= smallest_max && smallest_max <= largest_max);
        Self {
            min,
            smallest_max,
            largest_max,
        }
    }

    pub const fn min(&self) -> i64 {
        self.min
    }

    /// Returns the smallest possible maximum
    pub const fn smallest_maximum(&self) -> i64 {
        self.smallest_max
    }

    /// Returns the largest possible maximum (the absolute upper bound)
    pub const fn max(&self) -> i64 {
        self.largest_max
    }

    pub const fn is_fixed(&self) -> bool {
        self.smallest_max == self.largest_max
    }

    /// Checks if every value in the range fits in an `i32`
    pub const fn is_int_value(&self) -> bool {
        self.min >= i32::MIN as i64 && self.largest_max <= i32::MAX as i64
    }

    pub const fn is_valid_value(&self, value: i64) -> bool {
        value >= self.min && value <= self.largest_max
    }

    pub const fn is_valid_int_value(&self, value: i64) -> bool {
        self.is_int_value() && self.is_valid_value(value)
    }

    /// Validates `value` against the range, naming `field` in the error.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidValue` if the value is outside the range.
    pub fn check_valid_value(&self, value: i64, field: ChronoField) -> Result<i64, CalendarError> {
        if self.is_valid_value(value) {
            Ok(value)
        } else {
            Err(CalendarError::InvalidValue {
                field,
                value,
                range: *self,
            })
        }
    }

    /// Validates `value` and narrows it to an `i32`.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidValue` if the value is outside the range
    /// or the range itself does not fit in an `i32`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn check_valid_int_value(&self, value: i64, field: ChronoField) -> Result<i32, CalendarError> {
        if self.is_valid_int_value(value) {
            Ok(value as i32)
        } else {
            Err(CalendarError::InvalidValue {
                field,
                value,
                range: *self,
            })
        }
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_fixed() {
            write!(f, "{} - {}", self.min, self.largest_max)
        } else {
            write!(f, "{} - {}/{}", self.min, self.smallest_max, self.largest_max)
        }
    }
}
