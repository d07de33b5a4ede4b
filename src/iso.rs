//! The ISO proleptic Gregorian calendar.
//!
//! Every chronology converts through the epoch day defined here, so the
//! math covers the full year range used by the other calendars rather than
//! the narrower range of `chrono::NaiveDate`.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_PER_GREGORIAN_CYCLE, FEBRUARY, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MONTHS_PER_YEAR,
};
use crate::{CalendarError, ChronoField, Temporal, ValueRange};

/// Epoch day of 0000-03-01, the start of the March-based computational year
const DAYS_0000_03_01_TO_1970: i64 = 719_468;

pub(crate) const YEAR_RANGE: ValueRange = ValueRange::of(-999_999_999, 999_999_999);
pub(crate) const EPOCH_DAY_RANGE: ValueRange = ValueRange::of(
    epoch_day(-999_999_999, 1, 1),
    epoch_day(999_999_999, 12, 31),
);

pub const fn is_leap_year(year: i64) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: i64, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MONTHS_PER_YEAR);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Days since 1970-01-01 for a proleptic Gregorian date.
///
/// Counts from a year starting in March so the leap day falls last.
pub const fn epoch_day(year: i64, month: u8, day: u8) -> i64 {
    let month = month as i64;
    let year = if month <= 2 { year - 1 } else { year };
    let cycle = year.div_euclid(GREGORIAN_CYCLE);
    let year_of_cycle = year - cycle * GREGORIAN_CYCLE;
    let march_month = if month > 2 { month - 3 } else { month + 9 };
    let day_of_year = (153 * march_month + 2) / 5 + day as i64 - 1;
    let day_of_cycle = year_of_cycle * 365 + year_of_cycle / 4 - year_of_cycle / 100 + day_of_year;
    cycle * DAYS_PER_GREGORIAN_CYCLE + day_of_cycle - DAYS_0000_03_01_TO_1970
}

/// Inverse of [`epoch_day`], returning (year, month, day).
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn from_epoch_day(epoch_day: i64) -> (i64, u8, u8) {
    let zero_day = epoch_day + DAYS_0000_03_01_TO_1970;
    let cycle = zero_day.div_euclid(DAYS_PER_GREGORIAN_CYCLE);
    let day_of_cycle = zero_day - cycle * DAYS_PER_GREGORIAN_CYCLE;
    let year_of_cycle =
        (day_of_cycle - day_of_cycle / 1_460 + day_of_cycle / 36_524 - day_of_cycle / 146_096) / 365;
    let day_of_year = day_of_cycle - (365 * year_of_cycle + year_of_cycle / 4 - year_of_cycle / 100);
    let march_month = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * march_month + 2) / 5 + 1;
    let month = if march_month < 10 { march_month + 3 } else { march_month - 9 };
    let year = year_of_cycle + cycle * GREGORIAN_CYCLE + if month <= 2 { 1 } else { 0 };
    (year, month as u8, day as u8)
}

/// Day of week, Monday = 1 through Sunday = 7.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn day_of_week(epoch_day: i64) -> u8 {
    ((epoch_day + 3).rem_euclid(7) + 1) as u8
}

/// A date in the ISO proleptic calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDate {
    year: i32,
    month: u8,
    day: u8,
}

impl IsoDate {
    /// Creates an ISO date, validating every component.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidValue` for out of range components and
    /// `CalendarError::InvalidDate` for a day the month does not have.
    pub fn of(year: i32, month: i32, day: i32) -> Result<Self, CalendarError> {
        YEAR_RANGE.check_valid_value(i64::from(year), ChronoField::Year)?;
        let month = ValueRange::of(1, 12).check_valid_value(i64::from(month), ChronoField::MonthOfYear)?;
        let day = ValueRange::of_variable(1, 28, 31).check_valid_value(i64::from(day), ChronoField::DayOfMonth)?;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (month, day) = (month as u8, day as u8);
        if day > days_in_month(i64::from(year), month) {
            return Err(CalendarError::invalid_date(format!(
                "Invalid date {year:04}-{month:02}-{day:02}"
            )));
        }
        Ok(Self { year, month, day })
    }

    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// # Errors
    /// Returns `CalendarError::InvalidValue` if the epoch day is beyond the supported years.
    #[allow(clippy::cast_possible_truncation)]
    pub fn of_epoch_day(epoch_day: i64) -> Result<Self, CalendarError> {
        EPOCH_DAY_RANGE.check_valid_value(epoch_day, ChronoField::EpochDay)?;
        let (year, month, day) = from_epoch_day(epoch_day);
        Ok(Self::new_unchecked(year as i32, month, day))
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day_of_month(&self) -> u8 {
        self.day
    }

    pub const fn to_epoch_day(&self) -> i64 {
        epoch_day(self.year as i64, self.month, self.day)
    }

    pub const fn is_leap_year(&self) -> bool {
        is_leap_year(self.year as i64)
    }

    pub const fn length_of_month(&self) -> u8 {
        days_in_month(self.year as i64, self.month)
    }

    /// Day of week, Monday = 1 through Sunday = 7
    pub const fn day_of_week(&self) -> u8 {
        day_of_week(self.to_epoch_day())
    }

    /// Converts to a `chrono` date, if the year is within `chrono`'s range
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, u32::from(self.month), u32::from(self.day))
    }
}

impl From<NaiveDate> for IsoDate {
    #[allow(clippy::cast_possible_truncation)]
    fn from(date: NaiveDate) -> Self {
        Self::new_unchecked(date.year(), date.month() as u8, date.day() as u8)
    }
}

impl Temporal for IsoDate {
    fn epoch_day(&self) -> Result<i64, CalendarError> {
        Ok(self.to_epoch_day())
    }
}

/// `NaiveDate::num_days_from_ce` of 1970-01-01
const CE_DAYS_TO_1970: i64 = 719_163;

impl Temporal for NaiveDate {
    fn epoch_day(&self) -> Result<i64, CalendarError> {
        Ok(i64::from(self.num_days_from_ce()) - CE_DAYS_TO_1970)
    }
}

impl Temporal for NaiveDateTime {
    fn epoch_day(&self) -> Result<i64, CalendarError> {
        self.date().epoch_day()
    }
}

impl<Tz: TimeZone> Temporal for DateTime<Tz> {
    fn epoch_day(&self) -> Result<i64, CalendarError> {
        self.date_naive().epoch_day()
    }
}

impl Temporal for NaiveTime {
    fn epoch_day(&self) -> Result<i64, CalendarError> {
        Err(CalendarError::UnsupportedField(ChronoField::EpochDay))
    }
}

impl fmt::Display for IsoDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year = self.year;
        match year.unsigned_abs().cmp(&10_000) {
            Ordering::Less if year < 0 => write!(f, "-{:04}", year.unsigned_abs())?,
            Ordering::Less => write!(f, "{year:04}")?,
            _ if year > 0 => write!(f, "+{year}")?,
            _ => write!(f, "{year}")?,
        }
        write!(f, "-{:02}-{:02}", self.month, self.day)
    }
}

impl FromStr for IsoDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CalendarError::Parse("Empty date string".to_owned()));
        }
        // A leading sign belongs to the year, not to a separator
        let (sign, unsigned) = match trimmed.as_bytes()[0] {
            b'-' => (-1, &trimmed[1..]),
            b'+' => (1, &trimmed[1..]),
            _ => (1, trimmed),
        };
        let parts: Vec<&str> = unsigned.split(crate::DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(CalendarError::Parse(trimmed.to_owned()));
        };
        let parse = |part: &str| {
            part.parse::<i32>()
                .map_err(|_| CalendarError::Parse(trimmed.to_owned()))
        };
        Self::of(sign * parse(year)?, parse(month)?, parse(day)?)
    }
}

impl Serialize for IsoDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for IsoDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
