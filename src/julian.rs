//! The proleptic Julian calendar.
//!
//! Twelve months as in the Gregorian calendar, with a leap year every
//! fourth year and no century correction. Julian 0001-01-01 is ISO
//! 0000-12-30.

use std::fmt;
use std::str::FromStr;

use crate::consts::{
    DATE_SEPARATOR, DAYS_BEFORE_MONTH, DAYS_IN_MONTH, DAYS_PER_JULIAN_CYCLE, FEBRUARY, FEBRUARY_DAYS_LEAP,
    LEAP_YEAR_CYCLE, MONTH_NAMES, MONTHS_PER_YEAR,
};
use crate::era::{Era, JulianEra};
use crate::format::{self, impl_serde_as_string};
use crate::prelude::*;
use crate::{CalendarDate, CalendarError, ChronoField, Chronology, Clock, Temporal, ValueRange};

/// Epoch day of Julian 0000-03-01, the start of the March-based computational year
const DAYS_0000_03_01_TO_1970: i64 = 719_470;

pub(crate) const YEAR_RANGE: ValueRange = ValueRange::of(-999_998, 999_999);
const YEAR_OF_ERA_RANGE: ValueRange = ValueRange::of(1, 999_999);
const PROLEPTIC_MONTH_RANGE: ValueRange = ValueRange::of(-999_998 * 12, 999_999 * 12 + 11);
pub(crate) const EPOCH_DAY_RANGE: ValueRange =
    ValueRange::of(epoch_day(-999_998, 1, 1), epoch_day(999_999, 12, 31));

pub(crate) const MONTH_RANGE: ValueRange = ValueRange::of(1, 12);
pub(crate) const DAY_OF_MONTH_RANGE: ValueRange = ValueRange::of_variable(1, 28, 31);
const DAY_OF_YEAR_RANGE: ValueRange = ValueRange::of_variable(1, 365, 366);

pub const fn is_leap_year(year: i64) -> bool {
    year.rem_euclid(LEAP_YEAR_CYCLE) == 0
}

pub const fn days_in_month(year: i64, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MONTHS_PER_YEAR);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Days since ISO 1970-01-01 for a Julian date.
pub const fn epoch_day(year: i64, month: u8, day: u8) -> i64 {
    let month = month as i64;
    let year = if month <= 2 { year - 1 } else { year };
    let cycle = year.div_euclid(LEAP_YEAR_CYCLE);
    let year_of_cycle = year - cycle * LEAP_YEAR_CYCLE;
    let march_month = if month > 2 { month - 3 } else { month + 9 };
    let day_of_cycle = year_of_cycle * 365 + (153 * march_month + 2) / 5 + day as i64 - 1;
    cycle * DAYS_PER_JULIAN_CYCLE + day_of_cycle - DAYS_0000_03_01_TO_1970
}

/// Inverse of [`epoch_day`], returning (year, month, day).
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn from_epoch_day(epoch_day: i64) -> (i64, u8, u8) {
    let zero_day = epoch_day + DAYS_0000_03_01_TO_1970;
    let cycle = zero_day.div_euclid(DAYS_PER_JULIAN_CYCLE);
    let day_of_cycle = zero_day - cycle * DAYS_PER_JULIAN_CYCLE;
    // The leap day is the last day of the cycle
    let year_of_cycle = (day_of_cycle - day_of_cycle / 1_460) / 365;
    let day_of_year = day_of_cycle - 365 * year_of_cycle;
    let march_month = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * march_month + 2) / 5 + 1;
    let month = if march_month < 10 { march_month + 3 } else { march_month - 9 };
    let year = year_of_cycle + cycle * LEAP_YEAR_CYCLE + if month <= 2 { 1 } else { 0 };
    (year, month as u8, day as u8)
}

/// Rejects a day past the end of a twelve-month calendar's month.
pub(crate) fn check_day_of_month(year: i64, month: u8, day: u8, leap: bool) -> Result<(), CalendarError> {
    let length = if month == FEBRUARY && leap {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[usize::from(month)]
    };
    if day <= length {
        return Ok(());
    }
    let name = MONTH_NAMES[usize::from(month)];
    if month == FEBRUARY && day == FEBRUARY_DAYS_LEAP {
        Err(CalendarError::invalid_date(format!(
            "Invalid date '{name} {day}' as '{year}' is not a leap year"
        )))
    } else {
        Err(CalendarError::invalid_date(format!("Invalid date '{name} {day}'")))
    }
}

/// The Julian calendar system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display)]
#[display(fmt = "Julian")]
pub struct JulianChronology;

impl JulianChronology {
    pub const INSTANCE: Self = Self;
}

impl Chronology for JulianChronology {
    type Date = JulianDate;
    type Era = JulianEra;

    fn id(&self) -> &'static str {
        "Julian"
    }

    fn calendar_type(&self) -> Option<&'static str> {
        Some("julian")
    }

    fn is_leap_year(&self, proleptic_year: i64) -> bool {
        is_leap_year(proleptic_year)
    }

    fn eras(&self) -> &'static [JulianEra] {
        &[JulianEra::Bc, JulianEra::Ad]
    }

    fn era_for_year(&self, proleptic_year: i64) -> JulianEra {
        if proleptic_year >= 1 { JulianEra::Ad } else { JulianEra::Bc }
    }

    fn narrow_era(&self, era: Era) -> Result<JulianEra, CalendarError> {
        match era {
            Era::Julian(era) => Ok(era),
            _ => Err(CalendarError::EraMismatch {
                expected: "JulianEra",
            }),
        }
    }

    fn range(&self, field: ChronoField) -> Result<ValueRange, CalendarError> {
        Ok(match field {
            ChronoField::DayOfWeek | ChronoField::AlignedDayOfWeekInMonth | ChronoField::AlignedDayOfWeekInYear => {
                ValueRange::of(1, 7)
            },
            ChronoField::DayOfMonth => DAY_OF_MONTH_RANGE,
            ChronoField::DayOfYear => DAY_OF_YEAR_RANGE,
            ChronoField::EpochDay => EPOCH_DAY_RANGE,
            ChronoField::AlignedWeekOfMonth => ValueRange::of_variable(1, 4, 5),
            ChronoField::AlignedWeekOfYear => ValueRange::of(1, 53),
            ChronoField::MonthOfYear => MONTH_RANGE,
            ChronoField::ProlepticMonth => PROLEPTIC_MONTH_RANGE,
            ChronoField::YearOfEra => YEAR_OF_ERA_RANGE,
            ChronoField::Year => YEAR_RANGE,
            ChronoField::Era => ValueRange::of(0, 1),
            _ => return Err(CalendarError::UnsupportedField(field)),
        })
    }

    fn date(&self, proleptic_year: i32, month: i32, day_of_month: i32) -> Result<JulianDate, CalendarError> {
        JulianDate::of(proleptic_year, month, day_of_month)
    }

    fn date_year_day(&self, proleptic_year: i32, day_of_year: i32) -> Result<JulianDate, CalendarError> {
        JulianDate::of_year_day(proleptic_year, day_of_year)
    }

    fn date_epoch_day(&self, epoch_day: i64) -> Result<JulianDate, CalendarError> {
        JulianDate::of_epoch_day(epoch_day)
    }
}

/// A date in the Julian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JulianDate {
    year: i32,
    month: u8,
    day: u8,
}

impl JulianDate {
    /// # Errors
    /// Returns `CalendarError::InvalidValue` for out of range components and
    /// `CalendarError::InvalidDate` for a day the month does not have.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn of(year: i32, month: i32, day: i32) -> Result<Self, CalendarError> {
        YEAR_RANGE.check_valid_value(i64::from(year), ChronoField::Year)?;
        let month = MONTH_RANGE.check_valid_int_value(i64::from(month), ChronoField::MonthOfYear)? as u8;
        let day = DAY_OF_MONTH_RANGE.check_valid_int_value(i64::from(day), ChronoField::DayOfMonth)? as u8;
        check_day_of_month(i64::from(year), month, day, is_leap_year(i64::from(year)))?;
        Ok(Self { year, month, day })
    }

    /// # Errors
    /// Returns `CalendarError::InvalidValue` for out of range values and
    /// `CalendarError::InvalidDate` for day 366 of a common year.
    pub fn of_year_day(year: i32, day_of_year: i32) -> Result<Self, CalendarError> {
        YEAR_RANGE.check_valid_value(i64::from(year), ChronoField::Year)?;
        DAY_OF_YEAR_RANGE.check_valid_value(i64::from(day_of_year), ChronoField::DayOfYear)?;
        if day_of_year == 366 && !is_leap_year(i64::from(year)) {
            return Err(CalendarError::invalid_date(format!(
                "Invalid date 'DayOfYear 366' as '{year}' is not a leap year"
            )));
        }
        Self::of_epoch_day(epoch_day(i64::from(year), 1, 1) + i64::from(day_of_year) - 1)
    }

    /// # Errors
    /// Returns `CalendarError::InvalidValue` outside the supported years.
    #[allow(clippy::cast_possible_truncation)]
    pub fn of_epoch_day(epoch_day: i64) -> Result<Self, CalendarError> {
        EPOCH_DAY_RANGE.check_valid_value(epoch_day, ChronoField::EpochDay)?;
        let (year, month, day) = from_epoch_day(epoch_day);
        Ok(Self {
            year: year as i32,
            month,
            day,
        })
    }

    /// # Errors
    /// See [`Chronology::date_from`].
    pub fn from_temporal(temporal: &(impl Temporal + ?Sized)) -> Result<Self, CalendarError> {
        JulianChronology::INSTANCE.date_from(temporal)
    }

    /// Today in the system time zone.
    ///
    /// # Errors
    /// See [`Chronology::date_now`].
    pub fn now() -> Result<Self, CalendarError> {
        JulianChronology::INSTANCE.date_now()
    }

    /// # Errors
    /// See [`Chronology::date_now_with`].
    pub fn now_with(clock: &(impl Clock + ?Sized)) -> Result<Self, CalendarError> {
        JulianChronology::INSTANCE.date_now_with(clock)
    }
}

impl CalendarDate for JulianDate {
    type Chronology = JulianChronology;

    fn chronology(&self) -> JulianChronology {
        JulianChronology::INSTANCE
    }

    fn proleptic_year(&self) -> i32 {
        self.year
    }

    fn month(&self) -> u8 {
        self.month
    }

    fn day_of_month(&self) -> u8 {
        self.day
    }

    fn day_of_year(&self) -> u16 {
        let leap_day = u16::from(self.month > FEBRUARY && is_leap_year(i64::from(self.year)));
        DAYS_BEFORE_MONTH[usize::from(self.month)] + u16::from(self.day) + leap_day
    }

    fn to_epoch_day(&self) -> i64 {
        epoch_day(i64::from(self.year), self.month, self.day)
    }

    fn length_of_month(&self) -> u8 {
        days_in_month(i64::from(self.year), self.month)
    }

    fn length_of_year(&self) -> u16 {
        if is_leap_year(i64::from(self.year)) { 366 } else { 365 }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn resolve_previous(&self, proleptic_year: i64, month: u8, day_of_month: u8) -> Result<Self, CalendarError> {
        let year = YEAR_RANGE.check_valid_int_value(proleptic_year, ChronoField::Year)?;
        Ok(Self {
            year,
            month,
            day: day_of_month.min(days_in_month(proleptic_year, month)),
        })
    }
}

impl Temporal for JulianDate {
    fn epoch_day(&self) -> Result<i64, CalendarError> {
        Ok(self.to_epoch_day())
    }
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format::write_date(f, self, DATE_SEPARATOR)
    }
}

impl FromStr for JulianDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        format::parse_date(JulianChronology::INSTANCE, s, DATE_SEPARATOR)
    }
}

impl_serde_as_string!(JulianDate);
