//! The International Fixed calendar.
//!
//! Thirteen months of 28 days, each starting on the same weekday, plus one
//! or two days that belong to no week: Year Day (13/29) closes every year
//! and Leap Day (6/29) follows June in Gregorian leap years. Those two
//! days report 0 for every day-of-week and week field.

use std::fmt;
use std::str::FromStr;

use crate::consts::{DAYS_PER_WEEK, SLASH_SEPARATOR};
use crate::era::{Era, InternationalFixedEra};
use crate::format::{self, impl_serde_as_string};
use crate::prelude::*;
use crate::{CalendarDate, CalendarError, ChronoField, Chronology, Clock, Temporal, ValueRange, iso};

pub const MONTHS_PER_YEAR: u8 = 13;
pub const DAYS_PER_MONTH: u8 = 28;
pub const WEEKS_PER_MONTH: u8 = 4;
pub const WEEKS_PER_YEAR: i64 = 52;

const LEAP_MONTH: u8 = 6;
const INTERCALARY_DAY: u8 = 29;
/// Day of year of Leap Day in a leap year
const LEAP_DAY_OF_YEAR: u16 = 169;

const YEAR_RANGE: ValueRange = ValueRange::of(1, 1_000_000);
const MONTH_RANGE: ValueRange = ValueRange::of(1, 13);
const DAY_OF_MONTH_RANGE: ValueRange = ValueRange::of_variable(1, 28, 29);
const DAY_OF_YEAR_RANGE: ValueRange = ValueRange::of_variable(1, 365, 366);
const PROLEPTIC_MONTH_RANGE: ValueRange = ValueRange::of(13, 1_000_000 * 13 + 12);
const EPOCH_DAY_RANGE: ValueRange = ValueRange::of(epoch_day(1, 1, 1), epoch_day(1_000_000, 13, 29));

const NORMAL_DAY_OF_WEEK_RANGE: ValueRange = ValueRange::of(1, 7);
const INTERCALARY_RANGE: ValueRange = ValueRange::of(0, 0);

/// Gregorian leap rule
pub const fn is_leap_year(year: i64) -> bool {
    iso::is_leap_year(year)
}

pub const fn days_in_month(year: i64, month: u8) -> u8 {
    if month == MONTHS_PER_YEAR || (month == LEAP_MONTH && is_leap_year(year)) {
        INTERCALARY_DAY
    } else {
        DAYS_PER_MONTH
    }
}

pub const fn day_of_year(year: i64, month: u8, day: u8) -> u16 {
    let leap_day = if month > LEAP_MONTH && is_leap_year(year) { 1 } else { 0 };
    (month as u16 - 1) * DAYS_PER_MONTH as u16 + day as u16 + leap_day
}

pub const fn epoch_day(year: i64, month: u8, day: u8) -> i64 {
    iso::epoch_day(year, 1, 1) + day_of_year(year, month, day) as i64 - 1
}

/// Inverse of [`epoch_day`], returning (year, month, day).
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn from_epoch_day(epoch_day: i64) -> (i64, u8, u8) {
    let (year, _, _) = iso::from_epoch_day(epoch_day);
    let day_of_year = (epoch_day - iso::epoch_day(year, 1, 1) + 1) as u16;
    let leap = is_leap_year(year);
    let days_in_year = if leap { 366 } else { 365 };

    if leap && day_of_year == LEAP_DAY_OF_YEAR {
        return (year, LEAP_MONTH, INTERCALARY_DAY);
    }
    if day_of_year == days_in_year {
        return (year, MONTHS_PER_YEAR, INTERCALARY_DAY);
    }
    let index = if leap && day_of_year > LEAP_DAY_OF_YEAR { day_of_year - 2 } else { day_of_year - 1 };
    let month = index / DAYS_PER_MONTH as u16 + 1;
    let day = index % DAYS_PER_MONTH as u16 + 1;
    (year, month as u8, day as u8)
}

/// The International Fixed calendar system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display)]
#[display(fmt = "Ifc")]
pub struct InternationalFixedChronology;

impl InternationalFixedChronology {
    pub const INSTANCE: Self = Self;
}

impl Chronology for InternationalFixedChronology {
    type Date = InternationalFixedDate;
    type Era = InternationalFixedEra;

    fn id(&self) -> &'static str {
        "Ifc"
    }

    fn calendar_type(&self) -> Option<&'static str> {
        None
    }

    fn is_leap_year(&self, proleptic_year: i64) -> bool {
        is_leap_year(proleptic_year)
    }

    fn eras(&self) -> &'static [InternationalFixedEra] {
        &[InternationalFixedEra::Ce]
    }

    fn era_for_year(&self, _proleptic_year: i64) -> InternationalFixedEra {
        InternationalFixedEra::Ce
    }

    fn narrow_era(&self, era: Era) -> Result<InternationalFixedEra, CalendarError> {
        match era {
            Era::InternationalFixed(era) => Ok(era),
            _ => Err(CalendarError::EraMismatch {
                expected: "InternationalFixedEra",
            }),
        }
    }

    fn range(&self, field: ChronoField) -> Result<ValueRange, CalendarError> {
        Ok(match field {
            ChronoField::DayOfWeek | ChronoField::AlignedDayOfWeekInMonth | ChronoField::AlignedDayOfWeekInYear => {
                ValueRange::of(0, 7)
            },
            ChronoField::DayOfMonth => DAY_OF_MONTH_RANGE,
            ChronoField::DayOfYear => DAY_OF_YEAR_RANGE,
            ChronoField::EpochDay => EPOCH_DAY_RANGE,
            ChronoField::AlignedWeekOfMonth => ValueRange::of(0, i64::from(WEEKS_PER_MONTH)),
            ChronoField::AlignedWeekOfYear => ValueRange::of(0, WEEKS_PER_YEAR),
            ChronoField::MonthOfYear => MONTH_RANGE,
            ChronoField::ProlepticMonth => PROLEPTIC_MONTH_RANGE,
            ChronoField::YearOfEra | ChronoField::Year => YEAR_RANGE,
            ChronoField::Era => ValueRange::of(1, 1),
            _ => return Err(CalendarError::UnsupportedField(field)),
        })
    }

    fn date(&self, proleptic_year: i32, month: i32, day_of_month: i32) -> Result<InternationalFixedDate, CalendarError> {
        InternationalFixedDate::of(proleptic_year, month, day_of_month)
    }

    fn date_year_day(&self, proleptic_year: i32, day_of_year: i32) -> Result<InternationalFixedDate, CalendarError> {
        InternationalFixedDate::of_year_day(proleptic_year, day_of_year)
    }

    fn date_epoch_day(&self, epoch_day: i64) -> Result<InternationalFixedDate, CalendarError> {
        InternationalFixedDate::of_epoch_day(epoch_day)
    }

    /// Weeks sit on the 52-week grid, four to a month, so Leap Day never
    /// shifts the weeks after it.
    fn date_aligned_week_of_year(
        &self,
        proleptic_year: i32,
        week: i32,
        day: i32,
    ) -> Result<InternationalFixedDate, CalendarError> {
        let week = ValueRange::of(1, WEEKS_PER_YEAR)
            .check_valid_int_value(i64::from(week), ChronoField::AlignedWeekOfYear)?;
        let day = ValueRange::of(1, i64::from(DAYS_PER_WEEK))
            .check_valid_int_value(i64::from(day), ChronoField::AlignedDayOfWeekInYear)?;
        let weeks_per_month = i32::from(WEEKS_PER_MONTH);
        let month = (week - 1) / weeks_per_month + 1;
        let day_of_month = ((week - 1) % weeks_per_month) * i32::from(DAYS_PER_WEEK) + day;
        InternationalFixedDate::of(proleptic_year, month, day_of_month)
    }

    fn months_in_year(&self) -> u8 {
        MONTHS_PER_YEAR
    }
}

/// A date in the International Fixed calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InternationalFixedDate {
    year: i32,
    month: u8,
    day: u8,
}

impl InternationalFixedDate {
    /// # Errors
    /// Returns `CalendarError::InvalidValue` for out of range components and
    /// `CalendarError::InvalidDate` for a 29th outside June and the
    /// thirteenth month, or Leap Day in a common year.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn of(year: i32, month: i32, day: i32) -> Result<Self, CalendarError> {
        YEAR_RANGE.check_valid_value(i64::from(year), ChronoField::Year)?;
        let month = MONTH_RANGE.check_valid_int_value(i64::from(month), ChronoField::MonthOfYear)? as u8;
        let day = DAY_OF_MONTH_RANGE.check_valid_int_value(i64::from(day), ChronoField::DayOfMonth)? as u8;
        if day == INTERCALARY_DAY {
            if month == LEAP_MONTH && !is_leap_year(i64::from(year)) {
                return Err(CalendarError::invalid_date(format!(
                    "Invalid Leap Day as '{year}' is not a leap year"
                )));
            }
            if month != LEAP_MONTH && month != MONTHS_PER_YEAR {
                return Err(CalendarError::invalid_date(format!(
                    "Invalid date: {year}/{month}/{day}"
                )));
            }
        }
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
        Self::of_epoch_day(iso::epoch_day(i64::from(year), 1, 1) + i64::from(day_of_year) - 1)
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
        InternationalFixedChronology::INSTANCE.date_from(temporal)
    }

    /// # Errors
    /// See [`Chronology::date_now`].
    pub fn now() -> Result<Self, CalendarError> {
        InternationalFixedChronology::INSTANCE.date_now()
    }

    /// # Errors
    /// See [`Chronology::date_now_with`].
    pub fn now_with(clock: &(impl Clock + ?Sized)) -> Result<Self, CalendarError> {
        InternationalFixedChronology::INSTANCE.date_now_with(clock)
    }

    /// True for Leap Day and Year Day
    pub const fn is_intercalary(&self) -> bool {
        self.day == INTERCALARY_DAY
    }

    pub const fn is_leap_day(&self) -> bool {
        self.month == LEAP_MONTH && self.day == INTERCALARY_DAY
    }

    pub const fn is_year_day(&self) -> bool {
        self.month == MONTHS_PER_YEAR && self.day == INTERCALARY_DAY
    }

    /// Weeks since the start of year 0 on the 52-week grid
    fn proleptic_week(&self) -> i64 {
        i64::from(self.year) * WEEKS_PER_YEAR + i64::from(self.aligned_week_of_year()) - 1
    }

    /// Ordering key on the week grid: an intercalary day sorts between the
    /// last day of its week and the first day of the next
    fn week_key(&self) -> i64 {
        if self.is_intercalary() {
            let last_normal = Self {
                day: DAYS_PER_MONTH,
                ..*self
            };
            last_normal.week_key() + 1
        } else {
            self.proleptic_week() * 16 + i64::from(self.day_of_week()) * 2
        }
    }
}

impl CalendarDate for InternationalFixedDate {
    type Chronology = InternationalFixedChronology;

    fn chronology(&self) -> InternationalFixedChronology {
        InternationalFixedChronology::INSTANCE
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
        day_of_year(i64::from(self.year), self.month, self.day)
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

    /// Sunday-first weekday of the fixed month grid, 0 on intercalary days
    fn day_of_week(&self) -> u8 {
        if self.is_intercalary() {
            0
        } else {
            (self.day - 1) % DAYS_PER_WEEK + 1
        }
    }

    fn aligned_day_of_week_in_month(&self) -> u8 {
        self.day_of_week()
    }

    fn aligned_day_of_week_in_year(&self) -> u8 {
        self.day_of_week()
    }

    fn aligned_week_of_month(&self) -> u8 {
        if self.is_intercalary() {
            0
        } else {
            (self.day - 1) / DAYS_PER_WEEK + 1
        }
    }

    fn aligned_week_of_year(&self) -> u8 {
        if self.is_intercalary() {
            0
        } else {
            (self.month - 1) * WEEKS_PER_MONTH + self.aligned_week_of_month()
        }
    }

    fn range_chrono(&self, field: ChronoField) -> Result<ValueRange, CalendarError> {
        let intercalary = self.is_intercalary();
        match field {
            ChronoField::DayOfWeek | ChronoField::AlignedDayOfWeekInMonth | ChronoField::AlignedDayOfWeekInYear => {
                Ok(if intercalary { INTERCALARY_RANGE } else { NORMAL_DAY_OF_WEEK_RANGE })
            },
            ChronoField::AlignedWeekOfMonth => Ok(if intercalary {
                INTERCALARY_RANGE
            } else {
                ValueRange::of(1, i64::from(WEEKS_PER_MONTH))
            }),
            ChronoField::AlignedWeekOfYear => Ok(if intercalary {
                INTERCALARY_RANGE
            } else {
                ValueRange::of(1, WEEKS_PER_YEAR)
            }),
            ChronoField::DayOfMonth => Ok(ValueRange::of(1, i64::from(self.length_of_month()))),
            ChronoField::DayOfYear => Ok(ValueRange::of(1, i64::from(self.length_of_year()))),
            _ => self.chronology().range(field),
        }
    }

    fn resolve_previous(&self, proleptic_year: i64, month: u8, day_of_month: u8) -> Result<Self, CalendarError> {
        let year = YEAR_RANGE.check_valid_int_value(proleptic_year, ChronoField::Year)?;
        Ok(Self {
            year,
            month,
            day: day_of_month.min(days_in_month(proleptic_year, month)),
        })
    }

    /// Moves along the 52-week grid, skipping intercalary days, so the
    /// weekday is kept. An intercalary start moves by whole days instead and
    /// lands on the grid, so moving back never returns to the intercalary
    /// day: Leap Day plus one week is 7/07, and 7/07 minus one week is 6/28.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn plus_weeks(&self, weeks: i64) -> Result<Self, CalendarError> {
        if weeks == 0 {
            return Ok(*self);
        }
        if self.is_intercalary() {
            let days = weeks
                .checked_mul(i64::from(DAYS_PER_WEEK))
                .ok_or(CalendarError::Overflow("weeks"))?;
            return self.plus_days(days);
        }
        let target = self
            .proleptic_week()
            .checked_add(weeks)
            .ok_or(CalendarError::Overflow("weeks"))?;
        let year = target.div_euclid(WEEKS_PER_YEAR);
        let week_of_year = target.rem_euclid(WEEKS_PER_YEAR) as u8;
        let month = week_of_year / WEEKS_PER_MONTH + 1;
        let day = (week_of_year % WEEKS_PER_MONTH) * DAYS_PER_WEEK + self.day_of_week();
        self.resolve_previous(year, month, day)
    }

    fn weeks_until(&self, end: &Self) -> i64 {
        (end.week_key() - self.week_key()) / 16
    }
}

impl Temporal for InternationalFixedDate {
    fn epoch_day(&self) -> Result<i64, CalendarError> {
        Ok(self.to_epoch_day())
    }
}

impl fmt::Display for InternationalFixedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format::write_date(f, self, SLASH_SEPARATOR)
    }
}

impl FromStr for InternationalFixedDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        format::parse_date(InternationalFixedChronology::INSTANCE, s, SLASH_SEPARATOR)
    }
}

impl_serde_as_string!(InternationalFixedDate);
