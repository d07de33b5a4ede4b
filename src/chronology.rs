//! The behaviour shared by every calendar system.
//!
//! [`Chronology`] is the factory for one calendar system and
//! [`CalendarDate`] is a date within it. Each calendar supplies its epoch day
//! math and month lengths; field access, adjustment, arithmetic and
//! differencing are provided here once, on top of those primitives.

use std::fmt;
use std::hash::Hash;

use chrono::{Local, TimeZone, Utc};

use crate::consts::{DAYS_PER_WEEK, MONTHS_PER_YEAR};
use crate::era::{CalendarEra, Era};
use crate::resolve::{self, FieldValues};
use crate::{CalendarError, ChronoField, ChronoPeriod, ChronoUnit, Clock, ResolverStyle, ValueRange, iso};

/// Anything that can be located on the epoch-day line.
pub trait Temporal {
    /// Days since 1970-01-01 (ISO).
    ///
    /// # Errors
    /// Returns `CalendarError::UnsupportedField` if the value has no date.
    fn epoch_day(&self) -> Result<i64, CalendarError>;
}

/// A calendar system: validation rules plus the factory for its dates.
///
/// Implementations are small `Copy` values; the canonical instance of each
/// is an associated `INSTANCE` constant.
pub trait Chronology: Copy + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static {
    type Date: CalendarDate<Chronology = Self>;
    type Era: CalendarEra;

    /// Short identifier, also the first word of every date's display form
    fn id(&self) -> &'static str;

    /// CLDR calendar type, if the calendar has one
    fn calendar_type(&self) -> Option<&'static str>;

    fn is_leap_year(&self, proleptic_year: i64) -> bool;

    /// Every era of this chronology, in ascending order
    fn eras(&self) -> &'static [Self::Era];

    /// The era containing `proleptic_year`
    fn era_for_year(&self, proleptic_year: i64) -> Self::Era;

    /// Narrows a crate-wide era to this chronology's era type.
    ///
    /// # Errors
    /// Returns `CalendarError::EraMismatch` for an era of another chronology.
    fn narrow_era(&self, era: Era) -> Result<Self::Era, CalendarError>;

    /// Range of `field` over every date of this chronology.
    ///
    /// # Errors
    /// Returns `CalendarError::UnsupportedField` for time based fields.
    fn range(&self, field: ChronoField) -> Result<ValueRange, CalendarError>;

    /// # Errors
    /// Returns `CalendarError::InvalidValue` or `CalendarError::InvalidDate`
    /// if the date does not exist.
    fn date(&self, proleptic_year: i32, month: i32, day_of_month: i32) -> Result<Self::Date, CalendarError>;

    /// # Errors
    /// Returns `CalendarError::InvalidValue` or `CalendarError::InvalidDate`
    /// if the year does not have that many days.
    fn date_year_day(&self, proleptic_year: i32, day_of_year: i32) -> Result<Self::Date, CalendarError>;

    /// # Errors
    /// Returns `CalendarError::InvalidValue` outside the supported years.
    fn date_epoch_day(&self, epoch_day: i64) -> Result<Self::Date, CalendarError>;

    /// Builds the date at an aligned week of a month and a day within it.
    /// Aligned weeks run in sevens from the first day of the month.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidValue` or `CalendarError::InvalidDate`
    /// if the month cannot hold the date.
    fn date_aligned_week_of_month(
        &self,
        proleptic_year: i32,
        month: i32,
        week: i32,
        day: i32,
    ) -> Result<Self::Date, CalendarError> {
        let offset = (i64::from(week) - 1) * 7 + i64::from(day) - 1;
        self.date(proleptic_year, month, 1)?.plus_days(offset)
    }

    /// Builds the date at an aligned week of the year and a day within it.
    /// Aligned weeks run in sevens from the first day of the year unless the
    /// calendar lays its weeks out differently.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidValue` or `CalendarError::InvalidDate`
    /// if the year cannot hold the date.
    fn date_aligned_week_of_year(&self, proleptic_year: i32, week: i32, day: i32) -> Result<Self::Date, CalendarError> {
        let offset = (i64::from(week) - 1) * 7 + i64::from(day) - 1;
        self.date_year_day(proleptic_year, 1)?.plus_days(offset)
    }

    fn months_in_year(&self) -> u8 {
        MONTHS_PER_YEAR
    }

    /// # Errors
    /// Returns `CalendarError::InvalidEra` if no era has that value.
    fn era_of(&self, value: i32) -> Result<Self::Era, CalendarError> {
        self.eras()
            .iter()
            .copied()
            .find(|era| era.value() == value)
            .ok_or(CalendarError::InvalidEra(i64::from(value)))
    }

    /// Converts a year of era to a proleptic year.
    ///
    /// # Errors
    /// Returns `CalendarError::EraMismatch` for a foreign era and
    /// `CalendarError::InvalidValue` if the year of era is out of range.
    fn proleptic_year(&self, era: impl Into<Era>, year_of_era: i32) -> Result<i32, CalendarError> {
        let era = self.narrow_era(era.into())?;
        self.range(ChronoField::YearOfEra)?
            .check_valid_value(i64::from(year_of_era), ChronoField::YearOfEra)?;
        Ok(if era.value() == 1 { year_of_era } else { 1 - year_of_era })
    }

    /// # Errors
    /// See [`Chronology::proleptic_year`] and [`Chronology::date`].
    fn date_era(
        &self,
        era: impl Into<Era>,
        year_of_era: i32,
        month: i32,
        day_of_month: i32,
    ) -> Result<Self::Date, CalendarError> {
        let year = self.proleptic_year(era, year_of_era)?;
        self.date(year, month, day_of_month)
    }

    /// # Errors
    /// See [`Chronology::proleptic_year`] and [`Chronology::date_year_day`].
    fn date_era_year_day(&self, era: impl Into<Era>, year_of_era: i32, day_of_year: i32) -> Result<Self::Date, CalendarError> {
        let year = self.proleptic_year(era, year_of_era)?;
        self.date_year_day(year, day_of_year)
    }

    /// Converts any temporal value through its epoch day.
    ///
    /// # Errors
    /// Returns `CalendarError::UnsupportedField` if the value has no date,
    /// or `CalendarError::InvalidValue` if it lies outside this chronology.
    fn date_from(&self, temporal: &(impl Temporal + ?Sized)) -> Result<Self::Date, CalendarError> {
        self.date_epoch_day(temporal.epoch_day()?)
    }

    /// Today in the system time zone.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidValue` if today is outside this chronology.
    fn date_now(&self) -> Result<Self::Date, CalendarError> {
        self.date_now_in(&Local)
    }

    /// Today in `zone`.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidValue` if today is outside this chronology.
    fn date_now_in<Tz: TimeZone>(&self, zone: &Tz) -> Result<Self::Date, CalendarError> {
        self.date_from(&Utc::now().with_timezone(zone))
    }

    /// Today according to `clock`.
    ///
    /// # Errors
    /// Propagates clock failures such as `CalendarError::Overflow`.
    fn date_now_with(&self, clock: &(impl Clock + ?Sized)) -> Result<Self::Date, CalendarError> {
        self.date_from(&clock.now()?)
    }

    fn period(&self, years: i32, months: i32, days: i32) -> ChronoPeriod<Self> {
        ChronoPeriod::new(*self, years, months, days)
    }

    /// Resolves a map of field values to a date, removing the fields used.
    ///
    /// Returns `Ok(None)` when the map does not hold enough fields.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidValue`, `CalendarError::FieldConflict` or
    /// `CalendarError::InvalidDate` for contradictory or out of range fields.
    fn resolve_date(&self, fields: &mut FieldValues, style: ResolverStyle) -> Result<Option<Self::Date>, CalendarError> {
        resolve::resolve_date(self, fields, style)
    }
}

fn overflow(what: &'static str) -> CalendarError {
    CalendarError::Overflow(what)
}

/// A date in one chronology.
///
/// Implementors provide the stored components and calendar lengths; every
/// other operation has a default built on them. Dates are immutable: all
/// adjustments return a new value.
pub trait CalendarDate: Copy + Eq + Ord + Hash + fmt::Debug + fmt::Display + Temporal {
    type Chronology: Chronology<Date = Self>;

    fn chronology(&self) -> Self::Chronology;
    fn proleptic_year(&self) -> i32;
    fn month(&self) -> u8;
    fn day_of_month(&self) -> u8;
    fn day_of_year(&self) -> u16;
    fn to_epoch_day(&self) -> i64;
    fn length_of_month(&self) -> u8;
    fn length_of_year(&self) -> u16;

    /// Builds a date from components, clamping an overlong day of month to
    /// the last day of that month.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidValue` if the year is out of range.
    fn resolve_previous(&self, proleptic_year: i64, month: u8, day_of_month: u8) -> Result<Self, CalendarError>;

    fn is_leap_year(&self) -> bool {
        self.chronology().is_leap_year(i64::from(self.proleptic_year()))
    }

    fn era(&self) -> <Self::Chronology as Chronology>::Era {
        self.chronology().era_for_year(i64::from(self.proleptic_year()))
    }

    fn year_of_era(&self) -> i32 {
        let year = self.proleptic_year();
        if year >= 1 { year } else { 1 - year }
    }

    /// Monday = 1 through Sunday = 7
    fn day_of_week(&self) -> u8 {
        iso::day_of_week(self.to_epoch_day())
    }

    fn aligned_day_of_week_in_month(&self) -> u8 {
        (self.day_of_month() - 1) % DAYS_PER_WEEK + 1
    }

    #[allow(clippy::cast_possible_truncation)]
    fn aligned_day_of_week_in_year(&self) -> u8 {
        ((self.day_of_year() - 1) % u16::from(DAYS_PER_WEEK) + 1) as u8
    }

    fn aligned_week_of_month(&self) -> u8 {
        (self.day_of_month() - 1) / DAYS_PER_WEEK + 1
    }

    #[allow(clippy::cast_possible_truncation)]
    fn aligned_week_of_year(&self) -> u8 {
        ((self.day_of_year() - 1) / u16::from(DAYS_PER_WEEK) + 1) as u8
    }

    /// Months since year 0, month 1 of this chronology
    fn proleptic_month(&self) -> i64 {
        i64::from(self.proleptic_year()) * i64::from(self.chronology().months_in_year()) + i64::from(self.month())
            - 1
    }

    /// Range of a date based field for this particular date.
    ///
    /// # Errors
    /// Returns `CalendarError::UnsupportedField` for time based fields.
    fn range_chrono(&self, field: ChronoField) -> Result<ValueRange, CalendarError> {
        match field {
            ChronoField::DayOfMonth => Ok(ValueRange::of(1, i64::from(self.length_of_month()))),
            ChronoField::DayOfYear => Ok(ValueRange::of(1, i64::from(self.length_of_year()))),
            ChronoField::AlignedWeekOfMonth => Ok(ValueRange::of(
                1,
                i64::from(self.length_of_month().div_ceil(DAYS_PER_WEEK)),
            )),
            ChronoField::AlignedWeekOfYear => Ok(ValueRange::of(
                1,
                i64::from(self.length_of_year().div_ceil(u16::from(DAYS_PER_WEEK))),
            )),
            _ => self.chronology().range(field),
        }
    }

    /// # Errors
    /// Returns `CalendarError::UnsupportedField` for time based fields.
    fn range(&self, field: ChronoField) -> Result<ValueRange, CalendarError> {
        if !field.is_date_based() {
            return Err(CalendarError::UnsupportedField(field));
        }
        self.range_chrono(field)
    }

    /// # Errors
    /// Returns `CalendarError::UnsupportedField` for time based fields.
    fn get_long(&self, field: ChronoField) -> Result<i64, CalendarError> {
        Ok(match field {
            ChronoField::DayOfWeek => i64::from(self.day_of_week()),
            ChronoField::AlignedDayOfWeekInMonth => i64::from(self.aligned_day_of_week_in_month()),
            ChronoField::AlignedDayOfWeekInYear => i64::from(self.aligned_day_of_week_in_year()),
            ChronoField::DayOfMonth => i64::from(self.day_of_month()),
            ChronoField::DayOfYear => i64::from(self.day_of_year()),
            ChronoField::EpochDay => self.to_epoch_day(),
            ChronoField::AlignedWeekOfMonth => i64::from(self.aligned_week_of_month()),
            ChronoField::AlignedWeekOfYear => i64::from(self.aligned_week_of_year()),
            ChronoField::MonthOfYear => i64::from(self.month()),
            ChronoField::ProlepticMonth => self.proleptic_month(),
            ChronoField::YearOfEra => i64::from(self.year_of_era()),
            ChronoField::Year => i64::from(self.proleptic_year()),
            ChronoField::Era => i64::from(self.era().value()),
            _ => return Err(CalendarError::UnsupportedField(field)),
        })
    }

    /// Returns a copy of this date with `field` set to `new_value`.
    ///
    /// Day, week and day-of-week fields are checked against this date's own
    /// range; month and year fields against the chronology's range, with the
    /// day of month clamped if the target month is shorter.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidValue` for an out of range value and
    /// `CalendarError::UnsupportedField` for time based fields.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn with(&self, field: ChronoField, new_value: i64) -> Result<Self, CalendarError> {
        let range = match field {
            ChronoField::DayOfWeek
            | ChronoField::AlignedDayOfWeekInMonth
            | ChronoField::AlignedDayOfWeekInYear
            | ChronoField::DayOfMonth
            | ChronoField::DayOfYear
            | ChronoField::AlignedWeekOfMonth
            | ChronoField::AlignedWeekOfYear => self.range(field)?,
            _ => self.chronology().range(field)?,
        };
        range.check_valid_value(new_value, field)?;

        let year = i64::from(self.proleptic_year());
        let month = self.month();
        let day = self.day_of_month();
        match field {
            ChronoField::DayOfWeek => self.plus_days(new_value - i64::from(self.day_of_week())),
            ChronoField::AlignedDayOfWeekInMonth => {
                self.plus_days(new_value - i64::from(self.aligned_day_of_week_in_month()))
            },
            ChronoField::AlignedDayOfWeekInYear => {
                self.plus_days(new_value - i64::from(self.aligned_day_of_week_in_year()))
            },
            ChronoField::DayOfMonth => self.resolve_previous(year, month, new_value as u8),
            ChronoField::DayOfYear => self.plus_days(new_value - i64::from(self.day_of_year())),
            ChronoField::EpochDay => self.chronology().date_epoch_day(new_value),
            ChronoField::AlignedWeekOfMonth => {
                self.plus_weeks(new_value - i64::from(self.aligned_week_of_month()))
            },
            ChronoField::AlignedWeekOfYear => {
                self.plus_weeks(new_value - i64::from(self.aligned_week_of_year()))
            },
            ChronoField::MonthOfYear => self.resolve_previous(year, new_value as u8, day),
            ChronoField::ProlepticMonth => self.plus_months(new_value - self.proleptic_month()),
            ChronoField::YearOfEra => {
                let year = if year >= 1 { new_value } else { 1 - new_value };
                self.resolve_previous(year, month, day)
            },
            ChronoField::Year => self.resolve_previous(new_value, month, day),
            ChronoField::Era => {
                if new_value == i64::from(self.era().value()) {
                    Ok(*self)
                } else {
                    self.resolve_previous(1 - year, month, day)
                }
            },
            _ => Err(CalendarError::UnsupportedField(field)),
        }
    }

    /// # Errors
    /// Returns `CalendarError::UnsupportedUnit` for time based units,
    /// `CalendarError::Overflow` or `CalendarError::InvalidValue` if the
    /// result is out of range.
    fn plus(&self, amount: i64, unit: ChronoUnit) -> Result<Self, CalendarError> {
        if let Some(years) = unit.years() {
            return self.plus_years(amount.checked_mul(years).ok_or_else(|| overflow("years"))?);
        }
        match unit {
            ChronoUnit::Days => self.plus_days(amount),
            ChronoUnit::Weeks => self.plus_weeks(amount),
            ChronoUnit::Months => self.plus_months(amount),
            ChronoUnit::Eras => {
                let era = i64::from(self.era().value());
                self.with(ChronoField::Era, era.checked_add(amount).ok_or_else(|| overflow("eras"))?)
            },
            _ => Err(CalendarError::UnsupportedUnit(unit)),
        }
    }

    /// # Errors
    /// See [`CalendarDate::plus`].
    fn minus(&self, amount: i64, unit: ChronoUnit) -> Result<Self, CalendarError> {
        if amount == i64::MIN {
            self.plus(i64::MAX, unit)?.plus(1, unit)
        } else {
            self.plus(-amount, unit)
        }
    }

    /// # Errors
    /// Returns `CalendarError::Overflow` or `CalendarError::InvalidValue` if
    /// the result is out of range.
    fn plus_days(&self, days: i64) -> Result<Self, CalendarError> {
        if days == 0 {
            return Ok(*self);
        }
        let epoch_day = self.to_epoch_day().checked_add(days).ok_or_else(|| overflow("days"))?;
        self.chronology().date_epoch_day(epoch_day)
    }

    /// # Errors
    /// See [`CalendarDate::plus_days`].
    fn plus_weeks(&self, weeks: i64) -> Result<Self, CalendarError> {
        self.plus_days(
            weeks
                .checked_mul(i64::from(DAYS_PER_WEEK))
                .ok_or_else(|| overflow("weeks"))?,
        )
    }

    /// Adds months, clamping the day of month to the end of the target month.
    ///
    /// # Errors
    /// See [`CalendarDate::plus_days`].
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn plus_months(&self, months: i64) -> Result<Self, CalendarError> {
        if months == 0 {
            return Ok(*self);
        }
        let months_in_year = i64::from(self.chronology().months_in_year());
        let target = self
            .proleptic_month()
            .checked_add(months)
            .ok_or_else(|| overflow("months"))?;
        let year = target.div_euclid(months_in_year);
        let month = target.rem_euclid(months_in_year) + 1;
        self.resolve_previous(year, month as u8, self.day_of_month())
    }

    /// Adds years, clamping the day of month if the month is shorter that year.
    ///
    /// # Errors
    /// See [`CalendarDate::plus_days`].
    fn plus_years(&self, years: i64) -> Result<Self, CalendarError> {
        if years == 0 {
            return Ok(*self);
        }
        let year = i64::from(self.proleptic_year())
            .checked_add(years)
            .ok_or_else(|| overflow("years"))?;
        self.resolve_previous(year, self.month(), self.day_of_month())
    }

    fn days_until(&self, end: &Self) -> i64 {
        end.to_epoch_day() - self.to_epoch_day()
    }

    fn weeks_until(&self, end: &Self) -> i64 {
        self.days_until(end) / i64::from(DAYS_PER_WEEK)
    }

    /// Whole months from this date to `end`.
    ///
    /// A month only counts once the day of month has been reached, and never
    /// when stepping that many months overshoots `end`.
    ///
    /// # Errors
    /// See [`CalendarDate::plus_months`].
    fn months_until(&self, end: &Self) -> Result<i64, CalendarError> {
        let mut total = end.proleptic_month() - self.proleptic_month();
        let day_diff = i16::from(end.day_of_month()) - i16::from(self.day_of_month());
        if total > 0 && day_diff < 0 {
            total -= 1;
        } else if total < 0 && day_diff > 0 {
            total += 1;
        }
        let shifted = self.plus_months(total)?;
        if total > 0 && shifted > *end {
            total -= 1;
        } else if total < 0 && shifted < *end {
            total += 1;
        }
        Ok(total)
    }

    /// Amount of `unit` between this date and `end`, truncated toward zero.
    ///
    /// # Errors
    /// Returns `CalendarError::UnsupportedUnit` for time based units and
    /// conversion errors if `end` cannot be expressed in this chronology.
    fn until(&self, end: &(impl Temporal + ?Sized), unit: ChronoUnit) -> Result<i64, CalendarError> {
        if !unit.is_date_based() {
            return Err(CalendarError::UnsupportedUnit(unit));
        }
        let end = self.chronology().date_from(end)?;
        if let Some(years) = unit.years() {
            let months_in_year = i64::from(self.chronology().months_in_year());
            return Ok(self.months_until(&end)? / (months_in_year * years));
        }
        match unit {
            ChronoUnit::Days => Ok(self.days_until(&end)),
            ChronoUnit::Weeks => Ok(self.weeks_until(&end)),
            ChronoUnit::Months => self.months_until(&end),
            ChronoUnit::Eras => Ok(i64::from(end.era().value()) - i64::from(self.era().value())),
            _ => Err(CalendarError::UnsupportedUnit(unit)),
        }
    }

    /// The period from this date to `end` such that
    /// `self.plus_period(&period) == end`.
    ///
    /// # Errors
    /// Returns conversion errors if `end` cannot be expressed in this
    /// chronology, or `CalendarError::Overflow` if a component exceeds `i32`.
    #[allow(clippy::cast_possible_truncation)]
    fn until_period(&self, end: &(impl Temporal + ?Sized)) -> Result<ChronoPeriod<Self::Chronology>, CalendarError> {
        let end = self.chronology().date_from(end)?;
        let total_months = self.months_until(&end)?;
        let days = end.to_epoch_day() - self.plus_months(total_months)?.to_epoch_day();
        let months_in_year = i64::from(self.chronology().months_in_year());
        let years = i32::try_from(total_months / months_in_year).map_err(|_| overflow("period years"))?;
        let days = i32::try_from(days).map_err(|_| overflow("period days"))?;
        Ok(self
            .chronology()
            .period(years, (total_months % months_in_year) as i32, days))
    }

    /// Adds the total months of `period`, then its days.
    ///
    /// # Errors
    /// Returns `CalendarError::ChronologyMismatch` if the period belongs to
    /// another chronology, otherwise see [`CalendarDate::plus`].
    fn plus_period(&self, period: &ChronoPeriod<Self::Chronology>) -> Result<Self, CalendarError> {
        self.check_period_chronology(period)?;
        self.plus_months(period.to_total_months())?
            .plus_days(i64::from(period.days()))
    }

    /// # Errors
    /// See [`CalendarDate::plus_period`].
    fn minus_period(&self, period: &ChronoPeriod<Self::Chronology>) -> Result<Self, CalendarError> {
        self.check_period_chronology(period)?;
        self.minus(period.to_total_months(), ChronoUnit::Months)?
            .minus(i64::from(period.days()), ChronoUnit::Days)
    }

    #[doc(hidden)]
    fn check_period_chronology(&self, period: &ChronoPeriod<Self::Chronology>) -> Result<(), CalendarError> {
        if period.chronology() == self.chronology() {
            Ok(())
        } else {
            Err(CalendarError::ChronologyMismatch {
                expected: self.chronology().id(),
                actual: period.chronology().id(),
            })
        }
    }
}
