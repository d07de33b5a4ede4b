//! The British calendar: Julian until a cutover date, Gregorian from it.
//!
//! The default cutover is ISO 1752-09-14, the day after Julian 1752-09-02.
//! The eleven nominal dates in between (1752-09-03 to 1752-09-13) do not
//! exist; asking for one resolves forward leniently as if the Julian
//! calendar had continued.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{DATE_SEPARATOR, DAYS_PER_WEEK};
use crate::era::{Era, JulianEra};
use crate::format::{self, impl_serde_as_string};
use crate::julian::{self, DAY_OF_MONTH_RANGE, MONTH_RANGE};
use crate::prelude::*;
use crate::{CalendarDate, CalendarError, ChronoField, Chronology, Clock, IsoDate, Temporal, ValueRange, iso};

const MAX_YEAR: i64 = 999_999;
const YEAR_RANGE: ValueRange = ValueRange::of(julian::YEAR_RANGE.min(), MAX_YEAR);
const YEAR_OF_ERA_RANGE: ValueRange = ValueRange::of(1, MAX_YEAR);
const PROLEPTIC_MONTH_RANGE: ValueRange = ValueRange::of(julian::YEAR_RANGE.min() * 12, MAX_YEAR * 12 + 11);
const EPOCH_DAY_RANGE: ValueRange =
    ValueRange::of(julian::EPOCH_DAY_RANGE.min(), iso::epoch_day(MAX_YEAR, 12, 31));

/// The British cutover calendar system.
///
/// The chronology is identified by its cutover, the first Gregorian date.
/// It serializes as that ISO date so it can sit in a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "BritishCutover")]
#[serde(try_from = "IsoDate", into = "IsoDate")]
pub struct BritishCutoverChronology {
    cutover: IsoDate,
    cutover_epoch_day: i64,
}

impl BritishCutoverChronology {
    /// The Kingdom of Great Britain's cutover, ISO 1752-09-14
    pub const INSTANCE: Self = Self {
        cutover: IsoDate::new_unchecked(1752, 9, 14),
        cutover_epoch_day: iso::epoch_day(1752, 9, 14),
    };

    /// Creates a chronology switching to the Gregorian calendar on `cutover`.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidValue` if the cutover is outside the
    /// supported years and `CalendarError::InvalidDate` if the Julian day
    /// before it does not precede it, which would repeat dates.
    pub fn new(cutover: IsoDate) -> Result<Self, CalendarError> {
        YEAR_RANGE.check_valid_value(i64::from(cutover.year()), ChronoField::Year)?;
        let cutover_epoch_day = cutover.to_epoch_day();
        let last_julian = julian::from_epoch_day(cutover_epoch_day - 1);
        if last_julian >= ymd(&cutover) {
            return Err(CalendarError::invalid_date(format!(
                "Cutover {cutover} would repeat Julian dates"
            )));
        }
        let chronology = Self {
            cutover,
            cutover_epoch_day,
        };
        debug!(
            %cutover,
            gap_days = chronology.gap_days(),
            "configured British cutover chronology"
        );
        Ok(chronology)
    }

    /// The first day of the Gregorian calendar
    pub const fn cutover(&self) -> IsoDate {
        self.cutover
    }

    pub const fn cutover_epoch_day(&self) -> i64 {
        self.cutover_epoch_day
    }

    /// Number of nominal dates skipped at the cutover
    pub fn gap_days(&self) -> i64 {
        let (year, month, day) = ymd(&self.cutover);
        julian::epoch_day(year, month, day) - self.cutover_epoch_day
    }

    /// Whether the triple is read with Julian rules
    fn is_julian(&self, year: i64, month: u8, day: u8) -> bool {
        (year, month, day) < ymd(&self.cutover)
    }

    fn epoch_of(&self, year: i64, month: u8, day: u8) -> i64 {
        if self.is_julian(year, month, day) {
            julian::epoch_day(year, month, day)
        } else {
            iso::epoch_day(year, month, day)
        }
    }

    fn ymd_of(&self, epoch_day: i64) -> (i64, u8, u8) {
        if epoch_day < self.cutover_epoch_day {
            julian::from_epoch_day(epoch_day)
        } else {
            iso::from_epoch_day(epoch_day)
        }
    }

    /// Nominal length of a month: Julian or Gregorian, ignoring the gap
    fn nominal_month_length(&self, year: i64, month: u8, day: u8) -> u8 {
        if self.is_julian(year, month, day) {
            julian::days_in_month(year, month)
        } else {
            iso::days_in_month(year, month)
        }
    }

    /// Epoch day of the first day of the month that exists. When the first
    /// of the month falls in the gap, the month starts at the cutover.
    fn month_start(&self, year: i64, month: u8) -> i64 {
        let start = self.epoch_of(year, month, 1);
        if self.is_julian(year, month, 1) && start >= self.cutover_epoch_day {
            self.cutover_epoch_day
        } else {
            start
        }
    }

    fn month_length(&self, year: i64, month: u8) -> u8 {
        let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
        let length = self.month_start(next_year, next_month) - self.month_start(year, month);
        u8::try_from(length).unwrap_or(u8::MAX)
    }

    fn year_length(&self, year: i64) -> u16 {
        let length = self.month_start(year + 1, 1) - self.month_start(year, 1);
        u16::try_from(length).unwrap_or(u16::MAX)
    }

    /// Whether some nominal days of the month fall in the gap
    fn has_gap(&self, year: i64, month: u8) -> bool {
        self.month_length(year, month) != self.nominal_month_length(year, month, 1)
    }

    /// Year and month just before the cutover month
    fn month_before_cutover(&self) -> (i64, u8) {
        let year = i64::from(self.cutover.year());
        match self.cutover.month() {
            1 => (year - 1, 12),
            month => (year, month - 1),
        }
    }
}

impl Default for BritishCutoverChronology {
    fn default() -> Self {
        Self::INSTANCE
    }
}

impl TryFrom<IsoDate> for BritishCutoverChronology {
    type Error = CalendarError;

    fn try_from(cutover: IsoDate) -> Result<Self, Self::Error> {
        Self::new(cutover)
    }
}

impl From<BritishCutoverChronology> for IsoDate {
    fn from(chronology: BritishCutoverChronology) -> Self {
        chronology.cutover
    }
}

fn ymd(date: &IsoDate) -> (i64, u8, u8) {
    (i64::from(date.year()), date.month(), date.day_of_month())
}

impl Chronology for BritishCutoverChronology {
    type Date = BritishCutoverDate;
    type Era = JulianEra;

    fn id(&self) -> &'static str {
        "BritishCutover"
    }

    fn calendar_type(&self) -> Option<&'static str> {
        None
    }

    /// Julian rule before the cutover year, Gregorian after it. In the
    /// cutover year the calendar in force on 29 February decides.
    fn is_leap_year(&self, proleptic_year: i64) -> bool {
        let cutover_year = i64::from(self.cutover.year());
        match proleptic_year.cmp(&cutover_year) {
            Ordering::Less => julian::is_leap_year(proleptic_year),
            Ordering::Greater => iso::is_leap_year(proleptic_year),
            Ordering::Equal if self.is_julian(proleptic_year, 2, 29) => julian::is_leap_year(proleptic_year),
            Ordering::Equal => iso::is_leap_year(proleptic_year),
        }
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
        let cutover_year = i64::from(self.cutover.year());
        let week = u16::from(DAYS_PER_WEEK);
        Ok(match field {
            ChronoField::DayOfWeek | ChronoField::AlignedDayOfWeekInMonth | ChronoField::AlignedDayOfWeekInYear => {
                ValueRange::of(1, 7)
            },
            ChronoField::DayOfMonth => DAY_OF_MONTH_RANGE,
            ChronoField::DayOfYear => {
                let shortest = self
                    .year_length(cutover_year)
                    .min(self.year_length(cutover_year - 1))
                    .min(365);
                ValueRange::of_variable(1, i64::from(shortest), 366)
            },
            ChronoField::EpochDay => EPOCH_DAY_RANGE,
            ChronoField::AlignedWeekOfMonth => {
                let (year_before, month_before) = self.month_before_cutover();
                let weeks = self
                    .month_length(cutover_year, self.cutover.month())
                    .min(self.month_length(year_before, month_before))
                    .div_ceil(DAYS_PER_WEEK)
                    .min(4);
                ValueRange::of_variable(1, i64::from(weeks), 5)
            },
            ChronoField::AlignedWeekOfYear => {
                let shortest = self.year_length(cutover_year).min(self.year_length(cutover_year - 1));
                let weeks = shortest.div_ceil(week).min(53);
                ValueRange::of_variable(1, i64::from(weeks), 53)
            },
            ChronoField::MonthOfYear => MONTH_RANGE,
            ChronoField::ProlepticMonth => PROLEPTIC_MONTH_RANGE,
            ChronoField::YearOfEra => YEAR_OF_ERA_RANGE,
            ChronoField::Year => YEAR_RANGE,
            ChronoField::Era => ValueRange::of(0, 1),
            _ => return Err(CalendarError::UnsupportedField(field)),
        })
    }

    fn date(&self, proleptic_year: i32, month: i32, day_of_month: i32) -> Result<BritishCutoverDate, CalendarError> {
        BritishCutoverDate::create(*self, proleptic_year, month, day_of_month)
    }

    fn date_year_day(&self, proleptic_year: i32, day_of_year: i32) -> Result<BritishCutoverDate, CalendarError> {
        YEAR_RANGE.check_valid_value(i64::from(proleptic_year), ChronoField::Year)?;
        let year = i64::from(proleptic_year);
        let length = self.year_length(year);
        ValueRange::of(1, i64::from(length)).check_valid_value(i64::from(day_of_year), ChronoField::DayOfYear)?;
        self.date_epoch_day(self.month_start(year, 1) + i64::from(day_of_year) - 1)
    }

    /// Weeks count from the first day of the month that exists
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn date_aligned_week_of_month(
        &self,
        proleptic_year: i32,
        month: i32,
        week: i32,
        day: i32,
    ) -> Result<BritishCutoverDate, CalendarError> {
        let year = YEAR_RANGE.check_valid_value(i64::from(proleptic_year), ChronoField::Year)?;
        let month = MONTH_RANGE.check_valid_int_value(i64::from(month), ChronoField::MonthOfYear)? as u8;
        let start = self.month_start(year, month);
        let offset = (i64::from(week) - 1) * 7 + i64::from(day) - 1;
        self.date_epoch_day(start + offset)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn date_epoch_day(&self, epoch_day: i64) -> Result<BritishCutoverDate, CalendarError> {
        EPOCH_DAY_RANGE.check_valid_value(epoch_day, ChronoField::EpochDay)?;
        let (year, month, day) = self.ymd_of(epoch_day);
        Ok(BritishCutoverDate {
            chronology: *self,
            year: year as i32,
            month,
            day,
            epoch_day,
        })
    }
}

/// A date in the British cutover calendar.
///
/// The stored year, month and day are always those of the resolved date, so
/// a date built from a gap triple equals the date it resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BritishCutoverDate {
    chronology: BritishCutoverChronology,
    year: i32,
    month: u8,
    day: u8,
    epoch_day: i64,
}

impl BritishCutoverDate {
    /// Creates a date in the default 1752 cutover chronology.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidValue` for out of range components and
    /// `CalendarError::InvalidDate` for a day the month does not have.
    pub fn of(year: i32, month: i32, day: i32) -> Result<Self, CalendarError> {
        Self::create(BritishCutoverChronology::INSTANCE, year, month, day)
    }

    /// # Errors
    /// See [`Chronology::date_from`].
    pub fn from_temporal(temporal: &(impl Temporal + ?Sized)) -> Result<Self, CalendarError> {
        BritishCutoverChronology::INSTANCE.date_from(temporal)
    }

    /// # Errors
    /// See [`Chronology::date_now`].
    pub fn now() -> Result<Self, CalendarError> {
        BritishCutoverChronology::INSTANCE.date_now()
    }

    /// # Errors
    /// See [`Chronology::date_now_with`].
    pub fn now_with(clock: &(impl Clock + ?Sized)) -> Result<Self, CalendarError> {
        BritishCutoverChronology::INSTANCE.date_now_with(clock)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn create(chronology: BritishCutoverChronology, year: i32, month: i32, day: i32) -> Result<Self, CalendarError> {
        YEAR_RANGE.check_valid_value(i64::from(year), ChronoField::Year)?;
        let month = MONTH_RANGE.check_valid_int_value(i64::from(month), ChronoField::MonthOfYear)? as u8;
        let day = DAY_OF_MONTH_RANGE.check_valid_int_value(i64::from(day), ChronoField::DayOfMonth)? as u8;
        let proleptic_year = i64::from(year);
        let leap = if chronology.is_julian(proleptic_year, month, day) {
            julian::is_leap_year(proleptic_year)
        } else {
            iso::is_leap_year(proleptic_year)
        };
        julian::check_day_of_month(proleptic_year, month, day, leap)?;

        let date = chronology.date_epoch_day(chronology.epoch_of(proleptic_year, month, day))?;
        if (date.year, date.month, date.day) != (year, month, day) {
            debug!(
                requested = %format_args!("{year}-{month:02}-{day:02}"),
                resolved = %date,
                "resolved a date inside the cutover gap"
            );
        }
        Ok(date)
    }

    /// Position of this date within its month, counting only days that exist
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn day_index_in_month(&self) -> u8 {
        (self.epoch_day - self.chronology.month_start(i64::from(self.year), self.month) + 1) as u8
    }
}

impl CalendarDate for BritishCutoverDate {
    type Chronology = BritishCutoverChronology;

    fn chronology(&self) -> BritishCutoverChronology {
        self.chronology
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

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn day_of_year(&self) -> u16 {
        (self.epoch_day - self.chronology.month_start(i64::from(self.year), 1) + 1) as u16
    }

    fn to_epoch_day(&self) -> i64 {
        self.epoch_day
    }

    fn length_of_month(&self) -> u8 {
        self.chronology.month_length(i64::from(self.year), self.month)
    }

    fn length_of_year(&self) -> u16 {
        self.chronology.year_length(i64::from(self.year))
    }

    fn aligned_day_of_week_in_month(&self) -> u8 {
        (self.day_index_in_month() - 1) % DAYS_PER_WEEK + 1
    }

    fn aligned_week_of_month(&self) -> u8 {
        (self.day_index_in_month() - 1) / DAYS_PER_WEEK + 1
    }

    fn range_chrono(&self, field: ChronoField) -> Result<ValueRange, CalendarError> {
        let year = i64::from(self.year);
        match field {
            // The gap month still accepts every nominal day
            ChronoField::DayOfMonth if self.chronology.has_gap(year, self.month) => Ok(ValueRange::of(
                1,
                i64::from(self.chronology.nominal_month_length(year, self.month, 1)),
            )),
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
            _ => self.chronology.range(field),
        }
    }

    fn resolve_previous(&self, proleptic_year: i64, month: u8, day_of_month: u8) -> Result<Self, CalendarError> {
        let year = YEAR_RANGE.check_valid_int_value(proleptic_year, ChronoField::Year)?;
        let day = day_of_month.min(self.chronology.nominal_month_length(proleptic_year, month, day_of_month));
        Self::create(self.chronology, year, i32::from(month), i32::from(day))
    }
}

impl PartialOrd for BritishCutoverDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BritishCutoverDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.epoch_day
            .cmp(&other.epoch_day)
            .then_with(|| self.chronology.cmp(&other.chronology))
    }
}

impl Temporal for BritishCutoverDate {
    fn epoch_day(&self) -> Result<i64, CalendarError> {
        Ok(self.epoch_day)
    }
}

impl fmt::Display for BritishCutoverDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format::write_date(f, self, DATE_SEPARATOR)
    }
}

impl FromStr for BritishCutoverDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        format::parse_date(BritishCutoverChronology::INSTANCE, s, DATE_SEPARATOR)
    }
}

impl_serde_as_string!(BritishCutoverDate);
