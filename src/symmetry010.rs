//! The Symmetry010 calendar.
//!
//! Every quarter has months of 30, 31 and 30 days, so every year of 364
//! days starts on a Monday. Leap years add a week to December, giving it
//! 37 days; they follow a 293 year cycle of 52 leap years.

use std::fmt;
use std::str::FromStr;

use crate::consts::{DECEMBER, ISO_0001_EPOCH_DAY, SLASH_SEPARATOR};
use crate::era::{Era, Symmetry010Era};
use crate::format::{self, impl_serde_as_string};
use crate::prelude::*;
use crate::{CalendarDate, CalendarError, ChronoField, Chronology, Clock, Temporal, ValueRange};

pub const DAYS_PER_YEAR: u16 = 364;
pub const DAYS_PER_LEAP_YEAR: u16 = 371;
pub const DAYS_PER_LEAP_WEEK: u8 = 7;
pub const DAYS_PER_CYCLE: i64 = 293 * DAYS_PER_YEAR as i64 + 52 * DAYS_PER_LEAP_WEEK as i64;

const LEAP_CYCLE_YEARS: i64 = 293;
const LEAP_YEARS_PER_CYCLE: i64 = 52;
const LEAP_YEAR_OFFSET: i64 = 146;

const DAYS_IN_SHORT_MONTH: u8 = 30;
const DAYS_IN_LONG_MONTH: u8 = 31;
const DAYS_IN_LEAP_DECEMBER: u8 = 37;
const DAYS_PER_QUARTER: u16 = 91;

const YEAR_RANGE: ValueRange = ValueRange::of(1, 1_000_000);
const MONTH_RANGE: ValueRange = ValueRange::of(1, 12);
const DAY_OF_MONTH_RANGE: ValueRange = ValueRange::of_variable(1, 30, 37);
const DAY_OF_YEAR_RANGE: ValueRange = ValueRange::of_variable(1, 364, 371);
const PROLEPTIC_MONTH_RANGE: ValueRange = ValueRange::of(12, 1_000_000 * 12 + 11);
const EPOCH_DAY_RANGE: ValueRange = ValueRange::of(
    epoch_day(1, 1, 1),
    epoch_day(1_000_000, DECEMBER, days_in_month(1_000_000, DECEMBER)),
);

pub const fn is_leap_year(year: i64) -> bool {
    (LEAP_YEARS_PER_CYCLE * year + LEAP_YEAR_OFFSET).rem_euclid(LEAP_CYCLE_YEARS) < LEAP_YEARS_PER_CYCLE
}

/// Leap years from year 1 up to, not including, `year`
const fn leap_years_before(year: i64) -> i64 {
    (LEAP_YEARS_PER_CYCLE * (year - 1) + LEAP_YEAR_OFFSET).div_euclid(LEAP_CYCLE_YEARS)
}

pub const fn days_in_month(year: i64, month: u8) -> u8 {
    if month == DECEMBER && is_leap_year(year) {
        DAYS_IN_LEAP_DECEMBER
    } else if month % 3 == 2 {
        DAYS_IN_LONG_MONTH
    } else {
        DAYS_IN_SHORT_MONTH
    }
}

pub const fn day_of_year(month: u8, day: u8) -> u16 {
    DAYS_IN_SHORT_MONTH as u16 * (month as u16 - 1) + month as u16 / 3 + day as u16
}

/// Epoch day of the first day of `year`
const fn year_start(year: i64) -> i64 {
    (year - 1) * DAYS_PER_YEAR as i64 + leap_years_before(year) * DAYS_PER_LEAP_WEEK as i64 + ISO_0001_EPOCH_DAY
}

pub const fn epoch_day(year: i64, month: u8, day: u8) -> i64 {
    year_start(year) + day_of_year(month, day) as i64 - 1
}

/// Month and day for a valid day of year
#[allow(clippy::cast_possible_truncation)]
const fn month_day(day_of_year: u16) -> (u8, u8) {
    if day_of_year > DAYS_PER_YEAR {
        return (DECEMBER, (day_of_year - 334) as u8);
    }
    let quarter = (day_of_year - 1) / DAYS_PER_QUARTER;
    let day_of_quarter = (day_of_year - 1) % DAYS_PER_QUARTER;
    let first_month = (quarter * 3) as u8;
    if day_of_quarter < 30 {
        (first_month + 1, day_of_quarter as u8 + 1)
    } else if day_of_quarter < 61 {
        (first_month + 2, day_of_quarter as u8 - 29)
    } else {
        (first_month + 3, day_of_quarter as u8 - 60)
    }
}

/// Inverse of [`epoch_day`], returning (year, month, day).
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn from_epoch_day(epoch_day: i64) -> (i64, u8, u8) {
    let zero_day = epoch_day - ISO_0001_EPOCH_DAY;
    let mut year = (LEAP_CYCLE_YEARS * zero_day).div_euclid(DAYS_PER_CYCLE) + 1;
    while year_start(year) > epoch_day {
        year -= 1;
    }
    while year_start(year + 1) <= epoch_day {
        year += 1;
    }
    let (month, day) = month_day((epoch_day - year_start(year) + 1) as u16);
    (year, month, day)
}

/// The Symmetry010 calendar system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display)]
#[display(fmt = "Sym010")]
pub struct Symmetry010Chronology;

impl Symmetry010Chronology {
    pub const INSTANCE: Self = Self;
}

impl Chronology for Symmetry010Chronology {
    type Date = Symmetry010Date;
    type Era = Symmetry010Era;

    fn id(&self) -> &'static str {
        "Sym010"
    }

    fn calendar_type(&self) -> Option<&'static str> {
        None
    }

    fn is_leap_year(&self, proleptic_year: i64) -> bool {
        is_leap_year(proleptic_year)
    }

    fn eras(&self) -> &'static [Symmetry010Era] {
        &[Symmetry010Era::Ce]
    }

    fn era_for_year(&self, _proleptic_year: i64) -> Symmetry010Era {
        Symmetry010Era::Ce
    }

    fn narrow_era(&self, era: Era) -> Result<Symmetry010Era, CalendarError> {
        match era {
            Era::Symmetry010(era) => Ok(era),
            _ => Err(CalendarError::EraMismatch {
                expected: "Symmetry010Era",
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
            ChronoField::AlignedWeekOfMonth => ValueRange::of_variable(1, 5, 6),
            ChronoField::AlignedWeekOfYear => ValueRange::of_variable(1, 52, 53),
            ChronoField::MonthOfYear => MONTH_RANGE,
            ChronoField::ProlepticMonth => PROLEPTIC_MONTH_RANGE,
            ChronoField::YearOfEra | ChronoField::Year => YEAR_RANGE,
            ChronoField::Era => ValueRange::of(1, 1),
            _ => return Err(CalendarError::UnsupportedField(field)),
        })
    }

    fn date(&self, proleptic_year: i32, month: i32, day_of_month: i32) -> Result<Symmetry010Date, CalendarError> {
        Symmetry010Date::of(proleptic_year, month, day_of_month)
    }

    fn date_year_day(&self, proleptic_year: i32, day_of_year: i32) -> Result<Symmetry010Date, CalendarError> {
        Symmetry010Date::of_year_day(proleptic_year, day_of_year)
    }

    fn date_epoch_day(&self, epoch_day: i64) -> Result<Symmetry010Date, CalendarError> {
        Symmetry010Date::of_epoch_day(epoch_day)
    }
}

/// A date in the Symmetry010 calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symmetry010Date {
    year: i32,
    month: u8,
    day: u8,
}

impl Symmetry010Date {
    /// # Errors
    /// Returns `CalendarError::InvalidValue` for out of range components and
    /// `CalendarError::InvalidDate` for a day past the end of its month.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn of(year: i32, month: i32, day: i32) -> Result<Self, CalendarError> {
        YEAR_RANGE.check_valid_value(i64::from(year), ChronoField::Year)?;
        let month = MONTH_RANGE.check_valid_int_value(i64::from(month), ChronoField::MonthOfYear)? as u8;
        let day = DAY_OF_MONTH_RANGE.check_valid_int_value(i64::from(day), ChronoField::DayOfMonth)? as u8;
        if day > days_in_month(i64::from(year), month) {
            if month == DECEMBER && day <= DAYS_IN_LEAP_DECEMBER {
                return Err(CalendarError::invalid_date(format!(
                    "Invalid Leap Day as '{year}' is not a leap year"
                )));
            }
            return Err(CalendarError::invalid_date(format!(
                "Invalid date: {year}/{month}/{day}"
            )));
        }
        Ok(Self { year, month, day })
    }

    /// # Errors
    /// Returns `CalendarError::InvalidValue` for out of range values and
    /// `CalendarError::InvalidDate` for the leap week of a common year.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn of_year_day(year: i32, day_of_year: i32) -> Result<Self, CalendarError> {
        YEAR_RANGE.check_valid_value(i64::from(year), ChronoField::Year)?;
        let day_of_year =
            DAY_OF_YEAR_RANGE.check_valid_int_value(i64::from(day_of_year), ChronoField::DayOfYear)? as u16;
        if day_of_year > DAYS_PER_YEAR && !is_leap_year(i64::from(year)) {
            return Err(CalendarError::invalid_date(format!(
                "Invalid date 'DayOfYear {day_of_year}' as '{year}' is not a leap year"
            )));
        }
        let (month, day) = month_day(day_of_year);
        Ok(Self { year, month, day })
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
        Symmetry010Chronology::INSTANCE.date_from(temporal)
    }

    /// # Errors
    /// See [`Chronology::date_now`].
    pub fn now() -> Result<Self, CalendarError> {
        Symmetry010Chronology::INSTANCE.date_now()
    }

    /// # Errors
    /// See [`Chronology::date_now_with`].
    pub fn now_with(clock: &(impl Clock + ?Sized)) -> Result<Self, CalendarError> {
        Symmetry010Chronology::INSTANCE.date_now_with(clock)
    }

    /// True for the seven days after December 30 of a leap year
    pub const fn is_leap_week(&self) -> bool {
        self.month == DECEMBER && self.day > DAYS_IN_SHORT_MONTH
    }
}

impl CalendarDate for Symmetry010Date {
    type Chronology = Symmetry010Chronology;

    fn chronology(&self) -> Symmetry010Chronology {
        Symmetry010Chronology::INSTANCE
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
        day_of_year(self.month, self.day)
    }

    fn to_epoch_day(&self) -> i64 {
        epoch_day(i64::from(self.year), self.month, self.day)
    }

    fn length_of_month(&self) -> u8 {
        days_in_month(i64::from(self.year), self.month)
    }

    fn length_of_year(&self) -> u16 {
        if is_leap_year(i64::from(self.year)) { DAYS_PER_LEAP_YEAR } else { DAYS_PER_YEAR }
    }

    fn resolve_previous(&self, proleptic_year: i64, month: u8, day_of_month: u8) -> Result<Self, CalendarError> {
        let year = YEAR_RANGE.check_valid_int_value(proleptic_year, ChronoField::Year)?;
        Ok(Self {
            year,
            month,
            day: day_of_month.min(days_in_month(proleptic_year, month)),
        })
    }
}

impl Temporal for Symmetry010Date {
    fn epoch_day(&self) -> Result<i64, CalendarError> {
        Ok(self.to_epoch_day())
    }
}

impl fmt::Display for Symmetry010Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format::write_date(f, self, SLASH_SEPARATOR)
    }
}

impl FromStr for Symmetry010Date {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        format::parse_date(Symmetry010Chronology::INSTANCE, s, SLASH_SEPARATOR)
    }
}

impl_serde_as_string!(Symmetry010Date);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ChronoUnit, IsoDate};

    fn sym(year: i32, month: i32, day: i32) -> Symmetry010Date {
        Symmetry010Date::of(year, month, day).unwrap()
    }

    fn iso_date(year: i32, month: i32, day: i32) -> IsoDate {
        IsoDate::of(year, month, day).unwrap()
    }

    #[test]
    fn test_leap_years() {
        struct TestCase {
            year:    i64,
            is_leap: bool,
        }

        let cases = [
            TestCase { year: 1, is_leap: false },
            TestCase { year: 2, is_leap: false },
            TestCase { year: 3, is_leap: true },
            TestCase { year: 9, is_leap: true },
            TestCase { year: 1970, is_leap: true },
            TestCase { year: 2004, is_leap: true },
            TestCase { year: 2009, is_leap: true },
            TestCase { year: 2012, is_leap: false },
            TestCase { year: 2015, is_leap: true },
            TestCase { year: 2020, is_leap: false },
            TestCase { year: 2026, is_leap: true },
        ];

        for case in &cases {
            assert_eq!(is_leap_year(case.year), case.is_leap, "year {}", case.year);
        }

        let leap_years = (1..=LEAP_CYCLE_YEARS).filter(|&year| is_leap_year(year)).count();
        assert_eq!(leap_years, 52);
    }

    #[test]
    fn test_samples_match_iso() {
        struct TestCase {
            sym:         Symmetry010Date,
            iso:         IsoDate,
            description: &'static str,
        }

        let cases = [
            TestCase {
                sym:         sym(1, 1, 1),
                iso:         iso_date(1, 1, 1),
                description: "first day",
            },
            TestCase {
                sym:         sym(1970, 1, 4),
                iso:         iso_date(1970, 1, 1),
                description: "epoch",
            },
            TestCase {
                sym:         sym(2009, 12, 37),
                iso:         iso_date(2010, 1, 3),
                description: "end of a leap week",
            },
            TestCase {
                sym:         sym(2010, 1, 1),
                iso:         iso_date(2010, 1, 4),
                description: "after a leap year",
            },
            TestCase {
                sym:         sym(2012, 2, 31),
                iso:         iso_date(2012, 3, 2),
                description: "long month",
            },
            TestCase {
                sym:         sym(2012, 6, 23),
                iso:         iso_date(2012, 6, 24),
                description: "mid year",
            },
            TestCase {
                sym:         sym(2014, 2, 31),
                iso:         iso_date(2014, 2, 28),
                description: "long February",
            },
        ];

        for case in &cases {
            assert_eq!(case.sym.to_epoch_day(), case.iso.to_epoch_day(), "{}", case.description);
            assert_eq!(
                Symmetry010Date::from_temporal(&case.iso).unwrap(),
                case.sym,
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_years_start_on_monday() {
        for year in [1, 2, 1970, 2009, 2010, 2012, 2026, 999_999] {
            assert_eq!(sym(year, 1, 1).day_of_week(), 1, "year {year}");
        }
        assert_eq!(sym(2009, 12, 37).day_of_week(), 7);
        assert_eq!(sym(2012, 12, 30).day_of_week(), 7);
    }

    #[test]
    fn test_invalid_dates() {
        assert_eq!(
            Symmetry010Date::of(2012, 12, 31).unwrap_err().to_string(),
            "Invalid Leap Day as '2012' is not a leap year"
        );
        assert_eq!(
            Symmetry010Date::of(2012, 1, 31).unwrap_err().to_string(),
            "Invalid date: 2012/1/31"
        );
        assert!(Symmetry010Date::of(2012, 2, 32).is_err());
        assert!(Symmetry010Date::of(2012, 13, 1).is_err());
        assert!(Symmetry010Date::of(0, 1, 1).is_err());
        assert!(Symmetry010Date::of(2009, 12, 37).is_ok());
        assert!(Symmetry010Date::of_year_day(2012, 365).is_err());
        assert_eq!(Symmetry010Date::of_year_day(2009, 371).unwrap(), sym(2009, 12, 37));
        assert_eq!(Symmetry010Date::of_year_day(2012, 175).unwrap(), sym(2012, 6, 23));
        assert_eq!(Symmetry010Date::of_year_day(2012, 91).unwrap(), sym(2012, 3, 30));
        assert_eq!(Symmetry010Date::of_year_day(2012, 92).unwrap(), sym(2012, 4, 1));
    }

    #[test]
    fn test_lengths_and_ranges() {
        struct TestCase {
            date:            Symmetry010Date,
            length_of_month: u8,
            length_of_year:  u16,
            weeks_in_month:  i64,
        }

        let cases = [
            TestCase {
                date:            sym(2012, 1, 1),
                length_of_month: 30,
                length_of_year:  364,
                weeks_in_month:  5,
            },
            TestCase {
                date:            sym(2012, 2, 1),
                length_of_month: 31,
                length_of_year:  364,
                weeks_in_month:  5,
            },
            TestCase {
                date:            sym(2012, 12, 1),
                length_of_month: 30,
                length_of_year:  364,
                weeks_in_month:  5,
            },
            TestCase {
                date:            sym(2015, 12, 1),
                length_of_month: 37,
                length_of_year:  371,
                weeks_in_month:  6,
            },
        ];

        for case in &cases {
            assert_eq!(case.date.length_of_month(), case.length_of_month, "{}", case.date);
            assert_eq!(case.date.length_of_year(), case.length_of_year, "{}", case.date);
            assert_eq!(
                case.date.range(ChronoField::AlignedWeekOfMonth),
                Ok(ValueRange::of(1, case.weeks_in_month)),
                "{}",
                case.date
            );
        }

        let chronology = Symmetry010Chronology::INSTANCE;
        assert_eq!(chronology.range(ChronoField::DayOfMonth), Ok(ValueRange::of_variable(1, 30, 37)));
        assert_eq!(chronology.range(ChronoField::EpochDay).map(|r| r.max()), Ok(364_523_155));
        assert_eq!(chronology.range(ChronoField::EpochDay).map(|r| r.min()), Ok(-719_162));
        assert_eq!(sym(2015, 12, 37).range(ChronoField::AlignedWeekOfYear), Ok(ValueRange::of(1, 53)));
        assert_eq!(sym(2015, 12, 37).aligned_week_of_year(), 53);
    }

    #[test]
    fn test_fields_and_with() {
        let date = sym(2012, 6, 23);
        assert_eq!(date.get_long(ChronoField::DayOfYear), Ok(175));
        assert_eq!(date.get_long(ChronoField::DayOfWeek), Ok(7));
        assert_eq!(date.get_long(ChronoField::ProlepticMonth), Ok(2012 * 12 + 5));
        assert_eq!(date.get_long(ChronoField::Era), Ok(1));

        assert_eq!(sym(2015, 12, 37).with(ChronoField::Year, 2012), Ok(sym(2012, 12, 30)));
        assert_eq!(sym(2012, 2, 31).with(ChronoField::MonthOfYear, 3), Ok(sym(2012, 3, 30)));
        assert_eq!(date.with(ChronoField::DayOfWeek, 1), Ok(sym(2012, 6, 17)));
        assert!(date.with(ChronoField::DayOfMonth, 31).is_err());
        assert!(
            Symmetry010Chronology::INSTANCE
                .proleptic_year(crate::JulianEra::Ad, 2012)
                .is_err()
        );
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(sym(2015, 12, 37).plus(1, ChronoUnit::Days), Ok(sym(2016, 1, 1)));
        assert_eq!(sym(2015, 12, 37).plus(1, ChronoUnit::Months), Ok(sym(2016, 1, 30)));
        assert_eq!(sym(2015, 12, 37).plus(1, ChronoUnit::Years), Ok(sym(2016, 12, 30)));
        assert_eq!(sym(2012, 12, 30).plus(1, ChronoUnit::Weeks), Ok(sym(2013, 1, 7)));
        assert_eq!(sym(2009, 12, 30).plus(1, ChronoUnit::Weeks), Ok(sym(2009, 12, 37)));
        assert_eq!(sym(2012, 3, 30).minus(1, ChronoUnit::Months), Ok(sym(2012, 2, 30)));

        let start = sym(2015, 12, 37);
        let end = sym(2016, 2, 31);
        assert_eq!(start.until(&end, ChronoUnit::Months), Ok(1));
        let period = start.until_period(&end).unwrap();
        assert_eq!(period, Symmetry010Chronology::INSTANCE.period(0, 1, 31));
        assert_eq!(start.plus_period(&period), Ok(end));
        assert_eq!(sym(2012, 1, 1).until(&sym(2013, 1, 1), ChronoUnit::Weeks), Ok(52));
        assert_eq!(sym(2015, 1, 1).until(&sym(2016, 1, 1), ChronoUnit::Weeks), Ok(53));
    }

    #[test]
    fn test_display_parse_and_serde() {
        let date = sym(2009, 12, 37);
        assert_eq!(date.to_string(), "Sym010 CE 2009/12/37");
        assert_eq!("Sym010 CE 2009/12/37".parse::<Symmetry010Date>(), Ok(date));
        assert!("Sym010 CE 2012/12/37".parse::<Symmetry010Date>().is_err());
        assert!("Ifc CE 2009/12/37".parse::<Symmetry010Date>().is_err());

        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""Sym010 CE 2009/12/37""#);
        assert_eq!(serde_json::from_str::<Symmetry010Date>(&json).unwrap(), date);
    }
}
