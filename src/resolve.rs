//! Resolution of parsed field values into a date.
//!
//! The field map is consumed in a fixed order: an epoch day wins outright,
//! a proleptic month is split into year and month, the year of era and era
//! are merged into the year, and finally one of the supported year based
//! combinations is turned into a date.

use std::collections::BTreeMap;

use tracing::trace;

use crate::{CalendarDate, CalendarError, CalendarEra, ChronoField, Chronology, ResolverStyle, ValueRange};

/// Field values awaiting resolution, as produced by a parser
pub type FieldValues = BTreeMap<ChronoField, i64>;

const DAY_OF_WEEK_RANGE: ValueRange = ValueRange::of(1, 7);

pub(crate) fn resolve_date<C: Chronology>(
    chronology: &C,
    fields: &mut FieldValues,
    style: ResolverStyle,
) -> Result<Option<C::Date>, CalendarError> {
    trace!(chronology = chronology.id(), ?style, fields = fields.len(), "resolving date");

    if let Some(epoch_day) = fields.remove(&ChronoField::EpochDay) {
        return chronology.date_epoch_day(epoch_day).map(Some);
    }

    resolve_proleptic_month(chronology, fields, style)?;
    resolve_year_of_era(chronology, fields, style)?;

    if fields.contains_key(&ChronoField::Year) {
        if fields.contains_key(&ChronoField::MonthOfYear) {
            if fields.contains_key(&ChronoField::DayOfMonth) {
                return resolve_ymd(chronology, fields, style).map(Some);
            }
            if fields.contains_key(&ChronoField::AlignedWeekOfMonth) {
                if fields.contains_key(&ChronoField::AlignedDayOfWeekInMonth) {
                    return resolve_ymaa(chronology, fields, style).map(Some);
                }
                if fields.contains_key(&ChronoField::DayOfWeek) {
                    return resolve_ymad(chronology, fields, style).map(Some);
                }
            }
        }
        if fields.contains_key(&ChronoField::DayOfYear) {
            return resolve_yd(chronology, fields, style).map(Some);
        }
        if fields.contains_key(&ChronoField::AlignedWeekOfYear) {
            if fields.contains_key(&ChronoField::AlignedDayOfWeekInYear) {
                return resolve_yaa(chronology, fields, style).map(Some);
            }
            if fields.contains_key(&ChronoField::DayOfWeek) {
                return resolve_yad(chronology, fields, style).map(Some);
            }
        }
    }
    Ok(None)
}

/// Inserts a derived value, failing if the map already holds a different one
fn add_field_value(fields: &mut FieldValues, field: ChronoField, value: i64) -> Result<(), CalendarError> {
    match fields.get(&field) {
        Some(&existing) if existing != value => Err(CalendarError::FieldConflict {
            field,
            existing,
            value,
        }),
        _ => {
            fields.insert(field, value);
            Ok(())
        },
    }
}

fn take(fields: &mut FieldValues, field: ChronoField) -> Result<i64, CalendarError> {
    fields.remove(&field).ok_or(CalendarError::UnsupportedField(field))
}

/// Removes `field` and checks it against the chronology's range
fn take_checked<C: Chronology>(chronology: &C, fields: &mut FieldValues, field: ChronoField) -> Result<i32, CalendarError> {
    let value = take(fields, field)?;
    chronology.range(field)?.check_valid_int_value(value, field)
}

fn minus_one(value: i64) -> Result<i64, CalendarError> {
    value.checked_sub(1).ok_or(CalendarError::Overflow("field value"))
}

fn resolve_proleptic_month<C: Chronology>(
    chronology: &C,
    fields: &mut FieldValues,
    style: ResolverStyle,
) -> Result<(), CalendarError> {
    let Some(proleptic_month) = fields.remove(&ChronoField::ProlepticMonth) else {
        return Ok(());
    };
    if style != ResolverStyle::Lenient {
        chronology
            .range(ChronoField::ProlepticMonth)?
            .check_valid_value(proleptic_month, ChronoField::ProlepticMonth)?;
    }
    let months_in_year = i64::from(chronology.months_in_year());
    add_field_value(fields, ChronoField::MonthOfYear, proleptic_month.rem_euclid(months_in_year) + 1)?;
    add_field_value(fields, ChronoField::Year, proleptic_month.div_euclid(months_in_year))
}

fn resolve_year_of_era<C: Chronology>(
    chronology: &C,
    fields: &mut FieldValues,
    style: ResolverStyle,
) -> Result<(), CalendarError> {
    let Some(year_of_era) = fields.remove(&ChronoField::YearOfEra) else {
        if let Some(&era) = fields.get(&ChronoField::Era) {
            chronology.range(ChronoField::Era)?.check_valid_value(era, ChronoField::Era)?;
        }
        return Ok(());
    };
    if style != ResolverStyle::Lenient {
        chronology
            .range(ChronoField::YearOfEra)?
            .check_valid_value(year_of_era, ChronoField::YearOfEra)?;
    }
    let before_era = || {
        1_i64
            .checked_sub(year_of_era)
            .ok_or(CalendarError::Overflow("year of era"))
    };

    match fields.remove(&ChronoField::Era) {
        Some(era) => {
            let value = chronology.range(ChronoField::Era)?.check_valid_int_value(era, ChronoField::Era)?;
            let era = chronology.era_of(value)?;
            let year = if era.value() == 1 { year_of_era } else { before_era()? };
            add_field_value(fields, ChronoField::Year, year)
        },
        None => match fields.get(&ChronoField::Year).copied() {
            Some(year) => {
                let year = if year >= 1 { year_of_era } else { before_era()? };
                add_field_value(fields, ChronoField::Year, year)
            },
            // Strict resolution never invents an era
            None if style == ResolverStyle::Strict => {
                fields.insert(ChronoField::YearOfEra, year_of_era);
                Ok(())
            },
            None => add_field_value(fields, ChronoField::Year, year_of_era),
        },
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn resolve_ymd<C: Chronology>(chronology: &C, fields: &mut FieldValues, style: ResolverStyle) -> Result<C::Date, CalendarError> {
    let year = take_checked(chronology, fields, ChronoField::Year)?;
    if style == ResolverStyle::Lenient {
        let months = minus_one(take(fields, ChronoField::MonthOfYear)?)?;
        let days = minus_one(take(fields, ChronoField::DayOfMonth)?)?;
        return chronology.date(year, 1, 1)?.plus_months(months)?.plus_days(days);
    }
    let month = take_checked(chronology, fields, ChronoField::MonthOfYear)?;
    let day = take_checked(chronology, fields, ChronoField::DayOfMonth)?;
    if style == ResolverStyle::Smart {
        return chronology
            .date(year, month, 1)?
            .resolve_previous(i64::from(year), month as u8, day as u8);
    }
    chronology.date(year, month, day)
}

fn resolve_ymaa<C: Chronology>(chronology: &C, fields: &mut FieldValues, style: ResolverStyle) -> Result<C::Date, CalendarError> {
    let year = take_checked(chronology, fields, ChronoField::Year)?;
    if style == ResolverStyle::Lenient {
        let months = minus_one(take(fields, ChronoField::MonthOfYear)?)?;
        let weeks = minus_one(take(fields, ChronoField::AlignedWeekOfMonth)?)?;
        let days = minus_one(take(fields, ChronoField::AlignedDayOfWeekInMonth)?)?;
        return chronology
            .date(year, 1, 1)?
            .plus_months(months)?
            .plus_weeks(weeks)?
            .plus_days(days);
    }
    let month = take_checked(chronology, fields, ChronoField::MonthOfYear)?;
    let week = take_checked(chronology, fields, ChronoField::AlignedWeekOfMonth)?;
    let day = take_checked(chronology, fields, ChronoField::AlignedDayOfWeekInMonth)?;
    let date = chronology.date_aligned_week_of_month(year, month, week, day)?;
    check_same_month(style, &date, month)?;
    check_aligned(style, &date, ChronoField::AlignedWeekOfMonth, week)?;
    check_aligned(style, &date, ChronoField::AlignedDayOfWeekInMonth, day)?;
    Ok(date)
}

fn resolve_ymad<C: Chronology>(chronology: &C, fields: &mut FieldValues, style: ResolverStyle) -> Result<C::Date, CalendarError> {
    let year = take_checked(chronology, fields, ChronoField::Year)?;
    if style == ResolverStyle::Lenient {
        let months = minus_one(take(fields, ChronoField::MonthOfYear)?)?;
        let weeks = minus_one(take(fields, ChronoField::AlignedWeekOfMonth)?)?;
        let day_of_week = take(fields, ChronoField::DayOfWeek)?;
        let date = chronology.date(year, 1, 1)?.plus_months(months)?.plus_weeks(weeks)?;
        return next_or_same(&date, day_of_week);
    }
    let month = take_checked(chronology, fields, ChronoField::MonthOfYear)?;
    let week = take_checked(chronology, fields, ChronoField::AlignedWeekOfMonth)?;
    let day_of_week = take(fields, ChronoField::DayOfWeek)?;
    DAY_OF_WEEK_RANGE.check_valid_value(day_of_week, ChronoField::DayOfWeek)?;
    let date = chronology.date_aligned_week_of_month(year, month, week, 1)?;
    let date = next_or_same(&date, day_of_week)?;
    check_same_month(style, &date, month)?;
    check_aligned(style, &date, ChronoField::AlignedWeekOfMonth, week)?;
    Ok(date)
}

fn resolve_yd<C: Chronology>(chronology: &C, fields: &mut FieldValues, style: ResolverStyle) -> Result<C::Date, CalendarError> {
    let year = take_checked(chronology, fields, ChronoField::Year)?;
    if style == ResolverStyle::Lenient {
        let days = minus_one(take(fields, ChronoField::DayOfYear)?)?;
        return chronology.date_year_day(year, 1)?.plus_days(days);
    }
    let day_of_year = take_checked(chronology, fields, ChronoField::DayOfYear)?;
    chronology.date_year_day(year, day_of_year)
}

fn resolve_yaa<C: Chronology>(chronology: &C, fields: &mut FieldValues, style: ResolverStyle) -> Result<C::Date, CalendarError> {
    let year = take_checked(chronology, fields, ChronoField::Year)?;
    if style == ResolverStyle::Lenient {
        let weeks = minus_one(take(fields, ChronoField::AlignedWeekOfYear)?)?;
        let days = minus_one(take(fields, ChronoField::AlignedDayOfWeekInYear)?)?;
        return chronology.date_year_day(year, 1)?.plus_weeks(weeks)?.plus_days(days);
    }
    let week = take_checked(chronology, fields, ChronoField::AlignedWeekOfYear)?;
    let day = take_checked(chronology, fields, ChronoField::AlignedDayOfWeekInYear)?;
    let date = chronology.date_aligned_week_of_year(year, week, day)?;
    check_same_year(style, &date, year)?;
    check_aligned(style, &date, ChronoField::AlignedWeekOfYear, week)?;
    check_aligned(style, &date, ChronoField::AlignedDayOfWeekInYear, day)?;
    Ok(date)
}

fn resolve_yad<C: Chronology>(chronology: &C, fields: &mut FieldValues, style: ResolverStyle) -> Result<C::Date, CalendarError> {
    let year = take_checked(chronology, fields, ChronoField::Year)?;
    if style == ResolverStyle::Lenient {
        let weeks = minus_one(take(fields, ChronoField::AlignedWeekOfYear)?)?;
        let day_of_week = take(fields, ChronoField::DayOfWeek)?;
        let date = chronology.date_year_day(year, 1)?.plus_weeks(weeks)?;
        return next_or_same(&date, day_of_week);
    }
    let week = take_checked(chronology, fields, ChronoField::AlignedWeekOfYear)?;
    let day_of_week = take(fields, ChronoField::DayOfWeek)?;
    DAY_OF_WEEK_RANGE.check_valid_value(day_of_week, ChronoField::DayOfWeek)?;
    let date = chronology.date_aligned_week_of_year(year, week, 1)?;
    let date = next_or_same(&date, day_of_week)?;
    check_same_year(style, &date, year)?;
    check_aligned(style, &date, ChronoField::AlignedWeekOfYear, week)?;
    Ok(date)
}

/// The first date on or after `date` falling on `day_of_week`
fn next_or_same<D: CalendarDate>(date: &D, day_of_week: i64) -> Result<D, CalendarError> {
    let current = i64::from(date.day_of_week());
    let shift = day_of_week
        .checked_sub(current)
        .ok_or(CalendarError::Overflow("day of week"))?
        .rem_euclid(7);
    date.plus_days(shift)
}

fn check_same_month<D: CalendarDate>(style: ResolverStyle, date: &D, month: i32) -> Result<(), CalendarError> {
    if style == ResolverStyle::Strict && i32::from(date.month()) != month {
        return Err(CalendarError::invalid_date(
            "Strict mode rejected resolved date as it is in a different month",
        ));
    }
    Ok(())
}

fn check_same_year<D: CalendarDate>(style: ResolverStyle, date: &D, year: i32) -> Result<(), CalendarError> {
    if style == ResolverStyle::Strict && date.proleptic_year() != year {
        return Err(CalendarError::invalid_date(
            "Strict mode rejected resolved date as it is in a different year",
        ));
    }
    Ok(())
}

fn check_aligned<D: CalendarDate>(style: ResolverStyle, date: &D, field: ChronoField, value: i32) -> Result<(), CalendarError> {
    if style == ResolverStyle::Strict && date.get_long(field)? != i64::from(value) {
        return Err(CalendarError::invalid_date(format!(
            "Strict mode rejected resolved date as its {field} is not {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        BritishCutoverChronology, InternationalFixedChronology, InternationalFixedDate, IsoDate, JulianChronology,
        JulianDate,
    };

    fn fields(values: &[(ChronoField, i64)]) -> FieldValues {
        values.iter().copied().collect()
    }

    fn julian(year: i32, month: i32, day: i32) -> JulianDate {
        JulianChronology::INSTANCE.date(year, month, day).unwrap()
    }

    #[test]
    fn test_resolve_ymd_styles() {
        struct TestCase {
            style:       ResolverStyle,
            day:         i64,
            expected:    Option<JulianDate>,
            description: &'static str,
        }

        let cases = [
            TestCase {
                style:       ResolverStyle::Strict,
                day:         30,
                expected:    None,
                description: "strict rejects February 30",
            },
            TestCase {
                style:       ResolverStyle::Smart,
                day:         30,
                expected:    Some(julian(2011, 2, 28)),
                description: "smart clamps to the month end",
            },
            TestCase {
                style:       ResolverStyle::Lenient,
                day:         30,
                expected:    Some(julian(2011, 3, 2)),
                description: "lenient rolls into March",
            },
            TestCase {
                style:       ResolverStyle::Strict,
                day:         28,
                expected:    Some(julian(2011, 2, 28)),
                description: "valid date in every style",
            },
        ];

        for case in &cases {
            let mut map = fields(&[
                (ChronoField::Year, 2011),
                (ChronoField::MonthOfYear, 2),
                (ChronoField::DayOfMonth, case.day),
            ]);
            let result = JulianChronology::INSTANCE.resolve_date(&mut map, case.style);
            match case.expected {
                Some(expected) => assert_eq!(result, Ok(Some(expected)), "{}", case.description),
                None => assert!(result.is_err(), "{}", case.description),
            }
            assert!(map.is_empty(), "{}: fields should be consumed", case.description);
        }
    }

    #[test]
    fn test_smart_rejects_out_of_range_day() {
        let mut map = fields(&[
            (ChronoField::Year, 2011),
            (ChronoField::MonthOfYear, 2),
            (ChronoField::DayOfMonth, 32),
        ]);
        assert!(matches!(
            JulianChronology::INSTANCE.resolve_date(&mut map, ResolverStyle::Smart),
            Err(CalendarError::InvalidValue {
                field: ChronoField::DayOfMonth,
                ..
            })
        ));
    }

    #[test]
    fn test_epoch_day_wins() {
        let mut map = fields(&[(ChronoField::EpochDay, 0), (ChronoField::Year, 5)]);
        let date = JulianChronology::INSTANCE
            .resolve_date(&mut map, ResolverStyle::Strict)
            .unwrap();
        assert_eq!(date, Some(julian(1969, 12, 19)));
        assert!(map.contains_key(&ChronoField::Year));
    }

    #[test]
    fn test_proleptic_month_splits() {
        let mut map = fields(&[(ChronoField::ProlepticMonth, 2012 * 12 + 5), (ChronoField::DayOfMonth, 23)]);
        let date = JulianChronology::INSTANCE
            .resolve_date(&mut map, ResolverStyle::Smart)
            .unwrap();
        assert_eq!(date, Some(julian(2012, 6, 23)));
    }

    #[test]
    fn test_proleptic_month_conflict() {
        let mut map = fields(&[
            (ChronoField::ProlepticMonth, 2012 * 12 + 5),
            (ChronoField::MonthOfYear, 7),
            (ChronoField::DayOfMonth, 1),
        ]);
        assert_eq!(
            JulianChronology::INSTANCE.resolve_date(&mut map, ResolverStyle::Smart),
            Err(CalendarError::FieldConflict {
                field:    ChronoField::MonthOfYear,
                existing: 7,
                value:    6,
            })
        );
    }

    #[test]
    fn test_year_of_era_with_era() {
        let mut map = fields(&[
            (ChronoField::Era, 0),
            (ChronoField::YearOfEra, 981),
            (ChronoField::MonthOfYear, 1),
            (ChronoField::DayOfMonth, 1),
        ]);
        let date = JulianChronology::INSTANCE
            .resolve_date(&mut map, ResolverStyle::Strict)
            .unwrap();
        assert_eq!(date, Some(julian(-980, 1, 1)));
    }

    #[test]
    fn test_year_of_era_without_era() {
        let base = [
            (ChronoField::YearOfEra, 2012),
            (ChronoField::MonthOfYear, 6),
            (ChronoField::DayOfMonth, 23),
        ];

        let mut smart = fields(&base);
        assert_eq!(
            JulianChronology::INSTANCE.resolve_date(&mut smart, ResolverStyle::Smart),
            Ok(Some(julian(2012, 6, 23)))
        );

        let mut strict = fields(&base);
        assert_eq!(
            JulianChronology::INSTANCE.resolve_date(&mut strict, ResolverStyle::Strict),
            Ok(None)
        );
        assert_eq!(strict.get(&ChronoField::YearOfEra), Some(&2012));
    }

    #[test]
    fn test_year_of_era_cross_checks_year() {
        let mut map = fields(&[
            (ChronoField::YearOfEra, 5),
            (ChronoField::Year, -4),
            (ChronoField::DayOfYear, 1),
        ]);
        assert_eq!(
            JulianChronology::INSTANCE.resolve_date(&mut map, ResolverStyle::Strict),
            Ok(Some(julian(-4, 1, 1)))
        );
    }

    #[test]
    fn test_invalid_era_value() {
        let mut map = fields(&[(ChronoField::Era, 2), (ChronoField::Year, 2012)]);
        assert!(JulianChronology::INSTANCE.resolve_date(&mut map, ResolverStyle::Smart).is_err());
    }

    #[test]
    fn test_resolve_day_of_year() {
        let mut map = fields(&[(ChronoField::Year, 2012), (ChronoField::DayOfYear, 60)]);
        assert_eq!(
            JulianChronology::INSTANCE.resolve_date(&mut map, ResolverStyle::Smart),
            Ok(Some(julian(2012, 2, 29)))
        );

        let mut lenient = fields(&[(ChronoField::Year, 2011), (ChronoField::DayOfYear, 366)]);
        assert_eq!(
            JulianChronology::INSTANCE.resolve_date(&mut lenient, ResolverStyle::Lenient),
            Ok(Some(julian(2012, 1, 1)))
        );
    }

    #[test]
    fn test_resolve_aligned_week_of_month() {
        let mut map = fields(&[
            (ChronoField::Year, 2012),
            (ChronoField::MonthOfYear, 6),
            (ChronoField::AlignedWeekOfMonth, 4),
            (ChronoField::AlignedDayOfWeekInMonth, 2),
        ]);
        assert_eq!(
            JulianChronology::INSTANCE.resolve_date(&mut map, ResolverStyle::Strict),
            Ok(Some(julian(2012, 6, 23)))
        );

        let mut overflowing = fields(&[
            (ChronoField::Year, 2011),
            (ChronoField::MonthOfYear, 2),
            (ChronoField::AlignedWeekOfMonth, 5),
            (ChronoField::AlignedDayOfWeekInMonth, 7),
        ]);
        assert!(matches!(
            JulianChronology::INSTANCE.resolve_date(&mut overflowing, ResolverStyle::Strict),
            Err(CalendarError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_resolve_aligned_week_with_day_of_week() {
        let chronology = InternationalFixedChronology::INSTANCE;
        // Every International Fixed month starts on a Sunday, day of week 1
        let mut map = fields(&[
            (ChronoField::Year, 2012),
            (ChronoField::MonthOfYear, 3),
            (ChronoField::AlignedWeekOfMonth, 2),
            (ChronoField::DayOfWeek, 3),
        ]);
        assert_eq!(
            chronology.resolve_date(&mut map, ResolverStyle::Smart),
            Ok(Some(chronology.date(2012, 3, 10).unwrap()))
        );
    }

    #[test]
    fn test_resolve_aligned_week_of_year() {
        let mut map = fields(&[
            (ChronoField::Year, 2012),
            (ChronoField::AlignedWeekOfYear, 2),
            (ChronoField::AlignedDayOfWeekInYear, 3),
        ]);
        assert_eq!(
            JulianChronology::INSTANCE.resolve_date(&mut map, ResolverStyle::Smart),
            Ok(Some(julian(2012, 1, 10)))
        );
    }

    #[test]
    fn test_resolve_ifc_week_grid_in_leap_year() {
        struct TestCase {
            year:        i64,
            week:        i64,
            day:         (ChronoField, i64),
            style:       ResolverStyle,
            expected:    Option<(i32, i32, i32)>,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        2012,
                week:        24,
                day:         (ChronoField::AlignedDayOfWeekInYear, 7),
                style:       ResolverStyle::Strict,
                expected:    Some((2012, 6, 28)),
                description: "last week before Leap Day",
            },
            TestCase {
                year:        2012,
                week:        25,
                day:         (ChronoField::AlignedDayOfWeekInYear, 1),
                style:       ResolverStyle::Strict,
                expected:    Some((2012, 7, 1)),
                description: "first week after Leap Day",
            },
            TestCase {
                year:        2012,
                week:        52,
                day:         (ChronoField::AlignedDayOfWeekInYear, 7),
                style:       ResolverStyle::Strict,
                expected:    Some((2012, 13, 28)),
                description: "last week of a leap year",
            },
            TestCase {
                year:        2011,
                week:        25,
                day:         (ChronoField::AlignedDayOfWeekInYear, 1),
                style:       ResolverStyle::Smart,
                expected:    Some((2011, 7, 1)),
                description: "common year",
            },
            TestCase {
                year:        2012,
                week:        25,
                day:         (ChronoField::AlignedDayOfWeekInYear, 1),
                style:       ResolverStyle::Lenient,
                expected:    Some((2012, 7, 1)),
                description: "lenient moves along the grid",
            },
            TestCase {
                year:        2012,
                week:        25,
                day:         (ChronoField::DayOfWeek, 3),
                style:       ResolverStyle::Strict,
                expected:    Some((2012, 7, 3)),
                description: "day of week after Leap Day",
            },
            TestCase {
                year:        2012,
                week:        52,
                day:         (ChronoField::DayOfWeek, 7),
                style:       ResolverStyle::Smart,
                expected:    Some((2012, 13, 28)),
                description: "day of week in the last week",
            },
            TestCase {
                year:        2012,
                week:        0,
                day:         (ChronoField::AlignedDayOfWeekInYear, 0),
                style:       ResolverStyle::Strict,
                expected:    None,
                description: "intercalary week is not addressable",
            },
        ];

        let chronology = InternationalFixedChronology::INSTANCE;
        for case in &cases {
            let mut map = fields(&[
                (ChronoField::Year, case.year),
                (ChronoField::AlignedWeekOfYear, case.week),
                case.day,
            ]);
            let result = chronology.resolve_date(&mut map, case.style);
            match case.expected {
                Some((year, month, day)) => {
                    let expected = InternationalFixedDate::of(year, month, day).unwrap();
                    assert_eq!(result, Ok(Some(expected)), "{}", case.description);
                    assert_eq!(
                        expected.get_long(ChronoField::AlignedWeekOfYear),
                        Ok(case.week),
                        "{}",
                        case.description
                    );
                },
                None => assert!(result.is_err(), "{}", case.description),
            }
        }
    }

    #[test]
    fn test_resolve_aligned_week_of_month_after_cutover_gap() {
        let chronology = BritishCutoverChronology::new(IsoDate::of(1582, 10, 2).unwrap()).unwrap();
        let cases = [(1, 1, 2), (1, 7, 8), (5, 2, 31)];
        for (week, day, expected) in cases {
            let mut map = fields(&[
                (ChronoField::Year, 1582),
                (ChronoField::MonthOfYear, 10),
                (ChronoField::AlignedWeekOfMonth, week),
                (ChronoField::AlignedDayOfWeekInMonth, day),
            ]);
            assert_eq!(
                chronology.resolve_date(&mut map, ResolverStyle::Strict),
                Ok(Some(chronology.date(1582, 10, expected).unwrap())),
                "week {week} day {day}"
            );
        }

        let mut past_end = fields(&[
            (ChronoField::Year, 1582),
            (ChronoField::MonthOfYear, 10),
            (ChronoField::AlignedWeekOfMonth, 5),
            (ChronoField::AlignedDayOfWeekInMonth, 3),
        ]);
        assert!(chronology.resolve_date(&mut past_end, ResolverStyle::Strict).is_err());
    }

    #[test]
    fn test_insufficient_fields() {
        let mut map = fields(&[(ChronoField::Year, 2012), (ChronoField::MonthOfYear, 6)]);
        assert_eq!(
            JulianChronology::INSTANCE.resolve_date(&mut map, ResolverStyle::Smart),
            Ok(None)
        );
        assert_eq!(map.len(), 2);
    }
}
