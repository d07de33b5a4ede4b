use std::fmt;

use crate::{CalendarError, ChronoUnit, Chronology};

/// An amount of years, months and days in one chronology.
///
/// Periods are not normalized on creation: `P14M` stays fourteen months
/// until [`ChronoPeriod::normalized`] is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChronoPeriod<C> {
    chronology: C,
    years: i32,
    months: i32,
    days: i32,
}

fn overflow() -> CalendarError {
    CalendarError::Overflow("period")
}

impl<C: Chronology> ChronoPeriod<C> {
    pub const fn new(chronology: C, years: i32, months: i32, days: i32) -> Self {
        Self {
            chronology,
            years,
            months,
            days,
        }
    }

    pub const fn chronology(&self) -> C {
        self.chronology
    }

    pub const fn years(&self) -> i32 {
        self.years
    }

    pub const fn months(&self) -> i32 {
        self.months
    }

    pub const fn days(&self) -> i32 {
        self.days
    }

    /// # Errors
    /// Returns `CalendarError::UnsupportedUnit` for anything but years, months and days.
    pub fn get(&self, unit: ChronoUnit) -> Result<i64, CalendarError> {
        match unit {
            ChronoUnit::Years => Ok(i64::from(self.years)),
            ChronoUnit::Months => Ok(i64::from(self.months)),
            ChronoUnit::Days => Ok(i64::from(self.days)),
            _ => Err(CalendarError::UnsupportedUnit(unit)),
        }
    }

    pub const fn units() -> [ChronoUnit; 3] {
        [ChronoUnit::Years, ChronoUnit::Months, ChronoUnit::Days]
    }

    pub const fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.years < 0 || self.months < 0 || self.days < 0
    }

    /// Total months, counting each year as a full year of this chronology's months
    pub fn to_total_months(&self) -> i64 {
        i64::from(self.years) * i64::from(self.chronology.months_in_year()) + i64::from(self.months)
    }

    /// Adds component-wise.
    ///
    /// # Errors
    /// Returns `CalendarError::ChronologyMismatch` for a period of another
    /// chronology and `CalendarError::Overflow` if a component overflows.
    pub fn plus(&self, other: &Self) -> Result<Self, CalendarError> {
        self.check_chronology(other)?;
        Ok(Self::new(
            self.chronology,
            self.years.checked_add(other.years).ok_or_else(overflow)?,
            self.months.checked_add(other.months).ok_or_else(overflow)?,
            self.days.checked_add(other.days).ok_or_else(overflow)?,
        ))
    }

    /// # Errors
    /// See [`ChronoPeriod::plus`].
    pub fn minus(&self, other: &Self) -> Result<Self, CalendarError> {
        self.check_chronology(other)?;
        Ok(Self::new(
            self.chronology,
            self.years.checked_sub(other.years).ok_or_else(overflow)?,
            self.months.checked_sub(other.months).ok_or_else(overflow)?,
            self.days.checked_sub(other.days).ok_or_else(overflow)?,
        ))
    }

    /// # Errors
    /// Returns `CalendarError::Overflow` if a component overflows.
    pub fn multiplied_by(&self, scalar: i32) -> Result<Self, CalendarError> {
        if self.is_zero() || scalar == 1 {
            return Ok(*self);
        }
        Ok(Self::new(
            self.chronology,
            self.years.checked_mul(scalar).ok_or_else(overflow)?,
            self.months.checked_mul(scalar).ok_or_else(overflow)?,
            self.days.checked_mul(scalar).ok_or_else(overflow)?,
        ))
    }

    /// # Errors
    /// Returns `CalendarError::Overflow` if a component is `i32::MIN`.
    pub fn negated(&self) -> Result<Self, CalendarError> {
        self.multiplied_by(-1)
    }

    /// Moves whole years out of the months component, leaving days untouched.
    ///
    /// # Errors
    /// Returns `CalendarError::Overflow` if the years no longer fit an `i32`.
    pub fn normalized(&self) -> Result<Self, CalendarError> {
        let months_in_year = i64::from(self.chronology.months_in_year());
        let total = self.to_total_months();
        let years = i32::try_from(total / months_in_year).map_err(|_| overflow())?;
        let months = i32::try_from(total % months_in_year).map_err(|_| overflow())?;
        if years == self.years && months == self.months {
            return Ok(*self);
        }
        Ok(Self::new(self.chronology, years, months, self.days))
    }

    fn check_chronology(&self, other: &Self) -> Result<(), CalendarError> {
        if self.chronology == other.chronology {
            Ok(())
        } else {
            Err(CalendarError::ChronologyMismatch {
                expected: self.chronology.id(),
                actual: other.chronology.id(),
            })
        }
    }
}

impl<C: Chronology> fmt::Display for ChronoPeriod<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.chronology)?;
        if self.is_zero() {
            return f.write_str("P0D");
        }
        f.write_str("P")?;
        if self.years != 0 {
            write!(f, "{}Y", self.years)?;
        }
        if self.months != 0 {
            write!(f, "{}M", self.months)?;
        }
        if self.days != 0 {
            write!(f, "{}D", self.days)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InternationalFixedChronology, JulianChronology};

    #[test]
    fn test_display() {
        struct TestCase {
            period:   ChronoPeriod<JulianChronology>,
            expected: &'static str,
        }

        let julian = JulianChronology::INSTANCE;
        let cases = [
            TestCase {
                period:   julian.period(1, 2, 3),
                expected: "Julian P1Y2M3D",
            },
            TestCase {
                period:   julian.period(0, 0, 0),
                expected: "Julian P0D",
            },
            TestCase {
                period:   julian.period(0, -5, 0),
                expected: "Julian P-5M",
            },
            TestCase {
                period:   julian.period(2, 0, 7),
                expected: "Julian P2Y7D",
            },
        ];

        for case in &cases {
            assert_eq!(case.period.to_string(), case.expected);
        }
    }

    #[test]
    fn test_get_units() {
        let period = JulianChronology::INSTANCE.period(1, 2, 3);
        assert_eq!(period.get(ChronoUnit::Years), Ok(1));
        assert_eq!(period.get(ChronoUnit::Months), Ok(2));
        assert_eq!(period.get(ChronoUnit::Days), Ok(3));
        assert_eq!(
            period.get(ChronoUnit::Weeks),
            Err(CalendarError::UnsupportedUnit(ChronoUnit::Weeks))
        );
        assert_eq!(ChronoPeriod::<JulianChronology>::units().len(), 3);
    }

    #[test]
    fn test_arithmetic() {
        let julian = JulianChronology::INSTANCE;
        let a = julian.period(1, 2, 3);
        let b = julian.period(0, 11, 30);
        assert_eq!(a.plus(&b).unwrap(), julian.period(1, 13, 33));
        assert_eq!(a.minus(&b).unwrap(), julian.period(1, -9, -27));
        assert_eq!(a.multiplied_by(3).unwrap(), julian.period(3, 6, 9));
        assert_eq!(a.negated().unwrap(), julian.period(-1, -2, -3));
        assert!(a.negated().unwrap().is_negative());
        assert!(!a.is_negative());
        assert!(julian.period(i32::MIN, 0, 0).negated().is_err());
        assert!(julian.period(0, 0, i32::MAX).plus(&julian.period(0, 0, 1)).is_err());
    }

    #[test]
    fn test_normalized_uses_months_in_year() {
        let julian = JulianChronology::INSTANCE.period(1, 14, 3);
        assert_eq!(julian.normalized().unwrap(), JulianChronology::INSTANCE.period(2, 2, 3));
        assert_eq!(julian.to_total_months(), 26);

        let ifc = InternationalFixedChronology::INSTANCE.period(0, 14, 3);
        assert_eq!(
            ifc.normalized().unwrap(),
            InternationalFixedChronology::INSTANCE.period(1, 1, 3)
        );

        let negative = JulianChronology::INSTANCE.period(1, -15, 0);
        assert_eq!(negative.normalized().unwrap(), JulianChronology::INSTANCE.period(0, -3, 0));
    }
}
