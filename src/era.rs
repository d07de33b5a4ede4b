use std::fmt;
use std::hash::Hash;

use crate::prelude::*;
use crate::{CalendarError, Chronology, InternationalFixedChronology, JulianChronology, Symmetry010Chronology};

/// An era of one specific chronology.
pub trait CalendarEra: Copy + Eq + Hash + fmt::Debug + fmt::Display + Into<Era> {
    /// Numeric value of the era, stable across releases
    fn value(self) -> i32;
}

/// The two eras of the Julian calendar, also used by the British cutover calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum JulianEra {
    /// Before Christ, proleptic years 0 and earlier
    #[display(fmt = "BC")]
    Bc = 0,
    /// Anno Domini, proleptic years 1 and later
    #[display(fmt = "AD")]
    Ad = 1,
}

impl JulianEra {
    /// Same as [`Chronology::era_of`] on [`JulianChronology`].
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidEra` for anything other than 0 or 1.
    pub fn of(value: i32) -> Result<Self, CalendarError> {
        JulianChronology::INSTANCE.era_of(value)
    }
}

impl CalendarEra for JulianEra {
    fn value(self) -> i32 {
        self as i32
    }
}

/// The single era of the International Fixed calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum InternationalFixedEra {
    #[display(fmt = "CE")]
    Ce = 1,
}

impl InternationalFixedEra {
    /// Same as [`Chronology::era_of`] on [`InternationalFixedChronology`].
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidEra` for anything other than 1.
    pub fn of(value: i32) -> Result<Self, CalendarError> {
        InternationalFixedChronology::INSTANCE.era_of(value)
    }
}

impl CalendarEra for InternationalFixedEra {
    fn value(self) -> i32 {
        self as i32
    }
}

/// The single era of the Symmetry010 calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Symmetry010Era {
    #[display(fmt = "CE")]
    Ce = 1,
}

impl Symmetry010Era {
    /// Same as [`Chronology::era_of`] on [`Symmetry010Chronology`].
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidEra` for anything other than 1.
    pub fn of(value: i32) -> Result<Self, CalendarError> {
        Symmetry010Chronology::INSTANCE.era_of(value)
    }
}

impl CalendarEra for Symmetry010Era {
    fn value(self) -> i32 {
        self as i32
    }
}

/// The eras of the ISO proleptic calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum IsoEra {
    #[display(fmt = "BCE")]
    Bce = 0,
    #[display(fmt = "CE")]
    Ce = 1,
}

impl CalendarEra for IsoEra {
    fn value(self) -> i32 {
        self as i32
    }
}

/// An era from any chronology known to this crate.
///
/// Chronologies accept `impl Into<Era>` where an era is supplied at run time
/// and reject eras of other calendars with `CalendarError::EraMismatch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From)]
pub enum Era {
    Iso(IsoEra),
    Julian(JulianEra),
    InternationalFixed(InternationalFixedEra),
    Symmetry010(Symmetry010Era),
}

impl Era {
    pub const fn value(self) -> i32 {
        match self {
            Self::Iso(era) => era as i32,
            Self::Julian(era) => era as i32,
            Self::InternationalFixed(era) => era as i32,
            Self::Symmetry010(era) => era as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_julian_era_of() {
        assert_eq!(JulianEra::of(0), Ok(JulianEra::Bc));
        assert_eq!(JulianEra::of(1), Ok(JulianEra::Ad));
        assert_eq!(JulianEra::of(2), Err(CalendarError::InvalidEra(2)));
        assert_eq!(JulianEra::of(-1), Err(CalendarError::InvalidEra(-1)));
    }

    #[test]
    fn test_single_eras_of() {
        assert_eq!(InternationalFixedEra::of(1), Ok(InternationalFixedEra::Ce));
        assert!(InternationalFixedEra::of(0).is_err());
        assert_eq!(Symmetry010Era::of(1), Ok(Symmetry010Era::Ce));
        assert!(Symmetry010Era::of(2).is_err());
    }

    #[test]
    fn test_of_agrees_with_chronology() {
        for value in -2..=2 {
            assert_eq!(JulianEra::of(value), JulianChronology::INSTANCE.era_of(value), "{value}");
            assert_eq!(
                JulianEra::of(value),
                crate::BritishCutoverChronology::INSTANCE.era_of(value),
                "{value}"
            );
            assert_eq!(
                InternationalFixedEra::of(value),
                InternationalFixedChronology::INSTANCE.era_of(value),
                "{value}"
            );
            assert_eq!(Symmetry010Era::of(value), Symmetry010Chronology::INSTANCE.era_of(value), "{value}");
        }
    }

    #[test]
    fn test_era_display() {
        assert_eq!(JulianEra::Ad.to_string(), "AD");
        assert_eq!(JulianEra::Bc.to_string(), "BC");
        assert_eq!(InternationalFixedEra::Ce.to_string(), "CE");
        assert_eq!(Era::from(IsoEra::Bce).to_string(), "BCE");
    }

    #[test]
    fn test_era_values() {
        assert_eq!(JulianEra::Bc.value(), 0);
        assert_eq!(JulianEra::Ad.value(), 1);
        assert_eq!(Era::from(Symmetry010Era::Ce).value(), 1);
        assert_eq!(Era::from(IsoEra::Bce).value(), 0);
    }
}
