//! Text form of calendar dates.
//!
//! Every date displays as `<chronology id> <era> <year of era><sep><month><sep><day>`,
//! e.g. `Julian AD 1-01-01` or `Ifc CE 2012/06/23`, and parses back from
//! the same form.

use std::fmt;

use crate::{CalendarDate, CalendarError, Chronology};

pub(crate) fn write_date<D: CalendarDate>(f: &mut fmt::Formatter<'_>, date: &D, separator: char) -> fmt::Result {
    write!(
        f,
        "{} {} {}{separator}{:02}{separator}{:02}",
        date.chronology().id(),
        date.era(),
        date.year_of_era(),
        date.month(),
        date.day_of_month()
    )
}

/// Parses the display form of a date of `chronology`.
pub(crate) fn parse_date<C: Chronology>(chronology: C, s: &str, separator: char) -> Result<C::Date, CalendarError> {
    let trimmed = s.trim();
    let malformed = || CalendarError::Parse(trimmed.to_owned());

    let mut tokens = trimmed.split_whitespace();
    let (Some(id), Some(era), Some(ymd), None) = (tokens.next(), tokens.next(), tokens.next(), tokens.next()) else {
        return Err(malformed());
    };
    if id != chronology.id() {
        return Err(CalendarError::Parse(format!(
            "expected a {} date: {trimmed}",
            chronology.id()
        )));
    }
    let era = chronology
        .eras()
        .iter()
        .copied()
        .find(|candidate| candidate.to_string() == era)
        .ok_or_else(malformed)?;

    let parts: Vec<&str> = ymd.split(separator).collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(malformed());
    };
    let parse = |part: &str| part.parse::<i32>().map_err(|_| malformed());
    chronology.date_era(era, parse(year)?, parse(month)?, parse(day)?)
}

/// Implements `Serialize` and `Deserialize` through `Display` and `FromStr`.
macro_rules! impl_serde_as_string {
    ($ty:ty) => {
        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.to_string())
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use impl_serde_as_string;
