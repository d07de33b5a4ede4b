use crate::prelude::*;

/// A standard temporal field.
///
/// The enumeration is closed: every chronology in this crate dispatches on
/// it with a `match`. Time based fields are listed so that querying them
/// yields a precise [`CalendarError::UnsupportedField`](crate::CalendarError)
/// rather than being unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum ChronoField {
    NanoOfSecond,
    NanoOfDay,
    MicroOfSecond,
    MicroOfDay,
    MilliOfSecond,
    MilliOfDay,
    SecondOfMinute,
    SecondOfDay,
    MinuteOfHour,
    MinuteOfDay,
    HourOfAmPm,
    ClockHourOfAmPm,
    HourOfDay,
    ClockHourOfDay,
    AmPmOfDay,
    DayOfWeek,
    AlignedDayOfWeekInMonth,
    AlignedDayOfWeekInYear,
    DayOfMonth,
    DayOfYear,
    EpochDay,
    AlignedWeekOfMonth,
    AlignedWeekOfYear,
    MonthOfYear,
    ProlepticMonth,
    YearOfEra,
    Year,
    Era,
    InstantSeconds,
    OffsetSeconds,
}

impl ChronoField {
    /// Every date based field, in declaration order
    pub const DATE_FIELDS: [Self; 13] = [
        Self::DayOfWeek,
        Self::AlignedDayOfWeekInMonth,
        Self::AlignedDayOfWeekInYear,
        Self::DayOfMonth,
        Self::DayOfYear,
        Self::EpochDay,
        Self::AlignedWeekOfMonth,
        Self::AlignedWeekOfYear,
        Self::MonthOfYear,
        Self::ProlepticMonth,
        Self::YearOfEra,
        Self::Year,
        Self::Era,
    ];

    /// Returns true for the fields a date-only value can supply
    pub const fn is_date_based(self) -> bool {
        matches!(
            self,
            Self::DayOfWeek
                | Self::AlignedDayOfWeekInMonth
                | Self::AlignedDayOfWeekInYear
                | Self::DayOfMonth
                | Self::DayOfYear
                | Self::EpochDay
                | Self::AlignedWeekOfMonth
                | Self::AlignedWeekOfYear
                | Self::MonthOfYear
                | Self::ProlepticMonth
                | Self::YearOfEra
                | Self::Year
                | Self::Era
        )
    }

    pub const fn is_time_based(self) -> bool {
        !self.is_date_based() && !matches!(self, Self::InstantSeconds | Self::OffsetSeconds)
    }
}

/// A standard unit of temporal amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum ChronoUnit {
    Nanos,
    Micros,
    Millis,
    Seconds,
    Minutes,
    Hours,
    HalfDays,
    Days,
    Weeks,
    Months,
    Years,
    Decades,
    Centuries,
    Millennia,
    Eras,
    Forever,
}

impl ChronoUnit {
    /// Returns true for the units that dates in this crate can add
    pub const fn is_date_based(self) -> bool {
        matches!(
            self,
            Self::Days
                | Self::Weeks
                | Self::Months
                | Self::Years
                | Self::Decades
                | Self::Centuries
                | Self::Millennia
                | Self::Eras
        )
    }

    /// Number of years in one unit, for the year-multiple units
    pub(crate) const fn years(self) -> Option<i64> {
        match self {
            Self::Years => Some(1),
            Self::Decades => Some(10),
            Self::Centuries => Some(100),
            Self::Millennia => Some(1_000),
            _ => None,
        }
    }
}

/// How strictly a map of field values is turned into a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum ResolverStyle {
    /// Every field must be in range and the date must exist
    Strict,
    /// Fields must be in range; an overlong day of month clamps to the month end
    #[default]
    Smart,
    /// Out of range values roll over into the next month or year
    Lenient,
}
