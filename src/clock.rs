//! Clock abstraction for the `date_now` family.
//!
//! Chronologies never read the system time directly inside
//! `date_now_with`; they ask a [`Clock`], so tests can pin the current date.

use chrono::{DateTime, Duration, FixedOffset, Offset, Utc};

use crate::CalendarError;

/// Source of the current instant, in the clock's own offset.
pub trait Clock: Send + Sync {
    /// Current time as seen by this clock.
    ///
    /// # Errors
    /// Returns `CalendarError::Overflow` if the instant cannot be represented.
    fn now(&self) -> Result<DateTime<FixedOffset>, CalendarError>;
}

/// The system clock, observed at a fixed offset from UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    pub const fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    pub fn utc() -> Self {
        Self::new(Utc.fix())
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::utc()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Result<DateTime<FixedOffset>, CalendarError> {
        Ok(Utc::now().with_timezone(&self.offset))
    }
}

/// A clock stopped at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<Utc>,
    offset: FixedOffset,
}

impl FixedClock {
    pub const fn new(instant: DateTime<Utc>, offset: FixedOffset) -> Self {
        Self { instant, offset }
    }

    pub fn utc(instant: DateTime<Utc>) -> Self {
        Self::new(instant, Utc.fix())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Result<DateTime<FixedOffset>, CalendarError> {
        Ok(self.instant.with_timezone(&self.offset))
    }
}

/// A clock running a fixed duration ahead of (or behind) another clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetClock<C> {
    base: C,
    offset: Duration,
}

impl<C: Clock> OffsetClock<C> {
    pub const fn new(base: C, offset: Duration) -> Self {
        Self { base, offset }
    }
}

impl<C: Clock> Clock for OffsetClock<C> {
    fn now(&self) -> Result<DateTime<FixedOffset>, CalendarError> {
        self.base
            .now()?
            .checked_add_signed(self.offset)
            .ok_or(CalendarError::Overflow("clock offset exceeds the supported instant range"))
    }
}
