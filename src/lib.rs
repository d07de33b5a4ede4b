//! Alternative calendar systems on a shared epoch-day line.
//!
//! Four chronologies are provided: the proleptic Julian calendar, the
//! British cutover calendar (Julian before 1752-09-14, Gregorian after),
//! the thirteen month International Fixed calendar and the Symmetry010
//! calendar. Every date converts through its epoch day, days since
//! 1970-01-01 ISO, so dates of different calendars interconvert freely.
//!
//! ```
//! use alt_calendars::{CalendarDate, ChronoUnit, InternationalFixedDate, IsoDate, JulianDate};
//!
//! let iso = IsoDate::of(2012, 6, 11)?;
//! let ifc = InternationalFixedDate::from_temporal(&iso)?;
//! assert_eq!(ifc.to_string(), "Ifc CE 2012/06/23");
//! assert_eq!(ifc.plus(1, ChronoUnit::Months)?.to_string(), "Ifc CE 2012/07/23");
//!
//! let julian = JulianDate::from_temporal(&iso)?;
//! assert_eq!(julian.to_string(), "Julian AD 2012-05-29");
//! # Ok::<(), alt_calendars::CalendarError>(())
//! ```

mod chronology;
mod clock;
mod consts;
mod era;
mod error;
mod format;
mod period;
mod prelude;
mod range;
mod resolve;
mod types;

pub mod british_cutover;
pub mod international_fixed;
pub mod iso;
pub mod julian;
pub mod symmetry010;

pub use british_cutover::{BritishCutoverChronology, BritishCutoverDate};
pub use chronology::{CalendarDate, Chronology, Temporal};
pub use clock::{Clock, FixedClock, OffsetClock, SystemClock};
pub use consts::*;
pub use era::{CalendarEra, Era, InternationalFixedEra, IsoEra, JulianEra, Symmetry010Era};
pub use error::CalendarError;
pub use international_fixed::{InternationalFixedChronology, InternationalFixedDate};
pub use iso::IsoDate;
pub use julian::{JulianChronology, JulianDate};
pub use period::ChronoPeriod;
pub use range::ValueRange;
pub use resolve::FieldValues;
pub use symmetry010::{Symmetry010Chronology, Symmetry010Date};
pub use types::{ChronoField, ChronoUnit, ResolverStyle};
