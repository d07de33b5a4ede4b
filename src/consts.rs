/// Months in a twelve-month year
pub const MONTHS_PER_YEAR: u8 = 12;

/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days before the first of each month in a non-leap twelve-month year
pub(crate) const DAYS_BEFORE_MONTH: [u16; 13] =
    [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// English month names used in error messages
pub(crate) const MONTH_NAMES: [&str; 13] = [
    "",
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const DAYS_PER_WEEK: u8 = 7;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;

/// Days in one 400 year Gregorian cycle
pub(crate) const DAYS_PER_GREGORIAN_CYCLE: i64 = 146_097;
/// Days in one 4 year Julian cycle
pub(crate) const DAYS_PER_JULIAN_CYCLE: i64 = 1_461;

/// Epoch day of ISO 0001-01-01
pub const ISO_0001_EPOCH_DAY: i64 = -719_162;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Component separator used by the 13 month and symmetry calendars
pub const SLASH_SEPARATOR: char = '/';
