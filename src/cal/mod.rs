//! Gregorian calendar calculations, which use years, months, days,
//! hours, minutes, and seconds.
//!
//! This is the arithmetic that panels lean on: adding and setting
//! fields, snapping to the start of a period, and comparing two values
//! at a given granularity.

pub(crate) mod arith;
pub(crate) mod datetime;
pub(crate) mod fmt;
#[cfg(feature="parse")] pub(crate) mod parse;

pub use self::arith::Unit;
pub use self::datetime::{DateTimeValue, Error, LocalDate, LocalTime, Month, Weekday, Year, MAX_YEAR, MIN_YEAR};


/// The **date piece** trait is used for date and time values that have
/// date components of years, months, and days.
pub trait DatePiece {

    /// The year, in absolute terms.
    /// This is in human-readable format, so the year 2014 actually has a
    /// year value of 2014, rather than 14 or 114 or anything like that.
    fn year(&self) -> i64;

    /// The month of the year.
    fn month(&self) -> Month;

    /// The day of the month, from 1 to 31.
    fn day(&self) -> i8;

    /// The day of the week.
    fn weekday(&self) -> Weekday;
}


/// The **time piece** trait is used for date and time values that have
/// time components of hours, minutes, and seconds.
pub trait TimePiece {

    /// The hour of the day, from 0 to 23.
    fn hour(&self) -> i8;

    /// The minute of the hour.
    fn minute(&self) -> i8;

    /// The second of the minute.
    fn second(&self) -> i8;
}
