//! Dates, times, date-times, months, and weekdays.

use std::cmp::Ordering;
use std::ops::Deref;

use crate::cal::{DatePiece, TimePiece};
use crate::system::sys_time;
use crate::util::FieldExt;

use self::Month::*;
use self::Weekday::*;


/// A single year.
///
/// This is just a wrapper around `i64` that performs year-related tests.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub struct Year(pub i64);

impl Year {

    /// Returns whether this year is a leap year.
    ///
    /// ### Examples
    ///
    /// ```
    /// use datepanel::Year;
    ///
    /// assert_eq!(Year(2000).is_leap_year(), true);
    /// assert_eq!(Year(1900).is_leap_year(), false);
    /// ```
    pub fn is_leap_year(self) -> bool {
        self.0 % 400 == 0 || (self.0 % 4 == 0 && self.0 % 100 != 0)
    }

    /// Returns the first year of the decade this year belongs to, so
    /// 1994 becomes 1990 and -5 becomes -10.
    pub fn decade_start(self) -> i64 {
        self.0.div_euclid(10) * 10
    }

    /// Returns the first year of the century this year belongs to, in
    /// the same floor-aligned sense as `decade_start`.
    pub fn century_start(self) -> i64 {
        self.0.div_euclid(100) * 100
    }

    /// Returns whether dates can be built in this year. Years further
    /// out would overflow the day and second counts.
    pub fn is_supported(self) -> bool {
        (MIN_YEAR ..= MAX_YEAR).contains(&self.0)
    }
}

impl Deref for Year {
    type Target = i64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}


/// The earliest year a date can be in.
pub const MIN_YEAR: i64 = -1_000_000_000;

/// The latest year a date can be in.
pub const MAX_YEAR: i64 = 1_000_000_000;

/// Number of days in one full cycle of the Gregorian calendar.
const DAYS_IN_400Y: i64 = 365 * 400 + 97;

/// Number of days between 1st March of year 0 and 1st January 1970.
///
/// Counting from March means the leap day always lands at the very end
/// of a counted year, which keeps the month table free of special cases.
const EPOCH_SHIFT: i64 = 719_468;

const SECONDS_IN_DAY: i64 = 86400;


/// A **year-month-day** triple that has not been checked for validity.
///
/// The interface to `LocalDate` makes it impossible to build the 74th of
/// March; this type is where that check happens.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
struct YMD {
    year:  i64,
    month: Month,
    day:   i8,
}

impl YMD {

    /// Returns whether the day is in the range allowed by the month.
    fn is_valid(&self) -> bool {
        Year(self.year).is_supported()
            && self.day >= 1 && self.day <= self.month.days_in_month(Year(self.year).is_leap_year())
    }

    /// Calculates the number of days that have elapsed since the 1st
    /// January 1970, which is negative for earlier dates.
    fn to_days_since_epoch(self) -> Result<i64, Error> {
        if !self.is_valid() {
            return Err(Error::OutOfRange);
        }

        let month = self.month as i64;
        let year = if month <= 2 { self.year - 1 } else { self.year };
        let era = year.div_euclid(400);
        let year_of_era = year - era * 400;

        // Months are counted from March, so January and February belong
        // to the end of the previous year.
        let shifted_month = if month > 2 { month - 3 } else { month + 9 };
        let day_of_year = (153 * shifted_month + 2) / 5 + self.day as i64 - 1;
        let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;

        Ok(era * DAYS_IN_400Y + day_of_era - EPOCH_SHIFT)
    }

    /// The inverse of `to_days_since_epoch`. Every day count maps to
    /// exactly one valid triple, so this cannot fail.
    fn from_days_since_epoch(days: i64) -> Self {
        let shifted = days + EPOCH_SHIFT;
        let era = shifted.div_euclid(DAYS_IN_400Y);
        let day_of_era = shifted - era * DAYS_IN_400Y;

        let year_of_era = (day_of_era - day_of_era / 1460 + day_of_era / 36524 - day_of_era / 146_096) / 365;
        let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
        let shifted_month = (5 * day_of_year + 2) / 153;
        let day = day_of_year - (153 * shifted_month + 2) / 5 + 1;
        let month = if shifted_month < 10 { shifted_month + 3 } else { shifted_month - 9 };
        let year = year_of_era + era * 400 + if month <= 2 { 1 } else { 0 };

        YMD {
            year,
            month: Month::from_one_unchecked(month as i8),
            day:   day as i8,
        }
    }
}


/// A **local date** is a day-long span on the timeline, *without a time
/// zone*.
#[derive(Eq, Clone, Copy)]
pub struct LocalDate {
    ymd:     YMD,
    weekday: Weekday,
}

impl LocalDate {

    /// Creates a new local date instance from the given year, month, and day
    /// fields.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an error.
    ///
    /// ### Examples
    ///
    /// ```rust
    /// use datepanel::{LocalDate, Month, DatePiece};
    ///
    /// let date = LocalDate::ymd(1969, Month::July, 20).unwrap();
    /// assert_eq!(date.year(), 1969);
    /// assert_eq!(date.month(), Month::July);
    /// assert_eq!(date.day(), 20);
    ///
    /// assert!(LocalDate::ymd(2100, Month::February, 29).is_err());
    /// ```
    pub fn ymd(year: i64, month: Month, day: i8) -> Result<Self, Error> {
        YMD { year, month, day }
            .to_days_since_epoch()
            .map(Self::from_days_since_epoch)
    }

    /// Creates the date that is the given number of days after the 1st
    /// January 1970. Counts beyond the supported years stop at the first
    /// or last supported day.
    pub fn from_days_since_epoch(days: i64) -> Self {
        let first = YMD { year: MIN_YEAR, month: January, day: 1 }.to_days_since_epoch().unwrap_or(i64::MIN);
        let last = YMD { year: MAX_YEAR, month: December, day: 31 }.to_days_since_epoch().unwrap_or(i64::MAX);
        let days = days.clamp(first, last);

        Self {
            ymd:     YMD::from_days_since_epoch(days),
            weekday: days_to_weekday(days),
        }
    }

    /// Returns the number of days between the 1st January 1970 and this
    /// date.
    pub fn days_since_epoch(&self) -> i64 {
        // A LocalDate only ever holds a checked triple.
        self.ymd.to_days_since_epoch().unwrap_or_default()
    }

    /// Creates a date with the day clamped to the length of the month,
    /// so the 31st of April becomes the 30th. The year is clamped to the
    /// supported range too.
    pub(crate) fn ymd_clamped(year: i64, month: Month, day: i8) -> Self {
        let year = year.clamp(MIN_YEAR, MAX_YEAR);
        let last = month.days_in_month(Year(year).is_leap_year());
        let ymd = YMD { year, month, day: day.clamp(1, last) };
        match ymd.to_days_since_epoch() {
            Ok(days) => Self::from_days_since_epoch(days),
            Err(_)   => Self { ymd, weekday: Sunday },
        }
    }
}

impl DatePiece for LocalDate {
    fn year(&self) -> i64 { self.ymd.year }
    fn month(&self) -> Month { self.ymd.month }
    fn day(&self) -> i8 { self.ymd.day }
    fn weekday(&self) -> Weekday { self.weekday }
}

impl PartialEq for LocalDate {
    fn eq(&self, other: &Self) -> bool {
        self.ymd == other.ymd
    }
}

impl PartialOrd for LocalDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LocalDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ymd.cmp(&other.ymd)
    }
}


/// A **local time** is a time of day that recurs once a day, *without a
/// time zone*. Panels never deal in fractions of a second.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct LocalTime {
    hour:   i8,
    minute: i8,
    second: i8,
}

impl LocalTime {

    /// Computes the time of day from the number of seconds since midnight,
    /// wrapping around at the end of the day.
    pub fn from_seconds_since_midnight(seconds: i64) -> Self {
        let seconds = seconds.rem_euclid(SECONDS_IN_DAY);
        Self {
            hour:   (seconds / 3600) as i8,
            minute: (seconds / 60 % 60) as i8,
            second: (seconds % 60) as i8,
        }
    }

    /// Returns the time at midnight, with all fields initialised to 0.
    pub fn midnight() -> Self {
        Self { hour: 0, minute: 0, second: 0 }
    }

    /// Creates a new timestamp instance with the given hour, minute, and
    /// second fields.
    ///
    /// ```rust
    /// use datepanel::{LocalTime, TimePiece};
    ///
    /// let time = LocalTime::hms(13, 7, 4).unwrap();
    /// assert_eq!(time.minute(), 7);
    /// assert!(LocalTime::hms(24, 0, 0).is_err());
    /// ```
    pub fn hms(hour: i8, minute: i8, second: i8) -> Result<Self, Error> {
        if hour.is_within(0..24) && minute.is_within(0..60) && second.is_within(0..60) {
            Ok(Self { hour, minute, second })
        }
        else {
            Err(Error::OutOfRange)
        }
    }

    /// Returns the number of seconds since midnight.
    pub fn to_seconds(self) -> i64 {
        self.hour as i64 * 3600 + self.minute as i64 * 60 + self.second as i64
    }

    /// Returns whether this time falls in the second half of the day.
    pub fn is_pm(self) -> bool {
        self.hour >= 12
    }
}

impl TimePiece for LocalTime {
    fn hour(&self) -> i8 { self.hour }
    fn minute(&self) -> i8 { self.minute }
    fn second(&self) -> i8 { self.second }
}


/// A **date-time value** is the point on the timeline a panel displays
/// and selects: a local date plus a local time, *without a time zone*.
///
/// Values are immutable. Every operation that changes a field returns a
/// new value.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct DateTimeValue {
    date: LocalDate,
    time: LocalTime,
}

impl DateTimeValue {

    /// Creates a new date-time from a date and a time.
    pub fn new(date: LocalDate, time: LocalTime) -> Self {
        Self { date, time }
    }

    /// Creates a new date-time from all six fields, checking each one.
    ///
    /// ```rust
    /// use datepanel::{DateTimeValue, Month, DatePiece, TimePiece};
    ///
    /// let when = DateTimeValue::ymd_hms(2001, Month::January, 2, 1, 3, 7).unwrap();
    /// assert_eq!(when.day(), 2);
    /// assert_eq!(when.second(), 7);
    /// assert!(DateTimeValue::ymd_hms(2001, Month::February, 30, 0, 0, 0).is_err());
    /// ```
    pub fn ymd_hms(year: i64, month: Month, day: i8, hour: i8, minute: i8, second: i8) -> Result<Self, Error> {
        let date = LocalDate::ymd(year, month, day)?;
        let time = LocalTime::hms(hour, minute, second)?;
        Ok(Self::new(date, time))
    }

    /// Creates a new date-time at midnight of the given day.
    pub fn ymd(year: i64, month: Month, day: i8) -> Result<Self, Error> {
        LocalDate::ymd(year, month, day).map(|date| Self::new(date, LocalTime::midnight()))
    }

    /// Computes a complete date-time based on the number of seconds that
    /// have elapsed since **midnight, 1st January, 1970**.
    pub fn at(seconds_since_1970_epoch: i64) -> Self {
        let days = seconds_since_1970_epoch.div_euclid(SECONDS_IN_DAY);
        let seconds = seconds_since_1970_epoch.rem_euclid(SECONDS_IN_DAY);

        Self {
            date: LocalDate::from_days_since_epoch(days),
            time: LocalTime::from_seconds_since_midnight(seconds),
        }
    }

    /// Returns the number of seconds between the epoch and this value.
    pub fn to_seconds(&self) -> i64 {
        self.date.days_since_epoch() * SECONDS_IN_DAY + self.time.to_seconds()
    }

    /// Creates a new date-time that represents the current system time.
    pub fn now() -> Self {
        let (seconds, _) = unsafe { sys_time() };
        Self::at(seconds)
    }

    /// Returns the date portion of this date-time.
    pub fn date(&self) -> LocalDate {
        self.date
    }

    /// Returns the time portion of this date-time.
    pub fn time(&self) -> LocalTime {
        self.time
    }

    /// Returns a copy of this value carrying the given time of day.
    pub fn with_time(&self, time: LocalTime) -> Self {
        Self::new(self.date, time)
    }

    /// Returns a copy of this value carrying the given date.
    pub fn with_date(&self, date: LocalDate) -> Self {
        Self::new(date, self.time)
    }
}

impl DatePiece for DateTimeValue {
    fn year(&self) -> i64 { self.date.ymd.year }
    fn month(&self) -> Month { self.date.ymd.month }
    fn day(&self) -> i8 { self.date.ymd.day }
    fn weekday(&self) -> Weekday { self.date.weekday }
}

impl TimePiece for DateTimeValue {
    fn hour(&self) -> i8 { self.time.hour }
    fn minute(&self) -> i8 { self.time.minute }
    fn second(&self) -> i8 { self.time.second }
}


/// Computes the weekday, given the number of days that have passed
/// since the 1st January 1970.
fn days_to_weekday(days: i64) -> Weekday {
    // The 1st January 1970 was a Thursday.
    Weekday::from_zero_unchecked((days + 4).rem_euclid(7) as i8)
}


/// Errors that arise when building calendar values.
#[derive(PartialEq, Eq, Debug, Clone, thiserror::Error)]
pub enum Error {

    /// A field was outside the range allowed for it, such as the 30th of
    /// February or the 61st minute.
    #[error("datetime field out of range")]
    OutOfRange,

    /// The input text could not be read as a date or a date-time.
    #[error("parse error: {0}")]
    Parse(String),
}


/// A month of the year, starting with January, and ending with December.
///
/// This is stored as an enum instead of just a number to prevent
/// off-by-one errors: is month 2 February (1-indexed) or March (0-indexed)?
/// In this case, it’s 1-indexed, to have January become 1 when you use
/// `as i32` in code. Use `months_from_january` for the 0-based index.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash)]
pub enum Month {
    January =  1, February =  2, March     =  3,
    April   =  4, May      =  5, June      =  6,
    July    =  7, August   =  8, September =  9,
    October = 10, November = 11, December  = 12,
}

#[allow(clippy::match_same_arms)]
impl Month {

    /// Returns the number of days in this month, depending on whether it’s
    /// a leap year or not.
    pub fn days_in_month(self, leap_year: bool) -> i8 {
        match self {
            January   => 31, February  => if leap_year { 29 } else { 28 },
            March     => 31, April     => 30,
            May       => 31, June      => 30,
            July      => 31, August    => 31,
            September => 30, October   => 31,
            November  => 30, December  => 31,
        }
    }

    /// Returns the 0-based index of this month.
    pub fn months_from_january(self) -> usize {
        self as usize - 1
    }

    /// Returns the 0-based quarter this month falls in.
    pub fn quarter(self) -> usize {
        self.months_from_january() / 3
    }

    /// Returns the month based on a number, with January as **Month 1**,
    /// February as **Month 2**, and so on.
    ///
    /// ```rust
    /// use datepanel::Month;
    /// assert_eq!(Month::from_one(5), Ok(Month::May));
    /// assert!(Month::from_one(0).is_err());
    /// ```
    pub fn from_one(month: i8) -> Result<Self, Error> {
        if month.is_within(1..13) {
            Ok(Self::from_one_unchecked(month))
        }
        else {
            Err(Error::OutOfRange)
        }
    }

    /// Returns the month based on a number, with January as **Month 0**,
    /// February as **Month 1**, and so on.
    ///
    /// ```rust
    /// use datepanel::Month;
    /// assert_eq!(Month::from_zero(5), Ok(Month::June));
    /// assert!(Month::from_zero(12).is_err());
    /// ```
    pub fn from_zero(month: i8) -> Result<Self, Error> {
        if month.is_within(0..12) {
            Ok(Self::from_one_unchecked(month + 1))
        }
        else {
            Err(Error::OutOfRange)
        }
    }

    fn from_one_unchecked(month: i8) -> Self {
        match month {
             1 => January,   2 => February,   3 => March,
             4 => April,     5 => May,        6 => June,
             7 => July,      8 => August,     9 => September,
            10 => October,  11 => November,   _ => December,
        }
    }
}


/// A named day of the week.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum Weekday {
    Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday,
}

// Sunday is Day 0, which matches how locales number their first day of
// the week. Weekdays have no Ord instance: whether Sunday comes before
// Monday depends on the locale, and panels always ask the locale.

impl Weekday {

    /// Returns the number of days between the last Sunday and this day.
    pub fn days_from_sunday(self) -> usize {
        self as usize
    }

    /// Return the weekday based on a number, with Sunday as Day 0, Monday as
    /// Day 1, and so on.
    ///
    /// ```rust
    /// use datepanel::Weekday;
    /// assert_eq!(Weekday::from_zero(4), Ok(Weekday::Thursday));
    /// assert!(Weekday::from_zero(7).is_err());
    /// ```
    pub fn from_zero(weekday: i8) -> Result<Self, Error> {
        if weekday.is_within(0..7) {
            Ok(Self::from_zero_unchecked(weekday))
        }
        else {
            Err(Error::OutOfRange)
        }
    }

    fn from_zero_unchecked(weekday: i8) -> Self {
        match weekday {
            0 => Sunday,     1 => Monday,    2 => Tuesday,
            3 => Wednesday,  4 => Thursday,  5 => Friday,
            _ => Saturday,
        }
    }
}


/// Misc tests that don’t seem to fit anywhere.
#[cfg(test)]
mod test {
    use super::{DateTimeValue, Error, LocalDate, LocalTime, Month, Weekday, YMD, MAX_YEAR, MIN_YEAR};
    use crate::cal::{DatePiece, TimePiece};

    #[test]
    fn some_leap_years() {
        for year in [2004, 2008, 2012, 2016].iter() {
            assert!(LocalDate::ymd(*year, Month::February, 29).is_ok());
            assert!(LocalDate::ymd(*year + 1, Month::February, 29).is_err());
        }
        assert!(LocalDate::ymd(1600, Month::February, 29).is_ok());
        assert!(LocalDate::ymd(1900, Month::February, 29).is_err());
    }

    #[test]
    fn epoch_is_day_zero() {
        let date = LocalDate::ymd(1970, Month::January, 1).unwrap();
        assert_eq!(date.days_since_epoch(), 0);
        assert_eq!(date.weekday(), Weekday::Thursday);
    }

    #[test]
    fn to_from_days_since_epoch() {
        for days in (-800_000 .. 800_000).step_by(997) {
            let ymd = YMD::from_days_since_epoch(days);
            assert!(ymd.is_valid(), "{:?}", ymd);
            assert_eq!(ymd.to_days_since_epoch(), Ok(days));
        }
    }

    #[test]
    fn huge_years_are_out_of_range() {
        assert_eq!(LocalDate::ymd(i64::MAX / 2, Month::January, 1), Err(Error::OutOfRange));
        assert_eq!(DateTimeValue::ymd(i64::MIN, Month::January, 1), Err(Error::OutOfRange));
        assert_eq!(DateTimeValue::ymd_hms(MAX_YEAR + 1, Month::January, 1, 0, 0, 0), Err(Error::OutOfRange));
        assert!(LocalDate::ymd(MAX_YEAR, Month::December, 31).is_ok());
        assert!(LocalDate::ymd(MIN_YEAR, Month::January, 1).is_ok());
    }

    #[test]
    fn day_counts_stop_at_the_supported_years() {
        assert_eq!(LocalDate::from_days_since_epoch(i64::MAX), LocalDate::ymd(MAX_YEAR, Month::December, 31).unwrap());
        assert_eq!(LocalDate::from_days_since_epoch(i64::MIN).year(), MIN_YEAR);
        assert_eq!(DateTimeValue::at(i64::MAX).year(), MAX_YEAR);
    }

    #[test]
    fn leap_day_at_end_of_cycle() {
        let date = LocalDate::ymd(2400, Month::February, 29).unwrap();
        let next = LocalDate::from_days_since_epoch(date.days_since_epoch() + 1);
        assert_eq!(next, LocalDate::ymd(2400, Month::March, 1).unwrap());
    }

    #[test]
    fn known_weekdays() {
        assert_eq!(LocalDate::ymd(2020, Month::April, 1).unwrap().weekday(), Weekday::Wednesday);
        assert_eq!(LocalDate::ymd(2020, Month::March, 1).unwrap().weekday(), Weekday::Sunday);
        assert_eq!(LocalDate::ymd(1900, Month::January, 1).unwrap().weekday(), Weekday::Monday);
    }

    #[test]
    fn clamped_dates() {
        let date = LocalDate::ymd_clamped(1999, Month::February, 31);
        assert_eq!(date.day(), 28);
    }

    #[test]
    fn seconds_round_trip() {
        let when = DateTimeValue::ymd_hms(1990, Month::September, 3, 13, 7, 4).unwrap();
        assert_eq!(DateTimeValue::at(when.to_seconds()), when);
        assert_eq!(when.hour(), 13);
    }

    #[test]
    fn before_the_epoch() {
        let when = DateTimeValue::at(-1);
        assert_eq!(when.year(), 1969);
        assert_eq!(when.time(), LocalTime::hms(23, 59, 59).unwrap());
    }
}
