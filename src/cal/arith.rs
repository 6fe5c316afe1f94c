//! Field arithmetic on date-time values.
//!
//! Adding months never overflows into the following month: when the
//! target month is shorter than the day being carried over, the day is
//! clamped to the last day of that month, so the 31st of January plus one
//! month is the 28th (or 29th) of February.

use crate::cal::{DatePiece, TimePiece};
use crate::cal::datetime::{DateTimeValue, Error, LocalDate, LocalTime, Month, Weekday, Year};


/// A unit of calendar time, used to say how far to move a value, which
/// field to set, or how coarsely to compare two values.
#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash)]
pub enum Unit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
    Decade,
    Century,
}

impl Unit {

    /// Returns the length of this unit in seconds, for the units that
    /// have a fixed length.
    fn fixed_seconds(self) -> Option<i64> {
        match self {
            Unit::Second  => Some(1),
            Unit::Minute  => Some(60),
            Unit::Hour    => Some(60 * 60),
            Unit::Day     => Some(24 * 60 * 60),
            Unit::Week    => Some(7 * 24 * 60 * 60),
            _             => None,
        }
    }

    /// Returns the length of this unit in months, for the units that are
    /// made of whole months.
    fn months(self) -> Option<i64> {
        match self {
            Unit::Month   => Some(1),
            Unit::Quarter => Some(3),
            Unit::Year    => Some(12),
            Unit::Decade  => Some(120),
            Unit::Century => Some(1200),
            _             => None,
        }
    }
}


impl DateTimeValue {

    /// Returns a new value moved by the given amount of the given unit.
    /// Negative amounts move backwards. Values stop at the first and last
    /// supported years rather than overflowing.
    ///
    /// ```rust
    /// use datepanel::{DateTimeValue, Month, Unit, DatePiece};
    ///
    /// let end_of_january = DateTimeValue::ymd(2000, Month::January, 31).unwrap();
    /// let next = end_of_january.add(1, Unit::Month);
    /// assert_eq!(next.month(), Month::February);
    /// assert_eq!(next.day(), 29);
    /// ```
    pub fn add(&self, amount: i64, unit: Unit) -> Self {
        if let Some(seconds) = unit.fixed_seconds() {
            return Self::at(self.to_seconds().saturating_add(amount.saturating_mul(seconds)));
        }

        let months = unit.months().unwrap_or(0).saturating_mul(amount);
        let total = (self.year() * 12 + self.month().months_from_january() as i64).saturating_add(months);
        let month = Month::from_zero(total.rem_euclid(12) as i8).unwrap_or(Month::January);
        let date = LocalDate::ymd_clamped(total.div_euclid(12), month, self.day());
        self.with_date(date)
    }

    /// Returns a new value moved backwards by the given amount of the
    /// given unit.
    pub fn subtract(&self, amount: i64, unit: Unit) -> Self {
        self.add(amount.saturating_neg(), unit)
    }

    /// Returns a new value with a single field replaced.
    ///
    /// Months and quarters are 0-based. Setting the year or the month
    /// clamps the day to the length of the resulting month; every other
    /// field is checked and returns an error when it is out of range.
    /// Weeks, decades, and centuries are not fields, and cannot be set.
    pub fn set(&self, unit: Unit, value: i64) -> Result<Self, Error> {
        let narrow = |max: i64| if (0..max).contains(&value) { Ok(value as i8) } else { Err(Error::OutOfRange) };

        match unit {
            Unit::Year if !Year(value).is_supported() => Err(Error::OutOfRange),
            Unit::Year => {
                Ok(self.with_date(LocalDate::ymd_clamped(value, self.month(), self.day())))
            }
            Unit::Month => {
                let month = Month::from_zero(narrow(12)?)?;
                Ok(self.with_date(LocalDate::ymd_clamped(self.year(), month, self.day())))
            }
            Unit::Quarter => {
                let within = self.month().months_from_january() as i8 % 3;
                let month = Month::from_zero(narrow(4)? * 3 + within)?;
                Ok(self.with_date(LocalDate::ymd_clamped(self.year(), month, self.day())))
            }
            Unit::Day => {
                let day = narrow(32)?;
                Ok(self.with_date(LocalDate::ymd(self.year(), self.month(), day)?))
            }
            Unit::Hour   => Ok(self.with_time(LocalTime::hms(narrow(24)?, self.minute(), self.second())?)),
            Unit::Minute => Ok(self.with_time(LocalTime::hms(self.hour(), narrow(60)?, self.second())?)),
            Unit::Second => Ok(self.with_time(LocalTime::hms(self.hour(), self.minute(), narrow(60)?)?)),
            Unit::Week | Unit::Decade | Unit::Century => Err(Error::OutOfRange),
        }
    }

    /// Returns the first instant of the period of the given unit that
    /// this value falls in. Weeks start on Sunday; use `start_of_week`
    /// for any other first day.
    pub fn start_of(&self, unit: Unit) -> Self {
        let time = self.time();
        let truncated = match unit {
            Unit::Second => return *self,
            Unit::Minute => LocalTime::hms(time.hour(), time.minute(), 0),
            Unit::Hour   => LocalTime::hms(time.hour(), 0, 0),
            _            => Ok(LocalTime::midnight()),
        };
        let at_start = self.with_time(truncated.unwrap_or_else(|_| LocalTime::midnight()));

        let (year, month) = match unit {
            Unit::Second | Unit::Minute | Unit::Hour | Unit::Day => return at_start,
            Unit::Week    => return at_start.start_of_week(Weekday::Sunday),
            Unit::Month   => (self.year(), self.month()),
            Unit::Quarter => (self.year(), quarter_start(self.month())),
            Unit::Year    => (self.year(), Month::January),
            Unit::Decade  => (Year(self.year()).decade_start(), Month::January),
            Unit::Century => (Year(self.year()).century_start(), Month::January),
        };

        at_start.with_date(LocalDate::ymd_clamped(year, month, 1))
    }

    /// Returns midnight of the latest day on or before this one that
    /// falls on the given weekday.
    pub fn start_of_week(&self, first_day: Weekday) -> Self {
        let back = (self.weekday().days_from_sunday() + 7 - first_day.days_from_sunday()) % 7;
        let midnight = self.with_time(LocalTime::midnight());
        midnight.add(-(back as i64), Unit::Day)
    }

    /// Returns whether two values fall in the same period of the given
    /// unit, so two times on the same day are the same at `Unit::Day`.
    pub fn is_same(&self, other: &Self, unit: Unit) -> bool {
        self.start_of(unit) == other.start_of(unit)
    }
}

fn quarter_start(month: Month) -> Month {
    Month::from_zero((month.quarter() * 3) as i8).unwrap_or(Month::January)
}
