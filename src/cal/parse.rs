//! Reading date-time values from ISO-8601 text.
//!
//! Both the `T` separator and a single space are accepted between the
//! date and the time, and a date on its own means midnight of that day.
//! Time zone offsets are read but ignored.

use std::str::FromStr;

use crate::cal::DatePiece;
use crate::cal::datetime::{DateTimeValue, Error, LocalDate, LocalTime, Month};


impl FromStr for LocalDate {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match iso8601::date(input) {
            Ok(fields)  => fields_to_date(fields),
            Err(e)      => Err(Error::Parse(e)),
        }
    }
}

impl FromStr for LocalTime {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match iso8601::time(input) {
            Ok(fields)  => fields_to_time(fields),
            Err(e)      => Err(Error::Parse(e)),
        }
    }
}

impl FromStr for DateTimeValue {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        if input.is_empty() {
            return Err(Error::Parse("empty input".into()));
        }

        if !input.contains(|c: char| c == 'T' || c == ' ') {
            return LocalDate::from_str(input).map(|date| Self::new(date, LocalTime::midnight()));
        }

        let fields = match iso8601::datetime(&input.replacen(' ', "T", 1)) {
            Ok(fields)  => fields,
            Err(e)      => return Err(Error::Parse(e)),
        };

        let date = fields_to_date(fields.date)?;
        let time = fields_to_time(fields.time)?;
        Ok(Self::new(date, time))
    }
}


fn fields_to_date(fields: iso8601::Date) -> Result<LocalDate, Error> {
    match fields {
        iso8601::Date::YMD { year, month, day } => {
            let month = Month::from_one(narrow(month)?)?;
            LocalDate::ymd(year as i64, month, narrow(day)?)
        }
        iso8601::Date::Week { year, ww, d } => {
            // Week 1 is the week containing the 4th of January, and weeks
            // start on Monday.
            if ww == 0 || ww > 53 || d == 0 || d > 7 {
                return Err(Error::OutOfRange);
            }
            let fourth = LocalDate::ymd(year as i64, Month::January, 4)?;
            let back = (fourth.weekday().days_from_sunday() as i64 + 6) % 7;
            let days = fourth.days_since_epoch() - back + (ww as i64 - 1) * 7 + (d as i64 - 1);
            Ok(LocalDate::from_days_since_epoch(days))
        }
        iso8601::Date::Ordinal { year, ddd } => {
            let first = LocalDate::ymd(year as i64, Month::January, 1)?;
            let date = LocalDate::from_days_since_epoch(first.days_since_epoch() + ddd as i64 - 1);
            if ddd == 0 || date.year() != year as i64 {
                return Err(Error::OutOfRange);
            }
            Ok(date)
        }
    }
}

fn fields_to_time(fields: iso8601::Time) -> Result<LocalTime, Error> {
    LocalTime::hms(narrow(fields.hour)?, narrow(fields.minute)?, narrow(fields.second)?)
}

fn narrow(field: u32) -> Result<i8, Error> {
    i8::try_from(field).map_err(|_| Error::OutOfRange)
}
