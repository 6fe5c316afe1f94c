use std::fmt;

use crate::cal::{DatePiece, TimePiece};
use crate::cal::datetime::{DateTimeValue, LocalDate, LocalTime};


impl fmt::Debug for LocalDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LocalDate({})", self)
    }
}

impl fmt::Display for LocalDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let year = self.year();
        if (0 .. 10000).contains(&year) {
            write!(f, "{:04}-{:02}-{:02}", year, self.month() as usize, self.day())
        }
        else {
            write!(f, "{:+05}-{:02}-{:02}", year, self.month() as usize, self.day())
        }
    }
}

impl fmt::Debug for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LocalTime({})", self)
    }
}

impl fmt::Display for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour(), self.minute(), self.second())
    }
}

impl fmt::Debug for DateTimeValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "DateTimeValue({}T{})", self.date(), self.time())
    }
}

impl fmt::Display for DateTimeValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.date(), self.time())
    }
}


#[cfg(test)]
mod test {
    use crate::cal::{DateTimeValue, LocalDate, Month};

    #[test]
    fn display_pads_fields() {
        let when = DateTimeValue::ymd_hms(1990, Month::September, 3, 1, 3, 7).unwrap();
        assert_eq!(when.to_string(), "1990-09-03 01:03:07");
    }

    #[test]
    fn far_years_carry_a_sign() {
        let date = LocalDate::ymd(12345, Month::January, 1).unwrap();
        assert_eq!(format!("{:?}", date), "LocalDate(+12345-01-01)");
    }
}
