//! # Labels and Locales
//!
//! Panels show short pieces of text: month names in the month view, `Q3`
//! in the quarter view, weekday headings above the date grid, and
//! zero-padded numbers in the time columns. Everything language-dependent
//! comes from a `Locale` value, which also says which day starts the
//! week, so the date grid can line its first column up with it.
//!
//! "January" isn't universally understood: in some places it's "janvier";
//! in others, "Janeiro", or "一月". Panels never guess: they ask the
//! locale they were given, and English is the default.
//!
//! ```rust
//! use datepanel::{Locale, Month, Weekday};
//!
//! let locale = Locale::english().with_first_day_of_week(Weekday::Monday);
//! assert_eq!(locale.short_month_name(Month::August), "Aug");
//! assert_eq!(locale.first_day_of_week(), Weekday::Monday);
//! ```

use std::fmt::Display;

use num_traits::PrimInt;
use pad::{Alignment, PadStr};

use crate::cal::{Month, Weekday};


/// Names and week conventions for one language and region.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Locale {
    short_month_names: Vec<String>,
    long_month_names:  Vec<String>,
    short_day_names:   Vec<String>,
    first_day_of_week: Weekday,
    quarter_prefix:    String,
    am:                String,
    pm:                String,
}

impl Locale {

    /// Returns the English locale, with weeks starting on Sunday.
    pub fn english() -> Self {
        fn strings(names: &[&str]) -> Vec<String> {
            names.iter().map(|s| s.to_string()).collect()
        }

        Self {
            short_month_names: strings(&["Jan", "Feb", "Mar", "Apr", "May", "Jun",
                                         "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"]),
            long_month_names:  strings(&["January", "February", "March", "April", "May", "June", "July",
                                         "August", "September", "October", "November", "December"]),
            short_day_names:   strings(&["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"]),
            first_day_of_week: Weekday::Sunday,
            quarter_prefix:    "Q".into(),
            am:                "AM".into(),
            pm:                "PM".into(),
        }
    }

    /// Creates a locale from its name tables. Month tables start with
    /// January and the day table starts with Sunday; tables of the wrong
    /// length are rejected.
    pub fn new(short_month_names: Vec<String>, long_month_names: Vec<String>, short_day_names: Vec<String>) -> Option<Self> {
        if short_month_names.len() != 12 || long_month_names.len() != 12 || short_day_names.len() != 7 {
            return None;
        }

        Some(Self { short_month_names, long_month_names, short_day_names, ..Self::english() })
    }

    /// Returns this locale with a different first day of the week.
    pub fn with_first_day_of_week(mut self, first_day: Weekday) -> Self {
        self.first_day_of_week = first_day;
        self
    }

    /// Returns this locale with different meridiem labels.
    pub fn with_meridiem_labels(mut self, am: impl Into<String>, pm: impl Into<String>) -> Self {
        self.am = am.into();
        self.pm = pm.into();
        self
    }

    pub fn first_day_of_week(&self) -> Weekday {
        self.first_day_of_week
    }

    pub fn short_month_name(&self, month: Month) -> &str {
        &self.short_month_names[month.months_from_january()]
    }

    pub fn long_month_name(&self, month: Month) -> &str {
        &self.long_month_names[month.months_from_january()]
    }

    pub fn short_weekday_name(&self, day: Weekday) -> &str {
        &self.short_day_names[day.days_from_sunday()]
    }

    /// Returns the label of a 0-based quarter, such as `Q3` for the third.
    pub fn quarter_label(&self, quarter: usize) -> String {
        format!("{}{}", self.quarter_prefix, quarter + 1)
    }

    pub fn meridiem_label(&self, pm: bool) -> &str {
        if pm { &self.pm } else { &self.am }
    }

    /// Returns the seven weekdays in display order, starting with this
    /// locale’s first day of the week.
    pub fn week(&self) -> [Weekday; 7] {
        let mut days = [Weekday::Sunday; 7];
        let start = self.first_day_of_week.days_from_sunday();
        for (offset, slot) in days.iter_mut().enumerate() {
            *slot = weekday_from_sunday(start + offset);
        }
        days
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::english()
    }
}

fn weekday_from_sunday(days: usize) -> Weekday {
    use crate::cal::Weekday::*;
    [Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday][days % 7]
}


/// Formats a number padded with zeroes on the left to at least the given
/// width, so 7 becomes `07` at width 2. Wider numbers are never cut.
pub fn padded<N: PrimInt + Display>(number: N, width: usize) -> String {
    number.to_string().pad(width, '0', Alignment::Right, false)
}
