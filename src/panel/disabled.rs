//! Caller-supplied rules for which dates and times can’t be picked.
//!
//! Panels never decide on their own that a date is off-limits. They ask
//! a `DisabledPredicates` value, which is anything the caller wants it to
//! be: a struct holding a booking calendar, or a handful of closures in
//! a `DisabledRules`. Every method has a default that allows everything.

use std::fmt;

use crate::cal::{DateTimeValue, LocalTime, TimePiece};
use crate::panel::view::ViewMode;


/// The questions a panel asks before letting something be picked.
pub trait DisabledPredicates {

    /// Returns whether the given date should be greyed out. Panels ask
    /// with the time of day set to midnight, and ask about coarser cells
    /// (months, years) with the first day of the period.
    fn disabled_date(&self, _candidate: &DateTimeValue) -> bool {
        false
    }

    /// Returns the hours, from 0 to 23, that can’t be picked.
    fn disabled_hours(&self) -> Vec<i8> {
        Vec::new()
    }

    /// Returns the minutes that can’t be picked in the given 24-hour hour.
    fn disabled_minutes(&self, _hour: i8) -> Vec<i8> {
        Vec::new()
    }

    /// Returns the seconds that can’t be picked in the given hour and
    /// minute.
    fn disabled_seconds(&self, _hour: i8, _minute: i8) -> Vec<i8> {
        Vec::new()
    }
}


/// The predicates that allow everything.
#[derive(PartialEq, Eq, Debug, Copy, Clone, Default)]
pub struct AllowAll;

impl DisabledPredicates for AllowAll {}


type DatePredicate = Box<dyn Fn(&DateTimeValue) -> bool>;
type HoursPredicate = Box<dyn Fn() -> Vec<i8>>;
type MinutesPredicate = Box<dyn Fn(i8) -> Vec<i8>>;
type SecondsPredicate = Box<dyn Fn(i8, i8) -> Vec<i8>>;

/// Disabled predicates built out of closures, for callers that don’t
/// want to write a type of their own.
///
/// ```rust
/// use datepanel::{DateTimeValue, DatePiece, Month};
/// use datepanel::panel::{DisabledPredicates, DisabledRules};
///
/// let rules = DisabledRules::new()
///     .date(|d| d.year() < 2000)
///     .hours(|| vec![0, 1, 2]);
///
/// let date = DateTimeValue::ymd(1999, Month::December, 31).unwrap();
/// assert!(rules.disabled_date(&date));
/// assert_eq!(rules.disabled_minutes(4), Vec::<i8>::new());
/// ```
#[derive(Default)]
pub struct DisabledRules {
    date:    Option<DatePredicate>,
    hours:   Option<HoursPredicate>,
    minutes: Option<MinutesPredicate>,
    seconds: Option<SecondsPredicate>,
}

impl DisabledRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn date(mut self, predicate: impl Fn(&DateTimeValue) -> bool + 'static) -> Self {
        self.date = Some(Box::new(predicate));
        self
    }

    pub fn hours(mut self, predicate: impl Fn() -> Vec<i8> + 'static) -> Self {
        self.hours = Some(Box::new(predicate));
        self
    }

    pub fn minutes(mut self, predicate: impl Fn(i8) -> Vec<i8> + 'static) -> Self {
        self.minutes = Some(Box::new(predicate));
        self
    }

    pub fn seconds(mut self, predicate: impl Fn(i8, i8) -> Vec<i8> + 'static) -> Self {
        self.seconds = Some(Box::new(predicate));
        self
    }
}

impl DisabledPredicates for DisabledRules {
    fn disabled_date(&self, candidate: &DateTimeValue) -> bool {
        self.date.as_ref().map_or(false, |f| f(candidate))
    }

    fn disabled_hours(&self) -> Vec<i8> {
        self.hours.as_ref().map_or_else(Vec::new, |f| f())
    }

    fn disabled_minutes(&self, hour: i8) -> Vec<i8> {
        self.minutes.as_ref().map_or_else(Vec::new, |f| f(hour))
    }

    fn disabled_seconds(&self, hour: i8, minute: i8) -> Vec<i8> {
        self.seconds.as_ref().map_or_else(Vec::new, |f| f(hour, minute))
    }
}

impl fmt::Debug for DisabledRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisabledRules")
         .field("date",    &self.date.is_some())
         .field("hours",   &self.hours.is_some())
         .field("minutes", &self.minutes.is_some())
         .field("seconds", &self.seconds.is_some())
         .finish()
    }
}


/// Answers disabled-ness questions for one panel, combining its top-level
/// predicates with the ones given for its time columns. Time questions go
/// to the time predicates when there are any.
#[derive(Copy, Clone)]
pub(crate) struct Evaluator<'a> {
    top:  &'a dyn DisabledPredicates,
    time: Option<&'a dyn DisabledPredicates>,
}

impl<'a> Evaluator<'a> {
    pub(crate) fn new(top: &'a dyn DisabledPredicates, time: Option<&'a dyn DisabledPredicates>) -> Self {
        Self { top, time }
    }

    fn for_time(&self) -> &'a dyn DisabledPredicates {
        self.time.unwrap_or(self.top)
    }

    /// Returns whether a value on the given day can’t be picked. Only the
    /// date matters here, so the predicate is asked about midnight.
    pub(crate) fn is_date_disabled(&self, candidate: &DateTimeValue) -> bool {
        self.top.disabled_date(&candidate.with_time(LocalTime::midnight()))
    }

    /// Returns whether a cell in the given view can’t be picked, asking
    /// about the first day of the period the cell covers.
    pub(crate) fn is_cell_disabled(&self, view: ViewMode, cell: &DateTimeValue) -> bool {
        match view {
            ViewMode::Time => false,
            ViewMode::Date => self.is_date_disabled(cell),
            _              => self.top.disabled_date(&cell.start_of(view.cell_unit())),
        }
    }

    pub(crate) fn disabled_hours(&self) -> Vec<i8> {
        self.for_time().disabled_hours()
    }

    pub(crate) fn disabled_minutes(&self, hour: i8) -> Vec<i8> {
        self.for_time().disabled_minutes(hour)
    }

    pub(crate) fn disabled_seconds(&self, hour: i8, minute: i8) -> Vec<i8> {
        self.for_time().disabled_seconds(hour, minute)
    }

    pub(crate) fn is_hour_disabled(&self, hour: i8) -> bool {
        self.disabled_hours().contains(&hour)
    }

    pub(crate) fn is_minute_disabled(&self, hour: i8, minute: i8) -> bool {
        self.disabled_minutes(hour).contains(&minute)
    }

    pub(crate) fn is_second_disabled(&self, hour: i8, minute: i8, second: i8) -> bool {
        self.disabled_seconds(hour, minute).contains(&second)
    }

    /// Returns whether any of the hour, minute, or second of the given
    /// time has been disabled.
    pub(crate) fn is_time_disabled(&self, time: LocalTime) -> bool {
        self.is_hour_disabled(time.hour())
            || self.is_minute_disabled(time.hour(), time.minute())
            || self.is_second_disabled(time.hour(), time.minute(), time.second())
    }
}

impl fmt::Debug for Evaluator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Evaluator")
         .field("separate_time_rules", &self.time.is_some())
         .finish()
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::cal::{DatePiece, Month};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn date_probes_are_at_midnight() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&seen);
        let rules = DisabledRules::new().date(move |d| { log.borrow_mut().push(*d); false });

        let eval = Evaluator::new(&rules, None);
        let late = DateTimeValue::ymd_hms(1990, Month::September, 3, 22, 10, 5).unwrap();
        assert!(!eval.is_date_disabled(&late));
        assert_eq!(*seen.borrow(), vec![ DateTimeValue::ymd(1990, Month::September, 3).unwrap() ]);
    }

    #[test]
    fn period_cells_probe_their_first_day() {
        let rules = DisabledRules::new().date(|d| d.day() == 1 && d.month() == Month::July);
        let eval = Evaluator::new(&rules, None);
        let mid_quarter = DateTimeValue::ymd(1990, Month::August, 20).unwrap();
        assert!(eval.is_cell_disabled(ViewMode::Quarter, &mid_quarter));
        assert!(!eval.is_cell_disabled(ViewMode::Month, &mid_quarter));
    }

    #[test]
    fn time_rules_override_top_level_ones() {
        let top = DisabledRules::new().hours(|| vec![1]);
        let time = DisabledRules::new().hours(|| vec![2]);
        let eval = Evaluator::new(&top, Some(&time));
        assert_eq!(eval.disabled_hours(), vec![2]);
        assert_eq!(Evaluator::new(&top, None).disabled_hours(), vec![1]);
    }

    #[test]
    fn whole_time_check() {
        let rules = DisabledRules::new().seconds(|h, m| if h == 13 && m == 7 { vec![30] } else { vec![] });
        let eval = Evaluator::new(&rules, None);
        assert!(eval.is_time_disabled(LocalTime::hms(13, 7, 30).unwrap()));
        assert!(!eval.is_time_disabled(LocalTime::hms(13, 8, 30).unwrap()));
    }

    #[test]
    fn allow_all() {
        let eval = Evaluator::new(&AllowAll, None);
        assert!(!eval.is_date_disabled(&DateTimeValue::ymd(2000, Month::January, 1).unwrap()));
        assert!(eval.disabled_minutes(3).is_empty());
    }
}
