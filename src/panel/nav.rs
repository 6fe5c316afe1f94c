//! Moving the anchor a page at a time.
//!
//! | view            | prev / next        | super-prev / super-next |
//! |-----------------|--------------------|-------------------------|
//! | date            | one month          | one year                |
//! | month, quarter  | one year           | one year                |
//! | year            | one decade         | one decade              |
//! | decade          | one century        | one century             |
//! | time            | none               | none                    |
//!
//! Month and quarter cells already span the whole year, so every button
//! in those views moves a year, and year and decade views only ever move
//! by a full page. The time view has nothing to page through.

use crate::cal::{DateTimeValue, Unit};
use crate::panel::PanelError;
use crate::panel::view::ViewMode;


/// Which header button was pressed.
#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash)]
pub enum Direction {
    Prev,
    Next,
    SuperPrev,
    SuperNext,
}

impl Direction {
    fn sign(self) -> i64 {
        match self {
            Direction::Prev | Direction::SuperPrev => -1,
            Direction::Next | Direction::SuperNext =>  1,
        }
    }

    fn is_super(self) -> bool {
        matches!(self, Direction::SuperPrev | Direction::SuperNext)
    }
}

/// Returns the unit one press moves the anchor by, or `None` when the
/// view has no such button.
fn step(view: ViewMode, direction: Direction) -> Option<Unit> {
    match (view, direction.is_super()) {
        (ViewMode::Date, false)                        => Some(Unit::Month),
        (ViewMode::Date, true)                         => Some(Unit::Year),
        (ViewMode::Month, _) | (ViewMode::Quarter, _)  => Some(Unit::Year),
        (ViewMode::Year, _)                            => Some(Unit::Decade),
        (ViewMode::Decade, _)                          => Some(Unit::Century),
        _                                              => None,
    }
}

/// Computes the anchor after pressing a navigation button.
///
/// Moving by months keeps the day of the month where it can and clamps
/// it to the end of shorter months, so the 31st of March goes back to
/// the 28th of February rather than over into March again.
///
/// ```rust
/// use datepanel::{DateTimeValue, Month, DatePiece};
/// use datepanel::panel::{navigate, Direction, ViewMode};
///
/// let anchor = DateTimeValue::ymd(1990, Month::September, 3).unwrap();
/// let back = navigate(&anchor, ViewMode::Decade, Direction::SuperPrev).unwrap();
/// assert_eq!(back.year(), 1890);
/// assert!(navigate(&anchor, ViewMode::Time, Direction::Prev).is_err());
/// ```
pub fn navigate(anchor: &DateTimeValue, view: ViewMode, direction: Direction) -> Result<DateTimeValue, PanelError> {
    match step(view, direction) {
        Some(unit) => Ok(anchor.add(direction.sign(), unit)),
        None       => Err(PanelError::IllegalNavigation { view, direction }),
    }
}
