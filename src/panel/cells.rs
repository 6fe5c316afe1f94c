//! The grid of cells a calendar view shows.

use crate::cal::{DatePiece, DateTimeValue, LocalDate, LocalTime, Month, Unit, Year};
use crate::format::Locale;
use crate::panel::disabled::Evaluator;
use crate::panel::view::ViewMode;


/// The number of cells in the date view: six weeks, so that every month
/// fits whatever day it starts on.
pub const DATE_CELLS: usize = 6 * 7;

/// One cell of a calendar view.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Cell {

    /// The first moment of the period this cell covers.
    pub date: DateTimeValue,

    pub label: String,

    /// Whether the cell belongs to the page being shown, rather than
    /// padding from the page before or after it.
    pub in_view: bool,

    pub disabled: bool,

    /// Whether the cell covers the panel’s current value.
    pub selected: bool,
}

/// Builds the cells for a view.
///
/// Only cells in the leaf view can be disabled. Cells in coarser views
/// are only ever used to drill down, so they stay enabled.
pub(crate) fn build_cells(view: ViewMode, anchor: &DateTimeValue, leaf_view: ViewMode,
                          selected: Option<&DateTimeValue>, eval: &Evaluator<'_>, locale: &Locale) -> Vec<Cell> {

    let year = anchor.year();
    let periods: Vec<(LocalDate, String, bool)> = match view {
        ViewMode::Decade => {
            let start = Year(year).century_start();
            (-1 .. 11).map(|i| {
                let first = start + i * 10;
                (jan_first(first), format!("{}-{}", first, first + 9), (0..10).contains(&i))
            }).collect()
        }

        ViewMode::Year => {
            let start = Year(year).decade_start();
            (-1 .. 11).map(|i| {
                (jan_first(start + i), (start + i).to_string(), (0..10).contains(&i))
            }).collect()
        }

        ViewMode::Quarter => {
            (0 .. 4_usize).map(|q| {
                let month = Month::from_zero((q * 3) as i8).unwrap_or(Month::January);
                (LocalDate::ymd_clamped(year, month, 1), locale.quarter_label(q), true)
            }).collect()
        }

        ViewMode::Month => {
            (0 .. 12).map(|m| {
                let month = Month::from_zero(m).unwrap_or(Month::January);
                (LocalDate::ymd_clamped(year, month, 1), locale.short_month_name(month).to_string(), true)
            }).collect()
        }

        ViewMode::Date => {
            let first_of_month = anchor.start_of(Unit::Month);
            let start = first_of_month.start_of_week(locale.first_day_of_week());
            (0 .. DATE_CELLS as i64).map(|i| {
                let date = start.add(i, Unit::Day).date();
                (date, date.day().to_string(), date.month() == anchor.month())
            }).collect()
        }

        ViewMode::Time => Vec::new(),
    };

    let unit = view.cell_unit();
    periods.into_iter()
        .map(|(date, label, in_view)| {
            let date = DateTimeValue::new(date, LocalTime::midnight());
            Cell {
                date,
                label,
                in_view,
                disabled: view == leaf_view && eval.is_cell_disabled(view, &date),
                selected: selected.map_or(false, |s| s.is_same(&date, unit)),
            }
        })
        .collect()
}

fn jan_first(year: i64) -> LocalDate {
    LocalDate::ymd_clamped(year, Month::January, 1)
}
