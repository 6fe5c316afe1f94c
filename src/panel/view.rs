//! Which view a panel shows, and what its header says.
//!
//! A picker kind and a view mode are two separate things. The kind is
//! fixed for the lifetime of a panel and decides which view a selection
//! finally lands in; the view is whatever the user is currently looking
//! at while drilling up and down towards it. A month picker showing the
//! decade view is a perfectly normal state.

use crate::cal::{self, DatePiece, DateTimeValue, Unit};
use crate::format::Locale;


/// The overall configuration of a picker, which decides its default
/// view and which views it can reach.
#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash, Default)]
pub enum PickerKind {
    Decade,
    Year,
    Quarter,
    Month,
    Week,
    #[default]
    Date,
    Time,
    DateTime,
}

/// The granularity a panel is currently rendering.
#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash)]
pub enum ViewMode {
    Decade,
    Year,
    Quarter,
    Month,
    Date,
    Time,
}

use self::ViewMode::*;

static DECADE_CHAIN:  &[ViewMode] = &[Decade];
static YEAR_CHAIN:    &[ViewMode] = &[Decade, Year];
static QUARTER_CHAIN: &[ViewMode] = &[Decade, Year, Quarter];
static MONTH_CHAIN:   &[ViewMode] = &[Decade, Year, Month];
static DATE_CHAIN:    &[ViewMode] = &[Decade, Year, Month, Date];
static TIME_CHAIN:    &[ViewMode] = &[Time];

impl PickerKind {

    /// Returns the view a selection of this kind is finally made in.
    pub fn default_view(self) -> ViewMode {
        match self {
            PickerKind::Decade                        => Decade,
            PickerKind::Year                          => Year,
            PickerKind::Quarter                       => Quarter,
            PickerKind::Month                         => Month,
            PickerKind::Week | PickerKind::Date
                | PickerKind::DateTime                => Date,
            PickerKind::Time                          => Time,
        }
    }

    /// Returns whether values of this kind always carry a time of day
    /// the user picks. A date picker can gain one through its show-time
    /// settings; see `PanelConfig::has_time_component`.
    pub fn has_time_component(self) -> bool {
        matches!(self, PickerKind::Time | PickerKind::DateTime)
    }

    /// Returns the views this kind can drill through, coarsest first and
    /// ending with the default view.
    pub fn drill_chain(self) -> &'static [ViewMode] {
        match self {
            PickerKind::Decade                        => DECADE_CHAIN,
            PickerKind::Year                          => YEAR_CHAIN,
            PickerKind::Quarter                       => QUARTER_CHAIN,
            PickerKind::Month                         => MONTH_CHAIN,
            PickerKind::Week | PickerKind::Date
                | PickerKind::DateTime                => DATE_CHAIN,
            PickerKind::Time                          => TIME_CHAIN,
        }
    }

    /// Returns the view one step finer than the given one, or `None` when
    /// the given view is the last one this kind drills to.
    pub fn finer_view(self, view: ViewMode) -> Option<ViewMode> {
        let chain = self.drill_chain();
        let index = chain.iter().position(|v| *v == view)?;
        chain.get(index + 1).copied()
    }

    /// Returns the view one step coarser than the given one.
    pub fn coarser_view(self, view: ViewMode) -> Option<ViewMode> {
        let chain = self.drill_chain();
        let index = chain.iter().position(|v| *v == view)?;
        index.checked_sub(1).map(|i| chain[i])
    }
}

impl ViewMode {

    /// Returns the period one cell of this view covers.
    pub fn cell_unit(self) -> Unit {
        match self {
            Decade  => Unit::Decade,
            Year    => Unit::Year,
            Quarter => Unit::Quarter,
            Month   => Unit::Month,
            Date    => Unit::Day,
            Time    => Unit::Second,
        }
    }
}


/// The outcome of resolving a kind and an optional mode override.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct ResolvedView {

    /// The view to render now.
    pub active_view: ViewMode,

    /// The view in which picking a cell selects a value rather than
    /// drilling further down.
    pub leaf_view: ViewMode,
}

/// Decides which view to show for a kind, letting an explicit mode take
/// precedence over the kind’s default.
pub fn resolve_view(kind: PickerKind, mode: Option<ViewMode>) -> ResolvedView {
    ResolvedView {
        active_view: mode.unwrap_or_else(|| kind.default_view()),
        leaf_view:   kind.default_view(),
    }
}

/// Formats the header text of a view showing the given anchor.
///
/// Decade views span a century (`1900-1999`), year views span a decade
/// (`1990-1999`), month and quarter views show their year, and date views
/// show the month and year. The time view has no calendar range, so its
/// header is the time of day it was given.
pub fn range_label(view: ViewMode, anchor: &DateTimeValue, locale: &Locale, time_label: &str) -> String {
    let year = cal::Year(anchor.year());

    match view {
        Decade => {
            let start = year.century_start();
            format!("{}-{}", start, start + 99)
        }
        Year => {
            let start = year.decade_start();
            format!("{}-{}", start, start + 9)
        }
        Quarter | Month => anchor.year().to_string(),
        Date  => format!("{} {}", locale.short_month_name(anchor.month()), anchor.year()),
        Time  => time_label.to_string(),
    }
}
