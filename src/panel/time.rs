//! The hour, minute, second, and meridiem columns of a time panel.

use crate::cal::{Error, LocalTime, TimePiece};
use crate::format::{padded, Locale};
use crate::panel::config::ShowTimeConfig;
use crate::panel::disabled::Evaluator;
use crate::util::FieldExt;


/// One of the scrolling columns in a time panel.
#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash)]
pub enum ColumnKind {
    Hour,
    Minute,
    Second,
    Meridiem,
}

/// One entry in a time column.
///
/// The value is what picking the entry sets its field to. For hours and
/// meridiem entries this is always an hour of the 24-hour clock, so in a
/// 12-hour column the entry labelled `12` means midnight in the morning
/// and noon in the afternoon.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct TimeEntry {
    pub label: String,
    pub value: i8,
    pub disabled: bool,
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct TimeColumn {
    pub kind: ColumnKind,
    pub entries: Vec<TimeEntry>,

    /// The index of the entry matching the current time, if it’s shown.
    pub selected: Option<usize>,
}

/// The columns a time panel shows, in display order.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct TimeColumns {
    columns: Vec<TimeColumn>,
}

impl TimeColumns {
    pub fn column(&self, kind: ColumnKind) -> Option<&TimeColumn> {
        self.columns.iter().find(|c| c.kind == kind)
    }

    pub fn iter(&self) -> impl Iterator<Item=&TimeColumn> {
        self.columns.iter()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}


/// Converts a 24-hour hour into the number shown on a 12-hour clock.
/// Hours outside the day wrap around it, so the result is always
/// between 1 and 12.
pub fn twelve_hour_label(hour: i8) -> i8 {
    match hour.rem_euclid(12) {
        0 => 12,
        h => h,
    }
}

/// Builds the columns for the given current time.
pub(crate) fn build_columns(time: LocalTime, config: &ShowTimeConfig, eval: &Evaluator<'_>, locale: &Locale) -> TimeColumns {
    let hour = time.hour();
    let pm = time.is_pm();

    let disabled_hours = eval.disabled_hours();
    let hour_range = if config.use_12_hours { if pm { 12_i8..24 } else { 0..12 } } else { 0..24 };
    let hours = hour_range
        .filter(|h| h.is_on_step(config.hour_step))
        .map(|h| TimeEntry {
            label:    padded(if config.use_12_hours { twelve_hour_label(h) } else { h }, 2),
            value:    h,
            disabled: disabled_hours.contains(&h),
        })
        .collect();

    let disabled_minutes = eval.disabled_minutes(hour);
    let minutes = sixty(config.minute_step, &disabled_minutes);

    let mut columns = vec![
        column(ColumnKind::Hour, hours, hour, config.hide_disabled_options),
        column(ColumnKind::Minute, minutes, time.minute(), config.hide_disabled_options),
    ];

    if config.show_second {
        let disabled_seconds = eval.disabled_seconds(hour, time.minute());
        let seconds = sixty(config.second_step, &disabled_seconds);
        columns.push(column(ColumnKind::Second, seconds, time.second(), config.hide_disabled_options));
    }

    if config.use_12_hours {
        let base = hour % 12;
        let meridiem = [false, true].iter()
            .map(|&half_pm| {
                let offset = if half_pm { 12 } else { 0 };
                TimeEntry {
                    label:    locale.meridiem_label(half_pm).to_string(),
                    value:    base + offset,
                    disabled: (offset .. offset + 12).all(|h| disabled_hours.contains(&h)),
                }
            })
            .collect();
        columns.push(column(ColumnKind::Meridiem, meridiem, hour, config.hide_disabled_options));
    }

    TimeColumns { columns }
}

fn sixty(step: i8, disabled: &[i8]) -> Vec<TimeEntry> {
    (0_i8..60)
        .filter(|n| n.is_on_step(step))
        .map(|n| TimeEntry { label: padded(n, 2), value: n, disabled: disabled.contains(&n) })
        .collect()
}

fn column(kind: ColumnKind, mut entries: Vec<TimeEntry>, current: i8, hide_disabled: bool) -> TimeColumn {
    if hide_disabled {
        entries.retain(|e| !e.disabled);
    }

    let selected = match kind {
        ColumnKind::Meridiem => entries.iter().position(|e| (e.value >= 12) == (current >= 12)),
        _                    => entries.iter().position(|e| e.value == current),
    };

    TimeColumn { kind, entries, selected }
}

/// Returns the time after picking an entry with the given value in the
/// given column.
pub(crate) fn apply_entry(time: LocalTime, kind: ColumnKind, value: i8) -> Result<LocalTime, Error> {
    match kind {
        ColumnKind::Hour | ColumnKind::Meridiem => LocalTime::hms(value, time.minute(), time.second()),
        ColumnKind::Minute                      => LocalTime::hms(time.hour(), value, time.second()),
        ColumnKind::Second                      => LocalTime::hms(time.hour(), time.minute(), value),
    }
}


/// A request for the renderer to scroll a column to an entry.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct ScrollRequest {
    pub column: ColumnKind,
    pub index: usize,
}

/// Scroll requests waiting to be picked up by the renderer. Only the
/// latest request for each column is kept, so a column that was clicked
/// twice scrolls once, to where it was clicked last.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct ScrollQueue {
    requests: Vec<ScrollRequest>,
}

impl ScrollQueue {
    pub fn request(&mut self, column: ColumnKind, index: usize) {
        self.requests.retain(|r| r.column != column);
        self.requests.push(ScrollRequest { column, index });
    }

    pub fn take(&mut self) -> Vec<ScrollRequest> {
        std::mem::take(&mut self.requests)
    }
}
