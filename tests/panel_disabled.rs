extern crate datepanel;
use datepanel::{DatePiece, DateTimeValue, Month, PanelError};
use datepanel::panel::*;

use std::cell::Cell as Counter;
use std::rc::Rc;

use pretty_assertions::assert_eq;


fn day(year: i64, month: Month, day: i8) -> DateTimeValue {
    DateTimeValue::ymd(year, month, day).unwrap()
}

fn now() -> DateTimeValue {
    day(1990, Month::September, 3)
}


#[test]
fn disabled_month_cells() {
    let mut panel = PickerPanel::new(PanelConfig::new(PickerKind::Month)
        .now(now())
        .disabled(DisabledRules::new().date(|d| d.month() == Month::January)));

    assert!(panel.cells()[0].disabled);
    assert!(!panel.cells()[1].disabled);
    assert_eq!(panel.select_cell(day(1990, Month::January, 1)), Err(PanelError::DisabledSelection));
    assert_eq!(panel.select_cell(day(1990, Month::February, 1)).map(|e| e.len()), Ok(2));
}

#[test]
fn disabled_year_cells() {
    let mut panel = PickerPanel::new(PanelConfig::new(PickerKind::Year)
        .now(now())
        .disabled(DisabledRules::new().date(|d| d.year() == 1990)));

    assert_eq!(panel.select_cell(day(1990, Month::January, 1)), Err(PanelError::DisabledSelection));
    assert!(panel.select_cell(day(1993, Month::January, 1)).is_ok());
}

#[test]
fn drilling_cells_are_never_disabled() {
    let mut panel = PickerPanel::new(PanelConfig::new(PickerKind::Date)
        .mode(ViewMode::Decade)
        .now(now())
        .disabled(DisabledRules::new().date(|d| d.year() == 1900)));

    assert!(panel.cells().iter().all(|c| !c.disabled));
    let events = panel.select_cell(day(1900, Month::January, 1)).unwrap();
    assert!(matches!(events[..], [PanelEvent::PanelChange { view: ViewMode::Year, .. }]));
}

#[test]
fn each_cell_is_asked_about_once() {
    let calls = Rc::new(Counter::new(0));
    let seen = Rc::clone(&calls);
    let panel = PickerPanel::new(PanelConfig::new(PickerKind::Month)
        .now(now())
        .disabled(DisabledRules::new().date(move |_| { seen.set(seen.get() + 1); false })));

    let _ = panel.cells();
    assert_eq!(calls.get(), 12);
}

#[test]
fn quarters_are_asked_about_their_first_day() {
    let mut panel = PickerPanel::new(PanelConfig::new(PickerKind::Quarter)
        .now(now())
        .disabled(DisabledRules::new().date(|d| d.month() == Month::April && d.day() == 1)));

    let disabled: Vec<_> = panel.cells().iter().map(|c| c.disabled).collect();
    assert_eq!(disabled, vec![false, true, false, false]);
    assert_eq!(panel.select_cell(day(1990, Month::May, 17)), Err(PanelError::DisabledSelection));
}

#[test]
fn disabled_days_ignore_the_time() {
    let mut panel = PickerPanel::new(PanelConfig::new(PickerKind::DateTime)
        .now(now())
        .disabled(DisabledRules::new().date(|d| *d == DateTimeValue::ymd(1990, Month::September, 5).unwrap())));

    let late = DateTimeValue::ymd_hms(1990, Month::September, 5, 23, 59, 59).unwrap();
    assert_eq!(panel.select_cell(late), Err(PanelError::DisabledSelection));
    assert_eq!(panel.pending(), None);
}

#[test]
fn time_rules_replace_top_level_ones() {
    let mut panel = PickerPanel::new(PanelConfig::new(PickerKind::DateTime)
        .now(now())
        .disabled(DisabledRules::new().hours(|| vec![0]))
        .show_time(ShowTimeConfig::default().disabled(DisabledRules::new().hours(|| vec![1]))));

    assert!(panel.select_time_cell(ColumnKind::Hour, 0).is_ok());
    assert_eq!(panel.select_time_cell(ColumnKind::Hour, 1), Err(PanelError::DisabledSelection));
}

#[test]
fn years_are_judged_by_their_first_day() {
    let only_first_enabled = DisabledRules::new().date(|d| !(d.month() == Month::January && d.day() == 1));
    let mut panel = PickerPanel::new(PanelConfig::new(PickerKind::Year).now(now()).disabled(only_first_enabled));
    assert!(panel.cells().iter().all(|c| !c.disabled));
    assert!(panel.select_cell(day(1995, Month::January, 1)).is_ok());

    let only_first_disabled = DisabledRules::new().date(|d| d.month() == Month::January && d.day() == 1);
    let mut panel = PickerPanel::new(PanelConfig::new(PickerKind::Year).now(now()).disabled(only_first_disabled));
    assert!(panel.cells().iter().all(|c| c.disabled));
    assert_eq!(panel.select_cell(day(1995, Month::July, 1)), Err(PanelError::DisabledSelection));
}

#[test]
fn refused_selections_change_nothing() {
    let mut panel = PickerPanel::new(PanelConfig::new(PickerKind::Date)
        .default_value(day(1990, Month::September, 1))
        .disabled(DisabledRules::new().date(|d| d.day() == 13)));

    let _ = panel.navigate(Direction::Next).unwrap();
    let anchor = panel.anchor();
    assert_eq!(panel.select_cell(day(1990, Month::October, 13)), Err(PanelError::DisabledSelection));
    assert_eq!(panel.anchor(), anchor);
    assert_eq!(panel.value(), Some(day(1990, Month::September, 1)));
}
