extern crate datepanel;
use datepanel::{DateTimeValue, Month, PanelError, TimePiece};
use datepanel::panel::*;

use pretty_assertions::assert_eq;
use proptest::prelude::*;


fn at(year: i64, month: Month, day: i8, h: i8, m: i8, s: i8) -> DateTimeValue {
    DateTimeValue::ymd_hms(year, month, day, h, m, s).unwrap()
}

fn now() -> DateTimeValue {
    at(1990, Month::September, 3, 0, 0, 0)
}

fn selects(events: &[PanelEvent]) -> Vec<DateTimeValue> {
    events.iter().filter_map(|e| match e { PanelEvent::Select(v) => Some(*v), _ => None }).collect()
}


#[test]
fn date_then_time_then_date() {
    let mut panel = PickerPanel::new(PanelConfig::new(PickerKind::Date)
        .now(now())
        .show_time(ShowTimeConfig::default().default_value(at(2000, Month::January, 1, 1, 3, 7))));

    let events = panel.select_cell(at(1990, Month::September, 5, 0, 0, 0)).unwrap();
    assert_eq!(selects(&events), vec![ at(1990, Month::September, 5, 1, 3, 7) ]);

    let events = panel.select_time_cell(ColumnKind::Hour, 10).unwrap();
    assert_eq!(selects(&events), vec![ at(1990, Month::September, 5, 10, 3, 7) ]);

    let events = panel.select_cell(at(1990, Month::September, 20, 0, 0, 0)).unwrap();
    assert_eq!(selects(&events), vec![ at(1990, Month::September, 20, 10, 3, 7) ]);
    assert_eq!(panel.value(), None);
}

#[test]
fn seed_time_needs_a_time_component() {
    let mut panel = PickerPanel::new(PanelConfig::new(PickerKind::Month)
        .now(now())
        .show_time(ShowTimeConfig::default().default_value(at(2000, Month::January, 1, 1, 3, 7))));

    let events = panel.select_cell(at(1990, Month::May, 1, 0, 0, 0)).unwrap();
    assert_eq!(selects(&events), vec![ at(1990, Month::May, 1, 0, 0, 0) ]);
    assert!(panel.time_columns().is_none());
}

#[test]
fn existing_value_beats_the_seed() {
    let mut panel = PickerPanel::new(PanelConfig::new(PickerKind::Date)
        .value(at(2001, Month::January, 2, 10, 10, 10))
        .show_time(ShowTimeConfig::default().default_value(at(2000, Month::January, 1, 1, 3, 7))));

    let events = panel.select_cell(at(2001, Month::January, 5, 0, 0, 0)).unwrap();
    assert_eq!(selects(&events), vec![ at(2001, Month::January, 5, 10, 10, 10) ]);
}

#[test]
fn ok_confirms_the_pending_time() {
    let mut panel = PickerPanel::new(PanelConfig::new(PickerKind::Time).now(now()));
    assert_eq!(panel.confirm(), Err(PanelError::NothingPending));

    let events = panel.select_time_cell(ColumnKind::Hour, 3).unwrap();
    assert_eq!(events, vec![ PanelEvent::Select(at(1990, Month::September, 3, 3, 0, 0)) ]);
    assert_eq!(panel.value(), None);

    let events = panel.confirm().unwrap();
    assert_eq!(events, vec![
        PanelEvent::Change(at(1990, Month::September, 3, 3, 0, 0)),
        PanelEvent::Ok(at(1990, Month::September, 3, 3, 0, 0)),
    ]);
    assert_eq!(panel.value(), Some(at(1990, Month::September, 3, 3, 0, 0)));
    assert_eq!(panel.pending(), None);
}

#[test]
fn twelve_hour_meridiem_switch() {
    let mut panel = PickerPanel::new(PanelConfig::new(PickerKind::Time)
        .default_value(at(2000, Month::January, 1, 0, 1, 2))
        .need_confirm(false)
        .show_time(ShowTimeConfig::default().use_12_hours(true)));

    let columns = panel.time_columns().unwrap();
    assert_eq!(columns.column(ColumnKind::Hour).unwrap().entries[0].label, "12");

    let events = panel.select_time_cell(ColumnKind::Meridiem, 1).unwrap();
    assert_eq!(events.last(), Some(&PanelEvent::Change(at(2000, Month::January, 1, 12, 1, 2))));

    let columns = panel.time_columns().unwrap();
    assert_eq!(columns.column(ColumnKind::Hour).unwrap().entries[0].label, "12");
    assert_eq!(columns.column(ColumnKind::Hour).unwrap().selected, Some(0));
}

#[test]
fn meridiem_follows_disabled_hours() {
    let am = PickerPanel::new(PanelConfig::new(PickerKind::Time)
        .default_value(at(2000, Month::January, 1, 12, 0, 0))
        .disabled(DisabledRules::new().hours(|| (0..12).collect()))
        .show_time(ShowTimeConfig::default().use_12_hours(true)));
    let meridiem = am.time_columns().unwrap().column(ColumnKind::Meridiem).cloned().unwrap();
    assert_eq!(meridiem.entries.iter().map(|e| e.disabled).collect::<Vec<_>>(), vec![true, false]);

    let pm = PickerPanel::new(PanelConfig::new(PickerKind::Time)
        .default_value(at(2000, Month::January, 1, 12, 0, 0))
        .disabled(DisabledRules::new().hours(|| (12..24).collect()))
        .show_time(ShowTimeConfig::default().use_12_hours(true)));
    let meridiem = pm.time_columns().unwrap().column(ColumnKind::Meridiem).cloned().unwrap();
    assert_eq!(meridiem.entries.iter().map(|e| e.disabled).collect::<Vec<_>>(), vec![false, true]);
}

#[test]
fn predicates_see_the_24_hour_clock() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let calls = Rc::new(RefCell::new(Vec::new()));
    let (minutes, seconds) = (Rc::clone(&calls), Rc::clone(&calls));
    let rules = DisabledRules::new()
        .minutes(move |h| { minutes.borrow_mut().push((h, -1)); Vec::new() })
        .seconds(move |h, m| { seconds.borrow_mut().push((h, m)); Vec::new() });

    let panel = PickerPanel::new(PanelConfig::new(PickerKind::Date)
        .mode(ViewMode::Time)
        .value(at(2000, Month::January, 1, 13, 7, 4))
        .show_time(ShowTimeConfig::default().use_12_hours(true))
        .disabled(rules));

    let _ = panel.time_columns().unwrap();
    assert_eq!(*calls.borrow(), vec![ (13, -1), (13, 7) ]);
}

#[test]
fn hidden_options_shrink_the_columns() {
    let mut panel = PickerPanel::new(PanelConfig::new(PickerKind::Time)
        .now(at(1990, Month::September, 3, 10, 0, 0))
        .need_confirm(false)
        .disabled(DisabledRules::new().hours(|| vec![0, 1, 2, 3]))
        .show_time(ShowTimeConfig::default().hide_disabled_options(true).show_second(false)));

    let columns = panel.time_columns().unwrap();
    assert_eq!(columns.column(ColumnKind::Hour).unwrap().entries.len(), 20);
    assert_eq!(columns.column(ColumnKind::Hour).unwrap().entries[0].label, "04");
    assert!(columns.column(ColumnKind::Second).is_none());
    assert_eq!(panel.header_label(), "10:00");

    let _ = panel.select_time_cell(ColumnKind::Hour, 0).unwrap();
    assert_eq!(panel.value().map(|v| v.hour()), Some(4));
}

#[test]
fn disabled_hours_refuse_clicks() {
    let mut panel = PickerPanel::new(PanelConfig::new(PickerKind::Time)
        .now(now())
        .disabled(DisabledRules::new().hours(|| vec![0])));

    assert_eq!(panel.select_time_cell(ColumnKind::Hour, 0), Err(PanelError::DisabledSelection));
    assert!(panel.take_scroll_requests().is_empty());
    assert_eq!(selects(&panel.select_time_cell(ColumnKind::Hour, 1).unwrap()).len(), 1);
}

#[test]
fn clicks_ask_for_one_scroll_per_column() {
    let mut panel = PickerPanel::new(PanelConfig::new(PickerKind::Time).now(now()));
    let _ = panel.select_time_cell(ColumnKind::Hour, 3).unwrap();
    let _ = panel.select_time_cell(ColumnKind::Hour, 11).unwrap();

    assert_eq!(panel.take_scroll_requests(), vec![ ScrollRequest { column: ColumnKind::Hour, index: 11 } ]);
    assert!(panel.take_scroll_requests().is_empty());
}

#[test]
fn missing_entries() {
    let mut panel = PickerPanel::new(PanelConfig::new(PickerKind::Time).now(now()));
    assert_eq!(panel.select_time_cell(ColumnKind::Meridiem, 0),
               Err(PanelError::NoSuchEntry { column: ColumnKind::Meridiem, index: 0 }));
    assert!(panel.select_time_cell(ColumnKind::Minute, 60).is_err());
}


proptest! {
    #[test]
    fn twelve_hour_labels_round_trip(hour in 0_i8..24, days in -5_i8..5) {
        let label = twelve_hour_label(hour);
        prop_assert!((1..=12).contains(&label));
        let back = if hour >= 12 { label % 12 + 12 } else { label % 12 };
        prop_assert_eq!(back, hour);
        prop_assert_eq!(twelve_hour_label(hour + days * 24), label);
    }
}
