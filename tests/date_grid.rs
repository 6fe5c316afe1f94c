extern crate datepanel;
use datepanel::{DateTimeValue, Locale, Month, Weekday};
use datepanel::panel::*;

use pretty_assertions::assert_eq;


fn grid(year: i64, month: Month, day: i8, first_day: Weekday) -> Vec<Cell> {
    let now = DateTimeValue::ymd(year, month, day).unwrap();
    PickerPanel::new(PanelConfig::new(PickerKind::Date)
        .now(now)
        .locale(Locale::english().with_first_day_of_week(first_day)))
        .cells()
}

fn first_label(year: i64, month: Month, day: i8, first_day: Weekday) -> String {
    grid(year, month, day, first_day)[0].label.clone()
}


#[test]
fn april_2020() {
    assert_eq!(first_label(2020, Month::April, 2, Weekday::Sunday), "29");
    assert_eq!(first_label(2020, Month::April, 2, Weekday::Monday), "30");
    assert_eq!(first_label(2020, Month::April, 2, Weekday::Friday), "27");
}

#[test]
fn march_2020() {
    assert_eq!(first_label(2020, Month::March, 1, Weekday::Sunday), "1");
    assert_eq!(first_label(2020, Month::March, 1, Weekday::Monday), "24");
}

#[test]
fn six_weeks_always() {
    for (year, month) in [(2015, Month::February), (2020, Month::February), (1990, Month::September)] {
        let cells = grid(year, month, 1, Weekday::Sunday);
        assert_eq!(cells.len(), DATE_CELLS);
        assert_eq!(cells.iter().filter(|c| c.in_view).count() as i8,
                   month.days_in_month(datepanel::Year(year).is_leap_year()));
    }
}

#[test]
fn days_are_in_order() {
    let cells = grid(1990, Month::September, 3, Weekday::Wednesday);
    for pair in cells.windows(2) {
        assert_eq!(pair[0].date.add(1, datepanel::Unit::Day), pair[1].date);
    }
}

#[test]
fn selected_day() {
    let value = DateTimeValue::ymd(1990, Month::September, 23).unwrap();
    let panel = PickerPanel::new(PanelConfig::new(PickerKind::Date).default_value(value));
    let selected: Vec<_> = panel.cells().into_iter().filter(|c| c.selected).collect();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].label, "23");
}
