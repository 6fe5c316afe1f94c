extern crate datepanel;
use datepanel::{Month, Year};


#[test]
fn year_1600() {
    assert!(Year(1600).is_leap_year());
}

#[test]
fn year_1900() {
    assert!(Year(1900).is_leap_year() == false);
}

#[test]
fn year_2000() {
    assert!(Year(2000).is_leap_year());
}

#[test]
fn year_2038() {
    assert!(Year(2038).is_leap_year() == false);
}

#[test]
fn february_follows_the_year() {
    assert_eq!(Month::February.days_in_month(Year(2020).is_leap_year()), 29);
    assert_eq!(Month::February.days_in_month(Year(2100).is_leap_year()), 28);
}

#[test]
fn page_starts() {
    assert_eq!(Year(1994).decade_start(), 1990);
    assert_eq!(Year(1994).century_start(), 1900);
    assert_eq!(Year(-5).decade_start(), -10);
    assert_eq!(Year(-5).century_start(), -100);
}
