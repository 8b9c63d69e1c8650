use super::*;
use time::macros::date;

#[test]
fn parse_input_reads_html_date_values() {
    assert_eq!(parse_input("2026-10-19"), Some(date!(2026 - 10 - 19)));
    assert_eq!(parse_input(" 2030-01-05 "), Some(date!(2030 - 01 - 05)));
}

#[test]
fn parse_input_empty_or_bad_is_none() {
    assert_eq!(parse_input(""), None);
    assert_eq!(parse_input("   "), None);
    assert_eq!(parse_input("19/10/2026"), None);
    assert_eq!(parse_input("2026-02-30"), None);
}

#[test]
fn to_input_zero_pads() {
    assert_eq!(to_input(date!(2030 - 01 - 05)), "2030-01-05");
}

#[test]
fn display_uses_long_month() {
    assert_eq!(display(date!(2026 - 10 - 19)), "October 19, 2026");
    assert_eq!(display(date!(2030 - 01 - 05)), "January 5, 2030");
}
