//! Publish-date helpers for the HTML date input.
//!
//! `<input type="date">` speaks `YYYY-MM-DD`; the form shows the chosen day
//! in long form. "Today" comes from the UTC clock, which is what the browser
//! clock gives `time` under `wasm-bindgen`.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

const INPUT_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const DISPLAY_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:long] [day padding:none], [year]");

/// Parse a date input value. Empty or malformed input means "not chosen".
#[must_use]
pub fn parse_input(raw: &str) -> Option<Date> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    Date::parse(raw, INPUT_FORMAT).ok()
}

/// Format a date as a date input value.
#[must_use]
pub fn to_input(date: Date) -> String {
    date.format(INPUT_FORMAT).unwrap_or_default()
}

/// Long human form, e.g. `October 19, 2026`.
#[must_use]
pub fn display(date: Date) -> String {
    date.format(DISPLAY_FORMAT).unwrap_or_default()
}

#[must_use]
pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}
