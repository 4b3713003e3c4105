//! Cursor movement and header text for the three view modes.

use chrono::{Datelike, NaiveDate};

use crate::models::ViewMode;
use crate::utils::date::{add_days, add_months, week_end, week_start};

pub fn go_to_next(reference_date: NaiveDate, mode: ViewMode) -> NaiveDate {
    step(reference_date, mode, 1)
}

pub fn go_to_prev(reference_date: NaiveDate, mode: ViewMode) -> NaiveDate {
    step(reference_date, mode, -1)
}

/// `today` is supplied by the caller; nothing here reads the clock.
pub fn go_to_today(today: NaiveDate) -> NaiveDate {
    today
}

fn step(d: NaiveDate, mode: ViewMode, dir: i32) -> NaiveDate {
    match mode {
        ViewMode::Day => add_days(d, i64::from(dir)),
        ViewMode::Week => add_days(d, 7 * i64::from(dir)),
        ViewMode::Month => add_months(d, dir),
    }
}

/// "Jun 16 - Jun 22, 2024", or "Dec 29, 2024 - Jan 4, 2025" across a year end.
pub fn week_range(reference_date: NaiveDate) -> String {
    let start = week_start(reference_date);
    let end = week_end(reference_date);

    if start.year() == end.year() {
        format!("{} - {}", start.format("%b %-d"), end.format("%b %-d, %Y"))
    } else {
        format!(
            "{} - {}",
            start.format("%b %-d, %Y"),
            end.format("%b %-d, %Y")
        )
    }
}

pub fn view_title(reference_date: NaiveDate, mode: ViewMode) -> String {
    match mode {
        ViewMode::Day => reference_date.format("%A, %B %-d, %Y").to_string(),
        ViewMode::Week => week_range(reference_date),
        ViewMode::Month => reference_date.format("%B %Y").to_string(),
    }
}
