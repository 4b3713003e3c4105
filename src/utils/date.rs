//! Calendar arithmetic on naive dates. Weeks always start on Sunday.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Days, Months, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// ISO `YYYY-MM-DD` key used to index walks and holiday requests by day.
pub fn date_key(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// Parse an optional CLI date, falling back to `default`.
pub fn parse_date_or(s: Option<&String>, default: NaiveDate) -> AppResult<NaiveDate> {
    match s {
        Some(v) => parse_date(v),
        None => Ok(default),
    }
}

/// Column index of `d` in a Sunday-first week (0 = Sunday .. 6 = Saturday).
pub fn weekday_column(d: &NaiveDate) -> usize {
    d.weekday().num_days_from_sunday() as usize
}

/// The Sunday on or before `d`.
pub fn week_start(d: NaiveDate) -> NaiveDate {
    d.checked_sub_days(Days::new(weekday_column(&d) as u64))
        .unwrap_or(d)
}

/// The Saturday on or after `d`.
pub fn week_end(d: NaiveDate) -> NaiveDate {
    let start = week_start(d);
    start.checked_add_days(Days::new(6)).unwrap_or(start)
}

pub fn first_day_of_month(d: NaiveDate) -> NaiveDate {
    d.with_day(1).unwrap_or(d)
}

pub fn last_day_of_month(d: NaiveDate) -> NaiveDate {
    let first = first_day_of_month(d);
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(first)
}

pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut cursor = NaiveDate::from_ymd_opt(year, month, 1);

    while let Some(d) = cursor {
        if d.month() != month {
            break;
        }
        out.push(d);
        cursor = d.succ_opt();
    }

    out
}

/// Shift by whole calendar months. The day of month is clamped to the
/// length of the target month (Jan 31 + 1 month = Feb 28/29).
pub fn add_months(d: NaiveDate, months: i32) -> NaiveDate {
    let shifted = if months >= 0 {
        d.checked_add_months(Months::new(months as u32))
    } else {
        d.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted.unwrap_or(d)
}

pub fn add_days(d: NaiveDate, days: i64) -> NaiveDate {
    let shifted = if days >= 0 {
        d.checked_add_days(Days::new(days as u64))
    } else {
        d.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    shifted.unwrap_or(d)
}
