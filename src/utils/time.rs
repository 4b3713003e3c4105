//! Time utilities: parsing HH:MM, end-time arithmetic, hour labels.

use crate::errors::{AppError, AppResult};
use chrono::{Duration, NaiveTime};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Hour used to bucket a start time: the integer before the first ':'.
/// Minutes and seconds are not checked ("10:00:00" → 10, "11:75" → 11);
/// only a non-numeric or out-of-range hour yields `None`.
pub fn parse_hour(t: &str) -> Option<u32> {
    let hour = t.trim().split(':').next()?.trim();
    match hour.parse::<u32>() {
        Ok(h) if h <= 23 && hour.chars().all(|c| c.is_ascii_digit()) => Some(h),
        _ => None,
    }
}

/// Naive wall-clock addition with no timezone. Results wrap past midnight
/// (`23:50` + 20 → `00:10`); the calendar never models multi-day walks, so
/// a wrapped value is only meant for display.
pub fn calculate_end_time(start_time: &str, duration_minutes: u32) -> AppResult<String> {
    let start = parse_time(start_time).ok_or_else(|| AppError::InvalidTime(start_time.to_string()))?;
    let (end, _) = start.overflowing_add_signed(Duration::minutes(i64::from(duration_minutes)));
    Ok(end.format("%H:%M").to_string())
}

/// 12-hour label for a slot hour: 0 → "12:00 AM", 13 → "1:00 PM".
pub fn format_hour_12(hour: u32) -> String {
    let suffix = if hour % 24 < 12 { "AM" } else { "PM" };
    let h = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:00 {}", h, suffix)
}
