//! ANSI color helper utilities for terminal output.

use crate::models::HolidayStatus;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Terminal counterpart of `HolidayStatus::color_class`.
pub fn color_for_holiday(status: HolidayStatus) -> &'static str {
    match status {
        HolidayStatus::Pending => YELLOW,
        HolidayStatus::Approved => GREEN,
        HolidayStatus::Denied => RED,
    }
}

/// Wrap `value` in `color` unless colors are disabled.
pub fn paint(value: &str, color: &str, enabled: bool) -> String {
    if enabled {
        format!("{color}{value}{RESET}")
    } else {
        value.to_string()
    }
}
