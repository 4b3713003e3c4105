//! Month, week and day projections of a walker's schedule.
//!
//! All builders are pure: they read the grouped walks and the holiday
//! lookup and return fresh, serializable structures on every call.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::grouping::{HolidayLookup, WalksByDate, is_group_walk};
use crate::models::{HolidayRequest, HolidayStatus, TimeSlot, WalkRecord};
use crate::utils::date::{
    add_days, date_key, first_day_of_month, last_day_of_month, week_start, weekday_column,
};
use crate::utils::time::{format_hour_12, parse_hour};

/// One day of the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub date_key: String,
    pub walks: Vec<WalkRecord>,
    pub has_holiday_request: bool,
    pub holiday_status: Option<HolidayStatus>,
    pub holiday_color_class: Option<&'static str>,
    pub holiday_request: Option<HolidayRequest>,
    /// Ids of walks that share their start time and slot with another walk.
    pub group_walk_ids: Vec<String>,
}

impl CalendarCell {
    pub fn build(date: NaiveDate, walks_by_date: &WalksByDate, holidays: &HolidayLookup) -> Self {
        let key = date_key(&date);
        let walks = walks_by_date.get(&key).cloned().unwrap_or_default();
        let holiday = holidays.find(&key).cloned();

        let group_walk_ids = walks
            .iter()
            .filter(|w| is_group_walk(w, &walks))
            .map(|w| w.id.clone())
            .collect();

        Self {
            date,
            date_key: key,
            has_holiday_request: holiday.is_some(),
            holiday_status: holiday.as_ref().map(|h| h.status),
            holiday_color_class: holiday.as_ref().map(|h| h.status.color_class()),
            holiday_request: holiday,
            walks,
            group_walk_ids,
        }
    }

    /// Two or more walks on this day start at `start_time` in `slot`.
    pub fn is_group_slot(&self, start_time: &str, slot: TimeSlot) -> bool {
        self.walks
            .iter()
            .filter(|w| w.start_time == start_time && w.time_slot == slot)
            .count()
            >= 2
    }

    pub fn is_group_walk(&self, walk: &WalkRecord) -> bool {
        self.group_walk_ids.iter().any(|id| *id == walk.id)
    }
}

/// Sunday-first row of a month view; `None` pads days outside the month.
pub type Week = [Option<CalendarCell>; 7];

/// Rectangular month view of `reference_date`'s month.
pub fn build_month_grid(
    reference_date: NaiveDate,
    walks_by_date: &WalksByDate,
    holidays: &HolidayLookup,
) -> Vec<Week> {
    let first = first_day_of_month(reference_date);
    let last = last_day_of_month(reference_date);

    let mut slots: Vec<Option<CalendarCell>> = Vec::with_capacity(42);
    slots.extend((0..weekday_column(&first)).map(|_| None));

    let mut day = first;
    while day <= last {
        slots.push(Some(CalendarCell::build(day, walks_by_date, holidays)));
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }

    while slots.len() % 7 != 0 {
        slots.push(None);
    }

    let mut weeks = Vec::with_capacity(slots.len() / 7);
    let mut iter = slots.into_iter();
    while iter.len() > 0 {
        let week: Week = std::array::from_fn(|_| iter.next().flatten());
        weeks.push(week);
    }

    log::debug!(
        "month grid {}: {} weeks",
        first.format("%Y-%m"),
        weeks.len()
    );
    weeks
}

/// Seven consecutive days, Sunday through Saturday, containing `reference_date`.
pub fn build_week_grid(
    reference_date: NaiveDate,
    walks_by_date: &WalksByDate,
    holidays: &HolidayLookup,
) -> [CalendarCell; 7] {
    let start = week_start(reference_date);
    std::array::from_fn(|i| CalendarCell::build(add_days(start, i as i64), walks_by_date, holidays))
}

/// Inclusive range of hours shown by the day view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHours {
    pub start: u32,
    pub end: u32,
}

impl Default for DayHours {
    fn default() -> Self {
        Self { start: 6, end: 21 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HourSlot {
    pub hour: u32,
    pub display: String,
    pub walks: Vec<WalkRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayGrid {
    pub date: NaiveDate,
    pub date_key: String,
    pub time_slots: Vec<HourSlot>,
    pub holiday_request: Option<HolidayRequest>,
    pub group_walk_ids: Vec<String>,
    /// Walks of the day left out because their start hour is not a number in 0..=23.
    pub malformed_walk_ids: Vec<String>,
}

/// Hourly day view over the default 06:00-21:00 range.
pub fn build_day_grid(
    reference_date: NaiveDate,
    walks_by_date: &WalksByDate,
    holidays: &HolidayLookup,
) -> DayGrid {
    build_day_grid_with_hours(reference_date, walks_by_date, holidays, DayHours::default())
}

pub fn build_day_grid_with_hours(
    reference_date: NaiveDate,
    walks_by_date: &WalksByDate,
    holidays: &HolidayLookup,
    hours: DayHours,
) -> DayGrid {
    let cell = CalendarCell::build(reference_date, walks_by_date, holidays);

    let mut malformed_walk_ids = Vec::new();
    let mut bucketed: Vec<(u32, &WalkRecord)> = Vec::with_capacity(cell.walks.len());
    for walk in &cell.walks {
        match parse_hour(&walk.start_time) {
            Some(hour) => bucketed.push((hour, walk)),
            None => {
                log::warn!(
                    "walk {} on {} has malformed start time '{}', skipped from day view",
                    walk.id,
                    cell.date_key,
                    walk.start_time
                );
                malformed_walk_ids.push(walk.id.clone());
            }
        }
    }

    let time_slots = (hours.start..=hours.end)
        .map(|hour| HourSlot {
            hour,
            display: format_hour_12(hour),
            walks: bucketed
                .iter()
                .filter(|(h, _)| *h == hour)
                .map(|(_, w)| (*w).clone())
                .collect(),
        })
        .collect();

    DayGrid {
        date: cell.date,
        date_key: cell.date_key,
        time_slots,
        holiday_request: cell.holiday_request,
        group_walk_ids: cell.group_walk_ids,
        malformed_walk_ids,
    }
}
