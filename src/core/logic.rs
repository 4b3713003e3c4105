use chrono::NaiveDate;
use serde::Serialize;

use super::grid::{
    CalendarCell, DayGrid, DayHours, Week, build_day_grid_with_hours, build_month_grid,
    build_week_grid,
};
use super::grouping::{HolidayLookup, TieBreak, group_walks_by_date, upcoming_walks, walks_for_walker};
use crate::config::Config;
use crate::models::{CalendarCursor, HolidayRequest, Snapshot, ViewMode};

/// Knobs for one schedule build. `today` drives the upcoming filter and is
/// always supplied by the caller.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub walker_id: Option<String>,
    pub today: NaiveDate,
    pub upcoming_only: bool,
    pub tie_break: TieBreak,
    pub day_hours: DayHours,
}

impl BuildOptions {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            walker_id: None,
            today,
            upcoming_only: true,
            tie_break: TieBreak::default(),
            day_hours: DayHours::default(),
        }
    }

    pub fn from_config(cfg: &Config, walker_id: Option<String>, today: NaiveDate) -> Self {
        Self {
            walker_id,
            today,
            upcoming_only: cfg.upcoming_only,
            tie_break: cfg.holiday_tie_break,
            day_hours: cfg.day_hours(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "cells", rename_all = "lowercase")]
pub enum ViewGrid {
    Day(DayGrid),
    Week([CalendarCell; 7]),
    Month(Vec<Week>),
}

impl ViewGrid {
    /// Every date-level cell in the grid, in calendar order. The day view
    /// contributes no cells.
    pub fn cells(&self) -> Vec<&CalendarCell> {
        match self {
            ViewGrid::Day(_) => Vec::new(),
            ViewGrid::Week(cells) => cells.iter().collect(),
            ViewGrid::Month(weeks) => weeks.iter().flatten().flatten().collect(),
        }
    }
}

/// A rendered schedule: header text plus the grid for the cursor's mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleView {
    pub title: String,
    pub cursor: CalendarCursor,
    pub walker_id: Option<String>,
    pub grid: ViewGrid,
}

pub struct Core;

impl Core {
    pub fn build_view(
        cursor: CalendarCursor,
        snapshot: &Snapshot,
        options: &BuildOptions,
    ) -> ScheduleView {
        let walker = options.walker_id.as_deref();

        let walks = if options.upcoming_only {
            upcoming_walks(&snapshot.walks, walker, options.today)
        } else {
            walks_for_walker(&snapshot.walks, walker)
        };

        let holidays: Vec<HolidayRequest> = match walker {
            Some(id) => snapshot.holidays_for_walker(id),
            None => snapshot.holiday_requests.clone(),
        };

        let walks_by_date = group_walks_by_date(&walks);
        let lookup = HolidayLookup::new(&holidays).with_tie_break(options.tie_break);
        let date = cursor.reference_date;

        log::debug!(
            "building {} view for {} ({} walks, {} holiday requests)",
            cursor.view_mode.as_str(),
            date,
            walks.len(),
            holidays.len()
        );

        let grid = match cursor.view_mode {
            ViewMode::Day => ViewGrid::Day(build_day_grid_with_hours(
                date,
                &walks_by_date,
                &lookup,
                options.day_hours,
            )),
            ViewMode::Week => ViewGrid::Week(build_week_grid(date, &walks_by_date, &lookup)),
            ViewMode::Month => ViewGrid::Month(build_month_grid(date, &walks_by_date, &lookup)),
        };

        ScheduleView {
            title: cursor.title(),
            cursor,
            walker_id: options.walker_id.clone(),
            grid,
        }
    }
}
