//! Plain-text rendering of a built schedule for the terminal.
//!
//! Group walks are suffixed with `*`; days with a time-off request carry a
//! status line colored by the request status.

use crate::core::{CalendarCell, DayGrid, ScheduleView, ViewGrid, Week};
use crate::models::{HolidayRequest, WalkRecord};
use crate::utils::colors::{CYAN, GREY, MAGENTA, color_for_holiday, paint};
use crate::utils::date::weekday_column;
use crate::utils::formatting::mins2readable;
use crate::utils::table::{Cell, Column, Table};
use crate::utils::time::calculate_end_time;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const COLUMN_WIDTH: usize = 14;

pub fn render(view: &ScheduleView, color: bool) -> String {
    let mut out = String::new();
    out.push_str(&paint(&view.title, CYAN, color));
    if let Some(walker) = &view.walker_id {
        out.push_str(&format!("  (walker {})", walker));
    }
    out.push_str("\n\n");

    match &view.grid {
        ViewGrid::Month(weeks) => out.push_str(&render_month(weeks, color)),
        ViewGrid::Week(cells) => out.push_str(&render_week(cells, color)),
        ViewGrid::Day(day) => out.push_str(&render_day(day, color)),
    }
    out
}

fn walk_line(walk: &WalkRecord, group: bool) -> String {
    let marker = if group { "*" } else { "" };
    format!("{}{} {}", walk.start_time, marker, walk.dog_id)
}

fn holiday_line(h: &HolidayRequest) -> String {
    format!("OFF {}", h.status.as_str())
}

fn cell_for(cell: &CalendarCell, heading: String) -> Cell {
    let mut lines = vec![heading];
    if let Some(h) = &cell.holiday_request {
        lines.push(holiday_line(h));
    }
    lines.extend(cell.walks.iter().map(|w| walk_line(w, cell.is_group_walk(w))));

    let out = Cell::lines(lines);
    match cell.holiday_status {
        Some(status) => out.colored(color_for_holiday(status)),
        None => out,
    }
}

fn weekday_columns() -> Vec<Column> {
    WEEKDAYS.iter().map(|d| Column::new(d, COLUMN_WIDTH)).collect()
}

fn render_month(weeks: &[Week], color: bool) -> String {
    let mut table = Table::new(weekday_columns(), color);

    for week in weeks {
        let row = week
            .iter()
            .map(|slot| match slot {
                Some(cell) => cell_for(cell, cell.date.format("%-d").to_string()),
                None => Cell::empty(),
            })
            .collect();
        table.add_row(row);
    }

    table.render()
}

fn render_week(cells: &[CalendarCell; 7], color: bool) -> String {
    let mut table = Table::new(weekday_columns(), color);
    let row = cells
        .iter()
        .map(|cell| {
            let heading = format!(
                "{} {}",
                WEEKDAYS[weekday_column(&cell.date)],
                cell.date.format("%b %-d")
            );
            cell_for(cell, heading)
        })
        .collect();
    table.add_row(row);
    table.render()
}

fn render_day(day: &DayGrid, color: bool) -> String {
    let mut out = String::new();

    if let Some(h) = &day.holiday_request {
        let line = format!("Time off ({}): {}", h.status.as_str(), h.reason);
        out.push_str(&paint(&line, color_for_holiday(h.status), color));
        out.push_str("\n\n");
    }

    let mut table = Table::new(
        vec![Column::new("Hour", 9), Column::new("Walks", 48)],
        color,
    );

    for slot in &day.time_slots {
        let lines: Vec<String> = slot
            .walks
            .iter()
            .map(|w| {
                let end = calculate_end_time(&w.start_time, w.duration).unwrap_or_default();
                let group = day.group_walk_ids.contains(&w.id);
                format!(
                    "{}-{} {} ({}, {})",
                    w.start_time,
                    end,
                    w.dog_id,
                    mins2readable(w.duration),
                    if group { "group" } else { "solo" }
                )
            })
            .collect();

        let walks = if lines.is_empty() {
            Cell::text("-").colored(GREY)
        } else {
            Cell::lines(lines)
        };
        table.add_row(vec![Cell::text(slot.display.clone()), walks]);
    }

    out.push_str(&table.render());

    if !day.malformed_walk_ids.is_empty() {
        out.push_str(&paint(
            &format!(
                "\nSkipped (invalid start time): {}\n",
                day.malformed_walk_ids.join(", ")
            ),
            MAGENTA,
            color,
        ));
    }

    out
}
