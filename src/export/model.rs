// src/export/model.rs

use serde::Serialize;

use crate::core::{CalendarCell, DayGrid, ScheduleView, ViewGrid};
use crate::models::{HolidayRequest, WalkRecord};
use crate::utils::time::calculate_end_time;

/// Flat row used by the CSV export: one per walk, plus one per holiday request.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct EntryExport {
    pub date: String,
    pub kind: String,
    pub id: String,
    pub walker_id: String,
    pub dog_id: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub time_slot: Option<String>,
    pub duration: Option<u32>,
    pub status: String,
    pub group_walk: bool,
    pub reason: Option<String>,
}

fn walk_row(date_key: &str, walk: &WalkRecord, group: bool) -> EntryExport {
    EntryExport {
        date: date_key.to_string(),
        kind: "walk".to_string(),
        id: walk.id.clone(),
        walker_id: walk.walker_id.clone(),
        dog_id: Some(walk.dog_id.clone()),
        start_time: Some(walk.start_time.clone()),
        end_time: calculate_end_time(&walk.start_time, walk.duration).ok(),
        time_slot: Some(walk.time_slot.as_str().to_string()),
        duration: Some(walk.duration),
        status: walk.status.as_str().to_string(),
        group_walk: group,
        reason: None,
    }
}

fn holiday_row(date_key: &str, h: &HolidayRequest) -> EntryExport {
    EntryExport {
        date: date_key.to_string(),
        kind: "holiday".to_string(),
        id: h.id.clone(),
        walker_id: h.walker_id.clone(),
        dog_id: None,
        start_time: None,
        end_time: None,
        time_slot: None,
        duration: None,
        status: h.status.as_str().to_string(),
        group_walk: false,
        reason: Some(h.reason.clone()),
    }
}

fn cell_rows(cell: &CalendarCell) -> Vec<EntryExport> {
    let mut rows: Vec<EntryExport> = cell
        .walks
        .iter()
        .map(|w| walk_row(&cell.date_key, w, cell.is_group_walk(w)))
        .collect();
    if let Some(h) = &cell.holiday_request {
        rows.push(holiday_row(&cell.date_key, h));
    }
    rows
}

fn day_rows(day: &DayGrid) -> Vec<EntryExport> {
    let mut rows: Vec<EntryExport> = day
        .time_slots
        .iter()
        .flat_map(|slot| slot.walks.iter())
        .map(|w| walk_row(&day.date_key, w, day.group_walk_ids.contains(&w.id)))
        .collect();
    if let Some(h) = &day.holiday_request {
        rows.push(holiday_row(&day.date_key, h));
    }
    rows
}

pub(crate) fn view_to_rows(view: &ScheduleView) -> Vec<EntryExport> {
    match &view.grid {
        ViewGrid::Day(day) => day_rows(day),
        grid => grid.cells().into_iter().flat_map(cell_rows).collect(),
    }
}
