#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::path::PathBuf;
use walkcal::models::{HolidayRequest, HolidayStatus, TimeSlot, WalkRecord, WalkStatus};

pub fn wcal() -> Command {
    cargo_bin_cmd!("walkcal")
}

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

/// Scheduled walk for walker "walker1" with a 45 minute duration.
pub fn walk(id: &str, date: &str, start: &str, slot: TimeSlot) -> WalkRecord {
    WalkRecord {
        id: id.to_string(),
        dog_id: format!("dog-{id}"),
        walker_id: "walker1".to_string(),
        date: d(date),
        start_time: start.to_string(),
        time_slot: slot,
        duration: 45,
        status: WalkStatus::Scheduled,
    }
}

pub fn holiday(id: &str, date: &str, status: HolidayStatus) -> HolidayRequest {
    HolidayRequest {
        id: id.to_string(),
        walker_id: "walker1".to_string(),
        date: d(date),
        reason: "Family trip".to_string(),
        status,
        admin_notes: None,
        updated_at: None,
    }
}

/// Unique path inside the system temp dir; any existing file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_walkcal.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Snapshot used by the CLI tests:
/// - w1, w2: group walk on 2024-06-20 10:00 AM (walker1)
/// - w3: 2024-06-21 14:30 PM (walker1)
/// - w4: malformed start time on 2024-06-20 (walker1)
/// - w5: completed walk on 2024-06-10 (walker1)
/// - w6: 2024-06-20 08:00 AM for walker2
/// - h1: approved time off on 2024-06-25 (walker1)
pub const SNAPSHOT_JSON: &str = r#"{
  "walks": [
    {"id": "w1", "dogId": "rex", "walkerId": "walker1", "date": "2024-06-20", "startTime": "10:00", "timeSlot": "AM", "duration": 45, "status": "scheduled"},
    {"id": "w2", "dogId": "luna", "walkerId": "walker1", "date": "2024-06-20", "startTime": "10:00", "timeSlot": "AM", "duration": 30, "status": "scheduled"},
    {"id": "w3", "dogId": "max", "walkerId": "walker1", "date": "2024-06-21", "startTime": "14:30", "timeSlot": "PM", "duration": 60, "status": "scheduled"},
    {"id": "w4", "dogId": "bella", "walkerId": "walker1", "date": "2024-06-20", "startTime": "ten", "timeSlot": "AM", "duration": 30, "status": "scheduled"},
    {"id": "w5", "dogId": "rex", "walkerId": "walker1", "date": "2024-06-10", "startTime": "09:00", "timeSlot": "AM", "duration": 45, "status": "completed"},
    {"id": "w6", "dogId": "odie", "walkerId": "walker2", "date": "2024-06-20", "startTime": "08:00", "timeSlot": "AM", "duration": 45, "status": "scheduled"}
  ],
  "holidayRequests": [
    {"id": "h1", "walkerId": "walker1", "date": "2024-06-25", "reason": "Vet appointment", "status": "approved"}
  ]
}"#;

/// Write the shared snapshot to a temp file and return its path.
pub fn write_snapshot(name: &str) -> String {
    let path = temp_path(name, "json");
    fs::write(&path, SNAPSHOT_JSON).expect("write snapshot");
    path
}

/// Config path that does not exist, so the defaults are used.
pub fn no_config(name: &str) -> String {
    temp_path(&format!("{name}_noconf"), "conf")
}
