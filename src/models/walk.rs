use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::date::date_key;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeSlot {
    #[serde(rename = "AM")]
    Am,
    #[serde(rename = "PM")]
    Pm,
}

impl TimeSlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeSlot::Am => "AM",
            TimeSlot::Pm => "PM",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalkStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl WalkStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WalkStatus::Scheduled => "scheduled",
            WalkStatus::Completed => "completed",
            WalkStatus::Cancelled => "cancelled",
        }
    }

    pub fn is_scheduled(&self) -> bool {
        matches!(self, WalkStatus::Scheduled)
    }
}

/// A single walk appointment as delivered by the data layer.
///
/// `start_time` is kept as the raw `HH:MM` string: a malformed value must
/// still reach the calendar (month/week cells) and is only dropped from the
/// hour-bucketed day view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalkRecord {
    pub id: String,
    pub dog_id: String,
    pub walker_id: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub time_slot: TimeSlot,
    pub duration: u32,
    pub status: WalkStatus,
}

impl WalkRecord {
    pub fn date_key(&self) -> String {
        date_key(&self.date)
    }

    /// Scheduled and not in the past relative to `today`.
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.status.is_scheduled() && self.date >= today
    }

    /// Same calendar date, start time and slot: the fields that make two
    /// walks part of one group outing.
    pub fn shares_slot_with(&self, other: &WalkRecord) -> bool {
        self.date == other.date
            && self.start_time == other.start_time
            && self.time_slot == other.time_slot
    }
}
