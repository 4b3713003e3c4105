//! Date bucketing, group-walk detection and holiday lookup.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{HolidayRequest, WalkRecord};

/// Walks keyed by ISO date. Same-day walks keep their input order.
pub type WalksByDate = BTreeMap<String, Vec<WalkRecord>>;

pub fn group_walks_by_date(walks: &[WalkRecord]) -> WalksByDate {
    let mut grouped = WalksByDate::new();
    for walk in walks {
        grouped.entry(walk.date_key()).or_default().push(walk.clone());
    }
    grouped
}

/// Walks that belong to `walker_id` (every walker when `None`).
pub fn walks_for_walker(walks: &[WalkRecord], walker_id: Option<&str>) -> Vec<WalkRecord> {
    walks
        .iter()
        .filter(|w| walker_id.is_none_or(|id| w.walker_id == id))
        .cloned()
        .collect()
}

/// Scheduled walks dated `today` or later, optionally for a single walker.
pub fn upcoming_walks(
    walks: &[WalkRecord],
    walker_id: Option<&str>,
    today: NaiveDate,
) -> Vec<WalkRecord> {
    walks
        .iter()
        .filter(|w| walker_id.is_none_or(|id| w.walker_id == id))
        .filter(|w| w.is_upcoming(today))
        .cloned()
        .collect()
}

/// True when some other walk in `same_day_walks` has the same date, start
/// time and slot. Exact field equality only; durations never make walks
/// overlap into a group.
pub fn is_group_walk(walk: &WalkRecord, same_day_walks: &[WalkRecord]) -> bool {
    same_day_walks
        .iter()
        .any(|other| other.id != walk.id && walk.shares_slot_with(other))
}

/// First request in input order for `date_key`.
pub fn find_holiday_for_date<'a>(
    date_key: &str,
    holiday_requests: &'a [HolidayRequest],
) -> Option<&'a HolidayRequest> {
    holiday_requests.iter().find(|h| h.date_key() == date_key)
}

/// How to pick one request when several share a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TieBreak {
    /// Earliest in input order.
    #[default]
    First,
    /// Greatest `updated_at`; requests without one rank lowest, equal
    /// timestamps keep input order.
    Latest,
}

/// Holiday requests of one snapshot plus the duplicate policy.
#[derive(Debug, Clone, Copy)]
pub struct HolidayLookup<'a> {
    requests: &'a [HolidayRequest],
    tie_break: TieBreak,
}

impl<'a> HolidayLookup<'a> {
    pub fn new(requests: &'a [HolidayRequest]) -> Self {
        Self {
            requests,
            tie_break: TieBreak::First,
        }
    }

    pub fn with_tie_break(self, tie_break: TieBreak) -> Self {
        Self { tie_break, ..self }
    }

    pub fn find(&self, date_key: &str) -> Option<&'a HolidayRequest> {
        match self.tie_break {
            TieBreak::First => find_holiday_for_date(date_key, self.requests),
            TieBreak::Latest => self
                .requests
                .iter()
                .filter(|h| h.date_key() == date_key)
                .fold(None, |best: Option<&'a HolidayRequest>, candidate| match best {
                    Some(b) if candidate.updated_at <= b.updated_at => Some(b),
                    _ => Some(candidate),
                }),
        }
    }
}
