use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::{holiday::HolidayRequest, walk::WalkRecord};
use crate::errors::{AppError, AppResult};

/// Walks and time-off requests as fetched by the data layer, already
/// deserialized. A build always runs against one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub walks: Vec<WalkRecord>,
    #[serde(default)]
    pub holiday_requests: Vec<HolidayRequest>,
}

impl Snapshot {
    pub fn new(walks: Vec<WalkRecord>, holiday_requests: Vec<HolidayRequest>) -> Self {
        Self {
            walks,
            holiday_requests,
        }
    }

    pub fn from_json(content: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read a JSON snapshot file.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::SnapshotLoad(format!(
                "{}: file not found",
                path.display()
            )));
        }

        let content = fs::read_to_string(path)?;
        let snapshot = Self::from_json(&content)
            .map_err(|e| AppError::SnapshotLoad(format!("{}: {e}", path.display())))?;

        log::debug!(
            "loaded snapshot {}: {} walks, {} holiday requests",
            path.display(),
            snapshot.walks.len(),
            snapshot.holiday_requests.len()
        );

        Ok(snapshot)
    }

    /// Holiday requests filed by one walker.
    pub fn holidays_for_walker(&self, walker_id: &str) -> Vec<HolidayRequest> {
        self.holiday_requests
            .iter()
            .filter(|h| h.walker_id == walker_id)
            .cloned()
            .collect()
    }
}
