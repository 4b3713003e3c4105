use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::date::date_key;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayStatus {
    Pending,
    Approved,
    Denied,
}

impl HolidayStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HolidayStatus::Pending => "pending",
            HolidayStatus::Approved => "approved",
            HolidayStatus::Denied => "denied",
        }
    }

    /// CSS class list used by the schedule page to tint a day by request status.
    pub fn color_class(&self) -> &'static str {
        match self {
            HolidayStatus::Pending => "bg-yellow-100 border-yellow-300 text-yellow-800",
            HolidayStatus::Approved => "bg-green-100 border-green-300 text-green-800",
            HolidayStatus::Denied => "bg-red-100 border-red-300 text-red-800",
        }
    }
}

/// A walker's time-off request for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayRequest {
    pub id: String,
    pub walker_id: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub reason: String,
    pub status: HolidayStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl HolidayRequest {
    pub fn date_key(&self) -> String {
        date_key(&self.date)
    }
}
