use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::navigation;

/// Calendar granularity. Any mode can switch to any other; switching only
/// changes how the current reference date is projected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Day,
    Week,
    #[default]
    Month,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Day => "day",
            ViewMode::Week => "week",
            ViewMode::Month => "month",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "day" => Some(ViewMode::Day),
            "week" => Some(ViewMode::Week),
            "month" => Some(ViewMode::Month),
            _ => None,
        }
    }
}

/// Externally owned calendar position: where the schedule is anchored and at
/// which granularity. Every move returns a new cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarCursor {
    pub reference_date: NaiveDate,
    pub view_mode: ViewMode,
}

impl CalendarCursor {
    pub fn new(reference_date: NaiveDate, view_mode: ViewMode) -> Self {
        Self {
            reference_date,
            view_mode,
        }
    }

    pub fn with_mode(self, view_mode: ViewMode) -> Self {
        Self { view_mode, ..self }
    }

    pub fn next(self) -> Self {
        Self {
            reference_date: navigation::go_to_next(self.reference_date, self.view_mode),
            ..self
        }
    }

    pub fn prev(self) -> Self {
        Self {
            reference_date: navigation::go_to_prev(self.reference_date, self.view_mode),
            ..self
        }
    }

    pub fn today(self, today: NaiveDate) -> Self {
        Self {
            reference_date: navigation::go_to_today(today),
            ..self
        }
    }

    pub fn title(&self) -> String {
        navigation::view_title(self.reference_date, self.view_mode)
    }
}
