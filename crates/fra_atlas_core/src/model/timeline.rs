//! Digitization timeline milestones.

use crate::model::{title_case_label, StatusTone};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimelineStatus {
    Completed,
    InProgress,
    Pending,
}

impl TimelineStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::InProgress => "in-progress",
            Self::Pending => "pending",
        }
    }

    pub fn tone(self) -> StatusTone {
        match self {
            Self::Completed => StatusTone::Success,
            Self::InProgress => StatusTone::Warning,
            Self::Pending => StatusTone::Info,
        }
    }

    /// Badge label, e.g. `In Progress`.
    pub fn label(self) -> String {
        title_case_label(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub id: u32,
    pub date: NaiveDate,
    pub title: String,
    pub status: TimelineStatus,
    pub description: String,
}
