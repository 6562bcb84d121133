//! Archive record model for the digitization archive page.
//!
//! # Invariants
//! - `id` is unique across the loaded archive (checked by the repository).
//! - `record_count` is stored numerically; grouping separators are display-only.

use crate::model::StatusTone;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Review state of one archived claim batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArchiveStatus {
    Verified,
    UnderReview,
    Pending,
    Rejected,
}

impl ArchiveStatus {
    pub const ALL: [ArchiveStatus; 4] = [
        Self::Verified,
        Self::UnderReview,
        Self::Pending,
        Self::Rejected,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Verified => "verified",
            Self::UnderReview => "under-review",
            Self::Pending => "pending",
            Self::Rejected => "rejected",
        }
    }

    pub fn tone(self) -> StatusTone {
        match self {
            Self::Verified => StatusTone::Success,
            Self::UnderReview => StatusTone::Warning,
            Self::Pending => StatusTone::Info,
            Self::Rejected => StatusTone::Destructive,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Badge tone; high priority is drawn as the alarming color.
    pub fn tone(self) -> StatusTone {
        match self {
            Self::High => StatusTone::Destructive,
            Self::Medium => StatusTone::Warning,
            Self::Low => StatusTone::Success,
        }
    }
}

/// One submitted record batch in the archive table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveRecord {
    /// Claim identifier, e.g. `CLM-2024-001542`.
    pub id: String,
    pub title: String,
    /// Serialized as `type` to match the seed document.
    #[serde(rename = "type")]
    pub record_type: String,
    pub status: ArchiveStatus,
    pub submitted_by: String,
    pub submitted_date: NaiveDate,
    pub last_updated: NaiveDate,
    pub priority: Priority,
    pub record_count: u32,
}

impl ArchiveRecord {
    /// Returns `record_count` with comma grouping (`15847` -> `15,847`).
    pub fn formatted_record_count(&self) -> String {
        group_thousands(u64::from(self.record_count))
    }
}

/// Formats an integer with `,` every three digits.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
