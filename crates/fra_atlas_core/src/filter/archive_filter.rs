//! Archive table filtering by search text, status and submission period.
//!
//! # Invariants
//! - All three predicates are ANDed.
//! - Search is a case-insensitive substring match against id, title or
//!   submitter (match-any); an empty term matches everything.
//! - Period windows are closed intervals `[today - window, today]`.

use crate::model::archive::{ArchiveRecord, ArchiveStatus};
use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Status selector; `All` disables the status predicate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusFilter {
    #[default]
    All,
    Only(ArchiveStatus),
}

impl StatusFilter {
    pub fn matches(self, status: ArchiveStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == status,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(status) => status.as_str(),
        }
    }
}

/// Submission-date window selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PeriodFilter {
    #[default]
    All,
    LastWeek,
    LastMonth,
    LastQuarter,
}

impl PeriodFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::LastWeek => "last-week",
            Self::LastMonth => "last-month",
            Self::LastQuarter => "last-quarter",
        }
    }

    /// First day inside the window ending at `today`, or `None` for `All`.
    ///
    /// Month arithmetic clamps to the last valid day of the target month.
    pub fn window_start(self, today: NaiveDate) -> Option<NaiveDate> {
        let start = match self {
            Self::All => return None,
            Self::LastWeek => today.checked_sub_days(Days::new(7)),
            Self::LastMonth => today.checked_sub_months(Months::new(1)),
            Self::LastQuarter => today.checked_sub_months(Months::new(3)),
        };
        Some(start.unwrap_or(NaiveDate::MIN))
    }

    pub fn contains(self, date: NaiveDate, today: NaiveDate) -> bool {
        match self.window_start(today) {
            None => true,
            Some(start) => start <= date && date <= today,
        }
    }
}

/// Archive page filter state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveFilter {
    pub search_term: String,
    pub status: StatusFilter,
    pub period: PeriodFilter,
}

impl ArchiveFilter {
    /// Returns whether this filter lets every record through.
    pub fn is_unconstrained(&self) -> bool {
        self.search_term.is_empty()
            && self.status == StatusFilter::All
            && self.period == PeriodFilter::All
    }
}

/// Returns whether one record passes all archive predicates.
pub fn matches_archive_record(
    record: &ArchiveRecord,
    filter: &ArchiveFilter,
    today: NaiveDate,
) -> bool {
    let needle = filter.search_term.to_lowercase();
    matches_with_needle(record, filter, needle.as_str(), today)
}

/// Filters archive records, keeping input order.
pub fn filter_archive_records<'a, I>(
    records: I,
    filter: &ArchiveFilter,
    today: NaiveDate,
) -> Vec<&'a ArchiveRecord>
where
    I: IntoIterator<Item = &'a ArchiveRecord>,
{
    let needle = filter.search_term.to_lowercase();
    records
        .into_iter()
        .filter(|record| matches_with_needle(record, filter, needle.as_str(), today))
        .collect()
}

fn matches_with_needle(
    record: &ArchiveRecord,
    filter: &ArchiveFilter,
    needle: &str,
    today: NaiveDate,
) -> bool {
    matches_search(record, needle)
        && filter.status.matches(record.status)
        && filter.period.contains(record.submitted_date, today)
}

fn matches_search(record: &ArchiveRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [
        record.id.as_str(),
        record.title.as_str(),
        record.submitted_by.as_str(),
    ]
    .into_iter()
    .any(|field| field.to_lowercase().contains(needle))
}
