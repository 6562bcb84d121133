//! UI token parsing for filter selectors.
//!
//! Tokens are matched trimmed and case-insensitively, so `" Under-Review "`
//! and `under-review` select the same status.

use crate::filter::archive_filter::{PeriodFilter, StatusFilter};
use crate::model::archive::ArchiveStatus;
use crate::model::location::LayerType;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Unknown selector token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterParseError {
    /// Which selector rejected the value (`status`, `period`, `layer`).
    pub kind: &'static str,
    pub value: String,
}

impl FilterParseError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

impl Display for FilterParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown {} filter `{}`", self.kind, self.value)
    }
}

impl Error for FilterParseError {}

fn normalize(value: &str) -> String {
    value.trim().to_ascii_lowercase()
}

impl FromStr for ArchiveStatus {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = normalize(s);
        ArchiveStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == token)
            .ok_or_else(|| FilterParseError::new("status", s))
    }
}

impl FromStr for StatusFilter {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if normalize(s) == "all" {
            return Ok(Self::All);
        }
        s.parse::<ArchiveStatus>().map(Self::Only)
    }
}

impl FromStr for PeriodFilter {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "all" => Ok(Self::All),
            "last-week" => Ok(Self::LastWeek),
            "last-month" => Ok(Self::LastMonth),
            "last-quarter" => Ok(Self::LastQuarter),
            _ => Err(FilterParseError::new("period", s)),
        }
    }
}

impl FromStr for LayerType {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = normalize(s);
        LayerType::ALL
            .into_iter()
            .find(|layer| layer.as_str() == token)
            .ok_or_else(|| FilterParseError::new("layer", s))
    }
}
