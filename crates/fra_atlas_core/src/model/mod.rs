//! Read-only record entities shown by the dashboard pages.
//!
//! # Responsibility
//! - Define the archive/timeline/location/program shapes loaded from seed data.
//! - Derive presentation hints (tones, labels) without touching rendering.
//!
//! # Invariants
//! - Records are immutable after load; no type here exposes `&mut` mutators.
//! - Enum tags serialize as the kebab-case labels used by the UI.

pub mod archive;
pub mod dashboard;
pub mod location;
pub mod timeline;

use serde::{Deserialize, Serialize};

/// Color family a status or priority badge is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusTone {
    Success,
    Warning,
    Info,
    Destructive,
}

impl StatusTone {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Destructive => "destructive",
        }
    }
}

/// Turns a kebab-case token into a title-cased label (`in-progress` -> `In Progress`).
pub fn title_case_label(token: &str) -> String {
    token
        .split('-')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
