//! Record repository contract and the seed-backed static implementation.
//!
//! # Responsibility
//! - Expose ordered, immutable record slices to filters and views.
//! - Decode the JSON seed document and reject inconsistent data at load.
//!
//! # Invariants
//! - Archive ids and location ids are unique within one repository.
//! - The shared repository never panics on bad seed data; it degrades to an
//!   empty store and logs the failure.

use crate::model::archive::ArchiveRecord;
use crate::model::dashboard::{KpiMetric, MonthlyPoint, ProgramStat};
use crate::model::location::LocationItem;
use crate::model::timeline::TimelineEvent;
use log::{error, info};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

const SEED_JSON: &str = include_str!("../../data/seed.json");

static SHARED_REPOSITORY: Lazy<StaticRecordRepository> =
    Lazy::new(|| match StaticRecordRepository::from_seed() {
        Ok(repo) => {
            info!(
                "event=store_load module=repo status=ok archive={} timeline={} locations={}",
                repo.archive_records().len(),
                repo.timeline_events().len(),
                repo.locations().len()
            );
            repo
        }
        Err(err) => {
            error!("event=store_load module=repo status=error error={err}");
            StaticRecordRepository::default()
        }
    });

pub type RepoResult<T> = Result<T, RepoError>;

/// Seed loading error.
#[derive(Debug)]
pub enum RepoError {
    /// Seed document is not valid JSON for [`SeedDocument`].
    Decode(serde_json::Error),
    DuplicateArchiveId(String),
    DuplicateLocationId(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decode(err) => write!(f, "invalid seed document: {err}"),
            Self::DuplicateArchiveId(id) => write!(f, "duplicate archive record id: {id}"),
            Self::DuplicateLocationId(id) => write!(f, "duplicate location id: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Decode(err) => Some(err),
            Self::DuplicateArchiveId(_) | Self::DuplicateLocationId(_) => None,
        }
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value)
    }
}

/// Wire shape of the seed document. Missing sections decode as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedDocument {
    pub archive_records: Vec<ArchiveRecord>,
    pub timeline_events: Vec<TimelineEvent>,
    pub locations: Vec<LocationItem>,
    pub programs: Vec<ProgramStat>,
    pub kpis: Vec<KpiMetric>,
    pub monthly_series: Vec<MonthlyPoint>,
}

/// Read access to the static dashboard records.
pub trait RecordRepository {
    fn archive_records(&self) -> &[ArchiveRecord];
    fn timeline_events(&self) -> &[TimelineEvent];
    fn locations(&self) -> &[LocationItem];
    fn programs(&self) -> &[ProgramStat];
    fn kpis(&self) -> &[KpiMetric];
    fn monthly_series(&self) -> &[MonthlyPoint];
}

impl<R: RecordRepository + ?Sized> RecordRepository for &R {
    fn archive_records(&self) -> &[ArchiveRecord] {
        (**self).archive_records()
    }

    fn timeline_events(&self) -> &[TimelineEvent] {
        (**self).timeline_events()
    }

    fn locations(&self) -> &[LocationItem] {
        (**self).locations()
    }

    fn programs(&self) -> &[ProgramStat] {
        (**self).programs()
    }

    fn kpis(&self) -> &[KpiMetric] {
        (**self).kpis()
    }

    fn monthly_series(&self) -> &[MonthlyPoint] {
        (**self).monthly_series()
    }
}

/// In-memory repository built from a validated [`SeedDocument`].
#[derive(Debug, Clone, Default)]
pub struct StaticRecordRepository {
    doc: SeedDocument,
}

impl StaticRecordRepository {
    /// Builds a repository from an already-decoded document.
    ///
    /// # Errors
    /// - `DuplicateArchiveId` / `DuplicateLocationId` when ids collide.
    pub fn try_new(doc: SeedDocument) -> RepoResult<Self> {
        if let Some(id) = first_duplicate(doc.archive_records.iter().map(|r| r.id.as_str())) {
            return Err(RepoError::DuplicateArchiveId(id));
        }
        if let Some(id) = first_duplicate(doc.locations.iter().map(|l| l.id.as_str())) {
            return Err(RepoError::DuplicateLocationId(id));
        }
        Ok(Self { doc })
    }

    /// Decodes and validates a JSON seed document.
    pub fn from_json_str(json: &str) -> RepoResult<Self> {
        let doc: SeedDocument = serde_json::from_str(json)?;
        Self::try_new(doc)
    }

    /// Loads the seed document compiled into the crate.
    pub fn from_seed() -> RepoResult<Self> {
        Self::from_json_str(SEED_JSON)
    }

    /// Process-wide repository over the embedded seed.
    pub fn shared() -> &'static StaticRecordRepository {
        &SHARED_REPOSITORY
    }

    pub fn document(&self) -> &SeedDocument {
        &self.doc
    }
}

impl RecordRepository for StaticRecordRepository {
    fn archive_records(&self) -> &[ArchiveRecord] {
        &self.doc.archive_records
    }

    fn timeline_events(&self) -> &[TimelineEvent] {
        &self.doc.timeline_events
    }

    fn locations(&self) -> &[LocationItem] {
        &self.doc.locations
    }

    fn programs(&self) -> &[ProgramStat] {
        &self.doc.programs
    }

    fn kpis(&self) -> &[KpiMetric] {
        &self.doc.kpis
    }

    fn monthly_series(&self) -> &[MonthlyPoint] {
        &self.doc.monthly_series
    }
}

fn first_duplicate<'a>(ids: impl Iterator<Item = &'a str>) -> Option<String> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Some(id.to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::{RecordRepository, RepoError, StaticRecordRepository};

    #[test]
    fn embedded_seed_loads() {
        let repo = StaticRecordRepository::from_seed().expect("embedded seed should decode");
        assert_eq!(repo.archive_records().len(), 4);
        assert_eq!(repo.timeline_events().len(), 4);
        assert_eq!(repo.locations().len(), 6);
        assert_eq!(repo.programs().len(), 3);
        assert_eq!(repo.kpis().len(), 6);
        assert_eq!(repo.monthly_series().len(), 6);
    }

    #[test]
    fn shared_repository_matches_seed() {
        let shared = StaticRecordRepository::shared();
        assert_eq!(shared.archive_records()[0].id, "CLM-2024-001542");
    }

    #[test]
    fn missing_sections_decode_as_empty() {
        let repo = StaticRecordRepository::from_json_str("{}").expect("empty doc is valid");
        assert!(repo.archive_records().is_empty());
        assert!(repo.locations().is_empty());
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        let err = StaticRecordRepository::from_json_str("{\"locations\": 3}")
            .expect_err("non-array locations must fail");
        assert!(matches!(err, RepoError::Decode(_)));
    }
}
