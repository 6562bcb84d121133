//! Core state and filtering logic for the FRA Digital Atlas dashboard.
//! This crate owns the record store, the filter engine and the page
//! view-state controllers; rendering lives in the host UI.

pub mod config;
pub mod filter;
pub mod logging;
pub mod model;
pub mod repo;
pub mod view;

pub use config::{AtlasConfig, ChatConfig, ConfigError, MapConfig};
pub use filter::archive_filter::{
    filter_archive_records, matches_archive_record, ArchiveFilter, PeriodFilter, StatusFilter,
};
pub use filter::layer_filter::{filter_locations, ActiveLayers};
pub use filter::token::FilterParseError;
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::archive::{ArchiveRecord, ArchiveStatus, Priority};
pub use model::dashboard::{KpiMetric, MonthlyPoint, ProgramStat, Trend};
pub use model::location::{LatLng, LayerType, LocationItem, MapMarker};
pub use model::timeline::{TimelineEvent, TimelineStatus};
pub use model::StatusTone;
pub use repo::record_repo::{
    RecordRepository, RepoError, RepoResult, SeedDocument, StaticRecordRepository,
};
pub use view::archive_view::{ArchiveSummary, ArchiveView, ArchiveViewEvent};
pub use view::atlas_view::{AtlasView, AtlasViewEvent, LayerControl, MapStatus, MapViewport};
pub use view::chat::{ChatAuthor, ChatEvent, ChatMessage, ChatSession};
pub use view::dashboard_view::{DashboardEvent, DashboardPeriod, DashboardView, ProgramTotals};
pub use view::listeners::{ListenerId, ViewListeners};
pub use view::shell::{Route, ShellEvent, ShellState};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
