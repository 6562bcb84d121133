//! FFI use-case API for UI-facing calls.
//!
//! # Responsibility
//! - Expose page-level read models (archive rows, map markers, dashboard
//!   figures, routes) to the host UI via FRB.
//! - Translate UI tokens into typed filters and report bad tokens as messages.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Every call recomputes its view from the shared read-only store.

use fra_atlas_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    ArchiveRecord, ArchiveView, AtlasConfig, AtlasView, DashboardView, LayerType, MapConfig,
    PeriodFilter, RecordRepository, Route, StaticRecordRepository, StatusFilter, Trend,
};
use log::warn;
use std::sync::OnceLock;

static MAP_CONFIG: OnceLock<MapConfig> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One archive table row, pre-formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveItem {
    pub id: String,
    pub title: String,
    pub record_type: String,
    /// Status token (`verified|under-review|pending|rejected`).
    pub status: String,
    /// Badge tone (`success|warning|info|destructive`).
    pub status_tone: String,
    pub submitted_by: String,
    /// ISO date `YYYY-MM-DD`.
    pub submitted_date: String,
    pub last_updated: String,
    pub priority: String,
    pub priority_tone: String,
    /// Comma-grouped count, e.g. `15,847`.
    pub record_count: String,
}

/// Archive table response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveListResponse {
    pub items: Vec<ArchiveItem>,
    /// Size of the unfiltered archive.
    pub total: u32,
    /// Human-readable diagnostics; names the bad token on rejection.
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerItem {
    pub id: String,
    pub title: String,
    pub lat: f64,
    pub lng: f64,
    pub layer: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AtlasMarkersResponse {
    pub markers: Vec<MarkerItem>,
    /// Layers actually applied after token parsing.
    pub active_layers: Vec<String>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineItem {
    pub id: u32,
    pub date: String,
    pub title: String,
    pub status: String,
    /// Title-cased badge label, e.g. `In Progress`.
    pub status_label: String,
    pub status_tone: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KpiItem {
    pub title: String,
    pub value: f64,
    pub change: f64,
    /// `up|down`.
    pub trend: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesPoint {
    pub month: String,
    pub pmkisan: u32,
    pub water: u32,
    pub infrastructure: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramItem {
    pub id: String,
    pub name: String,
    pub beneficiaries: u64,
    pub budget_cr: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub kpis: Vec<KpiItem>,
    pub series: Vec<SeriesPoint>,
    pub programs: Vec<ProgramItem>,
    pub total_beneficiaries: u64,
    pub total_budget_cr: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteInfo {
    /// `atlas|dashboard|archive|not-found`.
    pub route: String,
    pub title: String,
    pub not_found: bool,
}

/// Map surface configuration for the host map widget.
#[derive(Debug, Clone, PartialEq)]
pub struct MapSetup {
    /// Provider credential; `None` means the UI should show the missing-key state.
    pub api_key: Option<String>,
    pub center_lat: f64,
    pub center_lng: f64,
    pub zoom: u8,
}

/// Lists archive rows matching search text, status and period tokens.
///
/// # FFI contract
/// - Sync call over in-memory data.
/// - Unknown `status`/`period` tokens return no items and a message.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn archive_list(search: String, status: String, period: String) -> ArchiveListResponse {
    let repo = StaticRecordRepository::shared();
    let total = saturating_u32(repo.archive_records().len());

    let parsed = status
        .parse::<StatusFilter>()
        .and_then(|status| period.parse::<PeriodFilter>().map(|period| (status, period)));
    let (status, period) = match parsed {
        Ok(filters) => filters,
        Err(err) => {
            warn!("event=archive_list module=ffi status=rejected kind={}", err.kind);
            return ArchiveListResponse {
                items: Vec::new(),
                total,
                message: format!("archive_list failed: {err}"),
            };
        }
    };

    let mut view = ArchiveView::new(repo);
    view.set_search_term(search);
    view.set_status(status);
    view.set_period(period);

    let items = view
        .visible_records()
        .into_iter()
        .map(to_archive_item)
        .collect::<Vec<_>>();
    let message = if items.is_empty() {
        "No records.".to_string()
    } else {
        format!("Showing {} of {} record(s).", items.len(), total)
    };
    ArchiveListResponse {
        items,
        total,
        message,
    }
}

/// Returns map markers for the given active layer tokens.
///
/// Unknown tokens are skipped and reported in `message`. An empty (or fully
/// rejected) layer list shows every location.
#[flutter_rust_bridge::frb(sync)]
pub fn atlas_markers(active_layers: Vec<String>) -> AtlasMarkersResponse {
    let mut view = AtlasView::new(StaticRecordRepository::shared(), map_config());
    for layer in LayerType::ALL {
        view.set_layer_active(layer, false);
    }

    let mut rejected = Vec::new();
    for token in &active_layers {
        match token.parse::<LayerType>() {
            Ok(layer) => view.set_layer_active(layer, true),
            Err(_) => rejected.push(token.trim().to_string()),
        }
    }

    let markers = view
        .markers()
        .into_iter()
        .map(|marker| MarkerItem {
            id: marker.id,
            title: marker.title,
            lat: marker.position.lat,
            lng: marker.position.lng,
            layer: marker.layer.as_str().to_string(),
        })
        .collect::<Vec<_>>();
    let message = if rejected.is_empty() {
        format!("Showing {} marker(s).", markers.len())
    } else {
        format!("Ignored unknown layer(s): {}", rejected.join(", "))
    };
    AtlasMarkersResponse {
        markers,
        active_layers: view
            .active_layers()
            .iter()
            .map(|layer| layer.as_str().to_string())
            .collect(),
        message,
    }
}

/// Digitization timeline in chronological seed order.
#[flutter_rust_bridge::frb(sync)]
pub fn timeline_events() -> Vec<TimelineItem> {
    ArchiveView::new(StaticRecordRepository::shared())
        .timeline()
        .iter()
        .map(|event| TimelineItem {
            id: event.id,
            date: event.date.to_string(),
            title: event.title.clone(),
            status: event.status.as_str().to_string(),
            status_label: event.status.label(),
            status_tone: event.status.tone().as_str().to_string(),
            description: event.description.clone(),
        })
        .collect()
}

/// KPI cards, chart series and scheme figures for the dashboard page.
#[flutter_rust_bridge::frb(sync)]
pub fn dashboard_snapshot() -> DashboardSnapshot {
    let view = DashboardView::new(StaticRecordRepository::shared());
    let totals = view.program_totals();
    DashboardSnapshot {
        kpis: view
            .kpis()
            .iter()
            .map(|kpi| KpiItem {
                title: kpi.title.clone(),
                value: kpi.value,
                change: kpi.change,
                trend: match kpi.trend() {
                    Trend::Up => "up".to_string(),
                    Trend::Down => "down".to_string(),
                },
            })
            .collect(),
        series: view
            .chart_series()
            .iter()
            .map(|point| SeriesPoint {
                month: point.month.clone(),
                pmkisan: point.pmkisan,
                water: point.water,
                infrastructure: point.infrastructure,
            })
            .collect(),
        programs: view
            .programs()
            .iter()
            .map(|program| ProgramItem {
                id: program.id.clone(),
                name: program.name.clone(),
                beneficiaries: program.beneficiaries,
                budget_cr: program.budget_cr,
            })
            .collect(),
        total_beneficiaries: totals.beneficiaries,
        total_budget_cr: totals.budget_cr,
    }
}

/// Resolves a location path to a page; unknown paths map to `not-found`.
#[flutter_rust_bridge::frb(sync)]
pub fn resolve_route(path: String) -> RouteInfo {
    let route = Route::resolve(path.as_str());
    RouteInfo {
        route: route_token(route).to_string(),
        title: route.title().to_string(),
        not_found: route == Route::NotFound,
    }
}

/// Map widget setup from environment configuration.
#[flutter_rust_bridge::frb(sync)]
pub fn map_setup() -> MapSetup {
    let map = map_config();
    MapSetup {
        api_key: map.api_key().map(str::to_string),
        center_lat: map.center.lat,
        center_lng: map.center.lng,
        zoom: map.zoom,
    }
}

fn map_config() -> &'static MapConfig {
    MAP_CONFIG.get_or_init(|| match AtlasConfig::from_env() {
        Ok(config) => config.map,
        Err(err) => {
            warn!("event=config_load module=ffi status=fallback error={err}");
            MapConfig::default()
        }
    })
}

fn route_token(route: Route) -> &'static str {
    match route {
        Route::Atlas => "atlas",
        Route::Dashboard => "dashboard",
        Route::Archive => "archive",
        Route::NotFound => "not-found",
    }
}

fn to_archive_item(record: &ArchiveRecord) -> ArchiveItem {
    ArchiveItem {
        id: record.id.clone(),
        title: record.title.clone(),
        record_type: record.record_type.clone(),
        status: record.status.as_str().to_string(),
        status_tone: record.status.tone().as_str().to_string(),
        submitted_by: record.submitted_by.clone(),
        submitted_date: record.submitted_date.to_string(),
        last_updated: record.last_updated.to_string(),
        priority: record.priority.as_str().to_string(),
        priority_tone: record.priority.tone().as_str().to_string(),
        record_count: record.formatted_record_count(),
    }
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::{
        archive_list, atlas_markers, core_version, dashboard_snapshot, init_logging, ping,
        resolve_route, timeline_events,
    };

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "/tmp/logs".to_string());
        assert!(error.contains("unsupported log level"));
    }

    #[test]
    fn archive_list_applies_status_token() {
        let response = archive_list(String::new(), "verified".to_string(), "all".to_string());
        assert_eq!(response.total, 4);
        let ids: Vec<&str> = response.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["CLM-2024-001542", "CLM-2024-001545"]);
        assert_eq!(response.items[0].record_count, "15,847");
        assert_eq!(response.items[0].status_tone, "success");
        assert_eq!(response.items[0].priority_tone, "destructive");
    }

    #[test]
    fn archive_list_passes_search_text_through_unchanged() {
        let spaced = archive_list(" rights".to_string(), "all".to_string(), "all".to_string());
        let ids: Vec<&str> = spaced.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["CLM-2024-001543"]);

        let leading = archive_list(" water".to_string(), "all".to_string(), "all".to_string());
        assert!(leading.items.is_empty());
        let bare = archive_list("water".to_string(), "all".to_string(), "all".to_string());
        assert_eq!(bare.items.len(), 1);
    }

    #[test]
    fn archive_list_reports_unknown_period() {
        let response = archive_list(
            "clm".to_string(),
            "all".to_string(),
            "last-decade".to_string(),
        );
        assert!(response.items.is_empty());
        assert!(response.message.contains("last-decade"));
    }

    #[test]
    fn atlas_markers_filters_by_layer_tokens() {
        let response = atlas_markers(vec!["water".to_string()]);
        assert_eq!(response.markers.len(), 2);
        assert!(response.markers.iter().all(|m| m.layer == "water"));
        assert_eq!(response.active_layers, vec!["water".to_string()]);
    }

    #[test]
    fn atlas_markers_without_layers_shows_all_and_reports_unknown() {
        let response = atlas_markers(vec!["roads".to_string()]);
        assert_eq!(response.markers.len(), 6);
        assert!(response.active_layers.is_empty());
        assert!(response.message.contains("roads"));
    }

    #[test]
    fn timeline_and_dashboard_expose_seed_data() {
        let timeline = timeline_events();
        assert_eq!(timeline.len(), 4);
        assert_eq!(timeline[1].status_label, "In Progress");

        let snapshot = dashboard_snapshot();
        assert_eq!(snapshot.kpis.len(), 6);
        assert_eq!(snapshot.kpis[2].trend, "down");
        assert_eq!(snapshot.series.len(), 6);
        assert_eq!(snapshot.total_budget_cr, 13_800);
    }

    #[test]
    fn resolve_route_falls_back_to_not_found() {
        assert_eq!(resolve_route("/dashboard".to_string()).route, "dashboard");
        let missing = resolve_route("/nope".to_string());
        assert!(missing.not_found);
        assert_eq!(missing.title, "Page not found");
    }
}
