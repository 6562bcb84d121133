//! Terminal front-end for the atlas read models.
//!
//! # Responsibility
//! - Print the filtered archive, map markers, timeline and dashboard figures.
//! - Keep output deterministic so runs can be diffed.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use fra_atlas_core::{
    default_log_level, init_logging, ArchiveView, AtlasConfig, AtlasView, DashboardView,
    LayerType, PeriodFilter, Route, StaticRecordRepository, StatusFilter,
};
use serde_json::json;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "fra-atlas")]
#[command(about = "FRA Digital Atlas data inspection CLI")]
struct Cli {
    /// Print JSON instead of text lines.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
    /// Absolute directory for rolling log files; logging is off when unset.
    #[arg(long, global = true)]
    log_dir: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check core crate linkage.
    Ping,
    /// List archive records matching the filters.
    Archive {
        #[arg(long, default_value = "")]
        search: String,
        /// all|verified|under-review|pending|rejected
        #[arg(long, default_value = "all")]
        status: StatusFilter,
        /// all|last-week|last-month|last-quarter
        #[arg(long, default_value = "all")]
        period: PeriodFilter,
        /// Reference date (YYYY-MM-DD) for period windows; defaults to today.
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// List map markers for the given layers.
    Atlas {
        /// Repeatable: water|pmkisan|population|infrastructure.
        /// Defaults to the water and PM-KISAN layers.
        #[arg(long = "layer")]
        layers: Vec<LayerType>,
    },
    /// Show the digitization timeline.
    Timeline,
    /// Show KPI cards, scheme totals and the monthly series.
    Dashboard,
    /// Resolve a location path to a page.
    Route { path: String },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        if let Err(err) = init_logging(default_log_level().as_str(), log_dir) {
            eprintln!("error: {err}");
            return ExitCode::from(2);
        }
    }

    match run(cli.command, cli.json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands, as_json: bool) -> Result<(), String> {
    let repo = StaticRecordRepository::shared();
    match command {
        Commands::Ping => {
            println!("fra_atlas_core ping={}", fra_atlas_core::ping());
            println!("fra_atlas_core version={}", fra_atlas_core::core_version());
        }
        Commands::Archive {
            search,
            status,
            period,
            today,
        } => {
            let mut view = ArchiveView::new(repo);
            if let Some(today) = today {
                view = view.with_today(today);
            }
            view.set_search_term(search);
            view.set_status(status);
            view.set_period(period);

            let records = view.visible_records();
            if as_json {
                print_json(&records)?;
            } else {
                for record in &records {
                    println!(
                        "{}\t{}\t{}\t{}\t{}",
                        record.id,
                        record.status.as_str(),
                        record.submitted_date,
                        record.formatted_record_count(),
                        record.title
                    );
                }
                let summary = view.summary();
                println!("-- {} of {} record(s)", summary.visible, summary.total);
            }
        }
        Commands::Atlas { layers } => {
            let config = AtlasConfig::from_env().map_err(|err| err.to_string())?;
            let mut view = AtlasView::new(repo, &config.map);
            if !layers.is_empty() {
                for layer in LayerType::ALL {
                    view.set_layer_active(layer, layers.contains(&layer));
                }
            }

            let markers = view.markers();
            if as_json {
                print_json(&json!({
                    "viewport": view.map_viewport(),
                    "map_status": view.map_status(),
                    "active_layers": view.active_layers(),
                    "markers": markers,
                }))?;
            } else {
                for control in view.layer_controls() {
                    let mark = if control.active { "x" } else { " " };
                    println!("[{mark}] {}", control.label);
                }
                for marker in &markers {
                    println!(
                        "{}\t{:.4},{:.4}\t{}",
                        marker.id, marker.position.lat, marker.position.lng, marker.title
                    );
                }
            }
        }
        Commands::Timeline => {
            let view = ArchiveView::new(repo);
            if as_json {
                print_json(&view.timeline())?;
            } else {
                for event in view.timeline() {
                    println!(
                        "{}\t{}\t{}\t{}",
                        event.date,
                        event.status.label(),
                        event.title,
                        event.description
                    );
                }
            }
        }
        Commands::Dashboard => {
            let view = DashboardView::new(repo);
            let totals = view.program_totals();
            if as_json {
                print_json(&json!({
                    "period": view.period(),
                    "kpis": view.kpis(),
                    "programs": view.programs(),
                    "totals": totals,
                    "series": view.chart_series(),
                }))?;
            } else {
                for kpi in view.kpis() {
                    println!("{}\t{:.1}\t{:+.1}", kpi.title, kpi.value, kpi.change);
                }
                println!(
                    "-- {} scheme(s): {} beneficiaries, {} cr budget",
                    view.programs().len(),
                    totals.beneficiaries,
                    totals.budget_cr
                );
            }
        }
        Commands::Route { path } => {
            let route = Route::resolve(&path);
            if as_json {
                print_json(&json!({ "route": route, "title": route.title() }))?;
            } else {
                println!("{}", route.title());
            }
        }
    }
    Ok(())
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<(), String> {
    let rendered = serde_json::to_string_pretty(value).map_err(|err| err.to_string())?;
    println!("{rendered}");
    Ok(())
}
