use chrono::NaiveDate;
use fra_atlas_core::{
    ArchiveStatus, ArchiveView, ArchiveViewEvent, AtlasView, AtlasViewEvent, LayerType,
    MapConfig, MapStatus, PeriodFilter, Route, ShellEvent, ShellState, StaticRecordRepository,
    StatusFilter,
};
use std::cell::RefCell;
use std::rc::Rc;

fn seed() -> StaticRecordRepository {
    StaticRecordRepository::from_seed().unwrap()
}

fn keyed_map() -> MapConfig {
    MapConfig {
        api_key: Some("test-key".to_string()),
        ..MapConfig::default()
    }
}

#[test]
fn archive_view_recomputes_rows_after_each_update() {
    let repo = seed();
    let today = NaiveDate::from_ymd_opt(2024, 1, 29).unwrap();
    let mut view = ArchiveView::new(&repo).with_today(today);
    assert_eq!(view.visible_records().len(), 4);

    view.set_status(StatusFilter::Only(ArchiveStatus::Verified));
    assert_eq!(view.visible_records().len(), 2);

    view.set_period(PeriodFilter::LastWeek);
    let ids: Vec<&str> = view.visible_records().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["CLM-2024-001545"]);

    view.set_search_term("lucknow");
    assert!(view.visible_records().is_empty());

    let summary = view.summary();
    assert_eq!(summary.total, 4);
    assert_eq!(summary.visible, 0);

    view.reset_filters();
    assert!(view.filter().is_unconstrained());
    assert_eq!(view.visible_records().len(), 4);
    assert_eq!(view.timeline().len(), 4);
}

#[test]
fn archive_view_emits_only_effective_changes() {
    let repo = seed();
    let mut view = ArchiveView::new(&repo);
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    view.subscribe(move |event| sink.borrow_mut().push(event.clone()));

    view.set_search_term("");
    view.set_status(StatusFilter::All);
    view.reset_filters();
    assert!(events.borrow().is_empty());
    assert_eq!(view.revision(), 0);

    view.set_search_term("water");
    view.set_search_term("water");
    view.set_period(PeriodFilter::LastQuarter);
    view.reset_filters();

    assert_eq!(
        *events.borrow(),
        vec![
            ArchiveViewEvent::SearchChanged("water".to_string()),
            ArchiveViewEvent::PeriodChanged(PeriodFilter::LastQuarter),
            ArchiveViewEvent::FiltersReset,
        ]
    );
    assert_eq!(view.revision(), 3);
}

#[test]
fn unmount_releases_listeners() {
    let repo = seed();
    let mut view = ArchiveView::new(&repo);
    let hits = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&hits);
    view.subscribe(move |_| *counter.borrow_mut() += 1);
    assert_eq!(view.listener_count(), 1);

    view.unmount();
    assert_eq!(view.listener_count(), 0);
    view.set_search_term("after unmount");
    assert_eq!(*hits.borrow(), 0);
}

#[test]
fn atlas_view_starts_with_water_and_pmkisan() {
    let repo = seed();
    let view = AtlasView::new(&repo, &keyed_map());

    let controls = view.layer_controls();
    let active: Vec<LayerType> = controls.iter().filter(|c| c.active).map(|c| c.layer).collect();
    assert_eq!(active, vec![LayerType::Water, LayerType::Pmkisan]);
    assert_eq!(controls[2].label, "Population Density");
    assert_eq!(view.markers().len(), 4);

    let viewport = view.map_viewport();
    assert_eq!(viewport.zoom, 5);
    assert_eq!(viewport.center.lat, 20.5937);
}

#[test]
fn atlas_toggle_updates_markers_and_is_reversible() {
    let repo = seed();
    let mut view = AtlasView::new(&repo, &keyed_map());
    let before = view.active_layers().clone();

    assert!(!view.toggle_layer(LayerType::Pmkisan));
    let markers = view.markers();
    assert_eq!(markers.len(), 2);
    assert!(markers.iter().all(|m| m.layer == LayerType::Water));
    assert_eq!(markers[0].title, "Yamuna Barrage");

    view.toggle_layer(LayerType::Pmkisan);
    assert_eq!(view.active_layers(), &before);
}

#[test]
fn atlas_with_no_layers_shows_everything() {
    let repo = seed();
    let mut view = AtlasView::new(&repo, &keyed_map());
    view.set_layer_active(LayerType::Water, false);
    view.set_layer_active(LayerType::Pmkisan, false);
    assert!(view.active_layers().is_empty());
    assert_eq!(view.visible_locations().len(), 6);
}

#[test]
fn map_status_tracks_provider_loading() {
    let repo = seed();
    let mut view = AtlasView::new(&repo, &keyed_map());
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    view.subscribe(move |event| sink.borrow_mut().push(event.clone()));

    assert_eq!(view.map_status(), MapStatus::Loading);
    assert!(view.mark_map_loaded());
    assert!(!view.mark_map_loaded());
    assert_eq!(view.map_status(), MapStatus::Ready);
    assert_eq!(
        *events.borrow(),
        vec![AtlasViewEvent::MapStatusChanged(MapStatus::Ready)]
    );

    let mut keyless = AtlasView::new(&repo, &MapConfig::default());
    assert_eq!(keyless.map_status(), MapStatus::MissingCredential);
    assert!(!keyless.mark_map_loaded());
}

#[test]
fn shell_routes_and_toggles() {
    let mut shell = ShellState::default();
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    shell.subscribe(move |event| sink.borrow_mut().push(*event));

    assert_eq!(shell.route(), Route::Atlas);
    assert!(shell.dark_mode());
    assert!(shell.notification().is_some());

    assert_eq!(shell.navigate("/archive"), Route::Archive);
    assert_eq!(shell.navigate("/archive/"), Route::Archive);
    assert_eq!(shell.navigate("/missing"), Route::NotFound);
    assert!(!shell.toggle_theme());
    shell.dismiss_notification();
    shell.dismiss_notification();
    assert!(shell.notification().is_none());
    assert!(shell.toggle_dock());

    assert_eq!(
        *events.borrow(),
        vec![
            ShellEvent::RouteChanged(Route::Archive),
            ShellEvent::RouteChanged(Route::NotFound),
            ShellEvent::ThemeChanged { dark_mode: false },
            ShellEvent::NotificationDismissed,
            ShellEvent::DockToggled { expanded: true },
        ]
    );
}
