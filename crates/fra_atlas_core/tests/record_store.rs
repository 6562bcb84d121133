use fra_atlas_core::{
    ArchiveStatus, LayerType, RecordRepository, RepoError, SeedDocument, StaticRecordRepository,
    TimelineStatus, Trend,
};

#[test]
fn seed_records_decode_with_typed_fields() {
    let repo = StaticRecordRepository::from_seed().unwrap();

    let first = &repo.archive_records()[0];
    assert_eq!(first.id, "CLM-2024-001542");
    assert_eq!(first.status, ArchiveStatus::Verified);
    assert_eq!(first.formatted_record_count(), "15,847");
    assert_eq!(first.submitted_date.to_string(), "2024-01-15");

    let second = &repo.timeline_events()[1];
    assert_eq!(second.status, TimelineStatus::InProgress);
    assert_eq!(second.status.label(), "In Progress");

    assert_eq!(repo.locations()[2].layer, LayerType::Population);
    assert_eq!(repo.kpis()[2].trend(), Trend::Down);
    assert_eq!(repo.monthly_series()[2].pmkisan, 9_800);
}

#[test]
fn archive_ids_are_unique() {
    let repo = StaticRecordRepository::from_seed().unwrap();
    let mut ids: Vec<&str> = repo.archive_records().iter().map(|r| r.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), repo.archive_records().len());
}

#[test]
fn duplicate_ids_are_rejected_at_load() {
    let repo = StaticRecordRepository::from_seed().unwrap();
    let mut doc = repo.document().clone();
    let copy = doc.archive_records[0].clone();
    doc.archive_records.push(copy);
    let err = StaticRecordRepository::try_new(doc).unwrap_err();
    assert!(matches!(err, RepoError::DuplicateArchiveId(ref id) if id == "CLM-2024-001542"));

    let mut doc = SeedDocument::default();
    let location = repo.locations()[0].clone();
    doc.locations = vec![location.clone(), location];
    assert!(matches!(
        StaticRecordRepository::try_new(doc),
        Err(RepoError::DuplicateLocationId(_))
    ));
}

#[test]
fn seed_document_round_trips_through_wire_names() {
    let repo = StaticRecordRepository::from_seed().unwrap();
    let json = serde_json::to_value(repo.document()).unwrap();
    assert_eq!(json["archive_records"][1]["status"], "under-review");
    assert_eq!(json["archive_records"][1]["type"], "Documentation");
    assert_eq!(json["locations"][1]["type"], "pmkisan");
}
