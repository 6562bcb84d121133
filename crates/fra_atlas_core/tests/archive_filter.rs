use chrono::NaiveDate;
use fra_atlas_core::{
    filter_archive_records, matches_archive_record, ArchiveFilter, ArchiveRecord, ArchiveStatus,
    PeriodFilter, Priority, RecordRepository, StaticRecordRepository, StatusFilter,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn record(id: &str, status: ArchiveStatus, submitted: NaiveDate, by: &str) -> ArchiveRecord {
    ArchiveRecord {
        id: id.to_string(),
        title: format!("Batch {id}"),
        record_type: "Claim Verification".to_string(),
        status,
        submitted_by: by.to_string(),
        submitted_date: submitted,
        last_updated: submitted,
        priority: Priority::Medium,
        record_count: 10,
    }
}

fn ids(records: &[&ArchiveRecord]) -> Vec<String> {
    records.iter().map(|r| r.id.clone()).collect()
}

#[test]
fn unconstrained_filter_returns_full_sequence_in_order() {
    let repo = StaticRecordRepository::from_seed().unwrap();
    let records = repo.archive_records();
    let filter = ArchiveFilter::default();
    assert!(filter.is_unconstrained());

    let visible = filter_archive_records(records, &filter, date(2024, 6, 1));
    let expected: Vec<&ArchiveRecord> = records.iter().collect();
    assert_eq!(visible, expected);
}

#[test]
fn status_filter_scenario_keeps_only_verified() {
    let records = vec![
        record("CLM-001", ArchiveStatus::Verified, date(2024, 1, 15), "X"),
        record("CLM-002", ArchiveStatus::Pending, date(2024, 1, 20), "Y"),
    ];
    let filter = ArchiveFilter {
        status: StatusFilter::Only(ArchiveStatus::Verified),
        ..ArchiveFilter::default()
    };

    let visible = filter_archive_records(&records, &filter, date(2024, 1, 31));
    assert_eq!(ids(&visible), vec!["CLM-001"]);
}

#[test]
fn search_matches_id_title_or_submitter_case_insensitively() {
    let repo = StaticRecordRepository::from_seed().unwrap();
    let today = date(2024, 2, 1);
    let search = |term: &str| {
        let filter = ArchiveFilter {
            search_term: term.to_string(),
            ..ArchiveFilter::default()
        };
        ids(&filter_archive_records(repo.archive_records(), &filter, today))
    };

    assert_eq!(search("clm-2024-001543"), vec!["CLM-2024-001543"]);
    assert_eq!(search("WATER RIGHTS"), vec!["CLM-2024-001543"]);
    assert_eq!(search("lucknow"), vec!["CLM-2024-001542"]);
    assert_eq!(search("department").len(), 1);
    assert!(search("no such claim").is_empty());
}

#[test]
fn id_substring_always_satisfies_search() {
    let repo = StaticRecordRepository::from_seed().unwrap();
    let today = date(2024, 2, 1);
    for record in repo.archive_records() {
        for (start, end) in [(0, 3), (4, 8), (0, record.id.len())] {
            let filter = ArchiveFilter {
                search_term: record.id[start..end].to_ascii_lowercase(),
                ..ArchiveFilter::default()
            };
            assert!(
                matches_archive_record(record, &filter, today),
                "{} should match `{}`",
                record.id,
                filter.search_term
            );
        }
    }
}

#[test]
fn filtering_is_idempotent() {
    let repo = StaticRecordRepository::from_seed().unwrap();
    let today = date(2024, 1, 30);
    let filters = [
        ArchiveFilter::default(),
        ArchiveFilter {
            search_term: "dep".to_string(),
            status: StatusFilter::Only(ArchiveStatus::Verified),
            period: PeriodFilter::LastWeek,
        },
        ArchiveFilter {
            search_term: String::new(),
            status: StatusFilter::All,
            period: PeriodFilter::LastMonth,
        },
    ];

    for filter in &filters {
        let once = filter_archive_records(repo.archive_records(), filter, today);
        let twice = filter_archive_records(once.iter().copied(), filter, today);
        assert_eq!(once, twice);
    }
}

#[test]
fn period_filters_apply_relative_to_today() {
    let repo = StaticRecordRepository::from_seed().unwrap();
    let today = date(2024, 1, 29);
    let by_period = |period: PeriodFilter| {
        let filter = ArchiveFilter {
            period,
            ..ArchiveFilter::default()
        };
        ids(&filter_archive_records(repo.archive_records(), &filter, today))
    };

    assert_eq!(
        by_period(PeriodFilter::LastWeek),
        vec!["CLM-2024-001544", "CLM-2024-001545"]
    );
    assert_eq!(by_period(PeriodFilter::LastMonth).len(), 4);
    assert_eq!(by_period(PeriodFilter::LastQuarter).len(), 4);
    assert!(filter_archive_records(
        repo.archive_records(),
        &ArchiveFilter {
            period: PeriodFilter::LastMonth,
            ..ArchiveFilter::default()
        },
        date(2024, 6, 1)
    )
    .is_empty());
}

#[test]
fn predicates_are_anded() {
    let repo = StaticRecordRepository::from_seed().unwrap();
    let filter = ArchiveFilter {
        search_term: "water".to_string(),
        status: StatusFilter::Only(ArchiveStatus::Verified),
        period: PeriodFilter::All,
    };
    assert!(filter_archive_records(repo.archive_records(), &filter, date(2024, 2, 1)).is_empty());
}

#[test]
fn filtering_leaves_store_untouched() {
    let repo = StaticRecordRepository::from_seed().unwrap();
    let before = repo.archive_records().to_vec();
    let filter = ArchiveFilter {
        search_term: "clm".to_string(),
        status: StatusFilter::Only(ArchiveStatus::Pending),
        period: PeriodFilter::LastQuarter,
    };
    let _ = filter_archive_records(repo.archive_records(), &filter, date(2024, 2, 1));
    assert_eq!(repo.archive_records(), before.as_slice());
}
