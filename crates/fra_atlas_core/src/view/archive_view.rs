//! Archive page controller: search/status/period filters over the record table.
//!
//! # Invariants
//! - `visible_records()` is recomputed from the repository on every call.
//! - The reference date is the local date unless pinned with `with_today`.

use crate::filter::archive_filter::{
    filter_archive_records, ArchiveFilter, PeriodFilter, StatusFilter,
};
use crate::model::archive::ArchiveRecord;
use crate::model::timeline::TimelineEvent;
use crate::repo::record_repo::RecordRepository;
use crate::view::listeners::{ListenerId, ViewListeners};
use chrono::{Local, NaiveDate};
use log::debug;

/// Change notification emitted by [`ArchiveView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchiveViewEvent {
    SearchChanged(String),
    StatusChanged(StatusFilter),
    PeriodChanged(PeriodFilter),
    FiltersReset,
}

/// Record counts shown above the archive table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveSummary {
    pub total: usize,
    pub visible: usize,
}

pub struct ArchiveView<R: RecordRepository> {
    repo: R,
    filter: ArchiveFilter,
    today: Option<NaiveDate>,
    revision: u64,
    listeners: ViewListeners<ArchiveViewEvent>,
}

impl<R: RecordRepository> ArchiveView<R> {
    /// Opens the page with all filters set to `all` and an empty search.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            filter: ArchiveFilter::default(),
            today: None,
            revision: 0,
            listeners: ViewListeners::new(),
        }
    }

    /// Pins the reference date used by period filters.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn filter(&self) -> &ArchiveFilter {
        &self.filter
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&ArchiveViewEvent) + 'static) -> ListenerId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        if self.filter.search_term == term {
            return;
        }
        self.filter.search_term = term.clone();
        self.commit(ArchiveViewEvent::SearchChanged(term));
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        if self.filter.status == status {
            return;
        }
        self.filter.status = status;
        self.commit(ArchiveViewEvent::StatusChanged(status));
    }

    pub fn set_period(&mut self, period: PeriodFilter) {
        if self.filter.period == period {
            return;
        }
        self.filter.period = period;
        self.commit(ArchiveViewEvent::PeriodChanged(period));
    }

    pub fn reset_filters(&mut self) {
        if self.filter.is_unconstrained() {
            return;
        }
        self.filter = ArchiveFilter::default();
        self.commit(ArchiveViewEvent::FiltersReset);
    }

    /// Archive rows passing the current filter, in repository order.
    pub fn visible_records(&self) -> Vec<&ArchiveRecord> {
        let records = self.repo.archive_records();
        let visible = filter_archive_records(records, &self.filter, self.today());
        debug!(
            "event=archive_filter module=view status=ok total={} visible={} status_filter={} period={}",
            records.len(),
            visible.len(),
            self.filter.status.as_str(),
            self.filter.period.as_str()
        );
        visible
    }

    pub fn timeline(&self) -> &[TimelineEvent] {
        self.repo.timeline_events()
    }

    pub fn summary(&self) -> ArchiveSummary {
        ArchiveSummary {
            total: self.repo.archive_records().len(),
            visible: self.visible_records().len(),
        }
    }

    /// Releases listeners; filter state is dropped with the controller.
    pub fn unmount(&mut self) {
        self.listeners.clear();
    }

    fn commit(&mut self, event: ArchiveViewEvent) {
        self.revision += 1;
        self.listeners.notify(&event);
    }
}
