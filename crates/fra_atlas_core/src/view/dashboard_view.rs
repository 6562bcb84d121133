//! Decision-support dashboard controller.

use crate::filter::token::FilterParseError;
use crate::model::dashboard::{KpiMetric, MonthlyPoint, ProgramStat};
use crate::repo::record_repo::RecordRepository;
use crate::view::listeners::{ListenerId, ViewListeners};
use serde::Serialize;
use std::str::FromStr;

/// Aggregation period picked in the dashboard header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DashboardPeriod {
    Monthly,
    #[default]
    Quarterly,
    Yearly,
}

impl DashboardPeriod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Yearly => "yearly",
        }
    }
}

impl FromStr for DashboardPeriod {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" => Ok(Self::Monthly),
            "quarterly" => Ok(Self::Quarterly),
            "yearly" => Ok(Self::Yearly),
            _ => Err(FilterParseError::new("dashboard period", s)),
        }
    }
}

/// Sums across all tracked schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgramTotals {
    pub beneficiaries: u64,
    pub budget_cr: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardEvent {
    PeriodChanged(DashboardPeriod),
}

pub struct DashboardView<R: RecordRepository> {
    repo: R,
    period: DashboardPeriod,
    revision: u64,
    listeners: ViewListeners<DashboardEvent>,
}

impl<R: RecordRepository> DashboardView<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            period: DashboardPeriod::default(),
            revision: 0,
            listeners: ViewListeners::new(),
        }
    }

    pub fn period(&self) -> DashboardPeriod {
        self.period
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&DashboardEvent) + 'static) -> ListenerId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn set_period(&mut self, period: DashboardPeriod) {
        if self.period == period {
            return;
        }
        self.period = period;
        self.revision += 1;
        self.listeners.notify(&DashboardEvent::PeriodChanged(period));
    }

    pub fn kpis(&self) -> &[KpiMetric] {
        self.repo.kpis()
    }

    /// Month-indexed series fed to the line and bar charts.
    pub fn chart_series(&self) -> &[MonthlyPoint] {
        self.repo.monthly_series()
    }

    pub fn programs(&self) -> &[ProgramStat] {
        self.repo.programs()
    }

    pub fn program_totals(&self) -> ProgramTotals {
        self.repo
            .programs()
            .iter()
            .fold(ProgramTotals { beneficiaries: 0, budget_cr: 0 }, |acc, program| {
                ProgramTotals {
                    beneficiaries: acc.beneficiaries.saturating_add(program.beneficiaries),
                    budget_cr: acc.budget_cr.saturating_add(u64::from(program.budget_cr)),
                }
            })
    }

    pub fn unmount(&mut self) {
        self.listeners.clear();
    }
}
