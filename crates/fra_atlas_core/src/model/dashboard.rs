//! Decision-support dashboard figures: scheme stats, KPIs and the chart series.

use serde::{Deserialize, Serialize};

/// Beneficiary and budget figures for one government scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramStat {
    pub id: String,
    pub name: String,
    pub beneficiaries: u64,
    /// Budget in crores of rupees.
    pub budget_cr: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Trend {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiMetric {
    pub title: String,
    /// Score in percent.
    pub value: f64,
    /// Change versus the previous period, in percentage points.
    pub change: f64,
}

impl KpiMetric {
    pub fn trend(&self) -> Trend {
        if self.change >= 0.0 {
            Trend::Up
        } else {
            Trend::Down
        }
    }
}

/// One month of the static chart series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    pub month: String,
    pub pmkisan: u32,
    pub water: u32,
    pub infrastructure: u32,
}
