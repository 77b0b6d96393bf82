//! Renderable view model of the sales statistics dashboard
//!
//! Built from a snapshot and the period selection by
//! [`build_view_model`](super::metrics::build_view_model). It is disposable:
//! renderers rebuild it whenever the snapshot or the selection changes.

use contracts::enums::ReportPeriod;
use contracts::shared::indicators::{IndicatorChange, IndicatorId, IndicatorStatus};

/// One stat card
#[derive(Debug, Clone, PartialEq)]
pub struct Kpi {
    pub id: IndicatorId,
    pub label: &'static str,
    /// Icon name understood by `shared::icons::icon`
    pub icon: &'static str,
    pub value: String,
    pub status: IndicatorStatus,
    /// `None` when there is nothing to compare against
    pub change: Option<IndicatorChange>,
}

/// Revenue, sales and profit of one reporting window
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodSummary {
    pub period: ReportPeriod,
    pub title: String,
    pub revenue: String,
    /// e.g. "12 ta sotuv"
    pub sales_caption: String,
    pub profit: String,
    pub profit_margin: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Revenue,
    Profit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartValue {
    pub label: String,
    pub value: f64,
}

/// Series handed to the chart renderer
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDataset {
    pub kind: ChartKind,
    pub title: String,
    pub points: Vec<ChartValue>,
}

/// Row of the best sellers list
#[derive(Debug, Clone, PartialEq)]
pub struct RankedProduct {
    /// 1-based position in the list received from the server
    pub rank: usize,
    pub name: String,
    pub units_sold: u64,
    pub revenue: String,
    pub profit: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    /// Period the charts were selected for
    pub period: ReportPeriod,
    pub main_kpis: Vec<Kpi>,
    pub business_kpis: Vec<Kpi>,
    /// Week, month and year, in that order
    pub period_summaries: Vec<PeriodSummary>,
    /// Revenue then profit
    pub charts: Vec<ChartDataset>,
    pub top_products: Vec<RankedProduct>,
    /// Set when `top_products` is empty, shown instead of the table
    pub top_products_empty_message: Option<&'static str>,
}
