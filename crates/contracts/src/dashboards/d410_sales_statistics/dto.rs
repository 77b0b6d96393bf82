use serde::{Deserialize, Deserializer, Serialize};

use crate::enums::report_period::ReportPeriod;

/// Response of the sales statistics endpoint
///
/// Every part is optional on the wire: missing figures read as zero and
/// missing lists read as empty, so a partially filled payload still parses.
/// An explicit `null` is treated the same as a missing key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatisticsSnapshot {
    #[serde(deserialize_with = "null_as_default")]
    pub today: PeriodFigures,
    /// Figures of the previous day, used for change indicators when present
    pub yesterday: Option<PeriodFigures>,
    #[serde(deserialize_with = "null_as_default")]
    pub week: PeriodFigures,
    #[serde(deserialize_with = "null_as_default")]
    pub month: PeriodFigures,
    #[serde(deserialize_with = "null_as_default")]
    pub year: PeriodFigures,
    #[serde(deserialize_with = "null_as_default")]
    pub totals: BusinessTotals,
    #[serde(deserialize_with = "null_as_default")]
    pub low_stock_products: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub charts: ChartSeriesSet,
    /// Pre-ranked by the producer, order is authoritative
    #[serde(deserialize_with = "null_as_default")]
    pub top_products: Vec<TopProductEntry>,
}

/// Aggregated sales figures for one window
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodFigures {
    #[serde(deserialize_with = "null_as_default")]
    pub revenue: f64,
    /// Negative on loss
    #[serde(deserialize_with = "null_as_default")]
    pub profit: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub sales_count: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessTotals {
    #[serde(deserialize_with = "null_as_default")]
    pub customers: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub products: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub suppliers: u64,
}

/// Chart series for each reporting window
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSeriesSet {
    #[serde(deserialize_with = "null_as_default")]
    pub weekly: Vec<ChartPoint>,
    #[serde(deserialize_with = "null_as_default")]
    pub monthly: Vec<ChartPoint>,
    #[serde(deserialize_with = "null_as_default")]
    pub yearly: Vec<ChartPoint>,
}

impl ChartSeriesSet {
    pub fn series(&self, period: ReportPeriod) -> &[ChartPoint] {
        match period {
            ReportPeriod::Weekly => &self.weekly,
            ReportPeriod::Monthly => &self.monthly,
            ReportPeriod::Yearly => &self.yearly,
        }
    }
}

/// One time bucket of a chart series
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartPoint {
    /// Bucket label (day, week or month), as produced by the server
    #[serde(alias = "date", alias = "period")]
    #[serde(deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(deserialize_with = "null_as_default")]
    pub revenue: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub profit: f64,
}

/// Single row of the best sellers list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopProductEntry {
    #[serde(rename = "product__name", alias = "name")]
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub total_sold: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_revenue: f64,
    pub total_profit: Option<f64>,
}

/// `null` on the wire reads as the default value (zero, empty)
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
