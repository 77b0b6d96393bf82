pub mod dashboard;
pub mod period_picker;

pub use dashboard::SalesStatisticsDashboard;
