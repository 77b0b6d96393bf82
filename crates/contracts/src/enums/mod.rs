pub mod report_period;

pub use report_period::ReportPeriod;
