use serde::{Deserialize, Serialize};

/// Reporting window of the sales statistics dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl ReportPeriod {
    /// Wire code, also used as the chart series key
    pub fn code(&self) -> &'static str {
        match self {
            ReportPeriod::Weekly => "weekly",
            ReportPeriod::Monthly => "monthly",
            ReportPeriod::Yearly => "yearly",
        }
    }

    /// Human readable label shown in the period picker
    pub fn display_name(&self) -> &'static str {
        match self {
            ReportPeriod::Weekly => "Haftalik",
            ReportPeriod::Monthly => "Oylik",
            ReportPeriod::Yearly => "Yillik",
        }
    }

    /// All periods in picker order
    pub fn all() -> [ReportPeriod; 3] {
        [
            ReportPeriod::Weekly,
            ReportPeriod::Monthly,
            ReportPeriod::Yearly,
        ]
    }
}

impl std::fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
