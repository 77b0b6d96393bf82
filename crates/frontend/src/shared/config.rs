use serde::Deserialize;
use std::time::Duration;

use crate::shared::number_format::{NumberLocale, DEFAULT_CURRENCY_LABEL, DEFAULT_GROUP_SEPARATOR};

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DashboardConfig {
    /// API path of the statistics endpoint, resolved against `api_base()`
    pub statistics_path: String,
    /// Upper bound for one statistics request
    pub load_timeout_ms: u64,
    pub currency_label: String,
    pub group_separator: char,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[dashboard]
statistics_path = "/api/d410/statistics"
load_timeout_ms = 15000
currency_label = "so'm"
group_separator = "\u00A0"
"#;

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            statistics_path: "/api/d410/statistics".to_string(),
            load_timeout_ms: 15_000,
            currency_label: DEFAULT_CURRENCY_LABEL.to_string(),
            group_separator: DEFAULT_GROUP_SEPARATOR,
        }
    }
}

impl DashboardConfig {
    pub fn load_timeout(&self) -> Duration {
        Duration::from_millis(self.load_timeout_ms)
    }

    pub fn number_locale(&self) -> NumberLocale {
        NumberLocale::new(self.group_separator, self.currency_label.clone())
    }
}

/// Parse a configuration document, e.g. one served next to the bundle
pub fn parse_config(contents: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(contents)
}

/// Load the embedded default configuration
pub fn load_config() -> Result<Config, toml::de::Error> {
    log::debug!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}
