use std::time::Duration;
use thiserror::Error;

/// Failure to obtain a statistics snapshot from the data source
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataSourceError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("HTTP error: {0}")]
    Http(u16),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
}
