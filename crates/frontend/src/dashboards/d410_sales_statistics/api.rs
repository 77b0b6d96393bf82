use async_trait::async_trait;
use contracts::dashboards::d410_sales_statistics::StatisticsSnapshot;
use gloo_net::http::Request;

use super::controller::StatisticsSource;
use super::error::DataSourceError;
use crate::shared::api_utils::api_url;

/// Statistics served by the backend over HTTP
pub struct HttpStatisticsSource {
    url: String,
}

impl HttpStatisticsSource {
    /// `path` is resolved against the API base, e.g. `/api/d410/statistics`
    pub fn new(path: &str) -> Self {
        Self { url: api_url(path) }
    }
}

#[async_trait(?Send)]
impl StatisticsSource for HttpStatisticsSource {
    async fn get_statistics(&self) -> Result<StatisticsSnapshot, DataSourceError> {
        let response = Request::get(&self.url)
            .send()
            .await
            .map_err(|e| DataSourceError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(DataSourceError::Http(response.status()));
        }

        let text = response
            .text()
            .await
            .map_err(|e| DataSourceError::Transport(e.to_string()))?;

        parse_statistics(&text)
    }
}

/// Decode the body of the statistics endpoint
pub fn parse_statistics(body: &str) -> Result<StatisticsSnapshot, DataSourceError> {
    serde_json::from_str(body).map_err(|e| DataSourceError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_statistics() {
        let snapshot = parse_statistics(
            r#"{"today": {"revenue": 1500, "profit": 300, "sales_count": 4}, "low_stock_products": 2}"#,
        )
        .unwrap();
        assert_eq!(snapshot.today.sales_count, 4);
        assert_eq!(snapshot.low_stock_products, 2);
    }

    #[test]
    fn test_parse_statistics_empty_day() {
        let snapshot = parse_statistics(
            r#"{
                "today": {"revenue": null, "profit": null, "sales_count": 0},
                "week": null,
                "top_products": null
            }"#,
        )
        .unwrap();
        assert_eq!(snapshot.today.revenue, 0.0);
        assert_eq!(snapshot.week.sales_count, 0);
        assert!(snapshot.top_products.is_empty());
    }

    #[test]
    fn test_parse_statistics_rejects_garbage() {
        let err = parse_statistics("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, DataSourceError::Parse(_)));
    }

    #[test]
    fn test_parse_statistics_rejects_wrong_types() {
        let err = parse_statistics(r#"{"today": {"revenue": "a lot"}}"#).unwrap_err();
        assert!(matches!(err, DataSourceError::Parse(_)));
    }
}
