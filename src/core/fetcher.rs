use crate::core::{ConfigProvider, DataSet, Fetcher, UserRecord};
use crate::utils::error::{DashboardError, Result};
use reqwest::header::ACCEPT;
use reqwest::Client;
use url::Url;

/// Fixed path the dashboard reads its user data from.
pub const DATA_ENDPOINT: &str = "/api/data";

pub struct HttpFetcher<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> HttpFetcher<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// base_url 加上固定路徑。base_url 自帶的路徑前綴會被替換掉。
    pub fn endpoint_url(&self) -> Result<Url> {
        let base = Url::parse(self.config.base_url()).map_err(|e| {
            DashboardError::InvalidConfigValueError {
                field: "base_url".to_string(),
                value: self.config.base_url().to_string(),
                reason: format!("Invalid URL format: {}", e),
            }
        })?;

        base.join(DATA_ENDPOINT)
            .map_err(|e| DashboardError::InvalidConfigValueError {
                field: "base_url".to_string(),
                value: self.config.base_url().to_string(),
                reason: format!("Cannot join {}: {}", DATA_ENDPOINT, e),
            })
    }
}

/// 將回應內容解析成 DataSet，只接受 JSON 陣列。
pub fn parse_data_set(body: &str) -> Result<DataSet> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| DashboardError::parse_failed(e))?;

    match value {
        serde_json::Value::Array(items) => Ok(items.into_iter().map(UserRecord::new).collect()),
        other => Err(DashboardError::parse_failed(format!(
            "expected a JSON array, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> Fetcher for HttpFetcher<C> {
    async fn fetch(&self) -> Result<DataSet> {
        let url = self.endpoint_url()?;

        tracing::debug!("Making API request to: {}", url);
        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| DashboardError::fetch_failed(url.as_str(), e))?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(DashboardError::fetch_failed(
                url.as_str(),
                format!("server responded with status {}", status),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DashboardError::fetch_failed(url.as_str(), e))?;

        parse_data_set(&body)
    }
}
