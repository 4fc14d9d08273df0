use chrono::{DateTime, Utc};
use serde_json::Value;
use url::form_urlencoded;

use crate::config::Config;
use crate::models::{
    error::AppError,
    query::HistoryQuery,
    reading::{Reading, Readings},
};
use crate::services::cache;

// CONSTANTS
const LATEST_PATH: &str = "api/readings/latest";
const HISTORY_PATH: &str = "api/readings/history";

// API CONFIGURATION
/// Configuration for the readings API client.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins `path` onto the base URL with exactly one `/` between them.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// URL of the latest-reading endpoint.
    pub fn latest_url(&self) -> String {
        self.endpoint(LATEST_PATH)
    }

    /// URL of the history endpoint including the encoded query.
    pub fn history_url(&self, query: &HistoryQuery) -> String {
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(query.params())
            .finish();
        format!("{}?{encoded}", self.endpoint(HISTORY_PATH))
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets the API base URL, e.g. `http://localhost:5000`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self
                .base_url
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| Config::DEFAULT_API_BASE.to_string()),
        }
    }
}

// READINGS CLIENT
/// HTTP client for the PV readings API.
pub struct ReadingsClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ReadingsClient {
    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Fetches the most recent reading.
    pub async fn fetch_latest_reading(&self, now: DateTime<Utc>) -> Result<Reading, AppError> {
        let body = self.get_json(&self.config.latest_url(), now).await?;
        latest_from_json(body)
    }

    /// Fetches readings matching `query`.
    pub async fn fetch_history(
        &self,
        query: &HistoryQuery,
        now: DateTime<Utc>,
    ) -> Result<Readings, AppError> {
        let body = self.get_json(&self.config.history_url(query), now).await?;
        Readings::from_json(body)
    }

    /// GETs `url` as JSON, answering from the response cache while fresh.
    async fn get_json(&self, url: &str, now: DateTime<Utc>) -> Result<Value, AppError> {
        if let Some(hit) = cache::cached(url, now) {
            return Ok(hit);
        }

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Network(format!("Failed to read response body: {e}")))?;

        let value = decode_body(status, &body)?;
        cache::store(url.to_string(), value.clone(), now);
        Ok(value)
    }

    /// Converts a reqwest error into an appropriate `AppError`.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::Network(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::Network(format!("Request error: {error}"))
        } else {
            AppError::Network(format!("Network error: {error}"))
        }
    }
}

/// Checks the status and decodes a response body as JSON.
pub fn decode_body(status: u16, body: &str) -> Result<Value, AppError> {
    if !(200..300).contains(&status) {
        return Err(AppError::Status {
            status,
            body: body.to_string(),
        });
    }

    serde_json::from_str(body).map_err(|e| AppError::Parse(format!("Failed to parse response: {e}")))
}

/// Extracts the `reading` object of a latest-reading response. A missing field is an empty reading.
pub fn latest_from_json(value: Value) -> Result<Reading, AppError> {
    let Value::Object(mut body) = value else {
        return Err(AppError::Parse("Expected a JSON object".to_string()));
    };

    match body.remove("reading") {
        None | Some(Value::Null) => Ok(Reading::default()),
        Some(Value::Object(fields)) => Ok(Reading::from_latest(fields)),
        Some(other) => Err(AppError::Parse(format!(
            "Expected 'reading' to be an object, got {other}"
        ))),
    }
}

// FALLBACK WRAPPERS
/// Data plus the error that forced a fallback, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched<T> {
    pub data: T,
    pub warning: Option<AppError>,
    /// Clock value the fetch was made at
    pub fetched_at: DateTime<Utc>,
}

impl<T: Default> Fetched<T> {
    /// Keeps the data on success, substitutes the empty value on failure.
    pub fn from_result(result: Result<T, AppError>, fetched_at: DateTime<Utc>) -> Self {
        let (data, warning) = match result {
            Ok(data) => (data, None),
            Err(e) => (T::default(), Some(e)),
        };

        Self {
            data,
            warning,
            fetched_at,
        }
    }
}

/// Latest reading from `api_base`; an empty reading plus a warning on any failure.
pub async fn fetch_latest(api_base: &str, now: DateTime<Utc>) -> Fetched<Reading> {
    let config = ApiConfig::builder().base_url(api_base).build();
    let result = match ReadingsClient::with_config(config) {
        Ok(client) => client.fetch_latest_reading(now).await,
        Err(e) => Err(e),
    };
    Fetched::from_result(result, now)
}

/// History from `api_base`; an empty table plus a warning on any failure.
pub async fn fetch_history(
    api_base: &str,
    query: &HistoryQuery,
    now: DateTime<Utc>,
) -> Fetched<Readings> {
    let config = ApiConfig::builder().base_url(api_base).build();
    let result = match ReadingsClient::with_config(config) {
        Ok(client) => client.fetch_history(query, now).await,
        Err(e) => Err(e),
    };
    Fetched::from_result(result, now)
}
