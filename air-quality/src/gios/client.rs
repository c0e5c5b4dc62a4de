//! Monitoring API HTTP client.
//!
//! Each call is a single GET with a fixed timeout. Nothing is retried,
//! including rate-limited (429) responses.

use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use crate::domain::{Installation, Station, StationId};

use super::convert::{convert_installations, convert_stations, parse_items};
use super::error::ApiError;

/// Default base URL for the station endpoints.
pub const DEFAULT_BASE_URL: &str = "https://api.gios.gov.pl/pjp-api/rest/station";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Configuration for the API client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Create a config pointing at the public API.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the station and sensor endpoints.
#[derive(Debug, Clone)]
pub struct GiosClient {
    http: reqwest::Client,
    base_url: String,
}

impl GiosClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL with any trailing slash removed.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn stations_url(&self) -> String {
        format!("{}/findAll", self.base_url)
    }

    fn installations_url(&self, station_id: StationId) -> String {
        format!("{}/sensors/{}", self.base_url, station_id)
    }

    /// Fetch every station, in the order the server lists them.
    pub async fn list_stations(&self) -> Result<Vec<Station>, ApiError> {
        let items = self.get_items(&self.stations_url(), None).await?;
        let total = items.len();
        let stations = convert_stations(items);

        debug!(total, kept = stations.len(), "fetched station list");
        Ok(stations)
    }

    /// Fetch the installations of one station, in server order.
    pub async fn list_installations(
        &self,
        station_id: StationId,
    ) -> Result<Vec<Installation>, ApiError> {
        let items = self
            .get_items(&self.installations_url(station_id), Some(station_id))
            .await?;
        let total = items.len();
        let installations = convert_installations(items);

        debug!(%station_id, total, kept = installations.len(), "fetched installations");
        Ok(installations)
    }

    /// GET `url` and return the items of the top-level JSON array.
    async fn get_items(
        &self,
        url: &str,
        station_id: Option<StationId>,
    ) -> Result<Vec<Value>, ApiError> {
        debug!(url, "GET");
        let response = self.http.get(url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ApiError::RateLimited);
        }

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                station_id,
            });
        }

        let body = response.text().await?;
        parse_items(&body)
    }
}
