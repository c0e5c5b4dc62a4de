//! API client error types.

use crate::domain::StationId;

/// Errors that can occur when querying the monitoring API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Transport failure: connection refused, DNS, timeout, etc.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered 429
    #[error("too many requests (HTTP 429)")]
    RateLimited,

    /// The API answered with any other non-success status
    #[error("unexpected HTTP status {status}{}", station_suffix(.station_id))]
    Status {
        status: u16,
        station_id: Option<StationId>,
    },

    /// The body was not a JSON array
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },
}

fn station_suffix(station_id: &Option<StationId>) -> String {
    match station_id {
        Some(id) => format!(" for station #{id}"),
        None => String::new(),
    }
}
