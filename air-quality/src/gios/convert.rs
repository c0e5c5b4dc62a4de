//! Conversion from API responses to domain types.
//!
//! Responses are decoded in two steps: the body must be a JSON array (or the
//! call fails), then each element is decoded on its own so that a single
//! incomplete item is skipped instead of failing the whole response.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::domain::{Installation, Station};

use super::error::ApiError;
use super::types::{InstallationDto, StationDto};

/// Longest body excerpt kept in a JSON error.
const BODY_EXCERPT_CHARS: usize = 500;

/// Parse a response body into its top-level array items.
pub(crate) fn parse_items(body: &str) -> Result<Vec<Value>, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Json {
        message: e.to_string(),
        body: Some(body.chars().take(BODY_EXCERPT_CHARS).collect()),
    })
}

/// Convert `findAll` items to stations, keeping server order.
///
/// Items without an integer `id` and a string `stationName` are skipped.
pub(crate) fn convert_stations(items: Vec<Value>) -> Vec<Station> {
    decode_each::<StationDto>(items, "station")
        .map(|dto| Station::new(dto.id, dto.station_name))
        .collect()
}

/// Convert `sensors/<id>` items to installations, keeping server order.
///
/// Items without an integer `id` and a string `param.paramCode` are skipped.
pub(crate) fn convert_installations(items: Vec<Value>) -> Vec<Installation> {
    decode_each::<InstallationDto>(items, "installation")
        .map(|dto| Installation::new(dto.id, dto.param.param_code))
        .collect()
}

fn decode_each<T: DeserializeOwned>(
    items: Vec<Value>,
    kind: &'static str,
) -> impl Iterator<Item = T> {
    items
        .into_iter()
        .enumerate()
        .filter_map(move |(index, item)| match serde_json::from_value(item) {
            Ok(dto) => Some(dto),
            Err(e) => {
                debug!(index, error = %e, "skipping incomplete {kind} item");
                None
            }
        })
}
