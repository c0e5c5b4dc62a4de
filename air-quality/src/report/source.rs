//! Abstraction over where station data comes from.

use crate::domain::{Installation, Station, StationId};
use crate::gios::{ApiError, GiosClient};

/// Trait for providing stations and their installations.
///
/// This abstraction allows the report pipeline to be tested with mock data.
#[allow(async_fn_in_trait)]
pub trait StationSource {
    /// List every station, in source order.
    async fn list_stations(&self) -> Result<Vec<Station>, ApiError>;

    /// List the installations of one station, in source order.
    async fn list_installations(
        &self,
        station_id: StationId,
    ) -> Result<Vec<Installation>, ApiError>;
}

impl StationSource for GiosClient {
    async fn list_stations(&self) -> Result<Vec<Station>, ApiError> {
        GiosClient::list_stations(self).await
    }

    async fn list_installations(
        &self,
        station_id: StationId,
    ) -> Result<Vec<Installation>, ApiError> {
        GiosClient::list_installations(self, station_id).await
    }
}
