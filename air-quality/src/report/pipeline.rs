//! The fetch → sort → enrich → render pipeline.

use std::fmt;

use tracing::{info, warn};

use crate::domain::{Station, StationId};
use crate::gios::ApiError;

use super::source::StationSource;

/// Error that stops a report from being built.
///
/// Only the station listing is fatal. Installation failures are absorbed
/// per station and recorded in [`Report::failed_stations`].
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The station list could not be fetched
    #[error("failed to list stations: {0}")]
    Stations(#[source] ApiError),
}

/// Stations sorted by id, each carrying its fetched installations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    stations: Vec<Station>,
    failed: Vec<StationId>,
}

impl Report {
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Stations whose installation fetch failed, in report order.
    ///
    /// These stations are still part of the report, with no installations.
    pub fn failed_stations(&self) -> &[StationId] {
        &self.failed
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_report(&self.stations))
    }
}

/// Sort stations by id, ascending.
///
/// The sort is stable: stations sharing an id keep their original order.
pub fn sort_by_id(stations: &mut [Station]) {
    stations.sort_by_key(Station::id);
}

/// Render station blocks separated by a single blank line.
pub fn render_report(stations: &[Station]) -> String {
    stations
        .iter()
        .map(Station::to_string)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Build the full report from `source`.
///
/// Installations are fetched one station at a time, in id order. A failed
/// installation fetch is logged and leaves that station empty; the
/// remaining stations are still fetched.
pub async fn build_report<S: StationSource>(source: &S) -> Result<Report, ReportError> {
    let mut stations = source.list_stations().await.map_err(ReportError::Stations)?;
    sort_by_id(&mut stations);
    info!(count = stations.len(), "fetched stations");

    let mut failed = Vec::new();

    for station in &mut stations {
        match source.list_installations(station.id()).await {
            Ok(installations) => station.set_installations(installations),
            Err(e) => {
                warn!(
                    station_id = %station.id(),
                    error = %e,
                    "failed to fetch installations for station #{}",
                    station.id()
                );
                failed.push(station.id());
            }
        }
    }

    info!(
        stations = stations.len(),
        failed = failed.len(),
        "report assembled"
    );

    Ok(Report { stations, failed })
}
