//! Domain types for the station report.
//!
//! A [`Station`] owns the [`Installation`]s fetched for it. Both are only
//! ever built from fully populated API items, so code holding them can rely
//! on every field being present.

mod ids;
mod installation;
mod station;

pub use ids::{InstallationId, StationId};
pub use installation::Installation;
pub use station::{NO_INSTALLATIONS, Station};
