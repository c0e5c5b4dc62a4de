//! Air-quality station report.
//!
//! Fetches the list of monitoring stations from the GIOŚ REST API, then the
//! sensor installations of each station, and renders the merged result as
//! plain text.

pub mod config;
pub mod domain;
pub mod gios;
pub mod report;
