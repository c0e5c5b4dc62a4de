//! Client for the GIOŚ air-quality monitoring REST API.
//!
//! Two endpoints are used:
//! - `GET <base>/findAll` lists every measurement station
//! - `GET <base>/sensors/<stationId>` lists the installations of one station
//!
//! Both return JSON arrays. Items missing a required field are skipped during
//! conversion; a body that is not a JSON array fails the whole call.

mod client;
mod convert;
mod error;
mod types;

pub use client::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, GiosClient};
pub use error::ApiError;
