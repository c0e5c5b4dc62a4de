//! Station report assembly.
//!
//! Lists every station, sorts the list by id, fetches each station's
//! installations in turn and renders the result as plain text.

mod pipeline;
mod source;

pub use pipeline::{Report, ReportError, build_report, render_report, sort_by_id};
pub use source::StationSource;
