//! Measurement stations and their text rendering.

use std::fmt;

use super::{Installation, StationId};

/// Line rendered in place of installations when a station has none.
pub const NO_INSTALLATIONS: &str = "No installations found";

/// A monitoring location together with the installations fetched for it.
///
/// Stations start out with no installations; the report pipeline fills them
/// in once, after the station list has been sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    id: StationId,
    name: String,
    installations: Vec<Installation>,
}

impl Station {
    /// Create a station with an empty installation list.
    pub fn new(id: StationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            installations: Vec::new(),
        }
    }

    pub fn id(&self) -> StationId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn installations(&self) -> &[Installation] {
        &self.installations
    }

    /// Replace the installation list with freshly fetched data.
    pub fn set_installations(&mut self, installations: Vec<Installation>) {
        self.installations = installations;
    }

    /// Builder-style variant of [`Station::set_installations`].
    pub fn with_installations(mut self, installations: Vec<Installation>) -> Self {
        self.installations = installations;
        self
    }
}

/// Renders a header line `Station #<id> (<name>):` followed by one line per
/// installation, or [`NO_INSTALLATIONS`] when the list is empty. No trailing
/// newline is written.
impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station #{} ({}):", self.id, self.name)?;

        if self.installations.is_empty() {
            return write!(f, "\n{NO_INSTALLATIONS}");
        }

        for installation in &self.installations {
            write!(f, "\n{installation}")?;
        }
        Ok(())
    }
}
