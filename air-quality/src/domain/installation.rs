//! Sensor installations attached to a station.

use std::fmt;

use super::InstallationId;

/// A sensor at a station measuring one parameter (e.g. `PM10`, `NO2`).
///
/// Only built from a fully populated API item, and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Installation {
    id: InstallationId,
    param_code: String,
}

impl Installation {
    pub fn new(id: InstallationId, param_code: impl Into<String>) -> Self {
        Self {
            id,
            param_code: param_code.into(),
        }
    }

    pub fn id(&self) -> InstallationId {
        self.id
    }

    /// Short code of the measured parameter.
    pub fn param_code(&self) -> &str {
        &self.param_code
    }
}

/// Renders as `Installation: #<id>: '<paramCode>'`.
impl fmt::Display for Installation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Installation: #{}: '{}'", self.id, self.param_code)
    }
}
