//! Runtime configuration from environment variables.
//!
//! | Variable                   | Default                                         |
//! |----------------------------|-------------------------------------------------|
//! | `AIR_QUALITY_BASE_URL`     | `https://api.gios.gov.pl/pjp-api/rest/station`  |
//! | `AIR_QUALITY_TIMEOUT_SECS` | `30`                                            |

use crate::gios::ClientConfig;

/// Overrides the API base URL.
pub const BASE_URL_VAR: &str = "AIR_QUALITY_BASE_URL";

/// Overrides the request timeout, in whole seconds.
pub const TIMEOUT_VAR: &str = "AIR_QUALITY_TIMEOUT_SECS";

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must not be empty")]
    EmptyBaseUrl { var: &'static str },

    #[error("{var} must be an absolute http(s) URL, got {value:?}")]
    InvalidBaseUrl { var: &'static str, value: String },

    #[error("{var} must be a positive number of seconds, got {value:?}")]
    InvalidTimeout { var: &'static str, value: String },
}

/// Build the client config from the process environment.
pub fn client_config_from_env() -> Result<ClientConfig, ConfigError> {
    client_config_from_lookup(|var| std::env::var(var).ok())
}

/// Build the client config, reading variables through `lookup`.
pub fn client_config_from_lookup(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<ClientConfig, ConfigError> {
    let mut config = ClientConfig::new();

    if let Some(url) = lookup(BASE_URL_VAR) {
        let url = url.trim();
        if url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl { var: BASE_URL_VAR });
        }
        let valid = reqwest::Url::parse(url)
            .is_ok_and(|parsed| matches!(parsed.scheme(), "http" | "https") && parsed.has_host());
        if !valid {
            return Err(ConfigError::InvalidBaseUrl {
                var: BASE_URL_VAR,
                value: url.to_string(),
            });
        }
        config = config.with_base_url(url);
    }

    if let Some(value) = lookup(TIMEOUT_VAR) {
        let secs = value
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|&secs| secs > 0)
            .ok_or_else(|| ConfigError::InvalidTimeout {
                var: TIMEOUT_VAR,
                value: value.clone(),
            })?;
        config = config.with_timeout(secs);
    }

    Ok(config)
}
