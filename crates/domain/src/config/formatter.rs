use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use super::errors::ConfigError;

/// What to print in the name slot when the wire-encoded question name cannot be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NameDecodeFailurePolicy {
    /// `X ` followed by the quoted, possibly empty, attempt: `X ""`.
    #[default]
    Legacy,
    /// `X ` alone.
    MarkerOnly,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FormatterConfig {
    /// IANA zone used to render timestamps.
    #[serde(default = "default_time_zone")]
    pub time_zone: String,

    #[serde(default)]
    pub name_decode_failure: NameDecodeFailurePolicy,
}

impl FormatterConfig {
    pub fn reference_zone(&self) -> Result<Tz, ConfigError> {
        self.time_zone.parse::<Tz>().map_err(|e| {
            ConfigError::Validation(format!("Unknown time zone '{}': {}", self.time_zone, e))
        })
    }
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            time_zone: default_time_zone(),
            name_decode_failure: NameDecodeFailurePolicy::default(),
        }
    }
}

fn default_time_zone() -> String {
    "UTC".to_string()
}
