use serde::{Deserialize, Serialize};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

use super::errors::ConfigError;
use super::formatter::{FormatterConfig, NameDecodeFailurePolicy};
use super::logging::LoggingConfig;

/// Main configuration structure for dnstap-quiet
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Line formatting (reference time zone, name failure policy)
    #[serde(default)]
    pub formatter: FormatterConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dnstap-quiet.toml in current directory
    /// 3. /etc/dnstap-quiet/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("dnstap-quiet.toml").exists() {
            Self::from_file("dnstap-quiet.toml")?
        } else if std::path::Path::new("/etc/dnstap-quiet/config.toml").exists() {
            Self::from_file("/etc/dnstap-quiet/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(zone) = overrides.time_zone {
            self.formatter.time_zone = zone;
        }
        if let Some(policy) = overrides.name_decode_failure {
            self.formatter.name_decode_failure = policy;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.formatter.reference_zone()?;

        validate_log_level(&self.logging.level)?;

        Ok(())
    }
}

/// A bare level must be a known level name; anything with directive syntax
/// must parse as an `EnvFilter`.
fn validate_log_level(level: &str) -> Result<(), ConfigError> {
    let level = level.trim();
    if level.is_empty() {
        return Err(ConfigError::Validation(
            "Log level cannot be empty".to_string(),
        ));
    }

    let valid = if level.contains(['=', ',', '[']) {
        EnvFilter::try_new(level).is_ok()
    } else {
        level.parse::<LevelFilter>().is_ok()
    };

    if !valid {
        return Err(ConfigError::Validation(format!(
            "Invalid log level '{}': expected off, error, warn, info, debug, trace or a filter directive",
            level
        )));
    }

    Ok(())
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub time_zone: Option<String>,
    pub name_decode_failure: Option<NameDecodeFailurePolicy>,
    pub log_level: Option<String>,
}
