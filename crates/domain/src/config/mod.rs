pub mod errors;
pub mod formatter;
pub mod logging;
pub mod root;

pub use errors::ConfigError;
pub use formatter::{FormatterConfig, NameDecodeFailurePolicy};
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
