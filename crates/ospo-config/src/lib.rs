mod api_config;
mod api_transport;
mod config;
mod error;
mod log_level;
mod logging_config;
mod user_config;
mod validation_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use api_transport::ApiTransport;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use user_config::UserConfig;
pub use validation_config::ValidationConfig;

pub const CONFIG_DIR_ENV: &str = "OSPO_CONFIG_DIR";
pub const CONFIG_DIR_NAME: &str = ".ospo";
pub const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_DIRECTORY: &str = "log";
