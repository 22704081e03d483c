use crate::{
    ApiConfig, CONFIG_DIR_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    LoggingConfig, UserConfig, ValidationConfig,
};

use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub user: UserConfig,
    pub logging: LoggingConfig,
    pub validation: ValidationConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for OSPO_CONFIG_DIR env var, else use ./.ospo/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply OSPO_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            debug!("No config file at {}, using defaults", config_path.display());
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: OSPO_CONFIG_DIR env var > ./.ospo/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;
        self.user.validate()?;
        self.validation.validate()?;

        if let Some(ref file) = self.logging.file
            && escapes_config_dir(file)
        {
            return Err(ConfigError::config(
                "logging.file must be relative and cannot contain '..'",
            ));
        }

        if escapes_config_dir(&self.logging.dir) {
            return Err(ConfigError::config(
                "logging.dir must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref file) => Ok(Some(Self::config_dir()?.join(&self.logging.dir).join(file))),
            None => Ok(None),
        }
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  api: {} ({})", self.api.base_url, self.api.transport);
        info!(
            "  user: {} ({}, {})",
            self.user.corporate_id, self.user.github_username, self.user.role
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
        info!(
            "  validation: title={}-{}, project_name>={}",
            self.validation.min_title_length,
            self.validation.max_title_length,
            self.validation.min_project_name_length
        );
    }

    fn apply_env_overrides(&mut self) {
        // Api
        Self::apply_env_string("OSPO_API_URL", &mut self.api.base_url);
        Self::apply_env_parse("OSPO_API_TRANSPORT", &mut self.api.transport);

        // User
        Self::apply_env_string("OSPO_USER_ID", &mut self.user.corporate_id);
        Self::apply_env_string("OSPO_USER_GITHUB", &mut self.user.github_username);
        Self::apply_env_string("OSPO_USER_NAME", &mut self.user.name);
        Self::apply_env_string("OSPO_USER_DEPARTMENT", &mut self.user.department);
        Self::apply_env_string("OSPO_USER_ROLE", &mut self.user.role);

        // Logging
        Self::apply_env_parse("OSPO_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("OSPO_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("OSPO_LOG_FILE", &mut self.logging.file);

        // Validation
        Self::apply_env_parse(
            "OSPO_VALIDATION_MIN_TITLE_LENGTH",
            &mut self.validation.min_title_length,
        );
        Self::apply_env_parse(
            "OSPO_VALIDATION_MAX_TITLE_LENGTH",
            &mut self.validation.max_title_length,
        );
        Self::apply_env_parse(
            "OSPO_VALIDATION_MIN_PROJECT_NAME_LENGTH",
            &mut self.validation.min_project_name_length,
        );
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}

/// Absolute, or climbing out with `..`
fn escapes_config_dir(path: &str) -> bool {
    Path::new(path).is_absolute() || path.contains("..")
}
