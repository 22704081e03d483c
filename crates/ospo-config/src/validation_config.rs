use crate::{ConfigError, ConfigErrorResult};

use ospo_core::validation::validation_limits::{
    DEFAULT_MAX_TITLE_LENGTH, DEFAULT_MIN_PROJECT_NAME_LENGTH, DEFAULT_MIN_TITLE_LENGTH,
};
use serde::Deserialize;

// Validation constraints
pub const MIN_TITLE_LENGTH: usize = 1;
pub const MAX_TITLE_LENGTH: usize = 500;

pub const MIN_PROJECT_NAME_LENGTH: usize = 1;
pub const MAX_PROJECT_NAME_LENGTH: usize = 100;

/// Field limits applied to request forms before submission.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub min_title_length: usize,
    pub max_title_length: usize,
    pub min_project_name_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_title_length: DEFAULT_MIN_TITLE_LENGTH,
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            min_project_name_length: DEFAULT_MIN_PROJECT_NAME_LENGTH,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.min_title_length < MIN_TITLE_LENGTH || self.min_title_length > MAX_TITLE_LENGTH {
            return Err(ConfigError::validation(format!(
                "validation.min_title_length must be {}-{}, got {}",
                MIN_TITLE_LENGTH, MAX_TITLE_LENGTH, self.min_title_length
            )));
        }

        if self.max_title_length < MIN_TITLE_LENGTH || self.max_title_length > MAX_TITLE_LENGTH {
            return Err(ConfigError::validation(format!(
                "validation.max_title_length must be {}-{}, got {}",
                MIN_TITLE_LENGTH, MAX_TITLE_LENGTH, self.max_title_length
            )));
        }

        if self.min_title_length > self.max_title_length {
            return Err(ConfigError::validation(format!(
                "validation.min_title_length ({}) exceeds max_title_length ({})",
                self.min_title_length, self.max_title_length
            )));
        }

        if self.min_project_name_length < MIN_PROJECT_NAME_LENGTH
            || self.min_project_name_length > MAX_PROJECT_NAME_LENGTH
        {
            return Err(ConfigError::validation(format!(
                "validation.min_project_name_length must be {}-{}, got {}",
                MIN_PROJECT_NAME_LENGTH, MAX_PROJECT_NAME_LENGTH, self.min_project_name_length
            )));
        }

        Ok(())
    }
}
