use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const DEFAULT_CORPORATE_ID: &str = "USER001";
pub const DEFAULT_GITHUB_USERNAME: &str = "john.doe";
pub const DEFAULT_USER_NAME: &str = "John Doe";
pub const DEFAULT_DEPARTMENT: &str = "Engineering";
pub const DEFAULT_ROLE: &str = "user";

pub const VALID_ROLES: [&str; 3] = ["user", "ospo_admin", "admin"];

/// Session user. There is no sign-in flow; the identity is configured.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    /// Request-ownership key sent as requesterId / userId
    pub corporate_id: String,
    pub github_username: String,
    pub name: String,
    pub department: String,
    pub role: String,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            corporate_id: String::from(DEFAULT_CORPORATE_ID),
            github_username: String::from(DEFAULT_GITHUB_USERNAME),
            name: String::from(DEFAULT_USER_NAME),
            department: String::from(DEFAULT_DEPARTMENT),
            role: String::from(DEFAULT_ROLE),
        }
    }
}

impl UserConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.corporate_id.trim().is_empty() {
            return Err(ConfigError::user("user.corporate_id cannot be empty"));
        }

        if !VALID_ROLES.contains(&self.role.as_str()) {
            return Err(ConfigError::user(format!(
                "user.role must be one of {}, got {}",
                VALID_ROLES.join(", "),
                self.role
            )));
        }

        Ok(())
    }
}
