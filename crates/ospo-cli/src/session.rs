//! Wiring from configuration and global flags to a client and a user.

use crate::CliResult;

use std::str::FromStr;
use std::sync::Arc;

use log::info;
use ospo_client::{GrpcWebClient, HttpClient, InMemoryApi, RequestApi};
use ospo_config::{ApiConfig, ApiTransport, UserConfig, ValidationConfig};
use ospo_core::{User, UserRole, ValidationLimits};

/// Flags that override configuration for one invocation
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub server: Option<String>,
    pub user_id: Option<String>,
    pub transport: Option<ApiTransport>,
    pub demo: bool,
}

/// Pick the backend: demo data, or the configured service and transport
pub fn build_api(config: &ApiConfig, overrides: &Overrides) -> Arc<dyn RequestApi> {
    if overrides.demo {
        info!("Using in-memory demo backend");
        return Arc::new(InMemoryApi::seeded());
    }

    let base_url = overrides.server.as_deref().unwrap_or(&config.base_url);
    let transport = overrides.transport.unwrap_or(config.transport);
    info!("Using {transport} backend at {base_url}");

    match transport {
        ApiTransport::Http => Arc::new(HttpClient::new(base_url)),
        ApiTransport::GrpcWeb => Arc::new(GrpcWebClient::new(base_url)),
    }
}

/// The session user from `[user]`, with `--user-id` taking precedence
pub fn session_user(config: &UserConfig, overrides: &Overrides) -> CliResult<User> {
    Ok(User {
        corporate_id: overrides
            .user_id
            .clone()
            .unwrap_or_else(|| config.corporate_id.clone()),
        github_username: config.github_username.clone(),
        name: config.name.clone(),
        department: config.department.clone(),
        role: UserRole::from_str(&config.role)?,
    })
}

pub fn validation_limits(config: &ValidationConfig) -> ValidationLimits {
    ValidationLimits {
        min_title_length: config.min_title_length,
        max_title_length: config.max_title_length,
        min_project_name_length: config.min_project_name_length,
    }
}
