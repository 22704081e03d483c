use crate::{ApiTransport, ConfigError, ConfigErrorResult, DEFAULT_BASE_URL};

use serde::Deserialize;
use url::Url;

/// Where the request service lives and how to talk to it
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Backend host, e.g. "http://localhost:8080"
    pub base_url: String,
    pub transport: ApiTransport,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            transport: ApiTransport::default(),
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            ConfigError::api(format!("api.base_url is not a valid URL ({}): {e}", self.base_url))
        })?;

        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ConfigError::api(format!(
                "api.base_url must use http or https, got {other}"
            ))),
        }
    }
}
