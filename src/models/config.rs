//! Configuration model loaded from external sources.

use std::path::Path;
use std::time::Duration;

use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::types::PageLimit;
use crate::{DEFAULT_API_BASE_URL, DEFAULT_PAGE_LIMIT, DEFAULT_REQUEST_TIMEOUT_SECS};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Error loading settings: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid settings: {0}")]
    Invalid(#[from] ValidationErrors),
}

#[derive(Clone, Debug, Deserialize, Validate)]
/// Settings of the contact list client.
pub struct ClientConfig {
    /// Root of the contacts REST API, e.g. `https://host/api/`.
    #[validate(url)]
    pub api_base_url: String,
    /// Contacts shown per page; zero fails deserialization.
    pub page_limit: PageLimit,
    /// Upper bound for a single HTTP request.
    #[validate(range(min = 1))]
    pub request_timeout_secs: u64,
    /// Serve contacts from memory instead of the REST API.
    #[serde(default)]
    pub offline: bool,
}

impl ClientConfig {
    /// Loads `default.yaml` and `{app_env}.yaml` from `config_dir`, then
    /// `APP_*` environment variables, on top of built-in defaults.
    pub fn load(config_dir: &Path, app_env: &str) -> Result<Self, ConfigError> {
        let default_file = config_dir.join("default");
        let env_file = config_dir.join(app_env);

        let settings = Config::builder()
            .set_default("api_base_url", DEFAULT_API_BASE_URL)?
            .set_default("page_limit", i64::from(DEFAULT_PAGE_LIMIT))?
            .set_default("request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS as i64)?
            .set_default("offline", false)?
            .add_source(File::with_name(&default_file.to_string_lossy()).required(false))
            .add_source(File::with_name(&env_file.to_string_lossy()).required(false))
            .add_source(Environment::with_prefix("APP").try_parsing(true))
            .build()?;

        let config = settings.try_deserialize::<ClientConfig>()?;
        config.validate()?;
        Ok(config)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
