//! Configuration model loaded from external sources.

use std::env;
use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::domain::types::{DEFAULT_PAGE_SIZE, PageSize, TypeConstraintError};

/// Directory searched by [`ClientConfig::from_env`].
pub const CONFIG_DIR: &str = "config";

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_request_timeout_secs() -> u64 {
    30
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
/// Settings for talking to the Artist Data API.
pub struct ClientConfig {
    /// API base such as `http://localhost:8000/api/v1`.
    pub api_url: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl ClientConfig {
    /// Layers `{dir}/default.yaml`, the optional `{dir}/{app_env}.yaml` and
    /// `APP_*` environment variables, later sources winning.
    pub fn load(dir: impl AsRef<Path>, app_env: &str) -> Result<Self, ConfigError> {
        let dir = dir.as_ref();

        Config::builder()
            .add_source(File::from(dir.join("default.yaml")))
            .add_source(File::from(dir.join(format!("{app_env}.yaml"))).required(false))
            .add_source(Environment::with_prefix("APP").try_parsing(true))
            .build()?
            .try_deserialize::<ClientConfig>()
    }

    /// Loads `.env`, then the profile named by `APP_ENV` (default `local`)
    /// from `./config`.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());
        log::info!("Loading client config for profile `{app_env}`");

        Self::load(CONFIG_DIR, &app_env)
    }

    pub fn page_size(&self) -> Result<PageSize, TypeConstraintError> {
        PageSize::new(self.page_size)
    }
}
