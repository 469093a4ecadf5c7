use crate::global;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

pub const API_KEY_VAR: &str = "FIREFLIES_API_KEY";
pub const API_URL_VAR: &str = "FIREFLIES_API_URL";
pub const DEFAULT_ENDPOINT: &str = "https://api.fireflies.ai/graphql";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Error: FIREFLIES_API_KEY not found in .env file")]
    MissingApiKey,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// GraphQL endpoint. `FIREFLIES_API_URL` takes precedence.
    pub endpoint: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

/// Everything the client needs, after all layers are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_key: String,
    pub endpoint: String,
}

impl Config {
    /// Read the user config file, falling back to defaults when it does not exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::from_file(&config_path)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).context("Failed to read config file")?;
        let config: Self = toml::from_str(&content).context("Failed to parse config file")?;

        info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Apply environment overrides and pull the API key out of the environment.
    pub fn resolve<F>(self, env: F) -> Result<Settings, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = api_key_from(&env)?;
        let endpoint = env(API_URL_VAR)
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(self.api.endpoint);

        Ok(Settings { api_key, endpoint })
    }

    fn config_path() -> Result<PathBuf> {
        global::config_file()
    }
}

fn api_key_from<F>(env: &F) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    env(API_KEY_VAR)
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
        .ok_or(ConfigError::MissingApiKey)
}

/// The API key is checked before `load_config` runs, so a missing key is
/// reported even when the config file is broken.
pub fn settings_from<F, L>(env: F, load_config: L) -> Result<Settings, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    L: FnOnce() -> Result<Config>,
{
    api_key_from(&env)?;
    let config = load_config()?;
    config.resolve(env)
}

/// Load `.env`, then the process environment and the config file.
pub fn load_settings() -> Result<Settings, ConfigError> {
    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded environment from {:?}", path),
        Err(err) if err.not_found() => {}
        Err(err) => debug!("Ignoring unreadable .env file: {}", err),
    }

    settings_from(|name| std::env::var(name).ok(), Config::load)
}
