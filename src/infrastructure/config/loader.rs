//! Layered configuration loading and validation.

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::Path;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `base_url` is empty
    #[error("Base URL cannot be empty")]
    EmptyBaseUrl,

    /// `base_url` is not an absolute http(s) URL
    #[error("Invalid base URL: {0}. Must be an absolute http or https URL")]
    InvalidBaseUrl(String),

    /// `timeout_secs` is zero
    #[error("Invalid timeout_secs: 0. Omit the setting to disable the timeout")]
    ZeroTimeout,

    /// Unknown `logging.level`
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Unknown `logging.format`
    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),
}

/// Environment variable holding the API key
const API_KEY_ENV: &str = "ATLAS_API_KEY";

/// Configuration loader with hierarchical merging
///
/// Loading does not validate. Callers apply their own overrides first and
/// then call [`ConfigLoader::validate`] once on the final configuration.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging from the current directory
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .atlas/config.yaml (project config)
    /// 3. .atlas/local.yaml (local overrides, optional)
    /// 4. Environment variables (ATLAS_* prefix, highest priority)
    pub fn load() -> Result<Config> {
        Self::load_from_dir(".")
    }

    /// Same as [`load`](Self::load) with `.atlas/` resolved under `dir`
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Config> {
        let atlas_dir = dir.as_ref().join(".atlas");
        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(atlas_dir.join("config.yaml")))
            .merge(Yaml::file(atlas_dir.join("local.yaml")));

        with_env(figment)
            .extract()
            .context("Failed to extract configuration from figment")
    }

    /// Load configuration from a specific file, still honouring ATLAS_* overrides
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        if !path.is_file() {
            anyhow::bail!("Config file not found: {}", path.display());
        }

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path));

        with_env(figment)
            .extract()
            .with_context(|| format!("Failed to load config from {}", path.display()))
    }

    /// Validate a fully resolved configuration
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.base_url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }

        match url::Url::parse(&config.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => return Err(ConfigError::InvalidBaseUrl(config.base_url.clone())),
        }

        if config.timeout_secs == Some(0) {
            return Err(ConfigError::ZeroTimeout);
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        Ok(())
    }
}

/// Merge `ATLAS_*` environment overrides on top of `figment`
///
/// Env values are type-inferred, so `ATLAS_API_KEY=0042` would arrive as the
/// number 42. The key is re-merged verbatim.
fn with_env(figment: Figment) -> Figment {
    let figment = figment.merge(Env::prefixed("ATLAS_").split("__"));
    match std::env::var(API_KEY_ENV) {
        Ok(raw) => figment.merge(Serialized::default("api_key", raw)),
        Err(_) => figment,
    }
}
