//! Configuration loading.
//!
//! Uses Figment to layer built-in defaults, an optional TOML file and
//! `CONTEXT_RANKER_*` environment variables (nested keys separated by `__`,
//! e.g. `CONTEXT_RANKER_BUDGET__MAX_TOTAL_CHARS=8000`).

use std::path::Path;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use thiserror::Error;
use tracing::debug;

use super::EngineConfig;

pub const ENV_PREFIX: &str = "CONTEXT_RANKER_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::Load(Box::new(err))
    }
}

impl EngineConfig {
    /// Figment for `path` layered under the environment. A missing file is
    /// not an error; every field falls back to its default.
    pub fn figment(path: impl AsRef<Path>) -> Figment {
        Figment::new()
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config: EngineConfig = Self::figment(path).extract()?;
        config.validate()?;

        debug!(
            path = %path.display(),
            max_results = config.max_results,
            max_total_chars = config.budget.max_total_chars,
            "loaded engine configuration"
        );
        Ok(config)
    }

    /// Parse configuration from TOML text only, ignoring the environment.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = Figment::new().merge(Toml::string(toml)).extract()?;
        config.validate()?;
        Ok(config)
    }
}
