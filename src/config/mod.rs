//! Application configuration.
//!
//! Settings are read from `INTERLINK__`-prefixed environment variables, with
//! `__` separating nested keys, after loading a `.env` file when one exists:
//!
//! - `INTERLINK__DATABASE_URL=postgres://...` sets `database_url`
//! - `INTERLINK__COMPLETION__MODEL=...` sets `completion.model`
//! - `INTERLINK__RESOLUTION__SELECT_CHAR_BUDGET=2000` sets
//!   `resolution.select_char_budget`
//!
//! `OPENROUTER_API_KEY` and `OPENROUTER_MODEL` are honoured as defaults for
//! the completion key and model.
//!
//! ```no_run
//! use interlink::config::AppConfig;
//!
//! let config = AppConfig::load().expect("configuration loads");
//! assert!(config.resolution.select_char_budget > 0);
//! ```

mod completion;
mod resolution;

#[cfg(test)]
mod tests;

pub use completion::{CompletionConfig, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};
pub use resolution::{
    DEFAULT_QUESTION, DEFAULT_SELECT_CHAR_BUDGET, DEFAULT_SUMMARY_CHAR_LIMIT, ResolutionConfig,
};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::Deserialize;
use thiserror::Error;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "INTERLINK";

/// Errors raised while loading or checking configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized.
    #[error("configuration loading failed: {0}")]
    Load(#[from] config::ConfigError),

    /// A required value is absent.
    #[error("required configuration missing: {0}")]
    MissingRequired(&'static str),

    /// A value is present but unusable.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Creates an invalid-value error.
    #[must_use]
    pub fn invalid(detail: impl Into<String>) -> Self {
        Self::Invalid(detail.into())
    }
}

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Content derivation budgets and prompts.
    pub resolution: ResolutionConfig,
    /// Completion provider settings.
    pub completion: CompletionConfig,
    /// `PostgreSQL` connection string for the conversation store.
    pub database_url: Option<String>,
}

impl AppConfig {
    /// Loads configuration from `.env` and the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] when a value cannot be deserialized.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Reads configuration from the process environment alone.
    ///
    /// `INTERLINK__` variables take precedence over `OPENROUTER_API_KEY` and
    /// `OPENROUTER_MODEL`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] when a value cannot be deserialized.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_builder(with_openrouter_defaults(Config::builder())?.add_source(environment()))
    }

    /// Loads a TOML file, then layers the environment on top.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] when the file is missing or a value
    /// cannot be deserialized.
    pub fn load_with_file(path: &str) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_builder(
            with_openrouter_defaults(Config::builder())?
                .add_source(File::with_name(path).format(FileFormat::Toml))
                .add_source(environment()),
        )
    }

    /// Reads configuration from TOML text alone.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] when the text is not valid TOML or a
    /// value has the wrong type.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Self::from_builder(Config::builder().add_source(File::from_str(text, FileFormat::Toml)))
    }

    /// Checks the resolution settings.
    ///
    /// Completion settings are checked separately through
    /// [`CompletionConfig::validate`] because offline commands never use
    /// them.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.resolution.validate()
    }

    /// Returns the database URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequired`] when none is configured.
    pub fn require_database_url(&self) -> Result<&str, ConfigError> {
        self.database_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::MissingRequired("database_url"))
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        Ok(builder.build()?.try_deserialize()?)
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}

fn with_openrouter_defaults(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let with_key = match std::env::var("OPENROUTER_API_KEY") {
        Ok(key) => builder.set_default("completion.api_key", key)?,
        Err(_) => builder,
    };
    let with_model = match std::env::var("OPENROUTER_MODEL") {
        Ok(model) => with_key.set_default("completion.model", model)?,
        Err(_) => with_key,
    };
    Ok(with_model)
}
