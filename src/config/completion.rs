//! Completion provider settings.

use secrecy::Secret;
use serde::Deserialize;
use std::time::Duration;

use super::ConfigError;

/// Default OpenRouter-compatible API root.
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
/// Default model identifier.
pub const DEFAULT_MODEL: &str = "openai/gpt-4o-mini";
/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Settings for the HTTP completion client.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CompletionConfig {
    /// Bearer key sent to the provider.
    pub api_key: Option<Secret<String>>,
    /// Model identifier sent with every request.
    pub model: String,
    /// API root; `/chat/completions` is appended.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_owned(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl CompletionConfig {
    /// Returns the request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Returns the chat completions endpoint.
    #[must_use]
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    /// Checks that a client can be built from these settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequired`] without an API key and
    /// [`ConfigError::Invalid`] for an empty model, a non-HTTP base URL or a
    /// zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.is_none() {
            return Err(ConfigError::MissingRequired("completion.api_key"));
        }
        if self.model.trim().is_empty() {
            return Err(ConfigError::invalid("completion.model must not be empty"));
        }
        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(ConfigError::invalid(
                "completion.base_url must be an http(s) URL",
            ));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::invalid("completion.timeout_secs must be positive"));
        }
        Ok(())
    }
}
