//! OpenRouter-compatible chat completion client.
//!
//! Sends one non-streaming request per call:
//!
//! ```text
//! POST <base_url>/chat/completions
//! Authorization: Bearer <api_key>
//! {"model": "...", "messages": [{"role": "system", ...}, {"role": "user", ...}], "stream": false}
//! ```
//!
//! The answer is read from `choices[0].message.content`; a missing value is
//! treated as an empty answer. Requests are not retried.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::{CompletionConfig, ConfigError};
use crate::directive::ports::{CompletionError, CompletionResult, CompletionService};

/// Completion service posting to an OpenRouter-compatible endpoint.
#[derive(Debug, Clone)]
pub struct OpenRouterCompletionService {
    client: Client,
    api_key: Secret<String>,
    model: String,
    url: String,
}

impl OpenRouterCompletionService {
    /// Creates a client from validated settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the settings are incomplete or the HTTP
    /// client cannot be built.
    pub fn new(config: &CompletionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let api_key = config
            .api_key
            .clone()
            .ok_or(ConfigError::MissingRequired("completion.api_key"))?;
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|err| ConfigError::invalid(format!("HTTP client: {err}")))?;
        Ok(Self {
            client,
            api_key,
            model: config.model.clone(),
            url: config.completions_url(),
        })
    }

    /// Returns the endpoint requests are posted to.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CompletionService for OpenRouterCompletionService {
    async fn complete(&self, system_prompt: &str, user_content: &str) -> CompletionResult<String> {
        let body = ChatRequest::new(&self.model, system_prompt, user_content);
        debug!(model = %self.model, url = %self.url, "sending completion request");

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|err| CompletionError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), model = %self.model, "completion request rejected");
            return Err(CompletionError::Status(status.as_u16()));
        }

        let answer: ChatResponse = response
            .json()
            .await
            .map_err(|err| CompletionError::MalformedResponse(err.to_string()))?;
        Ok(answer.into_content())
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    stream: bool,
}

impl<'a> ChatRequest<'a> {
    const fn new(model: &'a str, system_prompt: &'a str, user_content: &'a str) -> Self {
        Self {
            model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_content,
                },
            ],
            stream: false,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    #[serde(default)]
    message: Option<ChatAnswer>,
}

#[derive(Debug, Deserialize)]
struct ChatAnswer {
    #[serde(default)]
    content: Option<String>,
}

impl ChatResponse {
    fn into_content(self) -> String {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .unwrap_or_default()
    }
}
