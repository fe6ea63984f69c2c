//! Completion service port.
//!
//! Summaries, key points and answers are produced by a language model behind
//! this port, so the engine runs without network access in tests and can be
//! pointed at any provider.

use async_trait::async_trait;
use thiserror::Error;

/// Result type for completion calls.
pub type CompletionResult<T> = Result<T, CompletionError>;

/// A single-shot, non-streaming text completion.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Completes `user_content` under `system_prompt` and returns the model
    /// output.
    ///
    /// # Errors
    ///
    /// Returns [`CompletionError::Status`] when the provider answers with a
    /// non-success status, and another variant when the call cannot be made
    /// or its answer cannot be read.
    async fn complete(&self, system_prompt: &str, user_content: &str) -> CompletionResult<String>;
}

/// Errors returned by completion implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompletionError {
    /// The provider answered with a non-success status.
    #[error("LLM call failed: {0}")]
    Status(u16),

    /// The request could not be sent or the connection failed.
    #[error("LLM call failed: {0}")]
    Transport(String),

    /// The answer body could not be decoded.
    #[error("LLM response could not be read: {0}")]
    MalformedResponse(String),
}
