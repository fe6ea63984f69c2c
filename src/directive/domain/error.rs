//! Error taxonomy for directive resolution.

use thiserror::Error;

/// Failure to resolve a single directive.
///
/// Every variant is recoverable at the batch level: the batch resolver turns
/// it into an error entry and moves on to the next directive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectiveError {
    /// No conversation title starts with the reference.
    #[error("Conversation not found: {0}")]
    NotFound(String),

    /// Several titles start with the reference and none equals it.
    #[error("Ambiguous conversation title: \"{reference}\" matches: {}", .matches.join(", "))]
    Ambiguous {
        /// The reference as typed.
        reference: String,
        /// Titles of every colliding conversation.
        matches: Vec<String>,
    },

    /// Directive input was rejected before resolution.
    #[error("Invalid command: {0}")]
    InvalidDirective(String),

    /// Content derivation failed downstream.
    #[error("{0}")]
    ResolutionFailed(String),
}

impl DirectiveError {
    /// Creates an invalid-directive error.
    #[must_use]
    pub fn invalid(detail: impl Into<String>) -> Self {
        Self::InvalidDirective(detail.into())
    }

    /// Creates a resolution failure.
    #[must_use]
    pub fn resolution_failed(message: impl Into<String>) -> Self {
        Self::ResolutionFailed(message.into())
    }

    /// Returns the stable machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "CONVERSATION_NOT_FOUND",
            Self::Ambiguous { .. } => "AMBIGUOUS_CONVERSATION",
            Self::InvalidDirective(_) => "INVALID_COMMAND",
            Self::ResolutionFailed(_) => "COMMAND_RESOLUTION_FAILED",
        }
    }

    /// Returns the HTTP status an outer layer should answer with.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Ambiguous { .. } | Self::InvalidDirective(_) => 400,
            Self::ResolutionFailed(_) => 500,
        }
    }
}
