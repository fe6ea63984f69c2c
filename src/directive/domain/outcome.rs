//! Results of resolving directives.

use serde::{Deserialize, Serialize};

use super::{ConversationId, DirectiveError, DirectiveKind, DirectiveRequest};

/// Content derived for one directive.
///
/// `content` is empty exactly for [`DirectiveKind::Link`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedDirective {
    /// Directive kind.
    pub kind: DirectiveKind,
    /// Identifier of the referenced conversation.
    pub conversation_id: ConversationId,
    /// Title of the referenced conversation.
    pub conversation_title: String,
    /// Derived content to inline.
    pub content: String,
    /// Number of messages in the referenced conversation.
    pub message_count: usize,
}

/// Error entry for a directive that could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionFailure {
    /// Directive kind.
    pub kind: DirectiveKind,
    /// Reference as typed.
    pub conversation_ref: String,
    /// Human-readable failure message.
    #[serde(rename = "error")]
    pub message: String,
}

impl ResolutionFailure {
    /// Creates a failure entry for `request`.
    #[must_use]
    pub fn for_request(request: &DirectiveRequest, error: &DirectiveError) -> Self {
        Self::new(request.kind(), request.conversation_ref(), error)
    }

    /// Creates a failure entry from its parts.
    #[must_use]
    pub fn new(kind: DirectiveKind, conversation_ref: &str, error: &DirectiveError) -> Self {
        Self {
            kind,
            conversation_ref: conversation_ref.to_owned(),
            message: error.to_string(),
        }
    }
}

/// Outcome of one directive within a batch.
pub type DirectiveOutcome = Result<ResolvedDirective, ResolutionFailure>;

/// Successes and failures of a batch, each in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchOutcome {
    /// Resolved directives.
    pub resolved: Vec<ResolvedDirective>,
    /// Directives that failed.
    pub errors: Vec<ResolutionFailure>,
}

impl BatchOutcome {
    /// Splits per-directive outcomes while keeping their relative order.
    #[must_use]
    pub fn from_outcomes(outcomes: impl IntoIterator<Item = DirectiveOutcome>) -> Self {
        let mut batch = Self::default();
        for outcome in outcomes {
            match outcome {
                Ok(resolved) => batch.resolved.push(resolved),
                Err(failure) => batch.errors.push(failure),
            }
        }
        batch
    }

    /// Returns `true` when every directive resolved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}
