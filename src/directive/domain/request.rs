//! Validated directive requests accepted by the batch resolver.

use serde::{Deserialize, Serialize};

use super::{DirectiveError, DirectiveKind, ParsedDirective};

/// Longest accepted reference, in characters.
pub const MAX_REFERENCE_CHARS: usize = 200;
/// Longest accepted question, in characters.
pub const MAX_QUESTION_CHARS: usize = 500;
/// Largest accepted batch.
pub const MAX_BATCH_SIZE: usize = 10;

/// One directive to resolve: what to derive and from which conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectiveRequest {
    kind: DirectiveKind,
    conversation_ref: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    question: Option<String>,
}

impl DirectiveRequest {
    /// Creates a request after checking reference and question limits.
    ///
    /// # Errors
    ///
    /// Returns [`DirectiveError::InvalidDirective`] when the reference is
    /// blank or longer than [`MAX_REFERENCE_CHARS`], or the question is
    /// longer than [`MAX_QUESTION_CHARS`].
    pub fn new(
        kind: DirectiveKind,
        conversation_ref: impl Into<String>,
        question: Option<String>,
    ) -> Result<Self, DirectiveError> {
        let reference = conversation_ref.into();
        if reference.trim().is_empty() {
            return Err(DirectiveError::invalid(format!(
                "{kind} requires a conversation reference"
            )));
        }
        if reference.chars().count() > MAX_REFERENCE_CHARS {
            return Err(DirectiveError::invalid(format!(
                "{kind} reference exceeds {MAX_REFERENCE_CHARS} characters"
            )));
        }
        if question
            .as_deref()
            .is_some_and(|text| text.chars().count() > MAX_QUESTION_CHARS)
        {
            return Err(DirectiveError::invalid(format!(
                "{kind} question exceeds {MAX_QUESTION_CHARS} characters"
            )));
        }
        Ok(Self {
            kind,
            conversation_ref: reference,
            question,
        })
    }

    /// Returns the directive kind.
    #[must_use]
    pub const fn kind(&self) -> DirectiveKind {
        self.kind
    }

    /// Returns the reference as typed.
    #[must_use]
    pub fn conversation_ref(&self) -> &str {
        &self.conversation_ref
    }

    /// Returns the question, if one was given.
    #[must_use]
    pub fn question(&self) -> Option<&str> {
        self.question.as_deref()
    }
}

impl TryFrom<&ParsedDirective> for DirectiveRequest {
    type Error = DirectiveError;

    fn try_from(directive: &ParsedDirective) -> Result<Self, Self::Error> {
        Self::new(
            directive.kind,
            directive.conversation_ref.clone(),
            directive.question.clone(),
        )
    }
}

/// Checks the size of a batch received from an outer layer.
///
/// # Errors
///
/// Returns [`DirectiveError::InvalidDirective`] for an empty batch or one with
/// more than [`MAX_BATCH_SIZE`] requests.
pub fn validate_batch(requests: &[DirectiveRequest]) -> Result<(), DirectiveError> {
    if requests.is_empty() {
        return Err(DirectiveError::invalid("batch must contain at least one directive"));
    }
    if requests.len() > MAX_BATCH_SIZE {
        return Err(DirectiveError::invalid(format!(
            "batch of {} directives exceeds the limit of {MAX_BATCH_SIZE}",
            requests.len()
        )));
    }
    Ok(())
}
