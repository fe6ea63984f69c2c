//! Cross-reference records linking a conversation to the ones it pulled from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::{ConversationId, DirectiveKind};

/// Title reported for a referenced conversation that no longer exists.
pub const UNKNOWN_TITLE: &str = "Unknown";

/// Unique identifier for a cross-reference record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CrossReferenceId(Uuid);

impl CrossReferenceId {
    /// Creates a new random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID value.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for CrossReferenceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CrossReferenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fields of a cross-reference about to be stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCrossReference {
    /// Conversation whose message carried the directive.
    pub source_conversation_id: ConversationId,
    /// Conversation the directive pulled from.
    pub target_conversation_id: ConversationId,
    /// Directive kind that created the relation.
    pub command: DirectiveKind,
}

impl NewCrossReference {
    /// Creates a new cross-reference request.
    #[must_use]
    pub const fn new(
        source_conversation_id: ConversationId,
        target_conversation_id: ConversationId,
        command: DirectiveKind,
    ) -> Self {
        Self {
            source_conversation_id,
            target_conversation_id,
            command,
        }
    }
}

/// A stored cross-reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossReference {
    /// Record identifier.
    pub id: CrossReferenceId,
    /// Conversation whose message carried the directive.
    pub source_conversation_id: ConversationId,
    /// Conversation the directive pulled from.
    pub target_conversation_id: ConversationId,
    /// Directive kind that created the relation.
    pub command: DirectiveKind,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl CrossReference {
    /// Returns the conversation on the other side of the relation from
    /// `conversation_id`.
    #[must_use]
    pub fn counterpart_of(&self, conversation_id: ConversationId) -> ConversationId {
        if self.source_conversation_id == conversation_id {
            self.target_conversation_id
        } else {
            self.source_conversation_id
        }
    }
}

/// A cross-reference as presented for one conversation, carrying the title
/// of the conversation on the other side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceView {
    /// Record identifier.
    pub id: CrossReferenceId,
    /// Conversation whose message carried the directive.
    pub source_conversation_id: ConversationId,
    /// Conversation the directive pulled from.
    pub target_conversation_id: ConversationId,
    /// Title of the other conversation, or [`UNKNOWN_TITLE`].
    pub target_title: String,
    /// Directive kind that created the relation.
    pub command: DirectiveKind,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl ReferenceView {
    /// Builds a view of `reference` with the counterpart title.
    #[must_use]
    pub fn new(reference: CrossReference, target_title: impl Into<String>) -> Self {
        Self {
            id: reference.id,
            source_conversation_id: reference.source_conversation_id,
            target_conversation_id: reference.target_conversation_id,
            target_title: target_title.into(),
            command: reference.command,
            created_at: reference.created_at,
        }
    }
}
