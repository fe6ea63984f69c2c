//! Diesel row models for conversations and cross-references.

use super::schema::{chat_conversations, chat_cross_references, chat_messages};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for conversation listings.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = chat_conversations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ConversationRow {
    /// Conversation identifier.
    pub id: uuid::Uuid,
    /// Conversation title.
    pub title: String,
}

/// Query result row for transcript messages.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = chat_messages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MessageRow {
    /// Author role.
    pub role: String,
    /// Plain-text body.
    pub content: String,
}

/// Query result row for cross-references.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = chat_cross_references)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CrossReferenceRow {
    /// Record identifier.
    pub id: uuid::Uuid,
    /// Source conversation.
    pub source_conversation_id: uuid::Uuid,
    /// Target conversation.
    pub target_conversation_id: uuid::Uuid,
    /// Directive kind token.
    pub command: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for cross-references.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = chat_cross_references)]
pub struct NewCrossReferenceRow {
    /// Record identifier.
    pub id: uuid::Uuid,
    /// Source conversation.
    pub source_conversation_id: uuid::Uuid,
    /// Target conversation.
    pub target_conversation_id: uuid::Uuid,
    /// Directive kind token.
    pub command: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
