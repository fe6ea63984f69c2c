//! Conversation directory port.
//!
//! The directory lists conversations and their message history. The engine
//! only reads through it.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::directive::domain::{ConversationId, ConversationSummary, TranscriptMessage};

/// Result type for directory operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Read access to stored conversations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConversationDirectory: Send + Sync {
    /// Lists every conversation with its title.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] when the listing cannot be read.
    async fn list_conversations(&self) -> DirectoryResult<Vec<ConversationSummary>>;

    /// Lists the messages of a conversation in creation order.
    ///
    /// Returns an empty vector for a conversation without messages.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] when the messages cannot be read.
    async fn list_messages(
        &self,
        conversation_id: ConversationId,
    ) -> DirectoryResult<Vec<TranscriptMessage>>;

    /// Finds a conversation by identifier.
    ///
    /// Returns `None` when the conversation does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] when the lookup fails.
    async fn find_conversation(
        &self,
        conversation_id: ConversationId,
    ) -> DirectoryResult<Option<ConversationSummary>>;
}

/// Errors returned by directory implementations.
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    /// A stored row could not be mapped to a domain value.
    #[error("invalid conversation record: {0}")]
    InvalidRecord(String),

    /// Persistence-layer failure.
    #[error("conversation directory unavailable: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl DirectoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
