//! Cross-reference store port.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::directive::domain::{ConversationId, CrossReference, NewCrossReference};

/// Result type for cross-reference store operations.
pub type CrossReferenceResult<T> = Result<T, CrossReferenceError>;

/// Persistence of relations between conversations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CrossReferenceStore: Send + Sync {
    /// Stores a new cross-reference and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`CrossReferenceError`] when the record cannot be stored.
    async fn create(&self, reference: NewCrossReference) -> CrossReferenceResult<CrossReference>;

    /// Returns references whose source is `conversation_id`.
    ///
    /// # Errors
    ///
    /// Returns [`CrossReferenceError`] when the query fails.
    async fn find_by_source(
        &self,
        conversation_id: ConversationId,
    ) -> CrossReferenceResult<Vec<CrossReference>>;

    /// Returns references whose target is `conversation_id`.
    ///
    /// # Errors
    ///
    /// Returns [`CrossReferenceError`] when the query fails.
    async fn find_by_target(
        &self,
        conversation_id: ConversationId,
    ) -> CrossReferenceResult<Vec<CrossReference>>;

    /// Returns references where `conversation_id` is source or target,
    /// oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`CrossReferenceError`] when the query fails.
    async fn find_touching(
        &self,
        conversation_id: ConversationId,
    ) -> CrossReferenceResult<Vec<CrossReference>>;

    /// Deletes every reference whose source is `conversation_id` and returns
    /// how many were removed.
    ///
    /// # Errors
    ///
    /// Returns [`CrossReferenceError`] when the deletion fails.
    async fn delete_by_source(&self, conversation_id: ConversationId)
    -> CrossReferenceResult<usize>;
}

/// Errors returned by cross-reference store implementations.
#[derive(Debug, Clone, Error)]
pub enum CrossReferenceError {
    /// A stored row could not be mapped to a domain value.
    #[error("invalid cross-reference record: {0}")]
    InvalidRecord(String),

    /// The store did not return the inserted record.
    #[error("failed to create cross-reference")]
    NotCreated,

    /// Persistence-layer failure.
    #[error("cross-reference store unavailable: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl CrossReferenceError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
