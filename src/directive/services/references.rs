//! Listing the cross-references of a conversation.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use crate::directive::{
    domain::{ConversationId, DirectiveError, ReferenceView, UNKNOWN_TITLE},
    ports::{ConversationDirectory, CrossReferenceError, CrossReferenceStore, DirectoryError},
};

/// Service-level errors for reference listing.
#[derive(Debug, Clone, Error)]
pub enum ReferenceServiceError {
    /// The conversation does not exist.
    #[error(transparent)]
    Directive(#[from] DirectiveError),
    /// The directory lookup failed.
    #[error(transparent)]
    Directory(#[from] DirectoryError),
    /// The store operation failed.
    #[error(transparent)]
    Store(#[from] CrossReferenceError),
}

/// Result type for reference service operations.
pub type ReferenceServiceResult<T> = Result<T, ReferenceServiceError>;

/// Reads and clears the cross-references recorded for conversations.
#[derive(Clone)]
pub struct ReferenceService<D, S>
where
    D: ConversationDirectory,
    S: CrossReferenceStore,
{
    directory: Arc<D>,
    references: Arc<S>,
}

impl<D, S> ReferenceService<D, S>
where
    D: ConversationDirectory,
    S: CrossReferenceStore,
{
    /// Creates a reference service.
    #[must_use]
    pub const fn new(directory: Arc<D>, references: Arc<S>) -> Self {
        Self {
            directory,
            references,
        }
    }

    /// Lists the references where `conversation_id` is source or target,
    /// oldest first.
    ///
    /// Each entry carries the title of the conversation on the other side,
    /// or [`UNKNOWN_TITLE`] when that conversation no longer exists.
    ///
    /// # Errors
    ///
    /// Returns [`DirectiveError::NotFound`] (wrapped) when `conversation_id`
    /// does not exist, and a port error when a lookup fails.
    pub async fn list_for(
        &self,
        conversation_id: ConversationId,
    ) -> ReferenceServiceResult<Vec<ReferenceView>> {
        if self
            .directory
            .find_conversation(conversation_id)
            .await?
            .is_none()
        {
            return Err(DirectiveError::NotFound(conversation_id.to_string()).into());
        }

        let references = self.references.find_touching(conversation_id).await?;
        let mut titles: HashMap<ConversationId, String> = HashMap::new();
        let mut views = Vec::with_capacity(references.len());
        for reference in references {
            let other = reference.counterpart_of(conversation_id);
            let title = match titles.get(&other) {
                Some(known) => known.clone(),
                None => {
                    let found = self
                        .directory
                        .find_conversation(other)
                        .await?
                        .map_or_else(|| UNKNOWN_TITLE.to_owned(), |summary| summary.title);
                    titles.insert(other, found.clone());
                    found
                }
            };
            views.push(ReferenceView::new(reference, title));
        }
        Ok(views)
    }

    /// Deletes the references whose source is `conversation_id` and returns
    /// how many were removed.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceServiceError::Store`] when the deletion fails.
    pub async fn clear_outgoing(
        &self,
        conversation_id: ConversationId,
    ) -> ReferenceServiceResult<usize> {
        Ok(self.references.delete_by_source(conversation_id).await?)
    }
}
