//! In-memory conversation directory.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::directive::{
    domain::{ConversationId, ConversationSummary, TranscriptMessage},
    ports::{ConversationDirectory, DirectoryError, DirectoryResult},
};

/// Thread-safe in-memory conversation directory.
///
/// Conversations are listed in insertion order and messages in append order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryConversationDirectory {
    state: Arc<RwLock<DirectoryState>>,
}

#[derive(Debug, Default)]
struct DirectoryState {
    conversations: Vec<ConversationSummary>,
    messages: HashMap<ConversationId, Vec<TranscriptMessage>>,
}

impl InMemoryConversationDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a conversation titled `title` and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Persistence`] when the state lock is
    /// poisoned.
    pub fn create_conversation(
        &self,
        title: impl Into<String>,
    ) -> DirectoryResult<ConversationId> {
        let mut state = self.write()?;
        let summary = ConversationSummary::new(ConversationId::new(), title);
        let id = summary.id;
        state.conversations.push(summary);
        state.messages.insert(id, Vec::new());
        Ok(id)
    }

    /// Appends a message to an existing conversation.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::InvalidRecord`] when the conversation does
    /// not exist, or [`DirectoryError::Persistence`] when the state lock is
    /// poisoned.
    pub fn append_message(
        &self,
        conversation_id: ConversationId,
        message: TranscriptMessage,
    ) -> DirectoryResult<()> {
        let mut state = self.write()?;
        let messages = state.messages.get_mut(&conversation_id).ok_or_else(|| {
            DirectoryError::InvalidRecord(format!("unknown conversation {conversation_id}"))
        })?;
        messages.push(message);
        Ok(())
    }

    /// Removes a conversation and its messages. Returns `false` when it did
    /// not exist.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Persistence`] when the state lock is
    /// poisoned.
    pub fn remove_conversation(&self, conversation_id: ConversationId) -> DirectoryResult<bool> {
        let mut state = self.write()?;
        let before = state.conversations.len();
        state
            .conversations
            .retain(|conversation| conversation.id != conversation_id);
        state.messages.remove(&conversation_id);
        Ok(state.conversations.len() != before)
    }

    fn read(&self) -> DirectoryResult<std::sync::RwLockReadGuard<'_, DirectoryState>> {
        self.state
            .read()
            .map_err(|err| DirectoryError::persistence(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> DirectoryResult<std::sync::RwLockWriteGuard<'_, DirectoryState>> {
        self.state
            .write()
            .map_err(|err| DirectoryError::persistence(std::io::Error::other(err.to_string())))
    }
}

#[async_trait]
impl ConversationDirectory for InMemoryConversationDirectory {
    async fn list_conversations(&self) -> DirectoryResult<Vec<ConversationSummary>> {
        Ok(self.read()?.conversations.clone())
    }

    async fn list_messages(
        &self,
        conversation_id: ConversationId,
    ) -> DirectoryResult<Vec<TranscriptMessage>> {
        Ok(self
            .read()?
            .messages
            .get(&conversation_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn find_conversation(
        &self,
        conversation_id: ConversationId,
    ) -> DirectoryResult<Option<ConversationSummary>> {
        Ok(self
            .read()?
            .conversations
            .iter()
            .find(|conversation| conversation.id == conversation_id)
            .cloned())
    }
}
