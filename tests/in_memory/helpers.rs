//! Shared helpers for in-memory directive integration tests.

use std::sync::Arc;

use interlink::directive::{
    adapters::memory::{
        InMemoryConversationDirectory, InMemoryCrossReferenceStore, ScriptedCompletionService,
    },
    domain::{ConversationId, TranscriptMessage},
    services::{BatchResolver, ContentResolver, ExpansionService, ReferenceService},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Cross-reference store used by the integration tests.
pub type Store = InMemoryCrossReferenceStore<DefaultClock>;

/// Expansion service wired to in-memory adapters.
pub type Expander =
    ExpansionService<InMemoryConversationDirectory, ScriptedCompletionService, Store>;

/// In-memory collaborators for one test.
pub struct Workspace {
    /// Conversation directory.
    pub directory: Arc<InMemoryConversationDirectory>,
    /// Completion service answering with scripted replies.
    pub completion: Arc<ScriptedCompletionService>,
    /// Cross-reference store.
    pub store: Arc<Store>,
}

impl Workspace {
    /// Creates a conversation holding `messages` and returns its identifier.
    ///
    /// # Panics
    ///
    /// Panics if the in-memory directory rejects the conversation.
    #[must_use]
    pub fn conversation(
        &self,
        title: &str,
        messages: impl IntoIterator<Item = TranscriptMessage>,
    ) -> ConversationId {
        let id = self
            .directory
            .create_conversation(title)
            .expect("conversation is created");
        for message in messages {
            self.directory
                .append_message(id, message)
                .expect("message is appended");
        }
        id
    }

    /// Builds an expansion service over the workspace.
    #[must_use]
    pub fn expander(&self) -> Expander {
        let resolver =
            ContentResolver::new(Arc::clone(&self.directory), Arc::clone(&self.completion));
        ExpansionService::new(BatchResolver::new(resolver, Arc::clone(&self.store)))
    }

    /// Builds a reference service over the workspace.
    #[must_use]
    pub fn references(&self) -> ReferenceService<InMemoryConversationDirectory, Store> {
        ReferenceService::new(Arc::clone(&self.directory), Arc::clone(&self.store))
    }
}

/// Provides an empty workspace for each test.
#[fixture]
pub fn workspace() -> Workspace {
    Workspace {
        directory: Arc::new(InMemoryConversationDirectory::new()),
        completion: Arc::new(ScriptedCompletionService::new()),
        store: Arc::new(InMemoryCrossReferenceStore::new(Arc::new(DefaultClock))),
    }
}

/// Provides a workspace holding a short trip-planning conversation.
#[fixture]
pub fn trip_workspace() -> Workspace {
    let seeded = workspace();
    seeded.conversation(
        "Rome Trip",
        [
            TranscriptMessage::user("Where should we stay?"),
            TranscriptMessage::assistant("Monti is central and quiet."),
            TranscriptMessage::user("How many days?"),
            TranscriptMessage::assistant("Four days covers the highlights."),
        ],
    );
    seeded
}
