//! World state for directive batch scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use interlink::directive::{
    adapters::memory::{
        InMemoryConversationDirectory, InMemoryCrossReferenceStore, ScriptedCompletionService,
    },
    domain::ConversationId,
    services::{BatchResolver, ContentResolver, Expansion, ExpansionService},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Store type shared by the scenarios.
pub type Store = InMemoryCrossReferenceStore<DefaultClock>;

/// State carried between steps.
pub struct DirectiveWorld {
    /// Conversation directory.
    pub directory: Arc<InMemoryConversationDirectory>,
    /// Scripted completion service.
    pub completion: Arc<ScriptedCompletionService>,
    /// Cross-reference store.
    pub store: Arc<Store>,
    /// Conversation identifiers by title.
    pub conversations: HashMap<String, ConversationId>,
    /// Conversation the message is written in.
    pub source: Option<ConversationId>,
    /// Result of the last expansion.
    pub expansion: Option<Expansion>,
}

impl Default for DirectiveWorld {
    fn default() -> Self {
        Self {
            directory: Arc::new(InMemoryConversationDirectory::new()),
            completion: Arc::new(ScriptedCompletionService::new()),
            store: Arc::new(InMemoryCrossReferenceStore::new(Arc::new(DefaultClock))),
            conversations: HashMap::new(),
            source: None,
            expansion: None,
        }
    }
}

impl DirectiveWorld {
    /// Builds an expansion service over the world's adapters.
    #[must_use]
    pub fn expander(
        &self,
    ) -> ExpansionService<InMemoryConversationDirectory, ScriptedCompletionService, Store> {
        let resolver =
            ContentResolver::new(Arc::clone(&self.directory), Arc::clone(&self.completion));
        ExpansionService::new(BatchResolver::new(resolver, Arc::clone(&self.store)))
    }

    /// Returns the identifier of the conversation titled `title`.
    ///
    /// # Errors
    ///
    /// Returns an error when no such conversation was created.
    pub fn conversation(&self, title: &str) -> Result<ConversationId, eyre::Report> {
        self.conversations
            .get(title)
            .copied()
            .ok_or_else(|| eyre::eyre!("no conversation titled '{title}'"))
    }

    /// Returns the last expansion.
    ///
    /// # Errors
    ///
    /// Returns an error when no message was expanded yet.
    pub fn expansion(&self) -> Result<&Expansion, eyre::Report> {
        self.expansion
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no message was expanded"))
    }
}

/// Provides a fresh world for each scenario.
#[fixture]
pub fn world() -> DirectiveWorld {
    DirectiveWorld::default()
}

/// Runs `future` to completion on the scenario's runtime.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
