//! Shared fixtures for directive service tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;

use crate::directive::{
    adapters::memory::{
        InMemoryConversationDirectory, InMemoryCrossReferenceStore, ScriptedCompletionService,
    },
    domain::{ConversationId, TranscriptMessage},
    services::{BatchResolver, ContentResolver, ExpansionService, ReferenceService},
};

pub(super) type TestStore = InMemoryCrossReferenceStore<DefaultClock>;
pub(super) type TestResolver =
    ContentResolver<InMemoryConversationDirectory, ScriptedCompletionService>;
pub(super) type TestBatch =
    BatchResolver<InMemoryConversationDirectory, ScriptedCompletionService, TestStore>;
pub(super) type TestExpansion =
    ExpansionService<InMemoryConversationDirectory, ScriptedCompletionService, TestStore>;
pub(super) type TestReferences = ReferenceService<InMemoryConversationDirectory, TestStore>;

/// In-memory collaborators shared by a test.
pub(super) struct Harness {
    pub directory: Arc<InMemoryConversationDirectory>,
    pub completion: Arc<ScriptedCompletionService>,
    pub store: Arc<TestStore>,
}

impl Harness {
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

    pub fn resolver(&self) -> TestResolver {
        ContentResolver::new(Arc::clone(&self.directory), Arc::clone(&self.completion))
    }

    pub fn batch(&self) -> TestBatch {
        BatchResolver::new(self.resolver(), Arc::clone(&self.store))
    }

    pub fn expansion(&self) -> TestExpansion {
        ExpansionService::new(self.batch())
    }

    pub fn references(&self) -> TestReferences {
        ReferenceService::new(Arc::clone(&self.directory), Arc::clone(&self.store))
    }
}

#[fixture]
pub(super) fn harness() -> Harness {
    Harness {
        directory: Arc::new(InMemoryConversationDirectory::new()),
        completion: Arc::new(ScriptedCompletionService::new()),
        store: Arc::new(InMemoryCrossReferenceStore::new(Arc::new(DefaultClock))),
    }
}
