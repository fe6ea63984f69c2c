//! In-memory cross-reference store.

use async_trait::async_trait;
use mockable::Clock;
use std::sync::{Arc, RwLock};

use crate::directive::{
    domain::{ConversationId, CrossReference, CrossReferenceId, NewCrossReference},
    ports::{CrossReferenceError, CrossReferenceResult, CrossReferenceStore},
};

/// Thread-safe in-memory cross-reference store stamping records with `C`.
#[derive(Debug, Clone)]
pub struct InMemoryCrossReferenceStore<C>
where
    C: Clock + Send + Sync,
{
    clock: Arc<C>,
    records: Arc<RwLock<Vec<CrossReference>>>,
}

impl<C> InMemoryCrossReferenceStore<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty store.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self {
            clock,
            records: Arc::default(),
        }
    }

    fn filtered(
        &self,
        predicate: impl Fn(&CrossReference) -> bool,
    ) -> CrossReferenceResult<Vec<CrossReference>> {
        let records = self.records.read().map_err(|err| {
            CrossReferenceError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut matching: Vec<CrossReference> =
            records.iter().filter(|record| predicate(record)).cloned().collect();
        matching.sort_by_key(|record| record.created_at);
        Ok(matching)
    }
}

#[async_trait]
impl<C> CrossReferenceStore for InMemoryCrossReferenceStore<C>
where
    C: Clock + Send + Sync,
{
    async fn create(&self, reference: NewCrossReference) -> CrossReferenceResult<CrossReference> {
        let record = CrossReference {
            id: CrossReferenceId::new(),
            source_conversation_id: reference.source_conversation_id,
            target_conversation_id: reference.target_conversation_id,
            command: reference.command,
            created_at: self.clock.utc(),
        };
        let mut records = self.records.write().map_err(|err| {
            CrossReferenceError::persistence(std::io::Error::other(err.to_string()))
        })?;
        records.push(record.clone());
        Ok(record)
    }

    async fn find_by_source(
        &self,
        conversation_id: ConversationId,
    ) -> CrossReferenceResult<Vec<CrossReference>> {
        self.filtered(|record| record.source_conversation_id == conversation_id)
    }

    async fn find_by_target(
        &self,
        conversation_id: ConversationId,
    ) -> CrossReferenceResult<Vec<CrossReference>> {
        self.filtered(|record| record.target_conversation_id == conversation_id)
    }

    async fn find_touching(
        &self,
        conversation_id: ConversationId,
    ) -> CrossReferenceResult<Vec<CrossReference>> {
        self.filtered(|record| {
            record.source_conversation_id == conversation_id
                || record.target_conversation_id == conversation_id
        })
    }

    async fn delete_by_source(
        &self,
        conversation_id: ConversationId,
    ) -> CrossReferenceResult<usize> {
        let mut records = self.records.write().map_err(|err| {
            CrossReferenceError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let before = records.len();
        records.retain(|record| record.source_conversation_id != conversation_id);
        Ok(before.saturating_sub(records.len()))
    }
}
