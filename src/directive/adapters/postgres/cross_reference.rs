//! `PostgreSQL` cross-reference store.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::Error as DieselError;
use mockable::Clock;
use std::sync::Arc;

use super::{
    blocking::{DirectivePgPool, run_blocking},
    models::{CrossReferenceRow, NewCrossReferenceRow},
    schema::chat_cross_references,
};
use crate::directive::{
    domain::{
        ConversationId, CrossReference, CrossReferenceId, DirectiveKind, NewCrossReference,
        ParseDirectiveKindError,
    },
    ports::{CrossReferenceError, CrossReferenceResult, CrossReferenceStore},
};

/// Store backed by `chat_cross_references`.
#[derive(Debug, Clone)]
pub struct PostgresCrossReferenceStore<C>
where
    C: Clock + Send + Sync,
{
    pool: DirectivePgPool,
    clock: Arc<C>,
}

impl<C> PostgresCrossReferenceStore<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a store from a `PostgreSQL` pool.
    #[must_use]
    pub const fn new(pool: DirectivePgPool, clock: Arc<C>) -> Self {
        Self { pool, clock }
    }

    async fn load(&self, scope: Scope) -> CrossReferenceResult<Vec<CrossReference>> {
        run_blocking(&self.pool, move |connection| {
            let query = chat_cross_references::table.into_boxed();
            let scoped = match scope {
                Scope::Source(id) => {
                    query.filter(chat_cross_references::source_conversation_id.eq(id))
                }
                Scope::Target(id) => {
                    query.filter(chat_cross_references::target_conversation_id.eq(id))
                }
                Scope::Touching(id) => query.filter(
                    chat_cross_references::source_conversation_id
                        .eq(id)
                        .or(chat_cross_references::target_conversation_id.eq(id)),
                ),
            };
            let rows = scoped
                .order((
                    chat_cross_references::created_at.asc(),
                    chat_cross_references::id.asc(),
                ))
                .select(CrossReferenceRow::as_select())
                .load::<CrossReferenceRow>(connection)
                .map_err(CrossReferenceError::persistence)?;
            rows.into_iter().map(row_to_reference).collect()
        })
        .await
    }
}

/// Which side of the relation a lookup matches.
#[derive(Debug, Clone, Copy)]
enum Scope {
    Source(uuid::Uuid),
    Target(uuid::Uuid),
    Touching(uuid::Uuid),
}

#[async_trait]
impl<C> CrossReferenceStore for PostgresCrossReferenceStore<C>
where
    C: Clock + Send + Sync,
{
    async fn create(&self, reference: NewCrossReference) -> CrossReferenceResult<CrossReference> {
        let now = self.clock.utc();
        let new_row = NewCrossReferenceRow {
            id: CrossReferenceId::new().into_inner(),
            source_conversation_id: reference.source_conversation_id.into_inner(),
            target_conversation_id: reference.target_conversation_id.into_inner(),
            command: reference.command.as_str().to_owned(),
            created_at: now,
            updated_at: now,
        };

        run_blocking(&self.pool, move |connection| {
            let row = diesel::insert_into(chat_cross_references::table)
                .values(&new_row)
                .returning(CrossReferenceRow::as_returning())
                .get_result::<CrossReferenceRow>(connection)
                .map_err(|err| match err {
                    DieselError::NotFound => CrossReferenceError::NotCreated,
                    other => CrossReferenceError::persistence(other),
                })?;
            row_to_reference(row)
        })
        .await
    }

    async fn find_by_source(
        &self,
        conversation_id: ConversationId,
    ) -> CrossReferenceResult<Vec<CrossReference>> {
        self.load(Scope::Source(conversation_id.into_inner())).await
    }

    async fn find_by_target(
        &self,
        conversation_id: ConversationId,
    ) -> CrossReferenceResult<Vec<CrossReference>> {
        self.load(Scope::Target(conversation_id.into_inner())).await
    }

    async fn find_touching(
        &self,
        conversation_id: ConversationId,
    ) -> CrossReferenceResult<Vec<CrossReference>> {
        self.load(Scope::Touching(conversation_id.into_inner())).await
    }

    async fn delete_by_source(
        &self,
        conversation_id: ConversationId,
    ) -> CrossReferenceResult<usize> {
        let id = conversation_id.into_inner();
        run_blocking(&self.pool, move |connection| {
            diesel::delete(
                chat_cross_references::table
                    .filter(chat_cross_references::source_conversation_id.eq(id)),
            )
            .execute(connection)
            .map_err(CrossReferenceError::persistence)
        })
        .await
    }
}

fn row_to_reference(row: CrossReferenceRow) -> CrossReferenceResult<CrossReference> {
    let command: DirectiveKind = row.command.parse().map_err(|err: ParseDirectiveKindError| {
        CrossReferenceError::InvalidRecord(err.to_string())
    })?;
    Ok(CrossReference {
        id: CrossReferenceId::from_uuid(row.id),
        source_conversation_id: ConversationId::from_uuid(row.source_conversation_id),
        target_conversation_id: ConversationId::from_uuid(row.target_conversation_id),
        command,
        created_at: row.created_at,
    })
}
