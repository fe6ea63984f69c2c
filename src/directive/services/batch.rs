//! Batch resolution with per-directive failures and cross-reference recording.

use std::sync::Arc;

use tracing::{info, warn};

use super::ContentResolver;
use crate::directive::{
    domain::{
        BatchOutcome, ConversationId, DirectiveOutcome, DirectiveRequest, NewCrossReference,
        ResolutionFailure, ResolvedDirective,
    },
    ports::{CompletionService, ConversationDirectory, CrossReferenceStore},
};

/// Resolves directive batches one request at a time, in input order.
///
/// A failing directive becomes an error entry and never stops the batch.
/// When the batch runs on behalf of a source conversation, every success is
/// recorded as a cross-reference from that conversation to the target.
#[derive(Clone)]
pub struct BatchResolver<D, C, S>
where
    D: ConversationDirectory,
    C: CompletionService,
    S: CrossReferenceStore,
{
    resolver: ContentResolver<D, C>,
    references: Arc<S>,
}

impl<D, C, S> BatchResolver<D, C, S>
where
    D: ConversationDirectory,
    C: CompletionService,
    S: CrossReferenceStore,
{
    /// Creates a batch resolver.
    #[must_use]
    pub const fn new(resolver: ContentResolver<D, C>, references: Arc<S>) -> Self {
        Self {
            resolver,
            references,
        }
    }

    /// Returns the single-directive resolver.
    #[must_use]
    pub const fn resolver(&self) -> &ContentResolver<D, C> {
        &self.resolver
    }

    /// Resolves every request and splits the outcomes into successes and
    /// failures.
    pub async fn resolve_batch(
        &self,
        requests: &[DirectiveRequest],
        source: Option<ConversationId>,
    ) -> BatchOutcome {
        let batch = BatchOutcome::from_outcomes(self.resolve_each(requests, source).await);
        if !batch.is_complete() {
            warn!(
                event = "directives.batch_partial_failure",
                resolved = batch.resolved.len(),
                failed = batch.errors.len(),
                "directive batch finished with failures"
            );
        }
        batch
    }

    /// Resolves every request and returns one outcome per request, in input
    /// order.
    pub async fn resolve_each(
        &self,
        requests: &[DirectiveRequest],
        source: Option<ConversationId>,
    ) -> Vec<DirectiveOutcome> {
        let mut outcomes = Vec::with_capacity(requests.len());
        for request in requests {
            outcomes.push(self.resolve_one(request, source).await);
        }
        outcomes
    }

    async fn resolve_one(
        &self,
        request: &DirectiveRequest,
        source: Option<ConversationId>,
    ) -> DirectiveOutcome {
        match self.resolver.resolve_request(request).await {
            Ok(resolved) => {
                if let Some(source_id) = source {
                    self.record_reference(source_id, &resolved).await;
                }
                Ok(resolved)
            }
            Err(error) => {
                warn!(
                    event = "directive.resolve_failed",
                    kind = %request.kind(),
                    reference = request.conversation_ref(),
                    code = error.code(),
                    error = %error,
                    "directive could not be resolved"
                );
                Err(ResolutionFailure::for_request(request, &error))
            }
        }
    }

    async fn record_reference(&self, source: ConversationId, resolved: &ResolvedDirective) {
        let reference = NewCrossReference::new(source, resolved.conversation_id, resolved.kind);
        match self.references.create(reference).await {
            Ok(stored) => info!(
                event = "directive.cross_reference_created",
                id = %stored.id,
                source = %stored.source_conversation_id,
                target = %stored.target_conversation_id,
                command = %stored.command,
                "cross-reference recorded"
            ),
            Err(error) => warn!(
                event = "directive.cross_reference_failed",
                source = %source,
                target = %resolved.conversation_id,
                command = %resolved.kind,
                error = %error,
                "cross-reference could not be recorded"
            ),
        }
    }
}
