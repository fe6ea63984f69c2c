//! Expanding every directive in a message in one pass.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::BatchResolver;
use crate::directive::{
    domain::{
        ConversationId, DirectiveRequest, ParsedDirective, ResolutionFailure, ResolvedDirective,
        parse_directives, rebuild,
    },
    ports::{CompletionService, ConversationDirectory, CrossReferenceStore},
};

/// A message with its directives replaced by their content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expansion {
    /// Rebuilt message text. Failed directives stay verbatim.
    pub text: String,
    /// Directives that resolved, one per distinct raw directive text.
    pub resolved: Vec<ResolvedDirective>,
    /// Directives that failed, one per distinct raw directive text.
    pub errors: Vec<ResolutionFailure>,
}

/// Parses, resolves and splices directives in message text.
#[derive(Clone)]
pub struct ExpansionService<D, C, S>
where
    D: ConversationDirectory,
    C: CompletionService,
    S: CrossReferenceStore,
{
    batch: BatchResolver<D, C, S>,
}

impl<D, C, S> ExpansionService<D, C, S>
where
    D: ConversationDirectory,
    C: CompletionService,
    S: CrossReferenceStore,
{
    /// Creates an expansion service.
    #[must_use]
    pub const fn new(batch: BatchResolver<D, C, S>) -> Self {
        Self { batch }
    }

    /// Expands every directive in `text`.
    ///
    /// Repeated directives with identical raw text are resolved once and
    /// replaced everywhere. A `;link` success is replaced by nothing. Text
    /// without directives comes back unchanged and no collaborator is called.
    pub async fn expand(&self, text: &str, source: Option<ConversationId>) -> Expansion {
        let directives = parse_directives(text);
        if directives.is_empty() {
            return Expansion {
                text: text.to_owned(),
                ..Expansion::default()
            };
        }

        let prepared: Vec<(&ParsedDirective, Result<DirectiveRequest, ResolutionFailure>)> =
            distinct(&directives)
                .into_iter()
                .map(|directive| {
                    let request = DirectiveRequest::try_from(directive).map_err(|error| {
                        ResolutionFailure::new(directive.kind, &directive.conversation_ref, &error)
                    });
                    (directive, request)
                })
                .collect();

        let requests: Vec<DirectiveRequest> = prepared
            .iter()
            .filter_map(|(_, request)| request.as_ref().ok().cloned())
            .collect();
        let mut outcomes = self.batch.resolve_each(&requests, source).await.into_iter();

        let mut expansion = Expansion::default();
        let mut replacements = HashMap::new();
        for (directive, request) in prepared {
            let outcome = match request {
                Ok(_) => outcomes.next(),
                Err(failure) => Some(Err(failure)),
            };
            match outcome {
                Some(Ok(resolved)) => {
                    replacements.insert(directive.raw.clone(), resolved.content.clone());
                    expansion.resolved.push(resolved);
                }
                Some(Err(failure)) => expansion.errors.push(failure),
                None => {}
            }
        }

        expansion.text = rebuild(text, &directives, &replacements);
        debug!(
            event = "directive.expansion_completed",
            directives = directives.len(),
            resolved = expansion.resolved.len(),
            failed = expansion.errors.len(),
            "message expanded"
        );
        expansion
    }
}

/// Keeps the first occurrence of each raw directive text.
fn distinct(directives: &[ParsedDirective]) -> Vec<&ParsedDirective> {
    let mut seen = HashSet::new();
    directives
        .iter()
        .filter(|directive| seen.insert(directive.raw.as_str()))
        .collect()
}
