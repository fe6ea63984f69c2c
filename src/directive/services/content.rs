//! Content derivation for a single directive.

use std::sync::Arc;

use minijinja::{Environment, context};
use tracing::{debug, info};

use crate::config::ResolutionConfig;
use crate::directive::{
    domain::{
        ConversationSummary, DirectiveError, DirectiveKind, DirectiveRequest, ResolvedDirective,
        Role, TranscriptMessage, by_role, format_transcript, last_exchange, resolve_by_title,
        truncate_chars,
    },
    ports::{CompletionService, ConversationDirectory},
};

/// Resolves a directive to the content it stands for.
///
/// The conversation is looked up by title on every call; nothing is cached
/// between directives.
#[derive(Clone)]
pub struct ContentResolver<D, C>
where
    D: ConversationDirectory,
    C: CompletionService,
{
    directory: Arc<D>,
    completion: Arc<C>,
    config: ResolutionConfig,
}

impl<D, C> ContentResolver<D, C>
where
    D: ConversationDirectory,
    C: CompletionService,
{
    /// Creates a resolver with default budgets and prompts.
    #[must_use]
    pub fn new(directory: Arc<D>, completion: Arc<C>) -> Self {
        Self::with_config(directory, completion, ResolutionConfig::default())
    }

    /// Creates a resolver with explicit budgets and prompts.
    #[must_use]
    pub const fn with_config(
        directory: Arc<D>,
        completion: Arc<C>,
        config: ResolutionConfig,
    ) -> Self {
        Self {
            directory,
            completion,
            config,
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &ResolutionConfig {
        &self.config
    }

    /// Resolves a validated request.
    ///
    /// # Errors
    ///
    /// See [`ContentResolver::resolve`].
    pub async fn resolve_request(
        &self,
        request: &DirectiveRequest,
    ) -> Result<ResolvedDirective, DirectiveError> {
        self.resolve(request.kind(), request.conversation_ref(), request.question())
            .await
    }

    /// Finds the conversation named by `conversation_ref` and derives the
    /// content for `kind` from its messages.
    ///
    /// # Errors
    ///
    /// Returns [`DirectiveError::NotFound`] or [`DirectiveError::Ambiguous`]
    /// when the reference does not name exactly one conversation, and
    /// [`DirectiveError::ResolutionFailed`] when the directory or the
    /// completion service fails.
    pub async fn resolve(
        &self,
        kind: DirectiveKind,
        conversation_ref: &str,
        question: Option<&str>,
    ) -> Result<ResolvedDirective, DirectiveError> {
        debug!(
            event = "directive.resolve_started",
            kind = %kind,
            reference = conversation_ref,
            "resolving directive"
        );

        let conversations = self
            .directory
            .list_conversations()
            .await
            .map_err(|error| DirectiveError::resolution_failed(error.to_string()))?;
        let target = resolve_by_title(conversation_ref, &conversations)?.clone();
        let messages = self
            .directory
            .list_messages(target.id)
            .await
            .map_err(|error| DirectiveError::resolution_failed(error.to_string()))?;

        let content = self.derive(kind, &target, &messages, question).await?;

        info!(
            event = "directive.resolve_completed",
            kind = %kind,
            conversation_id = %target.id,
            message_count = messages.len(),
            content_chars = content.chars().count(),
            "directive resolved"
        );

        Ok(ResolvedDirective {
            kind,
            conversation_id: target.id,
            conversation_title: target.title,
            content,
            message_count: messages.len(),
        })
    }

    async fn derive(
        &self,
        kind: DirectiveKind,
        target: &ConversationSummary,
        messages: &[TranscriptMessage],
        question: Option<&str>,
    ) -> Result<String, DirectiveError> {
        match kind {
            DirectiveKind::Select => Ok(self.select(messages.iter())),
            DirectiveKind::SelectUser => Ok(self.select(by_role(messages, Role::User))),
            DirectiveKind::SelectAssistant => {
                Ok(self.select(by_role(messages, Role::Assistant)))
            }
            DirectiveKind::SelectLast => Ok(self.select(last_exchange(messages))),
            DirectiveKind::Summarize => {
                let prompt = render(
                    &self.config.summarize_prompt,
                    context! { max_chars => self.config.summary_char_limit },
                )?;
                let summary = self.complete(&prompt, &format_transcript(messages)).await?;
                render(
                    &self.config.summary_content,
                    context! { title => &target.title, summary => summary },
                )
            }
            DirectiveKind::KeyPoints => {
                let prompt = render(
                    &self.config.keypoints_prompt,
                    context! { max_chars => self.config.summary_char_limit },
                )?;
                self.complete(&prompt, &format_transcript(messages)).await
            }
            DirectiveKind::Inject => {
                let prompt = render(&self.config.inject_prompt, context! {})?;
                let content = render(
                    &self.config.inject_content,
                    context! {
                        transcript => format_transcript(messages),
                        question => question.unwrap_or(&self.config.default_question),
                    },
                )?;
                self.complete(&prompt, &content).await
            }
            DirectiveKind::Link => Ok(String::new()),
        }
    }

    fn select<'a>(&self, messages: impl IntoIterator<Item = &'a TranscriptMessage>) -> String {
        truncate_chars(&format_transcript(messages), self.config.select_char_budget)
    }

    async fn complete(
        &self,
        system_prompt: &str,
        user_content: &str,
    ) -> Result<String, DirectiveError> {
        self.completion
            .complete(system_prompt, user_content)
            .await
            .map_err(|error| DirectiveError::resolution_failed(error.to_string()))
    }
}

fn render(template: &str, values: minijinja::Value) -> Result<String, DirectiveError> {
    Environment::new()
        .render_str(template, values)
        .map_err(|error| DirectiveError::resolution_failed(error.to_string()))
}
