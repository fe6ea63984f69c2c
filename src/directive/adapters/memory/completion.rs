//! Scripted completion service for tests and offline runs.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::directive::ports::{CompletionError, CompletionResult, CompletionService};

/// A completion request as received by [`ScriptedCompletionService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    /// System prompt.
    pub system_prompt: String,
    /// User content.
    pub user_content: String,
}

/// Completion service answering from a queue of scripted replies.
///
/// Replies are consumed in order. Once the queue is empty the fallback reply
/// is returned, or a transport error when no fallback is set. Every request is
/// recorded.
#[derive(Debug, Clone, Default)]
pub struct ScriptedCompletionService {
    state: Arc<Mutex<ScriptState>>,
}

#[derive(Debug, Default)]
struct ScriptState {
    replies: VecDeque<CompletionResult<String>>,
    fallback: Option<String>,
    requests: Vec<CompletionRequest>,
}

impl ScriptedCompletionService {
    /// Creates a service with no replies.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service that answers every request with `reply`.
    #[must_use]
    pub fn answering(reply: impl Into<String>) -> Self {
        let service = Self::default();
        service.set_fallback(reply);
        service
    }

    /// Queues a successful reply.
    pub fn push_reply(&self, reply: impl Into<String>) {
        self.with_state(|state| state.replies.push_back(Ok(reply.into())));
    }

    /// Queues a failure.
    pub fn push_error(&self, error: CompletionError) {
        self.with_state(|state| state.replies.push_back(Err(error)));
    }

    /// Sets the reply used once the queue is empty.
    pub fn set_fallback(&self, reply: impl Into<String>) {
        self.with_state(|state| state.fallback = Some(reply.into()));
    }

    /// Returns every request received so far.
    #[must_use]
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.with_state(|state| state.requests.clone())
    }

    fn with_state<T>(&self, action: impl FnOnce(&mut ScriptState) -> T) -> T {
        let mut state = self
            .state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        action(&mut state)
    }
}

#[async_trait]
impl CompletionService for ScriptedCompletionService {
    async fn complete(&self, system_prompt: &str, user_content: &str) -> CompletionResult<String> {
        self.with_state(|state| {
            state.requests.push(CompletionRequest {
                system_prompt: system_prompt.to_owned(),
                user_content: user_content.to_owned(),
            });
            state.replies.pop_front().unwrap_or_else(|| {
                state.fallback.clone().ok_or_else(|| {
                    CompletionError::Transport("no scripted reply left".to_owned())
                })
            })
        })
    }
}
