//! Content derivation settings.

use serde::Deserialize;

use super::ConfigError;

/// Character budget for transcript selections.
pub const DEFAULT_SELECT_CHAR_BUDGET: usize = 4000;
/// Length the model is asked to stay under for summaries and key points.
pub const DEFAULT_SUMMARY_CHAR_LIMIT: usize = 1000;
/// Question asked by `;inject` when the directive carries none.
pub const DEFAULT_QUESTION: &str = "What are the key insights from this conversation?";

/// Budgets and prompt templates used to derive directive content.
///
/// Templates are rendered with `minijinja`. Available variables:
///
/// - `summarize_prompt`, `keypoints_prompt`: `max_chars`
/// - `inject_prompt`: none
/// - `inject_content`: `transcript`, `question`
/// - `summary_content`: `title`, `summary`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResolutionConfig {
    /// Characters kept by `;select` variants before truncation.
    pub select_char_budget: usize,
    /// Length limit stated in model prompts.
    pub summary_char_limit: usize,
    /// Question used by `;inject` without a quoted question.
    pub default_question: String,
    /// System prompt for `;summarize`.
    pub summarize_prompt: String,
    /// System prompt for `;keypoints`.
    pub keypoints_prompt: String,
    /// System prompt for `;inject`.
    pub inject_prompt: String,
    /// User content sent for `;inject`.
    pub inject_content: String,
    /// Content produced by `;summarize` around the model output.
    pub summary_content: String,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            select_char_budget: DEFAULT_SELECT_CHAR_BUDGET,
            summary_char_limit: DEFAULT_SUMMARY_CHAR_LIMIT,
            default_question: DEFAULT_QUESTION.to_owned(),
            summarize_prompt: concat!(
                "Summarize the following conversation concisely. ",
                "Keep your response under {{ max_chars }} characters."
            )
            .to_owned(),
            keypoints_prompt: concat!(
                "Extract the key takeaways from this conversation as bullet points. ",
                "Keep your response under {{ max_chars }} characters."
            )
            .to_owned(),
            inject_prompt: concat!(
                "You are answering a question about a conversation. ",
                "Use the conversation content to provide a helpful answer."
            )
            .to_owned(),
            inject_content: "Conversation:\n{{ transcript }}\n\nQuestion: {{ question }}"
                .to_owned(),
            summary_content: "Summary of \"{{ title }}\": {{ summary }}".to_owned(),
        }
    }
}

impl ResolutionConfig {
    /// Checks budgets and template syntax.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a zero budget or a template that
    /// does not compile.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.select_char_budget == 0 {
            return Err(ConfigError::invalid(
                "resolution.select_char_budget must be positive",
            ));
        }
        if self.summary_char_limit == 0 {
            return Err(ConfigError::invalid(
                "resolution.summary_char_limit must be positive",
            ));
        }

        let mut environment = minijinja::Environment::new();
        let templates = [
            ("summarize_prompt", &self.summarize_prompt),
            ("keypoints_prompt", &self.keypoints_prompt),
            ("inject_prompt", &self.inject_prompt),
            ("inject_content", &self.inject_content),
            ("summary_content", &self.summary_content),
        ];
        for (name, source) in templates {
            environment
                .add_template(name, source)
                .map_err(|error| ConfigError::invalid(format!("resolution.{name}: {error}")))?;
        }
        Ok(())
    }
}
