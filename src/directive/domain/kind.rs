//! The closed set of directive kinds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Category of a directive, deciding how content is derived from the
/// referenced conversation.
///
/// # Examples
///
/// ```
/// use interlink::directive::domain::DirectiveKind;
///
/// let kind: DirectiveKind = "select:last".parse().expect("known kind");
/// assert_eq!(kind, DirectiveKind::SelectLast);
/// assert_eq!(kind.as_str(), "select:last");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DirectiveKind {
    /// Every message of the conversation.
    #[serde(rename = "select")]
    Select,
    /// Only the user messages.
    #[serde(rename = "select:user")]
    SelectUser,
    /// Only the assistant messages.
    #[serde(rename = "select:assistant")]
    SelectAssistant,
    /// The last user message and the last assistant message.
    #[serde(rename = "select:last")]
    SelectLast,
    /// A model-generated summary.
    #[serde(rename = "summarize")]
    Summarize,
    /// Model-extracted bullet-point takeaways.
    #[serde(rename = "keypoints")]
    KeyPoints,
    /// A model answer to a question about the conversation.
    #[serde(rename = "inject")]
    Inject,
    /// A relation between conversations with no inlined text.
    #[serde(rename = "link")]
    Link,
}

impl DirectiveKind {
    /// Every kind, in grammar order.
    pub const ALL: [Self; 8] = [
        Self::Select,
        Self::SelectUser,
        Self::SelectAssistant,
        Self::SelectLast,
        Self::Summarize,
        Self::KeyPoints,
        Self::Inject,
        Self::Link,
    ];

    /// Returns the token written after `;` in message text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::SelectUser => "select:user",
            Self::SelectAssistant => "select:assistant",
            Self::SelectLast => "select:last",
            Self::Summarize => "summarize",
            Self::KeyPoints => "keypoints",
            Self::Inject => "inject",
            Self::Link => "link",
        }
    }

    /// Returns the one-line description offered to users.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Select => "Pull all messages from a conversation",
            Self::SelectUser => "Pull only user messages",
            Self::SelectAssistant => "Pull only assistant messages",
            Self::SelectLast => "Pull the last user+assistant exchange",
            Self::Summarize => "Summarize a conversation into key points",
            Self::KeyPoints => "Extract bullet-point takeaways",
            Self::Inject => "Ask a question about a conversation",
            Self::Link => "Create a reference link between conversations",
        }
    }

    /// Returns `true` when resolving this kind calls the completion service.
    #[must_use]
    pub const fn needs_completion(self) -> bool {
        matches!(self, Self::Summarize | Self::KeyPoints | Self::Inject)
    }
}

impl fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no directive kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown directive kind '{0}'")]
pub struct ParseDirectiveKindError(pub String);

impl FromStr for DirectiveKind {
    type Err = ParseDirectiveKindError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| ParseDirectiveKindError(value.to_owned()))
    }
}

impl TryFrom<&str> for DirectiveKind {
    type Error = ParseDirectiveKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
