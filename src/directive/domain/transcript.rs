//! Transcript rendering for directive content.

use super::{Role, TranscriptMessage};

/// Suffix appended to content cut at the character budget.
pub const TRUNCATION_SUFFIX: &str = " [truncated]";

/// Renders messages as `"<Role>: <content>"` lines joined by newlines.
///
/// # Examples
///
/// ```
/// use interlink::directive::domain::{TranscriptMessage, format_transcript};
///
/// let messages = [TranscriptMessage::user("Hello"), TranscriptMessage::assistant("Hi")];
/// assert_eq!(format_transcript(&messages), "User: Hello\nAssistant: Hi");
/// ```
#[must_use]
pub fn format_transcript<'a>(messages: impl IntoIterator<Item = &'a TranscriptMessage>) -> String {
    messages
        .into_iter()
        .map(|message| format!("{}: {}", message.role.label(), message.content))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Returns the messages written by `role`, in order.
pub fn by_role(
    messages: &[TranscriptMessage],
    role: Role,
) -> impl Iterator<Item = &TranscriptMessage> {
    messages.iter().filter(move |message| message.role == role)
}

/// Returns the last user message followed by the last assistant message.
///
/// Each side is looked up independently from the end and is omitted when the
/// conversation has no message with that role.
#[must_use]
pub fn last_exchange(messages: &[TranscriptMessage]) -> Vec<&TranscriptMessage> {
    [Role::User, Role::Assistant]
        .into_iter()
        .filter_map(|role| messages.iter().rev().find(|message| message.role == role))
        .collect()
}

/// Cuts `text` after `budget` characters and appends [`TRUNCATION_SUFFIX`].
///
/// Text within the budget is returned unchanged. The cut is not aware of word
/// boundaries.
#[must_use]
pub fn truncate_chars(text: &str, budget: usize) -> String {
    let cut = text
        .char_indices()
        .nth(budget)
        .and_then(|(offset, _)| text.get(..offset));
    cut.map_or_else(|| text.to_owned(), |kept| format!("{kept}{TRUNCATION_SUFFIX}"))
}
