//! Titles for conversations started by a message.

use super::{parse_directives, strip_directives};

/// Longest generated title before the ellipsis, in characters.
pub const MAX_TITLE_CHARS: usize = 50;

/// Derives a conversation title from the first message sent to it.
///
/// The prose around directives is preferred. A message made only of
/// directives is titled after its first one, as `"<kind> — <reference>"`
/// with dashes in the reference read as spaces.
///
/// # Examples
///
/// ```
/// use interlink::directive::domain::title_from_message;
///
/// assert_eq!(title_from_message("Compare ;select @Rome-Trip"), "Compare");
/// assert_eq!(title_from_message(";summarize @Rome-Trip"), "summarize — Rome Trip");
/// ```
#[must_use]
pub fn title_from_message(content: &str) -> String {
    let prose = strip_directives(content);
    if !prose.is_empty() {
        return clip(&prose);
    }

    if let Some(first) = parse_directives(content).first() {
        let reference = first.conversation_ref.replace('-', " ");
        return clip(&format!("{} — {reference}", first.kind));
    }

    clip(content.trim())
}

fn clip(title: &str) -> String {
    match title.char_indices().nth(MAX_TITLE_CHARS) {
        Some((offset, _)) => format!("{}...", title.get(..offset).unwrap_or(title)),
        None => title.to_owned(),
    }
}
