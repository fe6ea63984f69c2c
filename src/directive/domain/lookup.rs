//! Fuzzy conversation lookup by typed reference.
//!
//! References are matched by case-insensitive title prefix after turning
//! dashes into spaces. The lookup scans the whole conversation list, which is
//! fine for per-user conversation counts but does not scale to a shared index.

use super::{ConversationSummary, DirectiveError};

/// Normalises a typed reference for comparison with titles.
///
/// # Examples
///
/// ```
/// use interlink::directive::domain::normalize_reference;
///
/// assert_eq!(normalize_reference("My-Cool-Chat"), "my cool chat");
/// ```
#[must_use]
pub fn normalize_reference(reference: &str) -> String {
    reference.replace('-', " ").to_lowercase()
}

/// Turns a title into the reference token written after `@`.
///
/// Whitespace runs become a single `-`.
///
/// # Examples
///
/// ```
/// use interlink::directive::domain::reference_token;
///
/// assert_eq!(reference_token("Trip  to Rome"), "Trip-to-Rome");
/// ```
#[must_use]
pub fn reference_token(title: &str) -> String {
    title.split_whitespace().collect::<Vec<_>>().join("-")
}

/// Resolves `reference` to exactly one conversation.
///
/// A single prefix match wins outright. Among several prefix matches, a title
/// equal to the normalised reference wins.
///
/// # Errors
///
/// Returns [`DirectiveError::NotFound`] when no title matches and
/// [`DirectiveError::Ambiguous`] when several match without an exact title.
pub fn resolve_by_title<'a>(
    reference: &str,
    conversations: &'a [ConversationSummary],
) -> Result<&'a ConversationSummary, DirectiveError> {
    let needle = normalize_reference(reference);
    let matches: Vec<(&ConversationSummary, String)> = conversations
        .iter()
        .map(|conversation| (conversation, conversation.title.to_lowercase()))
        .filter(|(_, folded)| folded.starts_with(&needle))
        .collect();

    match matches.as_slice() {
        [] => Err(DirectiveError::NotFound(reference.to_owned())),
        [(only, _)] => Ok(*only),
        many => many
            .iter()
            .find(|(_, folded)| *folded == needle)
            .map(|(exact, _)| *exact)
            .ok_or_else(|| DirectiveError::Ambiguous {
                reference: reference.to_owned(),
                matches: many
                    .iter()
                    .map(|(conversation, _)| conversation.title.clone())
                    .collect(),
            }),
    }
}
