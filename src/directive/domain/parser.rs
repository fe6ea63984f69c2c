//! Directive scanner.
//!
//! A directive is `;<kind>`, at least one whitespace character, `@`, a
//! reference token made of anything but whitespace and `"`, then optionally
//! whitespace and a double-quoted question. Matches are found left to right
//! and never overlap. Anything that does not fit the grammar, including
//! unknown `;words`, stays literal text.

use serde::{Deserialize, Serialize};

use super::DirectiveKind;

/// Marker that opens every directive.
pub const DIRECTIVE_PREFIX: char = ';';

// `select` must come after its suffixed forms so the longest token wins.
const KIND_SCAN_ORDER: [DirectiveKind; 8] = [
    DirectiveKind::SelectUser,
    DirectiveKind::SelectAssistant,
    DirectiveKind::SelectLast,
    DirectiveKind::Select,
    DirectiveKind::Summarize,
    DirectiveKind::KeyPoints,
    DirectiveKind::Inject,
    DirectiveKind::Link,
];

/// A directive occurrence found in message text.
///
/// `start` and `end` are byte offsets into the scanned text and
/// `text[start..end] == raw`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedDirective {
    /// Directive kind.
    pub kind: DirectiveKind,
    /// Reference token written after `@`.
    pub conversation_ref: String,
    /// Quoted question, without the quotes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    /// Byte offset of the leading `;`.
    pub start: usize,
    /// Byte offset one past the last matched character.
    pub end: usize,
    /// Exact matched text.
    pub raw: String,
}

/// Finds every directive in `text`, in order of appearance.
///
/// # Examples
///
/// ```
/// use interlink::directive::domain::{DirectiveKind, parse_directives};
///
/// let found = parse_directives("see ;inject @Chat \"Why?\" please");
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].kind, DirectiveKind::Inject);
/// assert_eq!(found[0].question.as_deref(), Some("Why?"));
/// ```
#[must_use]
pub fn parse_directives(text: &str) -> Vec<ParsedDirective> {
    let mut directives = Vec::new();
    let mut cursor = 0;
    while let Some(found) = next_match(text, cursor) {
        cursor = found.end;
        directives.push(found.into_directive());
    }
    directives
}

/// Returns `true` when `text` contains at least one directive.
#[must_use]
pub fn has_directive(text: &str) -> bool {
    next_match(text, 0).is_some()
}

/// Writes the canonical directive text for the given parts.
///
/// The reference is written as given; callers turning a title into a
/// reference should use [`reference_token`](super::reference_token).
#[must_use]
pub fn format_directive(kind: DirectiveKind, reference: &str, question: Option<&str>) -> String {
    match question {
        Some(text) => format!("{DIRECTIVE_PREFIX}{kind} @{reference} \"{text}\""),
        None => format!("{DIRECTIVE_PREFIX}{kind} @{reference}"),
    }
}

struct Match<'a> {
    kind: DirectiveKind,
    reference: &'a str,
    question: Option<&'a str>,
    start: usize,
    end: usize,
    raw: &'a str,
}

impl Match<'_> {
    fn into_directive(self) -> ParsedDirective {
        ParsedDirective {
            kind: self.kind,
            conversation_ref: self.reference.to_owned(),
            question: self.question.map(str::to_owned),
            start: self.start,
            end: self.end,
            raw: self.raw.to_owned(),
        }
    }
}

fn next_match(text: &str, from: usize) -> Option<Match<'_>> {
    let window = text.get(from..)?;
    window
        .match_indices(DIRECTIVE_PREFIX)
        .find_map(|(offset, _)| match_at(text, from.saturating_add(offset)))
}

fn match_at(text: &str, start: usize) -> Option<Match<'_>> {
    let candidate = text.get(start..)?;
    let body = candidate.strip_prefix(DIRECTIVE_PREFIX)?;
    let (kind, after_kind) = match_kind(body)?;
    let after_at = skip_whitespace(after_kind)?.strip_prefix('@')?;

    let reference_len = after_at
        .find(|character: char| character.is_whitespace() || character == '"')
        .unwrap_or(after_at.len());
    if reference_len == 0 {
        return None;
    }
    let reference = after_at.get(..reference_len)?;
    let after_reference = after_at.get(reference_len..)?;

    let (question, tail) =
        match_question(after_reference).map_or((None, after_reference), |(question, tail)| {
            (Some(question), tail)
        });

    let end = text.len().saturating_sub(tail.len());
    let raw = text.get(start..end)?;
    Some(Match {
        kind,
        reference,
        question,
        start,
        end,
        raw,
    })
}

fn match_kind(body: &str) -> Option<(DirectiveKind, &str)> {
    KIND_SCAN_ORDER
        .into_iter()
        .find_map(|kind| body.strip_prefix(kind.as_str()).map(|rest| (kind, rest)))
}

/// Consumes one or more leading whitespace characters.
fn skip_whitespace(input: &str) -> Option<&str> {
    let rest = input.trim_start();
    (rest.len() < input.len()).then_some(rest)
}

/// Matches `<whitespace>"<question>"`, returning the question and the tail.
fn match_question(input: &str) -> Option<(&str, &str)> {
    let quoted = skip_whitespace(input)?.strip_prefix('"')?;
    let (question, tail) = quoted.split_once('"')?;
    Some((question, tail))
}
