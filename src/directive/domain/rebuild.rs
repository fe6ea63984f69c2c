//! Splicing resolved content back into message text.

use std::collections::HashMap;
use std::hash::BuildHasher;

use super::{ParsedDirective, parse_directives};

/// Rebuilds `text` with each directive replaced by the entry stored under its
/// raw text.
///
/// Directives without an entry keep their original text. Splices run from the
/// last directive to the first so that every offset still points into the
/// untouched prefix of the string. A directive whose recorded span does not
/// hold its raw text in `text` is skipped.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use interlink::directive::domain::{parse_directives, rebuild};
///
/// let text = "a ;select @A b ;link @B c";
/// let directives = parse_directives(text);
/// let replacements = HashMap::from([(";select @A".to_owned(), "[A]".to_owned())]);
///
/// assert_eq!(rebuild(text, &directives, &replacements), "a [A] b ;link @B c");
/// ```
#[must_use]
pub fn rebuild<S: BuildHasher>(
    text: &str,
    directives: &[ParsedDirective],
    replacements: &HashMap<String, String, S>,
) -> String {
    let mut ordered: Vec<&ParsedDirective> = directives.iter().collect();
    ordered.sort_by(|left, right| right.start.cmp(&left.start));

    let mut result = text.to_owned();
    for directive in ordered {
        let Some(replacement) = replacements.get(&directive.raw) else {
            continue;
        };
        if result.get(directive.start..directive.end) != Some(directive.raw.as_str()) {
            continue;
        }
        result.replace_range(directive.start..directive.end, replacement);
    }
    result
}

/// Parses `text` and replaces every directive found in the map.
#[must_use]
pub fn replace_directives<S: BuildHasher>(
    text: &str,
    replacements: &HashMap<String, String, S>,
) -> String {
    rebuild(text, &parse_directives(text), replacements)
}

/// Removes every directive from `text`.
///
/// Whitespace runs in the remainder collapse to single spaces and the result
/// is trimmed, so a message made only of directives strips to `""`.
#[must_use]
pub fn strip_directives(text: &str) -> String {
    let directives = parse_directives(text);
    let removals: HashMap<String, String> = directives
        .iter()
        .map(|directive| (directive.raw.clone(), String::new()))
        .collect();
    let remainder = rebuild(text, &directives, &removals);
    remainder.split_whitespace().collect::<Vec<_>>().join(" ")
}
