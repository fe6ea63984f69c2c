//! Expansion of whole messages against in-memory adapters.

use super::helpers::{Workspace, trip_workspace};
use interlink::directive::domain::{DirectiveKind, has_directive, strip_directives};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn mixed_directives_expand_in_one_pass(trip_workspace: Workspace) {
    trip_workspace.completion.push_reply("Stay in Monti for four days.");
    let text = "Recap: ;summarize @rome-trip\nLast: ;select:last @Rome";
    assert!(has_directive(text));

    let expansion = trip_workspace.expander().expand(text, None).await;

    assert_eq!(
        expansion.text,
        "Recap: Summary of \"Rome Trip\": Stay in Monti for four days.\n\
         Last: User: How many days?\nAssistant: Four days covers the highlights."
    );
    assert_eq!(expansion.resolved.len(), 2);
    assert!(expansion.errors.is_empty());
    assert!(!has_directive(&expansion.text));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn partial_failure_keeps_failed_text(trip_workspace: Workspace) {
    let text = "A ;select:user @Rome B ;keypoints @Berlin C";

    let expansion = trip_workspace.expander().expand(text, None).await;

    assert_eq!(
        expansion.text,
        "A User: Where should we stay?\nUser: How many days? B ;keypoints @Berlin C"
    );
    let failure = expansion.errors.first().expect("one failure");
    assert_eq!(failure.kind, DirectiveKind::KeyPoints);
    assert_eq!(failure.conversation_ref, "Berlin");
    assert!(trip_workspace.completion.requests().is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn ambiguous_titles_report_every_match(trip_workspace: Workspace) {
    trip_workspace.conversation("Rome Budget", []);

    let expansion = trip_workspace
        .expander()
        .expand(";select @Rome", None)
        .await;

    assert_eq!(expansion.text, ";select @Rome");
    assert_eq!(
        expansion.errors.first().map(|failure| failure.message.as_str()),
        Some("Ambiguous conversation title: \"Rome\" matches: Rome Trip, Rome Budget")
    );
}

#[rstest]
fn stripping_removes_directive_markup() {
    assert_eq!(
        strip_directives("Plan ;inject @Rome \"Budget?\" today"),
        "Plan today"
    );
}
