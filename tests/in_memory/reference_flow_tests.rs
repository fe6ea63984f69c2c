//! Cross-references recorded while expanding messages.

use super::helpers::{Workspace, trip_workspace};
use interlink::directive::domain::DirectiveKind;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn expansion_links_source_to_targets(trip_workspace: Workspace) {
    let notes = trip_workspace.conversation("Notes", []);
    trip_workspace.completion.set_fallback("Monti.");

    trip_workspace
        .expander()
        .expand(
            ";link @Rome then ;inject @Rome \"Where?\" and ;select @Nowhere",
            Some(notes),
        )
        .await;

    let views = trip_workspace
        .references()
        .list_for(notes)
        .await
        .expect("references are listed");
    let commands: Vec<DirectiveKind> = views.iter().map(|view| view.command).collect();
    assert_eq!(commands, [DirectiveKind::Link, DirectiveKind::Inject]);
    assert!(views.iter().all(|view| view.target_title == "Rome Trip"));
    assert!(views.iter().all(|view| view.source_conversation_id == notes));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn target_sees_incoming_references(trip_workspace: Workspace) {
    let notes = trip_workspace.conversation("Notes", []);
    let expansion = trip_workspace
        .expander()
        .expand(";select:assistant @Rome", Some(notes))
        .await;
    let rome = expansion
        .resolved
        .first()
        .map(|resolved| resolved.conversation_id)
        .expect("rome resolves");

    let views = trip_workspace
        .references()
        .list_for(rome)
        .await
        .expect("references are listed");

    assert_eq!(views.len(), 1);
    assert_eq!(
        views.first().map(|view| view.target_title.as_str()),
        Some("Notes")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn clearing_outgoing_references_empties_source(trip_workspace: Workspace) {
    let notes = trip_workspace.conversation("Notes", []);
    trip_workspace
        .expander()
        .expand(";link @Rome ;select @Rome", Some(notes))
        .await;
    let references = trip_workspace.references();

    let removed = references
        .clear_outgoing(notes)
        .await
        .expect("references are cleared");

    assert_eq!(removed, 2);
    assert!(
        references
            .list_for(notes)
            .await
            .expect("references are listed")
            .is_empty()
    );
}
