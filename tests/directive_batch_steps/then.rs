//! Then steps for directive batch scenarios.

use super::world::{DirectiveWorld, run_async};
use interlink::directive::ports::CrossReferenceStore;
use rstest_bdd_macros::then;

#[then("{resolved:usize} directives resolve and {failed:usize} directives fail")]
fn outcome_counts(
    world: &mut DirectiveWorld,
    resolved: usize,
    failed: usize,
) -> Result<(), eyre::Report> {
    let expansion = world.expansion()?;
    if expansion.resolved.len() != resolved || expansion.errors.len() != failed {
        return Err(eyre::eyre!(
            "expected {resolved} resolved and {failed} failed, found {} and {}",
            expansion.resolved.len(),
            expansion.errors.len()
        ));
    }
    Ok(())
}

#[then(r#"the failure for "{reference}" reads "{message}""#)]
fn failure_message(
    world: &mut DirectiveWorld,
    reference: String,
    message: String,
) -> Result<(), eyre::Report> {
    let failure = world
        .expansion()?
        .errors
        .iter()
        .find(|failure| failure.conversation_ref == reference)
        .ok_or_else(|| eyre::eyre!("no failure recorded for '{reference}'"))?;
    assert_eq!(failure.message, message);
    Ok(())
}

#[then(r#"the expanded text is "{text}""#)]
fn expanded_text(world: &mut DirectiveWorld, text: String) -> Result<(), eyre::Report> {
    assert_eq!(world.expansion()?.text, text);
    Ok(())
}

#[then(r#"the expanded text ends with "{suffix}""#)]
fn expanded_text_suffix(world: &mut DirectiveWorld, suffix: String) -> Result<(), eyre::Report> {
    let expanded = &world.expansion()?.text;
    if !expanded.ends_with(&suffix) {
        return Err(eyre::eyre!("'{expanded}' does not end with '{suffix}'"));
    }
    Ok(())
}

#[then(r#"the source links to "{title}" {count:usize} times"#)]
fn source_links(world: &mut DirectiveWorld, title: String, count: usize) -> Result<(), eyre::Report> {
    let source = world
        .source
        .ok_or_else(|| eyre::eyre!("no source conversation was created"))?;
    let target = world.conversation(&title)?;
    let references = run_async(world.store.find_by_source(source))
        .map_err(|err| eyre::eyre!("find_by_source failed: {err}"))?;
    let linked = references
        .iter()
        .filter(|reference| reference.target_conversation_id == target)
        .count();
    if linked != count {
        return Err(eyre::eyre!("expected {count} links to '{title}', found {linked}"));
    }
    Ok(())
}

#[then(r#""{title}" has no cross-references"#)]
fn no_references(world: &mut DirectiveWorld, title: String) -> Result<(), eyre::Report> {
    let conversation = world.conversation(&title)?;
    let references = run_async(world.store.find_touching(conversation))
        .map_err(|err| eyre::eyre!("find_touching failed: {err}"))?;
    if !references.is_empty() {
        return Err(eyre::eyre!(
            "expected no references for '{title}', found {}",
            references.len()
        ));
    }
    Ok(())
}
