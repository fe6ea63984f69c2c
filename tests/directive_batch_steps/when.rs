//! When steps for directive batch scenarios.

use super::world::{DirectiveWorld, run_async};
use rstest_bdd_macros::when;

#[when(r#"the message "{text}" is expanded from the source"#)]
fn expand_from_source(world: &mut DirectiveWorld, text: String) -> Result<(), eyre::Report> {
    let source = world
        .source
        .ok_or_else(|| eyre::eyre!("no source conversation was created"))?;
    let expansion = run_async(world.expander().expand(&text, Some(source)));
    world.expansion = Some(expansion);
    Ok(())
}

#[when(r#"the message "{text}" is expanded without a source"#)]
fn expand_without_source(world: &mut DirectiveWorld, text: String) {
    let expansion = run_async(world.expander().expand(&text, None));
    world.expansion = Some(expansion);
}
