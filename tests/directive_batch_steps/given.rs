//! Given steps for directive batch scenarios.

use super::world::DirectiveWorld;
use interlink::directive::{domain::TranscriptMessage, ports::CompletionError};
use rstest_bdd_macros::given;

#[given(r#"a conversation "{title}" where the user asked "{question}""#)]
fn conversation_with_question(
    world: &mut DirectiveWorld,
    title: String,
    question: String,
) -> Result<(), eyre::Report> {
    let id = world
        .directory
        .create_conversation(title.as_str())
        .map_err(|err| eyre::eyre!("create conversation failed: {err}"))?;
    world
        .directory
        .append_message(id, TranscriptMessage::user(question))
        .map_err(|err| eyre::eyre!("append message failed: {err}"))?;
    world.conversations.insert(title, id);
    Ok(())
}

#[given(r#"a source conversation "{title}""#)]
fn source_conversation(world: &mut DirectiveWorld, title: String) -> Result<(), eyre::Report> {
    let id = world
        .directory
        .create_conversation(title.as_str())
        .map_err(|err| eyre::eyre!("create conversation failed: {err}"))?;
    world.conversations.insert(title, id);
    world.source = Some(id);
    Ok(())
}

#[given(r#"the completion service answers "{reply}""#)]
fn completion_answers(world: &mut DirectiveWorld, reply: String) {
    world.completion.set_fallback(reply);
}

#[given("the completion service rejects requests with status {status:u16}")]
fn completion_rejects(world: &mut DirectiveWorld, status: u16) {
    world.completion.push_error(CompletionError::Status(status));
}
