//! `PostgreSQL` conversation directory.

use async_trait::async_trait;
use diesel::prelude::*;

use super::{
    blocking::{DirectivePgPool, run_blocking},
    models::{ConversationRow, MessageRow},
    schema::{chat_conversations, chat_messages},
};
use crate::directive::{
    domain::{ConversationId, ConversationSummary, Role, TranscriptMessage},
    ports::{ConversationDirectory, DirectoryError, DirectoryResult},
};

/// Directory reading `chat_conversations` and `chat_messages`.
#[derive(Debug, Clone)]
pub struct PostgresConversationDirectory {
    pool: DirectivePgPool,
}

impl PostgresConversationDirectory {
    /// Creates a directory from a `PostgreSQL` pool.
    #[must_use]
    pub const fn new(pool: DirectivePgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConversationDirectory for PostgresConversationDirectory {
    async fn list_conversations(&self) -> DirectoryResult<Vec<ConversationSummary>> {
        run_blocking(&self.pool, |connection| {
            let rows = chat_conversations::table
                .order((chat_conversations::created_at.asc(), chat_conversations::id.asc()))
                .select(ConversationRow::as_select())
                .load::<ConversationRow>(connection)
                .map_err(DirectoryError::persistence)?;
            Ok(rows.into_iter().map(row_to_summary).collect())
        })
        .await
    }

    async fn list_messages(
        &self,
        conversation_id: ConversationId,
    ) -> DirectoryResult<Vec<TranscriptMessage>> {
        run_blocking(&self.pool, move |connection| {
            let rows = chat_messages::table
                .filter(chat_messages::conversation_id.eq(conversation_id.into_inner()))
                .order((chat_messages::created_at.asc(), chat_messages::id.asc()))
                .select(MessageRow::as_select())
                .load::<MessageRow>(connection)
                .map_err(DirectoryError::persistence)?;
            Ok(rows.into_iter().map(row_to_message).collect())
        })
        .await
    }

    async fn find_conversation(
        &self,
        conversation_id: ConversationId,
    ) -> DirectoryResult<Option<ConversationSummary>> {
        run_blocking(&self.pool, move |connection| {
            let row = chat_conversations::table
                .filter(chat_conversations::id.eq(conversation_id.into_inner()))
                .select(ConversationRow::as_select())
                .first::<ConversationRow>(connection)
                .optional()
                .map_err(DirectoryError::persistence)?;
            Ok(row.map(row_to_summary))
        })
        .await
    }
}

fn row_to_summary(row: ConversationRow) -> ConversationSummary {
    ConversationSummary::new(ConversationId::from_uuid(row.id), row.title)
}

fn row_to_message(row: MessageRow) -> TranscriptMessage {
    TranscriptMessage::new(Role::from(row.role), row.content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directive::domain::format_transcript;
    use rstest::rstest;

    fn row(role: &str, content: &str) -> MessageRow {
        MessageRow {
            role: role.to_owned(),
            content: content.to_owned(),
        }
    }

    #[rstest]
    fn stored_roles_map_onto_transcript_messages() {
        let messages: Vec<TranscriptMessage> = [
            row("user", "how many orders?"),
            row("tool", "42"),
            row("assistant", "Forty-two."),
        ]
        .into_iter()
        .map(row_to_message)
        .collect();

        assert_eq!(
            messages.iter().map(|message| message.role.clone()).collect::<Vec<_>>(),
            [Role::User, Role::Other("tool".to_owned()), Role::Assistant]
        );
        assert_eq!(
            format_transcript(&messages),
            "User: how many orders?\nTool: 42\nAssistant: Forty-two."
        );
    }

    #[rstest]
    fn conversation_rows_keep_id_and_title() {
        let id = uuid::Uuid::new_v4();

        let summary = row_to_summary(ConversationRow {
            id,
            title: "Rome Trip".to_owned(),
        });

        assert_eq!(summary.id, ConversationId::from_uuid(id));
        assert_eq!(summary.title, "Rome Trip");
    }
}
