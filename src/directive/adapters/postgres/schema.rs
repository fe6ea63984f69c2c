//! Diesel schema for chat conversations and their cross-references.

diesel::table! {
    /// Conversations with a human-assigned title.
    chat_conversations (id) {
        /// Conversation identifier.
        id -> Uuid,
        /// Conversation title.
        title -> Text,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Messages of a conversation.
    chat_messages (id) {
        /// Message identifier.
        id -> Uuid,
        /// Owning conversation.
        conversation_id -> Uuid,
        /// Author role (`user`, `assistant`, `system`).
        role -> Text,
        /// Plain-text body.
        content -> Text,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Relations recorded when one conversation pulls from another.
    chat_cross_references (id) {
        /// Record identifier.
        id -> Uuid,
        /// Conversation whose message carried the directive.
        source_conversation_id -> Uuid,
        /// Conversation the directive pulled from.
        target_conversation_id -> Uuid,
        /// Directive kind token.
        command -> Text,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(chat_messages -> chat_conversations (conversation_id));
diesel::allow_tables_to_appear_in_same_query!(chat_conversations, chat_messages);
