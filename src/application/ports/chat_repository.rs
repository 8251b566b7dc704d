use async_trait::async_trait;

use crate::domain::{Chat, ChatId, Feedback, FileRec, Message};

use super::RepositoryError;

#[async_trait]
pub trait ChatRepository: Send + Sync {
    /// Persists an analysis result as one transaction: the chat, its user and
    /// assistant messages, and one file record per uploaded filename.
    async fn record_analysis(
        &self,
        chat: &Chat,
        messages: &[Message],
        files: &[FileRec],
    ) -> Result<(), RepositoryError>;

    async fn get_chat(&self, id: ChatId) -> Result<Option<Chat>, RepositoryError>;

    /// Chats ordered by last update, most recent first.
    async fn list_recent(&self, limit: usize) -> Result<Vec<Chat>, RepositoryError>;

    /// Messages of a chat in ascending creation order.
    async fn get_messages(&self, chat_id: ChatId) -> Result<Vec<Message>, RepositoryError>;

    async fn add_feedback(&self, feedback: &Feedback) -> Result<(), RepositoryError>;
}
