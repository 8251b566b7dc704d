use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use tracing::instrument;
use uuid::Uuid;

use crate::application::ports::{ChatRepository, RepositoryError};
use crate::domain::{Chat, ChatId, Feedback, FileRec, Message, MessageId, MessageRole};

pub struct PgChatRepository {
    pool: PgPool,
}

impl PgChatRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn chat_from_row(row: &sqlx::postgres::PgRow) -> Chat {
    Chat {
        id: ChatId::from_uuid(row.get::<Uuid, _>("id")),
        title: row.get::<Option<String>, _>("title"),
        confidential: row.get::<bool, _>("confidential"),
        created_at: row.get::<DateTime<Utc>, _>("created_at"),
        updated_at: row.get::<DateTime<Utc>, _>("updated_at"),
    }
}

#[async_trait]
impl ChatRepository for PgChatRepository {
    #[instrument(skip(self, chat, messages, files), fields(chat_id = %chat.id))]
    async fn record_analysis(
        &self,
        chat: &Chat,
        messages: &[Message],
        files: &[FileRec],
    ) -> Result<(), RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO chats (id, title, confidential, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(chat.id.as_uuid())
        .bind(&chat.title)
        .bind(chat.confidential)
        .bind(chat.created_at)
        .bind(chat.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        for message in messages {
            sqlx::query(
                r#"
                INSERT INTO messages (id, chat_id, role, content, created_at)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(message.id.as_uuid())
            .bind(message.chat_id.as_uuid())
            .bind(message.role.as_str())
            .bind(&message.content)
            .bind(message.created_at)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;
        }

        for file in files {
            sqlx::query(
                r#"
                INSERT INTO files (id, chat_id, name, created_at)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(file.id.as_uuid())
            .bind(file.chat_id.as_uuid())
            .bind(&file.name)
            .bind(file.created_at)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;
        }

        sqlx::query("UPDATE chats SET updated_at = $1 WHERE id = $2")
            .bind(Utc::now())
            .bind(chat.id.as_uuid())
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(())
    }

    #[instrument(skip(self), fields(chat_id = %id))]
    async fn get_chat(&self, id: ChatId) -> Result<Option<Chat>, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, title, confidential, created_at, updated_at
            FROM chats
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(row.as_ref().map(chat_from_row))
    }

    #[instrument(skip(self))]
    async fn list_recent(&self, limit: usize) -> Result<Vec<Chat>, RepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, confidential, created_at, updated_at
            FROM chats
            ORDER BY updated_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(rows.iter().map(chat_from_row).collect())
    }

    #[instrument(skip(self), fields(chat_id = %chat_id))]
    async fn get_messages(&self, chat_id: ChatId) -> Result<Vec<Message>, RepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT id, chat_id, role, content, created_at
            FROM messages
            WHERE chat_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(chat_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        rows.into_iter()
            .map(|row| {
                let role = row
                    .get::<String, _>("role")
                    .parse::<MessageRole>()
                    .map_err(RepositoryError::QueryFailed)?;

                Ok(Message {
                    id: MessageId::from_uuid(row.get::<Uuid, _>("id")),
                    chat_id: ChatId::from_uuid(row.get::<Uuid, _>("chat_id")),
                    role,
                    content: row.get::<String, _>("content"),
                    created_at: row.get::<DateTime<Utc>, _>("created_at"),
                })
            })
            .collect()
    }

    #[instrument(skip(self, feedback), fields(feedback_id = %feedback.id.as_uuid()))]
    async fn add_feedback(&self, feedback: &Feedback) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO feedback (id, chat_id, message_id, value, comment, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(feedback.id.as_uuid())
        .bind(feedback.chat_id.map(|id| id.as_uuid()))
        .bind(feedback.message_id.map(|id| id.as_uuid()))
        .bind(feedback.value.as_i16())
        .bind(&feedback.comment)
        .bind(feedback.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(())
    }
}
