use sqlx::PgPool;
use uuid::Uuid;

use crate::models::message::{Message, MessageStats};
use crate::utils::errors::AppResult;

pub struct MessageRepository {
    pool: PgPool,
}

impl MessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: &str,
        email: &str,
        phone: &str,
        body: &str,
    ) -> AppResult<Message> {
        let message = sqlx::query_as::<_, Message>(
            r#"
            INSERT INTO messages (id, name, email, phone, body, read)
            VALUES ($1, $2, $3, $4, $5, FALSE)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(email)
        .bind(phone)
        .bind(body)
        .fetch_one(&self.pool)
        .await?;

        Ok(message)
    }

    pub async fn find_all(&self, unread_only: bool) -> AppResult<Vec<Message>> {
        let messages = sqlx::query_as::<_, Message>(
            "SELECT * FROM messages WHERE ($1 = FALSE OR read = FALSE) ORDER BY created_at DESC",
        )
        .bind(unread_only)
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Message>> {
        let message = sqlx::query_as::<_, Message>("SELECT * FROM messages WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(message)
    }

    pub async fn set_read(&self, id: Uuid, read: bool) -> AppResult<Option<Message>> {
        let message =
            sqlx::query_as::<_, Message>("UPDATE messages SET read = $2 WHERE id = $1 RETURNING *")
                .bind(id)
                .bind(read)
                .fetch_optional(&self.pool)
                .await?;

        Ok(message)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM messages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn stats(&self) -> AppResult<MessageStats> {
        let (total, unread): (i64, i64) = sqlx::query_as(
            "SELECT COUNT(*), COUNT(*) FILTER (WHERE read = FALSE) FROM messages",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(MessageStats::new(total, unread))
    }
}
