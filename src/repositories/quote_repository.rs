use sqlx::PgPool;
use uuid::Uuid;

use crate::models::quote::{QuoteRequest, QuoteResult, StoredQuote};
use crate::utils::errors::AppResult;

pub struct QuoteRepository {
    pool: PgPool,
}

impl QuoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn save(
        &self,
        user_id: Uuid,
        request: &QuoteRequest,
        result: &QuoteResult,
    ) -> AppResult<StoredQuote> {
        let quote = sqlx::query_as::<_, StoredQuote>(
            r#"
            INSERT INTO quotes (id, user_id, make, model, year, mileage, condition, estimated_value)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(&request.make)
        .bind(&request.model)
        .bind(request.year)
        .bind(request.mileage)
        .bind(request.condition.as_str())
        .bind(result.estimated_value)
        .fetch_one(&self.pool)
        .await?;

        Ok(quote)
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<StoredQuote>> {
        let quotes = sqlx::query_as::<_, StoredQuote>(
            "SELECT * FROM quotes WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(quotes)
    }
}
