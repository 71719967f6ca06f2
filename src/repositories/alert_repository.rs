use sqlx::PgPool;
use uuid::Uuid;

use crate::models::alert::{AlertCriteria, PriceAlert};
use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppResult;

pub struct AlertRepository {
    pool: PgPool,
}

impl AlertRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user_id: Uuid, criteria: AlertCriteria) -> AppResult<PriceAlert> {
        let alert = sqlx::query_as::<_, PriceAlert>(
            r#"
            INSERT INTO price_alerts (id, user_id, make, model, max_price, min_year, active)
            VALUES ($1, $2, $3, $4, $5, $6, TRUE)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(criteria.make)
        .bind(criteria.model)
        .bind(criteria.max_price)
        .bind(criteria.min_year)
        .fetch_one(&self.pool)
        .await?;

        Ok(alert)
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<PriceAlert>> {
        let alerts = sqlx::query_as::<_, PriceAlert>(
            "SELECT * FROM price_alerts WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(alerts)
    }

    /// Alterna `active`; `None` si la alerta no existe o no es del usuario
    pub async fn toggle(&self, id: Uuid, user_id: Uuid) -> AppResult<Option<PriceAlert>> {
        let alert = sqlx::query_as::<_, PriceAlert>(
            "UPDATE price_alerts SET active = NOT active WHERE id = $1 AND user_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(alert)
    }

    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM price_alerts WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Alertas activas que coinciden con un vehículo recién publicado
    pub async fn find_matching(&self, vehicle: &Vehicle) -> AppResult<Vec<PriceAlert>> {
        let active = sqlx::query_as::<_, PriceAlert>("SELECT * FROM price_alerts WHERE active")
            .fetch_all(&self.pool)
            .await?;

        Ok(active.into_iter().filter(|a| a.matches(vehicle)).collect())
    }
}
