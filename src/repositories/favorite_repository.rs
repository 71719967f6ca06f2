use sqlx::PgPool;
use uuid::Uuid;

use crate::models::favorite::{Favorite, FavoriteVehicle};
use crate::utils::errors::AppResult;

pub struct FavoriteRepository {
    pool: PgPool,
}

impl FavoriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Devuelve `None` si el favorito ya existía
    pub async fn add(&self, user_id: Uuid, vehicle_id: Uuid) -> AppResult<Option<Favorite>> {
        let favorite = sqlx::query_as::<_, Favorite>(
            r#"
            INSERT INTO favorites (user_id, vehicle_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, vehicle_id) DO NOTHING
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(vehicle_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(favorite)
    }

    pub async fn remove(&self, user_id: Uuid, vehicle_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND vehicle_id = $2")
            .bind(user_id)
            .bind(vehicle_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn exists(&self, user_id: Uuid, vehicle_id: Uuid) -> AppResult<bool> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM favorites WHERE user_id = $1 AND vehicle_id = $2)",
        )
        .bind(user_id)
        .bind(vehicle_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<FavoriteVehicle>> {
        let favorites = sqlx::query_as::<_, FavoriteVehicle>(
            r#"
            SELECT v.*, f.added_at
            FROM favorites f
            JOIN vehicles v ON v.id = f.vehicle_id
            WHERE f.user_id = $1
            ORDER BY f.added_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(favorites)
    }
}
