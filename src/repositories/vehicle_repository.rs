use sqlx::PgPool;
use uuid::Uuid;

use crate::models::vehicle::{NewVehicle, Vehicle, VehicleChanges};
use crate::utils::errors::AppResult;

/// Máximo de vehículos destacados en la home
pub const FEATURED_LIMIT: i64 = 3;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, vehicle: NewVehicle) -> AppResult<Vehicle> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (id, make, model, description, year, mileage, condition, price, image, stock, category, featured)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(vehicle.make)
        .bind(vehicle.model)
        .bind(vehicle.description)
        .bind(vehicle.year)
        .bind(vehicle.mileage)
        .bind(vehicle.condition)
        .bind(vehicle.price)
        .bind(vehicle.image)
        .bind(vehicle.stock)
        .bind(vehicle.category)
        .bind(vehicle.featured)
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Vehicle>> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    pub async fn exists(&self, id: Uuid) -> AppResult<bool> {
        let result: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM vehicles WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(result.0)
    }

    pub async fn find_all(&self) -> AppResult<Vec<Vehicle>> {
        let vehicles =
            sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(vehicles)
    }

    pub async fn find_featured(&self) -> AppResult<Vec<Vehicle>> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT * FROM vehicles WHERE featured ORDER BY created_at DESC LIMIT $1",
        )
        .bind(FEATURED_LIMIT)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    /// Actualización parcial; devuelve `None` si el vehículo no existe
    pub async fn update(
        &self,
        id: Uuid,
        changes: VehicleChanges,
    ) -> AppResult<Option<Vehicle>> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles SET
                make = COALESCE($2, make),
                model = COALESCE($3, model),
                description = COALESCE($4, description),
                year = COALESCE($5, year),
                mileage = COALESCE($6, mileage),
                condition = COALESCE($7, condition),
                price = COALESCE($8, price),
                image = COALESCE($9, image),
                stock = COALESCE($10, stock),
                category = COALESCE($11, category),
                featured = COALESCE($12, featured)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(changes.make)
        .bind(changes.model)
        .bind(changes.description)
        .bind(changes.year)
        .bind(changes.mileage)
        .bind(changes.condition)
        .bind(changes.price)
        .bind(changes.image)
        .bind(changes.stock)
        .bind(changes.category)
        .bind(changes.featured)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vehicle)
    }

    /// Devuelve `true` si se eliminó una fila
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
