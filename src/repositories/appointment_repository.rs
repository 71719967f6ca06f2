use chrono::NaiveDateTime;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::appointment_dto::AppointmentWithVehicle;
use crate::models::appointment::{Appointment, AppointmentStatus};
use crate::utils::errors::AppResult;

pub struct AppointmentRepository {
    pool: PgPool,
}

impl AppointmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        vehicle_id: Uuid,
        scheduled_at: NaiveDateTime,
        comments: &str,
    ) -> AppResult<Appointment> {
        let appointment = sqlx::query_as::<_, Appointment>(
            r#"
            INSERT INTO appointments (id, user_id, vehicle_id, scheduled_at, comments, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(vehicle_id)
        .bind(scheduled_at)
        .bind(comments)
        .bind(AppointmentStatus::Pending)
        .fetch_one(&self.pool)
        .await?;

        Ok(appointment)
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<AppointmentWithVehicle>> {
        let appointments = sqlx::query_as::<_, AppointmentWithVehicle>(
            r#"
            SELECT a.id, a.vehicle_id, v.make, v.model, a.scheduled_at, a.comments, a.status, a.created_at
            FROM appointments a
            JOIN vehicles v ON v.id = a.vehicle_id
            WHERE a.user_id = $1
            ORDER BY a.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(appointments)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Appointment>> {
        let appointment = sqlx::query_as::<_, Appointment>("SELECT * FROM appointments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(appointment)
    }

    pub async fn update_status(
        &self,
        id: Uuid,
        status: AppointmentStatus,
    ) -> AppResult<Option<Appointment>> {
        let appointment = sqlx::query_as::<_, Appointment>(
            "UPDATE appointments SET status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?;

        Ok(appointment)
    }
}
