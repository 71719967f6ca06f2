use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::dto::appointment_dto::{
    AppointmentResponse, AppointmentWithVehicle, CreateAppointmentRequest,
};
use crate::dto::common_dto::ApiResponse;
use crate::models::appointment::AppointmentStatus;
use crate::repositories::appointment_repository::AppointmentRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{not_found_error, AppError, AppResult};

pub struct AppointmentController {
    appointments: AppointmentRepository,
    vehicles: VehicleRepository,
}

impl AppointmentController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            appointments: AppointmentRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    pub async fn book(
        &self,
        user_id: Uuid,
        request: CreateAppointmentRequest,
    ) -> AppResult<ApiResponse<AppointmentResponse>> {
        let scheduled_at = request.scheduled_at()?;
        if !self.vehicles.exists(request.vehicle_id).await? {
            return Err(not_found_error("Vehículo", &request.vehicle_id.to_string()));
        }

        let appointment = self
            .appointments
            .create(user_id, request.vehicle_id, scheduled_at, request.comments.trim())
            .await?;

        info!(
            "📅 Turno solicitado: {} para vehículo {} el {}",
            appointment.id, appointment.vehicle_id, appointment.scheduled_at
        );
        Ok(ApiResponse::success_with_message(
            appointment.into(),
            "Turno solicitado exitosamente",
        ))
    }

    pub async fn list_own(&self, user_id: Uuid) -> AppResult<Vec<AppointmentWithVehicle>> {
        self.appointments.find_by_user(user_id).await
    }

    /// Sólo el dueño puede cancelar; un turno ajeno se reporta como inexistente
    pub async fn cancel(&self, user_id: Uuid, id: Uuid) -> AppResult<ApiResponse<AppointmentResponse>> {
        let appointment = self
            .appointments
            .find_by_id(id)
            .await?
            .filter(|a| a.user_id == user_id)
            .ok_or_else(|| not_found_error("Turno", &id.to_string()))?;

        if !appointment.status.is_open() {
            return Err(AppError::BadRequest(format!(
                "El turno ya está {}",
                appointment.status.as_str()
            )));
        }

        let cancelled = self
            .appointments
            .update_status(id, AppointmentStatus::Cancelled)
            .await?
            .ok_or_else(|| not_found_error("Turno", &id.to_string()))?;

        info!("❌ Turno cancelado: {}", id);
        Ok(ApiResponse::success_with_message(cancelled.into(), "Turno cancelado"))
    }

    pub async fn update_status(
        &self,
        id: Uuid,
        status: AppointmentStatus,
    ) -> AppResult<ApiResponse<AppointmentResponse>> {
        let appointment = self
            .appointments
            .update_status(id, status)
            .await?
            .ok_or_else(|| not_found_error("Turno", &id.to_string()))?;

        info!("📅 Turno {} pasa a {}", id, status.as_str());
        Ok(ApiResponse::success_with_message(
            appointment.into(),
            "Estado del turno actualizado",
        ))
    }
}
