use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::appointment::{Appointment, AppointmentStatus};
use crate::utils::errors::AppError;
use crate::utils::validation::{field_error, validate_date, validate_time};

// Solicitud de turno para test drive
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAppointmentRequest {
    #[serde(alias = "vehiculoId", alias = "vehiculo_id")]
    pub vehicle_id: Uuid,
    /// YYYY-MM-DD
    #[serde(alias = "fecha")]
    pub date: String,
    /// HH:MM
    #[serde(alias = "hora")]
    pub time: String,
    #[serde(default, alias = "comentarios")]
    #[validate(length(max = 500, message = "Comentario demasiado largo"))]
    pub comments: String,
}

impl CreateAppointmentRequest {
    pub fn scheduled_at(&self) -> Result<NaiveDateTime, AppError> {
        self.validate()?;
        let date = validate_date(&self.date).map_err(|e| field_error("date", e))?;
        let time = validate_time(&self.time).map_err(|e| field_error("time", e))?;
        Ok(date.and_time(time))
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateAppointmentStatusRequest {
    #[serde(alias = "estado")]
    pub status: AppointmentStatus,
}

/// Turno con los datos del vehículo para el panel del usuario
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct AppointmentWithVehicle {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub make: String,
    pub model: String,
    pub scheduled_at: NaiveDateTime,
    pub comments: String,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct AppointmentResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub vehicle_id: Uuid,
    pub scheduled_at: NaiveDateTime,
    pub comments: String,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Appointment> for AppointmentResponse {
    fn from(a: Appointment) -> Self {
        Self {
            id: a.id,
            user_id: a.user_id,
            vehicle_id: a.vehicle_id,
            scheduled_at: a.scheduled_at,
            comments: a.comments,
            status: a.status,
            created_at: a.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use serde_json::json;

    #[test]
    fn test_scheduled_at_combines_date_and_time() {
        let request: CreateAppointmentRequest = serde_json::from_value(json!({
            "vehiculoId": Uuid::nil(),
            "fecha": "2025-03-14",
            "hora": "10:30"
        }))
        .unwrap();

        let expected = NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(10, 30, 0).unwrap());
        assert_eq!(request.scheduled_at().unwrap(), expected);
    }

    #[test]
    fn test_scheduled_at_rejects_bad_formats() {
        let request: CreateAppointmentRequest = serde_json::from_value(json!({
            "vehicle_id": Uuid::nil(),
            "date": "14/03/2025",
            "time": "10:30"
        }))
        .unwrap();
        assert!(matches!(request.scheduled_at(), Err(AppError::Validation(_))));

        let request: CreateAppointmentRequest = serde_json::from_value(json!({
            "vehicle_id": Uuid::nil(),
            "date": "2025-03-14",
            "time": "25:99"
        }))
        .unwrap();
        assert!(matches!(request.scheduled_at(), Err(AppError::Validation(_))));
    }
}
