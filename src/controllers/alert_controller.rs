use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::dto::alert_dto::{AlertResponse, CreateAlertRequest};
use crate::dto::common_dto::ApiResponse;
use crate::repositories::alert_repository::AlertRepository;
use crate::utils::errors::{not_found_error, AppResult};

pub struct AlertController {
    repository: AlertRepository,
}

impl AlertController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: AlertRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        request: CreateAlertRequest,
    ) -> AppResult<ApiResponse<AlertResponse>> {
        let alert = self.repository.create(user_id, request.into_criteria()?).await?;
        info!("🔔 Alerta creada: {} para usuario {}", alert.id, user_id);
        Ok(ApiResponse::success_with_message(alert.into(), "Alerta creada"))
    }

    pub async fn list(&self, user_id: Uuid) -> AppResult<Vec<AlertResponse>> {
        let alerts = self.repository.find_by_user(user_id).await?;
        Ok(alerts.into_iter().map(AlertResponse::from).collect())
    }

    pub async fn toggle(&self, user_id: Uuid, id: Uuid) -> AppResult<ApiResponse<AlertResponse>> {
        let alert = self
            .repository
            .toggle(id, user_id)
            .await?
            .ok_or_else(|| not_found_error("Alerta", &id.to_string()))?;

        let text = if alert.active { "Alerta activada" } else { "Alerta desactivada" };
        Ok(ApiResponse::success_with_message(alert.into(), text))
    }

    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> AppResult<ApiResponse<()>> {
        if !self.repository.delete(id, user_id).await? {
            return Err(not_found_error("Alerta", &id.to_string()));
        }
        Ok(ApiResponse::message("Alerta eliminada"))
    }
}
