use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common_dto::ApiResponse;
use crate::dto::message_dto::{CreateMessageRequest, MessageFilters};
use crate::models::message::{Message, MessageStats};
use crate::repositories::message_repository::MessageRepository;
use crate::utils::errors::{not_found_error, AppResult};

pub struct MessageController {
    repository: MessageRepository,
}

impl MessageController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: MessageRepository::new(pool),
        }
    }

    pub async fn submit(&self, request: CreateMessageRequest) -> AppResult<ApiResponse<Message>> {
        request.validate()?;
        let message = self
            .repository
            .create(
                request.name.trim(),
                request.email.trim(),
                request.phone.trim(),
                request.body.trim(),
            )
            .await?;

        info!("✉️ Mensaje de contacto recibido: {}", message.id);
        Ok(ApiResponse::success_with_message(
            message,
            "Mensaje enviado exitosamente",
        ))
    }

    pub async fn list(&self, filters: MessageFilters) -> AppResult<Vec<Message>> {
        self.repository.find_all(filters.unread_only).await
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Message> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Mensaje", &id.to_string()))
    }

    pub async fn mark_read(&self, id: Uuid, read: bool) -> AppResult<ApiResponse<Message>> {
        let message = self
            .repository
            .set_read(id, read)
            .await?
            .ok_or_else(|| not_found_error("Mensaje", &id.to_string()))?;

        let text = if read {
            "Mensaje marcado como leído"
        } else {
            "Mensaje marcado como no leído"
        };
        Ok(ApiResponse::success_with_message(message, text))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<ApiResponse<()>> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Mensaje", &id.to_string()));
        }
        Ok(ApiResponse::message("Mensaje eliminado"))
    }

    pub async fn stats(&self) -> AppResult<MessageStats> {
        self.repository.stats().await
    }
}
