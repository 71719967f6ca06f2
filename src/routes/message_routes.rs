use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::message_controller::MessageController;
use crate::dto::common_dto::ApiResponse;
use crate::dto::message_dto::{CreateMessageRequest, MarkReadRequest, MessageFilters};
use crate::middleware::auth::AdminUser;
use crate::models::message::{Message, MessageStats};
use crate::routes::{json_body, query_params};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_message_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_messages).post(submit_message))
        .route("/stats", get(message_stats))
        .route("/:id", get(get_message).delete(delete_message))
        .route("/:id/leido", put(mark_read))
}

async fn submit_message(
    State(state): State<AppState>,
    payload: Result<Json<CreateMessageRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Message>>), AppError> {
    let controller = MessageController::new(state.pool.clone());
    let response = controller.submit(json_body(payload)?).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_messages(
    State(state): State<AppState>,
    _admin: AdminUser,
    query: Result<Query<MessageFilters>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<Message>>>, AppError> {
    let controller = MessageController::new(state.pool.clone());
    let messages = controller.list(query_params(query)?).await?;
    Ok(Json(ApiResponse::success(messages)))
}

async fn message_stats(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<ApiResponse<MessageStats>>, AppError> {
    let controller = MessageController::new(state.pool.clone());
    Ok(Json(ApiResponse::success(controller.stats().await?)))
}

async fn get_message(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Message>>, AppError> {
    let controller = MessageController::new(state.pool.clone());
    Ok(Json(ApiResponse::success(controller.get_by_id(id).await?)))
}

/// Sin body marca como leído
async fn mark_read(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    payload: Option<Json<MarkReadRequest>>,
) -> Result<Json<ApiResponse<Message>>, AppError> {
    let read = payload.map_or(true, |Json(body)| body.read);
    let controller = MessageController::new(state.pool.clone());
    Ok(Json(controller.mark_read(id, read).await?))
}

async fn delete_message(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = MessageController::new(state.pool.clone());
    Ok(Json(controller.delete(id).await?))
}
