use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{delete, get, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::alert_controller::AlertController;
use crate::dto::alert_dto::{AlertResponse, CreateAlertRequest};
use crate::dto::common_dto::ApiResponse;
use crate::models::auth::AuthenticatedUser;
use crate::routes::json_body;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_alert_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_alerts).post(create_alert))
        .route("/:id", delete(delete_alert))
        .route("/:id/toggle", put(toggle_alert))
}

async fn create_alert(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    payload: Result<Json<CreateAlertRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<AlertResponse>>), AppError> {
    let controller = AlertController::new(state.pool.clone());
    let response = controller.create(user.user_id, json_body(payload)?).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_alerts(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<ApiResponse<Vec<AlertResponse>>>, AppError> {
    let controller = AlertController::new(state.pool.clone());
    Ok(Json(ApiResponse::success(controller.list(user.user_id).await?)))
}

async fn toggle_alert(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<AlertResponse>>, AppError> {
    let controller = AlertController::new(state.pool.clone());
    Ok(Json(controller.toggle(user.user_id, id).await?))
}

async fn delete_alert(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = AlertController::new(state.pool.clone());
    Ok(Json(controller.delete(user.user_id, id).await?))
}
