use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::favorite_controller::FavoriteController;
use crate::dto::common_dto::ApiResponse;
use crate::dto::favorite_dto::{AddFavoriteRequest, FavoriteCheckResponse, FavoriteResponse};
use crate::models::auth::AuthenticatedUser;
use crate::routes::json_body;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_favorite_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_favorites).post(add_favorite))
        .route("/:vehicle_id", delete(remove_favorite))
        .route("/:vehicle_id/check", get(check_favorite))
}

async fn list_favorites(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<ApiResponse<Vec<FavoriteResponse>>>, AppError> {
    let controller = FavoriteController::new(state.pool.clone());
    Ok(Json(ApiResponse::success(controller.list(user.user_id).await?)))
}

async fn add_favorite(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    payload: Result<Json<AddFavoriteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Uuid>>), AppError> {
    let request = json_body(payload)?;
    let controller = FavoriteController::new(state.pool.clone());
    let response = controller.add(user.user_id, request.vehicle_id).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn remove_favorite(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(vehicle_id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = FavoriteController::new(state.pool.clone());
    Ok(Json(controller.remove(user.user_id, vehicle_id).await?))
}

async fn check_favorite(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(vehicle_id): Path<Uuid>,
) -> Result<Json<ApiResponse<FavoriteCheckResponse>>, AppError> {
    let controller = FavoriteController::new(state.pool.clone());
    Ok(Json(ApiResponse::success(
        controller.check(user.user_id, vehicle_id).await?,
    )))
}
