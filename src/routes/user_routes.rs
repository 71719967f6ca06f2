use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::dashboard_controller::DashboardController;
use crate::dto::common_dto::ApiResponse;
use crate::models::auth::AuthenticatedUser;
use crate::models::user::UserStats;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_user_router() -> Router<AppState> {
    Router::new().route("/stats", get(user_stats))
}

async fn user_stats(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<ApiResponse<UserStats>>, AppError> {
    let controller = DashboardController::new(state.pool.clone());
    Ok(Json(ApiResponse::success(controller.user_stats(&user).await?)))
}
