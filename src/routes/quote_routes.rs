use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::quote_controller::QuoteController;
use crate::dto::common_dto::ApiResponse;
use crate::dto::quote_dto::{QuoteRequestDto, QuoteResponse};
use crate::middleware::auth::MaybeUser;
use crate::models::auth::AuthenticatedUser;
use crate::models::quote::StoredQuote;
use crate::routes::json_body;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_quote_router() -> Router<AppState> {
    Router::new()
        .route("/api/cotizar", post(quote_vehicle))
        .route("/api/cotizaciones", get(quote_history))
}

async fn quote_vehicle(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    payload: Result<Json<QuoteRequestDto>, JsonRejection>,
) -> Result<Json<ApiResponse<QuoteResponse>>, AppError> {
    let controller = QuoteController::new(&state);
    Ok(Json(controller.quote(user, json_body(payload)?).await?))
}

async fn quote_history(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<ApiResponse<Vec<StoredQuote>>>, AppError> {
    let controller = QuoteController::new(&state);
    Ok(Json(ApiResponse::success(controller.history(&user).await?)))
}
