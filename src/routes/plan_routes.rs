use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    routing::{get, post},
    Json, Router,
};

use crate::controllers::quote_controller::QuoteController;
use crate::dto::common_dto::ApiResponse;
use crate::dto::quote_dto::InstallmentRequestDto;
use crate::models::financing_plan::{FinancingPlan, InstallmentResult, PlanFilters};
use crate::routes::{json_body, query_params};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_plan_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_plans))
        .route("/:plan_id", get(get_plan))
        .route("/:plan_id/calcular", post(calculate_installments))
}

async fn list_plans(
    State(state): State<AppState>,
    query: Result<Query<PlanFilters>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<FinancingPlan>>>, AppError> {
    let filters = query_params(query)?;
    let plans = QuoteController::new(&state).plans(&filters);
    Ok(Json(ApiResponse::success(plans)))
}

async fn get_plan(
    State(state): State<AppState>,
    Path(plan_id): Path<String>,
) -> Result<Json<ApiResponse<FinancingPlan>>, AppError> {
    let plan = QuoteController::new(&state).plan(&plan_id)?;
    Ok(Json(ApiResponse::success(plan)))
}

async fn calculate_installments(
    State(state): State<AppState>,
    Path(plan_id): Path<String>,
    payload: Result<Json<InstallmentRequestDto>, JsonRejection>,
) -> Result<Json<ApiResponse<InstallmentResult>>, AppError> {
    let result = QuoteController::new(&state).calculate(&plan_id, json_body(payload)?)?;
    Ok(Json(ApiResponse::success(result)))
}
