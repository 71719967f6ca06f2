use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{delete, get, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::appointment_controller::AppointmentController;
use crate::dto::appointment_dto::{
    AppointmentResponse, AppointmentWithVehicle, CreateAppointmentRequest,
    UpdateAppointmentStatusRequest,
};
use crate::dto::common_dto::ApiResponse;
use crate::middleware::auth::AdminUser;
use crate::models::auth::AuthenticatedUser;
use crate::routes::json_body;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_appointment_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_appointments).post(book_appointment))
        .route("/:id", delete(cancel_appointment))
        .route("/:id/estado", put(update_status))
}

async fn book_appointment(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    payload: Result<Json<CreateAppointmentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<AppointmentResponse>>), AppError> {
    let controller = AppointmentController::new(state.pool.clone());
    let response = controller.book(user.user_id, json_body(payload)?).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_appointments(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<ApiResponse<Vec<AppointmentWithVehicle>>>, AppError> {
    let controller = AppointmentController::new(state.pool.clone());
    Ok(Json(ApiResponse::success(controller.list_own(user.user_id).await?)))
}

async fn cancel_appointment(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<AppointmentResponse>>, AppError> {
    let controller = AppointmentController::new(state.pool.clone());
    Ok(Json(controller.cancel(user.user_id, id).await?))
}

async fn update_status(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    payload: Result<Json<UpdateAppointmentStatusRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<AppointmentResponse>>, AppError> {
    let request = json_body(payload)?;
    let controller = AppointmentController::new(state.pool.clone());
    Ok(Json(controller.update_status(id, request.status).await?))
}
