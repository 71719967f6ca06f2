//! Rutas HTTP
//!
//! Un builder por recurso; `create_app_router` los monta bajo `/api`.

pub mod alert_routes;
pub mod appointment_routes;
pub mod auth_routes;
pub mod favorite_routes;
pub mod health_routes;
pub mod message_routes;
pub mod plan_routes;
pub mod quote_routes;
pub mod user_routes;
pub mod vehicle_routes;

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    extract::{Json, Query},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_layer_for;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_app_router(state: AppState) -> Router {
    let cors = cors_layer_for(&state.config);

    Router::new()
        .nest("/api/health", health_routes::create_health_router())
        .nest("/api/auth", auth_routes::create_auth_router())
        .nest("/api/vehiculos", vehicle_routes::create_vehicle_router())
        .nest("/api/mensajes", message_routes::create_message_router())
        .nest("/api/favoritos", favorite_routes::create_favorite_router())
        .nest("/api/turnos", appointment_routes::create_appointment_router())
        .nest("/api/alertas", alert_routes::create_alert_router())
        .nest("/api/planes", plan_routes::create_plan_router())
        .nest("/api/usuario", user_routes::create_user_router())
        .merge(quote_routes::create_quote_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Body JSON con el rechazo de axum convertido en `AppError`
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| AppError::BadRequest(format!("JSON inválido: {}", rejection.body_text())))
}

pub(crate) fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, AppError> {
    query
        .map(|Query(value)| value)
        .map_err(|rejection| AppError::BadRequest(format!("Parámetros inválidos: {}", rejection.body_text())))
}
