use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

pub fn create_health_router() -> Router<AppState> {
    Router::new().route("/", get(health))
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "API de la concesionaria funcionando correctamente",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
