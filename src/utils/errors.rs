//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de errores del sistema y su conversión
//! a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Errores del cotizador y de la calculadora de cuotas.
///
/// Son errores puros del dominio: la capa HTTP los traduce a `AppError`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuoteError {
    #[error("Campo inválido '{field}': {message}")]
    Validation { field: &'static str, message: String },

    #[error("Plan no encontrado: {0}")]
    PlanNotFound(String),

    #[error("El monto debe estar entre ${min} y ${max}")]
    AmountOutOfRange { min: i64, max: i64 },

    #[error("El enganche mínimo es ${required} ({pct}%)")]
    InsufficientDownPayment { required: i64, pct: f64 },

    #[error("Error de cálculo: {0}")]
    InternalComputation(String),
}

impl QuoteError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        QuoteError::Validation {
            field,
            message: message.into(),
        }
    }
}

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("JWT error: {0}")]
    Jwt(String),

    #[error("Hash error: {0}")]
    Hash(String),
}

impl From<QuoteError> for AppError {
    fn from(err: QuoteError) -> Self {
        match err {
            QuoteError::Validation { .. }
            | QuoteError::AmountOutOfRange { .. }
            | QuoteError::InsufficientDownPayment { .. } => AppError::BadRequest(err.to_string()),
            QuoteError::PlanNotFound(_) => AppError::NotFound("Plan no encontrado".to_string()),
            QuoteError::InternalComputation(msg) => AppError::Internal(msg),
        }
    }
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    code: &'static str,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) | AppError::Internal(_) | AppError::Hash(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) | AppError::Jwt(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            AppError::Database(e) => {
                error!("❌ Database error: {}", e);
                ErrorResponse {
                    error: "Database Error".to_string(),
                    message: "Error interno del servidor".to_string(),
                    details: None,
                    code: "DB_ERROR",
                }
            }

            AppError::Validation(e) => {
                warn!("Validation error: {}", e);
                ErrorResponse {
                    error: "Validation Error".to_string(),
                    message: "Los datos enviados no son válidos".to_string(),
                    details: Some(json!(e)),
                    code: "VALIDATION_ERROR",
                }
            }

            AppError::Unauthorized(msg) => ErrorResponse {
                error: "Unauthorized".to_string(),
                message: msg,
                details: None,
                code: "UNAUTHORIZED",
            },

            AppError::Forbidden(msg) => ErrorResponse {
                error: "Forbidden".to_string(),
                message: msg,
                details: None,
                code: "FORBIDDEN",
            },

            AppError::NotFound(msg) => ErrorResponse {
                error: "Not Found".to_string(),
                message: msg,
                details: None,
                code: "NOT_FOUND",
            },

            AppError::Conflict(msg) => ErrorResponse {
                error: "Conflict".to_string(),
                message: msg,
                details: None,
                code: "CONFLICT",
            },

            AppError::BadRequest(msg) => ErrorResponse {
                error: "Bad Request".to_string(),
                message: msg,
                details: None,
                code: "BAD_REQUEST",
            },

            AppError::Internal(msg) => {
                error!("❌ Internal error: {}", msg);
                ErrorResponse {
                    error: "Internal Server Error".to_string(),
                    message: "Error interno del servidor".to_string(),
                    details: None,
                    code: "INTERNAL_ERROR",
                }
            }

            AppError::Jwt(msg) => ErrorResponse {
                error: "JWT Error".to_string(),
                message: msg,
                details: None,
                code: "JWT_ERROR",
            },

            AppError::Hash(msg) => {
                error!("❌ Hash error: {}", msg);
                ErrorResponse {
                    error: "Hash Error".to_string(),
                    message: "Error interno del servidor".to_string(),
                    details: None,
                    code: "HASH_ERROR",
                }
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{} con id '{}' no encontrado", resource, id))
}

/// Función helper para crear errores de conflicto
pub fn conflict_error(resource: &str, field: &str, value: &str) -> AppError {
    AppError::Conflict(format!("{} con {} '{}' ya existe", resource, field, value))
}

/// Nombre de la constraint si el error es una violación de unicidad (23505)
pub fn unique_violation(err: &AppError) -> Option<&str> {
    match err {
        AppError::Database(sqlx::Error::Database(db)) if db.is_unique_violation() => {
            Some(db.constraint().unwrap_or_default())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_error_mapping() {
        let err: AppError = QuoteError::PlanNotFound("plan-z".to_string()).into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let err: AppError = QuoteError::validation("year", "fuera de rango").into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("year"));

        let err: AppError = QuoteError::AmountOutOfRange { min: 1, max: 2 }.into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err: AppError = QuoteError::InsufficientDownPayment { required: 10, pct: 20.0 }.into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err: AppError = QuoteError::InternalComputation("NaN".to_string()).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_plan_not_found_message_is_generic() {
        let err: AppError = QuoteError::PlanNotFound("plan-secreto".to_string()).into();
        match err {
            AppError::NotFound(msg) => assert!(!msg.contains("plan-secreto")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::Conflict("x".into()).status_code(), StatusCode::CONFLICT);
        assert_eq!(AppError::Forbidden("x".into()).status_code(), StatusCode::FORBIDDEN);
        assert_eq!(AppError::Jwt("x".into()).status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::Hash("x".into()).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
