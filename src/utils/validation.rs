//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y conversión de tipos que `validator` no cubre con sus derives.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use validator::{ValidationError, ValidationErrors};

use crate::utils::errors::AppError;

/// Envolver un `ValidationError` de un campo en un `AppError`
pub fn field_error(field: &'static str, error: ValidationError) -> AppError {
    let mut errors = ValidationErrors::new();
    errors.add(field, error);
    AppError::Validation(errors)
}

/// Validar y convertir string a fecha
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Validar y convertir string a hora (`HH:MM`, se aceptan también segundos)
pub fn validate_time(value: &str) -> Result<NaiveTime, ValidationError> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| {
            let mut error = ValidationError::new("time");
            error.add_param("value".into(), &value.to_string());
            error.add_param("format".into(), &"HH:MM".to_string());
            error
        })
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor esté en una lista de valores permitidos
pub fn validate_enum<T: PartialEq + std::fmt::Debug + Serialize>(
    value: T,
    allowed_values: &[T],
) -> Result<(), ValidationError> {
    if !allowed_values.contains(&value) {
        let mut error = ValidationError::new("enum");
        error.add_param("value".into(), &value);
        error.add_param("allowed_values".into(), &format!("{:?}", allowed_values));
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea positivo
pub fn validate_positive<T: PartialOrd + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value <= T::zero() {
        let mut error = ValidationError::new("positive");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_date() {
        assert!(validate_date("2025-03-15").is_ok());
        assert!(validate_date("2025/03/15").is_err());
    }

    #[test]
    fn test_validate_time() {
        assert!(validate_time("10:30").is_ok());
        assert!(validate_time("10:30:00").is_ok());
        assert!(validate_time("25:00").is_err());
        assert!(validate_time("mañana").is_err());
    }

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("Cronos").is_ok());
        assert!(validate_not_empty("   ").is_err());
    }

    #[test]
    fn test_validate_enum() {
        let allowed = vec!["pending", "confirmed"];
        assert!(validate_enum("pending", &allowed).is_ok());
        assert!(validate_enum("lost", &allowed).is_err());
    }

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive(5.0).is_ok());
        assert!(validate_positive(0.0).is_err());
        assert!(validate_positive(-5).is_err());
    }

    #[test]
    fn test_field_error_wraps_validation() {
        let err = field_error("price", ValidationError::new("positive"));
        match err {
            AppError::Validation(errors) => {
                assert!(errors.field_errors().contains_key("price"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
