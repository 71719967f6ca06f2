use chrono::{DateTime, Utc};
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::models::alert::{AlertCriteria, PriceAlert};
use crate::utils::errors::AppError;
use crate::utils::validation::field_error;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateAlertRequest {
    #[serde(default, alias = "marca")]
    #[validate(length(max = 80))]
    pub make: Option<String>,
    #[serde(default, alias = "modelo")]
    #[validate(length(max = 80))]
    pub model: Option<String>,
    #[serde(default, alias = "precio_max", alias = "precioMax")]
    #[validate(range(min = 0.0, message = "El precio máximo no puede ser negativo"))]
    pub max_price: Option<f64>,
    #[serde(default, alias = "anio_min", alias = "anioMin")]
    #[validate(range(min = 1900, max = 2100, message = "Año fuera de rango"))]
    pub min_year: Option<i32>,
}

impl CreateAlertRequest {
    pub fn into_criteria(self) -> Result<AlertCriteria, AppError> {
        self.validate()?;
        let max_price = self
            .max_price
            .map(|p| {
                Decimal::from_f64_retain(p).ok_or_else(|| {
                    field_error("max_price", ValidationError::new("invalid_price"))
                })
            })
            .transpose()?;
        let criteria = AlertCriteria {
            make: blank_to_none(self.make),
            model: blank_to_none(self.model),
            max_price,
            min_year: self.min_year,
        };
        if criteria.make.is_none()
            && criteria.model.is_none()
            && criteria.max_price.is_none()
            && criteria.min_year.is_none()
        {
            return Err(AppError::BadRequest(
                "La alerta necesita al menos un criterio".to_string(),
            ));
        }
        Ok(criteria)
    }
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Debug, Serialize)]
pub struct AlertResponse {
    pub id: Uuid,
    pub make: Option<String>,
    pub model: Option<String>,
    pub max_price: Option<f64>,
    pub min_year: Option<i32>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<PriceAlert> for AlertResponse {
    fn from(alert: PriceAlert) -> Self {
        Self {
            id: alert.id,
            make: alert.make,
            model: alert.model,
            max_price: alert.max_price.and_then(|p| p.to_f64()),
            min_year: alert.min_year,
            active: alert.active,
            created_at: alert.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_alert_needs_a_criterion() {
        let request: CreateAlertRequest = serde_json::from_value(json!({ "marca": "  " })).unwrap();
        assert!(matches!(request.into_criteria(), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_alert_criteria() {
        let request: CreateAlertRequest =
            serde_json::from_value(json!({ "marca": "Fiat", "precio_max": 12000000 })).unwrap();
        let criteria = request.into_criteria().unwrap();
        assert_eq!(criteria.make.as_deref(), Some("Fiat"));
        assert_eq!(criteria.max_price, Some(Decimal::new(12_000_000, 0)));
        assert!(criteria.model.is_none());
    }
}
