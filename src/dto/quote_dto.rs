//! DTOs del cotizador y de la calculadora de cuotas
//!
//! Los campos numéricos llegan como `serde_json::Value` para poder responder
//! con un error de validación que nombre el campo, tanto si llegan como
//! número como si llegan como texto de un formulario.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::models::quote::{Condition, QuoteBreakdown, QuoteRequest, QuoteResult};
use crate::utils::errors::QuoteError;

#[derive(Debug, Default, Deserialize)]
pub struct QuoteRequestDto {
    #[serde(alias = "marca")]
    pub make: Option<String>,
    #[serde(alias = "modelo")]
    pub model: Option<String>,
    #[serde(alias = "anio")]
    pub year: Option<Value>,
    #[serde(alias = "kilometraje")]
    pub mileage: Option<Value>,
    #[serde(alias = "estado")]
    pub condition: Option<String>,
}

impl QuoteRequestDto {
    pub fn into_request(self) -> Result<QuoteRequest, QuoteError> {
        let make = required_text("make", self.make)?;
        let model = required_text("model", self.model)?;
        let year = integer_field("year", self.year)?;
        let year = i32::try_from(year)
            .map_err(|_| QuoteError::validation("year", "El año está fuera de rango"))?;
        // Sin kilometraje se cotiza como 0 km
        let mileage = match self.mileage {
            None | Some(Value::Null) => 0,
            value => integer_field("mileage", value)?,
        };
        let label = required_text("condition", self.condition)?;
        let condition = Condition::from_label(&label).unwrap_or_else(|| {
            warn!("⚠️ Estado '{}' no reconocido, se cotiza como 'good'", label);
            Condition::default()
        });

        Ok(QuoteRequest {
            make,
            model,
            year,
            mileage,
            condition,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub mileage: i64,
    pub estimated_value: i64,
    pub currency: &'static str,
    pub breakdown: QuoteBreakdown,
}

impl QuoteResponse {
    pub fn new(request: QuoteRequest, result: QuoteResult) -> Self {
        Self {
            make: request.make,
            model: request.model,
            year: request.year,
            mileage: request.mileage,
            estimated_value: result.estimated_value,
            currency: "ARS",
            breakdown: result.breakdown,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct InstallmentRequestDto {
    #[serde(alias = "monto")]
    pub amount: Option<Value>,
    #[serde(alias = "enganche")]
    pub down_payment: Option<Value>,
}

impl InstallmentRequestDto {
    /// Devuelve (monto, enganche); el enganche es opcional
    pub fn amounts(self) -> Result<(f64, f64), QuoteError> {
        let amount = number_field("amount", self.amount)?;
        let down_payment = match self.down_payment {
            None | Some(Value::Null) => 0.0,
            value => number_field("down_payment", value)?,
        };
        Ok((amount, down_payment))
    }
}

fn missing(field: &'static str) -> QuoteError {
    QuoteError::validation(field, format!("Falta el campo requerido: {}", field))
}

fn required_text(field: &'static str, value: Option<String>) -> Result<String, QuoteError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text.trim().to_string()),
        _ => Err(missing(field)),
    }
}

fn integer_field(field: &'static str, value: Option<Value>) -> Result<i64, QuoteError> {
    let not_integer = || QuoteError::validation(field, "Debe ser un número entero");
    match value {
        None | Some(Value::Null) => Err(missing(field)),
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
            .ok_or_else(not_integer),
        Some(Value::String(s)) => s.trim().parse::<i64>().map_err(|_| not_integer()),
        Some(_) => Err(not_integer()),
    }
}

fn number_field(field: &'static str, value: Option<Value>) -> Result<f64, QuoteError> {
    let not_number = || QuoteError::validation(field, "Debe ser un número");
    match value {
        None | Some(Value::Null) => Err(missing(field)),
        Some(Value::Number(n)) => n.as_f64().ok_or_else(not_number),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .ok_or_else(not_number),
        Some(_) => Err(not_number()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dto(body: Value) -> QuoteRequestDto {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_spanish_field_names() {
        let request = dto(json!({
            "marca": "Fiat",
            "modelo": "Cronos",
            "anio": 2020,
            "kilometraje": 50000,
            "estado": "bueno"
        }))
        .into_request()
        .unwrap();

        assert_eq!(request.make, "Fiat");
        assert_eq!(request.year, 2020);
        assert_eq!(request.mileage, 50_000);
        assert_eq!(request.condition, Condition::Good);
    }

    #[test]
    fn test_form_style_numbers() {
        let request = dto(json!({
            "make": "Fiat",
            "model": "Argo",
            "year": "2019",
            "mileage": "12000",
            "condition": "excellent"
        }))
        .into_request()
        .unwrap();
        assert_eq!(request.year, 2019);
        assert_eq!(request.mileage, 12_000);
    }

    #[test]
    fn test_missing_field_is_named() {
        let err = dto(json!({ "make": "Fiat", "model": "Cronos", "condition": "bueno" }))
            .into_request()
            .unwrap_err();
        assert!(matches!(err, QuoteError::Validation { field: "year", .. }));
    }

    #[test]
    fn test_non_integer_year() {
        let err = dto(json!({
            "make": "Fiat", "model": "Cronos", "year": 2020.5, "condition": "bueno"
        }))
        .into_request()
        .unwrap_err();
        assert!(matches!(err, QuoteError::Validation { field: "year", .. }));

        let err = dto(json!({
            "make": "Fiat", "model": "Cronos", "year": 2020, "mileage": "mucho", "condition": "bueno"
        }))
        .into_request()
        .unwrap_err();
        assert!(matches!(err, QuoteError::Validation { field: "mileage", .. }));
    }

    #[test]
    fn test_unknown_condition_falls_back_to_good() {
        let request = dto(json!({
            "make": "Fiat", "model": "Cronos", "year": 2020, "condition": "impecable"
        }))
        .into_request()
        .unwrap();
        assert_eq!(request.condition, Condition::Good);
        assert_eq!(request.mileage, 0);
    }

    #[test]
    fn test_installment_amounts() {
        let dto: InstallmentRequestDto =
            serde_json::from_value(json!({ "monto": 10000000, "enganche": "2000000" })).unwrap();
        assert_eq!(dto.amounts().unwrap(), (10_000_000.0, 2_000_000.0));

        let dto: InstallmentRequestDto = serde_json::from_value(json!({ "monto": 5000000 })).unwrap();
        assert_eq!(dto.amounts().unwrap(), (5_000_000.0, 0.0));

        let dto: InstallmentRequestDto = serde_json::from_value(json!({})).unwrap();
        assert!(matches!(
            dto.amounts(),
            Err(QuoteError::Validation { field: "amount", .. })
        ));
    }
}
