//! Modelos del cotizador de usados
//!
//! `QuoteRequest` y `QuoteResult` son efímeros; `StoredQuote` es el registro
//! que se guarda en el historial del usuario cuando cotiza autenticado.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado general del vehículo a cotizar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Excellent,
    VeryGood,
    Good,
    Regular,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Excellent => "excellent",
            Condition::VeryGood => "very_good",
            Condition::Good => "good",
            Condition::Regular => "regular",
        }
    }

    /// Reconoce las etiquetas en castellano y en inglés
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = label.trim().to_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "excelente" | "excellent" => Some(Condition::Excellent),
            "muy_bueno" | "very_good" | "verygood" => Some(Condition::VeryGood),
            "bueno" | "good" => Some(Condition::Good),
            "regular" => Some(Condition::Regular),
            _ => None,
        }
    }
}

impl Default for Condition {
    fn default() -> Self {
        Condition::Good
    }
}

/// Datos de entrada de una cotización
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteRequest {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub mileage: i64,
    pub condition: Condition,
}

/// Desglose del cálculo
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteBreakdown {
    pub base_price: i64,
    pub years_old: i32,
    pub year_depreciation_factor: f64,
    pub year_depreciation: i64,
    pub mileage_depreciation: i64,
    pub condition: Condition,
    pub condition_multiplier: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteResult {
    pub estimated_value: i64,
    pub breakdown: QuoteBreakdown,
}

/// Cotización guardada en el historial de un usuario
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StoredQuote {
    pub id: Uuid,
    pub user_id: Uuid,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub mileage: i64,
    pub condition: String,
    pub estimated_value: i64,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_labels() {
        assert_eq!(Condition::from_label("Excelente"), Some(Condition::Excellent));
        assert_eq!(Condition::from_label("muy bueno"), Some(Condition::VeryGood));
        assert_eq!(Condition::from_label("very_good"), Some(Condition::VeryGood));
        assert_eq!(Condition::from_label("BUENO"), Some(Condition::Good));
        assert_eq!(Condition::from_label("regular"), Some(Condition::Regular));
        assert_eq!(Condition::from_label("destruido"), None);
    }

    #[test]
    fn test_default_condition_is_good() {
        assert_eq!(Condition::default(), Condition::Good);
    }
}
