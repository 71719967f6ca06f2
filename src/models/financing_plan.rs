//! Modelo de planes de financiación
//!
//! Los planes son configuración estática: no se persisten ni se modifican
//! en tiempo de ejecución.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Requisitos del solicitante para acceder a un plan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EligibilityDetails {
    pub requires_payslip: bool,
    pub min_age: u8,
    pub max_age: u8,
    pub documents: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancingPlan {
    pub id: String,
    pub name: String,
    pub description: String,
    pub installment_count: u32,
    /// Tasa nominal anual, en porcentaje
    pub annual_interest_rate: f64,
    /// Tasa mensual, en porcentaje
    pub monthly_rate: f64,
    pub min_down_payment_pct: f64,
    pub min_amount: i64,
    pub max_amount: i64,
    pub valid_until: NaiveDate,
    pub featured: bool,
    pub eligibility: EligibilityDetails,
}

impl FinancingPlan {
    pub fn accepts_amount(&self, amount: f64) -> bool {
        self.min_amount as f64 <= amount && amount <= self.max_amount as f64
    }
}

/// Filtros opcionales del listado de planes.
///
/// Acepta los nombres de query string del sitio (`cuotas_max`, `destacados`,
/// `monto`). Un `0` en `cuotas_max` o `monto` equivale a no filtrar, y
/// `destacados` solo filtra con `true` (sin distinguir mayúsculas).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlanFilters {
    #[serde(alias = "cuotas_max")]
    pub max_installments: Option<u32>,
    #[serde(default, alias = "destacados", deserialize_with = "true_flag")]
    pub featured_only: bool,
    #[serde(alias = "monto")]
    pub amount: Option<f64>,
}

fn true_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.map_or(false, |v| v.trim().eq_ignore_ascii_case("true")))
}

/// Resultado del cálculo de cuotas, en unidades enteras de moneda
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstallmentResult {
    pub plan_id: String,
    pub plan_name: String,
    pub vehicle_amount: i64,
    pub down_payment: i64,
    pub financed_amount: i64,
    pub installment_count: u32,
    pub installment: i64,
    pub total_paid: i64,
    pub total_interest: i64,
    pub annual_interest_rate: f64,
    pub monthly_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn featured(flag: &str) -> bool {
        serde_json::from_value::<PlanFilters>(json!({ "destacados": flag }))
            .unwrap()
            .featured_only
    }

    #[test]
    fn test_featured_flag_is_lenient() {
        assert!(featured("true"));
        assert!(featured("True"));
        assert!(!featured("1"));
        assert!(!featured(""));
        assert!(!serde_json::from_value::<PlanFilters>(json!({})).unwrap().featured_only);
    }
}
