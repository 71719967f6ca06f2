//! Calculadora de cuotas
//!
//! Dado un plan del catálogo y el monto del vehículo calcula la cuota
//! mensual: división simple para planes sin interés, sistema francés para
//! el resto.

use std::sync::Arc;

use crate::models::financing_plan::{FinancingPlan, InstallmentResult};
use crate::services::plan_catalog_service::FinancingPlanCatalog;
use crate::utils::errors::QuoteError;

#[derive(Debug, Clone)]
pub struct InstallmentCalculator {
    catalog: Arc<FinancingPlanCatalog>,
}

impl InstallmentCalculator {
    pub fn new(catalog: Arc<FinancingPlanCatalog>) -> Self {
        Self { catalog }
    }

    pub fn compute_installment(
        &self,
        plan_id: &str,
        vehicle_amount: f64,
        down_payment: f64,
    ) -> Result<InstallmentResult, QuoteError> {
        let plan = self
            .catalog
            .find(plan_id)
            .ok_or_else(|| QuoteError::PlanNotFound(plan_id.to_string()))?;

        if !vehicle_amount.is_finite() || vehicle_amount <= 0.0 {
            return Err(QuoteError::validation("amount", "El monto debe ser un número positivo"));
        }
        if !down_payment.is_finite() || down_payment < 0.0 {
            return Err(QuoteError::validation(
                "down_payment",
                "El enganche no puede ser negativo",
            ));
        }
        if !plan.accepts_amount(vehicle_amount) {
            return Err(QuoteError::AmountOutOfRange {
                min: plan.min_amount,
                max: plan.max_amount,
            });
        }

        let required = vehicle_amount * plan.min_down_payment_pct / 100.0;
        if down_payment < required {
            return Err(QuoteError::InsufficientDownPayment {
                required: required.round() as i64,
                pct: plan.min_down_payment_pct,
            });
        }
        if down_payment > vehicle_amount {
            return Err(QuoteError::validation(
                "down_payment",
                "El enganche no puede superar el monto del vehículo",
            ));
        }

        let financed = vehicle_amount - down_payment;
        let (installment, total_paid) = amortize(plan, financed)?;

        Ok(InstallmentResult {
            plan_id: plan.id.clone(),
            plan_name: plan.name.clone(),
            vehicle_amount: vehicle_amount.round() as i64,
            down_payment: down_payment.round() as i64,
            financed_amount: financed.round() as i64,
            installment_count: plan.installment_count,
            installment: installment.round() as i64,
            total_paid: total_paid.round() as i64,
            total_interest: (total_paid - financed).round() as i64,
            annual_interest_rate: plan.annual_interest_rate,
            monthly_rate: plan.monthly_rate,
        })
    }
}

/// Devuelve (cuota, total pagado) sin redondear
fn amortize(plan: &FinancingPlan, financed: f64) -> Result<(f64, f64), QuoteError> {
    let n = plan.installment_count;
    if n == 0 {
        return Err(QuoteError::InternalComputation(format!(
            "el plan {} no tiene cuotas",
            plan.id
        )));
    }

    let rate = plan.monthly_rate / 100.0;
    let (installment, total_paid) = if rate == 0.0 {
        (financed / n as f64, financed)
    } else {
        let growth = (1.0 + rate).powi(n as i32);
        let installment = financed * (rate * growth) / (growth - 1.0);
        (installment, installment * n as f64)
    };

    if !installment.is_finite() || !total_paid.is_finite() {
        return Err(QuoteError::InternalComputation(format!(
            "cuota no finita para el plan {}",
            plan.id
        )));
    }
    Ok((installment, total_paid))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calculator() -> InstallmentCalculator {
        InstallmentCalculator::new(Arc::new(FinancingPlanCatalog::standard()))
    }

    #[test]
    fn test_interest_free_plan() {
        let result = calculator()
            .compute_installment("plan-a", 10_000_000.0, 2_000_000.0)
            .unwrap();

        assert_eq!(result.financed_amount, 8_000_000);
        assert_eq!(result.installment, 666_667);
        assert_eq!(result.total_paid, 8_000_000);
        assert_eq!(result.total_interest, 0);
        assert!((result.installment * 12 - result.financed_amount).abs() <= 12);
    }

    #[test]
    fn test_french_amortization() {
        let result = calculator()
            .compute_installment("plan-b", 10_000_000.0, 2_000_000.0)
            .unwrap();

        assert_eq!(result.financed_amount, 8_000_000);
        assert_eq!(result.installment_count, 24);
        assert!(result.total_paid > result.financed_amount);
        assert_eq!(result.total_interest, result.total_paid - result.financed_amount);
        // 8M a 0.42% mensual en 24 cuotas ronda los 351.100
        assert!(result.installment > 350_000 && result.installment < 351_500);
    }

    #[test]
    fn test_full_financing_without_down_payment() {
        let result = calculator()
            .compute_installment("plan-100", 12_000_000.0, 0.0)
            .unwrap();
        assert_eq!(result.financed_amount, 12_000_000);
        assert!(result.total_paid > 12_000_000);
    }

    #[test]
    fn test_unknown_plan() {
        assert_eq!(
            calculator().compute_installment("plan-z", 10_000_000.0, 0.0),
            Err(QuoteError::PlanNotFound("plan-z".to_string()))
        );
    }

    #[test]
    fn test_amount_out_of_range() {
        assert_eq!(
            calculator().compute_installment("plan-a", 16_000_000.0, 5_000_000.0),
            Err(QuoteError::AmountOutOfRange {
                min: 5_000_000,
                max: 15_000_000
            })
        );
    }

    #[test]
    fn test_insufficient_down_payment() {
        assert_eq!(
            calculator().compute_installment("plan-a", 10_000_000.0, 1_000_000.0),
            Err(QuoteError::InsufficientDownPayment {
                required: 2_000_000,
                pct: 20.0
            })
        );
    }

    #[test]
    fn test_down_payment_above_amount() {
        assert!(matches!(
            calculator().compute_installment("plan-a", 10_000_000.0, 11_000_000.0),
            Err(QuoteError::Validation { field: "down_payment", .. })
        ));
    }

    #[test]
    fn test_negative_values_are_rejected() {
        let calc = calculator();
        assert!(matches!(
            calc.compute_installment("plan-100", -5.0, 0.0),
            Err(QuoteError::Validation { field: "amount", .. })
        ));
        assert!(matches!(
            calc.compute_installment("plan-100", 5_000_000.0, -1.0),
            Err(QuoteError::Validation { field: "down_payment", .. })
        ));
    }

    #[test]
    fn test_every_interest_plan_pays_more_than_financed() {
        let catalog = Arc::new(FinancingPlanCatalog::standard());
        let calc = InstallmentCalculator::new(catalog.clone());
        for plan in catalog.list_plans(&Default::default()) {
            let amount = plan.min_amount as f64;
            let down = amount * plan.min_down_payment_pct / 100.0;
            let result = calc.compute_installment(&plan.id, amount, down).unwrap();
            if plan.monthly_rate > 0.0 {
                assert!(result.total_paid > result.financed_amount, "{}", plan.id);
            } else {
                let diff = result.installment * plan.installment_count as i64 - result.financed_amount;
                assert!(diff.abs() <= plan.installment_count as i64, "{}", plan.id);
            }
        }
    }
}
