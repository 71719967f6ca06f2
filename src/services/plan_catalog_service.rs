//! Catálogo de planes de financiación
//!
//! Lista fija de planes con sus límites de elegibilidad. Los filtros son
//! predicados independientes que sólo acotan el conjunto: nunca reordenan.

use chrono::NaiveDate;

use crate::models::financing_plan::{EligibilityDetails, FinancingPlan, PlanFilters};

#[derive(Debug, Clone)]
pub struct FinancingPlanCatalog {
    plans: Vec<FinancingPlan>,
}

impl FinancingPlanCatalog {
    pub fn new(plans: Vec<FinancingPlan>) -> Self {
        Self { plans }
    }

    /// Planes vigentes de la concesionaria
    pub fn standard() -> Self {
        let valid_until = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap_or(NaiveDate::MAX);
        let docs = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        Self::new(vec![
            FinancingPlan {
                id: "plan-a".to_string(),
                name: "Plan 12 Cuotas Sin Interés".to_string(),
                description: "Ideal para compras rápidas. Pagá tu auto en 12 cuotas fijas sin interés."
                    .to_string(),
                installment_count: 12,
                annual_interest_rate: 0.0,
                monthly_rate: 0.0,
                min_down_payment_pct: 20.0,
                min_amount: 5_000_000,
                max_amount: 15_000_000,
                valid_until,
                featured: true,
                eligibility: EligibilityDetails {
                    requires_payslip: true,
                    min_age: 18,
                    max_age: 75,
                    documents: docs(&["DNI", "Recibo de sueldo", "Servicio a nombre"]),
                    kind: None,
                },
            },
            FinancingPlan {
                id: "plan-b".to_string(),
                name: "Plan 24 Cuotas Tasa Promocional".to_string(),
                description: "Tasa promocional del 5% anual. Perfecto para financiar sin comprometer tu presupuesto."
                    .to_string(),
                installment_count: 24,
                annual_interest_rate: 5.0,
                monthly_rate: 0.42,
                min_down_payment_pct: 15.0,
                min_amount: 3_000_000,
                max_amount: 20_000_000,
                valid_until,
                featured: true,
                eligibility: EligibilityDetails {
                    requires_payslip: true,
                    min_age: 21,
                    max_age: 70,
                    documents: docs(&["DNI", "Recibo de sueldo últimos 3 meses", "Servicio a nombre"]),
                    kind: None,
                },
            },
            FinancingPlan {
                id: "plan-c".to_string(),
                name: "Plan 36 Cuotas Extendido".to_string(),
                description: "Financiación a largo plazo con cuotas más bajas. Tasa del 8% anual."
                    .to_string(),
                installment_count: 36,
                annual_interest_rate: 8.0,
                monthly_rate: 0.67,
                min_down_payment_pct: 10.0,
                min_amount: 2_000_000,
                max_amount: 25_000_000,
                valid_until,
                featured: false,
                eligibility: EligibilityDetails {
                    requires_payslip: true,
                    min_age: 21,
                    max_age: 65,
                    documents: docs(&[
                        "DNI",
                        "Recibo de sueldo últimos 6 meses",
                        "Servicio a nombre",
                        "Garantía adicional",
                    ]),
                    kind: None,
                },
            },
            FinancingPlan {
                id: "plan-100".to_string(),
                name: "Plan 100% Financiado".to_string(),
                description: "Sin enganche. Financiamos el 100% del valor del vehículo en hasta 48 cuotas."
                    .to_string(),
                installment_count: 48,
                annual_interest_rate: 12.0,
                monthly_rate: 1.0,
                min_down_payment_pct: 0.0,
                min_amount: 4_000_000,
                max_amount: 18_000_000,
                valid_until,
                featured: true,
                eligibility: EligibilityDetails {
                    requires_payslip: true,
                    min_age: 25,
                    max_age: 60,
                    documents: docs(&[
                        "DNI",
                        "Recibo de sueldo últimos 6 meses",
                        "Servicio a nombre",
                        "Constancia de trabajo",
                        "Garantía",
                    ]),
                    kind: None,
                },
            },
            FinancingPlan {
                id: "plan-corporativo".to_string(),
                name: "Plan Corporativo".to_string(),
                description: "Especial para empresas y autónomos. Condiciones preferenciales."
                    .to_string(),
                installment_count: 24,
                annual_interest_rate: 3.0,
                monthly_rate: 0.25,
                min_down_payment_pct: 25.0,
                min_amount: 10_000_000,
                max_amount: 50_000_000,
                valid_until,
                featured: false,
                eligibility: EligibilityDetails {
                    requires_payslip: false,
                    min_age: 21,
                    max_age: 75,
                    documents: docs(&[
                        "CUIT/CUIL",
                        "Últimas 3 DDJJ",
                        "Constancia de inscripción",
                        "Balance último año",
                    ]),
                    kind: Some("empresarial".to_string()),
                },
            },
        ])
    }

    /// Recorrer los planes que pasan todos los filtros, en orden de catálogo.
    ///
    /// El iterador es perezoso; se puede volver a pedir cuantas veces haga falta.
    pub fn iter_plans<'a>(
        &'a self,
        filters: &'a PlanFilters,
    ) -> impl Iterator<Item = &'a FinancingPlan> + 'a {
        self.plans
            .iter()
            .filter(move |plan| {
                filters
                    .max_installments
                    .filter(|&max| max > 0)
                    .map_or(true, |max| plan.installment_count <= max)
            })
            .filter(move |plan| !filters.featured_only || plan.featured)
            .filter(move |plan| {
                filters
                    .amount
                    .filter(|&amount| amount > 0.0)
                    .map_or(true, |amount| plan.accepts_amount(amount))
            })
    }

    pub fn list_plans(&self, filters: &PlanFilters) -> Vec<FinancingPlan> {
        self.iter_plans(filters).cloned().collect()
    }

    pub fn find(&self, plan_id: &str) -> Option<&FinancingPlan> {
        self.plans.iter().find(|plan| plan.id == plan_id)
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(plans: &[FinancingPlan]) -> Vec<&str> {
        plans.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_no_filters_returns_every_plan_in_order() {
        let catalog = FinancingPlanCatalog::standard();
        let plans = catalog.list_plans(&PlanFilters::default());
        assert_eq!(
            ids(&plans),
            vec!["plan-a", "plan-b", "plan-c", "plan-100", "plan-corporativo"]
        );
    }

    #[test]
    fn test_max_installments_excludes_longer_plans() {
        let catalog = FinancingPlanCatalog::standard();
        let filters = PlanFilters {
            max_installments: Some(24),
            ..Default::default()
        };
        let plans = catalog.list_plans(&filters);
        assert!(plans.iter().all(|p| p.installment_count <= 24));
        assert_eq!(ids(&plans), vec!["plan-a", "plan-b", "plan-corporativo"]);
    }

    #[test]
    fn test_featured_only() {
        let catalog = FinancingPlanCatalog::standard();
        let filters = PlanFilters {
            featured_only: true,
            ..Default::default()
        };
        assert_eq!(
            ids(&catalog.list_plans(&filters)),
            vec!["plan-a", "plan-b", "plan-100"]
        );
    }

    #[test]
    fn test_amount_filter_is_inclusive() {
        let catalog = FinancingPlanCatalog::standard();
        let filters = PlanFilters {
            amount: Some(20_000_000.0),
            ..Default::default()
        };
        assert_eq!(
            ids(&catalog.list_plans(&filters)),
            vec!["plan-b", "plan-c", "plan-corporativo"]
        );
    }

    #[test]
    fn test_filters_compose() {
        let catalog = FinancingPlanCatalog::standard();
        let filters = PlanFilters {
            max_installments: Some(36),
            featured_only: true,
            amount: Some(16_000_000.0),
        };
        assert_eq!(ids(&catalog.list_plans(&filters)), vec!["plan-b"]);
    }

    #[test]
    fn test_zero_filters_are_ignored() {
        let catalog = FinancingPlanCatalog::standard();
        let filters = PlanFilters {
            max_installments: Some(0),
            amount: Some(0.0),
            ..Default::default()
        };
        assert_eq!(catalog.list_plans(&filters).len(), catalog.len());
    }

    #[test]
    fn test_iterator_is_restartable() {
        let catalog = FinancingPlanCatalog::standard();
        let filters = PlanFilters::default();
        assert_eq!(catalog.iter_plans(&filters).count(), catalog.len());
        assert_eq!(catalog.iter_plans(&filters).count(), catalog.len());
    }

    #[test]
    fn test_find() {
        let catalog = FinancingPlanCatalog::standard();
        assert_eq!(catalog.find("plan-100").map(|p| p.installment_count), Some(48));
        assert!(catalog.find("plan-z").is_none());
    }
}
