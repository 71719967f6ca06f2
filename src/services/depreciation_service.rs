//! Cotizador de vehículos usados
//!
//! Estima el valor de reventa a partir de la antigüedad, el kilometraje y el
//! estado del vehículo. Es una función pura sobre `QuoteSettings`: no hace
//! I/O ni guarda estado, y la misma entrada siempre da el mismo resultado.

use std::sync::Arc;

use chrono::{Datelike, Utc};

use crate::config::QuoteSettings;
use crate::models::quote::{QuoteBreakdown, QuoteRequest, QuoteResult};
use crate::utils::errors::QuoteError;

const KM_STEP: f64 = 10_000.0;

#[derive(Debug, Clone)]
pub struct DepreciationCalculator {
    settings: Arc<QuoteSettings>,
}

impl DepreciationCalculator {
    pub fn new(settings: Arc<QuoteSettings>) -> Self {
        Self { settings }
    }

    /// Cotizar usando el año calendario actual
    pub fn estimate(&self, request: &QuoteRequest) -> Result<QuoteResult, QuoteError> {
        self.estimate_at(request, Utc::now().year())
    }

    /// Cotizar tomando `current_year` como año de referencia
    pub fn estimate_at(
        &self,
        request: &QuoteRequest,
        current_year: i32,
    ) -> Result<QuoteResult, QuoteError> {
        let settings = &self.settings;

        if request.year < settings.min_year || request.year > current_year + 1 {
            return Err(QuoteError::validation(
                "year",
                format!(
                    "El año debe estar entre {} y {}",
                    settings.min_year,
                    current_year + 1
                ),
            ));
        }
        if request.mileage < 0 {
            return Err(QuoteError::validation(
                "mileage",
                "El kilometraje no puede ser negativo",
            ));
        }

        // Un modelo del año próximo no suma valor
        let years_old = (current_year - request.year).max(0);
        let year_depreciation = years_old as f64 * settings.per_year_depreciation;
        let mileage_depreciation =
            (request.mileage as f64 / KM_STEP) * settings.per_ten_thousand_km_depreciation;
        let multiplier = settings.multipliers.for_condition(request.condition);

        let raw = (settings.base_price - year_depreciation - mileage_depreciation) * multiplier;
        if !raw.is_finite() {
            return Err(QuoteError::InternalComputation(format!(
                "valor estimado no finito para {} {}",
                request.make, request.model
            )));
        }

        let estimated_value = raw.max(settings.floor_value).round() as i64;
        let year_depreciation_factor = if settings.base_price > 0.0 {
            round_to(year_depreciation / settings.base_price, 4)
        } else {
            0.0
        };

        Ok(QuoteResult {
            estimated_value,
            breakdown: QuoteBreakdown {
                base_price: settings.base_price.round() as i64,
                years_old,
                year_depreciation_factor,
                year_depreciation: year_depreciation.round() as i64,
                mileage_depreciation: mileage_depreciation.round() as i64,
                condition: request.condition,
                condition_multiplier: multiplier,
            },
        })
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::quote::Condition;

    fn calculator() -> DepreciationCalculator {
        DepreciationCalculator::new(Arc::new(QuoteSettings::default()))
    }

    fn request(year: i32, mileage: i64, condition: Condition) -> QuoteRequest {
        QuoteRequest {
            make: "Fiat".to_string(),
            model: "Cronos".to_string(),
            year,
            mileage,
            condition,
        }
    }

    #[test]
    fn test_cronos_2020_good() {
        let result = calculator()
            .estimate_at(&request(2020, 50_000, Condition::Good), 2025)
            .unwrap();

        assert_eq!(result.estimated_value, 4_760_000);
        assert_eq!(result.breakdown.base_price, 8_000_000);
        assert_eq!(result.breakdown.years_old, 5);
        assert_eq!(result.breakdown.year_depreciation, 2_000_000);
        assert_eq!(result.breakdown.mileage_depreciation, 400_000);
        assert_eq!(result.breakdown.condition_multiplier, 0.85);
        assert_eq!(result.breakdown.year_depreciation_factor, 0.25);
    }

    #[test]
    fn test_floor_applies_to_old_vehicles() {
        let result = calculator()
            .estimate_at(&request(1990, 400_000, Condition::Regular), 2025)
            .unwrap();
        assert_eq!(result.estimated_value, 500_000);
    }

    #[test]
    fn test_year_bounds() {
        let calc = calculator();
        assert!(calc.estimate_at(&request(1989, 0, Condition::Good), 2025).is_err());
        assert!(calc.estimate_at(&request(2027, 0, Condition::Good), 2025).is_err());
        assert!(calc.estimate_at(&request(2026, 0, Condition::Good), 2025).is_ok());

        match calc.estimate_at(&request(1800, 0, Condition::Good), 2025) {
            Err(QuoteError::Validation { field, .. }) => assert_eq!(field, "year"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_next_year_model_is_not_appreciated() {
        let calc = calculator();
        let next = calc.estimate_at(&request(2026, 0, Condition::VeryGood), 2025).unwrap();
        let current = calc.estimate_at(&request(2025, 0, Condition::VeryGood), 2025).unwrap();
        assert_eq!(next.estimated_value, current.estimated_value);
        assert_eq!(next.breakdown.years_old, 0);
    }

    #[test]
    fn test_negative_mileage_is_rejected() {
        match calculator().estimate_at(&request(2020, -1, Condition::Good), 2025) {
            Err(QuoteError::Validation { field, .. }) => assert_eq!(field, "mileage"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_estimate_is_deterministic() {
        let calc = calculator();
        let req = request(2018, 73_500, Condition::Excellent);
        assert_eq!(calc.estimate_at(&req, 2025), calc.estimate_at(&req, 2025));
    }

    #[test]
    fn test_more_mileage_never_increases_value() {
        let calc = calculator();
        let mut previous = i64::MAX;
        for mileage in (0..=500_000).step_by(12_345) {
            let value = calc
                .estimate_at(&request(2019, mileage, Condition::VeryGood), 2025)
                .unwrap()
                .estimated_value;
            assert!(value <= previous);
            previous = value;
        }
    }

    #[test]
    fn test_condition_orders_value() {
        let calc = calculator();
        let value = |condition| {
            calc.estimate_at(&request(2021, 30_000, condition), 2025)
                .unwrap()
                .estimated_value
        };
        assert!(value(Condition::Excellent) > value(Condition::VeryGood));
        assert!(value(Condition::VeryGood) > value(Condition::Good));
        assert!(value(Condition::Good) > value(Condition::Regular));
    }

    #[test]
    fn test_custom_settings_are_used() {
        let settings = QuoteSettings {
            base_price: 10_000_000.0,
            ..QuoteSettings::default()
        };
        let calc = DepreciationCalculator::new(Arc::new(settings));
        let result = calc
            .estimate_at(&request(2025, 0, Condition::VeryGood), 2025)
            .unwrap();
        assert_eq!(result.estimated_value, 10_000_000);
    }
}
