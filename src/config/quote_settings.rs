//! Parámetros del cotizador de usados
//!
//! Estructura inmutable que se construye una sola vez al arrancar y se
//! comparte por `Arc` dentro de `AppState`.

use crate::models::quote::Condition;

use super::environment::{parse_var, ConfigError};

/// Multiplicadores por estado del vehículo
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionMultipliers {
    pub excellent: f64,
    pub very_good: f64,
    pub good: f64,
    pub regular: f64,
}

impl Default for ConditionMultipliers {
    fn default() -> Self {
        Self {
            excellent: 1.15,
            very_good: 1.0,
            good: 0.85,
            regular: 0.65,
        }
    }
}

impl ConditionMultipliers {
    pub fn for_condition(&self, condition: Condition) -> f64 {
        match condition {
            Condition::Excellent => self.excellent,
            Condition::VeryGood => self.very_good,
            Condition::Good => self.good,
            Condition::Regular => self.regular,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuoteSettings {
    /// Valor de referencia de un usado antes de depreciar
    pub base_price: f64,
    /// Depreciación por cada año de antigüedad
    pub per_year_depreciation: f64,
    /// Depreciación por cada 10.000 km recorridos
    pub per_ten_thousand_km_depreciation: f64,
    /// Valor mínimo que puede devolver una cotización
    pub floor_value: f64,
    /// Primer año de fabricación aceptado
    pub min_year: i32,
    pub multipliers: ConditionMultipliers,
}

impl Default for QuoteSettings {
    fn default() -> Self {
        Self {
            base_price: 8_000_000.0,
            per_year_depreciation: 400_000.0,
            per_ten_thousand_km_depreciation: 80_000.0,
            floor_value: 500_000.0,
            min_year: 1990,
            multipliers: ConditionMultipliers::default(),
        }
    }
}

impl QuoteSettings {
    /// Valores por defecto con overrides opcionales desde el entorno
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Self {
            base_price: parse_var("QUOTE_BASE_PRICE", defaults.base_price)?,
            per_year_depreciation: parse_var("QUOTE_YEAR_DEPRECIATION", defaults.per_year_depreciation)?,
            per_ten_thousand_km_depreciation: parse_var(
                "QUOTE_KM_DEPRECIATION",
                defaults.per_ten_thousand_km_depreciation,
            )?,
            floor_value: parse_var("QUOTE_FLOOR_VALUE", defaults.floor_value)?,
            ..defaults
        }
        .validated()
    }

    /// Rechaza valores no finitos, un piso negativo o un precio base no positivo
    pub fn validated(self) -> Result<Self, ConfigError> {
        let checks = [
            ("QUOTE_BASE_PRICE", self.base_price, self.base_price > 0.0),
            ("QUOTE_YEAR_DEPRECIATION", self.per_year_depreciation, true),
            ("QUOTE_KM_DEPRECIATION", self.per_ten_thousand_km_depreciation, true),
            ("QUOTE_FLOOR_VALUE", self.floor_value, self.floor_value >= 0.0),
        ];
        for (name, value, in_range) in checks {
            if !value.is_finite() || !in_range {
                return Err(ConfigError::Invalid {
                    name,
                    value: value.to_string(),
                });
            }
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplier_table() {
        let table = ConditionMultipliers::default();
        assert_eq!(table.for_condition(Condition::Excellent), 1.15);
        assert_eq!(table.for_condition(Condition::VeryGood), 1.0);
        assert_eq!(table.for_condition(Condition::Good), 0.85);
        assert_eq!(table.for_condition(Condition::Regular), 0.65);
    }

    #[test]
    fn test_floor_is_non_negative() {
        assert!(QuoteSettings::default().floor_value >= 0.0);
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(QuoteSettings::default().validated().is_ok());
    }

    #[test]
    fn test_rejects_unusable_overrides() {
        let nan_floor = QuoteSettings {
            floor_value: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            nan_floor.validated(),
            Err(ConfigError::Invalid { name: "QUOTE_FLOOR_VALUE", .. })
        ));

        let negative_floor = QuoteSettings {
            floor_value: -1.0,
            ..Default::default()
        };
        assert!(negative_floor.validated().is_err());

        let infinite_base = QuoteSettings {
            base_price: f64::INFINITY,
            ..Default::default()
        };
        assert!(matches!(
            infinite_base.validated(),
            Err(ConfigError::Invalid { name: "QUOTE_BASE_PRICE", .. })
        ));

        let zero_base = QuoteSettings {
            base_price: 0.0,
            ..Default::default()
        };
        assert!(zero_base.validated().is_err());

        let nan_rate = QuoteSettings {
            per_year_depreciation: f64::NAN,
            ..Default::default()
        };
        assert!(nan_rate.validated().is_err());
    }
}
