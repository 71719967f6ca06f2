//! Modelo de alertas de precio
//!
//! Una alerta activa coincide con un vehículo cuando se cumplen todos los
//! criterios presentes; los criterios vacíos no filtran.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

use super::vehicle::Vehicle;

#[derive(Debug, Clone, FromRow)]
pub struct PriceAlert {
    pub id: Uuid,
    pub user_id: Uuid,
    pub make: Option<String>,
    pub model: Option<String>,
    pub max_price: Option<Decimal>,
    pub min_year: Option<i32>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Criterios de una alerta nueva
#[derive(Debug, Clone, Default)]
pub struct AlertCriteria {
    pub make: Option<String>,
    pub model: Option<String>,
    pub max_price: Option<Decimal>,
    pub min_year: Option<i32>,
}

impl PriceAlert {
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        self.active
            && same_text(self.make.as_deref(), &vehicle.make)
            && same_text(self.model.as_deref(), &vehicle.model)
            && self.max_price.map_or(true, |max| vehicle.price <= max)
            && self.min_year.map_or(true, |min| vehicle.year >= min)
    }
}

fn same_text(criterion: Option<&str>, value: &str) -> bool {
    criterion.map_or(true, |c| c.trim().eq_ignore_ascii_case(value.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cronos() -> Vehicle {
        Vehicle {
            id: Uuid::new_v4(),
            make: "Fiat".to_string(),
            model: "Cronos".to_string(),
            description: String::new(),
            year: 2024,
            mileage: 0,
            condition: "excellent".to_string(),
            price: Decimal::new(15_000_000, 0),
            image: "/static/img/fiat-cronos.png".to_string(),
            stock: 5,
            category: Some("sedan".to_string()),
            featured: true,
            created_at: Utc::now(),
        }
    }

    fn alert() -> PriceAlert {
        PriceAlert {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            make: None,
            model: None,
            max_price: None,
            min_year: None,
            active: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_alert_matches_everything() {
        assert!(alert().matches(&cronos()));
    }

    #[test]
    fn test_inactive_alert_never_matches() {
        let alert = PriceAlert {
            active: false,
            ..alert()
        };
        assert!(!alert.matches(&cronos()));
    }

    #[test]
    fn test_criteria() {
        let alert = PriceAlert {
            make: Some("fiat".to_string()),
            max_price: Some(Decimal::new(16_000_000, 0)),
            min_year: Some(2023),
            ..alert()
        };
        assert!(alert.matches(&cronos()));

        let cheaper = PriceAlert {
            max_price: Some(Decimal::new(12_000_000, 0)),
            ..alert.clone()
        };
        assert!(!cheaper.matches(&cronos()));

        let other_model = PriceAlert {
            model: Some("Argo".to_string()),
            ..alert
        };
        assert!(!other_model.matches(&cronos()));
    }
}
