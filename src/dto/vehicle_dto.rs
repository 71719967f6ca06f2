use chrono::{DateTime, Datelike, Utc};
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::models::vehicle::{NewVehicle, Vehicle, VehicleChanges};
use crate::utils::errors::AppError;
use crate::utils::validation::{field_error, validate_enum, validate_not_empty, validate_positive};

/// Estados aceptados para un vehículo del catálogo
pub const VEHICLE_CONDITIONS: &[&str] = &["excellent", "very_good", "good", "regular"];

// Request para publicar un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[serde(alias = "marca")]
    #[validate(length(max = 80), custom = "validate_not_empty")]
    pub make: String,
    #[serde(alias = "modelo")]
    #[validate(length(max = 80), custom = "validate_not_empty")]
    pub model: String,
    #[serde(default, alias = "descripcion")]
    pub description: String,
    /// Por defecto el año en curso
    #[serde(default, alias = "anio")]
    #[validate(range(min = 1990, max = 2100, message = "Año fuera de rango"))]
    pub year: Option<i32>,
    #[serde(default, alias = "kilometraje")]
    #[validate(range(min = 0, message = "El kilometraje no puede ser negativo"))]
    pub mileage: i64,
    #[serde(default = "default_condition", alias = "estado")]
    pub condition: String,
    #[serde(alias = "precio")]
    pub price: f64,
    #[serde(default, alias = "imagen")]
    pub image: String,
    #[serde(default = "default_stock")]
    #[validate(range(min = 0, message = "El stock no puede ser negativo"))]
    pub stock: i32,
    #[serde(default, alias = "categoria")]
    pub category: Option<String>,
    #[serde(default, alias = "destacado")]
    pub featured: bool,
}

fn default_condition() -> String {
    "excellent".to_string()
}

fn default_stock() -> i32 {
    1
}

impl CreateVehicleRequest {
    pub fn into_new_vehicle(self) -> Result<NewVehicle, AppError> {
        self.validate()?;
        validate_positive(self.price).map_err(|e| field_error("price", e))?;
        let condition = self.condition.trim().to_lowercase();
        validate_enum(condition.as_str(), VEHICLE_CONDITIONS)
            .map_err(|e| field_error("condition", e))?;
        Ok(NewVehicle {
            price: to_price(self.price)?,
            make: self.make.trim().to_string(),
            model: self.model.trim().to_string(),
            description: self.description,
            year: self.year.unwrap_or_else(|| Utc::now().year()),
            mileage: self.mileage,
            condition,
            image: self.image,
            stock: self.stock,
            category: self.category,
            featured: self.featured,
        })
    }
}

// Request para actualizar un vehículo
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[serde(alias = "marca")]
    #[validate(length(max = 80), custom = "validate_not_empty")]
    pub make: Option<String>,
    #[serde(alias = "modelo")]
    #[validate(length(max = 80), custom = "validate_not_empty")]
    pub model: Option<String>,
    #[serde(alias = "descripcion")]
    pub description: Option<String>,
    #[serde(alias = "anio")]
    #[validate(range(min = 1990, max = 2100, message = "Año fuera de rango"))]
    pub year: Option<i32>,
    #[serde(alias = "kilometraje")]
    #[validate(range(min = 0, message = "El kilometraje no puede ser negativo"))]
    pub mileage: Option<i64>,
    #[serde(alias = "estado")]
    pub condition: Option<String>,
    #[serde(alias = "precio")]
    pub price: Option<f64>,
    #[serde(alias = "imagen")]
    pub image: Option<String>,
    #[validate(range(min = 0, message = "El stock no puede ser negativo"))]
    pub stock: Option<i32>,
    #[serde(alias = "categoria")]
    pub category: Option<String>,
    #[serde(alias = "destacado")]
    pub featured: Option<bool>,
}

impl UpdateVehicleRequest {
    pub fn into_changes(self) -> Result<VehicleChanges, AppError> {
        self.validate()?;
        if let Some(price) = self.price {
            validate_positive(price).map_err(|e| field_error("price", e))?;
        }
        let condition = self.condition.map(|c| c.trim().to_lowercase());
        if let Some(condition) = condition.as_deref() {
            validate_enum(condition, VEHICLE_CONDITIONS).map_err(|e| field_error("condition", e))?;
        }
        Ok(VehicleChanges {
            price: self.price.map(to_price).transpose()?,
            make: self.make,
            model: self.model,
            description: self.description,
            year: self.year,
            mileage: self.mileage,
            condition,
            image: self.image,
            stock: self.stock,
            category: self.category,
            featured: self.featured,
        })
    }
}

fn to_price(value: f64) -> Result<Decimal, AppError> {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp(2))
        .ok_or_else(|| field_error("price", ValidationError::new("El precio no es válido")))
}

// Response de vehículo
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: Uuid,
    pub make: String,
    pub model: String,
    pub description: String,
    pub year: i32,
    pub mileage: i64,
    pub condition: String,
    pub price: f64,
    pub image: String,
    pub stock: i32,
    pub category: Option<String>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(v: Vehicle) -> Self {
        Self {
            id: v.id,
            price: v.price.to_f64().unwrap_or_default(),
            make: v.make,
            model: v.model,
            description: v.description,
            year: v.year,
            mileage: v.mileage,
            condition: v.condition,
            image: v.image,
            stock: v.stock,
            category: v.category,
            featured: v.featured,
            created_at: v.created_at,
        }
    }
}
