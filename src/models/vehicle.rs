//! Modelo de Vehicle
//!
//! Mapea exactamente a la tabla vehicles con primary key 'id'.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

/// Vehículo publicado en el catálogo
#[derive(Debug, Clone, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub make: String,
    pub model: String,
    pub description: String,
    pub year: i32,
    pub mileage: i64,
    pub condition: String,
    pub price: Decimal,
    pub image: String,
    pub stock: i32,
    pub category: Option<String>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

/// Datos para insertar un vehículo nuevo
#[derive(Debug, Clone)]
pub struct NewVehicle {
    pub make: String,
    pub model: String,
    pub description: String,
    pub year: i32,
    pub mileage: i64,
    pub condition: String,
    pub price: Decimal,
    pub image: String,
    pub stock: i32,
    pub category: Option<String>,
    pub featured: bool,
}

/// Cambios parciales; `None` conserva el valor actual
#[derive(Debug, Clone, Default)]
pub struct VehicleChanges {
    pub make: Option<String>,
    pub model: Option<String>,
    pub description: Option<String>,
    pub year: Option<i32>,
    pub mileage: Option<i64>,
    pub condition: Option<String>,
    pub price: Option<Decimal>,
    pub image: Option<String>,
    pub stock: Option<i32>,
    pub category: Option<String>,
    pub featured: Option<bool>,
}
