use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use super::vehicle::Vehicle;

#[derive(Debug, Clone, FromRow)]
pub struct Favorite {
    pub user_id: Uuid,
    pub vehicle_id: Uuid,
    pub added_at: DateTime<Utc>,
}

/// Vehículo favorito junto con la fecha en que se agregó
#[derive(Debug, Clone, FromRow)]
pub struct FavoriteVehicle {
    #[sqlx(flatten)]
    pub vehicle: Vehicle,
    pub added_at: DateTime<Utc>,
}
