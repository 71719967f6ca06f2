use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dto::vehicle_dto::VehicleResponse;
use crate::models::favorite::FavoriteVehicle;

#[derive(Debug, Deserialize)]
pub struct AddFavoriteRequest {
    #[serde(alias = "vehiculoId", alias = "vehiculo_id")]
    pub vehicle_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct FavoriteResponse {
    pub vehicle: VehicleResponse,
    pub added_at: DateTime<Utc>,
}

impl From<FavoriteVehicle> for FavoriteResponse {
    fn from(favorite: FavoriteVehicle) -> Self {
        Self {
            vehicle: favorite.vehicle.into(),
            added_at: favorite.added_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FavoriteCheckResponse {
    pub vehicle_id: Uuid,
    pub is_favorite: bool,
}
