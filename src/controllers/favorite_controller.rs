use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::dto::common_dto::ApiResponse;
use crate::dto::favorite_dto::{FavoriteCheckResponse, FavoriteResponse};
use crate::models::favorite::Favorite;
use crate::repositories::favorite_repository::FavoriteRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{not_found_error, AppError, AppResult};

pub struct FavoriteController {
    favorites: FavoriteRepository,
    vehicles: VehicleRepository,
}

impl FavoriteController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            favorites: FavoriteRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    pub async fn add(&self, user_id: Uuid, vehicle_id: Uuid) -> AppResult<ApiResponse<Uuid>> {
        if !self.vehicles.exists(vehicle_id).await? {
            return Err(not_found_error("Vehículo", &vehicle_id.to_string()));
        }

        let Favorite { vehicle_id, .. } = self
            .favorites
            .add(user_id, vehicle_id)
            .await?
            .ok_or_else(|| AppError::Conflict("El vehículo ya está en favoritos".to_string()))?;

        info!("⭐ Favorito agregado: usuario={} vehículo={}", user_id, vehicle_id);
        Ok(ApiResponse::success_with_message(
            vehicle_id,
            "Vehículo agregado a favoritos",
        ))
    }

    pub async fn remove(&self, user_id: Uuid, vehicle_id: Uuid) -> AppResult<ApiResponse<()>> {
        if !self.favorites.remove(user_id, vehicle_id).await? {
            return Err(AppError::NotFound("El vehículo no está en favoritos".to_string()));
        }
        Ok(ApiResponse::message("Vehículo eliminado de favoritos"))
    }

    pub async fn list(&self, user_id: Uuid) -> AppResult<Vec<FavoriteResponse>> {
        let favorites = self.favorites.find_by_user(user_id).await?;
        Ok(favorites.into_iter().map(FavoriteResponse::from).collect())
    }

    pub async fn check(&self, user_id: Uuid, vehicle_id: Uuid) -> AppResult<FavoriteCheckResponse> {
        Ok(FavoriteCheckResponse {
            vehicle_id,
            is_favorite: self.favorites.exists(user_id, vehicle_id).await?,
        })
    }
}
