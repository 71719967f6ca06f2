use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::dto::common_dto::ApiResponse;
use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest, VehicleResponse};
use crate::repositories::alert_repository::AlertRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{not_found_error, AppResult};

pub struct VehicleController {
    repository: VehicleRepository,
    alerts: AlertRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool.clone()),
            alerts: AlertRepository::new(pool),
        }
    }

    pub async fn list(&self) -> AppResult<Vec<VehicleResponse>> {
        let vehicles = self.repository.find_all().await?;
        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn featured(&self) -> AppResult<Vec<VehicleResponse>> {
        let vehicles = self.repository.find_featured().await?;
        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<VehicleResponse> {
        self.repository
            .find_by_id(id)
            .await?
            .map(VehicleResponse::from)
            .ok_or_else(|| not_found_error("Vehículo", &id.to_string()))
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> AppResult<ApiResponse<VehicleResponse>> {
        let vehicle = self.repository.create(request.into_new_vehicle()?).await?;
        info!(
            "🚗 Vehículo publicado: {} {} ({}) id={}",
            vehicle.make, vehicle.model, vehicle.year, vehicle.id
        );

        // Las alertas no deben impedir la publicación
        match self.alerts.find_matching(&vehicle).await {
            Ok(matching) if !matching.is_empty() => {
                info!("🔔 {} alertas de precio coinciden con {}", matching.len(), vehicle.id)
            }
            Ok(_) => {}
            Err(e) => warn!("⚠️ No se pudieron evaluar alertas para {}: {}", vehicle.id, e),
        }

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehículo creado exitosamente",
        ))
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateVehicleRequest,
    ) -> AppResult<ApiResponse<VehicleResponse>> {
        let vehicle = self
            .repository
            .update(id, request.into_changes()?)
            .await?
            .ok_or_else(|| not_found_error("Vehículo", &id.to_string()))?;

        info!("✏️ Vehículo actualizado: {}", id);
        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehículo actualizado exitosamente",
        ))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<ApiResponse<()>> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Vehículo", &id.to_string()));
        }

        info!("🗑️ Vehículo eliminado: {}", id);
        Ok(ApiResponse::message("Vehículo eliminado exitosamente"))
    }
}
