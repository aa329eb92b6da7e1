use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use crate::dto::vehicle_dto::{VehicleRequest, VehicleResponse};
use crate::models::vehicle::NewVehicle;
use crate::repositories::VehicleStore;
use crate::utils::errors::{not_found_error, AppError, AppResult};

pub const VEHICLE_NOT_FOUND: &str = "No vehicle found with vin id";
pub const UPDATE_TARGET_MISSING: &str = "Could not find and update vehicle with vin";
pub const DELETE_TARGET_MISSING: &str = "Could not find and delete vehicle with vin";

pub struct VehicleController {
    store: Arc<dyn VehicleStore>,
}

impl VehicleController {
    pub fn new(store: Arc<dyn VehicleStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> AppResult<Vec<VehicleResponse>> {
        let vehicles = self.store.find_all().await.map_err(AppError::DatabaseOnList)?;
        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn get_by_vin(&self, vin: &str) -> AppResult<Vec<VehicleResponse>> {
        info!("🔍 vin id: {}", vin);
        let vehicles = self.store.find_by_vin(vin).await?;

        if vehicles.is_empty() {
            return Err(not_found_error(VEHICLE_NOT_FOUND));
        }

        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn create(&self, body: &Value) -> AppResult<Vec<VehicleResponse>> {
        let vehicle = NewVehicle::from(VehicleRequest::from_json(body)?);

        let created = self
            .store
            .create(&vehicle)
            .await
            .map_err(AppError::DatabaseOnCreate)?;

        info!("✅ Vehicle created with vin {}", created.vin);
        Ok(vec![VehicleResponse::from(created)])
    }

    pub async fn update(&self, vin: &str, body: &Value) -> AppResult<Vec<VehicleResponse>> {
        info!("✏️ vin id: {}", vin);
        let vehicle = NewVehicle::from(VehicleRequest::from_json(body)?);

        let updated = self
            .store
            .update(vin, &vehicle)
            .await?
            .ok_or_else(|| AppError::UpdateTargetMissing(UPDATE_TARGET_MISSING.to_string()))?;

        Ok(vec![VehicleResponse::from(updated)])
    }

    pub async fn delete(&self, vin: &str) -> AppResult<()> {
        info!("🗑️ vin id: {}", vin);
        let deleted = self.store.delete(vin).await?;

        if deleted == 0 {
            return Err(not_found_error(DELETE_TARGET_MISSING));
        }

        Ok(())
    }
}
