//! Almacén en memoria
//!
//! Implementa `VehicleStore` sobre un `Vec` protegido por `RwLock`, conservando
//! el orden de inserción. Se usa en los tests de la API sin PostgreSQL.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::VehicleStore;
use crate::models::vehicle::{NewVehicle, Vehicle};

#[derive(Default)]
pub struct InMemoryVehicleRepository {
    rows: RwLock<Vec<Vehicle>>,
    failing: bool,
}

impl InMemoryVehicleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Almacén cuyas operaciones fallan siempre, como un pool cerrado
    pub fn failing() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            failing: true,
        }
    }

    fn check(&self) -> Result<(), sqlx::Error> {
        if self.failing {
            return Err(sqlx::Error::PoolClosed);
        }
        Ok(())
    }
}

#[async_trait]
impl VehicleStore for InMemoryVehicleRepository {
    async fn find_all(&self) -> Result<Vec<Vehicle>, sqlx::Error> {
        self.check()?;
        Ok(self.rows.read().await.clone())
    }

    async fn find_by_vin(&self, vin: &str) -> Result<Vec<Vehicle>, sqlx::Error> {
        self.check()?;
        let rows = self.rows.read().await;
        Ok(rows.iter().filter(|v| v.vin == vin).cloned().collect())
    }

    async fn create(&self, vehicle: &NewVehicle) -> Result<Vehicle, sqlx::Error> {
        self.check()?;
        let row = vehicle.with_vin(Uuid::new_v4().to_string());
        self.rows.write().await.push(row.clone());
        Ok(row)
    }

    async fn update(&self, vin: &str, vehicle: &NewVehicle) -> Result<Option<Vehicle>, sqlx::Error> {
        self.check()?;
        let mut rows = self.rows.write().await;
        Ok(rows.iter_mut().find(|v| v.vin == vin).map(|row| {
            *row = vehicle.with_vin(row.vin.clone());
            row.clone()
        }))
    }

    async fn delete(&self, vin: &str) -> Result<u64, sqlx::Error> {
        self.check()?;
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|v| v.vin != vin);
        Ok((before - rows.len()) as u64)
    }
}
