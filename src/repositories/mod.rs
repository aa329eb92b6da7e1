//! Acceso a datos
//!
//! `VehicleStore` abstrae la tabla `vehicle`: cada operación corresponde a
//! una única sentencia SQL. La implementación de producción usa PostgreSQL
//! y la de memoria sirve como doble de pruebas.

pub mod memory_repository;
pub mod vehicle_repository;

use async_trait::async_trait;

use crate::models::vehicle::{NewVehicle, Vehicle};

pub use memory_repository::InMemoryVehicleRepository;
pub use vehicle_repository::VehicleRepository;

#[async_trait]
pub trait VehicleStore: Send + Sync {
    /// Todas las filas, en el orden de almacenamiento
    async fn find_all(&self) -> Result<Vec<Vehicle>, sqlx::Error>;

    /// Filas cuyo `vin` coincide exactamente
    async fn find_by_vin(&self, vin: &str) -> Result<Vec<Vehicle>, sqlx::Error>;

    /// Insertar y devolver la fila creada con el `vin` generado
    async fn create(&self, vehicle: &NewVehicle) -> Result<Vehicle, sqlx::Error>;

    /// Reemplazar los siete campos; `None` si el `vin` no existe
    async fn update(&self, vin: &str, vehicle: &NewVehicle) -> Result<Option<Vehicle>, sqlx::Error>;

    /// Número de filas eliminadas
    async fn delete(&self, vin: &str) -> Result<u64, sqlx::Error>;
}
