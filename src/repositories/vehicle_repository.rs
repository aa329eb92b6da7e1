use async_trait::async_trait;
use sqlx::PgPool;

use super::VehicleStore;
use crate::models::vehicle::{NewVehicle, Vehicle};

const VEHICLE_COLUMNS: &str =
    "vin, manufacturer_name, description, horse_power, model_name, model_year, purchase_price, fuel_type";

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VehicleStore for VehicleRepository {
    async fn find_all(&self) -> Result<Vec<Vehicle>, sqlx::Error> {
        sqlx::query_as::<_, Vehicle>(&format!("SELECT {} FROM vehicle", VEHICLE_COLUMNS))
            .fetch_all(&self.pool)
            .await
    }

    async fn find_by_vin(&self, vin: &str) -> Result<Vec<Vehicle>, sqlx::Error> {
        sqlx::query_as::<_, Vehicle>(&format!("SELECT {} FROM vehicle WHERE vin = $1", VEHICLE_COLUMNS))
            .bind(vin)
            .fetch_all(&self.pool)
            .await
    }

    async fn create(&self, vehicle: &NewVehicle) -> Result<Vehicle, sqlx::Error> {
        let query = format!(
            r#"
            INSERT INTO vehicle (manufacturer_name, description, horse_power, model_name, model_year, purchase_price, fuel_type)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}
            "#,
            VEHICLE_COLUMNS
        );

        sqlx::query_as::<_, Vehicle>(&query)
            .bind(&vehicle.manufacturer_name)
            .bind(&vehicle.description)
            .bind(vehicle.horse_power)
            .bind(&vehicle.model_name)
            .bind(vehicle.model_year)
            .bind(vehicle.purchase_price)
            .bind(&vehicle.fuel_type)
            .fetch_one(&self.pool)
            .await
    }

    async fn update(&self, vin: &str, vehicle: &NewVehicle) -> Result<Option<Vehicle>, sqlx::Error> {
        let query = format!(
            r#"
            UPDATE vehicle
            SET manufacturer_name = $1, description = $2, horse_power = $3, model_name = $4,
                model_year = $5, purchase_price = $6, fuel_type = $7
            WHERE vin = $8
            RETURNING {}
            "#,
            VEHICLE_COLUMNS
        );

        sqlx::query_as::<_, Vehicle>(&query)
            .bind(&vehicle.manufacturer_name)
            .bind(&vehicle.description)
            .bind(vehicle.horse_power)
            .bind(&vehicle.model_name)
            .bind(vehicle.model_year)
            .bind(vehicle.purchase_price)
            .bind(&vehicle.fuel_type)
            .bind(vin)
            .fetch_optional(&self.pool)
            .await
    }

    async fn delete(&self, vin: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM vehicle WHERE vin = $1")
            .bind(vin)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
