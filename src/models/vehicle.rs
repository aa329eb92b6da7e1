//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle que mapea exactamente a la tabla
//! `vehicle`, con primary key `vin`, y su conversión a la respuesta de la API.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use sqlx::FromRow;

use crate::dto::vehicle_dto::{VehicleRequest, VehicleResponse};

/// Vehicle principal - mapea a la tabla vehicle
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Vehicle {
    pub vin: String,
    pub manufacturer_name: String,
    pub description: String,
    pub horse_power: i32,
    pub model_name: String,
    pub model_year: i32,
    pub purchase_price: Decimal,
    pub fuel_type: String,
}

/// Los siete campos de negocio listos para INSERT/UPDATE
#[derive(Debug, Clone, PartialEq)]
pub struct NewVehicle {
    pub manufacturer_name: String,
    pub description: String,
    pub horse_power: i32,
    pub model_name: String,
    pub model_year: i32,
    pub purchase_price: Decimal,
    pub fuel_type: String,
}

impl NewVehicle {
    /// Construir la fila completa con el `vin` asignado
    pub fn with_vin(&self, vin: String) -> Vehicle {
        Vehicle {
            vin,
            manufacturer_name: self.manufacturer_name.clone(),
            description: self.description.clone(),
            horse_power: self.horse_power,
            model_name: self.model_name.clone(),
            model_year: self.model_year,
            purchase_price: self.purchase_price,
            fuel_type: self.fuel_type.clone(),
        }
    }
}

impl From<VehicleRequest> for NewVehicle {
    fn from(request: VehicleRequest) -> Self {
        Self {
            manufacturer_name: request.manufacturer_name,
            description: request.description,
            horse_power: request.horse_power,
            model_name: request.model_name,
            model_year: request.model_year,
            purchase_price: request.purchase_price,
            fuel_type: request.fuel_type,
        }
    }
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            vin: vehicle.vin,
            manufacturer_name: vehicle.manufacturer_name,
            description: vehicle.description,
            horse_power: vehicle.horse_power,
            model_name: vehicle.model_name,
            model_year: vehicle.model_year,
            purchase_price: vehicle.purchase_price.to_f64().unwrap_or_default(),
            fuel_type: vehicle.fuel_type,
        }
    }
}
