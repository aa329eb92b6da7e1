//! Round trip contra una base PostgreSQL real.
//!
//! Ignorado por defecto: `DATABASE_URL=postgres://... cargo test -- --ignored`.
//! La tabla se crea con `sql/schema.sql`.

use std::str::FromStr;

use rust_decimal::Decimal;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Executor, PgPool};

use vehicle_service::models::vehicle::NewVehicle;
use vehicle_service::repositories::{VehicleRepository, VehicleStore};

const SCHEMA: &str = include_str!("../sql/schema.sql");

async fn connect() -> Option<PgPool> {
    let url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("DATABASE_URL not set, skipping");
            return None;
        }
    };

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .unwrap();
    pool.execute(SCHEMA).await.unwrap();
    Some(pool)
}

fn ford() -> NewVehicle {
    NewVehicle {
        manufacturer_name: "Ford".to_string(),
        description: "Reliable and efficient".to_string(),
        horse_power: 1000,
        model_name: "retro".to_string(),
        model_year: 2020,
        purchase_price: Decimal::from_str("200000.50").unwrap(),
        fuel_type: "Gasoline".to_string(),
    }
}

#[tokio::test]
#[ignore]
async fn test_postgres_round_trip() {
    let Some(pool) = connect().await else {
        return;
    };
    let repository = VehicleRepository::new(pool);

    let created = repository.create(&ford()).await.unwrap();
    assert!(!created.vin.is_empty());
    assert_eq!(created, ford().with_vin(created.vin.clone()));

    let found = repository.find_by_vin(&created.vin).await.unwrap();
    assert_eq!(found, vec![created.clone()]);

    let all = repository.find_all().await.unwrap();
    assert!(all.contains(&created));

    let mut honda = ford();
    honda.manufacturer_name = "Honda".to_string();
    honda.model_year = 2021;
    honda.purchase_price = Decimal::from(22000);
    let updated = repository.update(&created.vin, &honda).await.unwrap();
    assert_eq!(updated, Some(honda.with_vin(created.vin.clone())));

    assert_eq!(repository.delete(&created.vin).await.unwrap(), 1);
    assert_eq!(repository.delete(&created.vin).await.unwrap(), 0);
    assert!(repository.find_by_vin(&created.vin).await.unwrap().is_empty());
    assert_eq!(repository.update(&created.vin, &honda).await.unwrap(), None);
}

#[tokio::test]
#[ignore]
async fn test_postgres_rejects_out_of_range_year() {
    let Some(pool) = connect().await else {
        return;
    };
    let repository = VehicleRepository::new(pool);

    let mut vehicle = ford();
    vehicle.model_year = 1800;
    assert!(repository.create(&vehicle).await.is_err());
}
