//! Vehicle Service
//!
//! API CRUD sobre la tabla `vehicle` de PostgreSQL.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;

use axum::Router;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use middleware::cors::cors_layer;
use state::AppState;

/// Crear el router principal de la API
pub fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .merge(routes::health_routes::create_health_router())
        .merge(routes::vehicle_routes::create_vehicle_router())
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
