//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use crate::config::EnvironmentConfig;
use crate::repositories::VehicleStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn VehicleStore>,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn VehicleStore>, config: EnvironmentConfig) -> Self {
        Self { store, config }
    }
}
