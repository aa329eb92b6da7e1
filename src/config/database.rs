//! Configuración de base de datos
//!
//! Este módulo maneja la configuración de PostgreSQL con SQLx.

use anyhow::{Context, Result};
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::time::Duration;

use super::environment::parse_var;

/// Configuración de la base de datos
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// `DATABASE_URL`; sin ella se usan las variables PGHOST, PGPORT, PGUSER, PGPASSWORD y PGDATABASE
    pub url: Option<String>,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: 10,
            min_connections: 1,
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            url: std::env::var("DATABASE_URL").ok().filter(|u| !u.trim().is_empty()),
            max_connections: parse_var("DATABASE_MAX_CONNECTIONS")?.unwrap_or(defaults.max_connections),
            min_connections: parse_var("DATABASE_MIN_CONNECTIONS")?.unwrap_or(defaults.min_connections),
            acquire_timeout: defaults.acquire_timeout,
        })
    }

    pub fn connect_options(&self) -> Result<PgConnectOptions> {
        match &self.url {
            Some(url) => url
                .parse::<PgConnectOptions>()
                .context("DATABASE_URL is not a valid PostgreSQL connection string"),
            None => Ok(PgConnectOptions::new()),
        }
    }

    /// Crear un nuevo pool de conexiones
    pub async fn create_pool(&self) -> Result<PgPool> {
        let pool = PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(self.acquire_timeout)
            .connect_with(self.connect_options()?)
            .await
            .context("could not connect to PostgreSQL")?;

        Ok(pool)
    }
}
