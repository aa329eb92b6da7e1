//! Configuración de conexión a PostgreSQL

use anyhow::Result;
use sqlx::PgPool;
use tracing::info;

use crate::config::DatabaseConfig;

/// Pool de conexiones compartido por todo el proceso
pub struct DatabaseConnection {
    pool: PgPool,
}

impl DatabaseConnection {
    /// Crear el pool y verificar que la conexión funciona
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        match &config.url {
            Some(url) => info!("🔗 Conectando a PostgreSQL: {}", mask_database_url(url)),
            None => info!("🔗 Conectando a PostgreSQL con variables PG*"),
        }

        let pool = config.create_pool().await?;
        sqlx::query("SELECT 1").execute(&pool).await?;

        info!("✅ PostgreSQL conectado ({} conexiones máx.)", config.max_connections);
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Función helper para enmascarar la URL de la base de datos en logs
fn mask_database_url(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at_pos)) if at_pos > scheme_end => {
            format!("{}***:***@{}", &url[..scheme_end + 3], &url[at_pos + 1..])
        }
        _ => url.to_string(),
    }
}
