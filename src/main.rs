use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

use vehicle_service::config::{DatabaseConfig, EnvironmentConfig};
use vehicle_service::create_app;
use vehicle_service::database::DatabaseConnection;
use vehicle_service::repositories::VehicleRepository;
use vehicle_service::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🚗 Vehicle Service");
    info!("==================");

    // Inicializar base de datos
    let db_config = DatabaseConfig::from_env()?;
    let db_connection = match DatabaseConnection::new(&db_config).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {:#}", e);
            return Err(e);
        }
    };

    let store = Arc::new(VehicleRepository::new(db_connection.pool().clone()));
    let app = create_app(AppState::new(store, config.clone()));

    let addr: SocketAddr = tokio::net::lookup_host(config.server_url())
        .await?
        .next()
        .ok_or_else(|| anyhow::anyhow!("HOST/PORT no resuelven a ninguna dirección"))?;

    info!("🌐 Servidor iniciando en http://{} ({})", addr, config.environment);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    /health - Health check");
    info!("   GET    /vehicle - Listar vehículos");
    info!("   POST   /vehicle - Crear vehículo");
    info!("   GET    /vehicle/:vin - Obtener vehículo");
    info!("   PUT    /vehicle/:vin - Reemplazar vehículo");
    info!("   DELETE /vehicle/:vin - Eliminar vehículo");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
