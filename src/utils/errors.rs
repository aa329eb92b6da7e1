//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de error del servicio de vehículos
//! y su conversión a respuestas HTTP.
//!
//! La forma del cuerpo depende del tipo de error: los errores de validación
//! y de JSON usan la clave `error`, los de recurso inexistente y de base de
//! datos usan la clave `message`, salvo el listado y la creación, que
//! responden con `error`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Fallo de base de datos al listar: el mensaje va bajo la clave `error`
    #[error("Database error on list: {0}")]
    DatabaseOnList(sqlx::Error),

    /// Fallo de base de datos durante la creación: se devuelve el objeto de error completo
    #[error("Database error on insert: {0}")]
    DatabaseOnCreate(sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// El vehículo a actualizar no existe (422, no 404)
    #[error("Unprocessable: {0}")]
    UpdateTargetMissing(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) | AppError::DatabaseOnList(_) | AppError::DatabaseOnCreate(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Validation(_) | AppError::UpdateTargetMissing(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

/// Representación JSON de un error de sqlx, con el SQLSTATE cuando existe
fn sqlx_error_object(e: &sqlx::Error) -> serde_json::Value {
    match e {
        sqlx::Error::Database(db) => json!({
            "message": db.message(),
            "code": db.code(),
            "constraint": db.constraint(),
        }),
        other => json!({ "message": other.to_string() }),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            AppError::Database(e) => {
                error!("❌ Database error: {}", e);
                json!({ "message": e.to_string() })
            }

            AppError::DatabaseOnList(e) => {
                error!("❌ Database error listing vehicles: {}", e);
                json!({ "error": e.to_string() })
            }

            AppError::DatabaseOnCreate(e) => {
                error!("❌ Database error creating vehicle: {}", e);
                json!({ "error": sqlx_error_object(&e) })
            }

            AppError::Validation(msg) => {
                warn!("⚠️ Validation error: {}", msg);
                json!({ "error": msg })
            }

            AppError::BadRequest(msg) => {
                warn!("⚠️ Bad request: {}", msg);
                json!({ "error": msg })
            }

            AppError::NotFound(msg) | AppError::UpdateTargetMissing(msg) => {
                warn!("🔍 {}", msg);
                json!({ "message": msg })
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de validación
pub fn validation_error(message: impl Into<String>) -> AppError {
    AppError::Validation(message.into())
}

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(message: &str) -> AppError {
    AppError::NotFound(message.to_string())
}

/// Función helper para crear errores de solicitud incorrecta
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}
