//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno del servidor.

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    pub log_level: tracing::Level,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "127.0.0.1".to_string(),
            cors_origins: Vec::new(),
            log_level: tracing::Level::DEBUG,
        }
    }
}

/// Leer una variable de entorno opcional y parsearla
pub(crate) fn parse_var<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{} has an invalid value: '{}'", key, raw)),
        _ => Ok(None),
    }
}

impl EnvironmentConfig {
    /// Cargar la configuración desde el entorno, con valores por defecto
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            port: parse_var("PORT")?.unwrap_or(defaults.port),
            host: env::var("HOST").unwrap_or(defaults.host),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|origins| parse_origins(&origins))
                .unwrap_or_default(),
            log_level: parse_var("LOG_LEVEL")?.unwrap_or(defaults.log_level),
        })
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EnvironmentConfig::default();
        assert_eq!(config.environment, "development");
        assert_eq!(config.server_url(), "127.0.0.1:3000");
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn test_parse_origins() {
        assert_eq!(
            parse_origins("http://localhost:5173, https://fleet.example.com,"),
            vec!["http://localhost:5173", "https://fleet.example.com"]
        );
        assert!(parse_origins("").is_empty());
    }

    #[test]
    fn test_parse_var_rejects_garbage() {
        env::set_var("VEHICLE_SERVICE_TEST_PORT", "not-a-port");
        assert!(parse_var::<u16>("VEHICLE_SERVICE_TEST_PORT").is_err());

        env::set_var("VEHICLE_SERVICE_TEST_PORT", "8080");
        assert_eq!(parse_var::<u16>("VEHICLE_SERVICE_TEST_PORT").unwrap(), Some(8080));

        env::remove_var("VEHICLE_SERVICE_TEST_PORT");
        assert_eq!(parse_var::<u16>("VEHICLE_SERVICE_TEST_PORT").unwrap(), None);
    }
}
