use lightflow_core::{ActionError, ConfigError};
use thiserror::Error;

/// Errores de la aplicación (binario de demo y clientes del crate raíz).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error de acción: {0}")]
    Action(#[from] ActionError),
    #[error("Error de configuración: {0}")]
    Config(#[from] ConfigError),
    #[error("Error interno: {0}")]
    Internal(String),
}
