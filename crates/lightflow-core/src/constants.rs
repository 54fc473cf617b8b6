//! Constantes del core.
//!
//! Nombres de variables de entorno leídas por `config::Configuration` y el
//! target usado en todos los registros de `log` emitidos por el core.

/// Nivel de log para los registros del wrapper de ejecución.
pub const ENV_LOG_LEVEL: &str = "LIGHTFLOW_LOG_LEVEL";

/// Activa/desactiva los registros por acción (`true|false|1|0`).
pub const ENV_LOG_ACTIONS: &str = "LIGHTFLOW_LOG_ACTIONS";

/// Target de `log` para filtrar los registros del core.
pub const LOG_TARGET: &str = "lightflow";
