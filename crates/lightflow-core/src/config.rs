//! Carga de configuración desde variables de entorno.
//!
//! Se lee una sola vez (archivo `.env` opcional vía `dotenvy`) y queda cacheada
//! en `CONFIG`. El parseo real vive en `Configuration::from_lookup`, que no
//! toca el entorno del proceso y por eso se puede testear directamente.

use std::env;

use dotenvy::dotenv;
use log::Level;
use once_cell::sync::Lazy;

use crate::constants::{ENV_LOG_ACTIONS, ENV_LOG_LEVEL};
use crate::errors::ConfigError;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

/// Configuración global, evaluada una sola vez. Valores inválidos caen a los
/// defaults y se reportan con `log::warn!`.
pub static CONFIG: Lazy<Configuration> = Lazy::new(|| {
    Lazy::force(&DOTENV_LOADED);
    Configuration::from_env().unwrap_or_else(|e| {
                                 log::warn!(target: crate::constants::LOG_TARGET, "{e}; using defaults");
                                 Configuration::default()
                             })
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// Nivel con el que se emiten las transiciones del wrapper.
    pub log_level: Level,
    /// Si es `false`, las acciones y el organizer no emiten registros.
    pub log_actions: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self { log_level: Level::Debug,
               log_actions: true }
    }
}

impl Configuration {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Construye la configuración a partir de una función de búsqueda
    /// arbitraria (entorno, mapa en tests, ...). Variables ausentes o vacías
    /// usan el valor por defecto.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
        where F: Fn(&str) -> Option<String>
    {
        let defaults = Self::default();

        let log_level = match lookup(ENV_LOG_LEVEL).filter(|v| !v.trim().is_empty()) {
            Some(raw) => raw.trim()
                            .parse::<Level>()
                            .map_err(|_| ConfigError::InvalidValue { var: ENV_LOG_LEVEL,
                                                                     value: raw.clone() })?,
            None => defaults.log_level,
        };

        let log_actions = match lookup(ENV_LOG_ACTIONS).filter(|v| !v.trim().is_empty()) {
            Some(raw) => parse_flag(&raw).ok_or(ConfigError::InvalidValue { var: ENV_LOG_ACTIONS,
                                                                            value: raw.clone() })?,
            None => defaults.log_actions,
        };

        Ok(Self { log_level, log_actions })
    }

    /// Nivel efectivo para un registro, o `None` si el logging está apagado.
    pub(crate) fn action_level(&self) -> Option<Level> {
        self.log_actions.then_some(self.log_level)
    }

    /// Los límites de una corrida del organizer van siempre en `info`.
    pub(crate) fn run_level(&self) -> Option<Level> {
        self.log_actions.then_some(Level::Info)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Forzar carga temprana de .env y de la configuración desde aplicaciones
/// externas si se desea.
pub fn init() -> &'static Configuration {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = Configuration::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg, Configuration::default());
        assert_eq!(cfg.action_level(), Some(Level::Debug));
        assert_eq!(cfg.run_level(), Some(Level::Info));
    }

    #[test]
    fn parses_level_and_flag() {
        let cfg = Configuration::from_lookup(lookup_from(&[(ENV_LOG_LEVEL, "INFO"), (ENV_LOG_ACTIONS, "off")])).unwrap();
        assert_eq!(cfg.log_level, Level::Info);
        assert!(!cfg.log_actions);
        assert_eq!(cfg.action_level(), None);
        assert_eq!(cfg.run_level(), None);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let cfg = Configuration::from_lookup(lookup_from(&[(ENV_LOG_LEVEL, "  "), (ENV_LOG_ACTIONS, "")])).unwrap();
        assert_eq!(cfg, Configuration::default());
    }

    #[test]
    fn rejects_unknown_level() {
        let err = Configuration::from_lookup(lookup_from(&[(ENV_LOG_LEVEL, "loud")])).unwrap_err();
        assert_eq!(err,
                   ConfigError::InvalidValue { var: ENV_LOG_LEVEL,
                                               value: "loud".into() });
    }

    #[test]
    fn rejects_unknown_flag() {
        let err = Configuration::from_lookup(lookup_from(&[(ENV_LOG_ACTIONS, "maybe")])).unwrap_err();
        assert!(err.to_string().contains(ENV_LOG_ACTIONS));
    }
}
