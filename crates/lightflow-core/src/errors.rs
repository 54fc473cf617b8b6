//! Errores del core.
//!
//! - `MissingContextKeyError`: la verificación de claves (pre o post) falló.
//! - `ActionError`: todo lo que puede devolver `Action::execute`.
//! - `ContextError`: lecturas/escrituras tipadas sobre el `Context`.
//! - `ConfigError`: valores inválidos en variables de entorno.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error opaco devuelto por el cuerpo de una acción.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Qué verificación detectó las claves ausentes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyCheck {
    /// Pre-condición: claves declaradas con `expects`.
    Expected,
    /// Post-condición: claves declaradas con `promises`.
    Promised,
}

impl fmt::Display for KeyCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCheck::Expected => f.write_str("expected"),
            KeyCheck::Promised => f.write_str("promised"),
        }
    }
}

/// Claves declaradas que no están presentes en el contexto.
///
/// `missing` conserva el orden de declaración.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{check} keys [{}] are not in the context of action `{action}`", .missing.join(", "))]
pub struct MissingContextKeyError {
    pub action: String,
    pub check: KeyCheck,
    pub missing: Vec<String>,
}

impl MissingContextKeyError {
    /// True si la clave figura entre las ausentes.
    pub fn names(&self, key: &str) -> bool {
        self.missing.iter().any(|k| k == key)
    }
}

#[derive(Debug, Error)]
pub enum ActionError {
    #[error(transparent)]
    MissingContextKey(#[from] MissingContextKeyError),
    #[error("action `{action}` has no promise named `{key}`")]
    UndeclaredPromise { action: String, key: String },
    /// Error devuelto por el cuerpo de la acción, sin traducir.
    #[error(transparent)]
    Body(BoxError),
}

impl ActionError {
    /// Envuelve un error del cuerpo de la acción.
    pub fn body<E>(err: E) -> Self
        where E: Into<BoxError>
    {
        ActionError::Body(err.into())
    }

    pub fn as_missing_key(&self) -> Option<&MissingContextKeyError> {
        match self {
            ActionError::MissingContextKey(e) => Some(e),
            _ => None,
        }
    }

    /// Intenta recuperar el error original del cuerpo con su tipo concreto.
    pub fn downcast_body<E>(self) -> Result<E, Self>
        where E: std::error::Error + Send + Sync + 'static
    {
        match self {
            ActionError::Body(inner) => inner.downcast::<E>().map(|b| *b).map_err(ActionError::Body),
            other => Err(other),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContextError {
    #[error("key `{0}` not found in context")]
    KeyNotFound(String),
    #[error("value under `{key}` could not be decoded: {message}")]
    Decode { key: String, message: String },
    #[error("value for `{key}` could not be encoded: {message}")]
    Encode { key: String, message: String },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value `{value}` for {var}")]
    InvalidValue { var: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_message_lists_keys_in_order() {
        let err = MissingContextKeyError { action: "Calc".into(),
                                           check: KeyCheck::Expected,
                                           missing: vec!["b".into(), "c".into()] };
        assert_eq!(err.to_string(), "expected keys [b, c] are not in the context of action `Calc`");
        assert!(err.names("c"));
        assert!(!err.names("a"));
    }

    #[test]
    fn body_error_is_transparent_and_downcastable() {
        let io = std::io::Error::other("disk gone");
        let err = ActionError::body(io);
        assert_eq!(err.to_string(), "disk gone");
        let back: std::io::Error = err.downcast_body().expect("io error");
        assert_eq!(back.kind(), std::io::ErrorKind::Other);
    }

    #[test]
    fn downcast_of_non_body_returns_self() {
        let err = ActionError::UndeclaredPromise { action: "A".into(),
                                                   key: "x".into() };
        let back = err.downcast_body::<std::io::Error>().unwrap_err();
        assert!(matches!(back, ActionError::UndeclaredPromise { .. }));
    }
}
