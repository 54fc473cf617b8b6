//! lightflow-core: contrato de ejecución de acciones.
//!
//! Una acción declara las claves que espera (`expects`) y las que promete
//! (`promises`); `execute` verifica ambas listas alrededor del cuerpo, corta
//! en seco si el contexto ya falló o pidió `skip_all`, y copia al contexto
//! los valores asignados a los slots de promesas.
pub mod action;
pub mod config;
pub mod constants;
pub mod errors;
pub mod model;
pub mod organizer;
pub mod verify;

pub use action::{Action, ActionBuilder, ActionResult, ActionScope, Declarations, ExecutionState, LightAction, Promised};
pub use config::{Configuration, CONFIG};
pub use errors::{ActionError, BoxError, ConfigError, ContextError, KeyCheck, MissingContextKeyError};
pub use model::Context;
pub use organizer::Organizer;
pub use verify::ContextKeyVerifier;

// Usado por `action!`; no es parte de la API.
#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::Lazy;
}
