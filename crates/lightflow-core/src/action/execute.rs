//! Wrapper de ejecución: aplica el contrato de una acción sobre un contexto.
//!
//! Orden estricto:
//! 1. short-circuit si el contexto ya falló o pidió `skip_all`;
//! 2. verificación de `expected_keys`;
//! 3. slots de promesas nuevos (`Unset`) y lectores sobre el contexto;
//! 4. cuerpo de la acción;
//! 5. cosecha de promesas asignadas hacia el contexto;
//! 6. verificación de `promised_keys`.
//!
//! El short-circuit va antes de cualquier verificación: un fallo aguas arriba
//! nunca produce errores de "clave esperada ausente" aguas abajo.

use std::fmt;

use crate::config::CONFIG;
use crate::constants::LOG_TARGET;
use crate::errors::{ActionError, BoxError};
use crate::model::Context;
use crate::verify::ContextKeyVerifier;

use super::definition::Action;
use super::promise::Promised;
use super::scope::ActionScope;

/// Estado de una ejecución.
///
/// Transiciones válidas:
/// - `Normalized` -> `ShortCircuited` | `Verifying`
/// - `Verifying` -> `VerificationFailed` | `BodyRunning`
/// - `BodyRunning` -> `BodyFailed` | `Harvesting`
/// - `Harvesting` -> `PostVerificationFailed` | `Completed`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionState {
    Normalized,
    ShortCircuited,
    Verifying,
    VerificationFailed,
    BodyRunning,
    BodyFailed,
    Harvesting,
    PostVerificationFailed,
    Completed,
}

impl ExecutionState {
    pub fn is_terminal(self) -> bool {
        matches!(self,
                 ExecutionState::ShortCircuited
                 | ExecutionState::VerificationFailed
                 | ExecutionState::BodyFailed
                 | ExecutionState::PostVerificationFailed
                 | ExecutionState::Completed)
    }
}

impl fmt::Display for ExecutionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ExecutionState::Normalized => "normalized",
            ExecutionState::ShortCircuited => "short-circuited",
            ExecutionState::Verifying => "verifying",
            ExecutionState::VerificationFailed => "verification failed",
            ExecutionState::BodyRunning => "body running",
            ExecutionState::BodyFailed => "body failed",
            ExecutionState::Harvesting => "harvesting",
            ExecutionState::PostVerificationFailed => "post-verification failed",
            ExecutionState::Completed => "completed",
        };
        f.write_str(s)
    }
}

fn transition(action: &str, state: ExecutionState) {
    let Some(level) = CONFIG.action_level() else { return };
    match state {
        ExecutionState::VerificationFailed | ExecutionState::BodyFailed | ExecutionState::PostVerificationFailed => {
            log::warn!(target: LOG_TARGET, "[{action}] {state}")
        }
        _ => log::log!(target: LOG_TARGET, level, "[{action}] {state}"),
    }
}

/// Errores del cuerpo que ya son `ActionError` (p.ej. una promesa no
/// declarada propagada con `?`) se devuelven tal cual.
fn from_body(err: BoxError) -> ActionError {
    match err.downcast::<ActionError>() {
        Ok(inner) => *inner,
        Err(other) => ActionError::Body(other),
    }
}

pub(crate) fn run<'c, A>(action: &A, context: &'c mut Context) -> Result<&'c mut Context, ActionError>
    where A: Action + ?Sized
{
    let name = action.name();
    transition(name, ExecutionState::Normalized);

    if context.is_failure() || context.is_skip_all() {
        transition(name, ExecutionState::ShortCircuited);
        return Ok(context);
    }

    transition(name, ExecutionState::Verifying);
    if let Err(e) = ContextKeyVerifier::verify_expected_keys_are_in_context(context, name, action.expected_keys()) {
        transition(name, ExecutionState::VerificationFailed);
        return Err(e.into());
    }

    transition(name, ExecutionState::BodyRunning);
    let promised = Promised::new(action.promised_keys());
    let mut scope = ActionScope::new(name, &mut *context, promised);
    if let Err(e) = action.executed(&mut scope) {
        transition(name, ExecutionState::BodyFailed);
        return Err(from_body(e));
    }
    let promised = scope.into_promised();

    transition(name, ExecutionState::Harvesting);
    promised.harvest_into(context);

    if let Err(e) = ContextKeyVerifier::verify_promised_keys_are_in_context(context, name, action.promised_keys()) {
        transition(name, ExecutionState::PostVerificationFailed);
        return Err(e.into());
    }

    transition(name, ExecutionState::Completed);
    Ok(context)
}
