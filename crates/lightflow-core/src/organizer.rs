//! Organizer: ejecuta una secuencia de acciones sobre un mismo contexto.
//!
//! No agrega semántica propia: cada acción aplica su propio short-circuit,
//! así que cuando una acción falla o pide `skip_all` las siguientes devuelven
//! el contexto sin tocarlo. El primer `ActionError` corta la secuencia.

use uuid::Uuid;

use crate::action::Action;
use crate::config::CONFIG;
use crate::constants::LOG_TARGET;
use crate::errors::ActionError;
use crate::model::Context;

#[derive(Debug)]
pub struct Organizer {
    run_id: Uuid,
    context: Context,
}

impl Organizer {
    /// Fija el contexto de la corrida (mapeo plano o `Context` existente).
    pub fn with<C>(input: C) -> Self
        where C: Into<Context>
    {
        Self { run_id: Uuid::new_v4(),
               context: Context::make(input) }
    }

    /// Identificador de la corrida; sólo se usa para correlacionar logs.
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Ejecuta las acciones en orden y devuelve el contexto final.
    pub fn reduce(mut self, actions: &[&dyn Action]) -> Result<Context, ActionError> {
        let run_level = CONFIG.run_level();
        let step_level = CONFIG.action_level();
        if let Some(level) = run_level {
            log::log!(target: LOG_TARGET, level, "run {} started with {} actions", self.run_id, actions.len());
        }

        for (index, action) in actions.iter().enumerate() {
            if let Some(level) = step_level {
                log::log!(target: LOG_TARGET, level, "run {} step {index}: {}", self.run_id, action.name());
            }
            if let Err(e) = action.execute(&mut self.context) {
                log::error!(target: LOG_TARGET, "run {} aborted at `{}`: {e}", self.run_id, action.name());
                return Err(e);
            }
        }

        if let Some(level) = run_level {
            log::log!(target: LOG_TARGET,
                      level,
                      "run {} finished (failure: {}, skip_all: {})",
                      self.run_id,
                      self.context.is_failure(),
                      self.context.is_skip_all());
        }
        Ok(self.context)
    }
}
