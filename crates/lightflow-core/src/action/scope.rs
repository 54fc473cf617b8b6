//! `ActionScope`: lo que el cuerpo de una acción ve durante una ejecución.
//!
//! Agrupa tres cosas:
//! - lectores sobre *todas* las claves presentes en el contexto (no sólo las
//!   declaradas en `expects`);
//! - los accesores de promesas (`Promised`), recién creados para esta
//!   ejecución;
//! - acceso mutable directo al contexto (banderas, cualquier clave).
//!
//! Los lectores consultan el contexto en vivo: si el cuerpo escribe una clave
//! en el contexto y luego la lee, ve el valor nuevo.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use super::promise::Promised;
use crate::errors::{ActionError, ContextError};
use crate::model::Context;

pub struct ActionScope<'c> {
    action: &'c str,
    context: &'c mut Context,
    promised: Promised,
}

impl<'c> ActionScope<'c> {
    pub(crate) fn new(action: &'c str, context: &'c mut Context, promised: Promised) -> Self {
        Self { action,
               context,
               promised }
    }

    pub(crate) fn into_promised(self) -> Promised {
        self.promised
    }

    /// Nombre de la acción en ejecución.
    pub fn action_name(&self) -> &str {
        self.action
    }

    // ---------------- Lectores ----------------

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.context.get(key)
    }

    pub fn fetch(&self, key: &str) -> Result<&Value, ContextError> {
        self.context.fetch(key)
    }

    pub fn fetch_as<T>(&self, key: &str) -> Result<T, ContextError>
        where T: DeserializeOwned
    {
        self.context.fetch_as(key)
    }

    /// Vista de sólo lectura sobre las claves presentes en este momento.
    pub fn expectations(&self) -> Expectations<'_> {
        Expectations { context: &*self.context }
    }

    // ---------------- Promesas ----------------

    /// Asigna el valor de una clave prometida. El valor llega al contexto
    /// cuando el cuerpo termina.
    pub fn promise(&mut self, key: &str, value: impl Into<Value>) -> Result<(), ActionError> {
        if self.promised.set(key, value) {
            Ok(())
        } else {
            Err(ActionError::UndeclaredPromise { action: self.action.to_string(),
                                                 key: key.to_string() })
        }
    }

    pub fn promise_serialized<T>(&mut self, key: &str, value: &T) -> Result<(), ActionError>
        where T: Serialize + ?Sized
    {
        let encoded = serde_json::to_value(value).map_err(|e| {
                                                     ActionError::body(ContextError::Encode { key: key.to_string(),
                                                                                              message: e.to_string() })
                                                 })?;
        self.promise(key, encoded)
    }

    pub fn promised(&self) -> &Promised {
        &self.promised
    }

    // ---------------- Contexto ----------------

    pub fn context(&mut self) -> &mut Context {
        &mut *self.context
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.context.fail(message);
    }

    pub fn skip_all(&mut self, message: impl Into<String>) {
        self.context.skip_all(message);
    }
}

/// Lectores de sólo lectura sobre el contexto.
#[derive(Debug, Clone, Copy)]
pub struct Expectations<'a> {
    context: &'a Context,
}

impl<'a> Expectations<'a> {
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.context.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.context.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.context.keys()
    }

    pub fn len(&self) -> usize {
        self.context.len()
    }

    pub fn is_empty(&self) -> bool {
        self.context.is_empty()
    }
}
