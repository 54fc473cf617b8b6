//! Slots de promesas por ejecución.
//!
//! Cada ejecución crea un `Promised` nuevo con un slot `Unset` por clave
//! prometida. El estado `Unset` es distinto de cualquier valor legítimo,
//! incluido `Value::Null`: sólo los slots `Set` se copian al contexto.

use indexmap::IndexMap;
use serde_json::Value;

use crate::model::Context;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum PromiseSlot {
    #[default]
    Unset,
    Set(Value),
}

impl PromiseSlot {
    pub fn is_set(&self) -> bool {
        matches!(self, PromiseSlot::Set(_))
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            PromiseSlot::Set(v) => Some(v),
            PromiseSlot::Unset => None,
        }
    }
}

/// Accesores de lectura/escritura para las claves prometidas.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Promised {
    slots: IndexMap<String, PromiseSlot>,
}

impl Promised {
    pub fn new<'a, I>(keys: I) -> Self
        where I: IntoIterator<Item = &'a String>
    {
        Self { slots: keys.into_iter().map(|k| (k.clone(), PromiseSlot::Unset)).collect() }
    }

    pub fn is_declared(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }

    /// Escribe el slot. Devuelve `false` (sin escribir) si la clave no fue
    /// prometida.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> bool {
        match self.slots.get_mut(key) {
            Some(slot) => {
                *slot = PromiseSlot::Set(value.into());
                true
            }
            None => false,
        }
    }

    /// Valor del slot, `None` si está sin asignar o no existe.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.slots.get(key).and_then(PromiseSlot::value)
    }

    pub fn slot(&self, key: &str) -> Option<&PromiseSlot> {
        self.slots.get(key)
    }

    pub fn is_set(&self, key: &str) -> bool {
        self.slots.get(key).is_some_and(PromiseSlot::is_set)
    }

    /// Claves cuyo slot sigue en `Unset`.
    pub fn unset_keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.slots
            .iter()
            .filter(|(_, slot)| !slot.is_set())
            .map(|(k, _)| k.as_str())
    }

    /// Copia al contexto los slots asignados. Los `Unset` se omiten sin error.
    /// Devuelve la cantidad de claves escritas.
    pub fn harvest_into(self, context: &mut Context) -> usize {
        let mut written = 0;
        for (key, slot) in self.slots {
            if let PromiseSlot::Set(value) = slot {
                context.insert(key, value);
                written += 1;
            }
        }
        written
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn keys(ks: &[&str]) -> Vec<String> {
        ks.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn fresh_slots_are_unset() {
        let p = Promised::new(&keys(&["a", "b"]));
        assert!(!p.is_set("a"));
        assert_eq!(p.unset_keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(p.slot("a"), Some(&PromiseSlot::Unset));
    }

    #[test]
    fn null_is_distinct_from_unset() {
        let mut p = Promised::new(&keys(&["a"]));
        assert!(p.set("a", Value::Null));
        assert!(p.is_set("a"));
        assert_eq!(p.get("a"), Some(&Value::Null));
    }

    #[test]
    fn undeclared_key_is_rejected() {
        let mut p = Promised::new(&keys(&["a"]));
        assert!(!p.set("b", 1));
        assert!(!p.is_declared("b"));
    }

    #[test]
    fn harvest_only_writes_set_slots() {
        let mut p = Promised::new(&keys(&["a", "b", "c"]));
        p.set("a", 1);
        p.set("c", json!(null));
        let mut ctx = Context::new();
        assert_eq!(p.harvest_into(&mut ctx), 2);
        assert_eq!(ctx.keys().collect::<Vec<_>>(), vec!["a", "c"]);
        assert!(!ctx.contains_key("b"));
    }
}
