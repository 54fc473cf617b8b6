//! `Context`: el portador de datos compartido por todas las acciones de un
//! pipeline.
//!
//! Rol en el flujo:
//! - Se crea (o se recibe) una vez por corrida y se muta in-place por cada
//!   acción que se ejecuta sobre él.
//! - Además de los datos (mapa ordenado clave → `serde_json::Value`) lleva dos
//!   banderas de control: `failure` y `skip_all`.
//!
//! Invariante: una vez que `failure` o `skip_all` pasan a `true` no vuelven a
//! `false` en la misma instancia. Por eso no existe ningún método que las
//! limpie.
use std::ops::Index;

use indexmap::IndexMap;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::errors::ContextError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    values: IndexMap<String, Value>,
    failure: bool,
    skip_all: bool,
    message: Option<String>,
    error_code: Option<String>,
}

impl Context {
    /// Contexto vacío, en estado de éxito.
    pub fn new() -> Self {
        Self::default()
    }

    /// Normaliza cualquier entrada aceptada a un `Context`.
    ///
    /// Idempotente: si `input` ya es un `Context` se devuelve la misma
    /// instancia (movida, sin copia de sus datos).
    pub fn make<C>(input: C) -> Self
        where C: Into<Context>
    {
        input.into()
    }

    // ---------------- Banderas ----------------

    pub fn is_success(&self) -> bool {
        !self.failure
    }

    pub fn is_failure(&self) -> bool {
        self.failure
    }

    pub fn is_skip_all(&self) -> bool {
        self.skip_all
    }

    /// Marca el contexto como fallido. Las acciones siguientes no se ejecutan.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.failure = true;
        self.message = Some(message.into());
    }

    pub fn fail_with_code(&mut self, message: impl Into<String>, code: impl Into<String>) {
        self.fail(message);
        self.error_code = Some(code.into());
    }

    /// Detiene el resto del pipeline sin marcarlo como fallido.
    pub fn skip_all(&mut self, message: impl Into<String>) {
        self.skip_all = true;
        self.message = Some(message.into());
    }

    /// Último mensaje registrado por `fail`/`skip_all`.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn error_code(&self) -> Option<&str> {
        self.error_code.as_deref()
    }

    // ---------------- Datos ----------------

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Lectura estricta: error si la clave no existe.
    pub fn fetch(&self, key: &str) -> Result<&Value, ContextError> {
        self.values
            .get(key)
            .ok_or_else(|| ContextError::KeyNotFound(key.to_string()))
    }

    /// Lectura tipada vía serde.
    pub fn fetch_as<T>(&self, key: &str) -> Result<T, ContextError>
        where T: DeserializeOwned
    {
        let raw = self.fetch(key)?;
        T::deserialize(raw).map_err(|e| ContextError::Decode { key: key.to_string(),
                                                               message: e.to_string() })
    }

    /// Inserta o reemplaza un valor. Devuelve el valor anterior si existía.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(key.into(), value.into())
    }

    pub fn insert_serialized<T>(&mut self, key: impl Into<String>, value: &T) -> Result<Option<Value>, ContextError>
        where T: Serialize + ?Sized
    {
        let key = key.into();
        let encoded = serde_json::to_value(value).map_err(|e| ContextError::Encode { key: key.clone(),
                                                                                    message: e.to_string() })?;
        Ok(self.values.insert(key, encoded))
    }

    /// Claves presentes, en orden de inserción.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Index<&str> for Context {
    type Output = Value;

    /// Igual que `HashMap`: entra en pánico si la clave no existe. Usar
    /// `get`/`fetch` cuando la presencia no está garantizada.
    fn index(&self, key: &str) -> &Value {
        match self.values.get(key) {
            Some(v) => v,
            None => panic!("key `{key}` not found in context"),
        }
    }
}

// -------------------------------------------------------------
// Conversiones desde mapeos planos (normalización de entrada).
// `From<Context> for Context` viene del blanket `impl<T> From<T> for T`, lo
// que hace que `Context::make` sea idempotente.
// -------------------------------------------------------------

impl From<IndexMap<String, Value>> for Context {
    fn from(values: IndexMap<String, Value>) -> Self {
        Self { values,
               ..Self::default() }
    }
}

impl From<serde_json::Map<String, Value>> for Context {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Context
    where K: Into<String>,
          V: Into<Value>
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Context
    where K: Into<String>,
          V: Into<Value>
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let values = iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self { values,
               ..Self::default() }
    }
}

impl TryFrom<Value> for Context {
    type Error = ContextError;

    /// Sólo objetos JSON son mapeos válidos.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(map.into()),
            other => Err(ContextError::Decode { key: String::new(),
                                                message: format!("expected a JSON object, found {other}") }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn make_is_idempotent_on_context() {
        let mut ctx = Context::make([("a", 1)]);
        ctx.fail("boom");
        let again = Context::make(ctx.clone());
        assert_eq!(again, ctx);
        assert!(again.is_failure());
    }

    #[test]
    fn keys_keep_insertion_order() {
        let mut ctx = Context::make([("z", json!(1)), ("a", json!(2))]);
        ctx.insert("m", 3);
        assert_eq!(ctx.keys().collect::<Vec<_>>(), vec!["z", "a", "m"]);
    }

    #[test]
    fn flags_are_sticky() {
        let mut ctx = Context::new();
        assert!(ctx.is_success());
        ctx.fail_with_code("bad", "E42");
        ctx.skip_all("later");
        assert!(ctx.is_failure());
        assert!(ctx.is_skip_all());
        assert_eq!(ctx.message(), Some("later"));
        assert_eq!(ctx.error_code(), Some("E42"));
    }

    #[test]
    fn fetch_reports_missing_key() {
        let ctx = Context::make([("a", 1)]);
        assert_eq!(ctx.fetch("a").unwrap(), &json!(1));
        assert_eq!(ctx.fetch("b").unwrap_err(), ContextError::KeyNotFound("b".into()));
        assert_eq!(ctx["a"], json!(1));
    }

    #[test]
    fn typed_roundtrip_and_decode_error() {
        let mut ctx = Context::new();
        ctx.insert_serialized("pair", &(1u8, "x")).unwrap();
        let pair: (u8, String) = ctx.fetch_as("pair").unwrap();
        assert_eq!(pair, (1, "x".to_string()));
        let err = ctx.fetch_as::<bool>("pair").unwrap_err();
        assert!(matches!(err, ContextError::Decode { ref key, .. } if key == "pair"));
    }

    #[test]
    fn null_is_a_present_value() {
        let ctx = Context::make([("nothing", Value::Null)]);
        assert!(ctx.contains_key("nothing"));
    }

    #[test]
    fn try_from_value_requires_object() {
        let ctx = Context::try_from(json!({"a": 1, "b": [2]})).unwrap();
        assert_eq!(ctx.len(), 2);
        assert!(Context::try_from(json!([1, 2])).is_err());
    }
}
