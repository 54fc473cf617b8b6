/// Registro de declaraciones de un tipo de acción.
///
/// Guarda, en orden, las claves que la acción espera encontrar en el contexto
/// (`expects`) y las que promete dejar (`promises`). Cada llamada reemplaza
/// la lista anterior: la última llamada gana, no se acumula.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declarations {
    expected_keys: Vec<String>,
    promised_keys: Vec<String>,
}

impl Declarations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expects<I, K>(mut self, keys: I) -> Self
        where I: IntoIterator<Item = K>,
              K: Into<String>
    {
        self.expected_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn promises<I, K>(mut self, keys: I) -> Self
        where I: IntoIterator<Item = K>,
              K: Into<String>
    {
        self.promised_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn expected_keys(&self) -> &[String] {
        &self.expected_keys
    }

    pub fn promised_keys(&self) -> &[String] {
        &self.promised_keys
    }

    pub fn is_promised(&self, key: &str) -> bool {
        self.promised_keys.iter().any(|k| k == key)
    }
}
