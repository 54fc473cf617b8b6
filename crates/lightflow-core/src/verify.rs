//! Verificación de claves declaradas contra las presentes en el contexto.

use crate::errors::{KeyCheck, MissingContextKeyError};
use crate::model::Context;

pub struct ContextKeyVerifier;

impl ContextKeyVerifier {
    /// Pre-condición: todas las claves de `expects` deben estar presentes.
    pub fn verify_expected_keys_are_in_context(context: &Context,
                                               action: &str,
                                               expected_keys: &[String])
                                               -> Result<(), MissingContextKeyError> {
        Self::verify(context, action, KeyCheck::Expected, expected_keys)
    }

    /// Post-condición: todas las claves de `promises` deben estar presentes.
    pub fn verify_promised_keys_are_in_context(context: &Context,
                                               action: &str,
                                               promised_keys: &[String])
                                               -> Result<(), MissingContextKeyError> {
        Self::verify(context, action, KeyCheck::Promised, promised_keys)
    }

    /// Reporta *todas* las claves ausentes, en orden de declaración.
    fn verify(context: &Context, action: &str, check: KeyCheck, keys: &[String]) -> Result<(), MissingContextKeyError> {
        let missing: Vec<String> = keys.iter().filter(|k| !context.contains_key(k)).cloned().collect();
        if missing.is_empty() {
            return Ok(());
        }
        Err(MissingContextKeyError { action: action.to_string(),
                                     check,
                                     missing })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(ks: &[&str]) -> Vec<String> {
        ks.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn passes_when_all_present() {
        let ctx = Context::make([("a", 1), ("b", 2)]);
        assert!(ContextKeyVerifier::verify_expected_keys_are_in_context(&ctx, "A", &keys(&["a", "b"])).is_ok());
        assert!(ContextKeyVerifier::verify_promised_keys_are_in_context(&ctx, "A", &[]).is_ok());
    }

    #[test]
    fn lists_every_missing_key() {
        let ctx = Context::make([("b", 2)]);
        let err = ContextKeyVerifier::verify_promised_keys_are_in_context(&ctx, "A", &keys(&["c", "b", "a"])).unwrap_err();
        assert_eq!(err.check, KeyCheck::Promised);
        assert_eq!(err.missing, vec!["c", "a"]);
        assert_eq!(err.action, "A");
    }
}
