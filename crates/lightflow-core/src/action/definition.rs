use crate::errors::{ActionError, BoxError};
use crate::model::Context;

use super::declarations::Declarations;
use super::execute;
use super::scope::ActionScope;

/// Resultado del cuerpo de una acción. Cualquier error convertible a
/// `BoxError` sirve, así el cuerpo puede usar `?` libremente.
pub type ActionResult = Result<(), BoxError>;

/// Trait que define una acción.
///
/// Implementadores sólo escriben `name`, `declarations` y `executed` (el
/// cuerpo). `execute` es la única operación pública en tiempo de ejecución y
/// no debería sobreescribirse: aplica el contrato de claves completo.
pub trait Action {
    /// Nombre estable, usado en errores y logs.
    fn name(&self) -> &str;

    /// Declaraciones `expects`/`promises` del tipo de acción.
    fn declarations(&self) -> &Declarations;

    /// Cuerpo de la acción.
    fn executed(&self, scope: &mut ActionScope<'_>) -> ActionResult;

    fn expected_keys(&self) -> &[String] {
        self.declarations().expected_keys()
    }

    fn promised_keys(&self) -> &[String] {
        self.declarations().promised_keys()
    }

    /// Ejecuta la acción sobre un contexto existente, mutándolo in-place.
    /// Devuelve la misma instancia recibida.
    fn execute<'c>(&self, context: &'c mut Context) -> Result<&'c mut Context, ActionError> {
        execute::run(self, context)
    }

    /// Variante que normaliza primero la entrada (mapeo plano o `Context`) y
    /// devuelve el contexto resultante por valor.
    fn execute_with<C>(&self, input: C) -> Result<Context, ActionError>
        where C: Into<Context>,
              Self: Sized
    {
        let mut context = Context::make(input);
        self.execute(&mut context)?;
        Ok(context)
    }
}
