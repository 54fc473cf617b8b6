//! Builder para acciones definidas en tiempo de ejecución.
//!
//! `ActionBuilder` representa la fase de declaración: sólo aquí existen
//! `expects`/`promises`. `executed` consume el builder, congela las
//! declaraciones y devuelve una `LightAction` lista para ejecutar. No hay forma
//! de cambiar las declaraciones de una acción ya construida.
//!
//! ```ignore
//! let action = LightAction::named("CalculatesTotal")
//!     .expects(["items"])
//!     .promises(["total"])
//!     .executed(|scope| {
//!         let items: Vec<i64> = scope.fetch_as("items")?;
//!         scope.promise("total", items.iter().sum::<i64>())?;
//!         Ok(())
//!     });
//! ```

use std::fmt;

use super::declarations::Declarations;
use super::definition::{Action, ActionResult};
use super::scope::ActionScope;

type Body = Box<dyn Fn(&mut ActionScope<'_>) -> ActionResult + Send + Sync>;

/// Fase de declaración de una acción.
#[derive(Debug, Clone)]
pub struct ActionBuilder {
    name: String,
    declarations: Declarations,
}

impl ActionBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(),
               declarations: Declarations::new() }
    }

    /// Reemplaza las claves esperadas (la última llamada gana).
    pub fn expects<I, K>(mut self, keys: I) -> Self
        where I: IntoIterator<Item = K>,
              K: Into<String>
    {
        self.declarations = self.declarations.expects(keys);
        self
    }

    /// Reemplaza las claves prometidas (la última llamada gana).
    pub fn promises<I, K>(mut self, keys: I) -> Self
        where I: IntoIterator<Item = K>,
              K: Into<String>
    {
        self.declarations = self.declarations.promises(keys);
        self
    }

    pub fn declarations(&self) -> &Declarations {
        &self.declarations
    }

    /// Fija el cuerpo y cierra las declaraciones.
    pub fn executed<F>(self, body: F) -> LightAction
        where F: Fn(&mut ActionScope<'_>) -> ActionResult + Send + Sync + 'static
    {
        LightAction { name: self.name,
                      declarations: self.declarations,
                      body: Box::new(body) }
    }
}

/// Acción con cuerpo en un closure.
pub struct LightAction {
    name: String,
    declarations: Declarations,
    body: Body,
}

impl LightAction {
    /// Punto de entrada del builder.
    pub fn named(name: impl Into<String>) -> ActionBuilder {
        ActionBuilder::new(name)
    }
}

impl fmt::Debug for LightAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LightAction")
         .field("name", &self.name)
         .field("declarations", &self.declarations)
         .finish_non_exhaustive()
    }
}

impl Action for LightAction {
    fn name(&self) -> &str {
        &self.name
    }

    fn declarations(&self) -> &Declarations {
        &self.declarations
    }

    fn executed(&self, scope: &mut ActionScope<'_>) -> ActionResult {
        (self.body)(scope)
    }
}
