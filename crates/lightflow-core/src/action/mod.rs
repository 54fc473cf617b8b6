//! Acciones: unidades de lógica con contrato de claves.
//!
//! Una acción declara qué claves espera en el contexto (`expects`) y cuáles
//! promete dejar (`promises`). Este módulo define:
//! - `Declarations`: el registro de claves de un tipo de acción.
//! - `Action`: el trait, con `execute` como única operación de runtime.
//! - `ActionScope`/`Promised`: lo que ve el cuerpo durante una ejecución.
//! - `ActionBuilder`/`LightAction`: acciones con cuerpo en closure.
//! - `action!`: macro para acciones declaradas como tipos.

pub mod builder;
pub mod declarations;
pub mod definition;
mod execute;
pub mod macros;
pub mod promise;
pub mod scope;

pub use builder::{ActionBuilder, LightAction};
pub use declarations::Declarations;
pub use definition::{Action, ActionResult};
pub use execute::ExecutionState;
pub use promise::{PromiseSlot, Promised};
pub use scope::{ActionScope, Expectations};
