//! LightFlow
//!
//! Crate raíz del workspace:
//! - Re-exporta `lightflow_core` (contrato de acciones) y
//!   `lightflow_actions` (acciones de ejemplo sobre pedidos).
//! - Expone `errors` con el error de aplicación usado por el binario de demo.

pub mod errors;

pub use errors::AppError;
pub use lightflow_actions as actions;
pub use lightflow_core as contract;
pub use lightflow_core::{action, Action, ActionError, Context, LightAction, Organizer};
