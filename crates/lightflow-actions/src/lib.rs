//! lightflow-actions: acciones de ejemplo sobre pedidos.
//!
//! Este crate provee:
//! - `Order` y la tabla de impuestos por región.
//! - Acciones declaradas con `action!`: `ValidatesOrder`,
//!   `LooksUpTaxPercentage`, `CalculatesOrderTax` y `ProvidesFreeShipping`.
//! - `CalculatesTax`, que las encadena con un `Organizer`.
//!
//! Nota: el core sólo conoce claves y `serde_json::Value`. El tipado del
//! pedido vive aquí y viaja serializado bajo la clave `order`.

pub mod actions;
pub mod errors;
pub mod order;
pub mod organizers;

pub use errors::OrderError;
pub use order::{Order, TaxRanges};
pub use organizers::CalculatesTax;
