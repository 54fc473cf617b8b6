use thiserror::Error;

/// Errores de las acciones de pedido. Se devuelven desde el cuerpo de la
/// acción y llegan al caller como `ActionError::Body`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    #[error("order {0} has not been taxed yet")]
    NotTaxed(u64),
    #[error("order {id} has a negative total ({total_cents})")]
    NegativeTotal { id: u64, total_cents: i64 },
    #[error("order {id} total overflows once tax is added")]
    TotalOverflow { id: u64 },
}
