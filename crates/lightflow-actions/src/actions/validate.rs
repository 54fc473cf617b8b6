//! ValidatesOrder
//!
//! - Rechaza totales negativos (error del cuerpo, no fallo del contexto).
//! - Un pedido en cero no tiene nada que calcular: pide `skip_all`.

use lightflow_core::action;

use crate::errors::OrderError;
use crate::order::{Order, ORDER_KEY};

action! {
    pub ValidatesOrder {
        expects: [ORDER_KEY],
        promises: [],
        executed(scope) {
            let order: Order = scope.fetch_as(ORDER_KEY)?;
            if order.total_cents < 0 {
                return Err(OrderError::NegativeTotal { id: order.id,
                                                       total_cents: order.total_cents }.into());
            }
            if order.total_cents == 0 {
                scope.skip_all(format!("order {} is empty, nothing to tax", order.id));
            }
            Ok(())
        }
    }
}
