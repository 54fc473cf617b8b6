use lightflow_core::action;

use crate::errors::OrderError;
use crate::order::{Order, ORDER_KEY};

pub const FREE_SHIPPING_KEY: &str = "free_shipping";

/// Umbral por defecto (con impuestos incluidos): 200.00.
pub const DEFAULT_FREE_SHIPPING_THRESHOLD_CENTS: i64 = 20_000;

action! {
    /// Decide si el pedido califica para envío gratis. Requiere que el pedido
    /// ya tenga impuestos calculados.
    pub ProvidesFreeShipping {
        fields { threshold_cents: i64 },
        expects: [ORDER_KEY],
        promises: [FREE_SHIPPING_KEY],
        executed(me, scope) {
            let order: Order = scope.fetch_as(ORDER_KEY)?;
            let total = order.total_with_tax_cents.ok_or(OrderError::NotTaxed(order.id))?;
            scope.promise(FREE_SHIPPING_KEY, total >= me.threshold_cents)?;
            Ok(())
        }
    }
}

impl Default for ProvidesFreeShipping {
    fn default() -> Self {
        Self::new(DEFAULT_FREE_SHIPPING_THRESHOLD_CENTS)
    }
}
