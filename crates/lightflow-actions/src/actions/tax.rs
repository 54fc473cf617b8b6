//! Acciones de impuestos: búsqueda del porcentaje y cálculo sobre el pedido.

use lightflow_core::action;
use serde_json::Value;

use crate::errors::OrderError;
use crate::order::{tax_cents, Order, TaxRanges, ORDER_KEY};

pub const TAX_PERCENTAGE_KEY: &str = "tax_percentage";
pub const TAX_KEY: &str = "tax_cents";

/// Código de error cuando la región no tiene rango de impuestos.
pub const TAX_RANGES_MISSING: &str = "tax_ranges_missing";

action! {
    /// Busca el porcentaje de impuesto de la región del pedido. Si no hay
    /// rango para la región, marca el contexto como fallido y deja la promesa
    /// en `null`.
    pub LooksUpTaxPercentage {
        expects: [ORDER_KEY],
        promises: [TAX_PERCENTAGE_KEY],
        executed(scope) {
            let order: Order = scope.fetch_as(ORDER_KEY)?;
            match TaxRanges::for_region(&order.region) {
                Some(pct) => scope.promise(TAX_PERCENTAGE_KEY, pct)?,
                None => {
                    scope.promise(TAX_PERCENTAGE_KEY, Value::Null)?;
                    scope.context()
                         .fail_with_code(format!("The tax ranges were not found for region {}", order.region),
                                         TAX_RANGES_MISSING);
                }
            }
            Ok(())
        }
    }
}

action! {
    /// Calcula el impuesto y promete el pedido actualizado con su total final.
    pub CalculatesOrderTax {
        expects: [ORDER_KEY, TAX_PERCENTAGE_KEY],
        promises: [ORDER_KEY, TAX_KEY],
        executed(scope) {
            let mut order: Order = scope.fetch_as(ORDER_KEY)?;
            let pct: f64 = scope.fetch_as(TAX_PERCENTAGE_KEY)?;
            let tax = tax_cents(order.total_cents, pct);
            let total = order.total_cents
                             .checked_add(tax)
                             .ok_or(OrderError::TotalOverflow { id: order.id })?;
            order.total_with_tax_cents = Some(total);
            scope.promise_serialized(ORDER_KEY, &order)?;
            scope.promise(TAX_KEY, tax)?;
            Ok(())
        }
    }
}
