//! CalculatesTax: pipeline completo Validate → LookUp → Calculate → Shipping.

use lightflow_core::{ActionError, Context, Organizer};

use crate::actions::{CalculatesOrderTax, LooksUpTaxPercentage, ProvidesFreeShipping, ValidatesOrder};
use crate::order::{Order, ORDER_KEY};

pub struct CalculatesTax;

impl CalculatesTax {
    /// Corre el pipeline con el umbral de envío gratis por defecto.
    pub fn for_order(order: &Order) -> Result<Context, ActionError> {
        Self::for_order_with(order, ProvidesFreeShipping::default())
    }

    pub fn for_order_with(order: &Order, shipping: ProvidesFreeShipping) -> Result<Context, ActionError> {
        let mut context = Context::new();
        context.insert_serialized(ORDER_KEY, order).map_err(ActionError::body)?;

        let organizer = Organizer::with(context);
        log::debug!(target: "lightflow::actions", "calculating tax for order {} (run {})", order.id, organizer.run_id());
        organizer.reduce(&[&ValidatesOrder, &LooksUpTaxPercentage, &CalculatesOrderTax, &shipping])
    }
}
