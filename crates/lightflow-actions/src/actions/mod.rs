pub mod shipping;
pub mod tax;
pub mod validate;

pub use shipping::{ProvidesFreeShipping, FREE_SHIPPING_KEY};
pub use tax::{CalculatesOrderTax, LooksUpTaxPercentage, TAX_KEY, TAX_PERCENTAGE_KEY, TAX_RANGES_MISSING};
pub use validate::ValidatesOrder;
