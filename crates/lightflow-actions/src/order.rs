//! Modelo de pedido y tabla de impuestos por región.
//!
//! Los importes se guardan en centavos (`i64`) para evitar errores de
//! redondeo; el porcentaje de impuesto es el único valor decimal.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Clave bajo la cual el pedido viaja en el contexto.
pub const ORDER_KEY: &str = "order";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    pub region: String,
    pub total_cents: i64,
    /// Se completa en `CalculatesOrderTax`.
    #[serde(default)]
    pub total_with_tax_cents: Option<i64>,
}

impl Order {
    pub fn new(id: u64, region: impl Into<String>, total_cents: i64) -> Self {
        Self { id,
               region: region.into(),
               total_cents,
               total_with_tax_cents: None }
    }
}

// Porcentajes fijos; regiones no listadas no tienen rango conocido.
static TAX_RANGES: Lazy<IndexMap<&'static str, f64>> = Lazy::new(|| {
    IndexMap::from([("TX", 8.25), ("CA", 7.25), ("NY", 4.0), ("OR", 0.0)])
});

pub struct TaxRanges;

impl TaxRanges {
    /// Porcentaje de impuesto de la región (`"TX"`, `"CA"`, ...).
    pub fn for_region(region: &str) -> Option<f64> {
        TAX_RANGES.get(region.trim().to_ascii_uppercase().as_str()).copied()
    }

    pub fn regions() -> impl Iterator<Item = &'static str> {
        TAX_RANGES.keys().copied()
    }
}

/// Impuesto en centavos, redondeado al centavo más cercano.
pub fn tax_cents(total_cents: i64, percentage: f64) -> i64 {
    ((total_cents as f64) * percentage / 100.0).round() as i64
}
