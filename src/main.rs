//! Demo: corre el pipeline de impuestos sobre algunos pedidos y muestra el
//! contexto resultante de cada uno.

use lightflow::actions::{CalculatesTax, Order};
use lightflow::contract::Configuration;
use lightflow::{AppError, Context};
use serde_json::{to_string_pretty, Map, Value};

fn describe(ctx: &Context) -> &'static str {
    if ctx.is_failure() {
        "FAILURE"
    } else if ctx.is_skip_all() {
        "SKIPPED"
    } else {
        "OK"
    }
}

fn main() -> Result<(), AppError> {
    // Carga .env y valida el entorno antes de correr: CONFIG cae a defaults
    // si hay valores inválidos, aquí preferimos abortar.
    lightflow::contract::config::init();
    let config = Configuration::from_env()?;
    println!("Config: log_level={} log_actions={}", config.log_level, config.log_actions);

    let orders = [Order::new(1, "TX", 20_000), // con envío gratis
                  Order::new(2, "NY", 4_999),
                  Order::new(3, "ZZ", 10_000), // región sin impuestos conocidos
                  Order::new(4, "CA", 0)];

    for order in &orders {
        let ctx = CalculatesTax::for_order(order)?;
        let values: Map<String, Value> = ctx.iter().map(|(k, v)| (k.to_string(), v.clone())).collect();
        let data = to_string_pretty(&values).map_err(|e| AppError::Internal(e.to_string()))?;
        println!("Pedido {} [{}] {}", order.id, describe(&ctx), ctx.message().unwrap_or(""));
        println!("{data}");
    }

    Ok(())
}
