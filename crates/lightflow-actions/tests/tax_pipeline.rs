//! Tests de integración del pipeline de impuestos.

use lightflow_actions::actions::{CalculatesOrderTax, LooksUpTaxPercentage, ProvidesFreeShipping, FREE_SHIPPING_KEY,
                                 TAX_KEY, TAX_PERCENTAGE_KEY, TAX_RANGES_MISSING};
use lightflow_actions::{CalculatesTax, Order, OrderError};
use lightflow_core::{Action, Context, KeyCheck};
use serde_json::json;

fn order_context(order: &Order) -> Context {
    let mut ctx = Context::new();
    ctx.insert_serialized("order", order).unwrap();
    ctx
}

#[test]
fn taxes_an_order_and_grants_free_shipping() {
    let order = Order::new(1, "TX", 20_000);
    let ctx = CalculatesTax::for_order(&order).expect("pipeline ok");

    assert!(ctx.is_success());
    assert_eq!(ctx[TAX_PERCENTAGE_KEY], json!(8.25));
    assert_eq!(ctx[TAX_KEY], json!(1_650));
    let taxed: Order = ctx.fetch_as("order").unwrap();
    assert_eq!(taxed.total_with_tax_cents, Some(21_650));
    assert_eq!(ctx[FREE_SHIPPING_KEY], json!(true));
}

#[test]
fn below_threshold_has_no_free_shipping() {
    let ctx = CalculatesTax::for_order(&Order::new(2, "NY", 10_000)).unwrap();
    assert_eq!(ctx[FREE_SHIPPING_KEY], json!(false));
}

#[test]
fn custom_threshold_is_respected() {
    let ctx = CalculatesTax::for_order_with(&Order::new(3, "OR", 5_000), ProvidesFreeShipping::new(5_000)).unwrap();
    assert_eq!(ctx[TAX_KEY], json!(0));
    assert_eq!(ctx[FREE_SHIPPING_KEY], json!(true));
}

#[test]
fn unknown_region_fails_and_halts_pipeline() {
    let ctx = CalculatesTax::for_order(&Order::new(4, "ZZ", 10_000)).expect("failure is not an error");

    assert!(ctx.is_failure());
    assert_eq!(ctx.error_code(), Some(TAX_RANGES_MISSING));
    assert!(ctx.message().unwrap().contains("ZZ"));
    assert_eq!(ctx[TAX_PERCENTAGE_KEY], json!(null));
    assert!(!ctx.contains_key(TAX_KEY));
    assert!(!ctx.contains_key(FREE_SHIPPING_KEY));
}

#[test]
fn empty_order_skips_remaining_actions() {
    let ctx = CalculatesTax::for_order(&Order::new(5, "ZZ", 0)).unwrap();

    assert!(ctx.is_skip_all());
    assert!(ctx.is_success());
    assert!(!ctx.contains_key(TAX_PERCENTAGE_KEY));
}

#[test]
fn negative_total_surfaces_body_error() {
    let err = CalculatesTax::for_order(&Order::new(6, "TX", -1)).unwrap_err();
    assert_eq!(err.downcast_body::<OrderError>().unwrap(),
               OrderError::NegativeTotal { id: 6,
                                           total_cents: -1 });
}

#[test]
fn calculating_tax_without_percentage_is_a_missing_key() {
    let mut ctx = order_context(&Order::new(7, "TX", 100));
    let err = CalculatesOrderTax.execute(&mut ctx).unwrap_err();
    let missing = err.as_missing_key().unwrap();
    assert_eq!(missing.check, KeyCheck::Expected);
    assert_eq!(missing.missing, vec![TAX_PERCENTAGE_KEY]);
}

#[test]
fn shipping_before_tax_is_a_body_error() {
    let mut ctx = order_context(&Order::new(8, "TX", 100));
    let err = ProvidesFreeShipping::default().execute(&mut ctx).unwrap_err();
    assert_eq!(err.downcast_body::<OrderError>().unwrap(), OrderError::NotTaxed(8));
}

#[test]
fn single_actions_compose_by_hand() {
    let mut ctx = order_context(&Order::new(9, "ca", 1_000));
    LooksUpTaxPercentage.execute(&mut ctx).unwrap();
    CalculatesOrderTax.execute(&mut ctx).unwrap();
    assert_eq!(ctx[TAX_KEY], json!(73)); // 72.5 -> 73
}

#[test]
fn total_overflow_surfaces_body_error() {
    let err = CalculatesTax::for_order(&Order::new(10, "TX", i64::MAX - 10)).unwrap_err();
    assert_eq!(err.downcast_body::<OrderError>().unwrap(), OrderError::TotalOverflow { id: 10 });
}

#[test]
fn calculating_tax_promises_the_updated_order() {
    assert_eq!(CalculatesOrderTax.promised_keys(), ["order", TAX_KEY]);

    let mut ctx = order_context(&Order::new(11, "NY", 2_500));
    ctx.insert(TAX_PERCENTAGE_KEY, 4.0);
    CalculatesOrderTax.execute(&mut ctx).unwrap();
    let taxed: Order = ctx.fetch_as("order").unwrap();
    assert_eq!(taxed.total_with_tax_cents, Some(2_600));
    assert_eq!(ctx[TAX_KEY], json!(100));
}
