//! End-to-end checkout flow against a fixture rate source.
//!
//! Exercises the public surface the way a caller would: build a cart,
//! check out with each payment method, and verify the resulting payment,
//! order stamps, and delivery deadline.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use storefront::domain::{
    CarrierService, CheckoutService, Money, Order, OrderItem, OrderStatus, PaymentMethod,
    ShippingQuote, ZipCode, advance_business_days,
};
use storefront::domain::ports::FixtureShippingRateSource;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
}

fn money(text: &str) -> Money {
    Money::parse(text).expect("test amount should parse")
}

fn zip(text: &str) -> ZipCode {
    ZipCode::parse(text).expect("test postal code should parse")
}

fn checkout_time() -> DateTime<Utc> {
    // A Friday; with the five-day PAC window the parcel lands the Friday
    // after.
    Utc.with_ymd_and_hms(2024, 6, 7, 16, 20, 0)
        .single()
        .expect("unambiguous")
}

fn service_under_test() -> CheckoutService<FixtureShippingRateSource> {
    let quote = ShippingQuote {
        service: CarrierService::Pac,
        price: money("24,90"),
        delivery_business_days: 5,
    };
    CheckoutService::new(
        Arc::new(FixtureShippingRateSource::returning(quote)),
        zip("88037-310"),
    )
}

fn stocked_cart() -> Order {
    let mut order = Order::new();
    order.push_item(OrderItem::new(money("59,90"), 1));
    order.push_item(OrderItem::new(money("12,55"), 4));
    order
}

#[tokio::test]
async fn credit_card_checkout_covers_the_total_and_stamps_the_order() {
    init_tracing();
    let mut order = stocked_cart();
    let outcome = service_under_test()
        .request_order(
            &mut order,
            zip("01310-100"),
            CarrierService::Pac,
            PaymentMethod::CreditCard { installments: 6 },
            checkout_time(),
        )
        .await
        .expect("checkout should succeed");

    // Cart: 59.90 + 4 x 12.55 = 110.10; with shipping, 135.00.
    assert_eq!(outcome.totals.cart_total, money("110,10"));
    assert_eq!(outcome.payment.number_of_installments, 6);
    assert!(outcome.payment.total() >= money("135,00"));
    assert_eq!(order.status(), OrderStatus::Requested);
    assert_eq!(order.transaction_id(), Some(outcome.transaction_id));
}

#[tokio::test]
async fn bank_slip_checkout_charges_the_discounted_cash_total() {
    init_tracing();
    let mut order = stocked_cart();
    let outcome = service_under_test()
        .request_order(
            &mut order,
            zip("01310-100"),
            CarrierService::Pac,
            PaymentMethod::BankSlip,
            checkout_time(),
        )
        .await
        .expect("checkout should succeed");

    // Cash prices: 53.91 + 4 x 11.30 = 99.11; with shipping, 124.01.
    assert_eq!(outcome.payment.value_of_installment, money("124,01"));
    assert_eq!(outcome.payment.number_of_installments, 1);
    assert_eq!(outcome.discount(), money("10,99"));
}

#[tokio::test]
async fn the_quote_deadline_matches_the_business_day_calculator() {
    init_tracing();
    let mut order = stocked_cart();
    let outcome = service_under_test()
        .request_order(
            &mut order,
            zip("01310-100"),
            CarrierService::Pac,
            PaymentMethod::Paypal,
            checkout_time(),
        )
        .await
        .expect("checkout should succeed");

    let completed_at = checkout_time();
    let deadline = outcome
        .quote
        .deadline(completed_at)
        .expect("window is non-negative");
    assert_eq!(
        Ok(deadline),
        advance_business_days(completed_at, 5),
        "deadline must agree with the calculator"
    );
    // Friday 2024-06-07 + 5 business days = Friday 2024-06-14.
    let expected = Utc
        .with_ymd_and_hms(2024, 6, 14, 16, 20, 0)
        .single()
        .expect("unambiguous");
    assert_eq!(deadline, expected);
}
