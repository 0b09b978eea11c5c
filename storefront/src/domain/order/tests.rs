//! Tests for orders and cart totals.

use chrono::{TimeZone, Utc};
use rstest::{fixture, rstest};

use super::{Order, OrderItem, OrderStatus};
use crate::domain::money::Money;

fn money(text: &str) -> Money {
    Money::parse(text).expect("test amount should parse")
}

#[fixture]
fn stocked_order() -> Order {
    let mut order = Order::new();
    order.push_item(OrderItem::new(money("19.99"), 2));
    order.push_item(OrderItem::new(money("5.50"), 1));
    order
}

#[test]
fn line_totals_multiply_price_by_quantity() {
    let item = OrderItem::new(money("19.99"), 3);
    assert_eq!(item.total(), money("59.97"));
}

#[rstest]
#[case::exact("10.00", "9.00")]
#[case::rounded_half_even("19.99", "17.99")]
#[case::single_cent("0.01", "0.01")]
fn cash_unit_price_is_ten_percent_off(#[case] list: &str, #[case] cash: &str) {
    let item = OrderItem::new(money(list), 1);
    assert_eq!(item.cash_unit_price(), money(cash));
}

#[rstest]
fn totals_sum_all_lines(stocked_order: Order) {
    let totals = stocked_order.totals();
    assert_eq!(totals.cart_total, money("45.48"));
    // 19.99 -> 17.99 cash, 5.50 -> 4.95 cash.
    assert_eq!(totals.cash_total, money("40.93"));
    assert_eq!(totals.item_count, 3);
}

#[test]
fn empty_order_has_zero_totals() {
    let totals = Order::new().totals();
    assert!(totals.cart_total.is_zero());
    assert!(totals.cash_total.is_zero());
    assert_eq!(totals.item_count, 0);
}

#[rstest]
fn requesting_stamps_id_status_and_timestamp(mut stocked_order: Order) {
    let now = Utc
        .with_ymd_and_hms(2024, 6, 7, 12, 0, 0)
        .single()
        .expect("unambiguous");
    assert_eq!(stocked_order.status(), OrderStatus::Analysing);

    let transaction_id = stocked_order.request(now);

    assert_eq!(stocked_order.status(), OrderStatus::Requested);
    assert_eq!(stocked_order.transaction_id(), Some(transaction_id));
    assert_eq!(stocked_order.requested_at(), Some(now));
}

#[test]
fn order_status_serialises_with_legacy_names() {
    let encoded = serde_json::to_string(&OrderStatus::Paid).expect("serialize");
    assert_eq!(encoded, "\"payed\"");
    let decoded: OrderStatus = serde_json::from_str("\"analysing\"").expect("deserialize");
    assert_eq!(decoded, OrderStatus::Analysing);
}
