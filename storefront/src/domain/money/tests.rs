//! Tests for the monetary value type.

use rstest::rstest;
use rust_decimal::Decimal;
use std::str::FromStr;

use super::{Money, MoneyError};

#[rstest]
#[case::comma_separator("24,90", "24.90")]
#[case::point_separator("24.90", "24.90")]
#[case::integral("100", "100.00")]
#[case::padded(" 10,5 ", "10.50")]
#[case::zero("0", "0.00")]
fn parses_locale_text_into_two_decimal_amounts(#[case] input: &str, #[case] expected: &str) {
    let money = Money::parse(input).expect("input should parse");
    assert_eq!(money.to_string(), expected);
}

#[rstest]
#[case::empty("")]
#[case::words("abc")]
#[case::thousands_separator("1.234,56")]
fn rejects_unparseable_text(#[case] input: &str) {
    assert!(matches!(
        Money::parse(input),
        Err(MoneyError::Invalid { .. })
    ));
}

#[test]
fn rejects_negative_amounts() {
    assert!(matches!(
        Money::parse("-5,00"),
        Err(MoneyError::Negative { .. })
    ));
    let negative = Decimal::from_str("-0.01").expect("decimal literal");
    assert!(matches!(
        Money::new(negative),
        Err(MoneyError::Negative { .. })
    ));
}

#[rstest]
#[case::midpoint_rounds_to_even_down("2.345", "2.34")]
#[case::midpoint_rounds_to_even_up("2.355", "2.36")]
#[case::below_midpoint("2.344", "2.34")]
#[case::above_midpoint("2.346", "2.35")]
fn rounds_half_to_even(#[case] input: &str, #[case] expected: &str) {
    let value = Decimal::from_str(input).expect("decimal literal");
    let money = Money::new(value).expect("non-negative");
    assert_eq!(money.to_string(), expected);
}

#[test]
fn parses_negative_zero_as_plain_zero() {
    let money = Money::parse("-0,00").expect("negative zero is just zero");
    assert_eq!(money, Money::ZERO);
    assert_eq!(money.to_string(), "0.00");
    assert_eq!(money.to_brl_string(), "0,00");

    let from_decimal = Decimal::from_str("-0.00").expect("decimal literal");
    assert_eq!(
        Money::new(from_decimal).expect("negative zero is just zero").to_string(),
        "0.00"
    );
}

#[test]
fn formats_with_comma_for_display_to_customers() {
    let money = Money::parse("1234.56").expect("input should parse");
    assert_eq!(money.to_brl_string(), "1234,56");
}

#[test]
fn arithmetic_helpers_preserve_scale() {
    let price = Money::from_minor_units(1999);
    assert_eq!((price + Money::cent()).to_string(), "20.00");
    assert_eq!(price.times(3).to_string(), "59.97");
    assert_eq!(
        price.saturating_sub(Money::from_minor_units(2500)),
        Money::ZERO
    );
    assert_eq!(
        Money::from_minor_units(2500).saturating_sub(price).to_string(),
        "5.01"
    );
}

#[test]
fn serde_round_trips_as_decimal_string() {
    let money = Money::parse("19,90").expect("input should parse");
    let encoded = serde_json::to_string(&money).expect("serialize");
    assert_eq!(encoded, "\"19.90\"");
    let decoded: Money = serde_json::from_str(&encoded).expect("deserialize");
    assert_eq!(decoded, money);
}
