//! Tests for the installment plan calculation.

use rstest::rstest;
use rust_decimal::{Decimal, RoundingStrategy};

use super::{
    INTEREST_FREE_MAX, INTEREST_STEP_PERCENT, MAX_INSTALLMENTS, installment_options,
};
use crate::domain::money::Money;

fn money(text: &str) -> Money {
    Money::parse(text).expect("test amount should parse")
}

#[rstest]
#[case::single(1, "100.00")]
#[case::even_split(2, "50.00")]
#[case::bumped_after_shortfall(3, "33.34")]
#[case::exact_quarter(4, "25.00")]
#[case::fifth(5, "20.00")]
#[case::sixth_rounds_up(6, "16.67")]
#[case::seven_with_14_percent(7, "16.29")]
#[case::eight_with_16_percent(8, "14.50")]
#[case::nine_with_18_percent(9, "13.11")]
#[case::ten_with_20_percent(10, "12.00")]
#[case::eleven_with_22_percent(11, "11.09")]
#[case::twelve_with_24_percent(12, "10.33")]
fn splits_one_hundred_as_the_shop_advertises(#[case] count: u8, #[case] expected: &str) {
    let plan = installment_options(money("100.00"));
    assert_eq!(plan.amount_for(count), Some(money(expected)));
}

#[rstest]
#[case::round_total("100.00")]
#[case::awkward_thirds("10.00")]
#[case::single_cent("0.01")]
#[case::large("9999.99")]
#[case::repeating_decimals("33.33")]
fn interest_free_tier_never_short_changes_the_seller(#[case] total_text: &str) {
    let total = money(total_text);
    let plan = installment_options(total);
    for count in 1..=INTEREST_FREE_MAX {
        let amount = plan
            .amount_for(count)
            .expect("plan should cover count");
        let collected = amount.times(u32::from(count));
        assert!(
            collected >= total,
            "{count} x {amount} = {collected} must cover {total}"
        );
        // The corrected amount stays within one cent of the plain division.
        let plain = total.amount() / Decimal::from(count);
        assert!(
            amount.amount() - plain <= Money::cent().amount(),
            "{amount} strays more than a cent above {total}/{count}"
        );
    }
}

#[rstest]
#[case::round_total("100.00")]
#[case::awkward_thirds("10.00")]
#[case::fractional("123.45")]
fn financed_tier_matches_the_surcharge_formula_exactly(#[case] total_text: &str) {
    let total = money(total_text);
    let plan = installment_options(total);
    for count in (INTEREST_FREE_MAX + 1)..=MAX_INSTALLMENTS {
        let amount = plan
            .amount_for(count)
            .expect("plan should cover count");
        let percent = Decimal::from(100 + INTEREST_STEP_PERCENT * u32::from(count));
        let expected = (total.amount() * percent / Decimal::from(100u32) / Decimal::from(count))
            .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
        assert_eq!(amount.amount(), expected, "count {count} of {total}");
    }
}

#[test]
fn one_cent_total_still_covers_every_interest_free_count() {
    let plan = installment_options(money("0.01"));
    for count in 1..=INTEREST_FREE_MAX {
        assert_eq!(plan.amount_for(count), Some(money("0.01")));
    }
}

#[test]
fn zero_total_yields_zero_amounts_throughout() {
    let plan = installment_options(Money::ZERO);
    for count in 1..=MAX_INSTALLMENTS {
        assert_eq!(plan.amount_for(count), Some(Money::ZERO));
    }
}

#[test]
fn plan_covers_exactly_counts_one_through_twelve() {
    let plan = installment_options(money("59.90"));
    assert_eq!(plan.amount_for(0), None);
    assert_eq!(plan.amount_for(13), None);
    assert_eq!(plan.interest_free().count(), 6);
    assert_eq!(plan.financed().count(), 6);
}

#[test]
fn identical_totals_produce_identical_plans() {
    let first = installment_options(money("271.39"));
    let second = installment_options(money("271.39"));
    assert_eq!(first, second);
}
