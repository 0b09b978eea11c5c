//! Installment plan calculation.
//!
//! Splits a cart total into 1..=12 monthly payments. The first six counts
//! are interest-free: the per-installment amount is the rounded division,
//! bumped by one cent until the installments cover the total, so rounding
//! never short-changes the seller. Counts seven to twelve carry a
//! surcharge of 2% per installment count, with no shortfall correction:
//! the interest already exceeds the principal there, an asymmetry carried
//! over from observed behaviour rather than corrected.

use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use super::money::Money;

/// Highest installment count offered without interest.
pub const INTEREST_FREE_MAX: u8 = 6;

/// Highest installment count offered at all.
pub const MAX_INSTALLMENTS: u8 = 12;

/// Surcharge percentage applied per installment count in the financed
/// tier: paying in `n` installments costs `n × 2%` extra.
pub const INTEREST_STEP_PERCENT: u32 = 2;

/// Ordered mapping from installment count (1..=12) to the per-installment
/// amount.
///
/// ## Invariants
/// - Contains every count from 1 to [`MAX_INSTALLMENTS`].
/// - For counts up to [`INTEREST_FREE_MAX`], `count × amount` is at least
///   the original total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InstallmentPlan(BTreeMap<u8, Money>);

impl InstallmentPlan {
    /// The per-installment amount for `count`, if within 1..=12.
    #[must_use]
    pub fn amount_for(&self, count: u8) -> Option<Money> {
        self.0.get(&count).copied()
    }

    /// Iterate over the interest-free options (counts 1..=6).
    pub fn interest_free(&self) -> impl Iterator<Item = (u8, Money)> + '_ {
        self.0
            .iter()
            .filter(|(count, _)| **count <= INTEREST_FREE_MAX)
            .map(|(count, amount)| (*count, *amount))
    }

    /// Iterate over the financed options (counts 7..=12).
    pub fn financed(&self) -> impl Iterator<Item = (u8, Money)> + '_ {
        self.0
            .iter()
            .filter(|(count, _)| **count > INTEREST_FREE_MAX)
            .map(|(count, amount)| (*count, *amount))
    }

    /// Borrow the underlying ordered map.
    #[must_use]
    pub const fn as_map(&self) -> &BTreeMap<u8, Money> {
        &self.0
    }
}

/// Compute the installment options for a cart total.
///
/// Deterministic and pure: identical totals always produce identical
/// plans. Negative totals are unrepresentable by [`Money`], so the
/// calculation is total over its input domain.
///
/// # Examples
/// ```
/// use storefront::domain::{Money, installment_options};
///
/// let plan = installment_options(Money::parse("100,00")?);
/// // 100 / 3 rounds to 33.33, which falls short; the amount is bumped.
/// assert_eq!(plan.amount_for(3), Some(Money::parse("33,34")?));
/// // Seven installments carry a 14% surcharge: 114 / 7.
/// assert_eq!(plan.amount_for(7), Some(Money::parse("16,29")?));
/// # Ok::<(), storefront::domain::MoneyError>(())
/// ```
#[must_use]
pub fn installment_options(total: Money) -> InstallmentPlan {
    let total_amount = total.amount();
    let mut options = BTreeMap::new();

    for count in 1..=INTEREST_FREE_MAX {
        options.insert(count, interest_free_amount(total_amount, count));
    }
    for count in (INTEREST_FREE_MAX + 1)..=MAX_INSTALLMENTS {
        options.insert(count, financed_amount(total_amount, count));
    }

    InstallmentPlan(options)
}

/// Rounded division, bumped by one cent until the sum covers the total.
fn interest_free_amount(total: Decimal, count: u8) -> Money {
    let divisor = Decimal::from(count);
    let mut amount = round_half_even(total / divisor);
    let cent = Money::cent().amount();
    while amount * divisor < total {
        amount += cent;
    }
    Money::round_from(amount)
}

/// `total × (100 + 2 × count) / 100 / count`, rounded once at the end.
fn financed_amount(total: Decimal, count: u8) -> Money {
    let surcharged_percent = Decimal::from(100 + INTEREST_STEP_PERCENT * u32::from(count));
    let amount = total * surcharged_percent / Decimal::from(100u32) / Decimal::from(count);
    Money::round_from(amount)
}

fn round_half_even(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
}

#[cfg(test)]
mod tests;
