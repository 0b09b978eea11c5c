//! Monetary values with exact two-decimal precision.
//!
//! All arithmetic runs on [`rust_decimal::Decimal`]; binary floating point
//! never touches a price. Amounts are non-negative and carry exactly two
//! fractional digits, the externally visible precision of every price,
//! installment, and shipping fee in the shop.

use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned when constructing or parsing a [`Money`] value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// The textual amount could not be parsed as a decimal number.
    #[error("amount '{input}' is not a valid decimal number")]
    Invalid {
        /// The rejected input, as supplied.
        input: String,
    },
    /// The amount parsed but was below zero.
    #[error("amount '{input}' must not be negative")]
    Negative {
        /// The rejected input, as supplied.
        input: String,
    },
}

/// Non-negative monetary amount with exactly two fractional digits.
///
/// ## Invariants
/// - Never negative.
/// - Scale is always two; construction rounds half-to-even, the rounding
///   mode used consistently across the pricing core.
///
/// # Examples
/// ```
/// use storefront::domain::Money;
///
/// let price = Money::parse("24,90")?;
/// assert_eq!(price.to_string(), "24.90");
/// assert_eq!(price.to_brl_string(), "24,90");
/// # Ok::<(), storefront::domain::MoneyError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    /// The zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Validate and construct a [`Money`] from a decimal value.
    ///
    /// Rounds to two fractional digits (half-to-even) and rejects negative
    /// amounts.
    pub fn new(value: Decimal) -> Result<Self, MoneyError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(MoneyError::Negative {
                input: value.to_string(),
            });
        }
        Ok(Self::round_from(value))
    }

    /// Parse a monetary amount from user-facing text.
    ///
    /// A comma decimal separator is normalised to a point before parsing,
    /// so both `"24,90"` and `"24.90"` are accepted. Surrounding
    /// whitespace is ignored. Negative amounts are rejected.
    pub fn parse(text: &str) -> Result<Self, MoneyError> {
        let normalised = text.trim().replace(',', ".");
        let value = Decimal::from_str(&normalised).map_err(|_| MoneyError::Invalid {
            input: text.to_owned(),
        })?;
        if value.is_sign_negative() && !value.is_zero() {
            return Err(MoneyError::Negative {
                input: text.to_owned(),
            });
        }
        Ok(Self::round_from(value))
    }

    /// Construct a [`Money`] from a whole number of cents.
    #[must_use]
    pub fn from_minor_units(cents: u32) -> Self {
        Self(Decimal::new(i64::from(cents), 2))
    }

    /// The smallest representable increment, one cent.
    #[must_use]
    pub fn cent() -> Self {
        Self(Decimal::new(1, 2))
    }

    /// Round an already-validated non-negative decimal into a [`Money`].
    ///
    /// Callers inside the domain use this for arithmetic that preserves
    /// the non-negativity invariant by construction.
    pub(crate) fn round_from(value: Decimal) -> Self {
        let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
        // A parsed "-0,00" keeps the sign flag; canonicalise so zero
        // never renders with a minus.
        if rounded.is_zero() {
            rounded = Decimal::ZERO;
        }
        rounded.rescale(2);
        Self(rounded)
    }

    /// The underlying decimal amount (scale two).
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Multiply by a whole quantity.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }

    /// Subtract, flooring at zero.
    ///
    /// Derived figures such as a cash discount can round to a hair below
    /// zero; the floor keeps the invariant without surfacing an error for
    /// an impossible negative price.
    #[must_use]
    pub fn saturating_sub(self, other: Self) -> Self {
        if other.0 >= self.0 {
            Self::ZERO
        } else {
            Self(self.0 - other.0)
        }
    }

    /// Render with a comma decimal separator, as shown to Brazilian
    /// customers.
    #[must_use]
    pub fn to_brl_string(&self) -> String {
        self.0.to_string().replace('.', ",")
    }

    /// Whether this amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<Money> for Decimal {
    fn from(value: Money) -> Self {
        value.0
    }
}

impl TryFrom<Decimal> for Money {
    type Error = MoneyError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests;
