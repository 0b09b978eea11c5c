//! Payment method selection and planning.
//!
//! The shop accepts three methods with different pricing rules: credit
//! cards pay a chosen installment of the cart total plus shipping, PayPal
//! pays the cart total plus shipping in one go, and a bank slip pays the
//! discounted cash total plus shipping in one go.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::installments::installment_options;
use super::money::Money;
use super::order::OrderTotals;

/// Payment method chosen at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum PaymentMethod {
    /// Credit card, split into the chosen number of installments.
    CreditCard {
        /// Requested installment count, 1..=12.
        installments: u8,
    },
    /// PayPal, always a single payment of the list total.
    Paypal,
    /// Bank slip, a single payment of the discounted cash total.
    BankSlip,
}

/// Errors returned by [`plan_payment`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    /// The requested installment count is outside the offered 1..=12.
    #[error("installment count {count} is not offered")]
    UnknownInstallmentCount {
        /// The rejected count.
        count: u8,
    },
}

/// A planned payment: how many installments of what amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// The method the plan was built for.
    pub method: PaymentMethod,
    /// Number of monthly payments.
    pub number_of_installments: u8,
    /// Amount of each payment.
    pub value_of_installment: Money,
}

impl Payment {
    /// The full amount the customer will pay across all installments.
    #[must_use]
    pub fn total(&self) -> Money {
        self.value_of_installment
            .times(u32::from(self.number_of_installments))
    }
}

/// Plan the payment for an order given its totals and the shipping price.
///
/// # Examples
/// ```
/// use storefront::domain::{Money, OrderTotals, PaymentMethod, plan_payment};
///
/// let totals = OrderTotals {
///     cart_total: Money::parse("100,00")?,
///     cash_total: Money::parse("90,00")?,
///     item_count: 1,
/// };
/// let shipping = Money::parse("24,90")?;
///
/// let slip = plan_payment(PaymentMethod::BankSlip, &totals, shipping)
///     .expect("bank slip is always a single installment");
/// assert_eq!(slip.number_of_installments, 1);
/// assert_eq!(slip.value_of_installment, Money::parse("114,90")?);
/// # Ok::<(), storefront::domain::MoneyError>(())
/// ```
pub fn plan_payment(
    method: PaymentMethod,
    totals: &OrderTotals,
    shipping_price: Money,
) -> Result<Payment, PaymentError> {
    match method {
        PaymentMethod::CreditCard { installments } => {
            let plan = installment_options(totals.cart_total + shipping_price);
            let value_of_installment = plan
                .amount_for(installments)
                .ok_or(PaymentError::UnknownInstallmentCount {
                    count: installments,
                })?;
            Ok(Payment {
                method,
                number_of_installments: installments,
                value_of_installment,
            })
        }
        PaymentMethod::Paypal => Ok(Payment {
            method,
            number_of_installments: 1,
            value_of_installment: totals.cart_total + shipping_price,
        }),
        PaymentMethod::BankSlip => Ok(Payment {
            method,
            number_of_installments: 1,
            value_of_installment: totals.cash_total + shipping_price,
        }),
    }
}
