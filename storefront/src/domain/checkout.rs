//! Checkout orchestration over the carrier rate port.
//!
//! The service turns an open cart into a requested order: it quotes the
//! shipping, plans the payment for the chosen method, and stamps the
//! order with a transaction id and request timestamp. Persistence and
//! presentation stay outside; this is pure domain coordination.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::money::Money;
use super::order::{Order, OrderTotals, TransactionId};
use super::payment::{Payment, PaymentError, PaymentMethod, plan_payment};
use super::ports::{ShippingRateRequest, ShippingRateSource, ShippingRateSourceError};
use super::shipping::{CarrierService, ShippingQuote, ZipCode};

/// Errors returned by [`CheckoutService::request_order`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// The order holds no items; there is nothing to check out.
    #[error("cannot check out an empty cart")]
    EmptyCart,
    /// The carrier could not be reached; retrying may help.
    #[error("carrier unavailable: {message}")]
    CarrierUnavailable {
        /// Underlying lookup failure detail.
        message: String,
    },
    /// The carrier or adapter rejected the quote request outright.
    #[error("shipping quote rejected: {message}")]
    QuoteRejected {
        /// Underlying lookup failure detail.
        message: String,
    },
    /// The payment could not be planned for the chosen method.
    #[error(transparent)]
    Payment(#[from] PaymentError),
}

/// Everything checkout produced for a requested order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutOutcome {
    /// Transaction id stamped on the order.
    pub transaction_id: TransactionId,
    /// When the order was requested.
    pub requested_at: DateTime<Utc>,
    /// The planned payment.
    pub payment: Payment,
    /// The accepted shipping quote.
    pub quote: ShippingQuote,
    /// The order totals the payment was planned against.
    pub totals: OrderTotals,
}

impl CheckoutOutcome {
    /// Discount granted relative to paying the list total: non-zero only
    /// for bank-slip payments, where the cash total applies.
    #[must_use]
    pub fn discount(&self) -> Money {
        (self.totals.cart_total + self.quote.price).saturating_sub(self.payment.total())
    }

    /// Interest charged on top of the list total: non-zero only for
    /// financed credit-card payments.
    #[must_use]
    pub fn interests(&self) -> Money {
        self.payment
            .total()
            .saturating_sub(self.totals.cart_total + self.quote.price)
    }
}

/// Checkout service implementing the shop's order-request flow.
#[derive(Clone)]
pub struct CheckoutService<S> {
    rates: Arc<S>,
    origin: ZipCode,
}

impl<S> CheckoutService<S> {
    /// Create a service shipping from `origin` and quoting via `rates`.
    pub const fn new(rates: Arc<S>, origin: ZipCode) -> Self {
        Self { rates, origin }
    }
}

impl<S> CheckoutService<S>
where
    S: ShippingRateSource,
{
    /// Request `order`: quote shipping to `destination`, plan the payment,
    /// and stamp the order.
    ///
    /// `now` is supplied by the caller so the flow stays deterministic
    /// under test.
    pub async fn request_order(
        &self,
        order: &mut Order,
        destination: ZipCode,
        service: CarrierService,
        method: PaymentMethod,
        now: DateTime<Utc>,
    ) -> Result<CheckoutOutcome, CheckoutError> {
        let totals = order.totals();
        if totals.item_count == 0 {
            return Err(CheckoutError::EmptyCart);
        }

        let request = ShippingRateRequest {
            origin: self.origin.clone(),
            destination,
            service,
        };
        let quote = self
            .rates
            .fetch_quote(&request)
            .await
            .map_err(map_rate_error)?;

        let payment = plan_payment(method, &totals, quote.price)?;
        let transaction_id = order.request(now);
        tracing::debug!(
            %transaction_id,
            installments = payment.number_of_installments,
            shipping = %quote.price,
            "order requested"
        );

        Ok(CheckoutOutcome {
            transaction_id,
            requested_at: now,
            payment,
            quote,
            totals,
        })
    }
}

fn map_rate_error(error: ShippingRateSourceError) -> CheckoutError {
    if error.is_retryable() {
        tracing::warn!(%error, "carrier rate lookup failed transiently");
        CheckoutError::CarrierUnavailable {
            message: error.to_string(),
        }
    } else {
        CheckoutError::QuoteRejected {
            message: error.to_string(),
        }
    }
}
