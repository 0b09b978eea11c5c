//! Orders, cart items, and their derived totals.
//!
//! An order accumulates items (unit price × quantity) while the customer
//! browses, then is stamped with a transaction id and request timestamp at
//! checkout. Cash totals apply the shop's 10% up-front-payment discount
//! per item.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::money::Money;

/// Multiplier for the cash price of a product: 10% off the list price.
const CASH_PRICE_FACTOR: Decimal = Decimal::from_parts(90, 0, 0, false, 2);

/// Lifecycle of an order, from open cart to shipped parcel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Open cart, still being assembled.
    Analysing,
    /// Checkout completed, awaiting payment confirmation.
    Requested,
    /// Payment confirmed.
    #[serde(rename = "payed")]
    Paid,
    /// Being picked and packed.
    Preparing,
    /// Handed to the carrier.
    Shipped,
}

/// Opaque identifier stamped on an order at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(Uuid);

impl TransactionId {
    /// Generate a fresh random transaction id.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One line of an order: a product's unit price and the quantity taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct OrderItem {
    /// List price of one unit.
    pub unit_price: Money,
    /// Units of the product in the cart.
    pub quantity: u32,
}

impl OrderItem {
    /// Build an order line.
    #[must_use]
    pub const fn new(unit_price: Money, quantity: u32) -> Self {
        Self {
            unit_price,
            quantity,
        }
    }

    /// Line total at list price.
    #[must_use]
    pub fn total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }

    /// Cash price of one unit: 10% off, rounded to the cent.
    #[must_use]
    pub fn cash_unit_price(&self) -> Money {
        Money::round_from(self.unit_price.amount() * CASH_PRICE_FACTOR)
    }

    /// Line total at the discounted cash price.
    #[must_use]
    pub fn cash_total(&self) -> Money {
        self.cash_unit_price().times(self.quantity)
    }
}

/// Snapshot of an order's derived figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotals {
    /// Sum of line totals at list price.
    pub cart_total: Money,
    /// Sum of line totals at the discounted cash price.
    pub cash_total: Money,
    /// Total number of units across all lines.
    pub item_count: u32,
}

/// A customer's order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    items: Vec<OrderItem>,
    status: OrderStatus,
    transaction_id: Option<TransactionId>,
    requested_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Open a new, empty order in the analysing state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            status: OrderStatus::Analysing,
            transaction_id: None,
            requested_at: None,
        }
    }

    /// Add a line to the order.
    pub fn push_item(&mut self, item: OrderItem) {
        self.items.push(item);
    }

    /// The order's lines.
    #[must_use]
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn status(&self) -> OrderStatus {
        self.status
    }

    /// Transaction id, present once the order has been requested.
    #[must_use]
    pub const fn transaction_id(&self) -> Option<TransactionId> {
        self.transaction_id
    }

    /// Request timestamp, present once the order has been requested.
    #[must_use]
    pub const fn requested_at(&self) -> Option<DateTime<Utc>> {
        self.requested_at
    }

    /// Compute the order's derived totals.
    #[must_use]
    pub fn totals(&self) -> OrderTotals {
        let mut cart_total = Money::ZERO;
        let mut cash_total = Money::ZERO;
        let mut item_count = 0u32;
        for item in &self.items {
            cart_total = cart_total + item.total();
            cash_total = cash_total + item.cash_total();
            item_count += item.quantity;
        }
        OrderTotals {
            cart_total,
            cash_total,
            item_count,
        }
    }

    /// Stamp the order as requested: sets the status, a fresh transaction
    /// id, and the request timestamp. Returns the transaction id.
    pub fn request(&mut self, now: DateTime<Utc>) -> TransactionId {
        let transaction_id = TransactionId::random();
        self.status = OrderStatus::Requested;
        self.transaction_id = Some(transaction_id);
        self.requested_at = Some(now);
        transaction_id
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
