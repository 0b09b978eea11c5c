//! Domain primitives and services.
//!
//! Purpose: define the strongly typed value objects and pure calculations
//! the storefront is built around. Keep types immutable, validate at
//! construction, and document invariants in each type's Rustdoc.
//!
//! Public surface:
//! - [`Money`] — exact two-decimal monetary amount.
//! - [`InstallmentPlan`] / [`installment_options`] — 1..=12 payment split.
//! - [`Cpf`] / [`is_valid_tax_id`] — Brazilian tax-id validation.
//! - [`advance_business_days`] — weekend-aware deadline arithmetic.
//! - [`Order`] and friends — cart totals and order lifecycle.
//! - [`CheckoutService`] — payment planning over the carrier rate port.

pub mod business_days;
pub mod checkout;
pub mod installments;
mod mask;
pub mod money;
pub mod order;
pub mod payment;
pub mod ports;
pub mod shipping;
pub mod tax_id;

pub use self::business_days::{
    BusinessDayError, HolidayCalendar, NoHolidays, advance_business_days,
    advance_business_days_with,
};
pub use self::checkout::{CheckoutError, CheckoutOutcome, CheckoutService};
pub use self::installments::{
    INTEREST_FREE_MAX, INTEREST_STEP_PERCENT, InstallmentPlan, MAX_INSTALLMENTS,
    installment_options,
};
pub use self::money::{Money, MoneyError};
pub use self::order::{Order, OrderItem, OrderStatus, OrderTotals, TransactionId};
pub use self::payment::{Payment, PaymentError, PaymentMethod, plan_payment};
pub use self::shipping::{
    CarrierService, ShippingQuote, UnknownServiceCode, ZipCode, ZipCodeError,
};
pub use self::tax_id::{Cpf, CpfError, is_valid_tax_id};
