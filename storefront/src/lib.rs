//! Storefront pricing and validation core.
//!
//! The domain layer owns the calculation logic of the shop: installment
//! plans, CPF validation, cart totals, payment planning, and shipping
//! deadline arithmetic. Carrier rate lookup is a driven port; the single
//! outbound adapter talks to the carrier's HTTP quote endpoint.

pub mod domain;
pub mod outbound;
