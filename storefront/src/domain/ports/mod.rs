//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the domain expects to interact with driven adapters.
//! Each trait exposes strongly typed errors so adapters map their failures
//! into predictable variants instead of returning `anyhow::Result`.

pub mod shipping_rate_source;

pub use self::shipping_rate_source::{
    FixtureShippingRateSource, ShippingRateRequest, ShippingRateSource, ShippingRateSourceError,
};

#[cfg(test)]
pub use self::shipping_rate_source::MockShippingRateSource;
