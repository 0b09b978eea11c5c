//! Driven port for carrier rate lookups.
//!
//! The domain owns the request shape and the quote contract so checkout
//! orchestration stays adapter-agnostic: the carrier's transport, wire
//! format, and error vocabulary live entirely in the adapter.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::shipping::{CarrierService, ShippingQuote, ZipCode};

/// Domain-owned rate lookup request passed to the carrier adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingRateRequest {
    /// Postal code the parcel ships from.
    pub origin: ZipCode,
    /// Postal code the parcel ships to.
    pub destination: ZipCode,
    /// Carrier service to quote.
    pub service: CarrierService,
}

/// Errors surfaced while looking up a carrier rate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShippingRateSourceError {
    /// Network transport failed before receiving a response.
    #[error("carrier transport failed: {message}")]
    Transport {
        /// Adapter-provided failure detail.
        message: String,
    },
    /// The carrier call exceeded its timeout.
    #[error("carrier timeout: {message}")]
    Timeout {
        /// Adapter-provided failure detail.
        message: String,
    },
    /// The carrier rate-limited the request.
    #[error("carrier rate limited request: {message}")]
    RateLimited {
        /// Adapter-provided failure detail.
        message: String,
    },
    /// The carrier response could not be decoded.
    #[error("carrier response decode failed: {message}")]
    Decode {
        /// Adapter-provided failure detail.
        message: String,
    },
    /// The adapter rejected the request before execution.
    #[error("carrier request invalid: {message}")]
    InvalidRequest {
        /// Adapter-provided failure detail.
        message: String,
    },
    /// The carrier answered but refused to quote this request.
    #[error("carrier refused quote ({code}): {message}")]
    Carrier {
        /// Carrier-reported error code.
        code: String,
        /// Carrier-reported error message.
        message: String,
    },
}

impl ShippingRateSourceError {
    /// Build a [`Self::Transport`] error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Build a [`Self::Timeout`] error.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Build a [`Self::RateLimited`] error.
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::RateLimited {
            message: message.into(),
        }
    }

    /// Build a [`Self::Decode`] error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Build a [`Self::InvalidRequest`] error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Build a [`Self::Carrier`] error.
    pub fn carrier(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Carrier {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Return whether retrying this error is expected to help.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::Timeout { .. } | Self::RateLimited { .. }
        )
    }
}

/// Port for querying a carrier for a shipping price and delivery window.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShippingRateSource: Send + Sync {
    /// Fetch a quote for one rate request.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let quote = source.fetch_quote(&request).await?;
    /// assert_eq!(quote.service, request.service);
    /// ```
    async fn fetch_quote(
        &self,
        request: &ShippingRateRequest,
    ) -> Result<ShippingQuote, ShippingRateSourceError>;
}

/// Fixture implementation answering every request with a canned quote.
#[derive(Debug, Clone)]
pub struct FixtureShippingRateSource {
    quote: ShippingQuote,
}

impl FixtureShippingRateSource {
    /// Build a fixture that always returns `quote`.
    #[must_use]
    pub const fn returning(quote: ShippingQuote) -> Self {
        Self { quote }
    }
}

#[async_trait]
impl ShippingRateSource for FixtureShippingRateSource {
    async fn fetch_quote(
        &self,
        _request: &ShippingRateRequest,
    ) -> Result<ShippingQuote, ShippingRateSourceError> {
        Ok(self.quote.clone())
    }
}
