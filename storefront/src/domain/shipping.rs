//! Shipping destinations, carrier services, and delivery quotes.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::business_days::{BusinessDayError, advance_business_days};
use super::mask::digits_only;
use super::money::Money;

const ZIP_CODE_LENGTH: usize = 8;

/// Validation errors returned by [`ZipCode::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ZipCodeError {
    /// After mask stripping the input did not contain eight digits.
    #[error("postal code must contain {ZIP_CODE_LENGTH} digits, found {found}")]
    WrongLength {
        /// Number of digits found in the input.
        found: usize,
    },
}

/// Brazilian postal code (CEP), stored as its eight bare digits.
///
/// ## Invariants
/// - Always exactly eight ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ZipCode(String);

impl ZipCode {
    /// Strip mask characters ("88037-310" → "88037310") and validate.
    pub fn parse(input: impl AsRef<str>) -> Result<Self, ZipCodeError> {
        let bare = digits_only(input.as_ref());
        if bare.len() != ZIP_CODE_LENGTH {
            return Err(ZipCodeError::WrongLength { found: bare.len() });
        }
        Ok(Self(bare))
    }

    /// The bare eight-digit representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for ZipCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<ZipCode> for String {
    fn from(value: ZipCode) -> Self {
        value.0
    }
}

impl TryFrom<String> for ZipCode {
    type Error = ZipCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

/// Carrier services the shop quotes against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CarrierService {
    /// Express service.
    Sedex,
    /// Economy service.
    Pac,
}

/// Error returned when a carrier service code is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown carrier service code '{code}'")]
pub struct UnknownServiceCode {
    /// The rejected code.
    pub code: String,
}

impl CarrierService {
    /// The carrier's wire code for this service.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Sedex => "04014",
            Self::Pac => "04510",
        }
    }

    /// Resolve a carrier wire code back to a service.
    pub fn from_code(code: &str) -> Result<Self, UnknownServiceCode> {
        match code {
            "04014" => Ok(Self::Sedex),
            "04510" => Ok(Self::Pac),
            other => Err(UnknownServiceCode {
                code: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for CarrierService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl From<CarrierService> for String {
    fn from(value: CarrierService) -> Self {
        value.code().to_owned()
    }
}

impl TryFrom<String> for CarrierService {
    type Error = UnknownServiceCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_code(&value)
    }
}

/// A carrier's answer to a rate lookup: price and delivery window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct ShippingQuote {
    /// Service the quote applies to.
    pub service: CarrierService,
    /// Shipping price.
    pub price: Money,
    /// Delivery window in business days.
    pub delivery_business_days: u32,
}

impl ShippingQuote {
    /// Delivery deadline: the completion timestamp advanced by the quoted
    /// business-day window.
    pub fn deadline(&self, completed_at: DateTime<Utc>) -> Result<DateTime<Utc>, BusinessDayError> {
        advance_business_days(completed_at, i64::from(self.delivery_business_days))
    }
}
