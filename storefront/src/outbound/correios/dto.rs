//! Wire types for the Correios quote endpoint.
//!
//! The carrier reports prices as locale-formatted text ("24,90") and
//! errors in-band via a code/message pair; code "0" (or its absence)
//! means success.

use serde::Deserialize;

use crate::domain::money::Money;
use crate::domain::ports::ShippingRateSourceError;
use crate::domain::shipping::{CarrierService, ShippingQuote};

/// Top-level quote response envelope.
#[derive(Debug, Deserialize)]
pub(super) struct QuoteResponseDto {
    #[serde(rename = "cServico")]
    pub(super) service: QuoteDto,
}

/// Quote payload for one service.
#[derive(Debug, Deserialize)]
pub(super) struct QuoteDto {
    #[serde(rename = "Valor", default)]
    price: String,
    #[serde(rename = "PrazoEntrega", default)]
    delivery_days: String,
    #[serde(rename = "Erro", default)]
    error_code: Option<String>,
    #[serde(rename = "MsgErro", default)]
    error_message: Option<String>,
}

impl QuoteDto {
    /// Convert the wire payload into a domain quote, surfacing in-band
    /// carrier errors.
    pub(super) fn into_domain_quote(
        self,
        service: CarrierService,
    ) -> Result<ShippingQuote, ShippingRateSourceError> {
        if let Some(code) = self
            .error_code
            .filter(|code| !code.is_empty() && code.as_str() != "0")
        {
            let message = self
                .error_message
                .unwrap_or_else(|| "carrier reported an error without a message".to_owned());
            return Err(ShippingRateSourceError::carrier(code, message));
        }

        let price = Money::parse(&self.price).map_err(|error| {
            ShippingRateSourceError::decode(format!(
                "carrier price '{}' is not a valid amount: {error}",
                self.price
            ))
        })?;
        let delivery_business_days = self.delivery_days.trim().parse::<u32>().map_err(|_| {
            ShippingRateSourceError::decode(format!(
                "carrier deadline '{}' is not a whole day count",
                self.delivery_days
            ))
        })?;

        Ok(ShippingQuote {
            service,
            price,
            delivery_business_days,
        })
    }
}
