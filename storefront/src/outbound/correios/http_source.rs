//! Reqwest-backed Correios rate source adapter.
//!
//! This adapter owns transport details only: query encoding, timeout and
//! HTTP error mapping, and decoding the quote payload into a domain
//! [`ShippingQuote`](crate::domain::shipping::ShippingQuote).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::Url;

use super::dto::QuoteResponseDto;
use crate::domain::ports::{ShippingRateRequest, ShippingRateSource, ShippingRateSourceError};
use crate::domain::shipping::ShippingQuote;

const DEFAULT_USER_AGENT: &str = "storefront-rate-lookup/0.1";

/// Outbound identity for carrier requests.
pub struct CorreiosHttpIdentity {
    /// HTTP user-agent sent to the carrier.
    pub user_agent: String,
}

impl Default for CorreiosHttpIdentity {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

/// Parcel dimensions and declared value sent with every quote request.
///
/// The shop ships one standard box; the defaults mirror it.
#[derive(Debug, Clone, Copy)]
pub struct PackageSpec {
    /// Weight in kilograms.
    pub weight_kg: u32,
    /// Carrier format code (1 = box/parcel).
    pub format_code: u32,
    /// Length in centimetres.
    pub length_cm: u32,
    /// Height in centimetres.
    pub height_cm: u32,
    /// Width in centimetres.
    pub width_cm: u32,
    /// Diameter in centimetres, for rolls.
    pub diameter_cm: u32,
    /// Declared value in whole reais, for carrier insurance.
    pub declared_value: u32,
}

impl Default for PackageSpec {
    fn default() -> Self {
        Self {
            weight_kg: 1,
            format_code: 1,
            length_cm: 30,
            height_cm: 20,
            width_cm: 20,
            diameter_cm: 0,
            declared_value: 0,
        }
    }
}

/// Carrier rate adapter performing HTTP GET requests against one endpoint.
pub struct CorreiosHttpSource {
    client: Client,
    endpoint: Url,
    user_agent: String,
    package: PackageSpec,
}

impl CorreiosHttpSource {
    /// Build an adapter using a reqwest client with an explicit request
    /// timeout and the standard package spec.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        Self::with_identity(
            endpoint,
            timeout,
            CorreiosHttpIdentity::default(),
            PackageSpec::default(),
        )
    }

    /// Build an adapter with explicit outbound identity and package spec.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_identity(
        endpoint: Url,
        timeout: Duration,
        identity: CorreiosHttpIdentity,
        package: PackageSpec,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            user_agent: identity.user_agent,
            package,
        })
    }
}

#[async_trait]
impl ShippingRateSource for CorreiosHttpSource {
    async fn fetch_quote(
        &self,
        request: &ShippingRateRequest,
    ) -> Result<ShippingQuote, ShippingRateSourceError> {
        let query = build_quote_query(request, &self.package);
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&query)
            .header(reqwest::header::USER_AGENT, self.user_agent.as_str())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        let quote = parse_quote(body.as_ref(), request)?;
        tracing::debug!(
            service = %request.service,
            price = %quote.price,
            days = quote.delivery_business_days,
            "carrier quote received"
        );
        Ok(quote)
    }
}

fn parse_quote(
    body: &[u8],
    request: &ShippingRateRequest,
) -> Result<ShippingQuote, ShippingRateSourceError> {
    let decoded: QuoteResponseDto = serde_json::from_slice(body).map_err(|error| {
        ShippingRateSourceError::decode(format!("invalid carrier quote payload: {error}"))
    })?;
    decoded.service.into_domain_quote(request.service)
}

fn build_quote_query(
    request: &ShippingRateRequest,
    package: &PackageSpec,
) -> Vec<(&'static str, String)> {
    vec![
        ("sCepOrigem", request.origin.as_str().to_owned()),
        ("sCepDestino", request.destination.as_str().to_owned()),
        ("nVlPeso", package.weight_kg.to_string()),
        ("nCdFormato", package.format_code.to_string()),
        ("nVlComprimento", package.length_cm.to_string()),
        ("nVlAltura", package.height_cm.to_string()),
        ("nVlLargura", package.width_cm.to_string()),
        ("sCdMaoPropria", "n".to_owned()),
        ("nVlValorDeclarado", package.declared_value.to_string()),
        ("sCdAvisoRecebimento", "n".to_owned()),
        ("nCdServico", request.service.code().to_owned()),
        ("nVlDiametro", package.diameter_cm.to_string()),
        ("StrRetorno", "json".to_owned()),
        ("nIndicaCalculo", "3".to_owned()),
    ]
}

fn map_transport_error(error: reqwest::Error) -> ShippingRateSourceError {
    if error.is_timeout() {
        ShippingRateSourceError::timeout(error.to_string())
    } else {
        ShippingRateSourceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> ShippingRateSourceError {
    let preview = body_preview(body);
    let message = if preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), preview)
    };

    match status {
        StatusCode::TOO_MANY_REQUESTS => ShippingRateSourceError::rate_limited(message),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            ShippingRateSourceError::timeout(message)
        }
        _ if status.is_client_error() => ShippingRateSourceError::invalid_request(message),
        _ => ShippingRateSourceError::transport(message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
