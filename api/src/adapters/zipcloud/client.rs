//! ZipCloud API client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::domain::entities::Address;
use crate::domain::ports::AddressLookup;
use crate::error::LookupError;

/// Public ZipCloud search endpoint
pub const DEFAULT_BASE_URL: &str = "https://zipcloud.ibsnet.co.jp/api/search";

/// Per-call deadline used when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const SERVICE_NAME: &str = "ZipCloud API";
const STATUS_OK: f64 = 200.0;

/// Address lookup backed by the ZipCloud search API
///
/// Stateless apart from its configuration; one instance is shared by every
/// request. Each lookup is exactly one `GET` with no retry.
pub struct ZipCloudAddressLookup {
    http: Client,
    base_url: String,
    timeout: Duration,
}

impl ZipCloudAddressLookup {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            timeout,
        }
    }

    async fn search(&self, zipcode: &str) -> Result<Value, LookupError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("zipcode", zipcode)])
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }
}

impl Default for ZipCloudAddressLookup {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }
}

#[async_trait]
impl AddressLookup for ZipCloudAddressLookup {
    #[tracing::instrument(skip(self))]
    async fn lookup(&self, zipcode: &str) -> Result<Address, LookupError> {
        tracing::debug!(base_url = %self.base_url, "Querying ZipCloud");

        let body = self.search(zipcode).await?;
        let address = parse_search_response(&body, zipcode)?;

        tracing::debug!(prefecture = %address.prefecture, city = %address.city, "Address resolved");
        Ok(address)
    }
}

/// Maps a ZipCloud search payload to an [`Address`]
///
/// The body is read as plain JSON, field by field. A field of an unexpected
/// type goes through the same rules as a missing one, so schema drift ends up
/// as an upstream or not-found error rather than a decode failure.
fn parse_search_response(body: &Value, zipcode: &str) -> Result<Address, LookupError> {
    if body.get("status").and_then(Value::as_f64) != Some(STATUS_OK) {
        return Err(LookupError::Upstream {
            service: SERVICE_NAME.to_string(),
            message: body
                .get("message")
                .and_then(text)
                .unwrap_or_else(|| "Unknown error".to_string()),
        });
    }

    // ZipCloud normally returns a single result per zipcode
    let result = body
        .get("results")
        .and_then(Value::as_array)
        .and_then(|results| results.first())
        .ok_or_else(|| LookupError::NotFound {
            zipcode: zipcode.to_string(),
        })?;
    let field = |name: &str| result.get(name).and_then(text);

    Ok(Address::new(
        field("zipcode").unwrap_or_else(|| zipcode.to_string()),
        field("address1").unwrap_or_default(),
        field("address2").unwrap_or_default(),
        field("address3").unwrap_or_default(),
    ))
}

/// Text of a JSON scalar; `null` counts as absent
fn text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
