// # HTTP Zone API Client
//
// `ZoneClient` implementation for JSON zone APIs with bearer-token auth.
//
// ## API Reference
//
// - List record sets: GET `/zones/:zone_id/rrsets?name=...&type=A`
// - Apply a change batch: POST `/zones/:zone_id/changes`
//
// ## Error classification
//
// The accessor's retry policy needs throttling to be distinguishable from
// every other rejection, so HTTP statuses map onto `Error` variants:
//
// - 429 → `Error::Throttled` (the only class the accessor retries)
// - 400/422 → `Error::InvalidRequest`
// - 401/403 → `Error::Authentication`
// - 404 → `Error::NotFound`
// - other non-success → `Error::Provider`
// - transport faults → `Error::Http`
//
// ## Single-shot contract
//
// No retry, backoff, or caching here: one HTTP request per method call, with
// full error propagation to the accessor.
//
// ## Security
//
// - The bearer token never appears in logs
// - The Debug implementation redacts the token

use std::time::Duration;

use async_trait::async_trait;
use recset_core::config::ProviderConfig;
use recset_core::error::{Error, Result};
use recset_core::record::{ChangeBatch, RecordSet};
use recset_core::traits::ZoneClient;
use serde::Deserialize;

/// Default HTTP timeout for API requests (30 seconds)
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Zone API client over HTTP/JSON
pub struct HttpZoneClient {
    /// Base URL of the zone API, without a trailing slash
    endpoint: String,

    /// Bearer token for the zone API
    api_token: String,

    /// HTTP client for API requests
    client: reqwest::Client,
}

// Custom Debug implementation that hides the API token
impl std::fmt::Debug for HttpZoneClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpZoneClient")
            .field("endpoint", &self.endpoint)
            .field("api_token", &"<REDACTED>")
            .finish()
    }
}

/// Response envelope for the list endpoint
#[derive(Debug, Deserialize)]
struct ListRecordSetsResponse {
    rrsets: Vec<RecordSet>,
}

/// Error body returned by the zone API
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

impl HttpZoneClient {
    /// Create a client with the default request timeout
    pub fn new(endpoint: impl Into<String>, api_token: impl Into<String>) -> Result<Self> {
        Self::with_timeout(endpoint, api_token, DEFAULT_HTTP_TIMEOUT)
    }

    /// Create a client with an explicit request timeout
    ///
    /// Fails when the endpoint or token is empty, or when the underlying
    /// HTTP client cannot be constructed.
    pub fn with_timeout(
        endpoint: impl Into<String>,
        api_token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let endpoint = endpoint.into();
        let api_token = api_token.into();

        if endpoint.is_empty() {
            return Err(Error::config("zone API endpoint cannot be empty"));
        }
        if api_token.is_empty() {
            return Err(Error::config("zone API token cannot be empty"));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::http(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_token,
            client,
        })
    }

    /// Create a client from configuration
    pub fn from_config(config: &ProviderConfig) -> Result<Self> {
        config.validate()?;
        Self::with_timeout(
            config.endpoint.as_str(),
            config.api_token.as_str(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Map a non-success response to the matching error variant
    async fn classify_failure(response: reqwest::Response) -> Error {
        let status = response.status();
        let body: ApiErrorBody = response.json().await.unwrap_or(ApiErrorBody {
            code: String::new(),
            message: String::new(),
        });

        let detail = if body.message.is_empty() {
            status.to_string()
        } else {
            body.message
        };

        match status.as_u16() {
            429 => Error::throttled(detail),
            400 | 422 => Error::invalid_request(detail),
            401 | 403 => Error::auth(detail),
            404 => Error::not_found(detail),
            _ => Error::provider(
                if body.code.is_empty() {
                    status.as_u16().to_string()
                } else {
                    body.code
                },
                detail,
            ),
        }
    }
}

#[async_trait]
impl ZoneClient for HttpZoneClient {
    async fn list_record_sets(&self, zone_id: &str, record_name: &str) -> Result<Vec<RecordSet>> {
        let url = format!("{}/zones/{}/rrsets", self.endpoint, zone_id);
        tracing::debug!(zone_id, record_name, "listing record sets");

        let response = self
            .client
            .get(&url)
            .query(&[("name", record_name), ("type", "A")])
            .bearer_auth(&self.api_token)
            .send()
            .await
            .map_err(|e| Error::http(format!("list request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(Self::classify_failure(response).await);
        }

        let body: ListRecordSetsResponse = response
            .json()
            .await
            .map_err(|e| Error::http(format!("failed to parse list response: {e}")))?;

        Ok(body.rrsets)
    }

    async fn change_record_sets(&self, zone_id: &str, change_batch: &ChangeBatch) -> Result<()> {
        let url = format!("{}/zones/{}/changes", self.endpoint, zone_id);
        tracing::debug!(
            zone_id,
            changes = change_batch.changes.len(),
            "submitting change batch"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_token)
            .json(change_batch)
            .send()
            .await
            .map_err(|e| Error::http(format!("change request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(Self::classify_failure(response).await);
        }

        Ok(())
    }
}
