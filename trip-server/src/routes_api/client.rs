//! Routes API HTTP client.
//!
//! Sends `computeRoutes` requests and hands back the raw body. Failed calls
//! are reported once; there is no retry.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::{debug, warn};

use crate::domain::TransportationMode;

use super::error::ProviderError;
use super::provider::RouteProvider;
use super::types::{ComputeRoutesRequest, ErrorPayload};

/// Default base URL for the Routes API.
const DEFAULT_BASE_URL: &str = "https://routes.googleapis.com";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Response fields the parser reads. Anything else is left out of the
/// response by the provider.
pub const FIELD_MASK: &str = "routes.legs.startLocation,routes.legs.endLocation,\
routes.distanceMeters,routes.duration,routes.polyline.encodedPolyline,routes.travelAdvisory";

/// Maximum number of error-body characters kept in an error message.
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Configuration for the Routes API client.
#[derive(Debug, Clone)]
pub struct RoutesConfig {
    /// API key sent as `X-Goog-Api-Key`
    pub api_key: String,
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl RoutesConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing or a proxy).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Routes API client.
#[derive(Debug, Clone)]
pub struct RoutesClient {
    http: reqwest::Client,
    base_url: String,
}

impl RoutesClient {
    /// Create a new client with the given configuration.
    pub fn new(config: RoutesConfig) -> Result<Self, ProviderError> {
        let mut headers = HeaderMap::new();

        let api_key = HeaderValue::from_str(&config.api_key)
            .map_err(|_| ProviderError::Config("invalid API key format".to_string()))?;
        headers.insert(HeaderName::from_static("x-goog-api-key"), api_key);
        headers.insert(
            HeaderName::from_static("x-goog-fieldmask"),
            HeaderValue::from_static(FIELD_MASK),
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL of the `computeRoutes` endpoint.
    pub fn compute_routes_url(&self) -> String {
        format!("{}/directions/v2:computeRoutes", self.base_url)
    }
}

impl RouteProvider for RoutesClient {
    async fn compute_routes(
        &self,
        origin: &str,
        destination: &str,
        mode: TransportationMode,
    ) -> Result<String, ProviderError> {
        let url = self.compute_routes_url();
        let request = ComputeRoutesRequest::new(origin, destination, mode);

        debug!(%origin, %destination, %mode, "requesting routes");

        let response = self.http.post(&url).json(&request).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(ProviderError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Routes API returned an error");
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), "received routes response");

        Ok(body)
    }
}

/// Extract a readable message from an error body.
///
/// Uses the structured `error.message` (prefixed with the error status
/// when present), otherwise a truncated copy of the raw body.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorPayload>(body) {
        Ok(ErrorPayload { error }) => match error.status {
            Some(status) => format!("{status}: {}", error.message),
            None => error.message,
        },
        Err(_) => body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
    }
}
