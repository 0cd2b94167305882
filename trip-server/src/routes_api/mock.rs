//! Static route provider for running without API access.
//!
//! Serves one canned `computeRoutes` body for every request, loaded from a
//! string or a JSON file.

use std::path::Path;
use std::sync::Arc;

use crate::domain::TransportationMode;

use super::error::ProviderError;
use super::provider::RouteProvider;

/// Provider that answers every request with the same body.
///
/// Useful for development and testing without Routes API credentials.
#[derive(Debug, Clone)]
pub struct StaticRouteProvider {
    body: Arc<str>,
}

impl StaticRouteProvider {
    /// Serve the given body.
    pub fn new(body: impl Into<Arc<str>>) -> Self {
        Self { body: body.into() }
    }

    /// Load the body from a JSON file.
    ///
    /// The file is only read here; its contents are checked by the parser
    /// on each request, exactly like a live response.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ProviderError> {
        let path = path.as_ref();
        let body = std::fs::read_to_string(path).map_err(|e| ProviderError::Static {
            message: format!("failed to read {}: {e}", path.display()),
        })?;

        if body.trim().is_empty() {
            return Err(ProviderError::Static {
                message: format!("{} is empty", path.display()),
            });
        }

        Ok(Self::new(body))
    }

    /// The body served for every request.
    pub fn body(&self) -> &str {
        &self.body
    }
}

impl RouteProvider for StaticRouteProvider {
    async fn compute_routes(
        &self,
        _origin: &str,
        _destination: &str,
        _mode: TransportationMode,
    ) -> Result<String, ProviderError> {
        Ok(self.body.to_string())
    }
}
