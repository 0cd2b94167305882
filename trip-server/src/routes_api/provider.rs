//! Abstraction over where raw route responses come from.

use std::future::Future;

use crate::domain::TransportationMode;

use super::error::ProviderError;

/// A source of raw `computeRoutes` response bodies.
///
/// Implementations return the body text untouched; parsing is left to
/// [`RouteParser`](super::RouteParser) so that every source is validated
/// the same way.
pub trait RouteProvider: Send + Sync {
    /// Fetch routes between two addresses for the given mode.
    fn compute_routes(
        &self,
        origin: &str,
        destination: &str,
        mode: TransportationMode,
    ) -> impl Future<Output = Result<String, ProviderError>> + Send;
}
