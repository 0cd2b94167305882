//! Tour itinerary building.
//!
//! Ties a [`RouteProvider`] to the [`RouteParser`]: one provider call per
//! itinerary, parsed independently of every other request.

use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::{Route, TransportationMode};
use crate::routes_api::{ParseError, ProviderError, RouteParser, RouteProvider};

/// A travel estimate between two places.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TourItinerary {
    /// Starting place as given by the caller.
    pub place_a: String,

    /// Destination place as given by the caller.
    pub place_b: String,

    /// The normalized route between them.
    pub route: Route,
}

/// Error while building an itinerary.
#[derive(Debug, thiserror::Error)]
pub enum ItineraryError {
    /// The provider could not be reached or refused the request
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// The provider's response could not be turned into a route
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Builds itineraries from a route provider.
#[derive(Debug, Clone)]
pub struct ItineraryBuilder<P> {
    provider: P,
    parser: RouteParser,
}

impl<P: RouteProvider> ItineraryBuilder<P> {
    /// Create a builder backed by the given provider.
    pub const fn new(provider: P) -> Self {
        Self {
            provider,
            parser: RouteParser::new(),
        }
    }

    /// The underlying provider.
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Fetch and parse a route from `place_a` to `place_b`.
    pub async fn build(
        &self,
        place_a: &str,
        place_b: &str,
        mode: TransportationMode,
    ) -> Result<TourItinerary, ItineraryError> {
        let raw = self
            .provider
            .compute_routes(place_a, place_b, mode)
            .await
            .inspect_err(|e| warn!(error = %e, "route provider call failed"))?;

        let route = self
            .parser
            .parse(&raw, mode)
            .inspect_err(|e| warn!(error = %e, "unusable route response"))?;

        debug!(
            distance = route.distance,
            duration = route.duration,
            %mode,
            "built itinerary"
        );

        Ok(TourItinerary {
            place_a: place_a.to_string(),
            place_b: place_b.to_string(),
            route,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use rust_decimal::Decimal;

    use super::*;
    use crate::domain::Coordinates;
    use crate::routes_api::{StaticRouteProvider, ValidationError, fixtures::VALID_RESPONSE};

    /// Records the arguments of every call.
    #[derive(Default)]
    struct RecordingProvider {
        calls: Mutex<Vec<(String, String, TransportationMode)>>,
    }

    impl RouteProvider for RecordingProvider {
        async fn compute_routes(
            &self,
            origin: &str,
            destination: &str,
            mode: TransportationMode,
        ) -> Result<String, ProviderError> {
            self.calls
                .lock()
                .unwrap()
                .push((origin.to_string(), destination.to_string(), mode));
            Ok(VALID_RESPONSE.to_string())
        }
    }

    /// Always fails like a rate-limited provider.
    struct RateLimitedProvider;

    impl RouteProvider for RateLimitedProvider {
        async fn compute_routes(
            &self,
            _origin: &str,
            _destination: &str,
            _mode: TransportationMode,
        ) -> Result<String, ProviderError> {
            Err(ProviderError::RateLimited)
        }
    }

    #[tokio::test]
    async fn builds_itinerary() {
        let builder = ItineraryBuilder::new(StaticRouteProvider::new(VALID_RESPONSE));
        let itinerary = builder
            .build("New York", "Los Angeles", TransportationMode::Car)
            .await
            .unwrap();

        assert_eq!(itinerary.place_a, "New York");
        assert_eq!(itinerary.place_b, "Los Angeles");
        assert_eq!(itinerary.route.origin, Coordinates::new(40.7128, -74.0060));
        assert_eq!(itinerary.route.duration, 216.0);
        assert_eq!(itinerary.route.transportation.fare, Decimal::new(5099, 2));
    }

    #[tokio::test]
    async fn makes_one_call_with_request_arguments() {
        let builder = ItineraryBuilder::new(RecordingProvider::default());
        builder
            .build("Paris", "Lyon", TransportationMode::Transit)
            .await
            .unwrap();

        let calls = builder.provider().calls.lock().unwrap();
        assert_eq!(
            *calls,
            vec![("Paris".to_string(), "Lyon".to_string(), TransportationMode::Transit)]
        );
    }

    #[tokio::test]
    async fn echoes_requested_mode() {
        let builder = ItineraryBuilder::new(StaticRouteProvider::new(VALID_RESPONSE));
        for mode in TransportationMode::ALL {
            let itinerary = builder.build("A", "B", mode).await.unwrap();
            assert_eq!(itinerary.route.transportation.mode, mode);
        }
    }

    #[tokio::test]
    async fn provider_errors_propagate() {
        let builder = ItineraryBuilder::new(RateLimitedProvider);
        let err = builder
            .build("A", "B", TransportationMode::Car)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ItineraryError::Provider(ProviderError::RateLimited)
        ));
        assert_eq!(err.to_string(), "rate limited by Routes API");
    }

    #[tokio::test]
    async fn parse_errors_propagate() {
        let builder = ItineraryBuilder::new(StaticRouteProvider::new(r#"{"routes": []}"#));
        let err = builder
            .build("A", "B", TransportationMode::Car)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ItineraryError::Parse(ParseError::Validation(
                ValidationError::MissingRequiredFields
            ))
        ));
        assert_eq!(
            err.to_string(),
            "Missing required fields: origin, destination, or polyline."
        );
    }

    #[tokio::test]
    async fn malformed_body_is_json_error() {
        let builder = ItineraryBuilder::new(StaticRouteProvider::new("{invalid json}}"));
        let err = builder
            .build("A", "B", TransportationMode::Car)
            .await
            .unwrap_err();

        assert!(matches!(err, ItineraryError::Parse(ParseError::Json(_))));
    }
}
