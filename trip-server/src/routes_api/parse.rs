//! Conversion from Routes API responses to domain types.
//!
//! This is the strict half of the client: the DTOs in `types` accept
//! anything shaped roughly like a `computeRoutes` response, and this module
//! decides which omissions are fatal and which fall back to defaults.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::{Coordinates, Route, Transportation, TransportationMode};

use super::types::{ComputeRoutesResponse, LocationDto, MoneyDto};

/// Number of decimal places a fare is rounded to.
const FARE_DECIMAL_PLACES: u32 = 2;

/// Scale of `google.type.Money::nanos` (10^-9 units).
const NANOS_SCALE: u32 = 9;

/// Error from parsing a provider response.
///
/// The two variants separate "the provider sent something that is not JSON"
/// from "the provider sent JSON describing an unusable route".
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The body is not valid JSON for a routes response.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The body is JSON but lacks data a route needs.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// A syntactically valid response that does not describe a usable route.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Origin, destination or polyline could not be resolved.
    ///
    /// The message deliberately does not say which one.
    #[error("Missing required fields: origin, destination, or polyline.")]
    MissingRequiredFields,

    /// A field that every route carries was absent.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The duration was not of the form `"<seconds>s"`.
    #[error("invalid duration: {0:?}")]
    InvalidDuration(String),
}

/// Parses raw `computeRoutes` bodies into [`Route`] values.
///
/// Stateless; one parser can be shared freely between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteParser;

impl RouteParser {
    /// Create a parser.
    pub const fn new() -> Self {
        Self
    }

    /// Parse a raw response body, tagging the result with the requested mode.
    ///
    /// Only the first route of the response is considered.
    pub fn parse(&self, raw: &str, mode: TransportationMode) -> Result<Route, ParseError> {
        parse_route(raw, mode)
    }
}

/// Parse a raw response body into a [`Route`].
pub fn parse_route(raw: &str, mode: TransportationMode) -> Result<Route, ParseError> {
    let response: ComputeRoutesResponse = serde_json::from_str(raw)?;
    Ok(convert_response(&response, mode)?)
}

/// Convert a deserialized response into a [`Route`].
///
/// Origin, destination and polyline are checked together before anything
/// else, so a response missing several of them still produces the single
/// combined error.
pub fn convert_response(
    response: &ComputeRoutesResponse,
    mode: TransportationMode,
) -> Result<Route, ValidationError> {
    let route = response.routes.as_deref().and_then(<[_]>::first);

    let origin = route
        .and_then(|r| r.legs.as_deref()?.first())
        .and_then(|leg| leg.start_location.as_ref())
        .and_then(location_coordinates);

    let destination = route
        .and_then(|r| r.legs.as_deref()?.last())
        .and_then(|leg| leg.end_location.as_ref())
        .and_then(location_coordinates);

    let polyline = route
        .and_then(|r| r.polyline.as_ref())
        .and_then(|p| p.encoded_polyline.as_deref())
        .filter(|p| !p.is_empty());

    let (Some(route), Some(origin), Some(destination), Some(polyline)) =
        (route, origin, destination, polyline)
    else {
        return Err(ValidationError::MissingRequiredFields);
    };

    let duration = route
        .duration
        .as_deref()
        .ok_or(ValidationError::MissingField("duration"))
        .and_then(duration_minutes)?;

    let distance = route
        .distance_meters
        .ok_or(ValidationError::MissingField("distanceMeters"))?;

    let advisory = route.travel_advisory.as_ref();

    let fare = advisory
        .and_then(|a| a.transit_fare.as_ref())
        .map_or(Decimal::ZERO, fare_amount);

    let details = advisory
        .and_then(|a| a.fuel_consumption_microliters)
        .map(|microliters| microliters.0);

    Ok(Route {
        origin,
        destination,
        polyline: polyline.to_string(),
        duration,
        distance,
        transportation: Transportation::new(mode, fare, details),
    })
}

/// Convert a proto3 duration string such as `"12960s"` to minutes.
///
/// # Examples
///
/// ```
/// use trip_server::routes_api::duration_minutes;
///
/// assert_eq!(duration_minutes("12960s").unwrap(), 216.0);
/// assert!(duration_minutes("12960").is_err());
/// ```
pub fn duration_minutes(raw: &str) -> Result<f64, ValidationError> {
    let seconds = raw
        .strip_suffix('s')
        .and_then(|n| n.trim().parse::<f64>().ok())
        .filter(|n| n.is_finite() && *n >= 0.0)
        .ok_or_else(|| ValidationError::InvalidDuration(raw.to_string()))?;

    Ok(seconds / 60.0)
}

/// Combine whole units and nanos into a two-place fare.
///
/// Negative amounts are clamped to zero.
pub fn fare_amount(money: &MoneyDto) -> Decimal {
    let amount = Decimal::from(money.units.0) + Decimal::new(i64::from(money.nanos), NANOS_SCALE);

    amount
        .round_dp_with_strategy(FARE_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .max(Decimal::ZERO)
}

fn location_coordinates(location: &LocationDto) -> Option<Coordinates> {
    location
        .lat_lng
        .map(|ll| Coordinates::new(ll.latitude, ll.longitude))
}
