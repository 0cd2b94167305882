//! Routes API request and response DTOs.
//!
//! The response types map directly to the `computeRoutes` JSON. Every
//! field is an `Option` because the provider's proto3 JSON encoding omits
//! fields rather than sending nulls, and the field mask we send can trim
//! the response further. Deciding which omissions are errors is the
//! parser's job, not serde's.

use std::num::{ParseFloatError, ParseIntError};

use serde::{Deserialize, Serialize};

use crate::domain::TransportationMode;

/// Body of a `directions/v2:computeRoutes` request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputeRoutesRequest<'a> {
    pub origin: WaypointDto<'a>,
    pub destination: WaypointDto<'a>,
    pub travel_mode: &'static str,
    pub compute_alternative_routes: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra_computations: Vec<&'static str>,
}

impl<'a> ComputeRoutesRequest<'a> {
    /// Build a request between two free-form addresses.
    ///
    /// Fuel consumption is only requested for modes that can report it.
    pub fn new(origin: &'a str, destination: &'a str, mode: TransportationMode) -> Self {
        let extra_computations = if mode.reports_fuel() {
            vec!["FUEL_CONSUMPTION"]
        } else {
            Vec::new()
        };

        Self {
            origin: WaypointDto { address: origin },
            destination: WaypointDto { address: destination },
            travel_mode: mode.travel_mode(),
            compute_alternative_routes: false,
            extra_computations,
        }
    }
}

/// A waypoint given as an address or place name.
#[derive(Debug, Serialize)]
pub struct WaypointDto<'a> {
    pub address: &'a str,
}

/// Error body returned with non-2xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorPayload {
    pub error: ErrorDetail,
}

/// Details of a provider error.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    pub message: String,
    pub status: Option<String>,
}

/// Response from `directions/v2:computeRoutes`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputeRoutesResponse {
    /// Candidate routes; the first one is the provider's recommendation.
    pub routes: Option<Vec<RouteDto>>,
}

/// One route in the response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDto {
    /// Legs between consecutive waypoints.
    pub legs: Option<Vec<LegDto>>,

    /// Total distance in meters.
    pub distance_meters: Option<u64>,

    /// Travel time as a proto3 duration string, e.g. `"12960s"`.
    pub duration: Option<String>,

    /// Encoded route geometry.
    pub polyline: Option<PolylineDto>,

    /// Fares, fuel use and other advisory information.
    pub travel_advisory: Option<TravelAdvisoryDto>,
}

/// A route leg.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegDto {
    pub start_location: Option<LocationDto>,
    pub end_location: Option<LocationDto>,
}

/// A location wrapper, as used for leg endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDto {
    pub lat_lng: Option<LatLngDto>,
}

/// A latitude/longitude pair.
///
/// proto3 JSON drops zero values, so a point on the equator arrives
/// without `latitude`. Missing components therefore default to zero.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatLngDto {
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

/// Encoded polyline wrapper.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolylineDto {
    pub encoded_polyline: Option<String>,
}

/// Advisory information attached to a route.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelAdvisoryDto {
    /// Fare for the whole route (transit only).
    pub transit_fare: Option<MoneyDto>,

    /// Estimated fuel use (drive only, when requested).
    pub fuel_consumption_microliters: Option<Float64>,
}

/// A `google.type.Money` amount.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyDto {
    /// ISO 4217 currency code.
    pub currency_code: Option<String>,

    /// Whole units of the amount.
    #[serde(default)]
    pub units: Int64,

    /// Nano units (10^-9) of the amount.
    #[serde(default)]
    pub nanos: i32,
}

/// An int64 that may arrive as a JSON number or a decimal string.
///
/// proto3 JSON encodes int64 fields as strings, but hand-written payloads
/// and some proxies send plain numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Int64Repr")]
pub struct Int64(pub i64);

/// A number that may arrive as a JSON number or a decimal string.
///
/// Used for telemetry values that are passed through as reported, whether
/// the provider sends them as integers, fractions or int64 strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(try_from = "Float64Repr")]
pub struct Float64(pub f64);

#[derive(Deserialize)]
#[serde(untagged)]
enum Float64Repr {
    Number(f64),
    Text(String),
}

impl TryFrom<Float64Repr> for Float64 {
    type Error = ParseFloatError;

    fn try_from(repr: Float64Repr) -> Result<Self, Self::Error> {
        match repr {
            Float64Repr::Number(n) => Ok(Self(n)),
            Float64Repr::Text(s) => s.trim().parse().map(Self),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Int64Repr {
    Number(i64),
    Text(String),
}

impl TryFrom<Int64Repr> for Int64 {
    type Error = ParseIntError;

    fn try_from(repr: Int64Repr) -> Result<Self, Self::Error> {
        match repr {
            Int64Repr::Number(n) => Ok(Self(n)),
            Int64Repr::Text(s) => s.trim().parse().map(Self),
        }
    }
}
