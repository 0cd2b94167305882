//! Google Routes API client and response parser.
//!
//! The client fetches raw `computeRoutes` bodies; the parser turns a body
//! into a validated [`Route`](crate::domain::Route).
//!
//! Key characteristics of the Routes API:
//! - Responses are proto3 JSON: zero values and empty fields are omitted,
//!   and int64 values may arrive as strings
//! - A field mask header controls which fields come back
//! - Durations are strings of seconds with an `s` suffix (`"12960s"`)

mod client;
mod error;
mod mock;
mod parse;
mod provider;
mod types;

pub use client::{FIELD_MASK, RoutesClient, RoutesConfig};
pub use error::ProviderError;
pub use mock::StaticRouteProvider;
pub use parse::{
    ParseError, RouteParser, ValidationError, convert_response, duration_minutes, fare_amount,
    parse_route,
};
pub use provider::RouteProvider;
pub use types::{
    ComputeRoutesRequest, ComputeRoutesResponse, Float64, Int64, LatLngDto, LegDto, LocationDto, MoneyDto,
    PolylineDto, RouteDto, TravelAdvisoryDto,
};

#[cfg(test)]
pub(crate) use parse::fixtures;
