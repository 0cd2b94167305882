//! Normalized route summary.

use serde::Serialize;

use super::{Coordinates, Transportation};

/// A single route between two points, normalized from a provider response.
///
/// Every field is populated by a successful parse; there is no partially
/// built `Route`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    /// Start of the first leg.
    pub origin: Coordinates,

    /// End of the last leg.
    pub destination: Coordinates,

    /// Encoded path of the route, passed through untouched.
    pub polyline: String,

    /// Travel time in minutes.
    pub duration: f64,

    /// Total distance in meters.
    pub distance: u64,

    /// Mode and cost estimates.
    pub transportation: Transportation,
}
