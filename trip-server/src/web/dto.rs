//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::TransportationMode;

/// Request to estimate a trip between two places.
#[derive(Debug, Clone, Deserialize)]
pub struct TourRequest {
    /// Starting place (address or place name)
    pub place_a: String,

    /// Destination place (address or place name)
    pub place_b: String,

    /// How the traveller will get there
    pub transportation_method: TransportationMode,
}

impl TourRequest {
    /// Check the request for values the provider cannot route.
    ///
    /// Returns a message suitable for a 400 response.
    pub fn validate(&self) -> Result<(), String> {
        if self.place_a.trim().is_empty() {
            return Err("place_a must not be empty".to_string());
        }
        if self.place_b.trim().is_empty() {
            return Err("place_b must not be empty".to_string());
        }
        Ok(())
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable description of the failure
    pub detail: String,
}
