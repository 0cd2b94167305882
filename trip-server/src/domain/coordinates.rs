//! Geographic coordinate type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in degrees.
///
/// Equality is component-wise on the raw `f64` values; no tolerance is
/// applied, so two coordinates compare equal only when the provider reported
/// exactly the same numbers.
///
/// # Examples
///
/// ```
/// use trip_server::domain::Coordinates;
///
/// let nyc = Coordinates::new(40.7128, -74.0060);
/// assert_eq!(nyc.latitude, 40.7128);
/// assert_eq!(nyc, Coordinates::new(40.7128, -74.0060));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Degrees north of the equator (negative for south).
    pub latitude: f64,
    /// Degrees east of Greenwich (negative for west).
    pub longitude: f64,
}

impl Coordinates {
    /// Create a coordinate pair.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_component_wise() {
        let a = Coordinates::new(40.7128, -74.0060);
        assert_eq!(a, Coordinates::new(40.7128, -74.0060));
        assert_ne!(a, Coordinates::new(40.7128, -74.0061));
        assert_ne!(a, Coordinates::new(40.7129, -74.0060));
    }

    #[test]
    fn display() {
        let la = Coordinates::new(34.0522, -118.2437);
        assert_eq!(la.to_string(), "(34.0522, -118.2437)");
    }

    #[test]
    fn serializes_with_named_fields() {
        let json = serde_json::to_value(Coordinates::new(1.5, -2.25)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"latitude": 1.5, "longitude": -2.25})
        );
    }
}
