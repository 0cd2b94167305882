//! Transportation modes and per-mode estimates.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown transportation mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid transportation mode: {0:?}")]
pub struct InvalidTransportationMode(String);

/// How the traveller intends to get from origin to destination.
///
/// The mode is always chosen by the caller. A provider response never
/// changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransportationMode {
    Car,
    Walk,
    Bicycle,
    TwoWheeler,
    Transit,
}

impl TransportationMode {
    /// Every mode, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Car,
        Self::Walk,
        Self::Bicycle,
        Self::TwoWheeler,
        Self::Transit,
    ];

    /// The name used in request and response bodies (e.g. `"TWO_WHEELER"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Car => "CAR",
            Self::Walk => "WALK",
            Self::Bicycle => "BICYCLE",
            Self::TwoWheeler => "TWO_WHEELER",
            Self::Transit => "TRANSIT",
        }
    }

    /// The Routes API `travelMode` value for this mode.
    pub const fn travel_mode(self) -> &'static str {
        match self {
            Self::Car => "DRIVE",
            Self::Walk => "WALK",
            Self::Bicycle => "BICYCLE",
            Self::TwoWheeler => "TWO_WHEELER",
            Self::Transit => "TRANSIT",
        }
    }

    /// Whether the provider can report fuel consumption for this mode.
    pub const fn reports_fuel(self) -> bool {
        matches!(self, Self::Car)
    }
}

impl fmt::Display for TransportationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportationMode {
    type Err = InvalidTransportationMode;

    /// Parse a mode name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| InvalidTransportationMode(s.to_string()))
    }
}

/// The mode of a route together with its cost estimates.
///
/// `fare` and `details` follow different rules for missing data: an absent
/// fare is zero, while absent details stay `None` (serialized as `null`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transportation {
    /// The mode requested by the caller.
    pub mode: TransportationMode,

    /// Fare in whole currency units, two decimal places.
    #[serde(with = "rust_decimal::serde::float")]
    pub fare: Decimal,

    /// Mode-specific metric; fuel consumption in microliters for driving.
    pub details: Option<f64>,
}

impl Transportation {
    /// Create a transportation summary.
    pub const fn new(mode: TransportationMode, fare: Decimal, details: Option<f64>) -> Self {
        Self {
            mode,
            fare,
            details,
        }
    }
}
