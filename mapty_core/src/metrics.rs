//! Derived performance metrics.
//!
//! Both calculators are pure. Inputs are expected to be positive and finite;
//! when they are not, the result is whatever IEEE arithmetic yields (NaN or
//! infinity) rather than an error.

use std::fmt;

/// Running pace in minutes per kilometer
pub fn running_pace(distance_km: f64, duration_min: f64) -> f64 {
    duration_min / distance_km
}

/// Cycling speed in kilometers per hour
pub fn cycling_speed(distance_km: f64, duration_min: f64) -> f64 {
    distance_km / (duration_min / 60.0)
}

/// Unit of a workout's headline metric
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RateUnit {
    MinPerKm,
    KmPerH,
}

impl RateUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            RateUnit::MinPerKm => "min/km",
            RateUnit::KmPerH => "km/h",
        }
    }
}

/// A metric value together with its unit
///
/// The value keeps full precision; `Display` rounds to one decimal place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rate {
    pub value: f64,
    pub unit: RateUnit,
}

impl Rate {
    pub fn new(value: f64, unit: RateUnit) -> Self {
        Self { value, unit }
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} {}", self.value, self.unit.symbol())
    }
}
