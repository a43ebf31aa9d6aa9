//! Core domain types for the Mapty workout journal.
//!
//! This module defines the fundamental types used throughout the system:
//! - Workout kinds (the closed set of variants)
//! - Coordinates and identifiers
//! - The workout entity with its kind-specific detail

use crate::description::describe_local;
use crate::metrics::{self, Rate, RateUnit};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// Kind and Location Types
// ============================================================================

/// Kind of workout (the persisted discriminator)
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutKind {
    Running,
    Cycling,
}

impl WorkoutKind {
    /// Lowercase tag as stored in the text store
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "running",
            WorkoutKind::Cycling => "cycling",
        }
    }

    /// Capitalized name used in descriptions
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Cycling => "Cycling",
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `(latitude, longitude)` pair, persisted as a two-element array
///
/// Non-finite components serialize as `null` and read back as NaN.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[Option<f64>; 2]", into = "[f64; 2]")]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Finite and within the WGS84 latitude/longitude ranges
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

impl From<[Option<f64>; 2]> for Coordinates {
    fn from([lat, lng]: [Option<f64>; 2]) -> Self {
        Self {
            lat: lat.unwrap_or(f64::NAN),
            lng: lng.unwrap_or(f64::NAN),
        }
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(coords: Coordinates) -> Self {
        [coords.lat, coords.lng]
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.lat, self.lng)
    }
}

/// Opaque workout identifier
///
/// New workouts get a random UUID. Persisted identifiers are accepted in
/// whatever string form they were written with.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutId(String);

impl WorkoutId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for WorkoutId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for WorkoutId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Workout Entity
// ============================================================================

/// Kind-specific fields of a workout
#[derive(Clone, Debug, PartialEq)]
pub enum WorkoutDetail {
    Running {
        cadence_spm: f64,
        pace_min_per_km: f64,
    },
    Cycling {
        elevation_gain_m: f64,
        speed_km_per_h: f64,
    },
}

impl WorkoutDetail {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            WorkoutDetail::Running { .. } => WorkoutKind::Running,
            WorkoutDetail::Cycling { .. } => WorkoutKind::Cycling,
        }
    }
}

/// A recorded workout
///
/// All fields are fixed at construction. The derived rate and the
/// description are computed once and never refreshed.
#[derive(Clone, Debug, PartialEq)]
pub struct Workout {
    id: WorkoutId,
    created_at: DateTime<Utc>,
    coords: Coordinates,
    distance_km: f64,
    duration_min: f64,
    description: String,
    detail: WorkoutDetail,
}

impl Workout {
    /// Create a running workout timestamped now
    pub fn running(
        coords: Coordinates,
        distance_km: f64,
        duration_min: f64,
        cadence_spm: f64,
    ) -> Self {
        Self::running_at(coords, distance_km, duration_min, cadence_spm, Utc::now())
    }

    /// Create a running workout with an explicit creation time
    pub fn running_at(
        coords: Coordinates,
        distance_km: f64,
        duration_min: f64,
        cadence_spm: f64,
        created_at: DateTime<Utc>,
    ) -> Self {
        let detail = WorkoutDetail::Running {
            cadence_spm,
            pace_min_per_km: metrics::running_pace(distance_km, duration_min),
        };
        Self::build(coords, distance_km, duration_min, created_at, detail)
    }

    /// Create a cycling workout timestamped now
    pub fn cycling(
        coords: Coordinates,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    ) -> Self {
        Self::cycling_at(coords, distance_km, duration_min, elevation_gain_m, Utc::now())
    }

    /// Create a cycling workout with an explicit creation time
    pub fn cycling_at(
        coords: Coordinates,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
        created_at: DateTime<Utc>,
    ) -> Self {
        let detail = WorkoutDetail::Cycling {
            elevation_gain_m,
            speed_km_per_h: metrics::cycling_speed(distance_km, duration_min),
        };
        Self::build(coords, distance_km, duration_min, created_at, detail)
    }

    fn build(
        coords: Coordinates,
        distance_km: f64,
        duration_min: f64,
        created_at: DateTime<Utc>,
        detail: WorkoutDetail,
    ) -> Self {
        let description = describe_local(detail.kind(), &created_at);
        Self {
            id: WorkoutId::generate(),
            created_at,
            coords,
            distance_km,
            duration_min,
            description,
            detail,
        }
    }

    /// Reassemble a workout from persisted parts without recomputing anything
    pub(crate) fn from_parts(
        id: WorkoutId,
        created_at: DateTime<Utc>,
        coords: Coordinates,
        distance_km: f64,
        duration_min: f64,
        description: String,
        detail: WorkoutDetail,
    ) -> Self {
        Self {
            id,
            created_at,
            coords,
            distance_km,
            duration_min,
            description,
            detail,
        }
    }

    pub fn id(&self) -> &WorkoutId {
        &self.id
    }

    pub fn kind(&self) -> WorkoutKind {
        self.detail.kind()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn coords(&self) -> Coordinates {
        self.coords
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn duration_min(&self) -> f64 {
        self.duration_min
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn detail(&self) -> &WorkoutDetail {
        &self.detail
    }

    /// Minutes per kilometer (running only)
    pub fn pace_min_per_km(&self) -> Option<f64> {
        match self.detail {
            WorkoutDetail::Running { pace_min_per_km, .. } => Some(pace_min_per_km),
            WorkoutDetail::Cycling { .. } => None,
        }
    }

    /// Kilometers per hour (cycling only)
    pub fn speed_km_per_h(&self) -> Option<f64> {
        match self.detail {
            WorkoutDetail::Cycling { speed_km_per_h, .. } => Some(speed_km_per_h),
            WorkoutDetail::Running { .. } => None,
        }
    }

    pub fn cadence_spm(&self) -> Option<f64> {
        match self.detail {
            WorkoutDetail::Running { cadence_spm, .. } => Some(cadence_spm),
            WorkoutDetail::Cycling { .. } => None,
        }
    }

    pub fn elevation_gain_m(&self) -> Option<f64> {
        match self.detail {
            WorkoutDetail::Cycling { elevation_gain_m, .. } => Some(elevation_gain_m),
            WorkoutDetail::Running { .. } => None,
        }
    }

    /// The kind's headline metric with its unit
    pub fn rate(&self) -> Rate {
        match self.detail {
            WorkoutDetail::Running { pace_min_per_km, .. } => {
                Rate::new(pace_min_per_km, RateUnit::MinPerKm)
            }
            WorkoutDetail::Cycling { speed_km_per_h, .. } => {
                Rate::new(speed_km_per_h, RateUnit::KmPerH)
            }
        }
    }
}
