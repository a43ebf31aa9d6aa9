//! Text encoding of the workout collection.
//!
//! The whole collection is stored as one JSON array. Every element carries a
//! `type` tag, and decoding dispatches on that tag to rebuild a `Running` or
//! `Cycling` workout. The record layout matches the browser build's
//! local-storage entries, so exported blobs load unchanged:
//!
//! ```json
//! [{"type":"running","id":"1704447000","date":"2024-01-05T09:30:00.000Z",
//!   "coords":[39.0,-12.0],"distance":5,"duration":24,
//!   "description":"Running on January 5","cadence":178,"pace":4.8}]
//! ```
//!
//! Decoding never fails as a whole. A missing or unparseable blob yields an
//! empty collection, and a malformed element is dropped on its own.

use crate::description::describe_local;
use crate::metrics;
use crate::{Coordinates, Result, Workout, WorkoutDetail, WorkoutId, WorkoutKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Persisted form of a workout, keyed by its `type` tag
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum WorkoutRecord {
    Running(RunningRecord),
    Cycling(CyclingRecord),
}

#[derive(Debug, Serialize, Deserialize)]
struct RunningRecord {
    id: WorkoutId,
    date: DateTime<Utc>,
    coords: Coordinates,
    #[serde(deserialize_with = "finite_or_nan")]
    distance: f64,
    #[serde(deserialize_with = "finite_or_nan")]
    duration: f64,
    #[serde(default)]
    description: Option<String>,
    #[serde(deserialize_with = "finite_or_nan")]
    cadence: f64,
    /// Absent in older snapshots and `null` when non-finite
    #[serde(default)]
    pace: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
struct CyclingRecord {
    id: WorkoutId,
    date: DateTime<Utc>,
    coords: Coordinates,
    #[serde(deserialize_with = "finite_or_nan")]
    distance: f64,
    #[serde(deserialize_with = "finite_or_nan")]
    duration: f64,
    #[serde(default)]
    description: Option<String>,
    #[serde(deserialize_with = "finite_or_nan")]
    elevation: f64,
    #[serde(default)]
    speed: Option<f64>,
}

/// JSON has no NaN or infinity, so non-finite raw fields are written as
/// `null`. They come back as NaN; a missing field still rejects the record.
fn finite_or_nan<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

impl From<&Workout> for WorkoutRecord {
    fn from(workout: &Workout) -> Self {
        let id = workout.id().clone();
        let date = workout.created_at();
        let coords = workout.coords();
        let distance = workout.distance_km();
        let duration = workout.duration_min();
        let description = Some(workout.description().to_owned());

        match *workout.detail() {
            WorkoutDetail::Running {
                cadence_spm,
                pace_min_per_km,
            } => WorkoutRecord::Running(RunningRecord {
                id,
                date,
                coords,
                distance,
                duration,
                description,
                cadence: cadence_spm,
                pace: Some(pace_min_per_km),
            }),
            WorkoutDetail::Cycling {
                elevation_gain_m,
                speed_km_per_h,
            } => WorkoutRecord::Cycling(CyclingRecord {
                id,
                date,
                coords,
                distance,
                duration,
                description,
                elevation: elevation_gain_m,
                speed: Some(speed_km_per_h),
            }),
        }
    }
}

impl From<WorkoutRecord> for Workout {
    /// Rebuild the typed workout, re-deriving anything the record lacks
    fn from(record: WorkoutRecord) -> Self {
        match record {
            WorkoutRecord::Running(r) => {
                let pace = r
                    .pace
                    .unwrap_or_else(|| metrics::running_pace(r.distance, r.duration));
                let description = r
                    .description
                    .unwrap_or_else(|| describe_local(WorkoutKind::Running, &r.date));
                Workout::from_parts(
                    r.id,
                    r.date,
                    r.coords,
                    r.distance,
                    r.duration,
                    description,
                    WorkoutDetail::Running {
                        cadence_spm: r.cadence,
                        pace_min_per_km: pace,
                    },
                )
            }
            WorkoutRecord::Cycling(c) => {
                let speed = c
                    .speed
                    .unwrap_or_else(|| metrics::cycling_speed(c.distance, c.duration));
                let description = c
                    .description
                    .unwrap_or_else(|| describe_local(WorkoutKind::Cycling, &c.date));
                Workout::from_parts(
                    c.id,
                    c.date,
                    c.coords,
                    c.distance,
                    c.duration,
                    description,
                    WorkoutDetail::Cycling {
                        elevation_gain_m: c.elevation,
                        speed_km_per_h: speed,
                    },
                )
            }
        }
    }
}

/// Serialize the whole collection, in order, to a single JSON text
pub fn encode<'a, I>(workouts: I) -> Result<String>
where
    I: IntoIterator<Item = &'a Workout>,
{
    let records: Vec<WorkoutRecord> = workouts.into_iter().map(WorkoutRecord::from).collect();
    let text = serde_json::to_string(&records)?;
    tracing::debug!("Encoded {} workouts ({} bytes)", records.len(), text.len());
    Ok(text)
}

/// Rebuild the collection from persisted text
///
/// `None` means nothing was ever persisted. Text that is not a JSON array is
/// treated the same way. Elements with an unknown `type` or missing fields
/// are skipped; the rest keep their order.
pub fn decode(text: Option<&str>) -> Vec<Workout> {
    let Some(text) = text else {
        tracing::debug!("No persisted workouts found");
        return Vec::new();
    };

    let elements: Vec<serde_json::Value> = match serde_json::from_str(text) {
        Ok(elements) => elements,
        Err(e) => {
            tracing::warn!("Failed to parse persisted workouts: {}. Starting empty.", e);
            return Vec::new();
        }
    };

    let total = elements.len();
    let mut workouts = Vec::with_capacity(total);

    for (index, element) in elements.into_iter().enumerate() {
        match serde_json::from_value::<WorkoutRecord>(element) {
            Ok(record) => workouts.push(Workout::from(record)),
            Err(e) => {
                tracing::warn!("Skipping workout record {}: {}", index, e);
            }
        }
    }

    tracing::debug!("Decoded {} of {} workout records", workouts.len(), total);
    workouts
}
