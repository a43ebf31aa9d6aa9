//! Validation of raw workout input.
//!
//! Entities never re-validate their fields, so callers run input through
//! [`WorkoutInput::validate`] before anything is constructed.

use crate::{Coordinates, Error, Result, Workout};

const INVALID_INPUT: &str = "Inputs have to be positive numbers";

/// Raw values captured from the workout form
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WorkoutInput {
    Running {
        distance_km: f64,
        duration_min: f64,
        cadence_spm: f64,
    },
    Cycling {
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    },
}

impl WorkoutInput {
    /// Check that every field is finite, that distance, duration and
    /// cadence are positive, and that elevation gain is not negative.
    pub fn validate(&self) -> Result<()> {
        let valid = match *self {
            WorkoutInput::Running {
                distance_km,
                duration_min,
                cadence_spm,
            } => all_positive(&[distance_km, duration_min, cadence_spm]),
            WorkoutInput::Cycling {
                distance_km,
                duration_min,
                elevation_gain_m,
            } => {
                all_positive(&[distance_km, duration_min])
                    && elevation_gain_m.is_finite()
                    && elevation_gain_m >= 0.0
            }
        };

        if valid {
            Ok(())
        } else {
            Err(Error::InvalidInput(INVALID_INPUT.into()))
        }
    }

    /// Validate the input and the location, then build the workout
    pub fn into_workout(self, coords: Coordinates) -> Result<Workout> {
        if !coords.is_valid() {
            return Err(Error::InvalidInput(format!(
                "Coordinates out of range: {}",
                coords
            )));
        }
        self.validate()?;

        let workout = match self {
            WorkoutInput::Running {
                distance_km,
                duration_min,
                cadence_spm,
            } => Workout::running(coords, distance_km, duration_min, cadence_spm),
            WorkoutInput::Cycling {
                distance_km,
                duration_min,
                elevation_gain_m,
            } => Workout::cycling(coords, distance_km, duration_min, elevation_gain_m),
        };
        Ok(workout)
    }
}

fn all_positive(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite() && *v > 0.0)
}
