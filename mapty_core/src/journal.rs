//! The workout journal: one owned context tying the store to persistence.
//!
//! A journal is opened once at startup (load the persisted collection),
//! mutated as workouts are recorded (every change is flushed immediately),
//! and torn down by [`Journal::reset`].

use crate::config::DEFAULT_STORAGE_KEY;
use crate::text_store::TextStore;
use crate::{codec, Coordinates, Result, Workout, WorkoutId, WorkoutInput, WorkoutStore};

pub struct Journal<S: TextStore> {
    text_store: S,
    key: String,
    workouts: WorkoutStore,
}

impl<S: TextStore> Journal<S> {
    /// Open the journal stored under the default key
    pub fn open(text_store: S) -> Result<Self> {
        Self::open_with_key(text_store, DEFAULT_STORAGE_KEY)
    }

    /// Open the journal stored under `key`
    ///
    /// A blob that cannot be read or decoded is treated as an empty journal.
    pub fn open_with_key(text_store: S, key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let text = match text_store.get(&key) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Unable to read workouts under {:?}: {}. Starting empty.", key, e);
                None
            }
        };

        let workouts = WorkoutStore::from(codec::decode(text.as_deref()));
        tracing::info!("Loaded {} workouts", workouts.len());

        Ok(Self {
            text_store,
            key,
            workouts,
        })
    }

    /// Validate raw input, build the workout, append it and flush
    pub fn record(&mut self, input: WorkoutInput, coords: Coordinates) -> Result<&Workout> {
        let workout = input.into_workout(coords)?;
        self.push(workout)
    }

    /// Record an already-validated running workout
    pub fn record_running(
        &mut self,
        coords: Coordinates,
        distance_km: f64,
        duration_min: f64,
        cadence_spm: f64,
    ) -> Result<&Workout> {
        self.push(Workout::running(coords, distance_km, duration_min, cadence_spm))
    }

    /// Record an already-validated cycling workout
    pub fn record_cycling(
        &mut self,
        coords: Coordinates,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    ) -> Result<&Workout> {
        self.push(Workout::cycling(coords, distance_km, duration_min, elevation_gain_m))
    }

    /// Persist the collection with `workout` appended, then append it.
    /// Nothing is appended when the snapshot can't be written.
    fn push(&mut self, workout: Workout) -> Result<&Workout> {
        let text = codec::encode(self.workouts.iter().chain(std::iter::once(&workout)))?;
        self.text_store.set(&self.key, &text)?;

        tracing::info!("Recorded {} ({})", workout.description(), workout.id());
        Ok(self.workouts.append(workout))
    }

    pub fn find(&self, id: &WorkoutId) -> Option<&Workout> {
        self.workouts.find_by_id(id)
    }

    /// Coordinates to re-center the map on, if the workout exists
    pub fn locate(&self, id: &WorkoutId) -> Option<Coordinates> {
        self.find(id).map(Workout::coords)
    }

    /// All workouts in creation order
    pub fn workouts(&self) -> &[Workout] {
        self.workouts.as_slice()
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    /// Remove the persisted collection and empty the journal
    pub fn reset(&mut self) -> Result<()> {
        self.text_store.remove(&self.key)?;
        let dropped = self.workouts.len();
        self.workouts.clear();
        tracing::info!("Reset journal, removed {} workouts", dropped);
        Ok(())
    }

    pub fn text_store(&self) -> &S {
        &self.text_store
    }
}
