#![forbid(unsafe_code)]

//! Core domain model and persistence for the Mapty workout journal.
//!
//! This crate provides:
//! - Domain types (running and cycling workouts, coordinates, ids)
//! - Derived metrics and description labels
//! - Input validation
//! - The in-memory workout store and its text encoding
//! - Key-value text persistence and the journal that ties it together

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod metrics;
pub mod description;
pub mod input;
pub mod store;
pub mod codec;
pub mod text_store;
pub mod journal;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use metrics::{Rate, RateUnit};
pub use input::WorkoutInput;
pub use store::WorkoutStore;
pub use text_store::{FileTextStore, MemoryTextStore, TextStore};
pub use journal::Journal;
