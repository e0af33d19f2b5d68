//! Workout records (`/api/workouts/`)

use super::lenient::lenient;
use super::{RecordId, Resource};
use serde::{Deserialize, Serialize};

/// A suggested workout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    #[serde(default, deserialize_with = "lenient")]
    pub id: RecordId,
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient")]
    pub category: String,
    /// Minutes
    #[serde(default, alias = "duration_minutes", deserialize_with = "lenient")]
    pub duration: f64,
    /// Beginner, Intermediate or Advanced
    #[serde(default, deserialize_with = "lenient")]
    pub difficulty: String,
    /// Absent when the server only reports an hourly rate
    #[serde(default, deserialize_with = "lenient")]
    pub calories_burned: Option<f64>,
}

impl Resource for Workout {
    const NAME: &'static str = "workouts";
}
