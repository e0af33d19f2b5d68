//! Activity records (`/api/activities/`)

use super::lenient::lenient;
use super::{RecordId, Resource};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single logged activity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(default, deserialize_with = "lenient")]
    pub id: RecordId,
    /// Display name of the user who logged it
    #[serde(default, alias = "user_name", deserialize_with = "lenient")]
    pub user: String,
    #[serde(default, deserialize_with = "lenient")]
    pub activity_type: String,
    /// Minutes
    #[serde(default, alias = "duration_minutes", deserialize_with = "lenient")]
    pub duration: f64,
    /// Kilometres
    #[serde(default, alias = "distance_km", deserialize_with = "lenient")]
    pub distance: f64,
    #[serde(default, alias = "calories_burned", deserialize_with = "lenient")]
    pub calories: f64,
    #[serde(default, deserialize_with = "lenient")]
    pub date: String,
}

impl Resource for Activity {
    const NAME: &'static str = "activities";

    fn label(record: &Value) -> String {
        let user = record
            .get("user")
            .or_else(|| record.get("user_name"))
            .and_then(Value::as_str)
            .unwrap_or("<unknown>");
        let kind = record
            .get("activity_type")
            .and_then(Value::as_str)
            .unwrap_or("activity");
        format!("{} - {}", user, kind)
    }
}
