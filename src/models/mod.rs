//! Record Schemas
//!
//! One canonical schema per resource served by the OctoFit API:
//! - Users
//! - Teams
//! - Activities
//! - Workouts
//! - Leaderboard entries
//!
//! Every schema is lenient: attributes that are absent, null or mistyped
//! take their defaults, and fields the backend serializer names differently
//! are accepted through `#[serde(alias)]`.

mod activity;
mod leaderboard;
mod lenient;
mod team;
mod user;
mod workout;

pub use activity::Activity;
pub use leaderboard::LeaderboardEntry;
pub use team::Team;
pub use user::User;
pub use workout::Workout;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// A collection resource exposed by the API
pub trait Resource: DeserializeOwned + Default + Send + Sync + 'static {
    /// Path segment of the collection endpoint (`/api/{NAME}/`)
    const NAME: &'static str;

    /// Fields that are logically sequences of string identifiers but may
    /// arrive as JSON-encoded text
    const SEQUENCE_FIELDS: &'static [&'static str] = &[];

    /// Identifying name of a raw record, used in diagnostics
    fn label(record: &Value) -> String {
        record
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_string)
            .or_else(|| record.get("id").map(|id| id.to_string()))
            .unwrap_or_else(|| "<unnamed>".to_string())
    }
}

/// Record identifier
///
/// The backend stringifies primary keys, fixtures and older payloads use integers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl Default for RecordId {
    fn default() -> Self {
        RecordId::Text(String::new())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(id) => write!(f, "{}", id),
            RecordId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        RecordId::Int(id)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        RecordId::Text(id.to_string())
    }
}

/// The five resources shown by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Users,
    Teams,
    Activities,
    Workouts,
    Leaderboard,
}

impl ResourceKind {
    /// All resources, in navigation order
    pub const ALL: [ResourceKind; 5] = [
        ResourceKind::Users,
        ResourceKind::Teams,
        ResourceKind::Activities,
        ResourceKind::Leaderboard,
        ResourceKind::Workouts,
    ];

    /// Endpoint path segment
    pub fn name(&self) -> &'static str {
        match self {
            ResourceKind::Users => User::NAME,
            ResourceKind::Teams => Team::NAME,
            ResourceKind::Activities => Activity::NAME,
            ResourceKind::Workouts => Workout::NAME,
            ResourceKind::Leaderboard => LeaderboardEntry::NAME,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim().trim_matches('/')))
            .ok_or_else(|| format!("Unknown resource: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_id_accepts_int_and_text() {
        let int: RecordId = serde_json::from_value(json!(7)).unwrap();
        let text: RecordId = serde_json::from_value(json!("65a1f0")).unwrap();

        assert_eq!(int, RecordId::Int(7));
        assert_eq!(text, RecordId::Text("65a1f0".to_string()));
        assert_eq!(int.to_string(), "7");
        assert_eq!(text.to_string(), "65a1f0");
    }

    #[test]
    fn test_resource_kind_parse() {
        assert_eq!("teams".parse::<ResourceKind>(), Ok(ResourceKind::Teams));
        assert_eq!("/Leaderboard/".parse::<ResourceKind>(), Ok(ResourceKind::Leaderboard));
        assert!("badges".parse::<ResourceKind>().is_err());
    }

    #[test]
    fn test_default_label_falls_back_to_id() {
        assert_eq!(User::label(&json!({"name": "Tony Stark"})), "Tony Stark");
        assert_eq!(User::label(&json!({"id": 3})), "3");
        assert_eq!(User::label(&json!(42)), "<unnamed>");
    }
}
