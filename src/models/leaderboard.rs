//! Leaderboard entries (`/api/leaderboard/`)

use super::lenient::lenient;
use super::{RecordId, Resource};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One ranked row of the leaderboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(default, deserialize_with = "lenient")]
    pub id: RecordId,
    #[serde(default, deserialize_with = "lenient")]
    pub rank: u32,
    #[serde(default, deserialize_with = "lenient")]
    pub user_name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub user_email: String,
    #[serde(default, deserialize_with = "lenient")]
    pub team: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub total_calories: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub total_activities: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub total_distance_km: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub total_duration_minutes: Option<u64>,
}

impl LeaderboardEntry {
    /// Top three entries are highlighted by the dashboard
    pub fn is_podium(&self) -> bool {
        (1..=3).contains(&self.rank)
    }
}

impl Resource for LeaderboardEntry {
    const NAME: &'static str = "leaderboard";

    fn label(record: &Value) -> String {
        record
            .get("user_name")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| "<unranked>".to_string())
    }
}
