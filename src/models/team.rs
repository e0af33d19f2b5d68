//! Team records (`/api/teams/`)
//!
//! `members` is stored server-side in a JSON column and is sometimes
//! serialized as JSON text instead of an array. The normalizer repairs it
//! before a `Team` is ever decoded, so the typed field is always a list.

use super::lenient::lenient;
use super::{RecordId, Resource};
use serde::{Deserialize, Serialize};

/// A team and the email identifiers of its members
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Team {
    #[serde(default, deserialize_with = "lenient")]
    pub id: RecordId,
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient")]
    pub members: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub created_at: String,
    /// Server-computed size, only sent by some API versions
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub member_count: Option<u32>,
}

impl Team {
    /// Number of members, preferring the server's count when present
    pub fn member_count(&self) -> usize {
        self.member_count
            .map(|count| count as usize)
            .unwrap_or(self.members.len())
    }
}

impl Resource for Team {
    const NAME: &'static str = "teams";
    const SEQUENCE_FIELDS: &'static [&'static str] = &["members"];
}
