//! User records (`/api/users/`)

use super::lenient::lenient;
use super::{RecordId, Resource};
use serde::{Deserialize, Serialize};

/// A registered OctoFit user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "lenient")]
    pub id: RecordId,
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient")]
    pub team: Option<String>,
    /// Training focus (e.g. "Cardio")
    #[serde(default, deserialize_with = "lenient")]
    pub role: Option<String>,
}

impl Resource for User {
    const NAME: &'static str = "users";
}
