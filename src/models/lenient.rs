//! Null-tolerant field decoding
//!
//! Servers send `null` (or the wrong JSON type) for attributes they have no
//! value for. Such a field decodes to its `Default` instead of failing the
//! whole record.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `deserialize_with` helper: `null` or a mistyped value becomes `T::default()`
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "lenient")]
        name: String,
        #[serde(default, deserialize_with = "lenient")]
        distance: f64,
        #[serde(default, deserialize_with = "lenient")]
        team: Option<String>,
    }

    #[test]
    fn test_null_and_mistyped_fields_default() {
        let decoded: Sample = serde_json::from_value(json!({
            "name": null,
            "distance": "far",
            "team": 7
        }))
        .unwrap();

        assert_eq!(decoded.name, "");
        assert_eq!(decoded.distance, 0.0);
        assert!(decoded.team.is_none());
    }

    #[test]
    fn test_well_typed_fields_pass_through() {
        let decoded: Sample =
            serde_json::from_value(json!({"name": "Alpha", "distance": 2.5, "team": "DC"}))
                .unwrap();

        assert_eq!(decoded.name, "Alpha");
        assert_eq!(decoded.distance, 2.5);
        assert_eq!(decoded.team.as_deref(), Some("DC"));
    }
}
