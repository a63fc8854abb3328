//! Typed view of the `{meta, response}` envelope shared by all
//! Foursquare API responses.
//!
//! Every field is optional: the remote shape is loose, and absence is a
//! distinct case rather than a decode failure.

use serde::{Deserialize, Serialize};
use serde_json::value as json;

/// `meta.code` value reported for a successful call.
pub const SUCCESS_CODE: i64 = 200;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub meta: Option<Meta>,
    pub response: Option<VenueEventsResponse>,
}

/// Status block carried inside every envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default, deserialize_with = "code_opt::deserialize")]
    pub code: Option<i64>,
    #[serde(rename = "errorType")]
    pub error_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueEventsResponse {
    pub events: Option<VenueEvents>,
}

/// The `response.events` section of a venue-events call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueEvents {
    pub count: Option<u64>,
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "items_opt::deserialize")]
    pub items: Option<Vec<VenueEvent>>,
}

/// The whitelisted subset of an event retained for output.
///
/// Unknown wire fields are dropped on deserialization; fields absent
/// from the source serialize as explicit `null`s, so a projected item
/// always carries the full key set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueEvent {
    pub name: Option<json::Value>,
    pub id: Option<json::Value>,
    pub url: Option<json::Value>,
    pub foreign_ids: Option<json::Value>,
    pub categories: Option<json::Value>,
    pub herenow: Option<json::Value>,
    pub stats: Option<json::Value>,
    pub start_at: Option<json::Value>,
    pub end_at: Option<json::Value>,
}

impl ResponseEnvelope {
    /// Foursquare reports errors inside the envelope rather than via the
    /// HTTP status line. `None` means the call succeeded; otherwise the
    /// reason is `meta.errorType`, or `"Request error"` when the remote
    /// did not name one.
    pub fn api_error(&self) -> Option<String> {
        let meta = self.meta.as_ref();
        if meta.and_then(|m| m.code) == Some(SUCCESS_CODE) {
            return None;
        }
        Some(
            meta.and_then(|m| m.error_type.clone())
                .unwrap_or_else(|| "Request error".to_string()),
        )
    }
}

mod code_opt {
    use serde::{Deserialize, Deserializer};
    use serde_json::value as json;

    /// The wire usually carries a number here, but a numeric string is
    /// accepted too; anything else counts as absent.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<json::Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(json::Value::Number(n)) => n.as_i64(),
            Some(json::Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        })
    }
}

mod items_opt {
    use serde::de::{self, Deserialize, Deserializer};
    use serde_json::value as json;

    use super::VenueEvent;

    /// A non-array `items` value counts as absent.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<VenueEvent>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<json::Value>::deserialize(deserializer)?;
        match value {
            Some(json::Value::Array(items)) => items
                .into_iter()
                .map(serde_json::from_value)
                .collect::<Result<Vec<VenueEvent>, _>>()
                .map(Some)
                .map_err(de::Error::custom),
            _ => Ok(None),
        }
    }
}
