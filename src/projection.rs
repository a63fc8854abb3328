//! Whitelisted projection of a venue-events envelope.

use serde::Serialize;

use crate::envelope::{ResponseEnvelope, VenueEvent};

/// Reduced view of a venue-events response delivered to the host.
///
/// A key is serialized only when the corresponding path was present in
/// the source envelope; the projection never introduces data the remote
/// did not send.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectedResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_items: Option<Vec<VenueEvent>>,
}

/// Build the projection from a decoded envelope.
///
/// The items are already reduced to the whitelisted field subset by
/// [`VenueEvent`] deserialization; this only lifts the three
/// `response.events` paths into their `result_*` slots.
pub fn pick_result(envelope: &ResponseEnvelope) -> ProjectedResult {
    let events = match envelope.response.as_ref().and_then(|r| r.events.as_ref()) {
        Some(events) => events,
        None => return ProjectedResult::default(),
    };

    ProjectedResult {
        result_count: events.count,
        result_summary: events.summary.clone(),
        result_items: events.items.clone(),
    }
}
