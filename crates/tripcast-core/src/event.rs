//! Stream event types for the NDJSON wire protocol.
//!
//! [`StreamEvent`] is the tagged union emitted by the plan endpoint, one JSON
//! object per line. The `type` tag and field sets are a fixed contract with
//! map frontends; field order below is the serialization order.

use serde::{Deserialize, Serialize};

use crate::itinerary::Location;

/// Camera parameters for a `control` event payload.
///
/// `zoom` is an integer zoom level (web-map tile zoom), not a float.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraTarget {
    pub lat: f64,
    pub lng: f64,
    pub zoom: u32,
}

/// One unit of streamed output, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamEvent {
    /// Free-text progress message.
    Status { content: String },

    /// Map-camera instruction, e.g. `fly_to` with a [`CameraTarget`].
    Control { action: String, data: CameraTarget },

    /// One newly revealed location. Never a batch: each `data` event carries
    /// exactly one point, with the owning day's index and summary repeated.
    Data {
        day: u32,
        location: Location,
        summary: String,
    },
}
