//! Plan endpoint request types.

use serde::Deserialize;

/// Query parameters for `POST /api/plan`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanQuery {
    /// Free-text trip request. Required, but never parsed: the simulated
    /// agent replays the same script for any prompt, empty included.
    pub prompt: String,
}
