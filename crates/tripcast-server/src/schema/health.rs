//! Health endpoint response types.

use serde::Serialize;

/// Fixed health/identity payload for `GET /`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Human-readable service banner.
    pub message: String,
}
