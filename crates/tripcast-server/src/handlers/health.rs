//! Health/identity probe handler.

use axum::Json;

use crate::schema::health::HealthResponse;

/// Reports that the service is up.
///
/// `GET /`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "Travel AI Agent API is running".to_string(),
    })
}
