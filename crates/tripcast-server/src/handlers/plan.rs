//! Trip-planning handler: the streaming endpoint.

use axum::body::Body;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::Response;
use uuid::Uuid;

use crate::error::ApiError;
use crate::schema::plan::PlanQuery;
use crate::state::AppState;
use crate::stream;

/// Streams the scripted itinerary as newline-delimited JSON.
///
/// `POST /api/plan?prompt=<string>`
///
/// The prompt is required but its content is never inspected: every
/// invocation replays the same baked script from the beginning. Concurrent
/// requests each get an independent run.
pub async fn plan_trip(
    State(state): State<AppState>,
    query: Result<Query<PlanQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = query.map_err(|err| ApiError::BadRequest(err.to_string()))?;

    let request_id = Uuid::new_v4();
    tracing::info!(%request_id, prompt = %params.prompt, "starting itinerary stream");

    let events = stream::ndjson_events(state.script.clone(), state.pacing, request_id);
    Response::builder()
        .header(header::CONTENT_TYPE, "application/x-ndjson")
        .body(Body::from_stream(events))
        .map_err(|err| ApiError::Internal(format!("response build failed: {err}")))
}
