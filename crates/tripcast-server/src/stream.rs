//! The itinerary stream emitter.
//!
//! [`ndjson_events`] replays a scripted event sequence as a paced stream of
//! newline-terminated JSON lines, suitable for `Body::from_stream`. Each
//! invocation is a fresh, one-shot run of the full script; if the client
//! disconnects, axum drops the body and the generator is cancelled at its
//! next suspension point, so no further writes happen.

use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use futures::Stream;
use tripcast_core::ScriptStep;
use uuid::Uuid;

/// Wall-clock scale applied to the script's relative pauses.
///
/// The script encodes pauses in milliseconds at real-time scale; `Pacing`
/// stretches or collapses them without changing their proportions.
#[derive(Debug, Clone, Copy)]
pub struct Pacing {
    scale: f64,
}

impl Pacing {
    /// Pauses run at their scripted durations.
    pub fn real_time() -> Self {
        Pacing { scale: 1.0 }
    }

    /// All pauses collapse to zero (for testing).
    pub fn instant() -> Self {
        Pacing { scale: 0.0 }
    }

    /// The wall-clock delay for a scripted pause.
    pub fn delay(&self, pause_ms: u64) -> Duration {
        Duration::from_millis((pause_ms as f64 * self.scale).round() as u64)
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self::real_time()
    }
}

/// Replays `script` as an NDJSON byte stream, sleeping each step's pause
/// before emitting its event.
///
/// A serialization fault terminates the stream after a logged error; the
/// serving process is unaffected and the client simply sees an early end of
/// body.
pub fn ndjson_events(
    script: Arc<Vec<ScriptStep>>,
    pacing: Pacing,
    request_id: Uuid,
) -> impl Stream<Item = Result<Bytes, Infallible>> {
    async_stream::stream! {
        for step in script.iter() {
            let delay = pacing.delay(step.pause_ms);
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            match serde_json::to_vec(&step.event) {
                Ok(mut line) => {
                    line.push(b'\n');
                    yield Ok(Bytes::from(line));
                }
                Err(err) => {
                    tracing::error!(
                        %request_id,
                        error = %err,
                        "stream event serialization failed, terminating stream"
                    );
                    return;
                }
            }
        }
        tracing::debug!(%request_id, "itinerary stream complete");
    }
}
