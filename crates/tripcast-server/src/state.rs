//! Application state shared across handlers.
//!
//! The itinerary is baked in at startup and immutable, so [`AppState`] holds
//! the pre-expanded script behind an `Arc`. Every plan request replays the
//! same script independently; there is no shared mutable state and no
//! locking.

use std::sync::Arc;

use tripcast_core::{build_script, mock, ScriptStep};

use crate::stream::Pacing;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The scripted event sequence, expanded once at startup.
    pub script: Arc<Vec<ScriptStep>>,
    /// Wall-clock pacing applied when replaying the script.
    pub pacing: Pacing,
}

impl AppState {
    /// Creates state with the baked mock itinerary and real-time pacing.
    pub fn new() -> Self {
        Self::with_pacing(Pacing::default())
    }

    /// Creates state with the baked mock itinerary and custom pacing.
    pub fn with_pacing(pacing: Pacing) -> Self {
        let script = build_script(&mock::tokyo_highlights(), mock::tokyo_overview());
        AppState {
            script: Arc::new(script),
            pacing,
        }
    }

    /// Creates state with zero-delay pacing (for testing).
    pub fn instant() -> Self {
        Self::with_pacing(Pacing::instant())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
