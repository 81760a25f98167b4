//! HTTP handler modules for the tripcast API.
//!
//! Handlers are thin: they parse the request, then either answer directly
//! (health) or hand the shared script to the stream emitter (plan). No
//! business logic lives here.

pub mod health;
pub mod plan;
