//! HTTP/JSON API server simulating an AI travel-planning agent.
//!
//! A single plan endpoint streams newline-delimited JSON events -- status
//! updates, map-camera control instructions, and incrementally revealed
//! itinerary points -- paced by scripted delays. This crate contains the
//! server framework, API schema types, error handling, route definitions,
//! and the stream emitter.

pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod state;
pub mod stream;
