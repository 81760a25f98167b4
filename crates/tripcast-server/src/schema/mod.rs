//! API schema types for request/response definitions.
//!
//! Each sub-module defines the request and response types for one API
//! domain. Stream event payloads live in `tripcast-core`; only the
//! non-streamed surfaces are defined here.

pub mod health;
pub mod plan;
