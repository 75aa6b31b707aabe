//! Gemini recommendation client.
//!
//! Blocking reqwest client (no Tokio runtime required). Sends the user's
//! free-text query with a constrained output schema, maps grounding
//! citations into attribution sources, and surfaces failures as typed
//! errors. The caller decides between an error banner and the canned
//! fallback content in [`fixture`].

pub mod client;
pub mod fixture;

pub use client::{is_sentinel, ClientError, RecommendationClient};
