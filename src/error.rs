//! Error taxonomy for a report run.
//!
//! Failures at or above sprint resolution are fatal and abort the run.
//! Failures scoped to a single engineer are carried as values inside that
//! engineer's report entry and never abort sibling engineers.

use serde::Serialize;
use thiserror::Error;

/// Malformed or missing configuration. Always fatal, reported before any
/// network activity.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ConfigError(pub String);

/// Transport-level failure talking to the tracker.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request exceeded the configured timeout.
    #[error("request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// A connection to the tracker could not be established.
    #[error("cannot connect to {url}")]
    Connect { url: String },

    /// The tracker answered with a non-success status.
    #[error("tracker returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be decoded.
    #[error("malformed tracker response: {message}")]
    Decode { message: String },

    /// Any other request failure.
    #[error("request failed: {message}")]
    Other { message: String },
}

/// Fatal conditions. Each maps to its own process exit code so callers can
/// tell a missing sprint from an unreachable tracker.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Transport failure while resolving the sprint. No per-engineer work
    /// is meaningful without a sprint, so the whole run aborts.
    #[error("tracker unavailable: {0}")]
    TrackerUnavailable(#[source] TransportError),

    #[error("no active sprint found for board {board_id}")]
    SprintNotFound { board_id: u64 },
}

impl RunError {
    /// Process exit code for this failure (success is 0).
    pub fn exit_code(&self) -> i32 {
        match self {
            RunError::Config(_) => 1,
            RunError::TrackerUnavailable(_) => 2,
            RunError::SprintNotFound { .. } => 3,
        }
    }
}

/// Per-engineer failure. Non-fatal: it degrades that engineer's entry in
/// the report and the run continues.
#[derive(Debug, Clone, Error, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum EngineerError {
    /// The identity search returned zero matches.
    #[error("not found in tracker")]
    IdentityNotFound,

    /// The identity search itself failed (transport or protocol).
    #[error("identity lookup failed: {0}")]
    IdentityLookup(String),

    /// The issue search failed (transport or protocol).
    #[error("issue search failed: {0}")]
    SearchFailed(String),
}
