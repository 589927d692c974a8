//! Data models for the sprint report.
//!
//! This module contains the core data structures used throughout the
//! application for representing sprints, identities, and reports.

use crate::error::EngineerError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a sprint on the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SprintState {
    /// The sprint is currently running.
    Active,
    /// The sprint has been completed.
    Closed,
    /// The sprint has not started yet.
    Future,
}

impl SprintState {
    /// Query-parameter representation used by the tracker API.
    pub fn as_str(&self) -> &'static str {
        match self {
            SprintState::Active => "active",
            SprintState::Closed => "closed",
            SprintState::Future => "future",
        }
    }
}

impl fmt::Display for SprintState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A sprint on the configured board. Resolved once per run, read-only
/// afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sprint {
    /// The tracker's numeric sprint id, usable in filter queries.
    pub id: u64,
    /// Human-readable sprint name.
    pub name: String,
    /// Lifecycle state as reported by the tracker.
    pub state: SprintState,
}

/// A configured engineer identifier resolved to a canonical account.
///
/// `account_id` is the only stable handle usable in queries; display names
/// and emails are ambiguous or not query-safe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedIdentity {
    /// The raw configured identifier (email or display name).
    pub input: String,
    /// The tracker's stable account id.
    pub account_id: String,
    /// The account's display name.
    pub display_name: String,
}

/// A single matching issue, reduced to its key and browse URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueSummary {
    /// Issue key, e.g. `PROJ-42`.
    pub key: String,
    /// Browse URL derived from the key.
    pub url: String,
}

impl IssueSummary {
    /// Derives the summary for `key` under `base_url`.
    pub fn new(base_url: &str, key: &str) -> Self {
        Self {
            key: key.to_string(),
            url: format!("{}/browse/{}", base_url, key),
        }
    }
}

/// Per-engineer result. Exactly one is produced per configured engineer,
/// in configured order; `issues` and `error` are mutually exclusive.
#[derive(Debug, Clone, Serialize)]
pub struct EngineerReport {
    /// The raw configured identifier.
    pub identity: String,
    /// Resolved display name, or the raw identifier if resolution failed.
    pub display_name: String,
    /// Matching issues, in the order the tracker returned them.
    pub issues: Vec<IssueSummary>,
    /// Failure description when this engineer could not be evaluated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<EngineerError>,
}

impl EngineerReport {
    /// Successful evaluation; `issues` may be empty.
    pub fn resolved(identity: ResolvedIdentity, issues: Vec<IssueSummary>) -> Self {
        Self {
            identity: identity.input,
            display_name: identity.display_name,
            issues,
            error: None,
        }
    }

    /// Failed evaluation. `display_name` is the resolved name when the
    /// failure happened after resolution, otherwise the raw identifier.
    pub fn failed(identity: &str, display_name: &str, error: EngineerError) -> Self {
        Self {
            identity: identity.to_string(),
            display_name: display_name.to_string(),
            issues: Vec::new(),
            error: Some(error),
        }
    }
}

/// The final output of a run. Constructed once, rendered, discarded.
#[derive(Debug, Clone, Serialize)]
pub struct SprintReport {
    /// The active sprint the report was built against.
    pub sprint: Sprint,
    /// One entry per configured engineer, in configured order.
    pub engineer_reports: Vec<EngineerReport>,
}
