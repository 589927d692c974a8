//! Tracker transport layer.
//!
//! The [`Tracker`] trait is the seam between the report core and the
//! tracker service: three read-only operations, each a single bounded
//! network call. [`JiraClient`] is the production implementation; tests
//! script the trait directly.

pub mod client;
pub mod types;

pub use client::JiraClient;
pub use types::{IssuePage, IssueRef, SprintPage, UserMatch};

use crate::error::TransportError;
use crate::models::{Sprint, SprintState};

/// Read-only operations the report core needs from the tracker.
#[allow(async_fn_in_trait)]
pub trait Tracker {
    /// Lists sprints on a board, filtered by state.
    async fn sprints_in_state(
        &self,
        board_id: u64,
        state: SprintState,
    ) -> Result<Vec<Sprint>, TransportError>;

    /// Searches identities by free-text query, capped at `max_results`.
    async fn search_users(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<UserMatch>, TransportError>;

    /// Searches issues by a declarative filter, capped at `max_results`,
    /// fetching only the issue key.
    async fn search_issue_keys(
        &self,
        jql: &str,
        max_results: u32,
    ) -> Result<Vec<IssueRef>, TransportError>;
}
