//! Report aggregation.
//!
//! Orchestrates the whole run: locate the active sprint once, then
//! evaluate every configured engineer and assemble the final report.
//! Engineer evaluations are independent and run through a bounded
//! concurrent stream that yields results in configured order; a failure in
//! one evaluation degrades that engineer's entry and never aborts the
//! others.

use crate::config::Config;
use crate::error::RunError;
use crate::jira::Tracker;
use crate::models::{EngineerReport, SprintReport};
use crate::{identity, jql, search, sprint};
use chrono::{Local, NaiveDate};
use futures::stream::{self, StreamExt};
use tracing::{debug, warn};

/// Runs the full report against `tracker`.
///
/// Sprint resolution failures are fatal. The recency cutoff is computed
/// once here so every engineer is evaluated against the same date. On
/// interrupt (ctrl-c) the engineers completed so far are returned as a
/// consistent, truncated report.
pub async fn run<T: Tracker>(tracker: &T, config: &Config) -> Result<SprintReport, RunError> {
    let found = sprint::locate(tracker, config.board.board_id).await?;

    let sprint_id = found.id;
    let today = Local::now().date_naive();
    let cutoff = jql::cutoff_date(today, config.board.recent_days);
    debug!("Recency cutoff: {}", cutoff);

    let jobs = config
        .engineers
        .iter()
        .map(|identifier| evaluate_engineer(tracker, config, sprint_id, cutoff, identifier));
    let mut pending = stream::iter(jobs).buffered(config.network.concurrency);

    let mut reports = Vec::with_capacity(config.engineers.len());
    let interrupt = tokio::signal::ctrl_c();
    tokio::pin!(interrupt);

    loop {
        tokio::select! {
            next = pending.next() => match next {
                Some(report) => reports.push(report),
                None => break,
            },
            _ = &mut interrupt => {
                warn!(
                    "Interrupted; report truncated to {} of {} engineers",
                    reports.len(),
                    config.engineers.len()
                );
                break;
            }
        }
    }

    Ok(SprintReport {
        sprint: found,
        engineer_reports: reports,
    })
}

/// Evaluates one engineer: resolve the identity, build the filter, run the
/// search. Every failure path produces a report entry rather than an error.
async fn evaluate_engineer<T: Tracker>(
    tracker: &T,
    config: &Config,
    sprint_id: u64,
    cutoff: NaiveDate,
    identifier: &str,
) -> EngineerReport {
    let resolved = match identity::resolve(tracker, identifier).await {
        Ok(resolved) => resolved,
        Err(error) => {
            warn!("Engineer \"{}\": {}", identifier, error);
            return EngineerReport::failed(identifier, identifier, error);
        }
    };

    let filter = jql::build_issue_filter(
        &config.board.project_key,
        sprint_id,
        &resolved.account_id,
        cutoff,
    );
    debug!("Filter for \"{}\": {}", resolved.display_name, filter);

    match search::execute(
        tracker,
        &filter,
        config.network.max_results,
        &config.jira.base_url,
    )
    .await
    {
        Ok(issues) => EngineerReport::resolved(resolved, issues),
        Err(error) => {
            warn!("Engineer \"{}\": {}", identifier, error);
            EngineerReport::failed(identifier, &resolved.display_name, error)
        }
    }
}
