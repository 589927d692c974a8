//! Active sprint location.

use crate::error::RunError;
use crate::jira::Tracker;
use crate::models::{Sprint, SprintState};
use tracing::{info, warn};

/// Finds the single active sprint for `board_id`.
///
/// Zero active sprints is fatal: no per-engineer work is meaningful
/// without one. If the tracker reports more than one, the first returned
/// wins; the tie-break is logged, not silent.
pub async fn locate<T: Tracker>(tracker: &T, board_id: u64) -> Result<Sprint, RunError> {
    let sprints = tracker
        .sprints_in_state(board_id, SprintState::Active)
        .await
        .map_err(RunError::TrackerUnavailable)?;

    let mut sprints = sprints.into_iter();
    let Some(sprint) = sprints.next() else {
        return Err(RunError::SprintNotFound { board_id });
    };

    let skipped = sprints.count();
    if skipped > 0 {
        warn!(
            "Board {} reports {} additional active sprint(s); using \"{}\" (first returned)",
            board_id, skipped, sprint.name
        );
    }

    info!("Active sprint: \"{}\" (id {})", sprint.name, sprint.id);
    Ok(sprint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use crate::jira::types::{IssueRef, UserMatch};

    struct FakeBoard {
        sprints: Result<Vec<Sprint>, ()>,
    }

    impl Tracker for FakeBoard {
        async fn sprints_in_state(
            &self,
            _board_id: u64,
            _state: SprintState,
        ) -> Result<Vec<Sprint>, TransportError> {
            match &self.sprints {
                Ok(sprints) => Ok(sprints.clone()),
                Err(()) => Err(TransportError::Connect {
                    url: "https://j.example".to_string(),
                }),
            }
        }

        async fn search_users(
            &self,
            _query: &str,
            _max_results: u32,
        ) -> Result<Vec<UserMatch>, TransportError> {
            unimplemented!("not used by the locator")
        }

        async fn search_issue_keys(
            &self,
            _jql: &str,
            _max_results: u32,
        ) -> Result<Vec<IssueRef>, TransportError> {
            unimplemented!("not used by the locator")
        }
    }

    fn sprint(id: u64, name: &str) -> Sprint {
        Sprint {
            id,
            name: name.to_string(),
            state: SprintState::Active,
        }
    }

    #[tokio::test]
    async fn test_locate_single_active_sprint() {
        let tracker = FakeBoard {
            sprints: Ok(vec![sprint(7, "Sprint 42")]),
        };

        let found = locate(&tracker, 1).await.unwrap();
        assert_eq!(found.id, 7);
        assert_eq!(found.name, "Sprint 42");
    }

    #[tokio::test]
    async fn test_locate_picks_first_of_many() {
        let tracker = FakeBoard {
            sprints: Ok(vec![sprint(7, "Sprint 42"), sprint(8, "Sprint 43")]),
        };

        let found = locate(&tracker, 1).await.unwrap();
        assert_eq!(found.id, 7);
    }

    #[tokio::test]
    async fn test_locate_zero_sprints_is_not_found() {
        let tracker = FakeBoard { sprints: Ok(vec![]) };

        let err = locate(&tracker, 42).await.unwrap_err();
        assert!(matches!(err, RunError::SprintNotFound { board_id: 42 }));
    }

    #[tokio::test]
    async fn test_locate_transport_failure_is_unavailable() {
        let tracker = FakeBoard { sprints: Err(()) };

        let err = locate(&tracker, 1).await.unwrap_err();
        assert!(matches!(err, RunError::TrackerUnavailable(_)));
    }
}
