//! Issue search execution.

use crate::error::EngineerError;
use crate::jira::Tracker;
use crate::models::IssueSummary;

/// Runs a built filter query and returns matching issue summaries.
///
/// Only the issue key is fetched; browse URLs are derived from it. Results
/// keep the tracker's order. Anything beyond `max_results` is silently
/// truncated; there is no pagination loop.
pub async fn execute<T: Tracker>(
    tracker: &T,
    jql: &str,
    max_results: u32,
    base_url: &str,
) -> Result<Vec<IssueSummary>, EngineerError> {
    let refs = tracker
        .search_issue_keys(jql, max_results)
        .await
        .map_err(|e| EngineerError::SearchFailed(e.to_string()))?;

    Ok(refs
        .into_iter()
        .map(|issue| IssueSummary::new(base_url, &issue.key))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use crate::jira::types::{IssueRef, UserMatch};
    use crate::models::{Sprint, SprintState};

    struct FakeIndex {
        keys: Result<Vec<&'static str>, ()>,
    }

    impl Tracker for FakeIndex {
        async fn sprints_in_state(
            &self,
            _board_id: u64,
            _state: SprintState,
        ) -> Result<Vec<Sprint>, TransportError> {
            unimplemented!("not used by the executor")
        }

        async fn search_users(
            &self,
            _query: &str,
            _max_results: u32,
        ) -> Result<Vec<UserMatch>, TransportError> {
            unimplemented!("not used by the executor")
        }

        async fn search_issue_keys(
            &self,
            _jql: &str,
            _max_results: u32,
        ) -> Result<Vec<IssueRef>, TransportError> {
            match &self.keys {
                Ok(keys) => Ok(keys
                    .iter()
                    .map(|key| IssueRef {
                        key: (*key).to_string(),
                    })
                    .collect()),
                Err(()) => Err(TransportError::Status {
                    status: 500,
                    body: "oops".to_string(),
                }),
            }
        }
    }

    #[tokio::test]
    async fn test_execute_derives_urls_in_tracker_order() {
        let tracker = FakeIndex {
            keys: Ok(vec!["PROJ-2", "PROJ-1"]),
        };

        let issues = execute(&tracker, "project = \"PROJ\"", 100, "https://j.example")
            .await
            .unwrap();

        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].url, "https://j.example/browse/PROJ-2");
        assert_eq!(issues[1].url, "https://j.example/browse/PROJ-1");
    }

    #[tokio::test]
    async fn test_execute_empty_result() {
        let tracker = FakeIndex { keys: Ok(vec![]) };

        let issues = execute(&tracker, "project = \"PROJ\"", 100, "https://j.example")
            .await
            .unwrap();
        assert!(issues.is_empty());
    }

    #[tokio::test]
    async fn test_execute_transport_failure_is_search_failed() {
        let tracker = FakeIndex { keys: Err(()) };

        let err = execute(&tracker, "project = \"PROJ\"", 100, "https://j.example")
            .await
            .unwrap_err();
        assert!(matches!(err, EngineerError::SearchFailed(_)));
    }
}
