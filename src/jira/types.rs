//! Wire types for the tracker's REST responses.
//!
//! Only the fields this tool reads are modeled; everything else in the
//! payloads is ignored on deserialization.

use crate::models::Sprint;
use serde::Deserialize;

/// One page of sprints from the board sprint listing.
#[derive(Debug, Deserialize)]
pub struct SprintPage {
    #[serde(default)]
    pub values: Vec<Sprint>,
}

/// A single match from the identity search. The endpoint returns a bare
/// JSON array of these.
#[derive(Debug, Clone, Deserialize)]
pub struct UserMatch {
    #[serde(rename = "accountId")]
    pub account_id: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
}

/// One page of issues from the issue search.
#[derive(Debug, Deserialize)]
pub struct IssuePage {
    #[serde(default)]
    pub issues: Vec<IssueRef>,
}

/// An issue reference carrying only the key field we request.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueRef {
    pub key: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SprintState;

    #[test]
    fn test_sprint_page_ignores_extra_fields() {
        let json = r#"{
            "maxResults": 50,
            "isLast": true,
            "values": [
                {"id": 7, "self": "https://j/rest/agile/1.0/sprint/7",
                 "state": "active", "name": "Sprint 42", "goal": ""}
            ]
        }"#;

        let page: SprintPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.values.len(), 1);
        assert_eq!(page.values[0].id, 7);
        assert_eq!(page.values[0].name, "Sprint 42");
        assert_eq!(page.values[0].state, SprintState::Active);
    }

    #[test]
    fn test_user_match_renames() {
        let json = r#"[{"accountId": "abc", "displayName": "Alice A.", "active": true}]"#;
        let matches: Vec<UserMatch> = serde_json::from_str(json).unwrap();
        assert_eq!(matches[0].account_id, "abc");
        assert_eq!(matches[0].display_name, "Alice A.");
    }

    #[test]
    fn test_issue_page_defaults_to_empty() {
        let page: IssuePage = serde_json::from_str("{\"total\": 0}").unwrap();
        assert!(page.issues.is_empty());
    }
}
