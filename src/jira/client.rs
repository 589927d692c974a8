//! Jira REST client.
//!
//! One `reqwest::Client` is built per run and shared across all calls:
//! basic auth with the configured email and API token, a bounded request
//! timeout, and connection reuse.

use crate::config::JiraConfig;
use crate::error::TransportError;
use crate::jira::types::{IssuePage, IssueRef, SprintPage, UserMatch};
use crate::jira::Tracker;
use crate::models::{Sprint, SprintState};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Client for the tracker's REST API.
pub struct JiraClient {
    http: reqwest::Client,
    base_url: String,
    email: String,
    api_token: String,
    timeout_seconds: u64,
}

impl JiraClient {
    /// Creates a client with the given credential and request timeout.
    pub fn new(jira: &JiraConfig, timeout_seconds: u64) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: jira.base_url.clone(),
            email: jira.email.clone(),
            api_token: jira.api_token.clone(),
            timeout_seconds,
        }
    }

    /// Issues an authenticated GET and decodes the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, TransportError> {
        debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .basic_auth(&self.email, Some(&self.api_token))
            .header(reqwest::header::ACCEPT, "application/json")
            .query(query)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status { status, body });
        }

        response.json::<T>().await.map_err(|e| TransportError::Decode {
            message: e.to_string(),
        })
    }

    fn classify(&self, error: reqwest::Error) -> TransportError {
        if error.is_timeout() {
            TransportError::Timeout {
                seconds: self.timeout_seconds,
            }
        } else if error.is_connect() {
            TransportError::Connect {
                url: self.base_url.clone(),
            }
        } else {
            TransportError::Other {
                message: error.to_string(),
            }
        }
    }
}

impl Tracker for JiraClient {
    async fn sprints_in_state(
        &self,
        board_id: u64,
        state: SprintState,
    ) -> Result<Vec<Sprint>, TransportError> {
        let url = format!("{}/rest/agile/1.0/board/{}/sprint", self.base_url, board_id);
        let page: SprintPage = self
            .get_json(&url, &[("state", state.as_str().to_string())])
            .await?;
        Ok(page.values)
    }

    async fn search_users(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<UserMatch>, TransportError> {
        let url = format!("{}/rest/api/3/user/search", self.base_url);
        self.get_json(
            &url,
            &[
                ("query", query.to_string()),
                ("maxResults", max_results.to_string()),
            ],
        )
        .await
    }

    async fn search_issue_keys(
        &self,
        jql: &str,
        max_results: u32,
    ) -> Result<Vec<IssueRef>, TransportError> {
        let url = format!("{}/rest/api/3/search", self.base_url);
        let page: IssuePage = self
            .get_json(
                &url,
                &[
                    ("jql", jql.to_string()),
                    ("fields", "key".to_string()),
                    ("maxResults", max_results.to_string()),
                ],
            )
            .await?;
        Ok(page.issues)
    }
}
