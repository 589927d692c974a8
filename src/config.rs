//! Configuration file handling.
//!
//! This module loads `sprintscope.toml` into a strongly-typed structure
//! and validates it before any network activity. Validation collects every
//! problem it finds so a single run reports them all.

use crate::cli::Args;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Engineers to report on. Report order follows this order.
    pub engineers: Vec<String>,

    /// Tracker connection settings.
    pub jira: JiraConfig,

    /// Board and recency-window settings.
    pub board: BoardConfig,

    /// Network tuning.
    #[serde(default)]
    pub network: NetworkConfig,
}

/// Tracker connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JiraConfig {
    /// Base URL of the Jira site, e.g. `https://example.atlassian.net`.
    /// A trailing slash is trimmed on load.
    pub base_url: String,

    /// Account email for basic auth.
    pub email: String,

    /// API token for basic auth. May also come from the `JIRA_API_TOKEN`
    /// environment variable or `--api-token`, which take precedence.
    #[serde(default)]
    pub api_token: String,
}

/// Board and recency-window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Project key issues are filtered to, e.g. `PROJ`.
    pub project_key: String,

    /// Numeric id of the board whose active sprint is reported.
    pub board_id: u64,

    /// Recency window in days. Issues in a terminal state are still
    /// reported if updated within this many days; 0 means today only.
    pub recent_days: u32,
}

/// Network tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Number of engineers queried concurrently.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Maximum issues fetched per engineer. Results beyond the cap are
    /// silently truncated; there is no pagination.
    #[serde(default = "default_max_results")]
    pub max_results: u32,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            concurrency: default_concurrency(),
            max_results: default_max_results(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_concurrency() -> usize {
    4
}

fn default_max_results() -> u32 {
    100
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError(format!(
                "failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let mut config: Config = toml::from_str(&content).map_err(|e| {
            ConfigError(format!(
                "failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        config.jira.base_url = config.jira.base_url.trim_end_matches('/').to_string();
        Ok(config)
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings; only
    /// explicitly provided values override.
    pub fn merge_with_args(&mut self, args: &Args) {
        if let Some(ref token) = args.api_token {
            self.jira.api_token = token.clone();
        }
        if let Some(recent_days) = args.recent_days {
            self.board.recent_days = recent_days;
        }
        if let Some(max_results) = args.max_results {
            self.network.max_results = max_results;
        }
        if let Some(concurrency) = args.concurrency {
            self.network.concurrency = concurrency;
        }
        if let Some(timeout) = args.timeout {
            self.network.timeout_seconds = timeout;
        }
    }

    /// Validate the merged configuration, collecting every problem.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut problems = Vec::new();

        if !self.jira.base_url.starts_with("http://")
            && !self.jira.base_url.starts_with("https://")
        {
            problems.push("jira.base_url must start with 'http://' or 'https://'".to_string());
        }
        if self.jira.email.trim().is_empty() {
            problems.push("jira.email must not be empty".to_string());
        }
        if self.jira.api_token.trim().is_empty() {
            problems.push(
                "jira.api_token must be set (config file, JIRA_API_TOKEN, or --api-token)"
                    .to_string(),
            );
        }
        if self.board.project_key.trim().is_empty() {
            problems.push("board.project_key must not be empty".to_string());
        }
        if self.engineers.is_empty() {
            problems.push("engineers must list at least one identifier".to_string());
        }
        if self.engineers.iter().any(|e| e.trim().is_empty()) {
            problems.push("engineers must not contain blank identifiers".to_string());
        }
        if self.network.timeout_seconds == 0 {
            problems.push("network.timeout_seconds must be at least 1".to_string());
        }
        if self.network.concurrency == 0 {
            problems.push("network.concurrency must be at least 1".to_string());
        }
        if self.network.max_results == 0 {
            problems.push("network.max_results must be at least 1".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError(problems.join("; ")))
        }
    }

    /// Starter configuration file content for `--init-config`.
    pub fn scaffold_toml() -> &'static str {
        r#"# sprintscope configuration

# Engineers to report on, in report order. Emails or display names.
engineers = [
    "alice@example.com",
    "Bob Byrne",
]

[jira]
base_url = "https://example.atlassian.net"
email = "me@example.com"
# Prefer the JIRA_API_TOKEN environment variable over storing the token here.
api_token = ""

[board]
project_key = "PROJ"
board_id = 42
# Finished issues updated within this many days are still reported.
recent_days = 7

[network]
timeout_seconds = 30
concurrency = 4
# Issues per engineer beyond this cap are silently dropped (no pagination).
max_results = 100
"#
    }
}
